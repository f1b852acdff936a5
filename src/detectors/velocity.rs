use super::Detector;
use crate::context::BookingContext;
use crate::flags::Flag;

/// Burst-booking detection. Not implemented: it needs the guest's
/// historical booking timeline, which the snapshot does not carry, so this
/// detector never fires and the engine under-detects velocity abuse until
/// it is wired to real history.
pub struct VelocityDetector;

impl Detector for VelocityDetector {
    fn name(&self) -> &'static str {
        "velocity"
    }

    fn evaluate(&self, _ctx: &BookingContext) -> Option<Flag> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::clean_context;

    #[test]
    fn stub_never_fires() {
        let mut ctx = clean_context();
        // Even a context every other detector would flag yields nothing here.
        ctx.booking.amount = 9999.99;
        ctx.payment.prior_declines = 10;
        assert!(VelocityDetector.evaluate(&ctx).is_none());
    }
}
