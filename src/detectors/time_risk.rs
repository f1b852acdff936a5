use super::Detector;
use crate::context::BookingContext;
use crate::flags::{Flag, FlagKind, Severity};
use serde_json::json;

/// Bookings placed right on top of check-in, where a stolen card would be
/// spent before anyone can react.
pub struct TimeRiskDetector;

impl Detector for TimeRiskDetector {
    fn name(&self) -> &'static str {
        "time_risk"
    }

    fn evaluate(&self, ctx: &BookingContext) -> Option<Flag> {
        let booking = &ctx.booking;

        if booking.hours_to_check_in < 2.0 {
            return Some(Flag::new(
                FlagKind::ImmediateCheckin,
                Severity::High,
                "Check-in is less than two hours away",
                json!({ "hours_to_check_in": booking.hours_to_check_in }),
            ));
        }

        if booking.last_minute && booking.amount > 2000.0 {
            return Some(Flag::new(
                FlagKind::LastMinuteHighValue,
                Severity::Medium,
                "High-value booking placed within a day of check-in",
                json!({ "amount": booking.amount }),
            ));
        }

        None
    }
}
