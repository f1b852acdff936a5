use super::Detector;
use crate::context::BookingContext;
use crate::flags::{Flag, FlagKind, Severity};
use serde_json::json;

/// Stay shapes that correlate with card-testing and party bookings:
/// expensive one-night stays, a lone guest on a big spend, and guests who
/// cancel most of what they book.
pub struct BookingPatternDetector;

impl Detector for BookingPatternDetector {
    fn name(&self) -> &'static str {
        "booking_pattern"
    }

    fn evaluate(&self, ctx: &BookingContext) -> Option<Flag> {
        let booking = &ctx.booking;

        if booking.nights == 1 && booking.amount > 1000.0 {
            return Some(Flag::new(
                FlagKind::HighValueSingleNight,
                Severity::Medium,
                "High-value booking for a single night",
                json!({ "amount": booking.amount, "nights": booking.nights }),
            ));
        }

        // Zero guests would be a degenerate denominator; skip the ratio.
        if booking.guest_count > 0 {
            let per_guest = booking.amount / booking.guest_count as f64;
            if per_guest > 500.0 && booking.guest_count == 1 {
                return Some(Flag::new(
                    FlagKind::HighValueSingleGuest,
                    Severity::Medium,
                    "Single guest on a high-value booking",
                    json!({ "amount_per_guest": per_guest }),
                ));
            }
        }

        if ctx.guest.cancellation_rate > 0.5 && ctx.guest.prior_bookings > 3 {
            return Some(Flag::new(
                FlagKind::HighCancellationRate,
                Severity::High,
                "Guest cancels the majority of their bookings",
                json!({
                    "cancellation_rate": ctx.guest.cancellation_rate,
                    "prior_bookings": ctx.guest.prior_bookings,
                }),
            ));
        }

        None
    }
}
