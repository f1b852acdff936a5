use super::Detector;
use crate::context::BookingContext;
use crate::flags::{Flag, FlagKind, Severity};
use serde_json::json;

/// Prices far off the market for comparable listings, plus the
/// conspicuously round totals typical of laundering setups.
pub struct PricingAnomalyDetector;

impl PricingAnomalyDetector {
    /// Multiple-of-100 test on the amount in cents, so 4900.00 counts and
    /// 4900.01 does not regardless of float representation.
    fn is_round_hundred(amount: f64) -> bool {
        let cents = (amount * 100.0).round() as i64;
        cents % 10_000 == 0
    }
}

impl Detector for PricingAnomalyDetector {
    fn name(&self) -> &'static str {
        "pricing"
    }

    fn evaluate(&self, ctx: &BookingContext) -> Option<Flag> {
        let booking = &ctx.booking;
        let market = ctx.property.average_nightly_price;

        // Zero market price would be a degenerate denominator; skip the ratio.
        if market > 0.0 {
            let ratio = booking.price_per_night / market;
            if ratio > 3.0 {
                return Some(Flag::new(
                    FlagKind::PriceSignificantlyAboveMarket,
                    Severity::High,
                    "Nightly price is several times the market average",
                    json!({
                        "price_per_night": booking.price_per_night,
                        "market_average": market,
                        "ratio": ratio,
                    }),
                ));
            }
        }

        if Self::is_round_hundred(booking.amount) && booking.amount > 1000.0 {
            return Some(Flag::new(
                FlagKind::SuspiciousRoundPricing,
                Severity::Low,
                "Large booking total is a round multiple of 100",
                json!({ "amount": booking.amount }),
            ));
        }

        None
    }
}
