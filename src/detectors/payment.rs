use super::Detector;
use crate::context::BookingContext;
use crate::flags::{Flag, FlagKind, Severity};
use serde_json::json;

/// Payment-instrument trouble: repeated declines, retry storms, and card
/// country not matching the billing address.
pub struct PaymentRiskDetector;

impl Detector for PaymentRiskDetector {
    fn name(&self) -> &'static str {
        "payment"
    }

    fn evaluate(&self, ctx: &BookingContext) -> Option<Flag> {
        let payment = &ctx.payment;

        if payment.prior_declines > 2 {
            return Some(Flag::new(
                FlagKind::MultiplePaymentDeclines,
                Severity::Critical,
                "Guest has repeated declined payments on record",
                json!({ "prior_declines": payment.prior_declines }),
            ));
        }

        if payment.attempts > 3 {
            return Some(Flag::new(
                FlagKind::MultiplePaymentAttempts,
                Severity::High,
                "Multiple payment attempts for this booking",
                json!({ "attempts": payment.attempts }),
            ));
        }

        if let (Some(card), Some(billing)) = (&payment.card_country, &payment.billing_country) {
            if card != billing {
                return Some(Flag::new(
                    FlagKind::CountryMismatch,
                    Severity::Medium,
                    "Card-issuing country differs from billing country",
                    json!({ "card_country": card, "billing_country": billing }),
                ));
            }
        }

        None
    }
}
