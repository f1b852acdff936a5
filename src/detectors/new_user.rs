use super::Detector;
use crate::context::{BookingContext, VerificationStatus};
use crate::flags::{Flag, FlagKind, Severity};
use serde_json::json;

/// Fresh accounts placing money on the table before they have a history.
pub struct NewUserDetector;

impl Detector for NewUserDetector {
    fn name(&self) -> &'static str {
        "new_user"
    }

    fn evaluate(&self, ctx: &BookingContext) -> Option<Flag> {
        let age_days = ctx.guest_account_age_days();

        if age_days < 1 && ctx.booking.amount > 500.0 {
            return Some(Flag::new(
                FlagKind::NewUserHighValue,
                Severity::High,
                "Account registered less than a day before a high-value booking",
                json!({
                    "account_age_days": age_days,
                    "amount": ctx.booking.amount,
                }),
            ));
        }

        if age_days < 7 && ctx.guest.verification == VerificationStatus::Unverified {
            return Some(Flag::new(
                FlagKind::NewUnverifiedUser,
                Severity::Medium,
                "Unverified account registered within the last week",
                json!({
                    "account_age_days": age_days,
                }),
            ));
        }

        None
    }
}
