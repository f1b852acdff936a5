use super::Detector;
use crate::context::BookingContext;
use crate::flags::{Flag, FlagKind, Severity};
use serde_json::json;
use std::collections::HashSet;

/// Account behavior that does not fit a first-time traveller: a debut
/// booking at an unusual price, or an address from a throwaway provider.
pub struct BehaviorRiskDetector {
    disposable_domains: HashSet<String>,
}

impl BehaviorRiskDetector {
    pub fn new(domains: &[String]) -> Self {
        Self {
            disposable_domains: domains.iter().map(|d| d.to_ascii_lowercase()).collect(),
        }
    }
}

impl Detector for BehaviorRiskDetector {
    fn name(&self) -> &'static str {
        "behavior"
    }

    fn evaluate(&self, ctx: &BookingContext) -> Option<Flag> {
        if ctx.guest.prior_bookings == 0 && ctx.booking.amount > 1500.0 {
            return Some(Flag::new(
                FlagKind::FirstBookingHighValue,
                Severity::Medium,
                "First-ever booking is high value",
                json!({ "amount": ctx.booking.amount }),
            ));
        }

        if let Some(domain) = ctx.guest_email_domain() {
            let domain = domain.to_ascii_lowercase();
            if self.disposable_domains.contains(&domain) {
                return Some(Flag::new(
                    FlagKind::DisposableEmail,
                    Severity::High,
                    "Guest email uses a disposable-address provider",
                    json!({ "domain": domain }),
                ));
            }
        }

        None
    }
}
