use super::Detector;
use crate::context::BookingContext;
use crate::flags::{Flag, FlagKind, Severity};
use serde_json::json;

/// Listings run by a host profile that looks like a throwaway: one
/// property, poorly rated, rarely responding.
pub struct HostRiskDetector;

impl Detector for HostRiskDetector {
    fn name(&self) -> &'static str {
        "host_risk"
    }

    fn evaluate(&self, ctx: &BookingContext) -> Option<Flag> {
        let host = &ctx.host;

        if host.property_count == 1 && host.rating < 3.0 && host.response_rate < 0.5 {
            return Some(Flag::new(
                FlagKind::HighRiskHost,
                Severity::Medium,
                "Single-listing host with poor rating and low responsiveness",
                json!({
                    "property_count": host.property_count,
                    "rating": host.rating,
                    "response_rate": host.response_rate,
                }),
            ));
        }

        None
    }
}
