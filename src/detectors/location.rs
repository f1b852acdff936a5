use super::Detector;
use crate::context::BookingContext;
use crate::flags::{Flag, FlagKind, Severity};
use serde_json::json;

/// Guest IP against the configured high-risk prefix list.
///
/// The default list reproduces the private/loopback ranges the engine
/// historically shipped with; see the note on `EngineConfig`.
pub struct LocationRiskDetector {
    prefixes: Vec<String>,
}

impl LocationRiskDetector {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }
}

impl Detector for LocationRiskDetector {
    fn name(&self) -> &'static str {
        "location"
    }

    fn evaluate(&self, ctx: &BookingContext) -> Option<Flag> {
        let ip = ctx.guest.ip_address.as_deref()?;

        let prefix = self.prefixes.iter().find(|p| ip.starts_with(p.as_str()))?;
        Some(Flag::new(
            FlagKind::HighRiskIp,
            Severity::Medium,
            "Guest IP matches a high-risk prefix",
            json!({ "ip_address": ip, "prefix": prefix }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::test_support::clean_context;

    fn detector() -> LocationRiskDetector {
        LocationRiskDetector::new(EngineConfig::default().high_risk_ip_prefixes)
    }

    #[test]
    fn listed_prefix_fires_medium() {
        let mut ctx = clean_context();
        ctx.guest.ip_address = Some("192.168.4.20".to_string());

        let flag = detector().evaluate(&ctx).unwrap();
        assert_eq!(flag.kind, FlagKind::HighRiskIp);
        assert_eq!(flag.severity, Severity::Medium);
        assert_eq!(flag.evidence["prefix"], "192.168.");
    }

    #[test]
    fn public_address_stays_quiet() {
        let ctx = clean_context();
        assert!(detector().evaluate(&ctx).is_none());
    }

    #[test]
    fn absent_ip_suppresses_the_check() {
        let mut ctx = clean_context();
        ctx.guest.ip_address = None;
        assert!(detector().evaluate(&ctx).is_none());
    }

    #[test]
    fn prefix_match_is_literal_not_partial_octet() {
        // 10.01.x would match "10.0." as a string prefix; 103.x must not.
        let mut ctx = clean_context();
        ctx.guest.ip_address = Some("103.0.5.9".to_string());
        assert!(detector().evaluate(&ctx).is_none());
    }

    #[test]
    fn custom_prefix_list_is_honored() {
        let det = LocationRiskDetector::new(vec!["203.0.113.".to_string()]);
        let mut ctx = clean_context();
        ctx.guest.ip_address = Some("203.0.113.46".to_string());
        assert!(det.evaluate(&ctx).is_some());
    }
}
