use super::Detector;
use crate::context::BookingContext;
use crate::flags::{Flag, FlagKind, Severity};
use regex::Regex;
use serde_json::json;

/// Device fingerprints that look automated or degenerate. Marker patterns
/// come from configuration and are compiled once when the engine is built.
pub struct DeviceRiskDetector {
    markers: Vec<Regex>,
    min_length: usize,
}

impl DeviceRiskDetector {
    pub fn new(patterns: &[String], min_length: usize) -> anyhow::Result<Self> {
        let markers = patterns
            .iter()
            .map(|p| Regex::new(&format!("(?i){p}")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            markers,
            min_length,
        })
    }
}

impl Detector for DeviceRiskDetector {
    fn name(&self) -> &'static str {
        "device"
    }

    fn evaluate(&self, ctx: &BookingContext) -> Option<Flag> {
        let fingerprint = ctx.guest.device_fingerprint.as_deref()?;

        if let Some(marker) = self.markers.iter().find(|m| m.is_match(fingerprint)) {
            return Some(Flag::new(
                FlagKind::HighRiskDevice,
                Severity::Medium,
                "Device fingerprint carries an automation marker",
                json!({ "fingerprint": fingerprint, "marker": marker.as_str() }),
            ));
        }

        if fingerprint.len() < self.min_length {
            return Some(Flag::new(
                FlagKind::HighRiskDevice,
                Severity::Medium,
                "Device fingerprint is too short to be genuine",
                json!({ "fingerprint": fingerprint, "length": fingerprint.len() }),
            ));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::test_support::clean_context;

    fn detector() -> DeviceRiskDetector {
        let config = EngineConfig::default();
        DeviceRiskDetector::new(&config.device_marker_patterns, config.min_fingerprint_length)
            .unwrap()
    }

    #[test]
    fn automation_marker_fires_medium() {
        let mut ctx = clean_context();
        ctx.guest.device_fingerprint = Some("headless-chrome-119.0-x86_64".to_string());

        let flag = detector().evaluate(&ctx).unwrap();
        assert_eq!(flag.kind, FlagKind::HighRiskDevice);
        assert_eq!(flag.severity, Severity::Medium);
    }

    #[test]
    fn marker_match_is_case_insensitive() {
        let mut ctx = clean_context();
        ctx.guest.device_fingerprint = Some("EMULATOR-pixel7-arm64-build".to_string());
        assert!(detector().evaluate(&ctx).is_some());
    }

    #[test]
    fn degenerate_short_fingerprint_fires() {
        let mut ctx = clean_context();
        ctx.guest.device_fingerprint = Some("abc123".to_string());

        let flag = detector().evaluate(&ctx).unwrap();
        assert_eq!(flag.evidence["length"], 6);
    }

    #[test]
    fn absent_fingerprint_suppresses_the_check() {
        let mut ctx = clean_context();
        ctx.guest.device_fingerprint = None;
        assert!(detector().evaluate(&ctx).is_none());
    }

    #[test]
    fn ordinary_fingerprint_stays_quiet() {
        let ctx = clean_context();
        assert!(detector().evaluate(&ctx).is_none());
    }

    #[test]
    fn invalid_marker_pattern_is_a_constructor_error() {
        let result = DeviceRiskDetector::new(&["(unclosed".to_string()], 10);
        assert!(result.is_err());
    }
}
