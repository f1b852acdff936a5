//! Risk indicator and result types.

use serde::{Deserialize, Serialize};

/// Ordinal severity of a single indicator: low < medium < high < critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Contribution of one flag of this severity to the aggregate score.
    pub fn weight(self) -> u32 {
        match self {
            Severity::Low => 10,
            Severity::Medium => 25,
            Severity::High => 40,
            Severity::Critical => 60,
        }
    }
}

/// Stable identifier for each indicator a detector can raise. Serialized
/// as the snake_case key downstream tooling matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    NewUserHighValue,
    NewUnverifiedUser,
    MultiplePaymentDeclines,
    MultiplePaymentAttempts,
    CountryMismatch,
    HighValueSingleNight,
    HighValueSingleGuest,
    HighCancellationRate,
    PriceSignificantlyAboveMarket,
    SuspiciousRoundPricing,
    ImmediateCheckin,
    LastMinuteHighValue,
    HighRiskIp,
    FirstBookingHighValue,
    DisposableEmail,
    HighRiskHost,
    HighRiskDevice,
}

impl FlagKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FlagKind::NewUserHighValue => "new_user_high_value",
            FlagKind::NewUnverifiedUser => "new_unverified_user",
            FlagKind::MultiplePaymentDeclines => "multiple_payment_declines",
            FlagKind::MultiplePaymentAttempts => "multiple_payment_attempts",
            FlagKind::CountryMismatch => "country_mismatch",
            FlagKind::HighValueSingleNight => "high_value_single_night",
            FlagKind::HighValueSingleGuest => "high_value_single_guest",
            FlagKind::HighCancellationRate => "high_cancellation_rate",
            FlagKind::PriceSignificantlyAboveMarket => "price_significantly_above_market",
            FlagKind::SuspiciousRoundPricing => "suspicious_round_pricing",
            FlagKind::ImmediateCheckin => "immediate_checkin",
            FlagKind::LastMinuteHighValue => "last_minute_high_value",
            FlagKind::HighRiskIp => "high_risk_ip",
            FlagKind::FirstBookingHighValue => "first_booking_high_value",
            FlagKind::DisposableEmail => "disposable_email",
            FlagKind::HighRiskHost => "high_risk_host",
            FlagKind::HighRiskDevice => "high_risk_device",
        }
    }
}

/// One triggered indicator with the evidence that backs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flag {
    pub kind: FlagKind,
    pub severity: Severity,
    pub description: String,
    /// Structured audit payload; contents vary per indicator.
    pub evidence: serde_json::Value,
}

impl Flag {
    pub fn new(
        kind: FlagKind,
        severity: Severity,
        description: impl Into<String>,
        evidence: serde_json::Value,
    ) -> Self {
        Flag {
            kind,
            severity,
            description: description.into(),
            evidence,
        }
    }
}

/// Four-way classification of the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskTier {
    /// Tier boundaries on the capped score.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 95 => RiskTier::Critical,
            s if s >= 80 => RiskTier::High,
            s if s >= 60 => RiskTier::Medium,
            _ => RiskTier::Low,
        }
    }
}

/// Suggested handling action for the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Approve,
    Review,
    Hold,
    Reject,
}

/// Immutable outcome of one analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Aggregate risk score, capped at 100.
    pub score: u32,
    pub tier: RiskTier,
    /// Flags in detector-evaluation order. The order is reproducible, not
    /// a significance ranking.
    pub flags: Vec<Flag>,
    pub recommendation: Recommendation,
    /// How much signal the engine had to work with, in [0.10, 1.00].
    pub confidence: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering_and_weights() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);

        assert_eq!(Severity::Low.weight(), 10);
        assert_eq!(Severity::Medium.weight(), 25);
        assert_eq!(Severity::High.weight(), 40);
        assert_eq!(Severity::Critical.weight(), 60);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(RiskTier::from_score(0), RiskTier::Low);
        assert_eq!(RiskTier::from_score(59), RiskTier::Low);
        assert_eq!(RiskTier::from_score(60), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(79), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(80), RiskTier::High);
        assert_eq!(RiskTier::from_score(94), RiskTier::High);
        assert_eq!(RiskTier::from_score(95), RiskTier::Critical);
        assert_eq!(RiskTier::from_score(100), RiskTier::Critical);
    }

    #[test]
    fn flag_kind_serializes_to_stable_key() {
        let json = serde_json::to_string(&FlagKind::MultiplePaymentDeclines).unwrap();
        assert_eq!(json, "\"multiple_payment_declines\"");
        assert_eq!(
            FlagKind::PriceSignificantlyAboveMarket.as_str(),
            "price_significantly_above_market"
        );
    }

    #[test]
    fn flag_serialization_round_trip() {
        let flag = Flag::new(
            FlagKind::HighRiskIp,
            Severity::Medium,
            "IP address matches a high-risk prefix",
            serde_json::json!({ "ip_address": "10.0.3.7", "prefix": "10.0." }),
        );
        let json = serde_json::to_string(&flag).unwrap();
        let back: Flag = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, FlagKind::HighRiskIp);
        assert_eq!(back.severity, Severity::Medium);
        assert_eq!(back.evidence["prefix"], "10.0.");
    }
}
