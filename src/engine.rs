//! The analysis pipeline: run every detector over the snapshot, aggregate
//! severity weights, classify, estimate confidence, and pick a
//! recommendation.

use crate::config::EngineConfig;
use crate::context::BookingContext;
use crate::detectors::{self, Detector};
use crate::error::EngineError;
use crate::flags::{AnalysisResult, Flag, Recommendation, RiskTier, Severity};

const BASE_CONFIDENCE: f32 = 0.70;
const MIN_CONFIDENCE: f32 = 0.10;
const MAX_CONFIDENCE: f32 = 1.00;
const SCORE_CAP: u32 = 100;

/// Stateless scoring engine. Holds only the detector set built from its
/// configuration; every `analyze` call reads one snapshot and allocates
/// one result, so a single engine can be shared across threads freely.
pub struct RiskEngine {
    detectors: Vec<Box<dyn Detector>>,
}

impl RiskEngine {
    pub fn new(config: EngineConfig) -> anyhow::Result<Self> {
        let detectors = detectors::default_set(&config)?;
        Ok(RiskEngine { detectors })
    }

    /// Run one full analysis. The only failure mode is a malformed
    /// snapshot; absent optional fields just keep the dependent detectors
    /// quiet.
    pub fn analyze(&self, ctx: &BookingContext) -> Result<AnalysisResult, EngineError> {
        ctx.validate()?;

        let mut flags = Vec::new();
        for detector in &self.detectors {
            match detector.evaluate(ctx) {
                Some(flag) => {
                    log::debug!(
                        "detector '{}' raised {} ({:?})",
                        detector.name(),
                        flag.kind.as_str(),
                        flag.severity
                    );
                    flags.push(flag);
                }
                None => log::debug!("detector '{}' raised nothing", detector.name()),
            }
        }

        let score = aggregate_score(&flags);
        let tier = RiskTier::from_score(score);
        let confidence = estimate_confidence(ctx, &flags);
        let recommendation = recommend(score, &flags);

        log::info!(
            "analysis of booking on property '{}': score {score}, tier {tier:?}, \
             {} flag(s), recommendation {recommendation:?}, confidence {confidence:.2}",
            ctx.property.id,
            flags.len()
        );

        Ok(AnalysisResult {
            score,
            tier,
            flags,
            recommendation,
            confidence,
        })
    }
}

/// Severity-weighted sum over the triggered flags, capped at 100.
fn aggregate_score(flags: &[Flag]) -> u32 {
    let raw: u32 = flags.iter().map(|f| f.severity.weight()).sum();
    raw.min(SCORE_CAP)
}

/// Map score and flags to a handling recommendation. A critical flag
/// forces a reject no matter where the score landed: repeated payment
/// declines alone are disqualifying even when the aggregate sits in a
/// middling tier.
fn recommend(score: u32, flags: &[Flag]) -> Recommendation {
    let any_critical = flags.iter().any(|f| f.severity == Severity::Critical);
    if any_critical || score >= 95 {
        return Recommendation::Reject;
    }
    match score {
        s if s >= 80 => Recommendation::Hold,
        s if s >= 60 => Recommendation::Review,
        _ => Recommendation::Approve,
    }
}

/// How much signal the engine had: data completeness raises confidence,
/// contradictory severities (a low and a critical in the same set) lower
/// it. Clamped to [0.10, 1.00].
fn estimate_confidence(ctx: &BookingContext, flags: &[Flag]) -> f32 {
    let mut confidence = BASE_CONFIDENCE;

    if ctx.guest.prior_bookings > 0 {
        confidence += 0.10;
    }
    if ctx.guest.verification == crate::context::VerificationStatus::Verified {
        confidence += 0.10;
    }
    if ctx.payment.card_type.is_some() {
        confidence += 0.05;
    }
    if ctx.guest.ip_address.is_some() {
        confidence += 0.05;
    }

    let has_low = flags.iter().any(|f| f.severity == Severity::Low);
    let has_critical = flags.iter().any(|f| f.severity == Severity::Critical);
    if has_low && has_critical {
        confidence -= 0.20;
    }

    confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}
