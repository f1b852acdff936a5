//! Independent risk detectors.
//!
//! Every detector is a pure function of the booking snapshot: it reads the
//! context, never another detector's output, and yields at most one flag.
//! Within a detector the conditions are checked in a fixed priority order
//! and the first match wins.

pub mod behavior;
pub mod booking_pattern;
pub mod device;
pub mod host_risk;
pub mod location;
pub mod new_user;
pub mod payment;
pub mod pricing;
pub mod time_risk;
pub mod velocity;

use crate::config::EngineConfig;
use crate::context::BookingContext;
use crate::flags::Flag;

pub trait Detector: Send + Sync {
    fn name(&self) -> &'static str;
    fn evaluate(&self, ctx: &BookingContext) -> Option<Flag>;
}

/// Build the full detector set in evaluation order. The order fixes the
/// flag ordering in results; it has no other significance.
pub fn default_set(config: &EngineConfig) -> anyhow::Result<Vec<Box<dyn Detector>>> {
    Ok(vec![
        Box::new(new_user::NewUserDetector),
        Box::new(payment::PaymentRiskDetector),
        Box::new(booking_pattern::BookingPatternDetector),
        Box::new(pricing::PricingAnomalyDetector),
        Box::new(time_risk::TimeRiskDetector),
        Box::new(location::LocationRiskDetector::new(
            config.high_risk_ip_prefixes.clone(),
        )),
        Box::new(behavior::BehaviorRiskDetector::new(
            &config.disposable_email_domains,
        )),
        Box::new(host_risk::HostRiskDetector),
        Box::new(velocity::VelocityDetector),
        Box::new(device::DeviceRiskDetector::new(
            &config.device_marker_patterns,
            config.min_fingerprint_length,
        )?),
    ])
}
