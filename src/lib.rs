pub mod config;
pub mod context;
pub mod detectors;
pub mod engine;
pub mod error;
pub mod flags;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::EngineConfig;
pub use context::{
    BookingContext, BookingDetails, GuestProfile, HostProfile, PaymentInfo, PropertyInfo,
    VerificationStatus,
};
pub use engine::RiskEngine;
pub use error::EngineError;
pub use flags::{AnalysisResult, Flag, FlagKind, Recommendation, RiskTier, Severity};
