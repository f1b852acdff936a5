//! Booking snapshot types.
//!
//! A `BookingContext` is assembled by the caller from the booking record
//! store and handed to the engine fully populated. The engine never
//! mutates it and never reaches outside it.

use crate::error::EngineError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Verified,
    Pending,
    Unverified,
}

impl Default for VerificationStatus {
    fn default() -> Self {
        VerificationStatus::Unverified
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestProfile {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Account registration timestamp.
    pub registered_at: DateTime<Utc>,
    /// Completed bookings before this one.
    pub prior_bookings: u32,
    /// Fraction of past bookings cancelled, in [0, 1].
    pub cancellation_rate: f64,
    pub verification: VerificationStatus,
    /// Payment methods on file for the account.
    pub payment_methods: u32,
    pub ip_address: Option<String>,
    pub device_fingerprint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostProfile {
    pub name: String,
    pub email: String,
    pub property_count: u32,
    /// Host rating in [0, 5].
    pub rating: f64,
    /// Fraction of guest messages answered, in [0, 1].
    pub response_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDetails {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// When the booking was placed.
    pub created_at: DateTime<Utc>,
    pub amount: f64,
    pub currency: String,
    pub payment_method: String,
    pub guest_count: u32,
    /// Stay duration in nights.
    pub nights: u32,
    pub price_per_night: f64,
    /// Booked within 24 hours of check-in.
    pub last_minute: bool,
    pub hours_to_check_in: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyInfo {
    pub id: String,
    /// Average nightly price for comparable listings.
    pub average_nightly_price: f64,
    pub location: String,
    pub rating: f64,
    pub review_count: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub card_type: Option<String>,
    pub card_country: Option<String>,
    pub billing_country: Option<String>,
    /// Payment attempts made for this booking.
    pub attempts: u32,
    /// Declined payments on the guest's record before this booking.
    pub prior_declines: u32,
}

/// Complete input snapshot for one risk analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingContext {
    pub guest: GuestProfile,
    pub host: HostProfile,
    pub booking: BookingDetails,
    pub property: PropertyInfo,
    pub payment: PaymentInfo,
}

impl BookingContext {
    /// Guest account age in whole days, measured at the moment the booking
    /// was placed. Anchoring to the snapshot (rather than the wall clock)
    /// keeps analysis of an identical context identical across runs.
    pub fn guest_account_age_days(&self) -> i64 {
        (self.booking.created_at - self.guest.registered_at).num_days()
    }

    /// Domain part of the guest email, if there is one.
    pub fn guest_email_domain(&self) -> Option<&str> {
        self.guest.email.split('@').nth(1).filter(|d| !d.is_empty())
    }

    /// Check the caller-contract preconditions. A failure here is a
    /// malformed snapshot, not a fraud signal.
    pub fn validate(&self) -> Result<(), EngineError> {
        fn finite_non_negative(field: &'static str, value: f64) -> Result<(), EngineError> {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::invalid(field, "must be a finite, non-negative number"));
            }
            Ok(())
        }
        fn unit_interval(field: &'static str, value: f64) -> Result<(), EngineError> {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(EngineError::invalid(field, "must be within [0, 1]"));
            }
            Ok(())
        }

        finite_non_negative("booking.amount", self.booking.amount)?;
        finite_non_negative("booking.price_per_night", self.booking.price_per_night)?;
        finite_non_negative("property.average_nightly_price", self.property.average_nightly_price)?;
        unit_interval("guest.cancellation_rate", self.guest.cancellation_rate)?;
        unit_interval("host.response_rate", self.host.response_rate)?;

        if !self.host.rating.is_finite() || !(0.0..=5.0).contains(&self.host.rating) {
            return Err(EngineError::invalid("host.rating", "must be within [0, 5]"));
        }
        if !self.property.rating.is_finite() || !(0.0..=5.0).contains(&self.property.rating) {
            return Err(EngineError::invalid("property.rating", "must be within [0, 5]"));
        }
        if !self.booking.hours_to_check_in.is_finite() {
            return Err(EngineError::invalid("booking.hours_to_check_in", "must be a finite number"));
        }
        if self.booking.check_out < self.booking.check_in {
            return Err(EngineError::invalid("booking.check_out", "precedes check_in"));
        }
        Ok(())
    }
}
