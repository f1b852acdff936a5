//! Shared fixtures for the unit tests.

use crate::context::{
    BookingContext, BookingDetails, GuestProfile, HostProfile, PaymentInfo, PropertyInfo,
    VerificationStatus,
};
use chrono::{Duration, NaiveDate, TimeZone, Utc};

/// A fully-attributed snapshot that triggers no detector: an established,
/// verified guest on an ordinarily priced three-night stay.
pub(crate) fn clean_context() -> BookingContext {
    let created_at = Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, 0).unwrap();
    BookingContext {
        guest: GuestProfile {
            name: "Dana Whitfield".to_string(),
            email: "dana.whitfield@example.com".to_string(),
            phone: Some("+1-555-0142".to_string()),
            registered_at: created_at - Duration::days(400),
            prior_bookings: 2,
            cancellation_rate: 0.0,
            verification: VerificationStatus::Verified,
            payment_methods: 2,
            ip_address: Some("203.0.113.46".to_string()),
            device_fingerprint: Some("fp_8c2f1a9b74d04e65".to_string()),
        },
        host: HostProfile {
            name: "Marisol Vega".to_string(),
            email: "marisol@example.net".to_string(),
            property_count: 3,
            rating: 4.7,
            response_rate: 0.92,
        },
        booking: BookingDetails {
            check_in: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 9, 13).unwrap(),
            created_at,
            amount: 330.0,
            currency: "USD".to_string(),
            payment_method: "card".to_string(),
            guest_count: 2,
            nights: 3,
            price_per_night: 110.0,
            last_minute: false,
            hours_to_check_in: 216.0,
        },
        property: PropertyInfo {
            id: "prop-2184".to_string(),
            average_nightly_price: 120.0,
            location: "Lisbon, PT".to_string(),
            rating: 4.5,
            review_count: 87,
        },
        payment: PaymentInfo {
            card_type: Some("visa".to_string()),
            card_country: Some("US".to_string()),
            billing_country: Some("US".to_string()),
            attempts: 1,
            prior_declines: 0,
        },
    }
}
