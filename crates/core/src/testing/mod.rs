//! Testing utilities and mock implementations.
//!
//! This module provides a mock [`Notifier`](crate::notifier::Notifier) and
//! helpers for building scripted session input, so sessions can be driven end
//! to end without a terminal or real delays.
//!
//! # Example
//!
//! ```rust,ignore
//! use booking_core::testing::{fixtures, MockNotifier};
//!
//! let notifier = Arc::new(MockNotifier::new());
//! let input = fixtures::booking_input(&[("Jo", "Do", "j@d.co", "1")]);
//!
//! let mut session = Session::new(&config, notifier.clone(), input.as_bytes(), Vec::new());
//! session.run().await?;
//!
//! assert_eq!(notifier.delivery_count().await, 1);
//! ```

mod mock_notifier;

pub use mock_notifier::{MockNotifier, RecordedDelivery};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::booking::{BookingRecord, BookingRequest};

    /// Build stdin content for a sequence of booking attempts.
    ///
    /// Each attempt is `(first_name, last_name, email, ticket_count)`; the
    /// ticket count is a raw token so malformed numbers can be scripted.
    pub fn booking_input(attempts: &[(&str, &str, &str, &str)]) -> String {
        attempts
            .iter()
            .map(|(first, last, email, tickets)| {
                format!("{first}\n{last}\n{email}\n{tickets}\n")
            })
            .collect()
    }

    /// A valid booking record for `first_name`.
    pub fn booking_record(first_name: &str, ticket_count: u32) -> BookingRecord {
        BookingRecord::from_request(BookingRequest::new(
            first_name,
            "Tester",
            format!("{}@example.com", first_name.to_lowercase()),
            ticket_count,
        ))
    }
}
