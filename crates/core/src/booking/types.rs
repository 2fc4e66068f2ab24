//! Booking data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validate::{validate_user_input, ValidationOutcome};

/// Raw booking attempt as read from the user, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub ticket_count: u32,
}

impl BookingRequest {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        ticket_count: u32,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            ticket_count,
        }
    }

    /// Check this request against the current inventory.
    pub fn validate(&self, remaining_tickets: u32) -> ValidationOutcome {
        validate_user_input(
            &self.first_name,
            &self.last_name,
            &self.email,
            self.ticket_count,
            remaining_tickets,
        )
    }
}

/// A confirmed booking.
///
/// Records are only handed out by shared reference once they are in the
/// [`BookingStore`](super::BookingStore), so they never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub ticket_count: u32,
    /// When the booking was accepted.
    pub booked_at: DateTime<Utc>,
}

impl BookingRecord {
    /// Create a record from a request, assigning a fresh id and timestamp.
    pub fn from_request(request: BookingRequest) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            ticket_count: request.ticket_count,
            booked_at: Utc::now(),
        }
    }

    /// Full name as "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<BookingRequest> for BookingRecord {
    fn from(request: BookingRequest) -> Self {
        Self::from_request(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_request_copies_fields() {
        let before = Utc::now();
        let record =
            BookingRecord::from_request(BookingRequest::new("Ada", "Lovelace", "ada@math.org", 2));
        let after = Utc::now();

        assert_eq!(record.first_name, "Ada");
        assert_eq!(record.last_name, "Lovelace");
        assert_eq!(record.email, "ada@math.org");
        assert_eq!(record.ticket_count, 2);
        assert!(record.booked_at >= before && record.booked_at <= after);
        assert_eq!(record.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_records_get_distinct_ids() {
        let a = BookingRecord::from(BookingRequest::new("Al", "Bo", "a@b.c", 1));
        let b = BookingRecord::from(BookingRequest::new("Al", "Bo", "a@b.c", 1));
        assert_ne!(a.id, b.id);
        assert!(uuid::Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_request_validate_uses_remaining() {
        let request = BookingRequest::new("Al", "Bo", "a@b.c", 5);
        assert!(request.validate(10).is_valid());
        assert!(!request.validate(4).tickets_ok);
    }

    #[test]
    fn test_record_serializes_to_json() {
        let record = BookingRecord::from_request(BookingRequest::new("Jo", "Do", "j@d.co", 1));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["first_name"], "Jo");
        assert_eq!(json["ticket_count"], 1);
        assert!(json["booked_at"].is_string());
    }
}
