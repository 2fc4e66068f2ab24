//! Booking records, input validation, and the in-memory booking store.

mod store;
mod types;
mod validate;

pub use store::{BookingError, BookingStore};
pub use types::{BookingRecord, BookingRequest};
pub use validate::{validate_user_input, ValidationFailure, ValidationOutcome};
