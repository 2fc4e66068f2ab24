//! Session result and error types.

use thiserror::Error;

use crate::booking::BookingError;
use crate::notifier::DrainReport;

/// Why the booking loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every ticket was booked.
    SoldOut,
    /// Input ended before the conference sold out.
    InputClosed,
}

/// What a finished session did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    /// Accepted bookings.
    pub bookings: usize,
    pub tickets_booked: u32,
    pub remaining_tickets: u32,
    /// Outcome of every notification spawned during the session.
    pub notifications: DrainReport,
}

/// Fatal session errors. Rejected input is not an error.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[error("Session I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The store refused a booking that had passed validation.
    #[error("Booking store invariant violated: {0}")]
    Booking(#[from] BookingError),

    #[error("Failed to serialize bookings: {0}")]
    Serialize(#[from] serde_json::Error),
}
