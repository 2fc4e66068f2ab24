//! In-memory booking store.

use thiserror::Error;

use super::BookingRecord;

/// Error type for booking store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    /// A booking asked for more tickets than remain. Callers validate first,
    /// so hitting this is a logic fault rather than bad user input.
    #[error("cannot book {requested} tickets: only {remaining} remaining")]
    Oversold { requested: u32, remaining: u32 },
}

/// Ordered, append-only collection of bookings plus the remaining inventory.
///
/// The store is owned by a single session and mutated only through
/// `&mut self`, so it needs no internal locking.
#[derive(Debug, Clone)]
pub struct BookingStore {
    total: u32,
    remaining: u32,
    bookings: Vec<BookingRecord>,
}

impl BookingStore {
    /// Create a store with `total` tickets available.
    pub fn new(total: u32) -> Self {
        Self {
            total,
            remaining: total,
            bookings: Vec::new(),
        }
    }

    /// Append a booking and take its tickets out of inventory.
    ///
    /// Returns [`BookingError::Oversold`] without modifying the store if the
    /// record asks for more than is left.
    pub fn record_booking(&mut self, record: BookingRecord) -> Result<(), BookingError> {
        if record.ticket_count > self.remaining {
            return Err(BookingError::Oversold {
                requested: record.ticket_count,
                remaining: self.remaining,
            });
        }

        self.remaining -= record.ticket_count;
        self.bookings.push(record);
        Ok(())
    }

    /// First names of every booking, in insertion order.
    pub fn first_names(&self) -> Vec<&str> {
        self.bookings
            .iter()
            .map(|booking| booking.first_name.as_str())
            .collect()
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Tickets sold so far.
    pub fn tickets_booked(&self) -> u32 {
        self.total - self.remaining
    }

    pub fn is_sold_out(&self) -> bool {
        self.remaining == 0
    }

    pub fn bookings(&self) -> &[BookingRecord] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}
