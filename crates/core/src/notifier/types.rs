//! Notifier data types.

use std::fmt;

use crate::booking::BookingRecord;

/// What gets delivered for one booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketNotice {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub ticket_count: u32,
}

impl TicketNotice {
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
}

impl From<&BookingRecord> for TicketNotice {
    fn from(record: &BookingRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            ticket_count: record.ticket_count,
        }
    }
}

impl fmt::Display for TicketNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tickets for {} {}",
            self.ticket_count, self.first_name, self.last_name
        )
    }
}

/// How a single delivery task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    Failed,
}

/// Tally of delivery tasks collected when a
/// [`NotificationScope`](super::NotificationScope) is drained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrainReport {
    /// Notices the notifier reported as sent.
    pub delivered: usize,
    /// Notices the notifier returned an error for.
    pub failed: usize,
    /// Tasks that panicked before finishing.
    pub panicked: usize,
}

impl DrainReport {
    /// Total number of tasks that finished, however they ended.
    pub fn completed(&self) -> usize {
        self.delivered + self.failed + self.panicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingRequest;

    #[test]
    fn test_notice_display() {
        let notice = TicketNotice::new("Jo", "Do", "j@d.co", 3);
        assert_eq!(notice.to_string(), "3 tickets for Jo Do");
    }

    #[test]
    fn test_notice_from_record() {
        let record =
            BookingRecord::from_request(BookingRequest::new("Ann", "Lee", "ann@lee.io", 4));
        let notice = TicketNotice::from(&record);
        assert_eq!(notice, TicketNotice::new("Ann", "Lee", "ann@lee.io", 4));
    }

    #[test]
    fn test_drain_report_completed() {
        let report = DrainReport {
            delivered: 3,
            failed: 1,
            panicked: 1,
        };
        assert_eq!(report.completed(), 5);
        assert_eq!(DrainReport::default().completed(), 0);
    }
}
