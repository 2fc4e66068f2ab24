//! Error types for the notifier module.

use thiserror::Error;

/// Errors that can occur while delivering a ticket notice.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Writing the notice to its destination failed.
    #[error("Failed to write ticket notice: {0}")]
    Io(#[from] std::io::Error),

    /// The delivery backend refused the notice.
    #[error("Ticket delivery to {email} failed: {reason}")]
    Delivery { email: String, reason: String },
}
