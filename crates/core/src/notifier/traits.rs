//! Trait definitions for the notifier module.

use async_trait::async_trait;

use super::error::NotifyError;
use super::types::TicketNotice;

/// Something that can deliver a ticket to the person who booked it.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Returns the name of this notifier implementation.
    fn name(&self) -> &str;

    /// Deliver a ticket notice. May take arbitrarily long; callers run this
    /// on a background task.
    async fn send_ticket(&self, notice: &TicketNotice) -> Result<(), NotifyError>;
}
