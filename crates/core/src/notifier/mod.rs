//! Ticket notifications.
//!
//! Every accepted booking gets a [`TicketNotice`] delivered by a [`Notifier`]
//! on its own tokio task. Tasks are owned by a [`NotificationScope`], which
//! the session drains before exiting. Deliveries are never cancelled.
//!
//! # Example
//!
//! ```ignore
//! use booking_core::notifier::{ConsoleNotifier, NotificationScope, TicketNotice};
//!
//! let notifier = Arc::new(ConsoleNotifier::new(Duration::from_secs(10)));
//! let mut scope = NotificationScope::new(notifier);
//!
//! scope.spawn(TicketNotice::new("Jo", "Do", "j@d.co", 1));
//!
//! let report = scope.drain().await;
//! assert_eq!(report.delivered, 1);
//! ```

mod console;
mod error;
mod scope;
mod traits;
mod types;

pub use console::{render_banner, ConsoleNotifier};
pub use error::NotifyError;
pub use scope::NotificationScope;
pub use traits::Notifier;
pub use types::{DeliveryOutcome, DrainReport, TicketNotice};
