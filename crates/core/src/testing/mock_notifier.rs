//! Mock notifier for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::notifier::{Notifier, NotifyError, TicketNotice};

/// A recorded delivery for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedDelivery {
    /// The notice that was delivered.
    pub notice: TicketNotice,
    /// Whether the delivery succeeded.
    pub success: bool,
}

/// Mock implementation of the Notifier trait.
///
/// Provides controllable behavior for testing:
/// - Track deliveries (in completion order) for assertions
/// - Simulate delivery latency, globally or per recipient
/// - Simulate failures and panics
///
/// # Example
///
/// ```rust,ignore
/// use booking_core::testing::MockNotifier;
///
/// let notifier = MockNotifier::with_delay(Duration::from_secs(10));
///
/// notifier.send_ticket(&notice).await?;
///
/// let deliveries = notifier.recorded_deliveries().await;
/// assert_eq!(deliveries.len(), 1);
/// assert!(deliveries[0].success);
/// ```
#[derive(Debug, Clone)]
pub struct MockNotifier {
    /// Recorded deliveries.
    deliveries: Arc<RwLock<Vec<RecordedDelivery>>>,
    /// Simulated delivery latency.
    delay: Arc<RwLock<Duration>>,
    /// Per-recipient latency, keyed by email.
    delay_overrides: Arc<RwLock<HashMap<String, Duration>>>,
    /// Whether every delivery should fail.
    fail_all: Arc<RwLock<bool>>,
    /// If set, the next delivery panics.
    panic_next: Arc<RwLock<bool>>,
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MockNotifier {
    /// Create a new mock notifier that delivers immediately.
    pub fn new() -> Self {
        Self::with_delay(Duration::ZERO)
    }

    /// Create a new mock notifier with the given delivery latency.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            deliveries: Arc::new(RwLock::new(Vec::new())),
            delay: Arc::new(RwLock::new(delay)),
            delay_overrides: Arc::new(RwLock::new(HashMap::new())),
            fail_all: Arc::new(RwLock::new(false)),
            panic_next: Arc::new(RwLock::new(false)),
        }
    }

    /// Get all recorded deliveries, in the order they finished.
    pub async fn recorded_deliveries(&self) -> Vec<RecordedDelivery> {
        self.deliveries.read().await.clone()
    }

    /// Get the number of deliveries attempted.
    pub async fn delivery_count(&self) -> usize {
        self.deliveries.read().await.len()
    }

    /// Set the delivery latency.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = delay;
    }

    /// Set the delivery latency for one recipient.
    pub async fn set_delay_for(&self, email: impl Into<String>, delay: Duration) {
        self.delay_overrides.write().await.insert(email.into(), delay);
    }

    /// Make every delivery fail (or succeed again).
    pub async fn set_fail_all(&self, fail: bool) {
        *self.fail_all.write().await = fail;
    }

    /// Make the next delivery panic.
    pub async fn set_panic_next(&self, panic: bool) {
        *self.panic_next.write().await = panic;
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    fn name(&self) -> &str {
        "mock"
    }

    async fn send_ticket(&self, notice: &TicketNotice) -> Result<(), NotifyError> {
        let delay = match self.delay_overrides.read().await.get(&notice.email) {
            Some(delay) => *delay,
            None => *self.delay.read().await,
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let should_panic = std::mem::take(&mut *self.panic_next.write().await);
        if should_panic {
            panic!("MockNotifier: simulated panic delivering to {}", notice.email);
        }

        let fail = *self.fail_all.read().await;
        self.deliveries.write().await.push(RecordedDelivery {
            notice: notice.clone(),
            success: !fail,
        });

        if fail {
            return Err(NotifyError::Delivery {
                email: notice.email.clone(),
                reason: "MockNotifier: simulated failure".to_string(),
            });
        }
        Ok(())
    }
}
