//! Structured scope for ticket notification tasks.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::metrics::{NOTIFICATIONS_IN_FLIGHT, NOTIFICATIONS_TOTAL};

use super::traits::Notifier;
use super::types::{DeliveryOutcome, DrainReport, TicketNotice};

#[derive(Debug, Default)]
struct ScopeCounters {
    spawned: AtomicUsize,
    outstanding: AtomicUsize,
}

/// Marks one delivery task as finished when dropped.
///
/// Lives inside the task future, so it runs on every exit path: normal
/// return, notifier error, or panic.
struct CompletionGuard {
    counters: Arc<ScopeCounters>,
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        self.counters.outstanding.fetch_sub(1, Ordering::SeqCst);
        NOTIFICATIONS_IN_FLIGHT.dec();
    }
}

/// Owns every notification task spawned during a session.
///
/// Increments happen on [`spawn`](Self::spawn), which is only called by the
/// owning session. Tasks decrement on completion from whatever worker thread
/// they finish on. [`drain`](Self::drain) waits for all of them.
///
/// Dropping a scope with tasks still running detaches them instead of
/// aborting, so a delivery is never cancelled.
pub struct NotificationScope {
    notifier: Arc<dyn Notifier>,
    tasks: JoinSet<DeliveryOutcome>,
    counters: Arc<ScopeCounters>,
}

impl NotificationScope {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            tasks: JoinSet::new(),
            counters: Arc::new(ScopeCounters::default()),
        }
    }

    /// Start delivering a notice in the background.
    pub fn spawn(&mut self, notice: TicketNotice) {
        self.counters.spawned.fetch_add(1, Ordering::SeqCst);
        self.counters.outstanding.fetch_add(1, Ordering::SeqCst);
        NOTIFICATIONS_IN_FLIGHT.inc();

        let guard = CompletionGuard {
            counters: Arc::clone(&self.counters),
        };
        let notifier = Arc::clone(&self.notifier);

        debug!(
            "Spawning {} notification: {} -> {}",
            notifier.name(),
            notice,
            notice.email
        );

        self.tasks.spawn(async move {
            let _guard = guard;
            match notifier.send_ticket(&notice).await {
                Ok(()) => {
                    NOTIFICATIONS_TOTAL.with_label_values(&["delivered"]).inc();
                    DeliveryOutcome::Delivered
                }
                Err(e) => {
                    error!("Failed to send ticket to {}: {}", notice.email, e);
                    NOTIFICATIONS_TOTAL.with_label_values(&["failed"]).inc();
                    DeliveryOutcome::Failed
                }
            }
        });
    }

    /// Tasks spawned over the lifetime of this scope.
    pub fn spawned(&self) -> usize {
        self.counters.spawned.load(Ordering::SeqCst)
    }

    /// Tasks spawned but not yet finished.
    pub fn outstanding(&self) -> usize {
        self.counters.outstanding.load(Ordering::SeqCst)
    }

    /// Wait until every spawned task has finished.
    ///
    /// Returns the outcomes collected since the previous drain.
    pub async fn drain(&mut self) -> DrainReport {
        let mut report = DrainReport::default();
        if !self.tasks.is_empty() {
            info!("Waiting for {} ticket notification(s)", self.tasks.len());
        }

        while let Some(result) = self.tasks.join_next().await {
            match result {
                Ok(DeliveryOutcome::Delivered) => report.delivered += 1,
                Ok(DeliveryOutcome::Failed) => report.failed += 1,
                Err(e) => {
                    error!("Ticket notification task panicked: {}", e);
                    NOTIFICATIONS_TOTAL.with_label_values(&["panicked"]).inc();
                    report.panicked += 1;
                }
            }
        }

        debug!(
            "Notifications drained: {} delivered, {} failed, {} panicked",
            report.delivered, report.failed, report.panicked
        );
        report
    }
}

impl Drop for NotificationScope {
    fn drop(&mut self) {
        if !self.tasks.is_empty() {
            warn!(
                "Notification scope dropped with {} task(s) running; detaching",
                self.tasks.len()
            );
            self.tasks.detach_all();
        }
    }
}
