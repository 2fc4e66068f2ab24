//! Notifier that prints tickets to the terminal after a simulated delay.

use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

use crate::config::NotifierConfig;

use super::error::NotifyError;
use super::traits::Notifier;
use super::types::TicketNotice;

const BANNER_RULE: &str = "##################";

/// Render the confirmation banner for a notice.
pub fn render_banner(notice: &TicketNotice) -> String {
    format!(
        "{rule}\nSending ticket:\n {notice} \nto email address {email}\n{rule}\n",
        rule = BANNER_RULE,
        notice = notice,
        email = notice.email,
    )
}

/// Writes a ticket banner to an output stream (stdout by default) once the
/// configured delay has elapsed.
///
/// Banners are written under a lock so concurrent deliveries never interleave
/// within a single banner.
pub struct ConsoleNotifier {
    delay: Duration,
    out: Mutex<Box<dyn AsyncWrite + Send + Unpin>>,
}

impl ConsoleNotifier {
    /// Create a notifier that writes to stdout.
    pub fn new(delay: Duration) -> Self {
        Self::with_writer(delay, tokio::io::stdout())
    }

    pub fn from_config(config: &NotifierConfig) -> Self {
        Self::new(config.delay())
    }

    /// Create a notifier that writes to an arbitrary stream.
    pub fn with_writer<W>(delay: Duration, writer: W) -> Self
    where
        W: AsyncWrite + Send + Unpin + 'static,
    {
        Self {
            delay,
            out: Mutex::new(Box::new(writer)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    fn name(&self) -> &str {
        "console"
    }

    async fn send_ticket(&self, notice: &TicketNotice) -> Result<(), NotifyError> {
        tokio::time::sleep(self.delay).await;

        let banner = render_banner(notice);
        let mut out = self.out.lock().await;
        out.write_all(banner.as_bytes()).await?;
        out.flush().await?;

        tracing::debug!("Sent {} to {}", notice, notice.email);
        Ok(())
    }
}
