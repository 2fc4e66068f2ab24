use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub conference: ConferenceConfig,
    #[serde(default)]
    pub notifier: NotifierConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Conference and inventory configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConferenceConfig {
    /// Display name used in greetings and status lines
    #[serde(default = "default_name")]
    pub name: String,
    /// Initial ticket inventory (default: 50)
    #[serde(default = "default_total_tickets")]
    pub total_tickets: u32,
}

impl Default for ConferenceConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            total_tickets: default_total_tickets(),
        }
    }
}

fn default_name() -> String {
    "Go Conference".to_string()
}

fn default_total_tickets() -> u32 {
    50
}

/// Ticket notification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifierConfig {
    /// Simulated send latency in milliseconds (default: 10 seconds)
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl NotifierConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_delay_ms() -> u64 {
    10_000
}

/// Metrics configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MetricsConfig {
    /// Where to write a Prometheus text snapshot when the session ends
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}
