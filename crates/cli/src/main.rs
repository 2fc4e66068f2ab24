use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use booking_core::{
    encode_metrics, load_config, load_default_config, validate_config, Config, ConsoleNotifier,
    Notifier, Session,
};

/// Config file looked up in the working directory when `BOOKING_CONFIG` is unset
const DEFAULT_CONFIG_PATH: &str = "booking.toml";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Logs go to stderr; stdout belongs to the booking dialogue
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load()?;
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!(
        "Conference: {} ({} tickets)",
        config.conference.name, config.conference.total_tickets
    );
    info!("Notification delay: {:?}", config.notifier.delay());

    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier::from_config(&config.notifier));
    info!("Using notifier: {}", notifier.name());

    let mut session = Session::new(
        &config.conference,
        notifier,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );
    let summary = session.run().await.context("Booking session failed")?;

    info!(
        "Session finished ({:?}): {} bookings, {} notifications delivered, {} failed",
        summary.end,
        summary.bookings,
        summary.notifications.delivered,
        summary.notifications.failed + summary.notifications.panicked
    );

    if let Some(path) = &config.metrics.snapshot_path {
        let snapshot = encode_metrics().context("Failed to encode metrics")?;
        tokio::fs::write(path, snapshot)
            .await
            .with_context(|| format!("Failed to write metrics snapshot to {:?}", path))?;
        info!("Metrics snapshot written to {:?}", path);
    }

    Ok(())
}

/// Load configuration from `BOOKING_CONFIG`, the default file, or built-in defaults
fn load() -> Result<Config> {
    if let Ok(path) = std::env::var("BOOKING_CONFIG") {
        let path = PathBuf::from(path);
        info!("Loading configuration from {:?}", path);
        return load_config(&path)
            .with_context(|| format!("Failed to load config from {:?}", path));
    }

    let path = PathBuf::from(DEFAULT_CONFIG_PATH);
    if path.exists() {
        info!("Loading configuration from {:?}", path);
        load_config(&path).with_context(|| format!("Failed to load config from {:?}", path))
    } else {
        info!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
        load_default_config().context("Failed to load default config")
    }
}
