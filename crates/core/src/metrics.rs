//! Prometheus metrics for the booking session.
//!
//! This module provides metrics for:
//! - Bookings and tickets sold
//! - Rejected attempts by reason
//! - Ticket notifications (sent, failed, in flight)

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

// =============================================================================
// Booking Metrics
// =============================================================================

/// Accepted bookings.
pub static BOOKINGS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("booking_bookings_total", "Total accepted bookings").unwrap()
});

/// Tickets sold across all bookings.
pub static TICKETS_BOOKED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("booking_tickets_booked_total", "Total tickets booked").unwrap()
});

/// Rejected attempts by reason.
pub static REJECTIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "booking_rejections_total",
            "Total rejected booking inputs",
        ),
        &["reason"], // "name", "email", "ticket_count", "unparsable_ticket_count"
    )
    .unwrap()
});

// =============================================================================
// Notification Metrics
// =============================================================================

/// Finished notification tasks by result.
pub static NOTIFICATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "booking_notifications_total",
            "Total finished ticket notifications",
        ),
        &["result"], // "delivered", "failed", "panicked"
    )
    .unwrap()
});

/// Notification tasks spawned but not yet finished.
pub static NOTIFICATIONS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "booking_notifications_in_flight",
        "Ticket notifications currently pending delivery",
    )
    .unwrap()
});

// =============================================================================
// Registration
// =============================================================================

fn register_metrics(registry: &Registry) {
    // Bookings
    registry.register(Box::new(BOOKINGS_TOTAL.clone())).unwrap();
    registry
        .register(Box::new(TICKETS_BOOKED_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(REJECTIONS_TOTAL.clone()))
        .unwrap();

    // Notifications
    registry
        .register(Box::new(NOTIFICATIONS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(NOTIFICATIONS_IN_FLIGHT.clone()))
        .unwrap();
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
