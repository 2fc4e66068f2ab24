//! Booking session lifecycle integration tests.
//!
//! These tests drive a whole session through the public API:
//! greeting -> booking attempts -> sell-out or end of input -> drain

use std::sync::Arc;
use std::time::Duration;

use booking_core::{
    testing::{fixtures, MockNotifier},
    ConferenceConfig, Notifier, Session, SessionEnd, SessionSummary,
};

/// Test helper owning the notifier so deliveries can be inspected after a run.
struct TestHarness {
    notifier: Arc<MockNotifier>,
    config: ConferenceConfig,
}

impl TestHarness {
    fn new(total_tickets: u32) -> Self {
        Self {
            notifier: Arc::new(MockNotifier::new()),
            config: ConferenceConfig {
                name: "Lifecycle Conference".to_string(),
                total_tickets,
            },
        }
    }

    fn with_delay(self, delay: Duration) -> Self {
        Self {
            notifier: Arc::new(MockNotifier::with_delay(delay)),
            ..self
        }
    }

    async fn run(&self, input: &str) -> (SessionSummary, Vec<String>, String) {
        let notifier = Arc::clone(&self.notifier) as Arc<dyn Notifier>;
        let mut session = Session::new(&self.config, notifier, input.as_bytes(), Vec::new());

        let summary = session.run().await.expect("session should finish");
        let names = session
            .store()
            .first_names()
            .into_iter()
            .map(String::from)
            .collect();
        let output = String::from_utf8(session.output().clone()).expect("utf-8 output");
        (summary, names, output)
    }
}

#[tokio::test(start_paused = true)]
async fn test_one_ticket_conference_end_to_end() {
    let harness = TestHarness::new(1).with_delay(Duration::from_secs(10));
    let input = fixtures::booking_input(&[("Jo", "Do", "j@d.co", "1")]);

    let start = tokio::time::Instant::now();
    let (summary, names, output) = harness.run(&input).await;

    assert_eq!(summary.end, SessionEnd::SoldOut);
    assert_eq!(summary.remaining_tickets, 0);
    assert_eq!(names, ["Jo"]);
    assert_eq!(summary.notifications.delivered, 1);
    assert!(start.elapsed() >= Duration::from_secs(10));
    assert!(output.contains("Sorry, all tickets are sold out. Please come back next year."));
}

#[tokio::test(start_paused = true)]
async fn test_every_booking_is_notified_before_drain_returns() {
    let harness = TestHarness::new(50);
    for (i, email) in ["a@x.io", "b@x.io", "c@x.io", "d@x.io", "e@x.io"]
        .iter()
        .enumerate()
    {
        // Later bookings finish first
        harness
            .notifier
            .set_delay_for(*email, Duration::from_secs(10 - i as u64))
            .await;
    }
    let input = fixtures::booking_input(&[
        ("Ann", "Lee", "a@x.io", "10"),
        ("Bob", "Ray", "b@x.io", "10"),
        ("Cat", "Kim", "c@x.io", "10"),
        ("Dan", "Orr", "d@x.io", "10"),
        ("Eve", "Fox", "e@x.io", "10"),
    ]);

    let (summary, names, _) = harness.run(&input).await;

    assert_eq!(summary.end, SessionEnd::SoldOut);
    assert_eq!(summary.bookings, 5);
    assert_eq!(summary.notifications.delivered, 5);
    assert_eq!(names, ["Ann", "Bob", "Cat", "Dan", "Eve"]);

    let deliveries = harness.notifier.recorded_deliveries().await;
    let delivered: Vec<_> = deliveries
        .iter()
        .map(|d| d.notice.first_name.as_str())
        .collect();
    assert_eq!(delivered, ["Eve", "Dan", "Cat", "Bob", "Ann"]);
}

#[tokio::test]
async fn test_loop_stops_exactly_at_sell_out() {
    let harness = TestHarness::new(6);
    let input = fixtures::booking_input(&[
        ("Ann", "Lee", "a@x.io", "4"),
        ("Bob", "Ray", "b@x.io", "3"),
        ("Cat", "Kim", "c@x.io", "2"),
        // Never read: the conference is already sold out
        ("Dan", "Orr", "d@x.io", "1"),
    ]);

    let (summary, names, output) = harness.run(&input).await;

    assert_eq!(summary.end, SessionEnd::SoldOut);
    assert_eq!(summary.tickets_booked, 6);
    assert_eq!(summary.remaining_tickets, 0);
    assert_eq!(names, ["Ann", "Cat"]);
    assert_eq!(output.matches("Enter your first name: ").count(), 3);
    assert_eq!(harness.notifier.delivery_count().await, 2);
}

#[tokio::test]
async fn test_remaining_never_goes_below_zero() {
    let harness = TestHarness::new(3);
    let input = fixtures::booking_input(&[
        ("Ann", "Lee", "a@x.io", "4"),
        ("Bob", "Ray", "b@x.io", "4294967295"),
        ("Cat", "Kim", "c@x.io", "0"),
        ("Dan", "Orr", "d@x.io", "2"),
    ]);

    let (summary, names, output) = harness.run(&input).await;

    assert_eq!(summary.end, SessionEnd::InputClosed);
    assert_eq!(summary.remaining_tickets, 1);
    assert_eq!(names, ["Dan"]);
    assert_eq!(
        output
            .matches("Please enter a valid number of tickets.")
            .count(),
        3
    );
}

#[tokio::test]
async fn test_overflowing_ticket_count_is_reprompted() {
    let harness = TestHarness::new(3);
    let input = "Jo Do j@d.co 4294967296 3\n";

    let (summary, names, output) = harness.run(input).await;

    assert_eq!(summary.end, SessionEnd::SoldOut);
    assert_eq!(names, ["Jo"]);
    assert_eq!(
        output
            .matches("Please enter a valid number of tickets.")
            .count(),
        1
    );
}

#[tokio::test]
async fn test_empty_input_only_greets() {
    let harness = TestHarness::new(50);

    let (summary, names, output) = harness.run("").await;

    assert_eq!(summary.end, SessionEnd::InputClosed);
    assert!(names.is_empty());
    assert_eq!(summary.notifications.completed(), 0);
    assert!(output.starts_with("Welcome to our Lifecycle Conference booking application\n"));
    assert!(output.contains("We have total of 50 tickets and 50 are still remaining"));
}

#[tokio::test]
async fn test_failed_deliveries_are_counted() {
    let harness = TestHarness::new(2);
    harness.notifier.set_fail_all(true).await;
    let input = fixtures::booking_input(&[
        ("Ann", "Lee", "a@x.io", "1"),
        ("Bob", "Ray", "b@x.io", "1"),
    ]);

    let (summary, _, _) = harness.run(&input).await;

    assert_eq!(summary.end, SessionEnd::SoldOut);
    assert_eq!(summary.notifications.failed, 2);
    assert_eq!(summary.notifications.completed(), 2);
}
