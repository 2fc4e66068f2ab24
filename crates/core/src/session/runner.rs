//! Booking session state machine.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::booking::{BookingRecord, BookingRequest, BookingStore, ValidationOutcome};
use crate::config::ConferenceConfig;
use crate::metrics::{BOOKINGS_TOTAL, REJECTIONS_TOTAL, TICKETS_BOOKED_TOTAL};
use crate::notifier::{DrainReport, NotificationScope, Notifier, TicketNotice};

use super::input::TokenReader;
use super::types::{SessionEnd, SessionError, SessionSummary};

const SOLD_OUT_MESSAGE: &str = "Sorry, all tickets are sold out. Please come back next year.";
const INVALID_TICKET_COUNT: &str = "Please enter a valid number of tickets.";

enum SessionState {
    Greeting,
    AwaitingInput,
    Validating(BookingRequest),
    Booking(BookingRequest),
    Rejected(ValidationOutcome),
    CheckExhaustion,
    Draining(SessionEnd),
    Terminated(SessionEnd, DrainReport),
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            SessionState::Greeting => "greeting",
            SessionState::AwaitingInput => "awaiting_input",
            SessionState::Validating(_) => "validating",
            SessionState::Booking(_) => "booking",
            SessionState::Rejected(_) => "rejected",
            SessionState::CheckExhaustion => "check_exhaustion",
            SessionState::Draining(_) => "draining",
            SessionState::Terminated(..) => "terminated",
        }
    }
}

/// One conference's booking session.
///
/// Owns the booking store and the notification scope; nothing else holds a
/// mutable reference to either, so the store is only ever written from the
/// task running [`run`](Self::run).
pub struct Session<R, W> {
    conference_name: String,
    store: BookingStore,
    notifications: NotificationScope,
    input: TokenReader<R>,
    output: W,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(
        config: &ConferenceConfig,
        notifier: Arc<dyn Notifier>,
        input: R,
        output: W,
    ) -> Self {
        Self {
            conference_name: config.name.clone(),
            store: BookingStore::new(config.total_tickets),
            notifications: NotificationScope::new(notifier),
            input: TokenReader::new(input),
            output,
        }
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run the session until the conference sells out or input ends.
    ///
    /// Outstanding notifications are always awaited before returning, on the
    /// error path too.
    pub async fn run(&mut self) -> Result<SessionSummary, SessionError> {
        info!(
            "Starting booking session for {} ({} tickets)",
            self.conference_name,
            self.store.total()
        );

        let mut state = SessionState::Greeting;
        loop {
            debug!("Session state: {}", state.name());
            state = match state {
                SessionState::Terminated(end, notifications) => {
                    let summary = self.summary(end, notifications);
                    info!(
                        "Booking session ended ({:?}): {} bookings, {} tickets, {} remaining",
                        summary.end,
                        summary.bookings,
                        summary.tickets_booked,
                        summary.remaining_tickets
                    );
                    return Ok(summary);
                }
                state => match self.step(state).await {
                    Ok(next) => next,
                    Err(e) => {
                        self.notifications.drain().await;
                        return Err(e);
                    }
                },
            };
        }
    }

    async fn step(&mut self, state: SessionState) -> Result<SessionState, SessionError> {
        let next = match state {
            SessionState::Greeting => {
                self.greet().await?;
                SessionState::AwaitingInput
            }
            SessionState::AwaitingInput => match self.read_request().await? {
                Some(request) => SessionState::Validating(request),
                None => {
                    info!("Input closed before sell-out");
                    SessionState::Draining(SessionEnd::InputClosed)
                }
            },
            SessionState::Validating(request) => {
                let outcome = request.validate(self.store.remaining());
                if outcome.is_valid() {
                    SessionState::Booking(request)
                } else {
                    SessionState::Rejected(outcome)
                }
            }
            SessionState::Booking(request) => {
                self.book(request).await?;
                SessionState::CheckExhaustion
            }
            SessionState::Rejected(outcome) => {
                for failure in outcome.failures() {
                    info!("Rejected booking attempt: invalid {}", failure);
                    REJECTIONS_TOTAL
                        .with_label_values(&[failure.as_str()])
                        .inc();
                    self.say(failure.message()).await?;
                }
                SessionState::AwaitingInput
            }
            SessionState::CheckExhaustion => {
                if self.store.is_sold_out() {
                    self.say(SOLD_OUT_MESSAGE).await?;
                    SessionState::Draining(SessionEnd::SoldOut)
                } else {
                    SessionState::AwaitingInput
                }
            }
            SessionState::Draining(end) => {
                let notifications = self.notifications.drain().await;
                SessionState::Terminated(end, notifications)
            }
            terminated @ SessionState::Terminated(..) => terminated,
        };
        Ok(next)
    }

    async fn greet(&mut self) -> Result<(), SessionError> {
        let welcome = format!(
            "Welcome to our {} booking application",
            self.conference_name
        );
        let status = format!(
            "We have total of {} tickets and {} are still remaining",
            self.store.total(),
            self.store.remaining()
        );
        self.say(&welcome).await?;
        self.say(&status).await?;
        self.say("Get your tickets here to attend").await?;
        Ok(())
    }

    /// Prompt for one booking attempt. `None` means input ended.
    ///
    /// An unparsable ticket count is reported and re-prompted; the names and
    /// email already entered are kept.
    async fn read_request(&mut self) -> Result<Option<BookingRequest>, SessionError> {
        let Some(first_name) = self.prompt("Enter your first name: ").await? else {
            return Ok(None);
        };
        let Some(last_name) = self.prompt("Enter your last name: ").await? else {
            return Ok(None);
        };
        let Some(email) = self.prompt("Enter your email address: ").await? else {
            return Ok(None);
        };

        loop {
            let Some(token) = self.prompt("Enter your number of tickets: ").await? else {
                return Ok(None);
            };
            match token.parse::<u32>() {
                Ok(ticket_count) => {
                    return Ok(Some(BookingRequest {
                        first_name,
                        last_name,
                        email,
                        ticket_count,
                    }));
                }
                Err(e) => {
                    info!("Unparsable ticket count {:?}: {}", token, e);
                    REJECTIONS_TOTAL
                        .with_label_values(&["unparsable_ticket_count"])
                        .inc();
                    self.say(INVALID_TICKET_COUNT).await?;
                }
            }
        }
    }

    async fn book(&mut self, request: BookingRequest) -> Result<(), SessionError> {
        let record = BookingRecord::from_request(request);
        let booking_id = record.id.clone();
        let notice = TicketNotice::from(&record);

        self.store.record_booking(record)?;
        self.notifications.spawn(notice.clone());
        info!(
            booking_id = %booking_id,
            tickets = notice.ticket_count,
            remaining = self.store.remaining(),
            "Booking accepted for {} {}",
            notice.first_name,
            notice.last_name
        );
        BOOKINGS_TOTAL.inc();
        TICKETS_BOOKED_TOTAL.inc_by(u64::from(notice.ticket_count));

        let bookings = serde_json::to_string(self.store.bookings())?;
        let remaining = format!(
            "{} tickets remaining for {}.",
            self.store.remaining(),
            self.conference_name
        );
        let thank_you = format!(
            "Thank you {} {} for booking {} tickets. You will receive a confirmation email at {}.",
            notice.first_name, notice.last_name, notice.ticket_count, notice.email
        );
        self.say(&format!("List of bookings: {}", bookings)).await?;
        self.say(&thank_you).await?;
        self.say(&remaining).await?;

        let first_names = format!(
            "First names of the users who booked the tickets are: [{}]",
            self.store.first_names().join(" ")
        );
        self.say(&first_names).await?;
        Ok(())
    }

    async fn prompt(&mut self, question: &str) -> Result<Option<String>, SessionError> {
        self.say(question).await?;
        Ok(self.input.next_token().await?)
    }

    async fn say(&mut self, line: &str) -> Result<(), SessionError> {
        let line = format!("{}\n", line);
        self.output.write_all(line.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    fn summary(&self, end: SessionEnd, notifications: DrainReport) -> SessionSummary {
        SessionSummary {
            end,
            bookings: self.store.len(),
            tickets_booked: self.store.tickets_booked(),
            remaining_tickets: self.store.remaining(),
            notifications,
        }
    }
}
