//! Interactive booking session.
//!
//! The session drives one conference's sale from greeting to sell-out:
//! - **Input**: four whitespace-delimited tokens per attempt
//! - **Validation**: name, email, and ticket count checked independently
//! - **Booking**: recorded in the store, ticket delivered in the background
//! - **Shutdown**: waits for every outstanding delivery before returning

mod input;
mod runner;
mod types;

pub use input::TokenReader;
pub use runner::Session;
pub use types::{SessionEnd, SessionError, SessionSummary};
