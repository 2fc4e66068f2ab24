//! User input validation.

use std::fmt;

/// Result of checking a booking attempt.
///
/// The three checks are independent; any combination of failures is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// First and last name are both at least 2 bytes long.
    pub name_ok: bool,
    /// Email contains both an `@` and a `.`.
    pub email_ok: bool,
    /// Requested count is non-zero and fits in the remaining inventory.
    pub tickets_ok: bool,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.name_ok && self.email_ok && self.tickets_ok
    }

    /// Failed checks, in name/email/ticket-count order.
    pub fn failures(&self) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();
        if !self.name_ok {
            failures.push(ValidationFailure::Name);
        }
        if !self.email_ok {
            failures.push(ValidationFailure::Email);
        }
        if !self.tickets_ok {
            failures.push(ValidationFailure::TicketCount);
        }
        failures
    }
}

/// A single failed validation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    Name,
    Email,
    TicketCount,
}

impl ValidationFailure {
    /// Diagnostic shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationFailure::Name => "Please enter a valid first name and last name.",
            ValidationFailure::Email => "Please enter a valid email address.",
            ValidationFailure::TicketCount => "Please enter a valid number of tickets.",
        }
    }

    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationFailure::Name => "name",
            ValidationFailure::Email => "email",
            ValidationFailure::TicketCount => "ticket_count",
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a booking attempt against the current inventory.
///
/// Name length is measured in bytes.
pub fn validate_user_input(
    first_name: &str,
    last_name: &str,
    email: &str,
    requested_tickets: u32,
    remaining_tickets: u32,
) -> ValidationOutcome {
    ValidationOutcome {
        name_ok: first_name.len() >= 2 && last_name.len() >= 2,
        email_ok: email.contains('@') && email.contains('.'),
        tickets_ok: requested_tickets > 0 && requested_tickets <= remaining_tickets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name_ok: bool, email_ok: bool, tickets_ok: bool) -> ValidationOutcome {
        ValidationOutcome {
            name_ok,
            email_ok,
            tickets_ok,
        }
    }

    #[test]
    fn test_all_valid() {
        assert_eq!(
            validate_user_input("Al", "Bo", "a@b.c", 5, 10),
            outcome(true, true, true)
        );
    }

    #[test]
    fn test_short_first_name() {
        assert_eq!(
            validate_user_input("A", "Bo", "a@b.c", 5, 10),
            outcome(false, true, true)
        );
    }

    #[test]
    fn test_short_last_name() {
        assert!(!validate_user_input("Al", "B", "a@b.c", 5, 10).name_ok);
    }

    #[test]
    fn test_email_without_at_or_dot() {
        assert_eq!(
            validate_user_input("Al", "Bo", "abc", 5, 10),
            outcome(true, false, true)
        );
        assert!(!validate_user_input("Al", "Bo", "a@bc", 5, 10).email_ok);
        assert!(!validate_user_input("Al", "Bo", "a.bc", 5, 10).email_ok);
    }

    #[test]
    fn test_email_order_does_not_matter() {
        assert!(validate_user_input("Al", "Bo", ".a@", 5, 10).email_ok);
    }

    #[test]
    fn test_zero_and_over_capacity_rejected() {
        assert_eq!(
            validate_user_input("Al", "Bo", "a@b.c", 0, 10),
            outcome(true, true, false)
        );
        assert_eq!(
            validate_user_input("Al", "Bo", "a@b.c", 11, 10),
            outcome(true, true, false)
        );
    }

    #[test]
    fn test_exact_remaining_accepted() {
        assert!(validate_user_input("Al", "Bo", "a@b.c", 10, 10).tickets_ok);
    }

    #[test]
    fn test_name_check_independent_of_other_fields() {
        for (email, requested, remaining) in [("", 0, 0), ("x@y.z", 3, 3), ("nope", 99, 1)] {
            assert!(validate_user_input("Al", "Bo", email, requested, remaining).name_ok);
            assert!(!validate_user_input("A", "Bo", email, requested, remaining).name_ok);
        }
    }

    #[test]
    fn test_name_length_counts_bytes() {
        // "É" is two bytes in UTF-8.
        assert!(validate_user_input("É", "Bo", "a@b.c", 1, 1).name_ok);
    }

    #[test]
    fn test_failures_in_order() {
        let all_bad = validate_user_input("A", "B", "abc", 0, 10);
        assert!(!all_bad.is_valid());
        assert_eq!(
            all_bad.failures(),
            vec![
                ValidationFailure::Name,
                ValidationFailure::Email,
                ValidationFailure::TicketCount
            ]
        );
        assert!(outcome(true, true, true).failures().is_empty());
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            ValidationFailure::Email.message(),
            "Please enter a valid email address."
        );
        assert_eq!(ValidationFailure::TicketCount.to_string(), "ticket_count");
    }
}
