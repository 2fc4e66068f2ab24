use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Conference name is not blank
/// - Ticket inventory is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.conference.name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "conference.name cannot be empty".to_string(),
        ));
    }

    if config.conference.total_tickets == 0 {
        return Err(ConfigError::ValidationError(
            "conference.total_tickets cannot be 0".to_string(),
        ));
    }

    Ok(())
}
