//! Configuration validation.
//!
//! Validates configuration at load time to catch common errors early.

use chatroute_proto::SelectChannel;
use thiserror::Error;

use super::Config;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("limits.max_message_length must be greater than 0")]
    ZeroMessageLength,
    #[error("selector.default_channel cannot be {0}: it is only reachable by prefix")]
    UnselectableDefault(SelectChannel),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.limits.max_message_length == 0 {
        errors.push(ValidationError::ZeroMessageLength);
    }

    if config.selector.default_channel == SelectChannel::Console {
        errors.push(ValidationError::UnselectableDefault(
            config.selector.default_channel,
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
