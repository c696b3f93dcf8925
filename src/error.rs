//! Error types for chat routing.
//!
//! Nothing in the router is fatal. Rejected operations report `false` or
//! `None`; a refused submission reports a [`SubmitError`] so the caller can
//! tell an empty line from an over-long one.

use thiserror::Error;

// ============================================================================
// Submit Errors
// ============================================================================

/// Reasons a line of input was not handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Input was empty or whitespace only. Nothing happens.
    #[error("nothing to send")]
    Empty,

    /// Message text exceeds the configured limit. A local warning has
    /// already been written to the display sink.
    #[error("message is {length} characters long, limit is {limit}")]
    TooLong { length: usize, limit: usize },
}

impl SubmitError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::TooLong { .. } => "too_long",
        }
    }
}
