//! Error types for the channel vocabulary.

use thiserror::Error;

/// Failure to turn a channel name into a channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseChannelError {
    /// The name does not match any channel of the requested kind.
    #[error("unknown channel: {0:?}")]
    UnknownChannel(String),
}
