//! Submission limits configuration.

use serde::Deserialize;

use super::defaults::default_max_message_length;

/// Submission limits configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Longest message text, in characters, that may be submitted
    /// (default: 1000). Longer input is answered with a local warning.
    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_message_length: default_max_message_length(),
        }
    }
}
