//! Channel selector configuration.

use chatroute_proto::SelectChannel;
use serde::Deserialize;

use super::defaults::{default_channel, default_true};

/// Channel selector configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorConfig {
    /// Channel selected (and preferred) when the router is created
    /// (default: `"ooc"`). Console is rejected by validation.
    #[serde(default = "default_channel")]
    pub default_channel: SelectChannel,
    /// Whether the input should give up focus after a submit (default: true).
    #[serde(default = "default_true")]
    pub release_focus_on_enter: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            default_channel: default_channel(),
            release_focus_on_enter: default_true(),
        }
    }
}
