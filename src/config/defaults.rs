//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

use chatroute_proto::SelectChannel;

/// Returns `true` (for serde defaults).
pub fn default_true() -> bool {
    true
}

pub fn default_max_message_length() -> usize {
    1000
}

pub fn default_channel() -> SelectChannel {
    SelectChannel::Ooc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_true_helper_returns_true() {
        assert!(default_true());
    }

    #[test]
    fn default_channel_is_ooc() {
        assert_eq!(default_channel(), SelectChannel::Ooc);
    }
}
