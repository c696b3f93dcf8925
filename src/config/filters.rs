//! Initial filter configuration.

use chatroute_proto::ChatMask;
use serde::Deserialize;

/// Initial filter configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FiltersConfig {
    /// Channels whose messages are shown from the start (default: none).
    /// Channels that are not filterable once permissions arrive are dropped.
    #[serde(default)]
    pub enabled: ChatMask,
}
