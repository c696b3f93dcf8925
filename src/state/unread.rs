//! Read-only view of per-channel unread counts.
//!
//! Counting happens elsewhere (whoever stores history knows which messages
//! are unread). The router only looks counts up when the filter rows need
//! refreshing.

use std::collections::HashMap;
use std::sync::Arc;

use chatroute_proto::ChatChannel;
use parking_lot::Mutex;

/// Externally owned unread counts.
pub trait UnreadSource: Send {
    fn unread(&self, channel: ChatChannel) -> Option<u32>;
}

impl<F> UnreadSource for F
where
    F: Fn(ChatChannel) -> Option<u32> + Send,
{
    fn unread(&self, channel: ChatChannel) -> Option<u32> {
        self(channel)
    }
}

/// Shared count map, for owners that keep counts in memory.
#[derive(Debug, Clone, Default)]
pub struct UnreadCounts(Arc<Mutex<HashMap<ChatChannel, u32>>>);

impl UnreadCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, channel: ChatChannel, count: u32) {
        self.0.lock().insert(channel, count);
    }

    pub fn clear(&self, channel: ChatChannel) {
        self.0.lock().remove(&channel);
    }
}

impl UnreadSource for UnreadCounts {
    fn unread(&self, channel: ChatChannel) -> Option<u32> {
        self.0.lock().get(&channel).copied()
    }
}

/// Read-only lookup of unread counts for the filter rows.
pub struct UnreadTracker {
    source: Box<dyn UnreadSource>,
}

impl UnreadTracker {
    pub fn new(source: impl UnreadSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Tracker that never reports anything unread.
    pub fn none() -> Self {
        Self::new(|_: ChatChannel| None)
    }

    #[inline]
    pub fn get(&self, channel: ChatChannel) -> Option<u32> {
        self.source.unread(channel)
    }
}

impl std::fmt::Debug for UnreadTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnreadTracker").finish_non_exhaustive()
    }
}

/// Badge text next to a filter row: nothing for zero, `9+` past nine.
pub fn unread_badge(count: Option<u32>) -> Option<String> {
    match count {
        None | Some(0) => None,
        Some(n @ 1..=9) => Some(n.to_string()),
        Some(_) => Some("9+".to_string()),
    }
}
