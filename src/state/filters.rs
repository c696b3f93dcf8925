//! Per-channel visibility toggles.

use chatroute_proto::{ChatChannel, ChatMask, FILTER_ORDER};
use tracing::debug;

use super::permissions::{MaskChange, PermissionListener};
use super::unread::UnreadTracker;

/// One row of the filter popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterEntry {
    pub channel: ChatChannel,
    pub enabled: bool,
    pub unread: Option<u32>,
}

/// Which incoming channels are shown.
///
/// Only channels that are currently filterable can be toggled; a channel
/// that stops being filterable loses its bit and is hidden from then on.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    active: ChatMask,
    available: Vec<ChatChannel>,
}

impl FilterSet {
    /// Filter set with `initial` enabled and nothing available yet.
    ///
    /// The first [`rebuild_available`](Self::rebuild_available) trims
    /// `initial` to what is actually filterable.
    pub fn new(initial: ChatMask) -> Self {
        Self {
            active: initial,
            available: Vec::new(),
        }
    }

    pub fn active(&self) -> ChatMask {
        self.active
    }

    /// Toggle-able channels, in filter order.
    pub fn available(&self) -> &[ChatChannel] {
        &self.available
    }

    /// Recompute the toggle-able channels from the filterable mask.
    ///
    /// Channels that remain available keep their on/off state.
    pub fn rebuild_available(&mut self, filterable: ChatMask) {
        self.available = FILTER_ORDER
            .iter()
            .copied()
            .filter(|c| filterable.contains(*c))
            .collect();

        let dropped = self.active - filterable;
        if !dropped.is_empty() {
            debug!(?dropped, "filters no longer available");
        }
        self.active = self.active & filterable;
    }

    /// Turn display of `channel` on or off.
    ///
    /// Returns false if the channel is not currently toggle-able.
    pub fn toggle(&mut self, channel: ChatChannel, on: bool) -> bool {
        if !self.available.contains(&channel) {
            debug!(%channel, "filter not available");
            return false;
        }
        self.active.set(channel, on);
        true
    }

    #[inline]
    pub fn is_visible(&self, channel: ChatChannel) -> bool {
        self.active.contains(channel)
    }

    /// Rows for the filter popup, with current unread counts.
    pub fn entries(&self, unread: &UnreadTracker) -> Vec<FilterEntry> {
        self.available
            .iter()
            .map(|&channel| FilterEntry {
                channel,
                enabled: self.is_visible(channel),
                unread: unread.get(channel),
            })
            .collect()
    }
}

impl PermissionListener for FilterSet {
    fn filterable_changed(&mut self, change: MaskChange<ChatChannel>) {
        self.rebuild_available(change.new);
    }
}
