//! Default outgoing channel selection.
//!
//! The selector remembers two channels:
//!
//! - `selected`: used when typed text carries no prefix. Always a member of
//!   the current selectable mask, with OOC as the hard fallback.
//! - `preferred`: what the user last picked explicitly. When it becomes
//!   available again after a permission change (e.g. re-entering a body),
//!   it is selected automatically.
//!
//! The Local → Dead ghost remap is applied at every boundary where a channel
//! enters the selector.

use chatroute_proto::{
    ghost_remap, parse_input, prefix_for_channel, SelectChannel, SelectMask, SELECTOR_ORDER,
};
use tracing::{debug, warn};

use super::permissions::{MaskChange, PermissionListener};

/// Snapshot of what the selector may choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionScope {
    pub selectable: SelectMask,
    pub ghosted: bool,
}

impl SelectionScope {
    pub fn new(selectable: SelectMask, ghosted: bool) -> Self {
        Self {
            selectable,
            ghosted,
        }
    }

    #[inline]
    pub fn remap(&self, channel: SelectChannel) -> SelectChannel {
        ghost_remap(channel, self.ghosted)
    }

    /// Whether cycling may stop on `channel`.
    ///
    /// Local is skipped while ghosted: it remaps to Dead, which has its own
    /// slot in the selector order.
    #[inline]
    pub fn is_cycle_stop(&self, channel: SelectChannel) -> bool {
        self.remap(channel) == channel && self.selectable.contains(channel)
    }
}

/// One button of the channel selector popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorEntry {
    pub channel: SelectChannel,
    pub prefix: Option<char>,
}

/// Tracks the default outgoing channel and the user's preferred one.
#[derive(Debug, Clone)]
pub struct ChannelSelector {
    selected: SelectChannel,
    preferred: SelectChannel,
}

impl Default for ChannelSelector {
    fn default() -> Self {
        Self::new(SelectChannel::Ooc)
    }
}

impl ChannelSelector {
    /// Selector with both `selected` and `preferred` set to `initial`.
    pub fn new(initial: SelectChannel) -> Self {
        Self {
            selected: initial,
            preferred: initial,
        }
    }

    pub fn selected(&self) -> SelectChannel {
        self.selected
    }

    pub fn preferred(&self) -> SelectChannel {
        self.preferred
    }

    /// Make `channel` the default outgoing channel.
    ///
    /// Returns false, leaving state untouched, if the (ghost-remapped)
    /// channel is not selectable. Console is never accepted.
    pub fn select_channel(&mut self, channel: SelectChannel, scope: SelectionScope) -> bool {
        let channel = scope.remap(channel);
        if channel == SelectChannel::Console || !scope.selectable.contains(channel) {
            debug!(%channel, "channel not selectable");
            return false;
        }

        if self.selected != channel {
            debug!(from = %self.selected, to = %channel, "selected channel");
        }
        self.selected = channel;
        true
    }

    /// Record the user's intent. Does not select anything by itself.
    pub fn set_preferred(&mut self, channel: SelectChannel) {
        self.preferred = channel;
    }

    /// Step to the next (or previous) selectable channel in selector order.
    ///
    /// Walks at most one full lap; returns false without changing anything
    /// when no channel in the order is selectable.
    pub fn cycle(&mut self, forward: bool, scope: SelectionScope) -> bool {
        let len = SELECTOR_ORDER.len() as isize;
        let mut idx = SELECTOR_ORDER
            .iter()
            .position(|c| *c == self.selected)
            .map_or(-1, |i| i as isize);
        let step = if forward { 1 } else { -1 };

        for _ in 0..len {
            idx = (idx + step).rem_euclid(len);
            let candidate = SELECTOR_ORDER[idx as usize];
            if scope.is_cycle_stop(candidate) {
                return self.select_channel(candidate, scope);
            }
        }

        warn!("no selectable channel to cycle to");
        false
    }

    /// Re-evaluate selection after the selectable mask went from `old` to
    /// `scope.selectable`.
    ///
    /// 1. If the selected channel was lost, try its ghost remap, else OOC.
    /// 2. If the preferred channel just became available, select it. This
    ///    runs after step 1 and wins when both apply.
    pub fn on_permissions_changed(&mut self, old: SelectMask, scope: SelectionScope) {
        if !scope.selectable.contains(self.selected) {
            let mapped = scope.remap(self.selected);
            let fallback = if scope.selectable.contains(mapped) {
                mapped
            } else {
                SelectChannel::Ooc
            };
            if !self.select_channel(fallback, scope) {
                warn!(
                    selected = %self.selected,
                    selectable = ?scope.selectable,
                    "selected channel lost and no fallback available"
                );
            }
        }

        let preferred = scope.remap(self.preferred);
        if !old.contains(preferred) && scope.selectable.contains(preferred) {
            self.select_channel(preferred, scope);
        }
    }

    /// Channel `typed` would be sent on right now.
    pub fn effective_channel(&self, typed: &str, scope: SelectionScope) -> SelectChannel {
        parse_input(typed, scope.selectable, scope.ghosted)
            .channel
            .unwrap_or(self.selected)
    }

    /// Selectable channels in selector order, with their prefixes.
    pub fn available(scope: SelectionScope) -> Vec<SelectorEntry> {
        SELECTOR_ORDER
            .iter()
            .copied()
            .filter(|c| scope.selectable.contains(*c))
            .map(|channel| SelectorEntry {
                channel,
                prefix: prefix_for_channel(channel),
            })
            .collect()
    }
}

impl PermissionListener for ChannelSelector {
    fn selectable_changed(&mut self, change: MaskChange<SelectChannel>, ghosted: bool) {
        self.on_permissions_changed(change.old, SelectionScope::new(change.new, ghosted));
    }
}
