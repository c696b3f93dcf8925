//! Permission masks pushed in by the chat authority.
//!
//! The authority decides which channels the user may send on (selectable)
//! and which may be filtered (filterable). This module stores the latest
//! masks and fans every change out to the registered listeners.

use chatroute_proto::{ChannelFlag, ChannelSet, ChatChannel, ChatMask, SelectChannel, SelectMask};
use tracing::debug;

/// The two permission masks at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Permissions {
    pub selectable: SelectMask,
    pub filterable: ChatMask,
}

/// A mask before and after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskChange<C: ChannelFlag> {
    pub old: ChannelSet<C>,
    pub new: ChannelSet<C>,
}

impl<C: ChannelFlag> MaskChange<C> {
    /// Channels present now that were absent before.
    pub fn gained(&self) -> ChannelSet<C> {
        self.new - self.old
    }

    /// Channels present before that are absent now.
    pub fn lost(&self) -> ChannelSet<C> {
        self.old - self.new
    }
}

/// Receiver of permission changes.
///
/// Both methods default to no-ops so listeners only implement the mask
/// they care about.
pub trait PermissionListener {
    /// The selectable mask changed. `ghosted` is the observer state at the
    /// time of the change.
    fn selectable_changed(&mut self, _change: MaskChange<SelectChannel>, _ghosted: bool) {}

    /// The filterable mask changed.
    fn filterable_changed(&mut self, _change: MaskChange<ChatChannel>) {}
}

/// Latest permission masks.
#[derive(Debug, Clone, Default)]
pub struct PermissionState {
    current: Permissions,
}

impl PermissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Permissions {
        self.current
    }

    pub fn selectable(&self) -> SelectMask {
        self.current.selectable
    }

    pub fn filterable(&self) -> ChatMask {
        self.current.filterable
    }

    /// Store a new selectable mask and notify listeners with the previous
    /// one.
    pub fn update_selectable(
        &mut self,
        new: SelectMask,
        ghosted: bool,
        listeners: &mut [&mut dyn PermissionListener],
    ) -> MaskChange<SelectChannel> {
        let old = self.current.selectable;
        self.replace_selectable(old, new, ghosted, listeners)
    }

    /// Like [`update_selectable`](Self::update_selectable), but with the
    /// previous mask supplied by the caller.
    ///
    /// The authority reports the mask it held before its own update; that
    /// value wins over whatever was stored here (e.g. on first attach,
    /// when nothing was stored yet).
    pub fn replace_selectable(
        &mut self,
        old: SelectMask,
        new: SelectMask,
        ghosted: bool,
        listeners: &mut [&mut dyn PermissionListener],
    ) -> MaskChange<SelectChannel> {
        self.current.selectable = new;
        let change = MaskChange { old, new };
        debug!(
            gained = ?change.gained(),
            lost = ?change.lost(),
            ghosted,
            "selectable channels changed"
        );
        for listener in listeners.iter_mut() {
            listener.selectable_changed(change, ghosted);
        }
        change
    }

    /// Store a new filterable mask and notify listeners.
    pub fn update_filterable(
        &mut self,
        new: ChatMask,
        listeners: &mut [&mut dyn PermissionListener],
    ) -> MaskChange<ChatChannel> {
        let change = MaskChange {
            old: self.current.filterable,
            new,
        };
        self.current.filterable = new;
        debug!(
            gained = ?change.gained(),
            lost = ?change.lost(),
            "filterable channels changed"
        );
        for listener in listeners.iter_mut() {
            listener.filterable_changed(change);
        }
        change
    }
}
