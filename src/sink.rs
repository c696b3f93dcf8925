//! Outbound effects of the router.
//!
//! The router never renders, sends or persists anything itself. Every
//! externally visible effect goes through a [`ChatSink`]: indicator
//! refreshes, filter toggles (so the authority can persist them), outgoing
//! messages (for the transport) and display lines.

use std::sync::Arc;

use chatroute_proto::{ChatChannel, ChatMask, Color, SelectChannel};
use parking_lot::Mutex;

use crate::message::DisplayLine;
use crate::state::{FilterEntry, SelectorEntry};

/// Channel indicator next to the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub channel: SelectChannel,
    pub color: Color,
}

impl Indicator {
    pub fn for_channel(channel: SelectChannel) -> Self {
        Self {
            channel,
            color: channel.indicator_color(),
        }
    }
}

/// Receiver of everything the router produces.
pub trait ChatSink: Send {
    /// The channel a submit would use changed (or may have changed).
    fn selection_changed(&mut self, indicator: Indicator);

    /// The user toggled a filter. Forwarded so the choice can be persisted.
    fn filter_toggled(&mut self, channel: ChatChannel, enabled: bool);

    /// Send `text` on `channel`.
    fn submit_message(&mut self, text: &str, channel: SelectChannel);

    /// Show a line.
    fn display(&mut self, line: DisplayLine);

    /// The display is about to be repopulated from history.
    fn clear_display(&mut self) {}

    /// Stored messages on `active` channels are about to be shown, so the
    /// count owner should stop counting them as unread.
    fn clear_unfiltered_unreads(&mut self, _active: ChatMask) {}

    /// The selector popup contents changed.
    fn selector_refreshed(&mut self, _entries: &[SelectorEntry]) {}

    /// The filter rows (availability, state or unread counts) changed.
    fn filters_refreshed(&mut self, _entries: &[FilterEntry]) {}
}

/// Sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ChatSink for NullSink {
    fn selection_changed(&mut self, _indicator: Indicator) {}
    fn filter_toggled(&mut self, _channel: ChatChannel, _enabled: bool) {}
    fn submit_message(&mut self, _text: &str, _channel: SelectChannel) {}
    fn display(&mut self, _line: DisplayLine) {}
}

/// One recorded sink call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Selection(Indicator),
    FilterToggled(ChatChannel, bool),
    Submitted(String, SelectChannel),
    Display(DisplayLine),
    ClearDisplay,
    ClearUnfilteredUnreads(ChatMask),
    SelectorRefreshed(Vec<SelectorEntry>),
    FiltersRefreshed(Vec<FilterEntry>),
}

/// Sink that records every call into a shared log.
///
/// Clones share the log, so one clone can be handed to the router while
/// another is inspected.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<SinkEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything recorded so far.
    pub fn drain(&self) -> Vec<SinkEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().clone()
    }

    /// Messages handed to the transport.
    pub fn submitted(&self) -> Vec<(String, SelectChannel)> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Submitted(text, channel) => Some((text.clone(), *channel)),
                _ => None,
            })
            .collect()
    }

    /// Lines handed to the display.
    pub fn displayed(&self) -> Vec<DisplayLine> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Display(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }

    /// Most recent indicator refresh.
    pub fn last_indicator(&self) -> Option<Indicator> {
        self.events.lock().iter().rev().find_map(|e| match e {
            SinkEvent::Selection(indicator) => Some(*indicator),
            _ => None,
        })
    }

    fn push(&self, event: SinkEvent) {
        self.events.lock().push(event);
    }
}

impl ChatSink for RecordingSink {
    fn selection_changed(&mut self, indicator: Indicator) {
        self.push(SinkEvent::Selection(indicator));
    }

    fn filter_toggled(&mut self, channel: ChatChannel, enabled: bool) {
        self.push(SinkEvent::FilterToggled(channel, enabled));
    }

    fn submit_message(&mut self, text: &str, channel: SelectChannel) {
        self.push(SinkEvent::Submitted(text.to_string(), channel));
    }

    fn display(&mut self, line: DisplayLine) {
        self.push(SinkEvent::Display(line));
    }

    fn clear_display(&mut self) {
        self.push(SinkEvent::ClearDisplay);
    }

    fn clear_unfiltered_unreads(&mut self, active: ChatMask) {
        self.push(SinkEvent::ClearUnfilteredUnreads(active));
    }

    fn selector_refreshed(&mut self, entries: &[SelectorEntry]) {
        self.push(SinkEvent::SelectorRefreshed(entries.to_vec()));
    }

    fn filters_refreshed(&mut self, entries: &[FilterEntry]) {
        self.push(SinkEvent::FiltersRefreshed(entries.to_vec()));
    }
}
