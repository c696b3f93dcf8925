//! The chat router.
//!
//! [`ChatRouter`] owns every piece of routing state and is the only thing
//! that talks to the [`ChatSink`]. It is driven by explicit calls (user
//! input) and by [`ChatEvent`]s from the chat owner.

use std::sync::Arc;

use chatroute_proto::{
    ChannelFlag, ChatChannel, SelectChannel, SelectMask, parse_input, prefix_for_channel,
};
use parking_lot::Mutex;
use tracing::debug;

use crate::config::Config;
use crate::error::SubmitError;
use crate::events::{ChatEvent, ChatEventBus, ChatEventHandler, Subscription};
use crate::message::{DisplayLine, StoredMessage};
use crate::sink::{ChatSink, Indicator};
use crate::state::{
    ChannelSelector, FilterEntry, FilterSet, PermissionState, Permissions, SelectionScope,
    UnreadTracker,
};
use crate::telemetry;

/// Whether the local player is currently an observer.
pub trait GhostState: Send {
    fn is_ghost(&self) -> bool;
}

impl<F> GhostState for F
where
    F: Fn() -> bool + Send,
{
    fn is_ghost(&self) -> bool {
        self()
    }
}

/// Outcome of a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submitted {
    /// Channel the message went out on.
    pub channel: SelectChannel,
    /// Whether the input should give up keyboard focus now.
    pub release_focus: bool,
}

/// Rewritten input line after [`ChatRouter::focus`].
///
/// Offsets count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusEdit {
    pub text: String,
    /// Start of the highlighted range; it runs to `cursor`.
    pub selection_start: usize,
    pub cursor: usize,
}

/// Owns all routing state and turns input and chat events into sink calls.
pub struct ChatRouter {
    config: Config,
    permissions: PermissionState,
    selector: ChannelSelector,
    filters: FilterSet,
    unread: UnreadTracker,
    ghost: Box<dyn GhostState>,
    sink: Box<dyn ChatSink>,
    draft: String,
}

impl ChatRouter {
    /// Router with no permissions yet. Nothing is selectable or visible
    /// until the first permission update (see [`attach`](Self::attach)).
    pub fn new(
        config: Config,
        ghost: impl GhostState + 'static,
        unread: UnreadTracker,
        sink: impl ChatSink + 'static,
    ) -> Self {
        Self {
            selector: ChannelSelector::new(config.selector.default_channel),
            filters: FilterSet::new(config.filters.enabled),
            permissions: PermissionState::new(),
            config,
            unread,
            ghost: Box::new(ghost),
            sink: Box::new(sink),
            draft: String::new(),
        }
    }

    /// Evaluate `current` as if nothing was permitted before, repopulate
    /// the display from `history`, then subscribe to `bus`.
    ///
    /// Before the replay the sink is told which channels are visible, so
    /// history logged before the router existed stops counting as unread.
    ///
    /// Dropping the returned guard detaches the router again.
    pub fn attach(
        router: &Arc<Mutex<ChatRouter>>,
        bus: &ChatEventBus,
        current: Permissions,
        history: &mut [StoredMessage],
    ) -> Subscription {
        {
            let mut this = router.lock();
            this.on_permissions_changed(SelectMask::empty(), current);
            let active = this.filters.active();
            this.sink.clear_unfiltered_unreads(active);
            this.replay(history);
        }
        bus.subscribe(router.clone())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn permissions(&self) -> Permissions {
        self.permissions.current()
    }

    pub fn selected(&self) -> SelectChannel {
        self.selector.selected()
    }

    pub fn preferred(&self) -> SelectChannel {
        self.selector.preferred()
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Text currently in the input line, as last reported.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    fn scope(&self) -> SelectionScope {
        SelectionScope::new(self.permissions.selectable(), self.ghost.is_ghost())
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Route one line of user input.
    ///
    /// The input line is considered cleared afterwards whatever the
    /// outcome, and the indicator is refreshed accordingly.
    pub fn submit(&mut self, raw: &str) -> Result<Submitted, SubmitError> {
        let span = telemetry::submit(self.selector.selected().name());
        let _enter = span.enter();

        let result = self.route(raw);
        if let Err(err) = &result {
            debug!(code = err.error_code(), "submit rejected");
        }

        self.draft.clear();
        self.refresh_indicator();
        result
    }

    fn route(&mut self, raw: &str) -> Result<Submitted, SubmitError> {
        if raw.trim().is_empty() {
            return Err(SubmitError::Empty);
        }

        let scope = self.scope();
        let parsed = parse_input(raw, scope.selectable, scope.ghosted);
        let channel = parsed.channel.unwrap_or(self.selector.selected());

        let length = parsed.text.chars().count();
        let limit = self.config.limits.max_message_length;
        if length > limit {
            self.sink.display(DisplayLine::max_length_warning(limit));
            return Err(SubmitError::TooLong { length, limit });
        }

        debug!(%channel, length, "submitting");
        self.sink.submit_message(parsed.text, channel);
        Ok(Submitted {
            channel,
            release_focus: self.config.selector.release_focus_on_enter,
        })
    }

    /// The input line now reads `text`.
    pub fn input_changed(&mut self, text: &str) {
        self.draft.clear();
        self.draft.push_str(text);
        self.refresh_indicator();
    }

    /// Channel `typed` would be sent on right now.
    pub fn effective_channel(&self, typed: &str) -> SelectChannel {
        self.selector.effective_channel(typed, self.scope())
    }

    /// Focus the input, optionally retargeting the typed text at `channel`.
    ///
    /// Without a channel the text is left alone with the cursor at the end.
    /// With one, any valid prefix is replaced: by nothing if `channel` is
    /// already selected, by the channel's own prefix otherwise. Returns
    /// `None` (and changes nothing) if `channel` is not selectable or has
    /// no prefix.
    pub fn focus(&mut self, channel: Option<SelectChannel>, current: &str) -> Option<FocusEdit> {
        let Some(channel) = channel else {
            let cursor = current.chars().count();
            return Some(FocusEdit {
                text: current.to_string(),
                selection_start: cursor,
                cursor,
            });
        };

        let scope = self.scope();
        let channel = scope.remap(channel);
        if !scope.selectable.contains(channel) {
            debug!(%channel, "focus on unselectable channel ignored");
            return None;
        }
        let prefix = prefix_for_channel(channel)?;

        let rest = parse_input(current, scope.selectable, scope.ghosted).text;
        let (text, selection_start) = if channel == self.selector.selected() {
            (rest.to_string(), 0)
        } else {
            (format!("{prefix} {rest}"), 2)
        };

        self.input_changed(&text);
        Some(FocusEdit {
            cursor: text.chars().count(),
            text,
            selection_start,
        })
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn select_channel(&mut self, channel: SelectChannel) -> bool {
        let selected = self.selector.select_channel(channel, self.scope());
        if selected {
            self.refresh_indicator();
        }
        selected
    }

    pub fn set_preferred(&mut self, channel: SelectChannel) {
        self.selector.set_preferred(channel);
    }

    /// Explicit pick from the selector popup: remember it and select it.
    pub fn choose_channel(&mut self, channel: SelectChannel) -> bool {
        self.selector.set_preferred(channel);
        self.select_channel(channel)
    }

    pub fn cycle(&mut self, forward: bool) -> bool {
        let moved = self.selector.cycle(forward, self.scope());
        if moved {
            self.refresh_indicator();
        }
        moved
    }

    /// Indicator for the current draft.
    pub fn indicator(&self) -> Indicator {
        Indicator::for_channel(self.effective_channel(&self.draft))
    }

    fn refresh_indicator(&mut self) {
        let indicator = self.indicator();
        self.sink.selection_changed(indicator);
    }

    // ========================================================================
    // Filters and display
    // ========================================================================

    /// Show or hide `channel`. Returns false if it cannot be toggled.
    pub fn toggle_filter(&mut self, channel: ChatChannel, on: bool) -> bool {
        if !self.filters.toggle(channel, on) {
            return false;
        }
        self.sink.filter_toggled(channel, on);
        self.refresh_filters();
        true
    }

    /// Filter rows with their current unread counts.
    pub fn filter_entries(&self) -> Vec<FilterEntry> {
        self.filters.entries(&self.unread)
    }

    /// Re-query unread counts for the filter rows.
    pub fn unread_counts_changed(&mut self) {
        self.refresh_filters();
    }

    fn refresh_filters(&mut self) {
        let entries = self.filter_entries();
        self.sink.filters_refreshed(&entries);
    }

    /// Display `message` if its channel is visible, marking it read.
    ///
    /// Returns whether it was displayed.
    pub fn receive(&mut self, message: &mut StoredMessage) -> bool {
        debug!(target: "chat", channel = %message.channel, text = %message.text, "message");

        if !self.filters.is_visible(message.channel) {
            return false;
        }
        message.read = true;
        self.sink.display(DisplayLine::message(message));
        true
    }

    /// Clear the display and run every message in `history` through
    /// [`receive`](Self::receive), in order.
    pub fn replay(&mut self, history: &mut [StoredMessage]) {
        let span = telemetry::replay(history.len());
        let _enter = span.enter();

        self.sink.clear_display();
        for message in history.iter_mut() {
            self.receive(message);
        }
    }

    // ========================================================================
    // Permissions
    // ========================================================================

    /// Apply new permission masks, diffing against the stored ones.
    pub fn update_permissions(&mut self, current: Permissions) {
        let old = self.permissions.selectable();
        self.on_permissions_changed(old, current);
    }

    /// Apply new permission masks; `old_selectable` is the mask the
    /// authority held before this change.
    pub fn on_permissions_changed(&mut self, old_selectable: SelectMask, current: Permissions) {
        let ghosted = self.ghost.is_ghost();
        let span = telemetry::permissions(&current, ghosted);
        let _enter = span.enter();

        self.permissions.replace_selectable(
            old_selectable,
            current.selectable,
            ghosted,
            &mut [&mut self.selector],
        );
        self.permissions
            .update_filterable(current.filterable, &mut [&mut self.filters]);

        let entries = ChannelSelector::available(self.scope());
        self.sink.selector_refreshed(&entries);
        self.refresh_filters();
        self.refresh_indicator();
    }
}

impl ChatEventHandler for ChatRouter {
    fn on_event(&mut self, event: &mut ChatEvent<'_>) {
        match event {
            ChatEvent::PermissionsChanged {
                old_selectable,
                current,
            } => self.on_permissions_changed(*old_selectable, *current),
            ChatEvent::MessageArrived(message) => {
                self.receive(message);
            }
            ChatEvent::UnreadCountsChanged => self.unread_counts_changed(),
            ChatEvent::FiltersReset { current, history } => {
                self.update_permissions(*current);
                self.replay(history);
            }
        }
    }
}

impl std::fmt::Debug for ChatRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatRouter")
            .field("permissions", &self.permissions.current())
            .field("selector", &self.selector)
            .field("filters", &self.filters)
            .field("draft", &self.draft)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::LineBody;
    use crate::sink::{RecordingSink, SinkEvent};
    use chatroute_proto::{ChatMask, Color};
    use SelectChannel::*;

    fn router_with(config: Config, ghost: bool) -> (ChatRouter, RecordingSink) {
        let sink = RecordingSink::new();
        let router = ChatRouter::new(config, move || ghost, UnreadTracker::none(), sink.clone());
        (router, sink)
    }

    fn perms(select: &[SelectChannel], filter: &[ChatChannel]) -> Permissions {
        Permissions {
            selectable: select.iter().copied().collect(),
            filterable: filter.iter().copied().collect(),
        }
    }

    #[test]
    fn prefixed_submit_uses_prefix_channel() {
        let (mut router, sink) = router_with(Config::default(), false);
        router.update_permissions(perms(&[Ooc, Radio], &[]));

        let sent = router.submit(";hello").unwrap();
        assert_eq!(sent.channel, Radio);
        assert!(sent.release_focus);
        assert_eq!(sink.submitted(), vec![("hello".to_string(), Radio)]);
        assert_eq!(router.selected(), Ooc);
    }

    #[test]
    fn unprefixed_submit_uses_selected_channel() {
        let (mut router, sink) = router_with(Config::default(), false);
        router.update_permissions(perms(&[Ooc, Admin], &[]));
        router.select_channel(Admin);

        router.submit("  status?  ").unwrap();
        assert_eq!(sink.submitted(), vec![("status?".to_string(), Admin)]);
    }

    #[test]
    fn empty_submit_sends_nothing() {
        let (mut router, sink) = router_with(Config::default(), false);
        router.update_permissions(perms(&[Ooc], &[]));

        assert_eq!(router.submit("   "), Err(SubmitError::Empty));
        assert!(sink.submitted().is_empty());
    }

    #[test]
    fn over_long_submit_warns_locally() {
        let mut config = Config::default();
        config.limits.max_message_length = 5;
        let (mut router, sink) = router_with(config, false);
        router.update_permissions(perms(&[Ooc], &[]));

        assert_eq!(
            router.submit("[ 123456"),
            Err(SubmitError::TooLong { length: 6, limit: 5 })
        );
        assert!(sink.submitted().is_empty());
        assert_eq!(
            sink.displayed(),
            vec![DisplayLine::max_length_warning(5)]
        );

        // Exactly at the limit is fine.
        assert!(router.submit("12345").is_ok());
    }

    #[test]
    fn length_counts_characters() {
        let mut config = Config::default();
        config.limits.max_message_length = 3;
        let (mut router, _sink) = router_with(config, false);
        router.update_permissions(perms(&[Ooc], &[]));

        assert!(router.submit("äöü").is_ok());
    }

    #[test]
    fn submit_resets_indicator_to_selected() {
        let (mut router, sink) = router_with(Config::default(), false);
        router.update_permissions(perms(&[Ooc, Radio], &[]));
        router.input_changed(";hi");
        assert_eq!(router.indicator().channel, Radio);

        router.submit(";hi").unwrap();
        assert_eq!(router.draft(), "");
        assert_eq!(sink.last_indicator(), Some(Indicator::for_channel(Ooc)));
    }

    #[test]
    fn release_focus_follows_config() {
        let mut config = Config::default();
        config.selector.release_focus_on_enter = false;
        let (mut router, _sink) = router_with(config, false);
        router.update_permissions(perms(&[Ooc], &[]));

        assert!(!router.submit("hi").unwrap().release_focus);
    }

    #[test]
    fn receive_respects_filters() {
        let (mut router, sink) = router_with(Config::default(), false);
        router.update_permissions(perms(&[], &[ChatChannel::Ooc, ChatChannel::Radio]));
        router.toggle_filter(ChatChannel::Ooc, true);

        let mut shown = StoredMessage::new(ChatChannel::Ooc, "hello");
        let mut hidden = StoredMessage::new(ChatChannel::Radio, "psst");
        assert!(router.receive(&mut shown));
        assert!(!router.receive(&mut hidden));

        assert!(shown.read);
        assert!(!hidden.read);
        assert_eq!(sink.displayed(), vec![DisplayLine::message(&shown)]);
    }

    #[test]
    fn receive_carries_wrap_and_color_override() {
        let (mut router, sink) = router_with(Config::default(), false);
        router.update_permissions(perms(&[], &[ChatChannel::Local]));
        router.toggle_filter(ChatChannel::Local, true);

        let mut msg = StoredMessage::new(ChatChannel::Local, "hi")
            .with_wrap("{0} says, \"{1}\"")
            .with_color(Color::RED);
        router.receive(&mut msg);

        let line = &sink.displayed()[0];
        assert_eq!(line.color, Color::RED);
        assert_eq!(
            line.body,
            LineBody::Message {
                text: "hi".to_string(),
                wrap: Some("{0} says, \"{1}\"".to_string())
            }
        );
    }

    #[test]
    fn toggle_filter_is_forwarded() {
        let (mut router, sink) = router_with(Config::default(), false);
        router.update_permissions(perms(&[], &[ChatChannel::Dead]));
        sink.drain();

        assert!(router.toggle_filter(ChatChannel::Dead, true));
        assert!(!router.toggle_filter(ChatChannel::Admin, true));

        let events = sink.drain();
        assert_eq!(events[0], SinkEvent::FilterToggled(ChatChannel::Dead, true));
        assert_eq!(
            events.iter().filter(|e| matches!(e, SinkEvent::FilterToggled(..))).count(),
            1
        );
    }

    #[test]
    fn configured_filters_are_trimmed_to_filterable() {
        let mut config = Config::default();
        config.filters.enabled = [ChatChannel::Ooc, ChatChannel::Admin].into_iter().collect();
        let (mut router, _sink) = router_with(config, false);

        router.update_permissions(perms(&[], &[ChatChannel::Ooc]));
        assert_eq!(router.filters().active(), ChatMask::from(ChatChannel::Ooc));
    }

    #[test]
    fn losing_selected_channel_falls_back() {
        let (mut router, sink) = router_with(Config::default(), false);
        router.update_permissions(perms(&[Ooc, Radio], &[]));
        router.select_channel(Radio);

        router.update_permissions(perms(&[Ooc], &[]));
        assert_eq!(router.selected(), Ooc);
        assert_eq!(sink.last_indicator(), Some(Indicator::for_channel(Ooc)));
    }

    #[test]
    fn choose_channel_records_preference() {
        let (mut router, _sink) = router_with(Config::default(), false);
        router.update_permissions(perms(&[Ooc, Local], &[]));

        assert!(router.choose_channel(Local));
        router.update_permissions(perms(&[Ooc], &[]));
        assert_eq!(router.selected(), Ooc);

        router.update_permissions(perms(&[Ooc, Local], &[]));
        assert_eq!(router.selected(), Local);
    }

    #[test]
    fn permission_change_refreshes_selector_entries() {
        let (mut router, sink) = router_with(Config::default(), false);
        router.update_permissions(perms(&[Ooc, Console, Radio], &[]));

        let refreshed = sink.events().into_iter().find_map(|e| match e {
            SinkEvent::SelectorRefreshed(entries) => Some(entries),
            _ => None,
        });
        let channels: Vec<_> = refreshed.unwrap().iter().map(|e| e.channel).collect();
        assert_eq!(channels, vec![Radio, Ooc]);
    }

    #[test]
    fn focus_swaps_prefix() {
        let (mut router, _sink) = router_with(Config::default(), false);
        router.update_permissions(perms(&[Ooc, Radio, Local], &[]));

        let edit = router.focus(Some(Radio), ".hello").unwrap();
        assert_eq!(edit.text, "; hello");
        assert_eq!(edit.selection_start, 2);
        assert_eq!(edit.cursor, 7);
        assert_eq!(router.indicator().channel, Radio);
    }

    #[test]
    fn focus_on_selected_channel_strips_prefix() {
        let (mut router, _sink) = router_with(Config::default(), false);
        router.update_permissions(perms(&[Ooc, Radio], &[]));

        let edit = router.focus(Some(Ooc), "; hello").unwrap();
        assert_eq!(edit.text, "hello");
        assert_eq!(edit.selection_start, 0);
        assert_eq!(edit.cursor, 5);
    }

    #[test]
    fn focus_rejects_unselectable_and_console() {
        let (mut router, _sink) = router_with(Config::default(), false);
        router.update_permissions(perms(&[Ooc, Console], &[]));

        assert_eq!(router.focus(Some(Admin), "hi"), None);
        assert_eq!(router.focus(Some(Console), "hi"), None);
    }

    #[test]
    fn focus_local_while_ghosted_uses_dead_prefix() {
        let (mut router, _sink) = router_with(Config::default(), true);
        router.update_permissions(perms(&[Ooc, Dead], &[]));

        let edit = router.focus(Some(Local), "boo").unwrap();
        assert_eq!(edit.text, "\\ boo");
    }

    #[test]
    fn focus_without_channel_keeps_text() {
        let (mut router, _sink) = router_with(Config::default(), false);
        let edit = router.focus(None, "abc").unwrap();
        assert_eq!(edit.text, "abc");
        assert_eq!(edit.selection_start, 3);
        assert_eq!(edit.cursor, 3);
    }

    #[test]
    fn replay_clears_then_displays_visible_history() {
        let (mut router, sink) = router_with(Config::default(), false);
        router.update_permissions(perms(&[], &[ChatChannel::Ooc, ChatChannel::Local]));
        router.toggle_filter(ChatChannel::Ooc, true);
        sink.drain();

        let mut history = vec![
            StoredMessage::new(ChatChannel::Ooc, "one"),
            StoredMessage::new(ChatChannel::Local, "two"),
            StoredMessage::new(ChatChannel::Ooc, "three"),
        ];
        router.replay(&mut history);

        let events = sink.drain();
        assert_eq!(events[0], SinkEvent::ClearDisplay);
        assert_eq!(events.len(), 3);
        assert!(history[0].read && !history[1].read && history[2].read);
    }
}
