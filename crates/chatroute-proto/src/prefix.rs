//! Splitting typed input into a destination channel and message text.
//!
//! A line of chat input may start with a single prefix character naming the
//! channel it is meant for (see [`PREFIXES`](crate::registry::PREFIXES)).
//! Prefix recognition depends on what the user may currently send on: a
//! prefix for a channel outside the selectable mask is ordinary text.

use crate::channel::SelectChannel;
use crate::mask::SelectMask;
use crate::registry::channel_for_prefix;

/// Result of splitting one line of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ParsedInput<'a> {
    /// Channel named by a recognised prefix, after ghost remapping.
    pub channel: Option<SelectChannel>,
    /// Message text with the prefix and surrounding whitespace removed.
    pub text: &'a str,
}

/// Substitute Dead for Local while the user is a ghost.
///
/// Every other channel, and Local while not ghosted, passes through.
#[inline]
pub fn ghost_remap(channel: SelectChannel, ghosted: bool) -> SelectChannel {
    if ghosted && channel == SelectChannel::Local {
        SelectChannel::Dead
    } else {
        channel
    }
}

/// Split `raw` into an optional prefix channel and the remaining text.
///
/// The prefix character is consumed only when its channel is in
/// `selectable`; whitespace between prefix and text is dropped.
pub fn parse_input(raw: &str, selectable: SelectMask, ghosted: bool) -> ParsedInput<'_> {
    let text = raw.trim();
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return ParsedInput::default();
    };

    match channel_for_prefix(first) {
        Some(channel) if selectable.contains(channel) => ParsedInput {
            channel: Some(ghost_remap(channel, ghosted)),
            text: chars.as_str().trim_start(),
        },
        _ => ParsedInput {
            channel: None,
            text,
        },
    }
}
