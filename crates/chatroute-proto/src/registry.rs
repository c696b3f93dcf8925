//! Static channel tables.
//!
//! Display orders for the filter list and the channel selector, plus the
//! prefix alias table. These never change at runtime.

use crate::channel::{ChatChannel, SelectChannel};

/// Order in which available channel filters are listed.
pub const FILTER_ORDER: [ChatChannel; 7] = [
    ChatChannel::Local,
    ChatChannel::Emotes,
    ChatChannel::Radio,
    ChatChannel::Ooc,
    ChatChannel::Dead,
    ChatChannel::Admin,
    ChatChannel::Server,
];

/// Order in which channels show up in the channel selector.
///
/// Console is deliberately absent: it can never be the default channel,
/// only addressed with its prefix.
pub const SELECTOR_ORDER: [SelectChannel; 6] = [
    SelectChannel::Local,
    SelectChannel::Emotes,
    SelectChannel::Radio,
    SelectChannel::Ooc,
    SelectChannel::Dead,
    SelectChannel::Admin,
];

/// `.` - Local.
pub const ALIAS_LOCAL: char = '.';
/// `/` - Console.
pub const ALIAS_CONSOLE: char = '/';
/// `\` - Dead.
pub const ALIAS_DEAD: char = '\\';
/// `[` - OOC.
pub const ALIAS_OOC: char = '[';
/// `@` - Emotes.
pub const ALIAS_EMOTES: char = '@';
/// `]` - Admin.
pub const ALIAS_ADMIN: char = ']';
/// `;` - Radio.
pub const ALIAS_RADIO: char = ';';

/// Prefix character to channel.
pub const PREFIXES: [(char, SelectChannel); 7] = [
    (ALIAS_LOCAL, SelectChannel::Local),
    (ALIAS_CONSOLE, SelectChannel::Console),
    (ALIAS_OOC, SelectChannel::Ooc),
    (ALIAS_EMOTES, SelectChannel::Emotes),
    (ALIAS_ADMIN, SelectChannel::Admin),
    (ALIAS_RADIO, SelectChannel::Radio),
    (ALIAS_DEAD, SelectChannel::Dead),
];

/// Channel addressed by a leading prefix character, if any.
pub fn channel_for_prefix(prefix: char) -> Option<SelectChannel> {
    PREFIXES
        .iter()
        .find(|(c, _)| *c == prefix)
        .map(|(_, channel)| *channel)
}

/// Prefix shown next to a selectable channel.
///
/// Console has no reverse entry: it is never displayed as a persistent
/// selection, so there is nothing to label.
pub fn prefix_for_channel(channel: SelectChannel) -> Option<char> {
    if channel == SelectChannel::Console {
        return None;
    }
    PREFIXES
        .iter()
        .find(|(_, c)| *c == channel)
        .map(|(prefix, _)| *prefix)
}
