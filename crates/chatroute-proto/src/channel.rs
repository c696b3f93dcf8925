//! Chat channel identifiers.
//!
//! Two enumerations describe the same family of channels from two angles:
//!
//! - [`ChatChannel`]: the channel an *arrived* message belongs to. Used for
//!   filtering, unread counts and display colors.
//! - [`SelectChannel`]: a channel a *typed* message can be sent on. Mostly
//!   overlaps with [`ChatChannel`], minus `Server` (nobody talks on it) and
//!   plus the `Console` pseudo-channel, which is only reachable by prefix.
//!
//! Every variant occupies exactly one bit so that unions of channels can be
//! stored in a [`ChannelSet`](crate::mask::ChannelSet).

use std::fmt;
use std::str::FromStr;

use crate::error::ParseChannelError;

/// Trait for channel enums that can be stored in a
/// [`ChannelSet`](crate::mask::ChannelSet).
///
/// Implemented by [`ChatChannel`] and [`SelectChannel`].
pub trait ChannelFlag: Copy + Eq + fmt::Debug + 'static {
    /// Every variant, in bit order.
    const ALL: &'static [Self];

    /// The single bit this channel occupies.
    fn bit(self) -> u16;

    /// Lowercase name used in configuration and logs.
    fn name(self) -> &'static str;
}

/// The channel an incoming message arrived on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChatChannel {
    /// In-character speech heard by nearby players.
    Local,
    /// In-character emotes.
    Emotes,
    /// In-character radio traffic.
    Radio,
    /// Out-of-character chat.
    Ooc,
    /// Chat between ghosts / observers.
    Dead,
    /// Admin-only chat.
    Admin,
    /// Server announcements and local-only notices.
    Server,
}

impl ChannelFlag for ChatChannel {
    const ALL: &'static [Self] = &[
        Self::Local,
        Self::Emotes,
        Self::Radio,
        Self::Ooc,
        Self::Dead,
        Self::Admin,
        Self::Server,
    ];

    #[inline]
    fn bit(self) -> u16 {
        match self {
            Self::Local => 1 << 0,
            Self::Emotes => 1 << 1,
            Self::Radio => 1 << 2,
            Self::Ooc => 1 << 3,
            Self::Dead => 1 << 4,
            Self::Admin => 1 << 5,
            Self::Server => 1 << 6,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Emotes => "emotes",
            Self::Radio => "radio",
            Self::Ooc => "ooc",
            Self::Dead => "dead",
            Self::Admin => "admin",
            Self::Server => "server",
        }
    }
}

/// A channel a typed message can be sent on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SelectChannel {
    /// In-character speech.
    Local,
    /// In-character emotes.
    Emotes,
    /// In-character radio.
    Radio,
    /// Out-of-character chat. Hard fallback when nothing else is available.
    Ooc,
    /// Ghost chat.
    Dead,
    /// Admin chat.
    Admin,
    /// Console command. Reachable only by prefix, never kept as the default.
    Console,
}

impl ChannelFlag for SelectChannel {
    const ALL: &'static [Self] = &[
        Self::Local,
        Self::Emotes,
        Self::Radio,
        Self::Ooc,
        Self::Dead,
        Self::Admin,
        Self::Console,
    ];

    #[inline]
    fn bit(self) -> u16 {
        match self {
            Self::Local => 1 << 0,
            Self::Emotes => 1 << 1,
            Self::Radio => 1 << 2,
            Self::Ooc => 1 << 3,
            Self::Dead => 1 << 4,
            Self::Admin => 1 << 5,
            Self::Console => 1 << 7,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Emotes => "emotes",
            Self::Radio => "radio",
            Self::Ooc => "ooc",
            Self::Dead => "dead",
            Self::Admin => "admin",
            Self::Console => "console",
        }
    }
}

impl fmt::Display for ChatChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for SelectChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn parse_flag<C: ChannelFlag>(s: &str) -> Result<C, ParseChannelError> {
    let wanted = s.trim();
    C::ALL
        .iter()
        .copied()
        .find(|c| c.name().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ParseChannelError::UnknownChannel(s.to_string()))
}

impl FromStr for ChatChannel {
    type Err = ParseChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_flag(s)
    }
}

impl FromStr for SelectChannel {
    type Err = ParseChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_flag(s)
    }
}
