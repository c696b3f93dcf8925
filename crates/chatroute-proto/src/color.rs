//! Channel colors.
//!
//! Arrived messages are tinted by their channel unless they carry an
//! explicit override; the channel indicator next to the input line is
//! tinted by the channel that would be used on submit.

use std::fmt;

use crate::channel::{ChatChannel, SelectChannel};

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// White.
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    /// Orange.
    pub const ORANGE: Self = Self::rgb(0xFF, 0xA5, 0x00);
    /// Lime green.
    pub const LIME_GREEN: Self = Self::rgb(0x32, 0xCD, 0x32);
    /// Light sky blue.
    pub const LIGHT_SKY_BLUE: Self = Self::rgb(0x87, 0xCE, 0xFA);
    /// Medium purple.
    pub const MEDIUM_PURPLE: Self = Self::rgb(0x93, 0x70, 0xDB);
    /// Red.
    pub const RED: Self = Self::rgb(0xFF, 0x00, 0x00);
    /// Dark gray.
    pub const DARK_GRAY: Self = Self::rgb(0xA9, 0xA9, 0xA9);
    /// Plum.
    pub const PLUM: Self = Self::rgb(0xDD, 0xA0, 0xDD);

    /// Color of local-only warnings (e.g. "message too long").
    pub const WARNING: Self = Self::ORANGE;
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl ChatChannel {
    /// Default display color for messages on this channel.
    pub fn color(self) -> Color {
        match self {
            Self::Server => Color::ORANGE,
            Self::Radio => Color::LIME_GREEN,
            Self::Ooc => Color::LIGHT_SKY_BLUE,
            Self::Dead => Color::MEDIUM_PURPLE,
            Self::Admin => Color::RED,
            Self::Emotes => Color::PLUM,
            Self::Local => Color::WHITE,
        }
    }
}

impl SelectChannel {
    /// Tint of the channel indicator when this channel is in effect.
    pub fn indicator_color(self) -> Color {
        match self {
            Self::Radio => Color::LIME_GREEN,
            Self::Ooc => Color::LIGHT_SKY_BLUE,
            Self::Dead => Color::MEDIUM_PURPLE,
            Self::Admin => Color::RED,
            _ => Color::DARK_GRAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_colors() {
        assert_eq!(SelectChannel::Radio.indicator_color(), Color::LIME_GREEN);
        assert_eq!(SelectChannel::Local.indicator_color(), Color::DARK_GRAY);
        assert_eq!(SelectChannel::Console.indicator_color(), Color::DARK_GRAY);
    }

    #[test]
    fn server_messages_are_orange() {
        assert_eq!(ChatChannel::Server.color(), Color::WARNING);
    }

    #[test]
    fn display_is_hex_rgba() {
        assert_eq!(Color::ORANGE.to_string(), "#ffa500ff");
    }
}
