//! Chat message records and display lines.

use chatroute_proto::{ChatChannel, Color};

/// A message that arrived on some channel.
///
/// Owned by whoever keeps chat history; the router only flips [`read`]
/// when the message passes the filters and is displayed.
///
/// [`read`]: StoredMessage::read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMessage {
    pub channel: ChatChannel,
    pub text: String,
    /// Format string wrapping the text (e.g. `"{0} says, \"{1}\""`).
    /// Carried through to the display sink unexpanded.
    pub wrap: Option<String>,
    pub color_override: Option<Color>,
    pub read: bool,
}

impl StoredMessage {
    pub fn new(channel: ChatChannel, text: impl Into<String>) -> Self {
        Self {
            channel,
            text: text.into(),
            wrap: None,
            color_override: None,
            read: false,
        }
    }

    #[must_use]
    pub fn with_wrap(mut self, wrap: impl Into<String>) -> Self {
        self.wrap = Some(wrap.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color_override = Some(color);
        self
    }

    /// Explicit override if set, otherwise the channel's default color.
    pub fn color(&self) -> Color {
        self.color_override.unwrap_or_else(|| self.channel.color())
    }
}

/// What a display line carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineBody {
    /// A chat message that passed the filters.
    Message { text: String, wrap: Option<String> },
    /// Local-only notice that a submission exceeded the length limit.
    /// Never sent anywhere; the sink renders it in its own words.
    MaxLengthWarning { limit: usize },
}

/// One line handed to the display sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub channel: ChatChannel,
    pub color: Color,
    pub body: LineBody,
}

impl DisplayLine {
    pub fn message(message: &StoredMessage) -> Self {
        Self {
            channel: message.channel,
            color: message.color(),
            body: LineBody::Message {
                text: message.text.clone(),
                wrap: message.wrap.clone(),
            },
        }
    }

    pub fn max_length_warning(limit: usize) -> Self {
        Self {
            channel: ChatChannel::Server,
            color: Color::WARNING,
            body: LineBody::MaxLengthWarning { limit },
        }
    }
}
