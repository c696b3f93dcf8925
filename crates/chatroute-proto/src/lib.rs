//! # chatroute-proto
//!
//! The channel vocabulary shared by everything that routes chat text:
//! which channels exist, how sets of them are represented, which prefix
//! character names which channel, and how a line of typed input is split
//! into a destination channel and the text to send.
//!
//! Nothing in this crate holds state. The stateful engine (selection,
//! filters, permissions) lives in the `chatroute` crate and builds on these
//! types.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatroute_proto::{parse_input, SelectChannel, SelectMask};
//!
//! let selectable: SelectMask = [SelectChannel::Ooc, SelectChannel::Radio]
//!     .into_iter()
//!     .collect();
//!
//! let parsed = parse_input(";  hello", selectable, false);
//! assert_eq!(parsed.channel, Some(SelectChannel::Radio));
//! assert_eq!(parsed.text, "hello");
//!
//! // Prefixes for channels the user lacks are kept as literal text.
//! let parsed = parse_input("]psst", selectable, false);
//! assert_eq!(parsed.channel, None);
//! assert_eq!(parsed.text, "]psst");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod channel;
pub mod color;
pub mod error;
pub mod mask;
pub mod prefix;
pub mod registry;

pub use self::channel::{ChannelFlag, ChatChannel, SelectChannel};
pub use self::color::Color;
pub use self::error::ParseChannelError;
pub use self::mask::{ChannelSet, ChatMask, SelectMask};
pub use self::prefix::{ghost_remap, parse_input, ParsedInput};
pub use self::registry::{
    channel_for_prefix, prefix_for_channel, FILTER_ORDER, PREFIXES, SELECTOR_ORDER,
};
