//! chatroute - chat channel routing and visibility.
//!
//! Decides which channel a typed line goes out on, which incoming messages
//! are shown, and keeps both consistent with the permissions pushed in by
//! the chat authority. Rendering, transport and history storage live behind
//! [`ChatSink`](sink::ChatSink) and [`ChatEvent`](events::ChatEvent).
//!
//! ```rust
//! use chatroute::{ChatRouter, Config, Permissions, RecordingSink, UnreadTracker};
//! use chatroute::proto::{ChatMask, SelectChannel, SelectMask};
//!
//! let sink = RecordingSink::new();
//! let mut router = ChatRouter::new(Config::default(), || false, UnreadTracker::none(), sink.clone());
//! router.update_permissions(Permissions {
//!     selectable: SelectMask::from(SelectChannel::Ooc) | SelectChannel::Radio,
//!     filterable: ChatMask::all(),
//! });
//!
//! let sent = router.submit(";hello").unwrap();
//! assert_eq!(sent.channel, SelectChannel::Radio);
//! assert_eq!(sink.submitted(), vec![("hello".to_string(), SelectChannel::Radio)]);
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod message;
pub mod router;
pub mod sink;
pub mod state;
pub mod telemetry;

pub use chatroute_proto as proto;

pub use crate::config::{Config, ConfigError};
pub use crate::error::SubmitError;
pub use crate::events::{ChatEvent, ChatEventBus, ChatEventHandler, Subscription};
pub use crate::message::{DisplayLine, LineBody, StoredMessage};
pub use crate::router::{ChatRouter, FocusEdit, GhostState, Submitted};
pub use crate::sink::{ChatSink, Indicator, NullSink, RecordingSink, SinkEvent};
pub use crate::state::{Permissions, UnreadCounts, UnreadSource, UnreadTracker};
