//! State management module.
//!
//! Contains the pieces of router state: permission masks, the channel
//! selector, the filter set and the unread count view.

mod filters;
mod permissions;
mod selector;
mod unread;

pub use filters::{FilterEntry, FilterSet};
pub use permissions::{MaskChange, PermissionListener, PermissionState, Permissions};
pub use selector::{ChannelSelector, SelectionScope, SelectorEntry};
pub use unread::{UnreadCounts, UnreadSource, UnreadTracker, unread_badge};
