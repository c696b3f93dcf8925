//! Standardized span constructors for chat routing observability.

use tracing::{Span, debug_span, info_span};

use crate::state::Permissions;

/// Span for one submitted line of input.
pub fn submit(selected: &str) -> Span {
    debug_span!("submit", selected = %selected)
}

/// Span for a permission re-evaluation.
pub fn permissions(permissions: &Permissions, ghosted: bool) -> Span {
    info_span!(
        "permissions",
        selectable = ?permissions.selectable,
        filterable = ?permissions.filterable,
        ghosted
    )
}

/// Span for repopulating the display from history.
pub fn replay(messages: usize) -> Span {
    debug_span!("replay", messages)
}
