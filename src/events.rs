//! Inbound chat events and subscription lifecycle.
//!
//! Whoever owns chat state (history, permissions, unread counts) publishes
//! [`ChatEvent`]s on a [`ChatEventBus`]. Handlers are registered with
//! [`ChatEventBus::subscribe`], which hands back a [`Subscription`] guard;
//! dropping the guard unregisters the handler. Attach and detach are
//! therefore always symmetric.
//!
//! Delivery is synchronous, one event at a time, in subscription order. A
//! handler must not publish on the bus it is being called from.

use std::sync::{Arc, Weak};

use chatroute_proto::SelectMask;
use parking_lot::Mutex;
use tracing::trace;

use crate::message::StoredMessage;
use crate::state::Permissions;

/// Something the chat owner wants the router to react to.
#[derive(Debug)]
pub enum ChatEvent<'a> {
    /// Permissions changed. Carries the selectable mask from before the
    /// change, needed to detect newly gained channels.
    PermissionsChanged {
        old_selectable: SelectMask,
        current: Permissions,
    },
    /// A message arrived.
    MessageArrived(&'a mut StoredMessage),
    /// Unread counts changed; bound display rows should re-query.
    UnreadCountsChanged,
    /// Filters were reset by the owner; rebuild and replay history.
    FiltersReset {
        current: Permissions,
        history: &'a mut [StoredMessage],
    },
}

impl ChatEvent<'_> {
    /// Static name for log labeling.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PermissionsChanged { .. } => "permissions_changed",
            Self::MessageArrived(_) => "message_arrived",
            Self::UnreadCountsChanged => "unread_counts_changed",
            Self::FiltersReset { .. } => "filters_reset",
        }
    }
}

/// Receiver of [`ChatEvent`]s.
pub trait ChatEventHandler: Send {
    fn on_event(&mut self, event: &mut ChatEvent<'_>);
}

/// Shared handle to a registered handler.
pub type SharedHandler = Arc<Mutex<dyn ChatEventHandler>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, SharedHandler)>,
}

/// Synchronous fan-out of chat events to registered handlers.
#[derive(Clone, Default)]
pub struct ChatEventBus {
    registry: Arc<Mutex<Registry>>,
}

impl ChatEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` until the returned guard is dropped.
    pub fn subscribe(&self, handler: SharedHandler) -> Subscription {
        let mut registry = self.registry.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, handler));
        trace!(id, "handler subscribed");

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver `event` to every handler, in subscription order.
    pub fn publish(&self, event: &mut ChatEvent<'_>) {
        // Snapshot so handlers may subscribe or unsubscribe others while
        // the event is being delivered.
        let handlers: Vec<SharedHandler> = self
            .registry
            .lock()
            .handlers
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();

        trace!(kind = event.kind(), handlers = handlers.len(), "publishing");
        for handler in handlers {
            handler.lock().on_event(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.lock().handlers.len()
    }
}

impl std::fmt::Debug for ChatEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatEventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Registration guard returned by [`ChatEventBus::subscribe`].
#[must_use = "dropping a Subscription unsubscribes immediately"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Unsubscribe now. Same as dropping the guard.
    pub fn detach(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.lock().handlers.retain(|(id, _)| *id != self.id);
            trace!(id = self.id, "handler unsubscribed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatroute_proto::ChatChannel;

    #[derive(Default)]
    struct Counter {
        seen: Vec<&'static str>,
    }

    impl ChatEventHandler for Counter {
        fn on_event(&mut self, event: &mut ChatEvent<'_>) {
            self.seen.push(event.kind());
            if let ChatEvent::MessageArrived(msg) = event {
                msg.read = true;
            }
        }
    }

    #[test]
    fn publish_reaches_subscribers_in_order() {
        let bus = ChatEventBus::new();
        let a = Arc::new(Mutex::new(Counter::default()));
        let b = Arc::new(Mutex::new(Counter::default()));
        let _sa = bus.subscribe(a.clone());
        let _sb = bus.subscribe(b.clone());

        bus.publish(&mut ChatEvent::UnreadCountsChanged);
        let mut msg = StoredMessage::new(ChatChannel::Ooc, "hi");
        bus.publish(&mut ChatEvent::MessageArrived(&mut msg));

        assert!(msg.read);
        assert_eq!(a.lock().seen, vec!["unread_counts_changed", "message_arrived"]);
        assert_eq!(b.lock().seen, a.lock().seen);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let bus = ChatEventBus::new();
        let counter = Arc::new(Mutex::new(Counter::default()));

        let sub = bus.subscribe(counter.clone());
        assert_eq!(bus.subscriber_count(), 1);
        drop(sub);
        assert_eq!(bus.subscriber_count(), 0);

        bus.publish(&mut ChatEvent::UnreadCountsChanged);
        assert!(counter.lock().seen.is_empty());
    }

    #[test]
    fn detach_only_removes_its_own_handler() {
        let bus = ChatEventBus::new();
        let a = Arc::new(Mutex::new(Counter::default()));
        let b = Arc::new(Mutex::new(Counter::default()));
        let sa = bus.subscribe(a.clone());
        let sb = bus.subscribe(b.clone());
        assert_ne!(sa.id(), sb.id());

        sa.detach();
        bus.publish(&mut ChatEvent::UnreadCountsChanged);
        assert!(a.lock().seen.is_empty());
        assert_eq!(b.lock().seen.len(), 1);
    }

    #[test]
    fn subscription_outliving_bus_is_harmless() {
        let counter = Arc::new(Mutex::new(Counter::default()));
        let sub = {
            let bus = ChatEventBus::new();
            bus.subscribe(counter.clone())
        };
        drop(sub);
    }
}
