//! Test router management.
//!
//! Builds a [`ChatRouter`] whose every outside dependency can be poked from
//! the test: ghost state, unread counts and the recorded sink output.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chatroute::proto::{ChatChannel, ChatMask, SelectChannel, SelectMask};
use chatroute::{ChatRouter, Config, Permissions, RecordingSink, UnreadCounts, UnreadTracker};
use parking_lot::Mutex;

/// A router plus handles on everything it was built with.
pub struct TestRouter {
    pub router: Arc<Mutex<ChatRouter>>,
    pub sink: RecordingSink,
    pub unread: UnreadCounts,
    ghost: Arc<AtomicBool>,
}

impl TestRouter {
    /// Router with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        super::init_tracing();

        let sink = RecordingSink::new();
        let unread = UnreadCounts::new();
        let ghost = Arc::new(AtomicBool::new(false));

        let flag = ghost.clone();
        let router = ChatRouter::new(
            config,
            move || flag.load(Ordering::SeqCst),
            UnreadTracker::new(unread.clone()),
            sink.clone(),
        );

        Self {
            router: Arc::new(Mutex::new(router)),
            sink,
            unread,
            ghost,
        }
    }

    /// Parse `toml` and build a router from it.
    pub fn from_toml(toml: &str) -> Self {
        Self::with_config(toml.parse().expect("test config should parse"))
    }

    pub fn set_ghost(&self, ghosted: bool) {
        self.ghost.store(ghosted, Ordering::SeqCst);
    }

    pub fn lock(&self) -> parking_lot::MutexGuard<'_, ChatRouter> {
        self.router.lock()
    }

    /// Push new permissions straight into the router.
    pub fn grant(&self, selectable: &[SelectChannel], filterable: &[ChatChannel]) {
        self.lock()
            .update_permissions(permissions(selectable, filterable));
    }
}

pub fn select_mask(channels: &[SelectChannel]) -> SelectMask {
    channels.iter().copied().collect()
}

pub fn chat_mask(channels: &[ChatChannel]) -> ChatMask {
    channels.iter().copied().collect()
}

pub fn permissions(selectable: &[SelectChannel], filterable: &[ChatChannel]) -> Permissions {
    Permissions {
        selectable: select_mask(selectable),
        filterable: chat_mask(filterable),
    }
}
