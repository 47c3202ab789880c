// SPDX-FileCopyrightText: 2026 Katbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hot-swappable router for config reloads.
//!
//! Readers load one `Arc<MessageRouter>` per decision; a reload publishes a
//! freshly compiled router with a single atomic pointer swap. A decision in
//! flight keeps the snapshot it started with.

use std::sync::Arc;

use arc_swap::ArcSwap;
use katbot_config::RoutingConfig;
use katbot_core::InboundMessage;
use tracing::info;

use crate::router::MessageRouter;
use crate::verdict::RoutingVerdict;

pub struct RouterHandle {
    current: ArcSwap<MessageRouter>,
}

impl RouterHandle {
    pub fn new(config: &RoutingConfig) -> Self {
        Self {
            current: ArcSwap::from_pointee(MessageRouter::new(config)),
        }
    }

    /// Route `message` against the currently published policy.
    pub fn decide(&self, message: &InboundMessage) -> RoutingVerdict {
        self.current.load().decide(message)
    }

    /// Compile `config` and publish it for all subsequent decisions.
    pub fn reload(&self, config: &RoutingConfig) {
        let router = MessageRouter::new(config);
        info!(
            allowed_channels = router.allow_list().id_count(),
            allowed_channel_names = router.allow_list().name_count(),
            respond_to_mentions = router.respond_to_mentions(),
            "routing policy reloaded"
        );
        self.current.store(Arc::new(router));
    }

    /// The currently published router.
    pub fn snapshot(&self) -> Arc<MessageRouter> {
        self.current.load_full()
    }
}

impl Default for RouterHandle {
    fn default() -> Self {
        Self::new(&RoutingConfig::default())
    }
}

impl std::fmt::Debug for RouterHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterHandle")
            .field("current", &*self.current.load())
            .finish()
    }
}
