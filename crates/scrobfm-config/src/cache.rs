//! Shared configuration handle with lock-free reads.

use crate::schema::Config;
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Holds the effective configuration behind an `ArcSwap` so readers
/// never block while a reload swaps in a new value.
pub struct ConfigCache {
    inner: ArcSwap<Config>,
}

impl ConfigCache {
    /// Wraps an initial configuration.
    pub fn new(config: Config) -> Self {
        Self {
            inner: ArcSwap::from_pointee(config),
        }
    }

    /// Returns the current configuration.
    pub fn get(&self) -> Arc<Config> {
        self.inner.load_full()
    }

    /// Replaces the configuration atomically.
    pub fn update(&self, config: Config) {
        self.inner.store(Arc::new(config));
    }

    /// Clones the current configuration, substituting the Last.fm user
    /// when a per-invocation override is given.
    pub fn snapshot_with_user(&self, user: Option<&str>) -> Config {
        let mut config = (*self.get()).clone();
        if let Some(user) = user {
            config.lastfm.user = user.to_string();
        }
        config
    }
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
