//! Hand-off point between the reloader and request-serving code.

use crate::schema::ShrinkrayConfig;
use tokio::sync::watch;

/// Receives complete replacement configs.
///
/// `apply_config` is called from the watcher task while requests are being
/// served, so implementations must be safe to call at any time. The new
/// config takes effect for requests served afterwards.
pub trait ConfigHandler: Send + Sync {
    fn apply_config(&self, config: ShrinkrayConfig);
}

/// [`ConfigHandler`] that publishes the active config on a
/// [`tokio::sync::watch`] channel.
///
/// Readers either take a snapshot with [`SharedConfig::current`] or hold a
/// receiver from [`SharedConfig::subscribe`] to be woken on every swap.
#[derive(Debug)]
pub struct SharedConfig {
    tx: watch::Sender<ShrinkrayConfig>,
}

impl SharedConfig {
    pub fn new(initial: ShrinkrayConfig) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Snapshot of the active config.
    pub fn current(&self) -> ShrinkrayConfig {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ShrinkrayConfig> {
        self.tx.subscribe()
    }
}

impl ConfigHandler for SharedConfig {
    fn apply_config(&self, config: ShrinkrayConfig) {
        // send_replace keeps working with zero receivers
        self.tx.send_replace(config);
    }
}
