//! Core config file watcher implementation.
//!
//! Contains the [`ConfigWatcher`] control loop that turns `notify` events
//! for one file into debounced, validated reloads.

use crate::handler::ConfigHandler;
use crate::overrides::ReloadOverrides;
use crate::reload::Reloader;
use crate::schema::ShrinkrayConfig;
use crate::yaml_loader::{ConfigLoader, YamlLoader};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use shrinkray_common::ConfigError;
use std::path::Path;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::events::WatchTarget;

/// Quiet period after the last qualifying event before a reload runs.
pub const DEBOUNCE: Duration = Duration::from_millis(250);

/// Notifications for one directory, bridged from the `notify` thread.
pub(crate) struct EventSource {
    pub(crate) events: mpsc::UnboundedReceiver<Event>,
    pub(crate) errors: mpsc::UnboundedReceiver<notify::Error>,
    // Dropping the watcher ends the subscription.
    _watcher: Option<RecommendedWatcher>,
}

impl EventSource {
    /// Subscribe to non-recursive notifications for `dir`.
    pub(crate) fn subscribe(dir: &Path) -> Result<Self, ConfigError> {
        let (event_tx, events) = mpsc::unbounded_channel();
        let (error_tx, errors) = mpsc::unbounded_channel();

        let mut watcher = RecommendedWatcher::new(
            // Send only fails once the control loop has exited.
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    let _ = event_tx.send(event);
                }
                Err(e) => {
                    let _ = error_tx.send(e);
                }
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ConfigError::WatchError(format!("failed to watch {}: {e}", dir.display()))
            })?;

        Ok(Self {
            events,
            errors,
            _watcher: Some(watcher),
        })
    }

    #[cfg(test)]
    pub(crate) fn from_channels(
        events: mpsc::UnboundedReceiver<Event>,
        errors: mpsc::UnboundedReceiver<notify::Error>,
    ) -> Self {
        Self {
            events,
            errors,
            _watcher: None,
        }
    }
}

/// Watches one config file and hot-swaps validated replacements into a
/// [`ConfigHandler`].
///
/// The watcher runs as a single detached task. Every failure is logged and
/// leaves the active config untouched; nothing is reported to the caller.
pub struct ConfigWatcher {
    target: WatchTarget,
    reloader: Reloader,
}

impl ConfigWatcher {
    /// Start watching `path`, reloading through the YAML loader.
    ///
    /// Returns `None` without starting anything if `path` is empty or the
    /// directory subscription fails; the host keeps running without live
    /// reload in that case.
    pub fn spawn(
        cancel: CancellationToken,
        path: impl AsRef<Path>,
        handler: Arc<dyn ConfigHandler>,
        current: &ShrinkrayConfig,
        overrides: ReloadOverrides,
    ) -> Option<JoinHandle<()>> {
        Self::spawn_with_loader(
            cancel,
            path,
            Arc::new(YamlLoader),
            handler,
            current,
            overrides,
        )
    }

    /// Like [`ConfigWatcher::spawn`] with an explicit loader.
    pub fn spawn_with_loader(
        cancel: CancellationToken,
        path: impl AsRef<Path>,
        loader: Arc<dyn ConfigLoader>,
        handler: Arc<dyn ConfigHandler>,
        current: &ShrinkrayConfig,
        overrides: ReloadOverrides,
    ) -> Option<JoinHandle<()>> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            debug!("no config path given, live reload disabled");
            return None;
        }

        let watcher = Self::new(path, loader, handler, current, overrides);
        let source = match EventSource::subscribe(watcher.target.dir()) {
            Ok(source) => source,
            Err(e) => {
                warn!("failed to start config watcher: {e}");
                return None;
            }
        };

        info!("watching {} for config changes", watcher.target.file().display());
        Some(tokio::spawn(watcher.run(cancel, source)))
    }

    pub(crate) fn new(
        path: &Path,
        loader: Arc<dyn ConfigLoader>,
        handler: Arc<dyn ConfigHandler>,
        current: &ShrinkrayConfig,
        overrides: ReloadOverrides,
    ) -> Self {
        Self {
            target: WatchTarget::new(path),
            reloader: Reloader::new(path, loader, handler, overrides, current),
        }
    }

    /// Control loop. Owns `source` and drops it on exit.
    pub(crate) async fn run(mut self, cancel: CancellationToken, mut source: EventSource) {
        // Capacity one: a full channel means a reload is already pending.
        let (trigger_tx, mut trigger_rx) = mpsc::channel::<()>(1);
        let mut deadline: Option<Pin<Box<Sleep>>> = None;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    if deadline.take().is_some() {
                        debug!("dropping pending config reload");
                    }
                    break;
                }
                Some(()) = trigger_rx.recv() => {
                    deadline = Some(Box::pin(tokio::time::sleep(DEBOUNCE)));
                }
                () = expired(&mut deadline) => {
                    deadline = None;
                    if cancel.is_cancelled() {
                        break;
                    }
                    self.reloader.reload();
                }
                event = source.events.recv() => {
                    let Some(event) = event else {
                        debug!("config watcher event stream closed");
                        break;
                    };
                    if self.target.is_relevant(&event) {
                        debug!(kind = ?event.kind, "config file change detected");
                        let _ = trigger_tx.try_send(());
                    }
                }
                error = source.errors.recv() => {
                    let Some(error) = error else {
                        debug!("config watcher error stream closed");
                        break;
                    };
                    warn!("config watcher error: {error}");
                }
            }
        }

        debug!("config watcher for {} stopped", self.target.file().display());
    }
}

/// Resolves when the armed deadline passes; never resolves when disarmed.
async fn expired(deadline: &mut Option<Pin<Box<Sleep>>>) {
    match deadline {
        Some(sleep) => sleep.as_mut().await,
        None => std::future::pending().await,
    }
}
