//! Command-line overrides that survive a reload.
//!
//! A freshly parsed file knows nothing about flags given at startup, so the
//! watcher re-applies these on top of every reloaded config.

use crate::schema::ShrinkrayConfig;
use std::path::PathBuf;

/// Field-level overrides captured once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReloadOverrides {
    media_path: Option<PathBuf>,
    queue_file: Option<PathBuf>,
}

impl ReloadOverrides {
    /// Build overrides from optional flag values. Empty paths count as unset.
    pub fn new(media_path: Option<PathBuf>, queue_file: Option<PathBuf>) -> Self {
        Self {
            media_path: media_path.filter(|p| !p.as_os_str().is_empty()),
            queue_file: queue_file.filter(|p| !p.as_os_str().is_empty()),
        }
    }

    pub fn with_media_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.media_path = Some(path.into()).filter(|p| !p.as_os_str().is_empty());
        self
    }

    pub fn with_queue_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.queue_file = Some(path.into()).filter(|p| !p.as_os_str().is_empty());
        self
    }

    pub fn media_path(&self) -> Option<&PathBuf> {
        self.media_path.as_ref()
    }

    pub fn queue_file(&self) -> Option<&PathBuf> {
        self.queue_file.as_ref()
    }

    /// Overwrite the overridden fields of `config`. Unset overrides leave
    /// the parsed values alone.
    pub fn apply(&self, config: &mut ShrinkrayConfig) {
        if let Some(media) = &self.media_path {
            config.media_path = media.clone();
        }
        if let Some(queue) = &self.queue_file {
            config.queue_file = Some(queue.clone());
        }
    }
}
