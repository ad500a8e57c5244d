//! Fakes shared by the reload and watcher tests.

use crate::handler::ConfigHandler;
use crate::schema::ShrinkrayConfig;
use crate::yaml_loader::ConfigLoader;
use shrinkray_common::ConfigError;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::time::Instant;

/// Records every applied config with the (possibly paused) tokio clock.
#[derive(Default)]
pub(crate) struct RecordingHandler {
    applied: Mutex<Vec<(Instant, ShrinkrayConfig)>>,
}

impl RecordingHandler {
    pub(crate) fn count(&self) -> usize {
        self.applied.lock().unwrap().len()
    }

    pub(crate) fn configs(&self) -> Vec<ShrinkrayConfig> {
        self.applied
            .lock()
            .unwrap()
            .iter()
            .map(|(_, c)| c.clone())
            .collect()
    }

    pub(crate) fn times(&self) -> Vec<Instant> {
        self.applied.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }
}

impl ConfigHandler for RecordingHandler {
    fn apply_config(&self, config: ShrinkrayConfig) {
        self.applied.lock().unwrap().push((Instant::now(), config));
    }
}

/// Returns a fixed config and counts calls.
pub(crate) struct FixedLoader {
    config: ShrinkrayConfig,
    calls: AtomicUsize,
}

impl FixedLoader {
    pub(crate) fn new(config: ShrinkrayConfig) -> Self {
        Self {
            config,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ConfigLoader for FixedLoader {
    fn load(&self, _path: &Path) -> Result<ShrinkrayConfig, ConfigError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.config.clone())
    }
}

/// Always fails to parse.
pub(crate) struct BrokenLoader;

impl ConfigLoader for BrokenLoader {
    fn load(&self, _path: &Path) -> Result<ShrinkrayConfig, ConfigError> {
        Err(ConfigError::ParseError("failed to parse YAML: mapping values are not allowed here".into()))
    }
}
