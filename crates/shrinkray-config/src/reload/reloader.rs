//! Core reload implementation.

use crate::handler::ConfigHandler;
use crate::overrides::ReloadOverrides;
use crate::schema::ShrinkrayConfig;
use crate::yaml_loader::ConfigLoader;
use shrinkray_common::ConfigError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Builds and applies replacement configs for one watched file.
///
/// Failures never reach the handler: the active config stays in force
/// until a later reload succeeds.
pub struct Reloader {
    path: PathBuf,
    loader: Arc<dyn ConfigLoader>,
    handler: Arc<dyn ConfigHandler>,
    overrides: ReloadOverrides,
    /// Media root of the last config known to be active.
    previous_media_path: PathBuf,
}

impl Reloader {
    pub fn new(
        path: impl Into<PathBuf>,
        loader: Arc<dyn ConfigLoader>,
        handler: Arc<dyn ConfigHandler>,
        overrides: ReloadOverrides,
        current: &ShrinkrayConfig,
    ) -> Self {
        Self {
            path: path.into(),
            loader,
            handler,
            overrides,
            previous_media_path: current.media_path.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the file and resolve it into a config ready to apply.
    ///
    /// Overrides win over parsed values; an empty media path falls back to
    /// the previous one. The resulting media path must exist.
    pub fn prepare(&self) -> Result<ShrinkrayConfig, ConfigError> {
        let mut config = self.loader.load(&self.path)?;
        self.overrides.apply(&mut config);

        if config.media_path_is_empty() {
            config.media_path = self.previous_media_path.clone();
        }
        check_media_path(&config.media_path)?;

        Ok(config)
    }

    /// Run one reload. Returns whether a new config was applied.
    pub fn reload(&mut self) -> bool {
        match self.prepare() {
            Ok(config) => {
                self.previous_media_path = config.media_path.clone();
                self.handler.apply_config(config);
                info!("config reloaded from {}", self.path.display());
                true
            }
            Err(e @ ConfigError::MediaPathUnavailable { .. }) => {
                warn!("ignoring config reload from {}: {e}", self.path.display());
                false
            }
            Err(e) => {
                warn!("failed to reload config from {}: {e}", self.path.display());
                false
            }
        }
    }
}

/// Basic existence check on the media root.
pub fn check_media_path(path: &Path) -> Result<(), ConfigError> {
    std::fs::metadata(path)
        .map(|_| ())
        .map_err(|source| ConfigError::MediaPathUnavailable {
            path: path.to_path_buf(),
            source,
        })
}
