//! Initial config resolution for the server process.

use shrinkray_common::ConfigError;
use shrinkray_config::{yaml_loader, ReloadOverrides, ShrinkrayConfig, DEFAULT_MEDIA_PATH};
use std::path::{Path, PathBuf};

use crate::cli::Args;

/// Config path from the command line, or the platform default.
pub fn resolve_config_path(args: &Args) -> Result<PathBuf, ConfigError> {
    match &args.config {
        Some(path) => Ok(path.clone()),
        None => yaml_loader::default_config_path(),
    }
}

/// Load the config the server starts with.
///
/// A missing file is created with documented defaults. A file that fails to
/// load is logged and replaced by defaults so the server still comes up.
/// Overrides are applied last, and an empty media root falls back to
/// [`DEFAULT_MEDIA_PATH`].
pub fn load_initial_config(path: &Path, overrides: &ReloadOverrides) -> ShrinkrayConfig {
    if !path.exists() {
        tracing::info!("no config found at {}, creating default", path.display());
        if let Err(e) = yaml_loader::create_default_config(path) {
            tracing::warn!("failed to create default config: {e}");
        }
    }

    let mut config = match shrinkray_config::load_config(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("config load failed, using defaults: {e}");
            ShrinkrayConfig::default()
        }
    };

    overrides.apply(&mut config);
    if config.media_path_is_empty() {
        config.media_path = PathBuf::from(DEFAULT_MEDIA_PATH);
    }
    config
}
