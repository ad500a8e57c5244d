//! Core YAML config loading.

use crate::schema::ShrinkrayConfig;
use crate::validation;
use shrinkray_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Parses a config file into a validated [`ShrinkrayConfig`].
///
/// Implementations must not keep state between calls; the watcher calls
/// `load` again on every reload.
pub trait ConfigLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<ShrinkrayConfig, ConfigError>;
}

/// [`ConfigLoader`] backed by [`load_from_path`].
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlLoader;

impl ConfigLoader for YamlLoader {
    fn load(&self, path: &Path) -> Result<ShrinkrayConfig, ConfigError> {
        load_from_path(path)
    }
}

/// Load and validate config from a specific YAML file path.
///
/// Deserializes the file using serde defaults for any missing fields. An
/// empty file yields the defaults. A config that fails validation is an
/// error; callers decide whether to fall back.
pub fn load_from_path(path: &Path) -> Result<ShrinkrayConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: ShrinkrayConfig = if content.trim().is_empty() {
        ShrinkrayConfig::default()
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("failed to parse YAML: {e}")))?
    };

    validation::validate(&config)?;

    debug!("loaded config from {}", path.display());
    Ok(config)
}
