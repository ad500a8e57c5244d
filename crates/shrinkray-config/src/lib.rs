//! Shrinkray configuration system.
//!
//! Provides YAML-based configuration with validation and live reload.
//! All config sections use sensible defaults so partial configs work out
//! of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use shrinkray_config::{ConfigWatcher, ReloadOverrides, SharedConfig};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() {
//! let path = "/config/shrinkray.yaml";
//! let config = shrinkray_config::load_config(path.as_ref()).expect("failed to load config");
//! let shared = Arc::new(SharedConfig::new(config.clone()));
//! let cancel = CancellationToken::new();
//!
//! let _watcher = ConfigWatcher::spawn(
//!     cancel.clone(),
//!     path,
//!     shared.clone(),
//!     &config,
//!     ReloadOverrides::default(),
//! );
//! # }
//! ```

pub mod handler;
pub mod overrides;
pub mod reload;
pub mod schema;
pub mod validation;
pub mod watcher;
pub mod yaml_loader;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export core types for convenience
pub use handler::{ConfigHandler, SharedConfig};
pub use overrides::ReloadOverrides;
pub use reload::Reloader;
pub use schema::{ShrinkrayConfig, DEFAULT_MEDIA_PATH};
pub use watcher::ConfigWatcher;
pub use yaml_loader::{ConfigLoader, YamlLoader};

use shrinkray_common::ConfigError;
use std::path::Path;

/// Load and validate the config at `path`.
pub fn load_config(path: &Path) -> Result<ShrinkrayConfig, ConfigError> {
    yaml_loader::load_from_path(path)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ShrinkrayConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = ShrinkrayConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"media_path\""));
        assert!(json.contains("\"queue_file\""));
        assert!(json.contains("\"workers\""));
        assert!(json.contains("\"original_handling\": \"replace\""));
        assert!(json.contains("\"notifications\""));
        assert!(json.contains("\"ntfy\""));
        assert!(json.contains("\"pushover\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = ShrinkrayConfig {
            media_path: "/mnt/media1".into(),
            workers: 3,
            ..Default::default()
        };
        let json = config_to_json(&config);
        let parsed: ShrinkrayConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn load_config_rejects_missing_file() {
        let err = load_config(Path::new("/tmp/nonexistent_shrinkray_lib_test.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
