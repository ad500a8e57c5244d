//! Configuration schema types for Shrinkray.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! A field the file leaves out takes the default listed on its type.

mod notifications;
mod transcode;

pub use notifications::*;
pub use transcode::*;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Media root used by the binary when neither the file nor the command
/// line names one.
pub const DEFAULT_MEDIA_PATH: &str = "/media";

/// Root configuration for Shrinkray.
///
/// `media_path` defaults to empty so that a reload can tell "the file does
/// not say" apart from an explicit value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShrinkrayConfig {
    /// Root directory containing the media library.
    pub media_path: PathBuf,
    /// Scratch directory for in-progress transcodes.
    pub temp_path: Option<PathBuf>,
    /// Where the job queue is persisted.
    pub queue_file: Option<PathBuf>,
    /// Number of concurrent transcode workers (valid range: 1-16).
    pub workers: u32,
    pub original_handling: OriginalHandling,
    pub notifications: NotificationConfig,
}

impl Default for ShrinkrayConfig {
    fn default() -> Self {
        Self {
            media_path: PathBuf::new(),
            temp_path: None,
            queue_file: None,
            workers: 1,
            original_handling: OriginalHandling::default(),
            notifications: NotificationConfig::default(),
        }
    }
}

impl ShrinkrayConfig {
    /// True when the config does not name a media root.
    pub fn media_path_is_empty(&self) -> bool {
        self.media_path.as_os_str().is_empty()
    }
}
