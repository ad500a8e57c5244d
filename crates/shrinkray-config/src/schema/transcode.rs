//! Transcode job configuration types.

use serde::{Deserialize, Serialize};

/// What happens to the source file once its transcode succeeds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum OriginalHandling {
    /// Replace the original with the transcoded output.
    #[default]
    Replace,
    /// Keep the original next to the output.
    Keep,
}
