//! Completion notification settings.
//!
//! Only the settings live here; the HTTP senders read them at send time.

use serde::{Deserialize, Serialize};

/// Pushover credentials. Both keys must be set for Pushover to be used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PushoverConfig {
    pub user_key: String,
    pub app_token: String,
}

impl PushoverConfig {
    pub fn is_configured(&self) -> bool {
        !self.user_key.is_empty() && !self.app_token.is_empty()
    }
}

/// ntfy settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NtfyConfig {
    pub server: String,
    pub topic: String,
    /// Optional access token for protected topics.
    pub token: String,
}

impl Default for NtfyConfig {
    fn default() -> Self {
        Self {
            server: "https://ntfy.sh".into(),
            topic: String::new(),
            token: String::new(),
        }
    }
}

impl NtfyConfig {
    pub fn is_configured(&self) -> bool {
        !self.topic.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct NotificationConfig {
    pub notify_on_complete: bool,
    pub pushover: PushoverConfig,
    pub ntfy: NtfyConfig,
}
