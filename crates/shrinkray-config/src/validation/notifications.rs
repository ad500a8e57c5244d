//! Notification settings validation (Pushover keys, ntfy server and topic).

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::ShrinkrayConfig;

use super::helpers::validate_pattern;

static NTFY_SERVER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/]+(/\S*)?$").expect("valid regex"));

static NTFY_TOPIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("valid regex"));

/// Pushover needs both keys or neither.
pub(crate) fn validate_pushover(errors: &mut Vec<String>, config: &ShrinkrayConfig) {
    let pushover = &config.notifications.pushover;
    if pushover.user_key.is_empty() != pushover.app_token.is_empty() {
        errors.push(
            "notifications.pushover requires both user_key and app_token".into(),
        );
    }
}

/// The server is only checked once a topic is set.
pub(crate) fn validate_ntfy(errors: &mut Vec<String>, config: &ShrinkrayConfig) {
    let ntfy = &config.notifications.ntfy;
    if !ntfy.is_configured() {
        return;
    }
    validate_pattern(errors, "notifications.ntfy.server", &ntfy.server, &NTFY_SERVER);
    validate_pattern(errors, "notifications.ntfy.topic", &ntfy.topic, &NTFY_TOPIC);
}
