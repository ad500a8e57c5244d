//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;
use std::path::PathBuf;

#[test]
fn default_config_validates() {
    let config = ShrinkrayConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_workers() {
    let mut config = ShrinkrayConfig::default();
    config.workers = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("workers"));
}

#[test]
fn catches_too_many_workers() {
    let mut config = ShrinkrayConfig::default();
    config.workers = 17;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("workers = 17"));
}

#[test]
fn accepts_max_workers() {
    let mut config = ShrinkrayConfig::default();
    config.workers = 16;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_empty_temp_path() {
    let mut config = ShrinkrayConfig::default();
    config.temp_path = Some(PathBuf::new());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("temp_path"));
}

#[test]
fn catches_half_configured_pushover() {
    let mut config = ShrinkrayConfig::default();
    config.notifications.pushover.user_key = "u123".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("notifications.pushover"));
}

#[test]
fn accepts_fully_configured_pushover() {
    let mut config = ShrinkrayConfig::default();
    config.notifications.pushover.user_key = "u123".into();
    config.notifications.pushover.app_token = "a456".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn ignores_ntfy_server_without_topic() {
    let mut config = ShrinkrayConfig::default();
    config.notifications.ntfy.server = "not a url".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_bad_ntfy_server() {
    let mut config = ShrinkrayConfig::default();
    config.notifications.ntfy.topic = "shrinkray".into();
    config.notifications.ntfy.server = "ftp://ntfy.example.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("notifications.ntfy.server"));
}

#[test]
fn catches_bad_ntfy_topic() {
    let mut config = ShrinkrayConfig::default();
    config.notifications.ntfy.topic = "has spaces".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("notifications.ntfy.topic"));
}

#[test]
fn accepts_self_hosted_ntfy() {
    let mut config = ShrinkrayConfig::default();
    config.notifications.ntfy.server = "http://ntfy.lan:8080".into();
    config.notifications.ntfy.topic = "transcodes_done".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut config = ShrinkrayConfig::default();
    config.workers = 0;
    config.notifications.pushover.app_token = "a456".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("workers"));
    assert!(err.contains("notifications.pushover"));
    assert!(err.contains("; "));
}
