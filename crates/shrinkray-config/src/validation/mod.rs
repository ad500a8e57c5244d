//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod notifications;
mod transcode;

#[cfg(test)]
mod tests;

use crate::schema::ShrinkrayConfig;
use shrinkray_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShrinkrayConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    transcode::validate_transcode(&mut errors, config);
    notifications::validate_pushover(&mut errors, config);
    notifications::validate_ntfy(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
