//! Transcode settings validation.

use crate::schema::ShrinkrayConfig;

use super::helpers::validate_range;

/// Upper bound on concurrent transcode workers.
pub(crate) const MAX_WORKERS: u32 = 16;

pub(crate) fn validate_transcode(errors: &mut Vec<String>, config: &ShrinkrayConfig) {
    validate_range(errors, "workers", config.workers, 1, MAX_WORKERS);

    if let Some(temp) = &config.temp_path {
        if temp.as_os_str().is_empty() {
            errors.push("temp_path must not be empty when set".into());
        }
    }
}
