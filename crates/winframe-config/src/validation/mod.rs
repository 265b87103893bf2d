//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod helpers;
mod window;


use crate::schema::WinframeConfig;
use winframe_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WinframeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    window::validate_window(&mut errors, config);
    validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_logging(errors: &mut Vec<String>, config: &WinframeConfig) {
    if config.logging.level.trim().is_empty() {
        errors.push("logging.level must not be empty".into());
    }
}
