//! winframe configuration system.
//!
//! TOML-based configuration for the window a host embeds its browser
//! view in. All sections use defaults so partial configs work.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use winframe_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LoggingConfig, WindowConfiguration, WinframeConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;
use winframe_common::ConfigError;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<WinframeConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit path override.
pub fn load_config_from(path: &Path) -> Result<WinframeConfig, ConfigError> {
    toml_loader::load_from_path(path)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &WinframeConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&WinframeConfig::default());
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"winframe\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = WinframeConfig::default();
        let json = config_to_json(&config);
        let parsed: WinframeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
