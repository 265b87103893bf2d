//! Configuration schema types for winframe.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod window;

pub use logging::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for winframe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WinframeConfig {
    pub window: WindowConfiguration,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_correct_window() {
        let config = WinframeConfig::default();
        assert_eq!(config.window.title, "winframe");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.min_width, None);
        assert_eq!(config.window.max_height, None);
    }

    #[test]
    fn default_config_has_correct_logging() {
        let config = WinframeConfig::default();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config: WinframeConfig = toml::from_str("").unwrap();
        assert_eq!(config, WinframeConfig::default());
    }

    #[test]
    fn sections_parse_independently() {
        let config: WinframeConfig = toml::from_str(
            r#"
[logging]
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.window, WindowConfiguration::default());
    }
}
