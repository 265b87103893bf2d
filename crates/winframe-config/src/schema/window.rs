//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Immutable description of a host window.
///
/// `width` and `height` are the requested client-area size. The optional
/// bounds limit interactive resizing; they are client-area sizes too and
/// are converted to frame sizes only when handed to the OS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfiguration {
    pub title: String,
    pub width: i32,
    pub height: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<i32>,
}

impl Default for WindowConfiguration {
    fn default() -> Self {
        Self {
            title: "winframe".into(),
            width: 800,
            height: 600,
            min_width: None,
            min_height: None,
            max_width: None,
            max_height: None,
        }
    }
}

impl WindowConfiguration {
    /// Create a configuration with a title and client size and no bounds.
    pub fn new(title: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_min_size(mut self, width: i32, height: i32) -> Self {
        self.min_width = Some(width);
        self.min_height = Some(height);
        self
    }

    pub fn with_max_size(mut self, width: i32, height: i32) -> Self {
        self.max_width = Some(width);
        self.max_height = Some(height);
        self
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_bounds() {
        let config = WindowConfiguration::new("Docs", 1024, 768)
            .with_min_size(320, 240)
            .with_max_size(1920, 1080);
        assert_eq!(config.title, "Docs");
        assert_eq!(config.width, 1024);
        assert_eq!(config.min_width, Some(320));
        assert_eq!(config.min_height, Some(240));
        assert_eq!(config.max_width, Some(1920));
        assert_eq!(config.max_height, Some(1080));
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
title = "My Browser"
width = 1280
min_width = 400
"#;
        let config: WindowConfiguration = toml::from_str(toml_str).unwrap();
        assert_eq!(config.title, "My Browser");
        assert_eq!(config.width, 1280);
        assert_eq!(config.min_width, Some(400));
        // Defaults preserved
        assert_eq!(config.height, 600);
        assert_eq!(config.min_height, None);
        assert_eq!(config.max_width, None);
    }

    #[test]
    fn unset_bounds_are_not_serialized() {
        let json = serde_json::to_string(&WindowConfiguration::default()).unwrap();
        assert!(!json.contains("min_width"));
        assert!(!json.contains("max_height"));
        assert!(json.contains("\"width\":800"));
    }
}
