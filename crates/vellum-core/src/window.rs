//! Window configuration for the desktop shell

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Label assigned to the primary window
pub const MAIN_WINDOW_LABEL: &str = "main";

/// Relative path of the document loaded into every new window. There is no
/// alternate document; the shell displays this file and nothing else.
pub const CONTENT_DOCUMENT: &str = "index.html";

/// Default logical width of a new window
const DEFAULT_WIDTH: f64 = 1500.0;

/// Default logical height of a new window
const DEFAULT_HEIGHT: f64 = 800.0;

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Native title bar text
    pub title: String,
    /// Logical width in pixels
    pub width: f64,
    /// Logical height in pixels
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Vellum".to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl WindowConfig {
    /// Reject dimensions the windowing system cannot honor.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let config = WindowConfig::default();
        assert_eq!(config.width, 1500.0);
        assert_eq!(config.height, 800.0);
        assert_eq!(config.title, "Vellum");
        config.validate().expect("defaults must validate");
    }

    #[test]
    fn test_content_document_is_fixed() {
        assert_eq!(CONTENT_DOCUMENT, "index.html");
        assert_eq!(MAIN_WINDOW_LABEL, "main");
    }

    #[test]
    fn test_validate_rejects_bad_dimensions() {
        for (width, height) in [(0.0, 800.0), (-100.0, 800.0), (1500.0, f64::NAN), (1500.0, f64::INFINITY)] {
            let config = WindowConfig {
                width,
                height,
                ..WindowConfig::default()
            };
            assert!(config.validate().is_err(), "{width}x{height} should be rejected");
        }
    }

    #[test]
    fn test_config_serialize_deserialize() {
        let config = WindowConfig::default();
        let serialized = serde_json::to_string(&config).expect("Should serialize");
        let deserialized: WindowConfig = serde_json::from_str(&serialized).expect("Should deserialize");
        assert_eq!(config, deserialized);
    }
}
