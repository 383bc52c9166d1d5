//! Playground settings
//!
//! Loaded from a JSON file on native builds; validated before the geometry
//! core ever sees them, since the core itself does not guard against a zero
//! scale.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_PLAYGROUND_DIMENSION;
use crate::error::ConfigError;
use crate::geom::{Palette, Playground};

/// Game settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Field dimensions and pixel scale
    pub playground: Playground,
    /// Seed for the bubble color stream
    pub seed: u64,
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject dimensions the coordinate conversions can't handle
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Playground {
            width,
            height,
            scale,
        } = self.playground;

        let problem = if width == 0 || height == 0 {
            Some(format!("dimensions must be positive, got {width}x{height}"))
        } else if width > MAX_PLAYGROUND_DIMENSION || height > MAX_PLAYGROUND_DIMENSION {
            Some(format!(
                "dimensions must be at most {MAX_PLAYGROUND_DIMENSION}, got {width}x{height}"
            ))
        } else if scale == 0.0 || !scale.is_finite() {
            Some(format!("scale must be finite and non-zero, got {scale}"))
        } else {
            None
        };

        match problem {
            Some(msg) => {
                log::warn!("Rejected settings: {}", msg);
                Err(ConfigError::InvalidPlayground(msg))
            }
            None => Ok(()),
        }
    }

    /// Color source for a new board
    pub fn palette(&self) -> Palette {
        Palette::standard(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.playground.width, DEFAULT_PLAYGROUND_WIDTH);
        assert_eq!(settings.playground.height, DEFAULT_PLAYGROUND_HEIGHT);
        assert_eq!(settings.playground.scale, DEFAULT_SCALE);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{ "playground": { "width": 8, "height": 10, "scale": 12.5 }, "seed": 7 }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.playground, Playground::new(8, 10, 12.5));
        assert_eq!(settings.seed, 7);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 3 }"#).unwrap();
        assert_eq!(settings.playground, Playground::default());
        assert_eq!(settings.seed, 3);
    }

    #[test]
    fn test_rejects_zero_scale() {
        let json = r#"{ "playground": { "width": 8, "height": 10, "scale": 0.0 } }"#;
        assert!(matches!(Settings::from_json(json), Err(ConfigError::InvalidPlayground(_))));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let mut settings = Settings::default();
        settings.playground.width = 0;
        assert!(matches!(settings.validate(), Err(ConfigError::InvalidPlayground(_))));
    }

    #[test]
    fn test_rejects_oversized_dimensions() {
        let mut settings = Settings::default();
        settings.playground.height = MAX_PLAYGROUND_DIMENSION + 1;
        assert!(matches!(settings.validate(), Err(ConfigError::InvalidPlayground(_))));
        settings.playground.height = MAX_PLAYGROUND_DIMENSION;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_playground_uses_defaults() {
        let settings = Settings::from_json(r#"{ "playground": { "width": 8 } }"#).unwrap();
        assert_eq!(settings.playground.width, 8);
        assert_eq!(settings.playground.height, DEFAULT_PLAYGROUND_HEIGHT);
        assert_eq!(settings.playground.scale, DEFAULT_SCALE);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Settings::from_json("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            playground: Playground::new(5, 6, 2.0),
            seed: 11,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Settings::load("/nonexistent/bubble-shooter/settings.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
