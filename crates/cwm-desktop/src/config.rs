//! Startup scene configuration
//!
//! The desktop is rebuilt from this configuration at startup and after every
//! viewport resize; nothing else survives a reset.

use core::fmt;
use serde::{Deserialize, Serialize};
use crate::math::{Size, Vec2};
use crate::render::ImageCatalog;
use crate::window::{
    ActionKind, Alignment, ButtonConfig, IconConfig, WindowConfig, WindowRegistry,
};

/// Path of the close icon used by the default scene
pub const CLOSE_ICON_PATH: &str = "./cross.svg";

/// Windows created at startup, in registration order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesktopConfig {
    #[serde(default)]
    pub windows: Vec<WindowConfig>,
}

impl Default for DesktopConfig {
    /// A single 300×300 "Frame" at (100, 100) with a close button
    fn default() -> Self {
        let close = ButtonConfig {
            offset: Vec2::ZERO,
            size: Size::new(20.0, 20.0),
            color: "#ccc".into(),
            border: "#fff".into(),
            icon: Some(IconConfig {
                path: CLOSE_ICON_PATH.to_string(),
                color: Some("#fff".into()),
                margin: Some(6.0),
            }),
            path: None,
            align: Alignment::Right,
            action: ActionKind::Close,
        };

        Self {
            windows: vec![WindowConfig {
                title: "Frame".to_string(),
                position: Vec2::new(100.0, 100.0),
                size: Size::new(300.0, 300.0),
                background: Some("#111".into()),
                border: Some("#fff".into()),
                buttons: vec![close],
            }],
        }
    }
}

impl DesktopConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Build a fresh registry and icon catalog from this configuration
    pub fn build(&self) -> (WindowRegistry, ImageCatalog) {
        let mut images = ImageCatalog::new();
        let mut registry = WindowRegistry::new();
        for window in &self.windows {
            registry.append(window.build(&mut images));
        }
        (registry, images)
    }
}

/// Errors from configuration loading
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The JSON document could not be parsed
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Invalid desktop config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_is_single_frame() {
        let (registry, images) = DesktopConfig::default().build();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.ids(), vec![0]);
        let frame = registry.get(0).unwrap();
        assert_eq!(frame.title, "Frame");
        assert_eq!(frame.position, Vec2::new(100.0, 100.0));
        assert_eq!(frame.buttons().len(), 1);
        assert_eq!(images.path(frame.buttons().iter().next().unwrap().icon.unwrap()), Some(CLOSE_ICON_PATH));
    }

    #[test]
    fn test_from_json() {
        let config = DesktopConfig::from_json(
            r##"{ "windows": [
                { "title": "A", "size": { "width": 10.0, "height": 10.0 } },
                { "title": "B", "position": { "x": 5.0, "y": 5.0 },
                  "size": { "width": 10.0, "height": 10.0 }, "border": "#f00" }
            ] }"##,
        )
        .unwrap();

        let (registry, images) = config.build();
        assert_eq!(registry.len(), 2);
        assert!(images.is_empty());
        assert_eq!(registry.get(1).unwrap().border.as_ref().unwrap().as_str(), "#f00");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = DesktopConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid desktop config"));
    }

    #[test]
    fn test_default_round_trips_through_json() {
        let json = serde_json::to_string(&DesktopConfig::default()).unwrap();
        assert_eq!(DesktopConfig::from_json(&json).unwrap(), DesktopConfig::default());
    }
}
