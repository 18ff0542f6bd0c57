//! Configuration system for the touch overlay

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub viewport: ViewportConfig,
    pub screen: ScreenConfig,
    pub elements: ElementsConfig,
    pub debug: DebugConfig,
}

/// Tuning for control geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// On-screen thickness of the editing outline, in pixels
    pub outline_width: f64,
    /// Interaction scale the dpad starts with when no layout supplies one
    pub dpad_interaction_scale: f64,
    /// Interaction scale given to A/B/X/Y by the default layout
    pub face_button_interaction_scale: f64,
}

/// Layout box the overlay is laid out in
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
    /// Root font size; one margin unit
    pub font_size: f64,
    /// Whether the overlay uses the touch presentation
    pub touch_layout: bool,
}

/// Position of the emulated bottom screen inside the layout box
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Shape of a control's interaction affordance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HitShape {
    #[default]
    Ellipse,
    Rect,
}

/// Measured, unscaled footprint of one control element
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ElementConfig {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub offset_left: f64,
    #[serde(default)]
    pub offset_top: f64,
    #[serde(default)]
    pub shape: HitShape,
}

/// Element footprints keyed by control name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ElementsConfig(pub BTreeMap<String, ElementConfig>);

/// Debug settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DebugConfig {
    pub log_level: LogLevel,
}

/// Logging level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            outline_width: 5.0,
            dpad_interaction_scale: 1.2,
            face_button_interaction_scale: 1.75,
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 844.0,
            height: 390.0,
            font_size: 16.0,
            touch_layout: true,
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            left: 294.0,
            top: 195.0,
            width: 256.0,
            height: 192.0,
        }
    }
}

impl ElementConfig {
    pub fn new(width: f64, height: f64, shape: HitShape) -> Self {
        Self {
            width,
            height,
            offset_left: 0.0,
            offset_top: 0.0,
            shape,
        }
    }
}

impl Default for ElementsConfig {
    fn default() -> Self {
        let round = |size| ElementConfig::new(size, size, HitShape::Ellipse);
        let pill = |width, height| ElementConfig::new(width, height, HitShape::Rect);

        let mut elements = BTreeMap::new();
        elements.insert("dpad".to_string(), ElementConfig::new(128.0, 128.0, HitShape::Rect));
        for face in ["a", "b", "x", "y"] {
            elements.insert(face.to_string(), round(44.0));
        }
        elements.insert("l".to_string(), pill(72.0, 36.0));
        elements.insert("r".to_string(), pill(72.0, 36.0));
        elements.insert("start".to_string(), pill(56.0, 28.0));
        elements.insert("select".to_string(), pill(56.0, 28.0));
        elements.insert("pause".to_string(), round(36.0));
        Self(elements)
    }
}

impl ElementsConfig {
    pub fn get(&self, name: &str) -> Option<&ElementConfig> {
        self.0.get(name)
    }
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_directive(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl Config {
    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Load configuration from an explicit path, writing defaults there if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config = toml::from_str(&content)?;
            tracing::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!("Wrote default config to {}", path.display());
            Ok(config)
        }
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the configuration file
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ds-overlay")
            .join("config.toml")
    }
}
