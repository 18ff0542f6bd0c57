//! Measured element footprints handed to the overlay at construction

use crate::layout::ControlName;
use ov_core::config::{ElementConfig, ElementsConfig, HitShape};
use ov_core::{OverlayError, Result};
use std::collections::HashMap;

/// Unscaled footprint of a control's visual element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementMetrics {
    pub width: f64,
    pub height: f64,
    /// Left edge in the layout box before any positioning
    pub offset_left: f64,
    /// Top edge in the layout box before any positioning
    pub offset_top: f64,
    /// Shape of the interaction affordance
    pub shape: HitShape,
}

impl ElementMetrics {
    pub fn new(width: f64, height: f64, shape: HitShape) -> Self {
        Self {
            width,
            height,
            offset_left: 0.0,
            offset_top: 0.0,
            shape,
        }
    }

    pub fn at(mut self, offset_left: f64, offset_top: f64) -> Self {
        self.offset_left = offset_left;
        self.offset_top = offset_top;
        self
    }

    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }

    pub fn half_height(&self) -> f64 {
        self.height * 0.5
    }
}

impl From<&ElementConfig> for ElementMetrics {
    fn from(config: &ElementConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            offset_left: config.offset_left,
            offset_top: config.offset_top,
            shape: config.shape,
        }
    }
}

/// Resolved element handles for every control
#[derive(Debug, Clone, Default)]
pub struct ElementTable {
    metrics: HashMap<ControlName, ElementMetrics>,
}

impl ElementTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from configured footprints, skipping unknown keys
    pub fn from_config(config: &ElementsConfig) -> Self {
        let mut table = Self::new();
        for (key, element) in &config.0 {
            match ControlName::from_key(key) {
                Some(name) => table.insert(name, element.into()),
                None => tracing::warn!("Ignoring element config for unknown control '{}'", key),
            }
        }
        table
    }

    pub fn insert(&mut self, name: ControlName, metrics: ElementMetrics) {
        self.metrics.insert(name, metrics);
    }

    pub fn get(&self, name: ControlName) -> Option<&ElementMetrics> {
        self.metrics.get(&name)
    }

    /// Metrics for `name`, or the fatal missing-element error
    pub fn require(&self, name: ControlName) -> Result<ElementMetrics> {
        self.get(name)
            .copied()
            .ok_or_else(|| OverlayError::MissingElement(name.element_id()))
    }
}
