//! Layout data: the persisted, partially specifiable shape of the overlay

use ov_core::config::ViewportConfig;
use ov_core::Result;
use ov_protocol::InputBits;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every control owned by the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ControlName {
    Dpad,
    A,
    B,
    X,
    Y,
    L,
    R,
    Start,
    Select,
    Pause,
}

impl ControlName {
    /// Buttons that contribute to the input state, in hit-test order
    pub const BUTTONS: [ControlName; 8] = [
        ControlName::A,
        ControlName::B,
        ControlName::X,
        ControlName::Y,
        ControlName::L,
        ControlName::R,
        ControlName::Start,
        ControlName::Select,
    ];

    pub fn all() -> &'static [ControlName] {
        &[
            ControlName::Dpad,
            ControlName::A,
            ControlName::B,
            ControlName::X,
            ControlName::Y,
            ControlName::L,
            ControlName::R,
            ControlName::Start,
            ControlName::Select,
            ControlName::Pause,
        ]
    }

    /// Key used in persisted layouts and configuration
    pub fn key(&self) -> &'static str {
        match self {
            ControlName::Dpad => "dpad",
            ControlName::A => "a",
            ControlName::B => "b",
            ControlName::X => "x",
            ControlName::Y => "y",
            ControlName::L => "l",
            ControlName::R => "r",
            ControlName::Start => "start",
            ControlName::Select => "select",
            ControlName::Pause => "pause",
        }
    }

    /// Id of the control's visual element in the page
    pub fn element_id(&self) -> String {
        match self {
            ControlName::Dpad => "dpad".to_string(),
            other => format!("btn-{}", other.key()),
        }
    }

    /// Position in [`ControlName::all`]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|name| name.key() == key)
    }

    /// Bit a touch on this control contributes, if it is a state button
    pub fn state_bit(&self) -> Option<InputBits> {
        match self {
            ControlName::A => Some(InputBits::A),
            ControlName::B => Some(InputBits::B),
            ControlName::X => Some(InputBits::X),
            ControlName::Y => Some(InputBits::Y),
            ControlName::L => Some(InputBits::L),
            ControlName::R => Some(InputBits::R),
            ControlName::Start => Some(InputBits::START),
            ControlName::Select => Some(InputBits::SELECT),
            ControlName::Dpad | ControlName::Pause => None,
        }
    }
}

impl fmt::Display for ControlName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Position and scale of one control; absent fields are left untouched on apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(
        rename = "interactionScale",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub interaction_scale: Option<f64>,
}

impl LayoutData {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_interaction_scale(mut self, interaction_scale: f64) -> Self {
        self.interaction_scale = Some(interaction_scale);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_none()
            && self.y.is_none()
            && self.scale.is_none()
            && self.interaction_scale.is_none()
    }

    /// Fields of `self`, falling back to `base` where `self` has none
    pub fn merged_over(&self, base: &LayoutData) -> LayoutData {
        LayoutData {
            x: self.x.or(base.x),
            y: self.y.or(base.y),
            scale: self.scale.or(base.scale),
            interaction_scale: self.interaction_scale.or(base.interaction_scale),
        }
    }

    /// Drop fields that would break geometry: non-finite coordinates and
    /// scales that are not strictly positive.
    pub fn sanitized(&self, name: ControlName) -> LayoutData {
        let coordinate = |field: &str, value: Option<f64>| {
            value.filter(|v| {
                let ok = v.is_finite();
                if !ok {
                    tracing::warn!("Ignoring {} {} = {} in layout", name, field, v);
                }
                ok
            })
        };
        let factor = |field: &str, value: Option<f64>| {
            value.filter(|v| {
                let ok = v.is_finite() && *v > 0.0;
                if !ok {
                    tracing::warn!("Ignoring {} {} = {} in layout", name, field, v);
                }
                ok
            })
        };

        LayoutData {
            x: coordinate("x", self.x),
            y: coordinate("y", self.y),
            scale: factor("scale", self.scale),
            interaction_scale: factor("interactionScale", self.interaction_scale),
        }
    }
}

/// Layout of the whole overlay, keyed by control
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlsLayoutData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpad: Option<LayoutData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<LayoutData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<LayoutData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<LayoutData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<LayoutData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l: Option<LayoutData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<LayoutData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<LayoutData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select: Option<LayoutData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause: Option<LayoutData>,
}

impl ControlsLayoutData {
    pub fn get(&self, name: ControlName) -> Option<&LayoutData> {
        self.slot(name).as_ref()
    }

    pub fn set(&mut self, name: ControlName, data: LayoutData) {
        *self.slot_mut(name) = Some(data);
    }

    fn slot(&self, name: ControlName) -> &Option<LayoutData> {
        match name {
            ControlName::Dpad => &self.dpad,
            ControlName::A => &self.a,
            ControlName::B => &self.b,
            ControlName::X => &self.x,
            ControlName::Y => &self.y,
            ControlName::L => &self.l,
            ControlName::R => &self.r,
            ControlName::Start => &self.start,
            ControlName::Select => &self.select,
            ControlName::Pause => &self.pause,
        }
    }

    fn slot_mut(&mut self, name: ControlName) -> &mut Option<LayoutData> {
        match name {
            ControlName::Dpad => &mut self.dpad,
            ControlName::A => &mut self.a,
            ControlName::B => &mut self.b,
            ControlName::X => &mut self.x,
            ControlName::Y => &mut self.y,
            ControlName::L => &mut self.l,
            ControlName::R => &mut self.r,
            ControlName::Start => &mut self.start,
            ControlName::Select => &mut self.select,
            ControlName::Pause => &mut self.pause,
        }
    }

    /// Entries of `self` merged field-by-field over `base`
    pub fn merged_over(&self, base: &ControlsLayoutData) -> ControlsLayoutData {
        let mut merged = ControlsLayoutData::default();
        for &name in ControlName::all() {
            let entry = match (self.get(name), base.get(name)) {
                (Some(top), Some(bottom)) => Some(top.merged_over(bottom)),
                (Some(top), None) => Some(*top),
                (None, bottom) => bottom.copied(),
            };
            *merged.slot_mut(name) = entry;
        }
        merged
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Layout box the default layout is synthesized for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Root font size, used as the margin unit
    pub font_size: f64,
    /// Touch presentation; Pause then sits level with Start/Select
    pub touch_layout: bool,
}

impl Viewport {
    pub fn new(width: f64, height: f64, font_size: f64) -> Self {
        Self {
            width,
            height,
            font_size,
            touch_layout: false,
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

impl From<&ViewportConfig> for Viewport {
    fn from(config: &ViewportConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            font_size: config.font_size,
            touch_layout: config.touch_layout,
        }
    }
}
