//! Positionable, scalable, hit-testable controls
//!
//! [`ControlGeometry`] is a plain record; the free functions in this module
//! compute the next record together with the [`VisualCommand`]s needed to
//! show it. [`Control`] pairs that record with a kind and queues the commands
//! as effects for its owner.

use crate::effects::{VisualCommand, VisualEffect, VisualTarget};
use crate::element::ElementMetrics;
use crate::layout::{ControlName, LayoutData};
use ov_core::config::HitShape;
use ov_protocol::InputBits;

/// Outline width used when none is configured
pub const DEFAULT_OUTLINE_WIDTH: f64 = 5.0;

/// Geometry shared by every control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlGeometry {
    /// Half of the unscaled element width
    pub half_width: f64,
    /// Half of the unscaled element height
    pub half_height: f64,
    /// Center x in the layout box
    pub x: f64,
    /// Center y in the layout box
    pub y: f64,
    pub scale: f64,
    /// Extra scale applied only to the interaction affordance
    pub interaction_scale: f64,
    pub editing: bool,
}

impl ControlGeometry {
    /// Freshly measured geometry, positioned at the element's resting place
    pub fn measured(metrics: &ElementMetrics) -> Self {
        let half_width = metrics.half_width();
        let half_height = metrics.half_height();
        Self {
            half_width,
            half_height,
            x: metrics.offset_left + half_width,
            y: metrics.offset_top + half_height,
            scale: 1.0,
            interaction_scale: 1.0,
            editing: false,
        }
    }

    /// Half extents of the interaction affordance in layout-box pixels
    pub fn interaction_half_extents(&self) -> (f64, f64) {
        let factor = self.scale * self.interaction_scale;
        (self.half_width * factor, self.half_height * factor)
    }

    pub fn layout_data(&self) -> LayoutData {
        LayoutData {
            x: Some(self.x),
            y: Some(self.y),
            scale: Some(self.scale),
            interaction_scale: Some(self.interaction_scale),
        }
    }
}

fn offset(geometry: &ControlGeometry) -> VisualCommand {
    VisualCommand::SetOffset {
        left: geometry.x - geometry.half_width,
        top: geometry.y - geometry.half_height,
    }
}

fn interaction_transform(geometry: &ControlGeometry, outline_width: f64) -> VisualCommand {
    let final_scale = geometry.scale * geometry.interaction_scale;
    VisualCommand::SetInteractionTransform {
        scale: geometry.interaction_scale,
        border_width: outline_width / final_scale,
    }
}

pub fn set_x(geometry: &ControlGeometry, x: f64) -> (ControlGeometry, Vec<VisualCommand>) {
    let next = ControlGeometry { x, ..*geometry };
    (next, vec![offset(&next)])
}

pub fn set_y(geometry: &ControlGeometry, y: f64) -> (ControlGeometry, Vec<VisualCommand>) {
    let next = ControlGeometry { y, ..*geometry };
    (next, vec![offset(&next)])
}

/// Set the visual scale, re-measuring half extents from the unscaled footprint.
///
/// The interaction outline width is divided by the compounded scale so it
/// keeps the same on-screen thickness.
pub fn set_scale(
    geometry: &ControlGeometry,
    metrics: &ElementMetrics,
    scale: f64,
    outline_width: f64,
) -> (ControlGeometry, Vec<VisualCommand>) {
    let next = ControlGeometry {
        scale,
        half_width: metrics.half_width(),
        half_height: metrics.half_height(),
        ..*geometry
    };
    (
        next,
        vec![
            VisualCommand::SetScale(scale),
            interaction_transform(&next, outline_width),
        ],
    )
}

pub fn set_interaction_scale(
    geometry: &ControlGeometry,
    interaction_scale: f64,
    outline_width: f64,
) -> (ControlGeometry, Vec<VisualCommand>) {
    let next = ControlGeometry {
        interaction_scale,
        ..*geometry
    };
    (next, vec![interaction_transform(&next, outline_width)])
}

pub fn set_editing(
    geometry: &ControlGeometry,
    editing: bool,
) -> (ControlGeometry, Vec<VisualCommand>) {
    if geometry.editing == editing {
        return (*geometry, Vec::new());
    }
    let next = ControlGeometry { editing, ..*geometry };
    (next, vec![VisualCommand::SetOutlineVisible(editing)])
}

/// Apply the fields present in `data`, in x, y, scale, interaction-scale order
pub fn apply_layout(
    geometry: &ControlGeometry,
    metrics: &ElementMetrics,
    data: &LayoutData,
    outline_width: f64,
) -> (ControlGeometry, Vec<VisualCommand>) {
    let mut current = *geometry;
    let mut commands = Vec::new();

    if let Some(x) = data.x {
        let (next, mut emitted) = set_x(&current, x);
        current = next;
        commands.append(&mut emitted);
    }
    if let Some(y) = data.y {
        let (next, mut emitted) = set_y(&current, y);
        current = next;
        commands.append(&mut emitted);
    }
    if let Some(scale) = data.scale {
        let (next, mut emitted) = set_scale(&current, metrics, scale, outline_width);
        current = next;
        commands.append(&mut emitted);
    }
    if let Some(interaction_scale) = data.interaction_scale {
        let (next, mut emitted) = set_interaction_scale(&current, interaction_scale, outline_width);
        current = next;
        commands.append(&mut emitted);
    }

    (current, commands)
}

/// Whether the interaction affordance covers the point
pub fn contains(geometry: &ControlGeometry, shape: HitShape, x: f64, y: f64) -> bool {
    let (rx, ry) = geometry.interaction_half_extents();
    if rx <= 0.0 || ry <= 0.0 {
        return false;
    }
    let dx = x - geometry.x;
    let dy = y - geometry.y;
    match shape {
        HitShape::Rect => dx.abs() <= rx && dy.abs() <= ry,
        HitShape::Ellipse => {
            let nx = dx / rx;
            let ny = dy / ry;
            nx * nx + ny * ny <= 1.0
        }
    }
}

/// What a control does when touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Contributes `state_bit` while touched; Pause uses an empty bit
    Button { state_bit: InputBits },
    /// Derives directions from the touch angle
    Dpad,
}

/// A control owned by the overlay
#[derive(Debug, Clone)]
pub struct Control {
    name: ControlName,
    kind: ControlKind,
    metrics: ElementMetrics,
    geometry: ControlGeometry,
    outline_width: f64,
    pressed: bool,
}

impl Control {
    /// Measure the element, default any field `layout` leaves out, then apply it
    pub fn new(
        name: ControlName,
        kind: ControlKind,
        metrics: ElementMetrics,
        layout: &LayoutData,
        outline_width: f64,
        effects: &mut Vec<VisualEffect>,
    ) -> Self {
        let measured = ControlGeometry::measured(&metrics);
        let mut control = Self {
            name,
            kind,
            metrics,
            geometry: measured,
            outline_width,
            pressed: false,
        };
        let initial = layout.sanitized(name).merged_over(&measured.layout_data());
        control.apply_layout(&initial, effects);
        control
    }

    pub fn name(&self) -> ControlName {
        self.name
    }

    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    /// Bit contributed while touched; empty for the dpad and Pause
    pub fn state_bit(&self) -> InputBits {
        match self.kind {
            ControlKind::Button { state_bit } => state_bit,
            ControlKind::Dpad => InputBits::empty(),
        }
    }

    pub fn geometry(&self) -> &ControlGeometry {
        &self.geometry
    }

    pub fn metrics(&self) -> &ElementMetrics {
        &self.metrics
    }

    pub fn half_width(&self) -> f64 {
        self.geometry.half_width
    }

    pub fn half_height(&self) -> f64 {
        self.geometry.half_height
    }

    pub fn x(&self) -> f64 {
        self.geometry.x
    }

    pub fn y(&self) -> f64 {
        self.geometry.y
    }

    pub fn scale(&self) -> f64 {
        self.geometry.scale
    }

    pub fn interaction_scale(&self) -> f64 {
        self.geometry.interaction_scale
    }

    pub fn editing(&self) -> bool {
        self.geometry.editing
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn layout_data(&self) -> LayoutData {
        self.geometry.layout_data()
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        contains(&self.geometry, self.metrics.shape, x, y)
    }

    fn commit(
        &mut self,
        update: (ControlGeometry, Vec<VisualCommand>),
        effects: &mut Vec<VisualEffect>,
    ) {
        let (next, commands) = update;
        self.geometry = next;
        let target = VisualTarget::Control(self.name);
        effects.extend(commands.into_iter().map(|command| VisualEffect::new(target, command)));
    }

    /// Partial update: only the fields present in `data` change
    pub fn apply_layout(&mut self, data: &LayoutData, effects: &mut Vec<VisualEffect>) {
        let data = data.sanitized(self.name);
        let update = apply_layout(&self.geometry, &self.metrics, &data, self.outline_width);
        self.commit(update, effects);
    }

    pub fn set_scale(&mut self, scale: f64, effects: &mut Vec<VisualEffect>) {
        self.apply_layout(&LayoutData { scale: Some(scale), ..Default::default() }, effects);
    }

    pub fn set_editing(&mut self, editing: bool, effects: &mut Vec<VisualEffect>) {
        let update = set_editing(&self.geometry, editing);
        self.commit(update, effects);
    }

    /// Set the pressed look; nothing is emitted when it is already in that state
    pub fn set_pressed(&mut self, pressed: bool, effects: &mut Vec<VisualEffect>) {
        if self.pressed == pressed {
            return;
        }
        self.pressed = pressed;
        effects.push(VisualEffect::new(
            VisualTarget::Control(self.name),
            VisualCommand::SetPressed(pressed),
        ));
    }

    /// Replace the unscaled footprint and re-apply scale and position with it
    pub fn remeasure(&mut self, metrics: ElementMetrics, effects: &mut Vec<VisualEffect>) {
        self.metrics = metrics;
        let current = self.layout_data();
        let reapply = LayoutData {
            scale: current.scale,
            ..LayoutData::default()
        };
        self.apply_layout(&reapply, effects);
        let position = LayoutData {
            x: current.x,
            y: current.y,
            ..LayoutData::default()
        };
        self.apply_layout(&position, effects);
    }
}
