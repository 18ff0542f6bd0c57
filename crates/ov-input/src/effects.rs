//! Visual effects the overlay asks its rendering backend to perform
//!
//! Geometry is computed without touching any visual tree. Every change that
//! needs to become visible is queued as a [`VisualEffect`] and handed to a
//! [`VisualSurface`] by the owner of the controls.

use crate::layout::ControlName;
use ov_protocol::InputBits;

/// One arrow of the dpad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
}

impl Arrow {
    pub fn all() -> &'static [Arrow] {
        &[Arrow::Up, Arrow::Down, Arrow::Left, Arrow::Right]
    }

    pub fn bit(&self) -> InputBits {
        match self {
            Arrow::Up => InputBits::UP,
            Arrow::Down => InputBits::DOWN,
            Arrow::Left => InputBits::LEFT,
            Arrow::Right => InputBits::RIGHT,
        }
    }

    /// Id of the arrow's element in the page
    pub fn element_id(&self) -> &'static str {
        match self {
            Arrow::Up => "dpad-up",
            Arrow::Down => "dpad-down",
            Arrow::Left => "dpad-left",
            Arrow::Right => "dpad-right",
        }
    }
}

/// Element an effect applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualTarget {
    Control(ControlName),
    DpadArrow(Arrow),
}

/// A single style change
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisualCommand {
    /// Top-left corner of the unscaled element
    SetOffset { left: f64, top: f64 },
    /// Uniform scale of the element about its center
    SetScale(f64),
    /// Centered scale of the interaction sub-element and its outline width
    SetInteractionTransform { scale: f64, border_width: f64 },
    /// Whether the interaction outline is shown
    SetOutlineVisible(bool),
    /// Whether the element is drawn pressed
    SetPressed(bool),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualEffect {
    pub target: VisualTarget,
    pub command: VisualCommand,
}

impl VisualEffect {
    pub fn new(target: VisualTarget, command: VisualCommand) -> Self {
        Self { target, command }
    }
}

/// Backend that turns effects into actual style writes
pub trait VisualSurface {
    fn apply(&mut self, effect: &VisualEffect);
}

/// Surface that keeps every effect it receives
impl VisualSurface for Vec<VisualEffect> {
    fn apply(&mut self, effect: &VisualEffect) {
        self.push(*effect);
    }
}
