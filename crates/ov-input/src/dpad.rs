//! Dpad direction quantization
//!
//! A touch is turned into up to two cardinal directions from its angle around
//! the dpad center. The circle is split into eight sectors; even sectors are
//! cardinal, odd sectors are the diagonal between their neighbours.

use crate::effects::{Arrow, VisualCommand, VisualEffect, VisualTarget};
use ov_protocol::InputBits;
use std::f64::consts::PI;

/// Direction bits for each sector, counter-clockwise from the right
pub const SECTOR_BITS: [InputBits; 8] = [
    InputBits::RIGHT,
    InputBits::RIGHT.union(InputBits::UP),
    InputBits::UP,
    InputBits::UP.union(InputBits::LEFT),
    InputBits::LEFT,
    InputBits::LEFT.union(InputBits::DOWN),
    InputBits::DOWN,
    InputBits::DOWN.union(InputBits::RIGHT),
];

/// Angle of the touch around the center, with up as +π/2 in a y-down space
pub fn touch_angle(center_x: f64, center_y: f64, touch_x: f64, touch_y: f64) -> f64 {
    (center_y - touch_y).atan2(touch_x - center_x)
}

/// Sector in `[0, 8)` containing `angle`.
///
/// Halfway angles round upwards, so a boundary always resolves to the
/// counter-clockwise sector.
pub fn sector(angle: f64) -> usize {
    let steps = (angle * 4.0 / PI + 0.5).floor() as i64;
    steps.rem_euclid(8) as usize
}

/// Direction bits for a touch at `(touch_x, touch_y)`
pub fn direction_bits(center_x: f64, center_y: f64, touch_x: f64, touch_y: f64) -> InputBits {
    SECTOR_BITS[sector(touch_angle(center_x, center_y, touch_x, touch_y))]
}

/// Pressed look of the four arrows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DpadArrows {
    pressed: InputBits,
}

impl DpadArrows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directions currently drawn pressed
    pub fn pressed(&self) -> InputBits {
        self.pressed
    }

    /// Mark every arrow in `bits` pressed
    pub fn press(&mut self, bits: InputBits, effects: &mut Vec<VisualEffect>) {
        for arrow in Arrow::all() {
            if bits.contains(arrow.bit()) && !self.pressed.contains(arrow.bit()) {
                effects.push(VisualEffect::new(
                    VisualTarget::DpadArrow(*arrow),
                    VisualCommand::SetPressed(true),
                ));
            }
        }
        self.pressed |= bits & InputBits::DIRECTIONS;
    }

    /// Clear all four arrows
    pub fn reset(&mut self, effects: &mut Vec<VisualEffect>) {
        for arrow in Arrow::all() {
            if self.pressed.contains(arrow.bit()) {
                effects.push(VisualEffect::new(
                    VisualTarget::DpadArrow(*arrow),
                    VisualCommand::SetPressed(false),
                ));
            }
        }
        self.pressed = InputBits::empty();
    }
}
