//! Turns live touches into `UpdateInput` messages
//!
//! Once per frame the poller clears the pressed look of every control, folds
//! each touch that started on the controls into a fresh mask, and diffs that
//! mask against the previous frame's.

use crate::controls::TouchControls;
use crate::touch::{Touch, TouchArea};
use ov_core::config::ScreenConfig;
use ov_protocol::{InputBits, MessageSink, UiToEmu};

/// Largest x coordinate on the emulated touch screen
pub const SCREEN_MAX_X: u8 = 255;
/// Largest y coordinate on the emulated touch screen
pub const SCREEN_MAX_Y: u8 = 191;

/// Where the bottom screen is drawn inside the layout box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.left + self.width && y >= self.top && y < self.top + self.height
    }

    /// Map a layout-box point into emulated screen pixels, clamped to the screen
    pub fn to_touch_pos(&self, x: f64, y: f64) -> (u8, u8) {
        let map = |value: f64, origin: f64, extent: f64, last: u8| {
            let scaled = ((value - origin) / extent * (f64::from(last) + 1.0)).floor();
            scaled.clamp(0.0, f64::from(last)) as u8
        };
        (
            map(x, self.left, self.width, SCREEN_MAX_X),
            map(y, self.top, self.height, SCREEN_MAX_Y),
        )
    }
}

impl From<&ScreenConfig> for ScreenRect {
    fn from(config: &ScreenConfig) -> Self {
        Self {
            left: config.left,
            top: config.top,
            width: config.width,
            height: config.height,
        }
    }
}

pub struct InputPoller {
    /// Live touches keyed by pointer id, in start order
    touches: Vec<(i32, Touch)>,
    previous: InputBits,
    previous_touch_pos: Option<(u8, u8)>,
    screen: ScreenRect,
}

impl InputPoller {
    pub fn new(screen: ScreenRect) -> Self {
        Self {
            touches: Vec::new(),
            previous: InputBits::empty(),
            previous_touch_pos: None,
            screen,
        }
    }

    /// Mask sent with the last update
    pub fn state(&self) -> InputBits {
        self.previous
    }

    pub fn touches(&self) -> impl Iterator<Item = &Touch> {
        self.touches.iter().map(|(_, touch)| touch)
    }

    pub fn set_screen(&mut self, screen: ScreenRect) {
        self.screen = screen;
    }

    /// Zone a touch starting at the point belongs to
    pub fn classify(&self, x: f64, y: f64, controls: &TouchControls) -> TouchArea {
        if controls.contain_touch(x, y) {
            TouchArea::Controls
        } else if self.screen.contains(x, y) {
            TouchArea::BottomScreen
        } else {
            TouchArea::None
        }
    }

    /// Record a new touch; a reused id replaces the old touch
    pub fn touch_start(&mut self, id: i32, x: f64, y: f64, controls: &TouchControls) -> TouchArea {
        let area = self.classify(x, y, controls);
        self.touches.retain(|(existing, _)| *existing != id);
        self.touches.push((id, Touch::new(area, x, y)));
        tracing::trace!("Touch {} started at ({}, {}) in {:?}", id, x, y, area);
        area
    }

    /// Move a live touch; returns false for unknown ids
    pub fn touch_move(&mut self, id: i32, x: f64, y: f64) -> bool {
        match self.touches.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, touch)) => {
                touch.move_to(x, y);
                true
            }
            None => false,
        }
    }

    /// End (or cancel) a touch
    pub fn touch_end(&mut self, id: i32) -> Option<Touch> {
        let index = self.touches.iter().position(|(existing, _)| *existing == id)?;
        Some(self.touches.remove(index).1)
    }

    /// Resolve every live touch; `Some` only when the mask or touch position changed.
    ///
    /// Touches are not turned into input while the controls are being edited.
    pub fn poll(&mut self, controls: &mut TouchControls) -> Option<UiToEmu> {
        controls.reset_touches();

        let mut state = InputBits::empty();
        if !controls.editing() {
            for (_, touch) in &self.touches {
                if touch.area == TouchArea::Controls {
                    state = controls.process_touch(touch, state);
                }
            }
        }

        let touch_pos = self
            .touches
            .iter()
            .find(|(_, touch)| touch.area == TouchArea::BottomScreen)
            .map(|(_, touch)| self.screen.to_touch_pos(touch.x, touch.y));

        let (pressed, released) = state.diff(self.previous);
        if pressed.is_empty() && released.is_empty() && touch_pos == self.previous_touch_pos {
            return None;
        }

        self.previous = state;
        self.previous_touch_pos = touch_pos;
        Some(UiToEmu::UpdateInput {
            pressed,
            released,
            touch_pos,
        })
    }

    /// Poll and post the update, if any; returns whether a message was sent
    pub fn poll_into<S: MessageSink + ?Sized>(
        &mut self,
        controls: &mut TouchControls,
        sink: &S,
    ) -> bool {
        match self.poll(controls) {
            Some(message) => sink.post(message),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_pos_mapping() {
        let screen = ScreenRect {
            left: 100.0,
            top: 50.0,
            width: 512.0,
            height: 384.0,
        };
        assert_eq!(screen.to_touch_pos(100.0, 50.0), (0, 0));
        assert_eq!(screen.to_touch_pos(356.0, 242.0), (128, 96));
        assert_eq!(screen.to_touch_pos(611.9, 433.9), (255, 191));
        assert_eq!(screen.to_touch_pos(2000.0, -10.0), (255, 0));
        assert!(screen.contains(100.0, 50.0));
        assert!(!screen.contains(612.0, 100.0));
    }
}
