//! Aggregate touch controller
//!
//! Owns the dpad, the state buttons and Pause; resolves touches against all
//! of them in one pass, round-trips the whole layout and synthesizes a
//! default arrangement for a given viewport.

use crate::control::{Control, ControlKind};
use crate::dpad::{self, DpadArrows};
use crate::effects::{VisualEffect, VisualSurface};
use crate::element::{ElementMetrics, ElementTable};
use crate::layout::{ControlName, ControlsLayoutData, LayoutData, Viewport};
use crate::touch::Touch;
use ov_core::config::LayoutConfig;
use ov_core::Result;
use ov_protocol::InputBits;

/// Aspect-ratio bands for the L/R baseline, as (upper bound, fraction of height)
const SHOULDER_BANDS: [(f64, f64); 2] = [(5.0 / 4.0, 0.4), (4.0 / 3.0, 0.3)];
/// Fraction of the height used above the widest band
const SHOULDER_WIDE: f64 = 0.1;

#[derive(Debug)]
pub struct TouchControls {
    /// Indexed by `ControlName` discriminant
    controls: Vec<Control>,
    arrows: DpadArrows,
    editing: bool,
    face_button_interaction_scale: f64,
    effects: Vec<VisualEffect>,
}

impl TouchControls {
    /// Build every control from its measured element and optional stored layout.
    ///
    /// Fails with `MissingElement` as soon as a control has no element.
    pub fn new(
        elements: &ElementTable,
        layout: &ControlsLayoutData,
        config: &LayoutConfig,
    ) -> Result<Self> {
        let mut effects = Vec::new();
        let mut controls = Vec::with_capacity(ControlName::all().len());

        for &name in ControlName::all() {
            let metrics = elements.require(name)?;
            let stored = layout.get(name).copied().unwrap_or_default();
            let (kind, initial) = match name {
                ControlName::Dpad => (
                    ControlKind::Dpad,
                    stored.merged_over(&LayoutData {
                        interaction_scale: Some(config.dpad_interaction_scale),
                        ..LayoutData::default()
                    }),
                ),
                other => (
                    ControlKind::Button {
                        state_bit: other.state_bit().unwrap_or_default(),
                    },
                    stored,
                ),
            };
            controls.push(Control::new(
                name,
                kind,
                metrics,
                &initial,
                config.outline_width,
                &mut effects,
            ));
        }

        tracing::debug!("Touch controls created with {} controls", controls.len());

        Ok(Self {
            controls,
            arrows: DpadArrows::new(),
            editing: false,
            face_button_interaction_scale: config.face_button_interaction_scale,
            effects,
        })
    }

    pub fn control(&self, name: ControlName) -> &Control {
        &self.controls[name.index()]
    }

    pub fn dpad(&self) -> &Control {
        self.control(ControlName::Dpad)
    }

    pub fn pause(&self) -> &Control {
        self.control(ControlName::Pause)
    }

    /// State buttons in hit-test order
    pub fn buttons(&self) -> impl Iterator<Item = &Control> {
        ControlName::BUTTONS
            .into_iter()
            .map(move |name| self.control(name))
    }

    /// Directions currently drawn pressed on the dpad
    pub fn dpad_pressed(&self) -> InputBits {
        self.arrows.pressed()
    }

    /// Clear the pressed look of every button and dpad arrow
    pub fn reset_touches(&mut self) {
        for name in ControlName::BUTTONS {
            self.controls[name.index()].set_pressed(false, &mut self.effects);
        }
        self.arrows.reset(&mut self.effects);
    }

    /// Whether any interaction affordance covers the point
    pub fn contain_touch(&self, x: f64, y: f64) -> bool {
        self.control_at(x, y).is_some()
    }

    /// First control whose affordance covers the point: Pause, then buttons, then the dpad
    pub fn control_at(&self, x: f64, y: f64) -> Option<ControlName> {
        std::iter::once(ControlName::Pause)
            .chain(ControlName::BUTTONS)
            .chain(std::iter::once(ControlName::Dpad))
            .find(|name| self.control(*name).contains(x, y))
    }

    /// Fold one touch into `state`.
    ///
    /// Every button under the touch contributes, so overlapping affordances
    /// press together; the dpad adds the directions for the touch angle.
    pub fn process_touch(&mut self, touch: &Touch, state: InputBits) -> InputBits {
        let mut state = state;

        for name in ControlName::BUTTONS {
            let button = &mut self.controls[name.index()];
            if button.contains(touch.x, touch.y) {
                state |= button.state_bit();
                button.set_pressed(true, &mut self.effects);
            }
        }

        let dpad = &self.controls[ControlName::Dpad.index()];
        if dpad.contains(touch.x, touch.y) {
            let bits = dpad::direction_bits(dpad.x(), dpad.y(), touch.x, touch.y);
            self.arrows.press(bits, &mut self.effects);
            state |= bits;
        }

        state
    }

    pub fn layout_data(&self) -> ControlsLayoutData {
        let mut layout = ControlsLayoutData::default();
        for control in &self.controls {
            layout.set(control.name(), control.layout_data());
        }
        layout
    }

    /// Apply only the entries present in `layout`
    pub fn set_layout_data(&mut self, layout: &ControlsLayoutData) {
        for &name in ControlName::all() {
            if let Some(data) = layout.get(name) {
                self.controls[name.index()].apply_layout(data, &mut self.effects);
            }
        }
    }

    pub fn control_layout(&self, name: ControlName) -> LayoutData {
        self.control(name).layout_data()
    }

    /// Partial update of a single control, e.g. while dragging it in editing mode
    pub fn set_control_layout(&mut self, name: ControlName, data: &LayoutData) {
        self.controls[name.index()].apply_layout(data, &mut self.effects);
    }

    /// Replace a control's measured footprint after its element changed size
    pub fn remeasure(&mut self, name: ControlName, metrics: ElementMetrics) {
        self.controls[name.index()].remeasure(metrics, &mut self.effects);
    }

    /// Apply the default layout for `viewport` with `stored` laid over it
    pub fn restore(&mut self, stored: &ControlsLayoutData, viewport: &Viewport) {
        self.set_layout_data(stored);
        let defaults = self.default_layout(viewport);
        self.set_layout_data(&stored.merged_over(&defaults));
        tracing::debug!(
            "Restored layout for {}x{} viewport",
            viewport.width,
            viewport.height
        );
    }

    /// Synthesize a first-run layout for `viewport` from current measurements
    pub fn default_layout(&self, viewport: &Viewport) -> ControlsLayoutData {
        let margin = viewport.font_size;
        let width = viewport.width;
        let height = viewport.height;

        let aspect_ratio = viewport.aspect_ratio();
        let band = SHOULDER_BANDS
            .iter()
            .find(|(bound, _)| aspect_ratio < *bound)
            .map(|(_, fraction)| *fraction)
            .unwrap_or(SHOULDER_WIDE);
        let base_y = band * height;

        let a = self.control(ControlName::A);
        let b = self.control(ControlName::B);
        let x = self.control(ControlName::X);
        let y = self.control(ControlName::Y);

        let face_half_width =
            (a.half_width() + b.half_width() + x.half_width() + y.half_width()) / 4.0;
        let face_half_height =
            (a.half_height() + b.half_height() + x.half_height() + y.half_height()) / 4.0;

        let l = self.control(ControlName::L);
        let r = self.control(ControlName::R);
        let start = self.control(ControlName::Start);
        let select = self.control(ControlName::Select);
        let dpad = self.dpad();
        let pause = self.pause();

        let pause_interaction_radius = pause.half_width() * pause.interaction_scale();
        let center_x = 0.5 * width;

        let dpad_right = 2.0 * dpad.half_width() + 2.0 * margin;
        let face_buttons_left = width - (6.0 * face_half_width + 2.0 * margin);

        let start_x = center_x + pause_interaction_radius + start.half_width() + margin;
        let select_x = center_x - (pause_interaction_radius + select.half_width() + margin);

        let start_right = start_x + start.half_width();
        let select_left = select_x - select.half_width();

        // Stack the dpad and face buttons above Start/Select when a shared row would collide
        let base = if dpad_right >= select_left || face_buttons_left <= start_right {
            height - (2.0 * start.half_height().max(select.half_height()) + 2.0 * margin)
        } else {
            height - margin
        };

        let face = |x: f64, y: f64| {
            LayoutData::at(x, y).with_interaction_scale(self.face_button_interaction_scale)
        };

        let pause_half_height = if viewport.touch_layout {
            pause
                .half_height()
                .max((start.half_height() + select.half_height()) / 2.0)
        } else {
            pause.half_height()
        };

        let mut layout = ControlsLayoutData::default();
        layout.set(
            ControlName::Dpad,
            LayoutData::at(dpad.half_width() + margin, base - dpad.half_height()),
        );
        layout.set(
            ControlName::A,
            face(width - (face_half_width + margin), base - 3.0 * face_half_height),
        );
        layout.set(
            ControlName::B,
            face(width - (3.0 * face_half_width + margin), base - face_half_height),
        );
        layout.set(
            ControlName::X,
            face(width - (3.0 * face_half_width + margin), base - 5.0 * face_half_height),
        );
        layout.set(
            ControlName::Y,
            face(width - (5.0 * face_half_width + margin), base - 3.0 * face_half_height),
        );
        layout.set(
            ControlName::L,
            LayoutData::at(margin + l.half_width(), base_y + margin + l.half_height()),
        );
        layout.set(
            ControlName::R,
            LayoutData::at(width - (margin + r.half_width()), base_y + margin + r.half_height()),
        );
        layout.set(
            ControlName::Start,
            LayoutData::at(start_x, height - (start.half_height() + margin)),
        );
        layout.set(
            ControlName::Select,
            LayoutData::at(select_x, height - (select.half_height() + margin)),
        );
        layout.set(
            ControlName::Pause,
            LayoutData::at(center_x, height - (pause_half_height + margin)),
        );
        layout
    }

    pub fn editing(&self) -> bool {
        self.editing
    }

    /// Show or hide the editing outline on every state button
    pub fn set_editing(&mut self, editing: bool) {
        if editing == self.editing {
            return;
        }
        self.editing = editing;
        for name in ControlName::BUTTONS {
            self.controls[name.index()].set_editing(editing, &mut self.effects);
        }
        tracing::debug!("Touch control editing {}", if editing { "enabled" } else { "disabled" });
    }

    /// Drain the effects queued since the last call
    pub fn take_effects(&mut self) -> Vec<VisualEffect> {
        std::mem::take(&mut self.effects)
    }

    /// Hand every queued effect to `surface`, in order
    pub fn flush_effects<S: VisualSurface + ?Sized>(&mut self, surface: &mut S) {
        for effect in self.effects.drain(..) {
            surface.apply(&effect);
        }
    }
}
