//! Tests for default layout synthesis, restore and dpad resolution

use ov_core::config::{ElementsConfig, HitShape, LayoutConfig};
use ov_input::{
    ControlName, ControlsLayoutData, ElementMetrics, ElementTable, LayoutData, Touch, TouchArea,
    TouchControls, Viewport,
};
use ov_protocol::InputBits;

fn controls_with(elements: &ElementTable) -> TouchControls {
    TouchControls::new(elements, &ControlsLayoutData::default(), &LayoutConfig::default()).unwrap()
}

fn controls() -> TouchControls {
    controls_with(&ElementTable::from_config(&ElementsConfig::default()))
}

/// Unscaled bounding box of a control at its current position, grown by `margin`
fn bounds(controls: &TouchControls, name: ControlName, margin: f64) -> (f64, f64, f64, f64) {
    let control = controls.control(name);
    (
        control.x() - (control.half_width() + margin),
        control.y() - (control.half_height() + margin),
        control.x() + control.half_width() + margin,
        control.y() + control.half_height() + margin,
    )
}

fn overlaps(a: (f64, f64, f64, f64), b: (f64, f64, f64, f64)) -> bool {
    a.0 < b.2 && b.0 < a.2 && a.1 < b.3 && b.1 < a.3
}

#[test]
fn test_default_layout_avoids_start_select() {
    let viewports = [
        (1024.0, 768.0),
        (640.0, 480.0),
        (400.0, 300.0),
        (844.0, 390.0),
        (1920.0, 1080.0),
        (2400.0, 1080.0),
        (2600.0, 1200.0),
    ];
    let cluster = [
        ControlName::Dpad,
        ControlName::A,
        ControlName::B,
        ControlName::X,
        ControlName::Y,
    ];

    for (width, height) in viewports {
        for font_size in [12.0, 16.0, 20.0, 24.0] {
            for touch_layout in [false, true] {
                let mut controls = controls();
                let viewport = Viewport {
                    touch_layout,
                    ..Viewport::new(width, height, font_size)
                };
                let layout = controls.default_layout(&viewport);
                controls.set_layout_data(&layout);

                for name in cluster {
                    for other in [ControlName::Start, ControlName::Select] {
                        assert!(
                            !overlaps(
                                bounds(&controls, name, font_size),
                                bounds(&controls, other, 0.0)
                            ),
                            "{} overlaps {} in {}x{} at font size {}",
                            name,
                            other,
                            width,
                            height,
                            font_size
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_default_layout_is_complete() {
    let controls = controls();
    let layout = controls.default_layout(&Viewport::new(844.0, 390.0, 16.0));

    for &name in ControlName::all() {
        let entry = layout.get(name).unwrap();
        assert!(entry.x.is_some() && entry.y.is_some(), "{} has no position", name);
        assert!(entry.scale.is_none());
    }
    for name in [ControlName::A, ControlName::B, ControlName::X, ControlName::Y] {
        assert_eq!(layout.get(name).unwrap().interaction_scale, Some(1.75));
    }
    assert_eq!(layout.dpad.unwrap().interaction_scale, None);
}

#[test]
fn test_shoulder_band_follows_aspect_ratio() {
    let controls = controls();
    let l_y = |width: f64, height: f64| {
        controls
            .default_layout(&Viewport::new(width, height, 16.0))
            .l
            .unwrap()
            .y
            .unwrap()
    };

    // 16 margin + 18 half height on top of the band
    assert_eq!(l_y(600.0, 600.0), 0.4 * 600.0 + 34.0);
    assert_eq!(l_y(640.0, 500.0), 0.3 * 500.0 + 34.0);
    assert_eq!(l_y(1000.0, 500.0), 0.1 * 500.0 + 34.0);
}

#[test]
fn test_pause_sits_level_with_start_in_touch_layout() {
    let mut elements = ElementTable::from_config(&ElementsConfig::default());
    elements.insert(ControlName::Pause, ElementMetrics::new(20.0, 20.0, HitShape::Ellipse));
    let controls = controls_with(&elements);

    let plain = controls.default_layout(&Viewport::new(844.0, 390.0, 16.0));
    let touch = controls.default_layout(&Viewport {
        touch_layout: true,
        ..Viewport::new(844.0, 390.0, 16.0)
    });

    // Pause half height 10 against the Start/Select average of 14
    assert_eq!(plain.pause.unwrap().y, Some(390.0 - (10.0 + 16.0)));
    assert_eq!(touch.pause.unwrap().y, Some(390.0 - (14.0 + 16.0)));
    assert_eq!(plain.pause.unwrap().x, Some(422.0));
    assert_eq!(touch.pause.unwrap().x, Some(422.0));
}

#[test]
fn test_tall_pause_keeps_own_height_in_touch_layout() {
    let controls = controls();
    let touch = controls.default_layout(&Viewport {
        touch_layout: true,
        ..Viewport::new(844.0, 390.0, 16.0)
    });
    assert_eq!(touch.pause.unwrap().y, Some(390.0 - (18.0 + 16.0)));
}

#[test]
fn test_restore_merges_stored_over_defaults() {
    let mut controls = controls();
    let viewport = Viewport::new(1024.0, 768.0, 16.0);
    let defaults = controls.default_layout(&viewport);

    let stored =
        ControlsLayoutData::from_json(r#"{"a":{"scale":1.5},"select":{"x":12,"y":34}}"#).unwrap();
    controls.restore(&stored, &viewport);

    let a = controls.control(ControlName::A);
    assert_eq!(Some(a.x()), defaults.a.unwrap().x);
    assert_eq!(Some(a.y()), defaults.a.unwrap().y);
    assert_eq!(a.scale(), 1.5);
    assert_eq!(a.interaction_scale(), 1.75);

    let select = controls.control(ControlName::Select);
    assert_eq!((select.x(), select.y()), (12.0, 34.0));

    let dpad = controls.dpad();
    assert_eq!(Some(dpad.x()), defaults.dpad.unwrap().x);
    assert_eq!(dpad.interaction_scale(), 1.2);
}

#[test]
fn test_layout_json_round_trip() {
    let mut controls = controls();
    controls.restore(&ControlsLayoutData::default(), &Viewport::new(844.0, 390.0, 16.0));
    controls.set_control_layout(ControlName::R, &LayoutData::at(700.5, 80.25).with_scale(1.3));

    let json = controls.layout_data().to_json().unwrap();
    let mut other = self::controls();
    other.set_layout_data(&ControlsLayoutData::from_json(&json).unwrap());

    assert_eq!(other.layout_data(), controls.layout_data());
}

#[test]
fn test_dpad_directions() {
    let mut controls = controls();
    controls.set_control_layout(ControlName::Dpad, &LayoutData::at(300.0, 300.0));

    let mut resolve = |x: f64, y: f64| {
        controls.reset_touches();
        controls.process_touch(&Touch::new(TouchArea::Controls, x, y), InputBits::empty())
    };

    assert_eq!(resolve(300.0, 250.0), InputBits::UP);
    assert_eq!(resolve(300.0, 350.0), InputBits::DOWN);
    assert_eq!(resolve(250.0, 300.0), InputBits::LEFT);
    assert_eq!(resolve(340.0, 300.0), InputBits::RIGHT);
    assert_eq!(resolve(260.0, 260.0), InputBits::UP | InputBits::LEFT);
    assert_eq!(resolve(340.0, 340.0), InputBits::DOWN | InputBits::RIGHT);
    // Outside the 1.2x affordance
    assert_eq!(resolve(300.0, 380.0), InputBits::empty());
}
