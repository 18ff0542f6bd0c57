//! Tests for turning live touches into engine input updates

use ov_core::config::{Config, ElementsConfig};
use ov_input::{
    ControlName, ControlsLayoutData, ElementTable, InputPoller, ScreenRect, TouchArea,
    TouchControls, Viewport,
};
use ov_protocol::{create_bridge, InputBits, UiToEmu};

fn setup() -> (TouchControls, InputPoller) {
    let config = Config::default();
    let elements = ElementTable::from_config(&ElementsConfig::default());
    let mut controls =
        TouchControls::new(&elements, &ControlsLayoutData::default(), &config.layout).unwrap();
    controls.restore(&ControlsLayoutData::default(), &Viewport::from(&config.viewport));
    (controls, InputPoller::new(ScreenRect::from(&config.screen)))
}

fn position(controls: &TouchControls, name: ControlName) -> (f64, f64) {
    let control = controls.control(name);
    (control.x(), control.y())
}

fn update(pressed: InputBits, released: InputBits, touch_pos: Option<(u8, u8)>) -> Option<UiToEmu> {
    Some(UiToEmu::UpdateInput {
        pressed,
        released,
        touch_pos,
    })
}

#[test]
fn test_press_and_release() {
    let (mut controls, mut poller) = setup();
    let (ax, ay) = position(&controls, ControlName::A);

    assert_eq!(poller.touch_start(1, ax, ay, &controls), TouchArea::Controls);
    assert_eq!(
        poller.poll(&mut controls),
        update(InputBits::A, InputBits::empty(), None)
    );
    assert!(controls.control(ControlName::A).pressed());

    // Unchanged state sends nothing
    assert_eq!(poller.poll(&mut controls), None);

    assert!(poller.touch_end(1).is_some());
    assert_eq!(
        poller.poll(&mut controls),
        update(InputBits::empty(), InputBits::A, None)
    );
    assert!(!controls.control(ControlName::A).pressed());
    assert_eq!(poller.state(), InputBits::empty());
}

#[test]
fn test_multi_touch_combines() {
    let (mut controls, mut poller) = setup();
    let (bx, by) = position(&controls, ControlName::B);
    let (sx, sy) = position(&controls, ControlName::Start);

    poller.touch_start(1, bx, by, &controls);
    poller.poll(&mut controls);
    poller.touch_start(2, sx, sy, &controls);

    assert_eq!(
        poller.poll(&mut controls),
        update(InputBits::START, InputBits::empty(), None)
    );
    assert_eq!(poller.state(), InputBits::B | InputBits::START);
}

#[test]
fn test_area_is_kept_while_moving() {
    let (mut controls, mut poller) = setup();
    let (ax, ay) = position(&controls, ControlName::A);

    poller.touch_start(7, ax, ay, &controls);
    poller.poll(&mut controls);

    // Dragging onto the bottom screen neither moves the touch there nor keeps A down
    assert!(poller.touch_move(7, 422.0, 291.0));
    assert_eq!(
        poller.poll(&mut controls),
        update(InputBits::empty(), InputBits::A, None)
    );
    assert!(poller.touches().all(|touch| touch.area == TouchArea::Controls));
    assert!(!poller.touch_move(8, 0.0, 0.0));
}

#[test]
fn test_bottom_screen_touch_position() {
    let (mut controls, mut poller) = setup();

    assert_eq!(poller.touch_start(3, 422.0, 291.0, &controls), TouchArea::BottomScreen);
    assert_eq!(
        poller.poll(&mut controls),
        update(InputBits::empty(), InputBits::empty(), Some((128, 96)))
    );

    poller.touch_move(3, 900.0, 10.0);
    assert_eq!(
        poller.poll(&mut controls),
        update(InputBits::empty(), InputBits::empty(), Some((255, 0)))
    );

    poller.touch_end(3);
    assert_eq!(
        poller.poll(&mut controls),
        update(InputBits::empty(), InputBits::empty(), None)
    );
}

#[test]
fn test_touch_outside_everything() {
    let (controls, mut poller) = setup();
    assert_eq!(poller.touch_start(1, 200.0, 20.0, &controls), TouchArea::None);
}

#[test]
fn test_editing_suppresses_input() {
    let (mut controls, mut poller) = setup();
    let (ax, ay) = position(&controls, ControlName::A);
    controls.set_editing(true);

    poller.touch_start(1, ax, ay, &controls);
    assert_eq!(poller.poll(&mut controls), None);
    assert!(!controls.control(ControlName::A).pressed());
}

#[test]
fn test_poll_into_bridge() {
    let (mut controls, mut poller) = setup();
    let (ui, emu) = create_bridge();
    let (dx, dy) = position(&controls, ControlName::Dpad);

    poller.touch_start(1, dx, dy - 40.0, &controls);
    assert!(poller.poll_into(&mut controls, &ui));
    assert!(!poller.poll_into(&mut controls, &ui));

    let received = emu.drain();
    assert_eq!(received, vec![update(InputBits::UP, InputBits::empty(), None).unwrap()]);
    assert_eq!(controls.dpad_pressed(), InputBits::UP);
}

#[test]
fn test_screen_rect_follows_resize() {
    let (mut controls, mut poller) = setup();
    poller.set_screen(ScreenRect {
        left: 294.0,
        top: 195.0,
        width: 512.0,
        height: 384.0,
    });

    assert_eq!(poller.touch_start(1, 422.0, 291.0, &controls), TouchArea::BottomScreen);
    assert_eq!(
        poller.poll(&mut controls),
        update(InputBits::empty(), InputBits::empty(), Some((64, 48)))
    );
}
