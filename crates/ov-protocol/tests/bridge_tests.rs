//! Tests for the UI/engine bridge across threads

use ov_protocol::{create_bridge, EmuToUi, InputBits, UiToEmu};
use std::thread;

#[test]
fn test_round_trip_across_threads() {
    let (ui, emu) = create_bridge();

    let engine = thread::spawn(move || {
        let mut frames = 0;
        while frames < 3 {
            for message in emu.drain() {
                if let UiToEmu::UpdateInput { pressed, .. } = message {
                    emu.send(EmuToUi::RenderFrame {
                        buffer: vec![pressed.bits(); 4],
                    });
                    frames += 1;
                }
            }
            thread::yield_now();
        }
        emu.send(EmuToUi::Stopped { buffer: Vec::new() });
    });

    for bit in [InputBits::A, InputBits::B, InputBits::X] {
        assert!(ui.send(UiToEmu::UpdateInput {
            pressed: bit,
            released: InputBits::empty(),
            touch_pos: None,
        }));
    }
    engine.join().unwrap();

    let received = ui.drain();
    assert_eq!(received.len(), 4);
    assert_eq!(
        received[0],
        EmuToUi::RenderFrame {
            buffer: vec![InputBits::A.bits(); 4]
        }
    );
    assert_eq!(received[3], EmuToUi::Stopped { buffer: Vec::new() });
}

#[test]
fn test_disconnect_from_engine_side() {
    let (ui, emu) = create_bridge();
    emu.disconnect();
    assert!(!ui.is_connected());
    assert!(!ui.send(UiToEmu::Reset));
    assert!(ui.try_recv().is_none());
}
