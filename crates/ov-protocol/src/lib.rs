//! Protocol between the overlay UI and the emulation engine
//!
//! Defines the input-state bit encoding, both message directions and an
//! in-process bridge for hosts that run the engine on another thread.

pub mod bits;
pub mod bridge;
pub mod message;
pub mod save_type;

pub use bits::InputBits;
pub use bridge::{create_bridge, EmuEndpoint, MessageSink, UiEndpoint};
pub use message::{EmuToUi, EmuToUiKind, HostHandle, UiToEmu, UiToEmuKind};
pub use save_type::SaveType;
