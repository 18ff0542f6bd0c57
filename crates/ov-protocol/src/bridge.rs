//! In-process message bridge between the UI and the engine
//!
//! Each side holds an endpoint that posts into the peer's queue and drains
//! its own. Sends are fire-and-forget: they only fail once either side has
//! disconnected.

use crate::message::{EmuToUi, UiToEmu};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Initial capacity of each direction's queue
pub const BRIDGE_QUEUE_CAPACITY: usize = 256;

/// Anything the UI can post engine-bound messages to
pub trait MessageSink {
    /// Post a message; returns false if it was dropped
    fn post(&self, message: UiToEmu) -> bool;
}

struct Shared {
    to_emu: Mutex<VecDeque<UiToEmu>>,
    to_ui: Mutex<VecDeque<EmuToUi>>,
    connected: AtomicBool,
}

/// The UI side of the bridge
#[derive(Clone)]
pub struct UiEndpoint {
    shared: Arc<Shared>,
}

/// The engine side of the bridge
#[derive(Clone)]
pub struct EmuEndpoint {
    shared: Arc<Shared>,
}

impl UiEndpoint {
    /// Send a message to the engine
    pub fn send(&self, message: UiToEmu) -> bool {
        if !self.shared.connected.load(Ordering::Acquire) {
            tracing::debug!("Dropping {:?} message, bridge disconnected", message.kind());
            return false;
        }

        self.shared.to_emu.lock().push_back(message);
        true
    }

    /// Try to receive a message from the engine (non-blocking)
    pub fn try_recv(&self) -> Option<EmuToUi> {
        self.shared.to_ui.lock().pop_front()
    }

    /// Drain all pending engine messages
    pub fn drain(&self) -> Vec<EmuToUi> {
        self.shared.to_ui.lock().drain(..).collect()
    }

    pub fn is_connected(&self) -> bool {
        self.shared.connected.load(Ordering::Acquire)
    }

    pub fn disconnect(&self) {
        self.shared.connected.store(false, Ordering::Release);
        tracing::info!("Engine bridge disconnected by UI");
    }
}

impl MessageSink for UiEndpoint {
    fn post(&self, message: UiToEmu) -> bool {
        self.send(message)
    }
}

impl EmuEndpoint {
    /// Send a message to the UI
    pub fn send(&self, message: EmuToUi) -> bool {
        if !self.shared.connected.load(Ordering::Acquire) {
            return false;
        }

        self.shared.to_ui.lock().push_back(message);
        true
    }

    /// Try to receive a message from the UI (non-blocking)
    pub fn try_recv(&self) -> Option<UiToEmu> {
        self.shared.to_emu.lock().pop_front()
    }

    /// Drain all pending UI messages
    pub fn drain(&self) -> Vec<UiToEmu> {
        self.shared.to_emu.lock().drain(..).collect()
    }

    /// Check if there are pending UI messages
    pub fn has_pending(&self) -> bool {
        !self.shared.to_emu.lock().is_empty()
    }

    pub fn disconnect(&self) {
        self.shared.connected.store(false, Ordering::Release);
        tracing::info!("Engine bridge disconnected by engine");
    }
}

/// Create a connected bridge pair (ui, engine)
pub fn create_bridge() -> (UiEndpoint, EmuEndpoint) {
    let shared = Arc::new(Shared {
        to_emu: Mutex::new(VecDeque::with_capacity(BRIDGE_QUEUE_CAPACITY)),
        to_ui: Mutex::new(VecDeque::with_capacity(BRIDGE_QUEUE_CAPACITY)),
        connected: AtomicBool::new(true),
    });

    (
        UiEndpoint {
            shared: Arc::clone(&shared),
        },
        EmuEndpoint { shared },
    )
}
