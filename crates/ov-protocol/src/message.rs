//! Messages exchanged between the UI and the emulation engine
//!
//! Both directions are tagged unions discriminated by a `type` field. Each
//! variant also has a numeric kind, numbered in declaration order, for
//! transports that tag messages with integers.

use crate::bits::InputBits;
use crate::save_type::SaveType;
use serde::{Deserialize, Serialize};

/// Opaque handle to a host object (compiled module, shared memory)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostHandle(pub u64);

/// Messages sent from the UI to the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToEmu {
    Start {
        rom: Vec<u8>,
        bios7: Option<Vec<u8>>,
        bios9: Option<Vec<u8>>,
        firmware: Option<Vec<u8>>,
        #[serde(rename = "saveType")]
        save_type: Option<SaveType>,
        #[serde(rename = "hasIR")]
        has_ir: bool,
    },
    Reset,
    Stop,
    LoadSave {
        buffer: Vec<u8>,
    },
    ExportSave,
    UpdateInput {
        pressed: InputBits,
        released: InputBits,
        #[serde(rename = "touchPos", default, skip_serializing_if = "Option::is_none")]
        touch_pos: Option<(u8, u8)>,
    },
    UpdatePlaying {
        value: bool,
    },
    UpdateFramerateLimit {
        value: bool,
    },
}

/// Numeric kind of a [`UiToEmu`] message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UiToEmuKind {
    Start = 0,
    Reset = 1,
    Stop = 2,
    LoadSave = 3,
    ExportSave = 4,
    UpdateInput = 5,
    UpdatePlaying = 6,
    UpdateFramerateLimit = 7,
}

impl UiToEmu {
    pub fn kind(&self) -> UiToEmuKind {
        match self {
            UiToEmu::Start { .. } => UiToEmuKind::Start,
            UiToEmu::Reset => UiToEmuKind::Reset,
            UiToEmu::Stop => UiToEmuKind::Stop,
            UiToEmu::LoadSave { .. } => UiToEmuKind::LoadSave,
            UiToEmu::ExportSave => UiToEmuKind::ExportSave,
            UiToEmu::UpdateInput { .. } => UiToEmuKind::UpdateInput,
            UiToEmu::UpdatePlaying { .. } => UiToEmuKind::UpdatePlaying,
            UiToEmu::UpdateFramerateLimit { .. } => UiToEmuKind::UpdateFramerateLimit,
        }
    }
}

/// Messages sent from the engine back to the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EmuToUi {
    Loaded,
    StartRenderer {
        module: HostHandle,
        memory: HostHandle,
    },
    ExportSave {
        buffer: Vec<u8>,
        #[serde(rename = "triggerDownload")]
        trigger_download: bool,
    },
    RenderFrame {
        buffer: Vec<u32>,
    },
    Stopped {
        buffer: Vec<u8>,
    },
    PlayAudioChunk {
        l: Vec<f32>,
        r: Vec<f32>,
    },
}

/// Numeric kind of an [`EmuToUi`] message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EmuToUiKind {
    Loaded = 0,
    StartRenderer = 1,
    ExportSave = 2,
    RenderFrame = 3,
    Stopped = 4,
    PlayAudioChunk = 5,
}

impl EmuToUi {
    pub fn kind(&self) -> EmuToUiKind {
        match self {
            EmuToUi::Loaded => EmuToUiKind::Loaded,
            EmuToUi::StartRenderer { .. } => EmuToUiKind::StartRenderer,
            EmuToUi::ExportSave { .. } => EmuToUiKind::ExportSave,
            EmuToUi::RenderFrame { .. } => EmuToUiKind::RenderFrame,
            EmuToUi::Stopped { .. } => EmuToUiKind::Stopped,
            EmuToUi::PlayAudioChunk { .. } => EmuToUiKind::PlayAudioChunk,
        }
    }
}
