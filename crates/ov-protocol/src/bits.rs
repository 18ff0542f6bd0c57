//! Input-state bitmask shared with the emulation engine

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Pressed buttons and directions, in the engine's key-input layout
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InputBits: u32 {
        const A      = 1 << 0;
        const B      = 1 << 1;
        const SELECT = 1 << 2;
        const START  = 1 << 3;
        const RIGHT  = 1 << 4;
        const LEFT   = 1 << 5;
        const UP     = 1 << 6;
        const DOWN   = 1 << 7;
        const R      = 1 << 8;
        const L      = 1 << 9;
        const X      = 1 << 16;
        const Y      = 1 << 17;
        const DEBUG  = 1 << 19;
    }
}

impl InputBits {
    /// The four dpad directions
    pub const DIRECTIONS: Self = Self::RIGHT
        .union(Self::LEFT)
        .union(Self::UP)
        .union(Self::DOWN);

    /// Bits set in `self` but not in `previous`, and bits set in `previous` but not in `self`
    pub fn diff(self, previous: Self) -> (Self, Self) {
        (self.difference(previous), previous.difference(self))
    }
}

// Serialized as the raw mask so the wire format stays numeric.
impl Serialize for InputBits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for InputBits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(raw))
    }
}
