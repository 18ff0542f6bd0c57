//! Cartridge save memory types

use ov_core::OverlayError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backup memory chip a ROM expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SaveType {
    None,
    #[serde(rename = "eeprom-4k")]
    Eeprom4k,
    #[serde(rename = "eeprom-fram-64k")]
    EepromFram64k,
    #[serde(rename = "eeprom-fram-512k")]
    EepromFram512k,
    #[serde(rename = "eeprom-fram-1m")]
    EepromFram1m,
    #[serde(rename = "flash-2m")]
    Flash2m,
    #[serde(rename = "flash-4m")]
    Flash4m,
    #[serde(rename = "flash-8m")]
    Flash8m,
    #[serde(rename = "nand-64m")]
    Nand64m,
    #[serde(rename = "nand-128m")]
    Nand128m,
    #[serde(rename = "nand-256m")]
    Nand256m,
}

impl SaveType {
    pub fn all() -> &'static [SaveType] {
        &[
            SaveType::None,
            SaveType::Eeprom4k,
            SaveType::EepromFram64k,
            SaveType::EepromFram512k,
            SaveType::EepromFram1m,
            SaveType::Flash2m,
            SaveType::Flash4m,
            SaveType::Flash8m,
            SaveType::Nand64m,
            SaveType::Nand128m,
            SaveType::Nand256m,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SaveType::None => "none",
            SaveType::Eeprom4k => "eeprom-4k",
            SaveType::EepromFram64k => "eeprom-fram-64k",
            SaveType::EepromFram512k => "eeprom-fram-512k",
            SaveType::EepromFram1m => "eeprom-fram-1m",
            SaveType::Flash2m => "flash-2m",
            SaveType::Flash4m => "flash-4m",
            SaveType::Flash8m => "flash-8m",
            SaveType::Nand64m => "nand-64m",
            SaveType::Nand128m => "nand-128m",
            SaveType::Nand256m => "nand-256m",
        }
    }
}

impl fmt::Display for SaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SaveType {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SaveType::all()
            .iter()
            .copied()
            .find(|save_type| save_type.name() == s)
            .ok_or_else(|| OverlayError::UnknownSaveType(s.to_string()))
    }
}
