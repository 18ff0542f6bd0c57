//! ds-overlay - touch controls for a DS emulator front-end
//!
//! Headless entry point: builds the controls from the configured element
//! footprints, restores a stored layout (if one is given) over the default
//! layout for the configured viewport and prints the result.

use anyhow::Context;
use ov_core::Config;
use ov_input::{ControlsLayoutData, ElementTable, TouchControls, Viewport};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;
    ov_core::logging::init(config.debug.log_level);

    tracing::info!("Starting ds-overlay");

    let stored = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading layout {}", path.display()))?;
            tracing::info!("Restoring layout from {}", path.display());
            ControlsLayoutData::from_json(&json)?
        }
        None => ControlsLayoutData::default(),
    };

    let elements = ElementTable::from_config(&config.elements);
    let mut controls = TouchControls::new(&elements, &stored, &config.layout)?;
    controls.restore(&stored, &Viewport::from(&config.viewport));

    let effects = controls.take_effects();
    tracing::debug!("{} visual effects pending after restore", effects.len());

    println!("{}", serde_json::to_string_pretty(&controls.layout_data())?);
    Ok(())
}
