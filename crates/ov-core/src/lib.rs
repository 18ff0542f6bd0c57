//! Core types for the ds-overlay touch controls
//!
//! This crate provides the error type, configuration and logging
//! infrastructure shared by the protocol and input crates.

pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::{OverlayError, Result};
