//! Touch controls for the ds-overlay front-end
//!
//! Lays out a dpad, the DS buttons and a Pause control over the display,
//! hit-tests touches against them and produces the input-state mask sent to
//! the engine. Nothing here touches a visual tree directly: every style change
//! is queued as a [`VisualEffect`] for the host to apply.

pub mod control;
pub mod controls;
pub mod dpad;
pub mod effects;
pub mod element;
pub mod layout;
pub mod poller;
pub mod touch;

pub use control::{Control, ControlGeometry, ControlKind};
pub use controls::TouchControls;
pub use effects::{Arrow, VisualCommand, VisualEffect, VisualSurface, VisualTarget};
pub use element::{ElementMetrics, ElementTable};
pub use layout::{ControlName, ControlsLayoutData, LayoutData, Viewport};
pub use poller::{InputPoller, ScreenRect};
pub use touch::{Touch, TouchArea};
