//! GUI input adapter for interactive exploration.
//!
//! This module provides a windowed interface using winit for window
//! management and pixels for framebuffer rendering.

mod event_source;
mod run;

pub use run::run_gui;
