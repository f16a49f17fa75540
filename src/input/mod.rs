//! Input adapters for the engine.
//!
//! This module contains adapters that receive input from the platform
//! and translate it into engine input events.

#[cfg(feature = "gui")]
pub mod gui;
