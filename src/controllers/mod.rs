//! Application layer: the frame loop, the pointer-driven interaction
//! rules, and the headless snapshot path.
//!
//! # Architecture
//!
//! The controllers follow the ports & adapters pattern:
//! - **Input**: an [`ports::EventSource`] drained once per tick
//! - **Output**: a [`ports::FramePresenter`] for finished passes and a
//!   [`ports::StatusSink`] for the pointer diagnostic line
//! - **Core**: domain actions and state from `core/`

pub mod interaction;
pub mod ports;
pub mod scheduler;
pub mod snapshot;

pub use interaction::{EventResponse, InteractionController};
pub use scheduler::{FrameScheduler, TickOutcome};
pub use snapshot::render_snapshot;
