//! Port definitions for the engine controllers.
//!
//! Contains trait definitions that decouple the scheduler from the
//! windowing and presentation layers behind it.

pub mod event_source;
pub mod frame_presenter;
pub mod status_sink;

pub use event_source::{EventSource, InputEvent, PointerButton};
pub use frame_presenter::FramePresenter;
pub use status_sink::{NullStatusSink, StatusSink};
