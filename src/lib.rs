mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;
mod storage;

pub use controllers::ports::{
    EventSource, FramePresenter, InputEvent, NullStatusSink, PointerButton, StatusSink,
};
pub use controllers::{FrameScheduler, TickOutcome, render_snapshot};
pub use crate::core::actions::ProgressiveRasterizer;
pub use crate::core::colour::{ColourMap, ColourMapKinds, colour_map_factory};
pub use crate::core::config::{EngineBuildError, EngineConfig};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::packed_colour::PackedColour;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::refinement::{RefinementError, RefinementLevel};
pub use crate::core::data::surface::{SurfaceSize, SurfaceSizeError};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::escape::{
    EscapeAlgorithm, EscapeAlgorithmError, EscapeKinds, escape_algorithm_factory,
};

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
