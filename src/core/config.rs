use crate::core::colour::kinds::ColourMapKinds;
use crate::core::data::refinement::{RefinementError, RefinementLevel};
use crate::core::data::surface::{SurfaceSize, SurfaceSizeError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::escape::errors::EscapeAlgorithmError;
use crate::core::escape::kinds::EscapeKinds;
use std::error::Error;
use std::fmt;
use std::time::Duration;

const DEFAULT_SURFACE_WIDTH: u32 = 640;
const DEFAULT_SURFACE_HEIGHT: u32 = 480;
const DEFAULT_TARGET_FRAME_RATE: u32 = 30;
const DEFAULT_INITIAL_SCALE: f64 = 2.0;
const DEFAULT_INITIAL_RESOLUTION: u32 = 16;
const DEFAULT_MAX_ITERATIONS: u32 = 256;
const DEFAULT_ESCAPE_RADIUS_SQUARED: f64 = 4.0;

#[derive(Debug)]
pub enum EngineBuildError {
    ZeroTargetFrameRate,
    Surface(SurfaceSizeError),
    Viewport(ViewportError),
    Refinement(RefinementError),
    Escape(EscapeAlgorithmError),
}

impl fmt::Display for EngineBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTargetFrameRate => {
                write!(f, "target frame rate must be greater than zero")
            }
            Self::Surface(err) => write!(f, "surface error: {}", err),
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
            Self::Refinement(err) => write!(f, "refinement error: {}", err),
            Self::Escape(err) => write!(f, "escape algorithm error: {}", err),
        }
    }
}

impl Error for EngineBuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroTargetFrameRate => None,
            Self::Surface(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::Refinement(err) => Some(err),
            Self::Escape(err) => Some(err),
        }
    }
}

impl From<SurfaceSizeError> for EngineBuildError {
    fn from(err: SurfaceSizeError) -> Self {
        Self::Surface(err)
    }
}

impl From<ViewportError> for EngineBuildError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<RefinementError> for EngineBuildError {
    fn from(err: RefinementError) -> Self {
        Self::Refinement(err)
    }
}

impl From<EscapeAlgorithmError> for EngineBuildError {
    fn from(err: EscapeAlgorithmError) -> Self {
        Self::Escape(err)
    }
}

/// Everything the engine is parameterised on, with the classic 640x480
/// 30 fps defaults. Plain data; the builder methods validate on the way
/// into the domain types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub surface_width: u32,
    pub surface_height: u32,
    pub target_frame_rate: u32,
    pub initial_scale: f64,
    pub initial_resolution: u32,
    pub max_iterations: u32,
    pub escape_radius_squared: f64,
    pub escape_kind: EscapeKinds,
    pub colour_map_kind: ColourMapKinds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            surface_width: DEFAULT_SURFACE_WIDTH,
            surface_height: DEFAULT_SURFACE_HEIGHT,
            target_frame_rate: DEFAULT_TARGET_FRAME_RATE,
            initial_scale: DEFAULT_INITIAL_SCALE,
            initial_resolution: DEFAULT_INITIAL_RESOLUTION,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius_squared: DEFAULT_ESCAPE_RADIUS_SQUARED,
            escape_kind: EscapeKinds::default(),
            colour_map_kind: ColourMapKinds::default(),
        }
    }
}

impl EngineConfig {
    pub fn surface(&self) -> Result<SurfaceSize, SurfaceSizeError> {
        SurfaceSize::new(self.surface_width, self.surface_height)
    }

    pub fn initial_viewport(&self) -> Result<Viewport, ViewportError> {
        Viewport::new(self.initial_scale, 0.0, 0.0)
    }

    pub fn initial_refinement(&self) -> Result<RefinementLevel, RefinementError> {
        RefinementLevel::starting_at(self.initial_resolution)
    }

    /// Per-tick time budget, in whole milliseconds.
    pub fn frame_budget(&self) -> Result<Duration, EngineBuildError> {
        if self.target_frame_rate == 0 {
            return Err(EngineBuildError::ZeroTargetFrameRate);
        }

        Ok(Duration::from_millis(u64::from(
            1000 / self.target_frame_rate,
        )))
    }
}
