use std::error::Error;
use std::fmt;

const DEFAULT_SCALE: f64 = 2.0;

// floor for repeated zoom-in; f64 pixel spacing has already collapsed well above this
pub const MIN_SCALE: f64 = 1e-13;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidScale { scale: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { scale } => {
                write!(f, "viewport scale must be positive and finite: {}", scale)
            }
        }
    }
}

impl Error for ViewportError {}

/// The visible window onto the complex plane: a zoom scale (width of the
/// visible region along the horizontal axis, in plane units) and the
/// plane-space centre. Mutated only by the interaction controller.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Viewport {
    pub fn new(scale: f64, offset_x: f64, offset_y: f64) -> Result<Self, ViewportError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ViewportError::InvalidScale { scale });
        }

        Ok(Self {
            scale,
            offset_x,
            offset_y,
        })
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// Moves the centre to the given plane coordinates.
    pub fn recentre(&mut self, offset_x: f64, offset_y: f64) {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
    }

    /// Multiplies the scale by `factor`, clamped so the `scale > 0`
    /// invariant survives arbitrary zoom-in streaks.
    pub fn zoom_by(&mut self, factor: f64) {
        self.scale = (self.scale * factor).max(MIN_SCALE);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}
