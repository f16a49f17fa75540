use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SurfaceSizeError {
    ZeroDimension { width: u32, height: u32 },
}

impl fmt::Display for SurfaceSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "surface dimensions must be non-zero: {}x{}", width, height)
            }
        }
    }
}

impl Error for SurfaceSizeError {}

/// Fixed dimensions of the drawable surface, in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SurfaceSize {
    width: u32,
    height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceSizeError> {
        if width == 0 || height == 0 {
            return Err(SurfaceSizeError::ZeroDimension { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    // height/width, so a non-square surface maps an undistorted plane region
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.height) / f64::from(self.width)
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
