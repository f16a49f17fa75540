use crate::core::data::complex::Complex;
use crate::core::escape::algorithm::EscapeAlgorithm;
use crate::core::escape::errors::EscapeAlgorithmError;
use crate::core::escape::kinds::EscapeKinds;
use std::f64::consts::LN_2;

// the log-log correction assumes the orbit is far outside the set when it
// is applied, so this bailout is fixed rather than configurable
const ESCAPE_RADIUS_SQUARED: f64 = 65536.0;

/// Escape counting with a logarithmic correction term that turns the
/// integer count into a continuous value, trading a larger bailout radius
/// for band-free gradients.
#[derive(Debug)]
pub struct SmoothEscape {
    max_iterations: u32,
}

impl SmoothEscape {
    pub fn new(max_iterations: u32) -> Result<Self, EscapeAlgorithmError> {
        if max_iterations == 0 {
            return Err(EscapeAlgorithmError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}

impl EscapeAlgorithm for SmoothEscape {
    fn compute(&self, c: Complex) -> f64 {
        let mut z = Complex::ZERO;

        for iteration in 0..self.max_iterations {
            let magnitude_squared = z.magnitude_squared();

            if magnitude_squared > ESCAPE_RADIUS_SQUARED {
                let log_magnitude = magnitude_squared.ln() / 2.0;
                let correction = (log_magnitude / LN_2).ln() / LN_2;

                return f64::from(iteration) + 1.0 - correction;
            }

            z = z * z + c;
        }

        f64::from(self.max_iterations)
    }

    fn kind(&self) -> EscapeKinds {
        EscapeKinds::Smooth
    }
}
