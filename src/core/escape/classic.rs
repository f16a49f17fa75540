use crate::core::data::complex::Complex;
use crate::core::escape::algorithm::EscapeAlgorithm;
use crate::core::escape::errors::EscapeAlgorithmError;
use crate::core::escape::kinds::EscapeKinds;

/// Whole-number escape counting: the count is the index of the first
/// iteration whose orbit magnitude exceeds the escape radius, capped at
/// `max_iterations` for points that never escape.
#[derive(Debug)]
pub struct ClassicEscape {
    max_iterations: u32,
    escape_radius_squared: f64,
}

impl ClassicEscape {
    pub fn new(
        max_iterations: u32,
        escape_radius_squared: f64,
    ) -> Result<Self, EscapeAlgorithmError> {
        if max_iterations == 0 {
            return Err(EscapeAlgorithmError::ZeroMaxIterations);
        }

        if !escape_radius_squared.is_finite() || escape_radius_squared <= 0.0 {
            return Err(EscapeAlgorithmError::InvalidEscapeRadius {
                radius_squared: escape_radius_squared,
            });
        }

        Ok(Self {
            max_iterations,
            escape_radius_squared,
        })
    }
}

impl EscapeAlgorithm for ClassicEscape {
    fn compute(&self, c: Complex) -> f64 {
        let mut z = Complex::ZERO;

        for iteration in 0..self.max_iterations {
            if z.magnitude_squared() > self.escape_radius_squared {
                return f64::from(iteration);
            }
            z = z * z + c;
        }

        f64::from(self.max_iterations)
    }

    fn kind(&self) -> EscapeKinds {
        EscapeKinds::Classic
    }
}
