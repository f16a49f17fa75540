use crate::core::data::complex::Complex;
use crate::core::escape::kinds::EscapeKinds;

/// Escape-time evaluation for one point of the plane. Total over any
/// finite `c`: a point that never leaves the escape radius yields the
/// iteration cap, never an error. Implementations return f64 so that
/// fractional (smoothed) counts fit through the same seam as whole ones.
pub trait EscapeAlgorithm {
    fn compute(&self, c: Complex) -> f64;

    fn kind(&self) -> EscapeKinds;
}
