use crate::core::colour::kinds::ColourMapKinds;
use crate::core::data::packed_colour::PackedColour;

/// Turns an escape count into a packed colour. Pure and infallible: every
/// finite count (whole or fractional) maps to some colour.
pub trait ColourMap {
    fn map(&self, escape: f64) -> PackedColour;

    fn kind(&self) -> ColourMapKinds;
}
