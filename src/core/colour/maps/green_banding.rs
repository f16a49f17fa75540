use crate::core::colour::kinds::ColourMapKinds;
use crate::core::colour::map::ColourMap;
use crate::core::data::packed_colour::PackedColour;

/// Truncated count shifted into the green byte. Counts at the iteration
/// cap overflow one bit into red, so set interiors read as near-black.
#[derive(Debug, Default)]
pub struct GreenBanding;

impl ColourMap for GreenBanding {
    fn map(&self, escape: f64) -> PackedColour {
        PackedColour::from_bits((escape as u32) << 8)
    }

    fn kind(&self) -> ColourMapKinds {
        ColourMapKinds::GreenBanding
    }
}
