use crate::core::colour::kinds::ColourMapKinds;
use crate::core::colour::map::ColourMap;
use crate::core::data::packed_colour::PackedColour;

/// Scatters the low count bits across the three channels: bits 0-2 into
/// blue, 3-5 into green, 5-6 into red. Bit 5 feeds both green and red,
/// which gives the palette its warm cast at higher counts.
#[derive(Debug, Default)]
pub struct ChannelInterleave;

impl ColourMap for ChannelInterleave {
    fn map(&self, escape: f64) -> PackedColour {
        let count = escape as u32;

        PackedColour::from_bits((count & 0x7) | (count & 0x38) << 8 | (count & 0x60) << 16)
    }

    fn kind(&self) -> ColourMapKinds {
        ColourMapKinds::ChannelInterleave
    }
}
