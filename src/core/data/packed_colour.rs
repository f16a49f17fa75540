/// A colour packed as `0xAARRGGBB`, the in-memory layout of every pixel in
/// a [`crate::core::data::pixel_buffer::PixelBuffer`].
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PackedColour(u32);

impl PackedColour {
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn from_argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(
            (alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32,
        )
    }

    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[must_use]
    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_argb_packs_channels() {
        let colour = PackedColour::from_argb(0x12, 0x34, 0x56, 0x78);

        assert_eq!(colour.bits(), 0x1234_5678);
    }

    #[test]
    fn test_channel_accessors() {
        let colour = PackedColour::from_bits(0xFF00_C800);

        assert_eq!(colour.alpha(), 0xFF);
        assert_eq!(colour.red(), 0x00);
        assert_eq!(colour.green(), 0xC8);
        assert_eq!(colour.blue(), 0x00);
    }

    #[test]
    fn test_default_is_transparent_black() {
        assert_eq!(PackedColour::default().bits(), 0);
    }
}
