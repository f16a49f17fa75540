use crate::core::data::packed_colour::PackedColour;
use crate::core::data::surface::SurfaceSize;

/// Owned framebuffer sized once from a [`SurfaceSize`], row-major, one
/// [`PackedColour`] per pixel. Writes land through [`fill_block`], which
/// clips to the surface so refinement passes never index past the edge.
///
/// [`fill_block`]: PixelBuffer::fill_block
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    surface: SurfaceSize,
    pixels: Vec<PackedColour>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            surface,
            pixels: vec![PackedColour::default(); surface.pixel_count()],
        }
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Paints the square block whose top-left corner is `(x, y)` and whose
    /// edge is `edge` pixels, clipped to the surface bounds. A block that
    /// starts outside the surface paints nothing.
    pub fn fill_block(&mut self, x: u32, y: u32, edge: u32, colour: PackedColour) {
        if x >= self.surface.width() || y >= self.surface.height() {
            return;
        }

        let right = x.saturating_add(edge).min(self.surface.width());
        let bottom = y.saturating_add(edge).min(self.surface.height());

        for row in y..bottom {
            let start = (row * self.surface.width() + x) as usize;
            let end = (row * self.surface.width() + right) as usize;
            self.pixels[start..end].fill(colour);
        }
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<PackedColour> {
        if x >= self.surface.width() || y >= self.surface.height() {
            return None;
        }

        Some(self.pixels[(y * self.surface.width() + x) as usize])
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PackedColour] {
        &self.pixels
    }
}
