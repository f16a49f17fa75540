use std::error::Error;

use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::controllers::ports::FramePresenter;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::surface::SurfaceSize;

/// Presents rendered frames through a wgpu-backed `pixels` framebuffer.
///
/// The render surface never resizes, so the framebuffer is allocated once
/// at construction and reused for every frame.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, surface: SurfaceSize) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(surface.width(), surface.height(), surface_texture)?;

        Ok(Self { pixels })
    }
}

impl FramePresenter for PixelsPresenter {
    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), Box<dyn Error>> {
        copy_pixel_buffer_into_pixels_frame(buffer, self.pixels.frame_mut());
        self.pixels.render()?;

        Ok(())
    }
}

fn copy_pixel_buffer_into_pixels_frame(buffer: &PixelBuffer, frame: &mut [u8]) {
    let source = buffer.as_slice();
    let expected_rgba_len = source.len() * 4;

    assert_eq!(
        frame.len(),
        expected_rgba_len,
        "pixels frame length {} does not match expected {} for {}x{}",
        frame.len(),
        expected_rgba_len,
        buffer.surface().width(),
        buffer.surface().height()
    );

    for (colour, frame_pixel) in source.iter().zip(frame.chunks_exact_mut(4)) {
        frame_pixel[0] = colour.red();
        frame_pixel[1] = colour.green();
        frame_pixel[2] = colour.blue();
        frame_pixel[3] = 255;
    }
}
