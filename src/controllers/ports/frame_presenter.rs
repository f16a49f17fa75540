use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;

pub trait FramePresenter {
    /// Pushes the whole buffer to the display surface. Called once per
    /// rendered pass, never for idle ticks.
    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), Box<dyn Error>>;
}
