//! Output adapters that put rendered frames in front of the user.

pub mod pixels;
pub mod window_title;

pub use pixels::PixelsPresenter;
pub use window_title::WindowTitleSink;
