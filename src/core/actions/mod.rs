pub mod render_pass;

pub use render_pass::ProgressiveRasterizer;
