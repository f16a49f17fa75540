pub mod complex;
pub mod engine_state;
pub mod packed_colour;
pub mod pixel_buffer;
pub mod refinement;
pub mod surface;
pub mod viewport;
