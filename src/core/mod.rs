pub mod actions;
pub mod colour;
pub mod config;
pub mod data;
pub mod escape;
pub mod util;
