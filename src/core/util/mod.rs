pub mod screen_to_plane;
