use winit::window::Window;

use crate::controllers::ports::StatusSink;

/// Publishes pointer status lines into the window title bar.
pub struct WindowTitleSink {
    window: &'static Window,
}

impl WindowTitleSink {
    #[must_use]
    pub fn new(window: &'static Window) -> Self {
        Self { window }
    }
}

impl StatusSink for WindowTitleSink {
    fn set_status(&mut self, status: &str) {
        self.window.set_title(status);
    }
}
