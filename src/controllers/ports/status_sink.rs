pub trait StatusSink {
    /// Human-readable diagnostic line, typically shown as the window
    /// title. Best effort; there is no failure path.
    fn set_status(&mut self, status: &str);
}

/// Sink for headless runs.
#[derive(Debug, Default)]
pub struct NullStatusSink;

impl StatusSink for NullStatusSink {
    fn set_status(&mut self, _status: &str) {}
}
