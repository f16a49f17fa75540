#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Everything the engine can receive from the outside world, already
/// translated out of any windowing library's vocabulary. Coordinates are
/// screen-space pixels on the render surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Terminate,
    PointerDown {
        x: f64,
        y: f64,
        button: PointerButton,
    },
    PointerUp {
        x: f64,
        y: f64,
        button: PointerButton,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
}

pub trait EventSource {
    /// Next queued event, or `None` once the queue is drained for this
    /// tick. Must not block.
    fn poll_event(&mut self) -> Option<InputEvent>;
}
