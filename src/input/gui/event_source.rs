use std::collections::VecDeque;
use std::time::Duration;

use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::WindowId;

use crate::controllers::ports::{EventSource, InputEvent, PointerButton};

/// Translates winit window events into engine input events.
///
/// The event loop is pumped with a zero timeout, so polling never blocks:
/// each poll drains whatever the platform has queued and hands the events
/// over one at a time. Button events carry the most recent cursor position,
/// which winit reports separately.
pub struct WinitEventSource {
    event_loop: EventLoop<()>,
    window_id: WindowId,
    queue: VecDeque<InputEvent>,
    cursor: (f64, f64),
}

impl WinitEventSource {
    #[must_use]
    pub fn new(event_loop: EventLoop<()>, window_id: WindowId) -> Self {
        Self {
            event_loop,
            window_id,
            queue: VecDeque::new(),
            cursor: (0.0, 0.0),
        }
    }

    fn pump(&mut self) {
        let queue = &mut self.queue;
        let cursor = &mut self.cursor;
        let window_id = self.window_id;

        let status = self
            .event_loop
            .pump_events(Some(Duration::ZERO), |event, _| {
                let Event::WindowEvent {
                    window_id: id,
                    event,
                } = event
                else {
                    return;
                };
                if id != window_id {
                    return;
                }

                match event {
                    WindowEvent::CloseRequested => queue.push_back(InputEvent::Terminate),
                    WindowEvent::CursorMoved { position, .. } => {
                        *cursor = (position.x, position.y);
                        queue.push_back(InputEvent::PointerMove {
                            x: position.x,
                            y: position.y,
                        });
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        let Some(button) = translate_pointer_button(button) else {
                            return;
                        };
                        let (x, y) = *cursor;
                        queue.push_back(match state {
                            ElementState::Pressed => InputEvent::PointerDown { x, y, button },
                            ElementState::Released => InputEvent::PointerUp { x, y, button },
                        });
                    }
                    _ => {}
                }
            });

        if let PumpStatus::Exit(_) = status {
            queue.push_back(InputEvent::Terminate);
        }
    }
}

impl EventSource for WinitEventSource {
    fn poll_event(&mut self) -> Option<InputEvent> {
        if self.queue.is_empty() {
            self.pump();
        }

        self.queue.pop_front()
    }
}

fn translate_pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        _ => None,
    }
}
