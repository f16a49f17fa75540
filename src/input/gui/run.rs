use std::error::Error;

use log::info;
use winit::dpi::PhysicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::controllers::FrameScheduler;
use crate::core::config::EngineConfig;
use crate::input::gui::event_source::WinitEventSource;
use crate::presenters::{PixelsPresenter, WindowTitleSink};

const WINDOW_TITLE: &str = "Mandelbrot";

/// Opens the render window and drives the frame loop until the user quits.
pub fn run_gui(config: &EngineConfig) -> Result<(), Box<dyn Error>> {
    let surface = config.surface()?;

    let event_loop = EventLoop::new()?;
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(surface.width(), surface.height()))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    info!(
        "opened {}x{} window for interactive exploration",
        surface.width(),
        surface.height()
    );

    let events = WinitEventSource::new(event_loop, window.id());
    let presenter = PixelsPresenter::new(window, surface)?;
    let status = WindowTitleSink::new(window);

    let mut scheduler = FrameScheduler::from_config(config, events, presenter, status)?;
    scheduler.run()
}
