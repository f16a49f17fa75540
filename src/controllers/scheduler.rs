use crate::controllers::interaction::{EventResponse, InteractionController};
use crate::controllers::ports::event_source::{EventSource, InputEvent};
use crate::controllers::ports::frame_presenter::FramePresenter;
use crate::controllers::ports::status_sink::StatusSink;
use crate::core::actions::render_pass::ProgressiveRasterizer;
use crate::core::config::{EngineBuildError, EngineConfig};
use crate::core::data::engine_state::EngineState;
use crate::core::data::pixel_buffer::PixelBuffer;
use log::{debug, info};
use std::error::Error;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Rendered,
    Idle,
    Terminated,
}

/// Owns the whole engine: ports on the outside, state, controller,
/// rasterizer and buffer on the inside. Each tick drains input, then does
/// at most one render pass; a fully refined static view costs nothing per
/// tick. [`run`] wraps [`tick`] in wall-clock pacing.
///
/// [`run`]: FrameScheduler::run
/// [`tick`]: FrameScheduler::tick
pub struct FrameScheduler<E: EventSource, P: FramePresenter, S: StatusSink> {
    events: E,
    presenter: P,
    status: S,
    controller: InteractionController,
    rasterizer: ProgressiveRasterizer,
    state: EngineState,
    buffer: PixelBuffer,
    frame_budget: Duration,
}

impl<E: EventSource, P: FramePresenter, S: StatusSink> FrameScheduler<E, P, S> {
    pub fn from_config(
        config: &EngineConfig,
        events: E,
        presenter: P,
        status: S,
    ) -> Result<Self, EngineBuildError> {
        let surface = config.surface()?;
        let viewport = config.initial_viewport()?;
        let refinement = config.initial_refinement()?;

        Ok(Self {
            events,
            presenter,
            status,
            controller: InteractionController::new(surface),
            rasterizer: ProgressiveRasterizer::from_config(config, surface)?,
            state: EngineState::new(viewport, refinement),
            buffer: PixelBuffer::new(surface),
            frame_budget: config.frame_budget()?,
        })
    }

    /// One frame's worth of work: drain the event queue, then render and
    /// present a single refinement pass if anything is dirty. `Terminate`
    /// short-circuits the whole tick, leaving later queued events
    /// unconsumed.
    pub fn tick(&mut self) -> Result<TickOutcome, Box<dyn Error>> {
        while let Some(event) = self.events.poll_event() {
            if matches!(event, InputEvent::Terminate) {
                return Ok(TickOutcome::Terminated);
            }

            match self.controller.handle_event(&event, &mut self.state) {
                EventResponse::PointerStatus(status) => self.status.set_status(&status),
                EventResponse::ViewportChanged | EventResponse::Ignored => {}
            }
        }

        if !self.state.is_dirty() {
            return Ok(TickOutcome::Idle);
        }

        let level = self.state.refinement();
        let viewport = *self.state.viewport();
        let started = Instant::now();

        self.rasterizer.render_pass(&viewport, level, &mut self.buffer);
        self.presenter.present(&self.buffer)?;
        self.state.mark_pass_complete();

        debug!("render pass {:?} presented in {:?}", level, started.elapsed());

        Ok(TickOutcome::Rendered)
    }

    /// Ticks until terminated, sleeping off whatever remains of the frame
    /// budget after each tick. A tick that overruns its budget starts the
    /// next one immediately.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        info!(
            "engine running: {}x{} surface, {:?} frame budget",
            self.buffer.surface().width(),
            self.buffer.surface().height(),
            self.frame_budget
        );

        loop {
            let tick_started = Instant::now();

            if self.tick()? == TickOutcome::Terminated {
                info!("terminate received, leaving the frame loop");
                return Ok(());
            }

            thread::sleep(remaining_budget(self.frame_budget, tick_started.elapsed()));
        }
    }
}

/// What is left of `frame_budget` once a tick has taken `elapsed`; zero
/// when the tick overran.
fn remaining_budget(frame_budget: Duration, elapsed: Duration) -> Duration {
    frame_budget.saturating_sub(elapsed)
}
