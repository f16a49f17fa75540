use crate::controllers::ports::event_source::{InputEvent, PointerButton};
use crate::core::data::engine_state::EngineState;
use crate::core::data::surface::SurfaceSize;
use crate::core::util::screen_to_plane::{screen_to_plane_x, screen_to_plane_y};
use log::debug;

const ZOOM_IN_FACTOR: f64 = 0.5;
const ZOOM_OUT_FACTOR: f64 = 1.5;

/// What the scheduler should do with a handled event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResponse {
    ViewportChanged,
    PointerStatus(String),
    Ignored,
}

/// Translates pointer events into viewport mutations. Zooming is
/// release-driven: the point under the pointer becomes the new centre and
/// the scale halves (primary) or grows by half (secondary), after which
/// the refinement ladder rewinds so the new region sketches in coarse
/// first.
pub struct InteractionController {
    surface: SurfaceSize,
}

impl InteractionController {
    #[must_use]
    pub fn new(surface: SurfaceSize) -> Self {
        Self { surface }
    }

    pub fn handle_event(&self, event: &InputEvent, state: &mut EngineState) -> EventResponse {
        match *event {
            InputEvent::PointerUp { x, y, button } => {
                // plane coordinates come from the viewport as the user saw
                // it, before any mutation below
                let viewport = *state.viewport();
                let plane_x = screen_to_plane_x(x, self.surface, &viewport);
                let plane_y = screen_to_plane_y(y, self.surface, &viewport);

                let factor = match button {
                    PointerButton::Primary => ZOOM_IN_FACTOR,
                    PointerButton::Secondary => ZOOM_OUT_FACTOR,
                };

                state.viewport_mut().recentre(plane_x, plane_y);
                state.viewport_mut().zoom_by(factor);
                state.restart_refinement();

                debug!(
                    "viewport centred at ({}, {}), scale {}",
                    plane_x,
                    plane_y,
                    state.viewport().scale()
                );

                EventResponse::ViewportChanged
            }
            InputEvent::PointerMove { x, y } => {
                let viewport = state.viewport();

                EventResponse::PointerStatus(format!(
                    "offset x: {:.6}, offset y: {:.6}",
                    screen_to_plane_x(x, self.surface, viewport),
                    screen_to_plane_y(y, self.surface, viewport),
                ))
            }
            InputEvent::PointerDown { .. } | InputEvent::Terminate => EventResponse::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::refinement::RefinementLevel;
    use crate::core::data::viewport::Viewport;

    fn create_controller() -> InteractionController {
        InteractionController::new(SurfaceSize::new(640, 480).unwrap())
    }

    fn create_state() -> EngineState {
        EngineState::new(Viewport::default(), RefinementLevel::starting_at(16).unwrap())
    }

    fn pointer_up(x: f64, y: f64, button: PointerButton) -> InputEvent {
        InputEvent::PointerUp { x, y, button }
    }

    #[test]
    fn primary_release_at_centre_keeps_offsets_and_halves_scale() {
        let controller = create_controller();
        let mut state = create_state();

        let response = controller.handle_event(
            &pointer_up(320.0, 240.0, PointerButton::Primary),
            &mut state,
        );

        assert_eq!(response, EventResponse::ViewportChanged);
        assert_eq!(state.viewport().offset_x(), 0.0);
        assert_eq!(state.viewport().offset_y(), 0.0);
        assert_eq!(state.viewport().scale(), 1.0);
    }

    #[test]
    fn primary_release_recentres_under_the_pointer() {
        let controller = create_controller();
        let mut state = create_state();

        controller.handle_event(
            &pointer_up(160.0, 120.0, PointerButton::Primary),
            &mut state,
        );

        assert_eq!(state.viewport().offset_x(), -0.5);
        assert_eq!(state.viewport().offset_y(), 0.375);
        assert_eq!(state.viewport().scale(), 1.0);
    }

    #[test]
    fn secondary_release_zooms_out() {
        let controller = create_controller();
        let mut state = create_state();

        let response = controller.handle_event(
            &pointer_up(320.0, 240.0, PointerButton::Secondary),
            &mut state,
        );

        assert_eq!(response, EventResponse::ViewportChanged);
        assert_eq!(state.viewport().scale(), 3.0);
    }

    #[test]
    fn recentre_uses_the_viewport_before_the_zoom() {
        let controller = create_controller();
        let mut state = create_state();

        controller.handle_event(
            &pointer_up(160.0, 120.0, PointerButton::Primary),
            &mut state,
        );
        controller.handle_event(
            &pointer_up(160.0, 120.0, PointerButton::Primary),
            &mut state,
        );

        // second click mapped through the scale-1.0 viewport centred at
        // (-0.5, 0.375), not through the post-zoom one
        assert_eq!(state.viewport().offset_x(), -0.75);
        assert_eq!(state.viewport().offset_y(), 0.5625);
        assert_eq!(state.viewport().scale(), 0.5);
    }

    #[test]
    fn every_release_restarts_the_refinement_ladder() {
        let controller = create_controller();
        let mut state = create_state();

        while state.is_dirty() {
            state.mark_pass_complete();
        }

        controller.handle_event(
            &pointer_up(320.0, 240.0, PointerButton::Secondary),
            &mut state,
        );

        assert_eq!(state.refinement(), RefinementLevel::Block(16));
        assert!(state.is_dirty());
    }

    #[test]
    fn pointer_move_reports_plane_coordinates() {
        let controller = create_controller();
        let mut state = create_state();

        let response =
            controller.handle_event(&InputEvent::PointerMove { x: 320.0, y: 240.0 }, &mut state);

        assert_eq!(
            response,
            EventResponse::PointerStatus("offset x: 0.000000, offset y: 0.000000".to_owned())
        );
    }

    #[test]
    fn pointer_move_does_not_mutate_state() {
        let controller = create_controller();
        let mut state = create_state();
        let before = state;

        controller.handle_event(&InputEvent::PointerMove { x: 12.0, y: 34.0 }, &mut state);

        assert_eq!(state, before);
    }

    #[test]
    fn pointer_down_is_ignored() {
        let controller = create_controller();
        let mut state = create_state();
        let before = state;

        let response = controller.handle_event(
            &InputEvent::PointerDown {
                x: 10.0,
                y: 10.0,
                button: PointerButton::Primary,
            },
            &mut state,
        );

        assert_eq!(response, EventResponse::Ignored);
        assert_eq!(state, before);
    }

    #[test]
    fn terminate_is_not_the_controllers_business() {
        let controller = create_controller();
        let mut state = create_state();

        let response = controller.handle_event(&InputEvent::Terminate, &mut state);

        assert_eq!(response, EventResponse::Ignored);
    }
}
