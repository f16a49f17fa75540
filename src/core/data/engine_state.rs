use crate::core::data::refinement::RefinementLevel;
use crate::core::data::viewport::Viewport;

/// All mutable render state in one place: the current viewport, the rung
/// of the refinement ladder the next pass will paint, and the scale of the
/// last pass actually rendered. The scheduler consults [`is_dirty`] once
/// per frame and renders only when it holds.
///
/// [`is_dirty`]: EngineState::is_dirty
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EngineState {
    viewport: Viewport,
    refinement: RefinementLevel,
    initial_refinement: RefinementLevel,
    last_rendered_scale: Option<f64>,
}

impl EngineState {
    #[must_use]
    pub fn new(viewport: Viewport, initial_refinement: RefinementLevel) -> Self {
        Self {
            viewport,
            refinement: initial_refinement,
            initial_refinement,
            last_rendered_scale: None,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    #[must_use]
    pub fn refinement(&self) -> RefinementLevel {
        self.refinement
    }

    /// A render is due when the ladder has rungs left or the viewport
    /// scale moved since the last pass. Fresh state is always dirty.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.refinement.is_complete() || self.last_rendered_scale != Some(self.viewport.scale())
    }

    /// Records that a pass at the current rung finished, then steps the
    /// ladder. Once the ladder completes, the recorded scale keeps
    /// [`is_dirty`] false until the viewport changes.
    ///
    /// [`is_dirty`]: EngineState::is_dirty
    pub fn mark_pass_complete(&mut self) {
        self.last_rendered_scale = Some(self.viewport.scale());
        self.refinement = self.refinement.refined();
    }

    /// Rewinds the ladder to its coarsest rung. Called after every
    /// viewport change so the new region sketches in fast first.
    pub fn restart_refinement(&mut self) {
        self.refinement = self.initial_refinement;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_state() -> EngineState {
        EngineState::new(Viewport::default(), RefinementLevel::starting_at(16).unwrap())
    }

    #[test]
    fn test_fresh_state_is_dirty() {
        assert!(create_state().is_dirty());
    }

    #[test]
    fn test_stays_dirty_until_ladder_completes() {
        let mut state = create_state();

        for _ in 0..5 {
            assert!(state.is_dirty());
            state.mark_pass_complete();
        }

        assert!(!state.is_dirty());
        assert!(state.refinement().is_complete());
    }

    #[test]
    fn test_scale_change_makes_complete_state_dirty() {
        let mut state = create_state();

        while state.is_dirty() {
            state.mark_pass_complete();
        }

        state.viewport_mut().zoom_by(0.5);

        assert!(state.is_dirty());
    }

    #[test]
    fn test_recentre_alone_leaves_complete_state_clean() {
        let mut state = create_state();

        while state.is_dirty() {
            state.mark_pass_complete();
        }

        state.viewport_mut().recentre(-0.5, 0.25);

        assert!(!state.is_dirty());
    }

    #[test]
    fn test_restart_refinement_rewinds_ladder() {
        let mut state = create_state();

        state.mark_pass_complete();
        state.mark_pass_complete();
        assert_eq!(state.refinement(), RefinementLevel::Block(4));

        state.restart_refinement();

        assert_eq!(state.refinement(), RefinementLevel::Block(16));
        assert!(state.is_dirty());
    }

    #[test]
    fn test_mark_pass_complete_steps_ladder() {
        let mut state = create_state();

        state.mark_pass_complete();

        assert_eq!(state.refinement(), RefinementLevel::Block(8));
    }
}
