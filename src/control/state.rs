use super::mode::ControlMode;
use crate::catalog::BodyId;

/// Control-mode selector: active mode, focus target and simulation speed.
///
/// All setters are last-write-wins. Mode and focus are independent: a focus
/// set during Autopilot is kept and takes effect once another mode is
/// selected.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    mode: ControlMode,
    focus: Option<BodyId>,
    simulation_speed: f32,
}

impl ControlState {
    /// Pointer mode, no focus, the given speed multiplier.
    #[must_use]
    pub fn new(simulation_speed: f32) -> Self {
        Self {
            mode: ControlMode::default(),
            focus: None,
            simulation_speed: simulation_speed.max(0.0),
        }
    }

    /// Active input modality.
    #[must_use]
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Switch modality. Returns the previous mode.
    pub fn set_mode(&mut self, mode: ControlMode) -> ControlMode {
        let previous = std::mem::replace(&mut self.mode, mode);
        if previous != mode {
            log::info!("Control mode: {previous} -> {mode}");
        }
        previous
    }

    /// Currently focused body, if any.
    #[must_use]
    pub fn focus(&self) -> Option<BodyId> {
        self.focus
    }

    /// Set or clear the focus target.
    pub fn set_focus(&mut self, focus: Option<BodyId>) {
        if self.focus != focus {
            match focus {
                Some(id) => log::info!("Focus: {id}"),
                None => log::info!("Focus cleared"),
            }
            self.focus = focus;
        }
    }

    /// Global speed multiplier for orbits and the autopilot.
    #[must_use]
    pub fn simulation_speed(&self) -> f32 {
        self.simulation_speed
    }

    /// Set the speed multiplier. Negative values are clamped to zero.
    pub fn set_simulation_speed(&mut self, speed: f32) {
        self.simulation_speed = speed.max(0.0);
        log::debug!("Simulation speed: {}", self.simulation_speed);
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_pointer_without_focus() {
        let state = ControlState::default();
        assert_eq!(state.mode(), ControlMode::Pointer);
        assert_eq!(state.focus(), None);
        assert_eq!(state.simulation_speed(), 1.0);
    }

    #[test]
    fn set_mode_returns_previous() {
        let mut state = ControlState::default();
        assert_eq!(state.set_mode(ControlMode::Hand), ControlMode::Pointer);
        assert_eq!(state.set_mode(ControlMode::Hand), ControlMode::Hand);
        assert_eq!(state.mode(), ControlMode::Hand);
    }

    #[test]
    fn focus_survives_mode_changes() {
        let mut state = ControlState::default();
        state.set_focus(Some(BodyId::Mars));
        let _ = state.set_mode(ControlMode::Autopilot);
        let _ = state.set_mode(ControlMode::Keyboard);
        assert_eq!(state.focus(), Some(BodyId::Mars));
        state.set_focus(None);
        assert_eq!(state.focus(), None);
    }

    #[test]
    fn negative_speed_is_clamped() {
        let mut state = ControlState::default();
        state.set_simulation_speed(-2.0);
        assert_eq!(state.simulation_speed(), 0.0);
        state.set_simulation_speed(3.5);
        assert_eq!(state.simulation_speed(), 3.5);
    }
}
