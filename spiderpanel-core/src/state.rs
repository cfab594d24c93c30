//! The paused/running toggle.
//!
//! The panel mirrors one bit of server state into an indicator and the
//! enablement of the pause/resume controls. The state is only ever changed
//! through the two named transitions below, driven by status reports and by
//! successful pause/resume submissions.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PausedState {
    /// Initial state until the first status report says otherwise.
    #[default]
    Running,
    Paused,
}

/// What the current state means for the UI: exactly one of the two controls
/// is enabled at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseControls {
    pub pause_enabled: bool,
    pub resume_enabled: bool,
    pub indicator_visible: bool,
}

impl PausedState {
    /// Transition taken on a successful pause submission or a status report
    /// with `paused == true`.
    pub fn enter_paused(&mut self) {
        *self = PausedState::Paused;
    }

    /// Transition taken on a successful resume submission or a status report
    /// with `paused == false`.
    pub fn enter_running(&mut self) {
        *self = PausedState::Running;
    }

    /// Apply the `paused` field of a status report.
    pub fn apply_report(&mut self, paused: bool) {
        if paused {
            self.enter_paused();
        } else {
            self.enter_running();
        }
    }

    pub fn is_paused(&self) -> bool {
        *self == PausedState::Paused
    }

    pub fn controls(&self) -> PauseControls {
        match self {
            PausedState::Running => PauseControls {
                pause_enabled: true,
                resume_enabled: false,
                indicator_visible: false,
            },
            PausedState::Paused => PauseControls {
                pause_enabled: false,
                resume_enabled: true,
                indicator_visible: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running() {
        let state = PausedState::default();
        assert!(!state.is_paused());
        assert!(state.controls().pause_enabled);
    }

    #[test]
    fn report_drives_transitions() {
        let mut state = PausedState::default();

        state.apply_report(true);
        assert!(state.is_paused());

        state.apply_report(false);
        assert!(!state.is_paused());
    }

    #[test]
    fn named_transitions() {
        let mut state = PausedState::default();
        state.enter_paused();
        assert!(state.is_paused());

        // Re-entering the same state is a no-op, not an error.
        state.enter_paused();
        assert!(state.is_paused());

        state.enter_running();
        assert!(!state.is_paused());
    }

    #[test]
    fn controls_are_mutually_exclusive() {
        let mut state = PausedState::default();
        for paused in [true, false, false, true, true] {
            state.apply_report(paused);
            let controls = state.controls();
            assert_ne!(controls.pause_enabled, controls.resume_enabled);
            assert_eq!(controls.indicator_visible, state.is_paused());
        }
    }
}
