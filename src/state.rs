use thiserror::Error;

/// Represents the state of the toggle control
///
/// A new value is produced on every transition; existing values are never
/// mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleState {
    pub on: bool,
}

impl ToggleState {
    pub fn new(on: bool) -> Self {
        Self { on }
    }

    /// Returns the opposite state for toggling
    pub fn toggled(self) -> ToggleState {
        ToggleState { on: !self.on }
    }
}

/// A state-changing request handled by the transition function
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Flip the current state
    Toggle,
    /// Restore the carried state, decoupling the transition function from
    /// any external notion of "initial"
    Reset { initial_state: ToggleState },
    /// Hook point for caller-supplied transition functions; the built-in
    /// transition rejects these
    Custom(&'static str),
}

impl Action {
    /// Returns the action kind as a short identifier, mainly for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Toggle => "toggle",
            Action::Reset { .. } => "reset",
            Action::Custom(kind) => kind,
        }
    }
}

/// Error raised by the built-in transition function
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("unsupported action kind: {0}")]
    UnsupportedActionKind(&'static str),
}

/// The built-in pure transition function
///
/// Never mutates its input; calling it twice with the same inputs yields
/// equal outputs. Unrecognized action kinds are a caller defect and
/// propagate as [`TransitionError::UnsupportedActionKind`].
pub fn transition(state: ToggleState, action: &Action) -> Result<ToggleState, TransitionError> {
    match action {
        Action::Toggle => Ok(state.toggled()),
        Action::Reset { initial_state } => Ok(*initial_state),
        Action::Custom(kind) => Err(TransitionError::UnsupportedActionKind(kind)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_state_toggled() {
        assert_eq!(ToggleState::new(false).toggled(), ToggleState::new(true));
        assert_eq!(ToggleState::new(true).toggled(), ToggleState::new(false));
    }

    #[test]
    fn test_transition_toggle() {
        let off = ToggleState::new(false);
        assert_eq!(transition(off, &Action::Toggle), Ok(ToggleState::new(true)));
        assert_eq!(
            transition(ToggleState::new(true), &Action::Toggle),
            Ok(off)
        );
    }

    #[test]
    fn test_transition_is_pure() {
        let state = ToggleState::new(false);
        let first = transition(state, &Action::Toggle);
        let second = transition(state, &Action::Toggle);
        assert_eq!(first, second);
        // The input is untouched
        assert_eq!(state, ToggleState::new(false));
    }

    #[test]
    fn test_transition_reset_restores_carried_state() {
        let initial = ToggleState::new(true);
        let action = Action::Reset {
            initial_state: initial,
        };
        assert_eq!(transition(ToggleState::new(false), &action), Ok(initial));
        assert_eq!(transition(ToggleState::new(true), &action), Ok(initial));
    }

    #[test]
    fn test_reset_after_toggle_is_idempotent() {
        for s in [false, true] {
            for i in [false, true] {
                let toggled = transition(ToggleState::new(s), &Action::Toggle).unwrap();
                let reset = transition(
                    toggled,
                    &Action::Reset {
                        initial_state: ToggleState::new(i),
                    },
                )
                .unwrap();
                assert_eq!(reset, ToggleState::new(i));
            }
        }
    }

    #[test]
    fn test_toggle_involution() {
        let start = ToggleState::new(false);
        let once = transition(start, &Action::Toggle).unwrap();
        let twice = transition(once, &Action::Toggle).unwrap();
        assert_eq!(twice, start);
    }

    #[test]
    fn test_transition_rejects_unknown_action_kind() {
        let result = transition(ToggleState::new(false), &Action::Custom("sparkle"));
        assert_eq!(
            result,
            Err(TransitionError::UnsupportedActionKind("sparkle"))
        );
    }

    #[test]
    fn test_action_kind_names() {
        assert_eq!(Action::Toggle.kind(), "toggle");
        assert_eq!(
            Action::Reset {
                initial_state: ToggleState::new(false)
            }
            .kind(),
            "reset"
        );
        assert_eq!(Action::Custom("sparkle").kind(), "sparkle");
    }
}
