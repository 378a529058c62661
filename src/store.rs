use crate::state::{Action, ToggleState, TransitionError};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Holds the canonical toggle state for one component instance
///
/// Clones share the same underlying state, so a handle can be captured by
/// property bundles while the owning component keeps its own. The state
/// captured at construction time is retained unchanged for the lifetime of
/// the store so that reset actions can always restore the original value.
#[derive(Debug)]
pub struct StateStore {
    state: Arc<RwLock<ToggleState>>,
    initial: ToggleState,
}

impl Clone for StateStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            initial: self.initial,
        }
    }
}

impl StateStore {
    /// Creates a new store seeded from `initial_on`
    pub fn new(initial_on: bool) -> Self {
        let initial = ToggleState::new(initial_on);
        Self {
            state: Arc::new(RwLock::new(initial)),
            initial,
        }
    }

    /// Gets the current canonical state
    pub fn current(&self) -> ToggleState {
        match self.state.read() {
            Ok(state) => *state,
            Err(e) => {
                warn!("Recovering canonical state from poisoned lock: {}", e);
                *e.into_inner()
            }
        }
    }

    /// The state captured at construction time
    pub fn initial(&self) -> ToggleState {
        self.initial
    }

    /// Advances the canonical state by applying `action` through `transition`
    ///
    /// Transition failures propagate and leave the state untouched.
    pub fn apply<F>(&self, transition: F, action: &Action) -> Result<(), TransitionError>
    where
        F: Fn(ToggleState, &Action) -> Result<ToggleState, TransitionError>,
    {
        let mut state = match self.state.write() {
            Ok(state) => state,
            Err(e) => {
                warn!("Recovering canonical state from poisoned lock: {}", e);
                e.into_inner()
            }
        };
        let next = transition(*state, action)?;
        debug!(
            "Applied '{}' action: {:?} -> {:?}",
            action.kind(),
            *state,
            next
        );
        *state = next;
        Ok(())
    }
}
