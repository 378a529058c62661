use crate::config::ToggleConfig;
use crate::dispatch::dispatch;
use crate::monitor::{ConsistencyMonitor, Diagnostic};
use crate::ownership::{effective_state, ownership_mode};
use crate::state::{Action, ToggleState, TransitionError};
use crate::store::StateStore;
use tracing::warn;

/// Construction-time options for a [`ToggleCore`]
#[derive(Debug, Clone, Copy)]
pub struct ToggleOptions {
    pub initial_on: bool,
    /// Gates diagnostic evaluation; the arbitration logic itself is
    /// unaffected
    pub diagnostics_enabled: bool,
}

impl Default for ToggleOptions {
    fn default() -> Self {
        Self {
            initial_on: false,
            diagnostics_enabled: true,
        }
    }
}

/// One toggle component instance
///
/// Owns the canonical state store and the consistency monitor. All other
/// inputs arrive as a fresh [`ToggleConfig`] on every interaction cycle.
#[derive(Debug)]
pub struct ToggleCore {
    pub(crate) store: StateStore,
    monitor: ConsistencyMonitor,
    diagnostics_enabled: bool,
}

impl ToggleCore {
    /// Creates a component; the monitor is seeded with the ownership mode
    /// of `initial_config`
    pub fn new(options: ToggleOptions, initial_config: &ToggleConfig) -> Self {
        Self {
            store: StateStore::new(options.initial_on),
            monitor: ConsistencyMonitor::new(ownership_mode(initial_config)),
            diagnostics_enabled: options.diagnostics_enabled,
        }
    }

    /// The state currently visible to the outside world
    pub fn effective_state(&self, config: &ToggleConfig) -> bool {
        effective_state(config, self.store.current()).on
    }

    /// The store's canonical state, for debugging and monitoring
    pub fn internal_state(&self) -> ToggleState {
        self.store.current()
    }

    /// Runs the consistency checks against a changed configuration
    ///
    /// Hosts may call this every cycle; unchanged configurations are
    /// no-ops. Diagnostics are logged and returned; they never alter
    /// behavior. With diagnostics disabled the history still advances but
    /// nothing is reported.
    pub fn update_config(&mut self, config: &ToggleConfig) -> Vec<Diagnostic> {
        let diagnostics = self.monitor.check(config);
        if !self.diagnostics_enabled {
            return Vec::new();
        }
        for diagnostic in &diagnostics {
            warn!("Toggle consistency check: {}", diagnostic);
        }
        diagnostics
    }

    /// Dispatches a toggle action
    pub fn toggle(&self, config: &mut ToggleConfig) -> Result<(), TransitionError> {
        dispatch(config, &self.store, Action::Toggle)
    }

    /// Dispatches a reset carrying the construction-time initial state
    pub fn reset(&self, config: &mut ToggleConfig) -> Result<(), TransitionError> {
        dispatch(
            config,
            &self.store,
            Action::Reset {
                initial_state: self.store.initial(),
            },
        )
    }
}
