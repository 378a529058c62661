use crate::config::ToggleConfig;
use crate::ownership::{effective_state, is_externally_owned};
use crate::state::{Action, TransitionError};
use crate::store::StateStore;
use tracing::debug;

/// Single entry point for state-changing requests
///
/// The store advances only under internal ownership. The suggested next
/// state is always computed, from the state currently visible to the
/// outside world (the external value when controlled, the store state
/// otherwise), captured before any mutation. Only the `on` field is
/// guaranteed synchronized to the externally visible value at suggestion
/// time; custom transitions reading anything else see store-derived data.
///
/// Transition failures propagate before the sink is notified.
pub fn dispatch(
    config: &mut ToggleConfig<'_>,
    store: &StateStore,
    action: Action,
) -> Result<(), TransitionError> {
    let externally_owned = is_externally_owned(config);
    let visible = effective_state(config, store.current());

    if !externally_owned {
        store.apply(config.transition.as_ref(), &action)?;
    }

    let suggested = (config.transition)(visible, &action)?;
    debug!(
        "Dispatched '{}' (externally owned: {}), suggesting {:?}",
        action.kind(),
        externally_owned,
        suggested
    );

    if let Some(sink) = config.on_change.as_mut() {
        sink(suggested, &action);
    }
    Ok(())
}
