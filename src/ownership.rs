use crate::config::ToggleConfig;
use crate::state::ToggleState;

/// Who owns the authoritative toggle value
///
/// Derived from the configuration, never stored: ownership is a pure
/// function of the current configuration and cannot change within a single
/// dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipMode {
    /// The component's own store is authoritative
    Internal,
    /// A caller-supplied value is authoritative
    External,
}

/// Derives the ownership mode from a configuration snapshot
pub fn ownership_mode(config: &ToggleConfig) -> OwnershipMode {
    if config.controlled_value.is_some() {
        OwnershipMode::External
    } else {
        OwnershipMode::Internal
    }
}

pub fn is_externally_owned(config: &ToggleConfig) -> bool {
    ownership_mode(config) == OwnershipMode::External
}

/// The state the outside world currently sees
///
/// Exactly one source drives the result: the caller-supplied value when
/// externally owned, the store state otherwise. The two are never blended.
pub fn effective_state(config: &ToggleConfig, store_state: ToggleState) -> ToggleState {
    match config.controlled_value {
        Some(on) => ToggleState::new(on),
        None => store_state,
    }
}
