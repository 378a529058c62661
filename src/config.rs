use crate::state::{transition, Action, ToggleState, TransitionError};

/// Injectable transition strategy; defaults to the built-in [`transition`]
pub type TransitionFn<'a> =
    Box<dyn Fn(ToggleState, &Action) -> Result<ToggleState, TransitionError> + 'a>;

/// Notification sink invoked with the suggested next state and the action
/// that produced it
pub type ChangeSink<'a> = Box<dyn FnMut(ToggleState, &Action) + 'a>;

/// Configuration snapshot supplied fresh on every interaction cycle
///
/// Presence of `controlled_value` cedes state ownership to the caller; the
/// caller then learns of requested changes only through `on_change`.
/// `read_only` is the explicit acknowledgment that a controlled toggle
/// without a sink is intentional. The snapshot is treated as immutable for
/// the duration of one dispatch; the core never caches it across cycles.
pub struct ToggleConfig<'a> {
    pub transition: TransitionFn<'a>,
    pub on_change: Option<ChangeSink<'a>>,
    pub controlled_value: Option<bool>,
    pub read_only: bool,
}

impl Default for ToggleConfig<'_> {
    fn default() -> Self {
        Self {
            transition: Box::new(transition),
            on_change: None,
            controlled_value: None,
            read_only: false,
        }
    }
}

impl<'a> ToggleConfig<'a> {
    /// An uncontrolled configuration with the built-in transition
    pub fn new() -> Self {
        Self::default()
    }

    /// A controlled configuration whose effective state is `value`
    pub fn controlled(value: bool) -> Self {
        Self {
            controlled_value: Some(value),
            ..Self::default()
        }
    }

    pub fn with_transition(mut self, transition: TransitionFn<'a>) -> Self {
        self.transition = transition;
        self
    }

    pub fn with_on_change(mut self, sink: ChangeSink<'a>) -> Self {
        self.on_change = Some(sink);
        self
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
}
