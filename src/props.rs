use crate::config::ToggleConfig;
use crate::core::ToggleCore;
use crate::dispatch::dispatch;
use crate::state::{Action, TransitionError};
use std::collections::BTreeMap;
use tracing::debug;

/// A caller-supplied click handler composed into a property bundle
pub type Handler<'a> = Box<dyn FnMut() + 'a>;

/// Caller-supplied pieces merged into a built property bundle
///
/// Attributes win on key collision; the click handler is composed with the
/// bundle's own dispatch rather than replacing it.
pub struct PropOverrides<'a> {
    pub attrs: BTreeMap<String, String>,
    pub on_click: Option<Handler<'a>>,
}

impl Default for PropOverrides<'_> {
    fn default() -> Self {
        Self {
            attrs: BTreeMap::new(),
            on_click: None,
        }
    }
}

/// Ready-to-attach interaction properties for one interactive element
///
/// Owns its configuration snapshot and a store handle, so it stays usable
/// after the builder call returns. Invoking `on_click` runs any caller
/// handler first, then dispatches through the arbitration core.
pub struct PropBundle<'a> {
    pub attrs: BTreeMap<String, String>,
    pub on_click: Box<dyn FnMut() -> Result<(), TransitionError> + 'a>,
}

/// Folds a list of optional callables into one that invokes each present
/// member in listed order with no arguments, discarding nothing but the
/// absent entries
pub fn call_all<'a>(handlers: Vec<Option<Handler<'a>>>) -> Handler<'a> {
    let mut present: Vec<Handler<'a>> = handlers.into_iter().flatten().collect();
    Box::new(move || {
        for handler in present.iter_mut() {
            handler();
        }
    })
}

impl ToggleCore {
    /// Builds the property bundle for the toggle element itself
    ///
    /// Carries an `aria-pressed` attribute reflecting the effective state
    /// at build time.
    pub fn get_toggler_props<'a>(
        &self,
        config: ToggleConfig<'a>,
        overrides: PropOverrides<'a>,
    ) -> PropBundle<'a> {
        let mut attrs = BTreeMap::new();
        attrs.insert(
            "aria-pressed".to_string(),
            self.effective_state(&config).to_string(),
        );
        attrs.extend(overrides.attrs);
        debug!("Built toggler props with {} attribute(s)", attrs.len());

        let mut config = config;
        let store = self.store.clone();
        let mut callers = call_all(vec![overrides.on_click]);
        let on_click = Box::new(move || {
            callers();
            dispatch(&mut config, &store, Action::Toggle)
        });

        PropBundle { attrs, on_click }
    }

    /// Builds the property bundle for a reset element
    pub fn get_resetter_props<'a>(
        &self,
        config: ToggleConfig<'a>,
        overrides: PropOverrides<'a>,
    ) -> PropBundle<'a> {
        let attrs = overrides.attrs;
        debug!("Built resetter props with {} attribute(s)", attrs.len());

        let mut config = config;
        let store = self.store.clone();
        let mut callers = call_all(vec![overrides.on_click]);
        let on_click = Box::new(move || {
            callers();
            let initial_state = store.initial();
            dispatch(&mut config, &store, Action::Reset { initial_state })
        });

        PropBundle { attrs, on_click }
    }
}
