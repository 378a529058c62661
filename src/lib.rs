pub mod config;
pub mod core;
pub mod dispatch;
pub mod monitor;
pub mod ownership;
pub mod props;
pub mod settings;
pub mod state;
pub mod store;


pub use crate::core::{ToggleCore, ToggleOptions};
pub use config::{ChangeSink, ToggleConfig, TransitionFn};
pub use dispatch::dispatch;
pub use monitor::{ConsistencyMonitor, Diagnostic};
pub use ownership::{effective_state, is_externally_owned, ownership_mode, OwnershipMode};
pub use props::{call_all, Handler, PropBundle, PropOverrides};
pub use settings::{load_settings, DemoSettings, Settings};
pub use state::{transition, Action, ToggleState, TransitionError};
pub use store::StateStore;
