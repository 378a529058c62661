use crate::config::ToggleConfig;
use crate::ownership::{ownership_mode, OwnershipMode};
use std::fmt;

/// Advisory condition observed by the [`ConsistencyMonitor`]
///
/// Diagnostics are informational only; they never alter control flow or
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The component started self-managed and a later configuration
    /// supplied a controlled value
    UncontrolledToControlled,
    /// The component started controlled and a later configuration dropped
    /// the controlled value
    ControlledToUncontrolled,
    /// Controlled, no change sink, and `read_only` not set: the external
    /// value can never change because nothing will be notified to request
    /// a change
    ReadOnlyWithoutEscapeHatch,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Diagnostic::UncontrolledToControlled => "uncontrolled-to-controlled",
            Diagnostic::ControlledToUncontrolled => "controlled-to-uncontrolled",
            Diagnostic::ReadOnlyWithoutEscapeHatch => "read-only-without-escape-hatch",
        };
        f.write_str(message)
    }
}

/// The slice of a configuration the monitor's checks depend on
type ConfigSignature = (OwnershipMode, bool, bool);

fn signature(config: &ToggleConfig) -> ConfigSignature {
    (
        ownership_mode(config),
        config.on_change.is_some(),
        config.read_only,
    )
}

/// Observes configuration changes over the component's lifetime
///
/// Retains exactly one piece of history for flip detection: the ownership
/// mode seen at the previous check, seeded from the initial configuration
/// at construction. A signature of the last-checked configuration keeps
/// each distinct configuration evaluated once, however often the host
/// re-submits it.
#[derive(Debug)]
pub struct ConsistencyMonitor {
    last_mode: OwnershipMode,
    last_signature: Option<ConfigSignature>,
}

impl ConsistencyMonitor {
    pub fn new(initial_mode: OwnershipMode) -> Self {
        Self {
            last_mode: initial_mode,
            last_signature: None,
        }
    }

    /// Re-evaluates both checks against `config`
    ///
    /// Returns the diagnostics raised by this evaluation; an unchanged
    /// configuration raises nothing.
    pub fn check(&mut self, config: &ToggleConfig) -> Vec<Diagnostic> {
        let sig = signature(config);
        if self.last_signature == Some(sig) {
            return Vec::new();
        }

        let current_mode = sig.0;
        let mut diagnostics = Vec::new();

        match (self.last_mode, current_mode) {
            (OwnershipMode::Internal, OwnershipMode::External) => {
                diagnostics.push(Diagnostic::UncontrolledToControlled);
            }
            (OwnershipMode::External, OwnershipMode::Internal) => {
                diagnostics.push(Diagnostic::ControlledToUncontrolled);
            }
            _ => {}
        }

        if current_mode == OwnershipMode::External
            && config.on_change.is_none()
            && !config.read_only
        {
            diagnostics.push(Diagnostic::ReadOnlyWithoutEscapeHatch);
        }

        self.last_mode = current_mode;
        self.last_signature = Some(sig);
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_to_controlled_emits_once() {
        let mut monitor = ConsistencyMonitor::new(OwnershipMode::Internal);

        let controlled = ToggleConfig::controlled(true).with_on_change(Box::new(|_, _| {}));
        assert_eq!(
            monitor.check(&controlled),
            vec![Diagnostic::UncontrolledToControlled]
        );

        // Unchanged configuration: no repeats
        let controlled = ToggleConfig::controlled(true).with_on_change(Box::new(|_, _| {}));
        assert_eq!(monitor.check(&controlled), vec![]);
        let controlled = ToggleConfig::controlled(false).with_on_change(Box::new(|_, _| {}));
        assert_eq!(monitor.check(&controlled), vec![]);
    }

    #[test]
    fn test_flip_to_uncontrolled_emits_once() {
        let mut monitor = ConsistencyMonitor::new(OwnershipMode::External);

        assert_eq!(
            monitor.check(&ToggleConfig::new()),
            vec![Diagnostic::ControlledToUncontrolled]
        );
        assert_eq!(monitor.check(&ToggleConfig::new()), vec![]);
    }

    #[test]
    fn test_stable_mode_emits_no_flip() {
        let mut monitor = ConsistencyMonitor::new(OwnershipMode::Internal);
        assert_eq!(monitor.check(&ToggleConfig::new()), vec![]);
        assert_eq!(monitor.check(&ToggleConfig::new()), vec![]);
    }

    #[test]
    fn test_read_only_without_escape_hatch() {
        let mut monitor = ConsistencyMonitor::new(OwnershipMode::External);
        assert_eq!(
            monitor.check(&ToggleConfig::controlled(true)),
            vec![Diagnostic::ReadOnlyWithoutEscapeHatch]
        );
    }

    #[test]
    fn test_read_only_acknowledgment_suppresses_diagnostic() {
        let mut monitor = ConsistencyMonitor::new(OwnershipMode::External);
        let config = ToggleConfig::controlled(true).with_read_only(true);
        assert_eq!(monitor.check(&config), vec![]);
    }

    #[test]
    fn test_sink_presence_suppresses_read_only_diagnostic() {
        let mut monitor = ConsistencyMonitor::new(OwnershipMode::External);
        let config = ToggleConfig::controlled(true).with_on_change(Box::new(|_, _| {}));
        assert_eq!(monitor.check(&config), vec![]);
    }

    #[test]
    fn test_flip_and_read_only_can_coincide() {
        let mut monitor = ConsistencyMonitor::new(OwnershipMode::Internal);
        assert_eq!(
            monitor.check(&ToggleConfig::controlled(true)),
            vec![
                Diagnostic::UncontrolledToControlled,
                Diagnostic::ReadOnlyWithoutEscapeHatch
            ]
        );
    }

    #[test]
    fn test_diagnostic_messages_are_distinguishable() {
        assert_eq!(
            Diagnostic::UncontrolledToControlled.to_string(),
            "uncontrolled-to-controlled"
        );
        assert_eq!(
            Diagnostic::ControlledToUncontrolled.to_string(),
            "controlled-to-uncontrolled"
        );
        assert_eq!(
            Diagnostic::ReadOnlyWithoutEscapeHatch.to_string(),
            "read-only-without-escape-hatch"
        );
    }
}
