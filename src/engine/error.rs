//! Transition errors.

use super::action::HookError;
use std::fmt;
use thiserror::Error;

/// Which hook phase an action error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPhase {
    /// The `before_transition` phase.
    Before,
    /// The `on_transition` decision phase.
    Decide,
    /// The `after_transition` phase, after the state was committed.
    After,
}

impl fmt::Display for HookPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookPhase::Before => write!(f, "before"),
            HookPhase::Decide => write!(f, "decide"),
            HookPhase::After => write!(f, "after"),
        }
    }
}

/// Errors returned by `go_to`.
///
/// A veto (a decision hook returning `false`) is not an error; `go_to`
/// reports it as `Ok(false)`. All variants except `Hook` leave the machine
/// state untouched; a `Hook` error raised in the after phase surfaces after
/// the new state was already committed.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// Transition requested to the current state while same-state
    /// transitions are disallowed.
    #[error("machine is already in \"{state}\" state")]
    AlreadyInState { state: String },

    /// Requested target state is not in the legal-state set.
    #[error("invalid state: \"{state}\"")]
    InvalidState { state: String },

    /// No registered action matches the (current, target) pair.
    #[error("no action available to transition from \"{from}\" to \"{to}\" state")]
    NoActionAvailable { from: String, to: String },

    /// An action hook raised; the hook's error propagates verbatim as the
    /// source. Hooks already in flight in the same phase are not cancelled,
    /// so their side effects may have occurred even though the transition
    /// was aborted.
    #[error("action \"{action}\" failed in {phase} hook: {source}")]
    Hook {
        action: String,
        phase: HookPhase,
        #[source]
        source: HookError,
    },
}
