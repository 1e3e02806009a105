//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Domain instance not specified. Call .instance(value) before .build()")]
    MissingInstance,

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No legal states defined. Call .states([...]) with at least one state")]
    NoStates,

    #[error("Invalid initial state: \"{state}\" is not in the legal-state set")]
    InvalidInitialState { state: String },
}
