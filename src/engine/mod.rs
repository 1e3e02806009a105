//! The transition engine: actions, the machine, and transition errors.
//!
//! This is the imperative shell around the pure core. Hooks are
//! concurrency-suspending; within each phase of a transition every
//! matching action runs concurrently and the engine waits for all of them
//! before moving on.

mod action;
mod error;
mod machine;

pub use action::{Action, HookError, TransitionRequest};
pub use error::{HookPhase, TransitionError};
pub use machine::StateMachine;
