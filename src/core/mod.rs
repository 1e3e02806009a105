//! Core state machine types.
//!
//! This module contains the pure side of the machine:
//! - State identity via the `State` trait
//! - From/to specifications via `StateSpec`
//! - Immutable history tracking
//!
//! Nothing in this module performs I/O or suspends.

mod history;
mod spec;
mod state;

pub use history::{StateHistory, StateTransition};
pub use spec::StateSpec;
pub use state::State;
