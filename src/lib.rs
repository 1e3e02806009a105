//! Switchyard: an action-driven finite state machine.
//!
//! A machine owns a domain instance, a fixed set of legal states and an
//! ordered list of actions. Each action binds lifecycle hooks to one or
//! many (from, to) state pairs - a single state, a set of states, or a
//! wildcard on either side. A requested transition runs every matching
//! action through three phases:
//!
//! - **before**: observational, runs before any decision is made
//! - **decide**: each action approves, vetoes (`false`), or raises
//! - **after**: runs only once the new state has been committed
//!
//! Within a phase all matching actions run concurrently and the call waits
//! for every one of them; the transition commits only if all decisions are
//! `true`. A veto is a normal negative outcome (`go_to` returns
//! `Ok(false)`), while a raised hook error aborts the call and propagates
//! verbatim.
//!
//! Logging goes through the [`tracing`] facade; without a subscriber
//! installed every event is a no-op.
//!
//! # Example
//!
//! ```rust
//! use switchyard::builder::StateMachineBuilder;
//! use switchyard::core::StateSpec;
//! use switchyard::engine::{Action, HookError, TransitionRequest};
//! use switchyard::state_enum;
//! use async_trait::async_trait;
//!
//! state_enum! {
//!     pub enum GateState {
//!         Open,
//!         Closed,
//!         Locked,
//!     }
//! }
//!
//! struct Gate {
//!     password: String,
//! }
//!
//! struct UnlockGate;
//!
//! #[async_trait]
//! impl Action<Gate, GateState, String> for UnlockGate {
//!     fn from(&self) -> StateSpec<GateState> {
//!         StateSpec::One(GateState::Locked)
//!     }
//!
//!     fn to(&self) -> StateSpec<GateState> {
//!         StateSpec::One(GateState::Closed)
//!     }
//!
//!     async fn on_transition(
//!         &self,
//!         instance: &Gate,
//!         request: &TransitionRequest<GateState, String>,
//!     ) -> Result<bool, HookError> {
//!         match &request.payload {
//!             Some(password) if *password == instance.password => Ok(true),
//!             _ => Err("invalid gate password".into()),
//!         }
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut gate = StateMachineBuilder::new()
//!     .instance(Gate { password: "test".into() })
//!     .states([GateState::Open, GateState::Closed, GateState::Locked])
//!     .initial(GateState::Locked)
//!     .action(UnlockGate)
//!     .build()
//!     .unwrap();
//!
//! assert!(gate.can_go_to(&GateState::Closed));
//!
//! let unlocked = gate
//!     .go_to_with(GateState::Closed, "test".to_string())
//!     .await
//!     .unwrap();
//! assert!(unlocked);
//! assert_eq!(gate.state(), &GateState::Closed);
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use core::{State, StateHistory, StateSpec, StateTransition};
pub use engine::{Action, HookError, HookPhase, StateMachine, TransitionError, TransitionRequest};
