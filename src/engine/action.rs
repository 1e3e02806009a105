//! Actions: named, matchable units of behavior bound to state transitions.

use crate::core::{State, StateSpec};
use async_trait::async_trait;

/// Error type raised by action hooks.
///
/// Hook errors propagate verbatim to the `go_to` caller as the source of
/// [`TransitionError::Hook`](crate::engine::TransitionError::Hook).
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The transition request passed to every matching action's decision hook.
///
/// Built fresh for each `go_to` call and never persisted.
#[derive(Clone, Debug)]
pub struct TransitionRequest<S, P = ()> {
    /// The machine's state at the time of the request.
    pub from: S,
    /// The requested destination state.
    pub to: S,
    /// Optional payload handed to `go_to_with`.
    pub payload: Option<P>,
}

/// An action which occurs for one or many specific state transitions.
///
/// Actions are constructed once at machine-assembly time, live for the
/// machine's entire lifetime, and must not retain per-transition data
/// between calls. All hooks receive the domain instance by shared
/// reference; hooks that mutate it concurrently must coordinate themselves.
///
/// The three hooks run in strict phases per transition: every matching
/// action's `before_transition` completes before any `on_transition`
/// starts, and `after_transition` runs only after the new state has been
/// committed. Within a phase, sibling actions run concurrently and their
/// ordering is unspecified.
///
/// # Example
///
/// ```rust
/// use switchyard::core::StateSpec;
/// use switchyard::engine::{Action, HookError, TransitionRequest};
/// use switchyard::state_enum;
/// use async_trait::async_trait;
///
/// state_enum! {
///     pub enum DoorState {
///         Open,
///         Closed,
///     }
/// }
///
/// struct Door;
///
/// struct CloseDoor;
///
/// #[async_trait]
/// impl Action<Door, DoorState> for CloseDoor {
///     fn from(&self) -> StateSpec<DoorState> {
///         StateSpec::One(DoorState::Open)
///     }
///
///     fn to(&self) -> StateSpec<DoorState> {
///         StateSpec::One(DoorState::Closed)
///     }
///
///     async fn on_transition(
///         &self,
///         _instance: &Door,
///         _request: &TransitionRequest<DoorState>,
///     ) -> Result<bool, HookError> {
///         Ok(true)
///     }
/// }
///
/// let action = CloseDoor;
/// assert!(action.matches(&DoorState::Open, &DoorState::Closed));
/// assert!(!action.matches(&DoorState::Closed, &DoorState::Open));
/// ```
#[async_trait]
pub trait Action<I, S, P = ()>: Send + Sync
where
    I: Sync,
    S: State,
    P: Sync,
{
    /// The origin states for which this action is triggered.
    fn from(&self) -> StateSpec<S>;

    /// The destination states for which this action is triggered.
    fn to(&self) -> StateSpec<S>;

    /// The name of the action, defaults to the implementing type's name.
    fn name(&self) -> &str {
        short_type_name::<Self>()
    }

    /// Checks if this action matches the from/to state pair specified.
    ///
    /// Pure and side-effect-free; does not consult machine state.
    fn matches(&self, from: &S, to: &S) -> bool {
        self.from().matches(from) && self.to().matches(to)
    }

    /// Called once before the decision phase of a selected transition.
    ///
    /// Observational by default. Any returned error aborts the whole
    /// transition attempt with the state unchanged; do not use errors
    /// here for control flow - veto from `on_transition` instead.
    async fn before_transition(&self, _instance: &I) -> Result<(), HookError> {
        tracing::trace!(action = self.name(), from = %self.from(), "leaving state");
        Ok(())
    }

    /// The decision hook, called once per selected action with the
    /// transition request.
    ///
    /// Returns `Ok(true)` to approve, `Ok(false)` to veto the transition
    /// without aborting sibling actions, or an error to abort the whole
    /// call. Runs concurrently with sibling actions against the same
    /// request value, so it must be read-only with respect to shared
    /// machine state.
    async fn on_transition(
        &self,
        _instance: &I,
        _request: &TransitionRequest<S, P>,
    ) -> Result<bool, HookError> {
        tracing::trace!(
            action = self.name(),
            from = %self.from(),
            to = %self.to(),
            "transitioning states"
        );
        Ok(true)
    }

    /// Called once after the new state has been committed.
    ///
    /// Runs only for actions that were part of the approved transition,
    /// never for rejected ones. Observational by default.
    async fn after_transition(&self, _instance: &I) -> Result<(), HookError> {
        tracing::trace!(action = self.name(), to = %self.to(), "entering state");
        Ok(())
    }
}

/// Last path segment of a type name, e.g. `gate::OpenGate` -> `OpenGate`.
fn short_type_name<T: ?Sized>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}
