//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::State;
use crate::engine::{Action, StateMachine};
use std::sync::Arc;

/// Builder for constructing state machines with a fluent API.
///
/// The initial state is resolved and validated at `build` time: an explicit
/// `state` override takes priority over the declared `initial` state, and
/// whichever is chosen must be a member of the legal-state set. Validation
/// failures are permanent configuration errors, never coerced.
///
/// # Example
///
/// ```rust
/// use switchyard::builder::StateMachineBuilder;
/// use switchyard::state_enum;
///
/// state_enum! {
///     pub enum LampState {
///         On,
///         Off,
///     }
/// }
///
/// struct Lamp;
///
/// let machine = StateMachineBuilder::<Lamp, LampState>::new()
///     .instance(Lamp)
///     .states([LampState::On, LampState::Off])
///     .initial(LampState::Off)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state(), &LampState::Off);
/// ```
pub struct StateMachineBuilder<I, S, P = ()>
where
    I: Sync + 'static,
    S: State + 'static,
    P: Sync + 'static,
{
    instance: Option<I>,
    states: Vec<S>,
    initial: Option<S>,
    state_override: Option<S>,
    allow_same_state: bool,
    actions: Vec<Arc<dyn Action<I, S, P>>>,
}

impl<I, S, P> StateMachineBuilder<I, S, P>
where
    I: Send + Sync + 'static,
    S: State + 'static,
    P: Send + Sync + 'static,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            instance: None,
            states: Vec::new(),
            initial: None,
            state_override: None,
            allow_same_state: false,
            actions: Vec::new(),
        }
    }

    /// Set the domain instance passed to every hook (required).
    pub fn instance(mut self, instance: I) -> Self {
        self.instance = Some(instance);
        self
    }

    /// Set the legal-state set (required, at least one state).
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states = states.into_iter().collect();
        self
    }

    /// Set the declared initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Override the starting state, taking priority over `initial`.
    pub fn state(mut self, state: S) -> Self {
        self.state_override = Some(state);
        self
    }

    /// Permit transitions to the current state. Such transitions commit
    /// trivially, running no actions. Off by default.
    pub fn allow_same_state(mut self, allow: bool) -> Self {
        self.allow_same_state = allow;
        self
    }

    /// Register an action. Actions are matched in registration order.
    pub fn action(mut self, action: impl Action<I, S, P> + 'static) -> Self {
        self.actions.push(Arc::new(action));
        self
    }

    /// Register an already-shared action.
    pub fn add_action(mut self, action: Arc<dyn Action<I, S, P>>) -> Self {
        self.actions.push(action);
        self
    }

    /// Build the state machine.
    ///
    /// Fails if a required field is missing or the resolved starting state
    /// is not in the legal-state set. An empty action list is permitted;
    /// every non-trivial transition then fails with `NoActionAvailable`.
    pub fn build(self) -> Result<StateMachine<I, S, P>, BuildError> {
        let instance = self.instance.ok_or(BuildError::MissingInstance)?;
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let state = self.state_override.unwrap_or(initial);
        if !self.states.contains(&state) {
            return Err(BuildError::InvalidInitialState {
                state: state.name().to_string(),
            });
        }

        Ok(StateMachine::from_parts(
            instance,
            self.states,
            state,
            self.actions,
            self.allow_same_state,
        ))
    }
}

impl<I, S, P> Default for StateMachineBuilder<I, S, P>
where
    I: Send + Sync + 'static,
    S: State + 'static,
    P: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
