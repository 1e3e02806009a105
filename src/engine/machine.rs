//! The transition engine: owns the current state and resolves and executes
//! transitions through the registered actions.

use crate::core::{State, StateHistory, StateTransition};
use crate::engine::action::{Action, HookError, TransitionRequest};
use crate::engine::error::{HookPhase, TransitionError};
use chrono::Utc;
use futures::future::join_all;
use std::sync::Arc;

/// The state machine manager, holding all available actions and performing
/// the state transitions.
///
/// Generic over the domain instance `I` (passed by shared reference to
/// every hook, never inspected or mutated by the machine itself), the state
/// type `S`, and an optional transition payload `P`.
///
/// `go_to` takes `&mut self`: a machine serves one transition at a time,
/// and callers that share a machine across tasks must serialize access
/// themselves (e.g. behind a `tokio::sync::Mutex`). Within a single call,
/// all hooks of a phase run concurrently and the call suspends until every
/// one of them completes; a slow hook stalls the whole transition.
pub struct StateMachine<I, S, P = ()>
where
    I: Sync + 'static,
    S: State + 'static,
    P: Sync + 'static,
{
    instance: I,
    states: Vec<S>,
    state: S,
    actions: Vec<Arc<dyn Action<I, S, P>>>,
    history: StateHistory<S>,
    allow_same_state: bool,
}

impl<I, S, P> StateMachine<I, S, P>
where
    I: Send + Sync + 'static,
    S: State + 'static,
    P: Send + Sync + 'static,
{
    /// Assembles a machine from already-validated parts. Construction goes
    /// through `StateMachineBuilder`, which checks the initial state
    /// against the legal-state set.
    pub(crate) fn from_parts(
        instance: I,
        states: Vec<S>,
        state: S,
        actions: Vec<Arc<dyn Action<I, S, P>>>,
        allow_same_state: bool,
    ) -> Self {
        Self {
            instance,
            states,
            state,
            actions,
            history: StateHistory::new(),
            allow_same_state,
        }
    }

    /// Get the current machine state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The domain instance passed to every hook.
    pub fn instance(&self) -> &I {
        &self.instance
    }

    /// Mutable access to the domain instance. The machine itself never
    /// mutates it.
    pub fn instance_mut(&mut self) -> &mut I {
        &mut self.instance
    }

    /// The legal-state set, fixed at construction.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// History of committed transitions.
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Whether the given state is registered in the machine.
    pub fn is_valid_state(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// All actions available to go to the given state from the current one.
    ///
    /// Returns `None` when the transition is not permitted: a same-state
    /// request while `allow_same_state` is off, or no matching action.
    /// A same-state request with `allow_same_state` on yields an empty
    /// list - permitted, trivially approved, nothing to run.
    pub fn paths_to(&self, to: &S) -> Option<Vec<Arc<dyn Action<I, S, P>>>> {
        if *to == self.state {
            return self.allow_same_state.then(Vec::new);
        }

        let actions: Vec<_> = self
            .actions
            .iter()
            .filter(|action| action.matches(&self.state, to))
            .cloned()
            .collect();

        if actions.is_empty() {
            None
        } else {
            Some(actions)
        }
    }

    /// Checks if the machine can go to the desired state.
    pub fn can_go_to(&self, to: &S) -> bool {
        self.paths_to(to).is_some()
    }

    /// Performs a transition to the desired state without a payload.
    ///
    /// Returns `Ok(true)` if the transition was committed, `Ok(false)` if
    /// a matching action vetoed it (state unchanged), or an error for a
    /// refused request or a raised hook.
    pub async fn go_to(&mut self, to: S) -> Result<bool, TransitionError> {
        self.transition(to, None).await
    }

    /// Performs a transition with a payload, passed to every matching
    /// action's decision hook inside the request value.
    pub async fn go_to_with(&mut self, to: S, payload: P) -> Result<bool, TransitionError> {
        self.transition(to, Some(payload)).await
    }

    async fn transition(&mut self, to: S, payload: Option<P>) -> Result<bool, TransitionError> {
        let from = self.state.clone();

        if to == from {
            if !self.allow_same_state {
                return Err(TransitionError::AlreadyInState {
                    state: from.name().to_string(),
                });
            }
            // Trivial self-transition: commit with no actions to run.
            self.commit(to, &[]).await?;
            return Ok(true);
        }

        if !self.is_valid_state(&to) {
            return Err(TransitionError::InvalidState {
                state: to.name().to_string(),
            });
        }

        let actions = self
            .paths_to(&to)
            .ok_or_else(|| TransitionError::NoActionAvailable {
                from: from.name().to_string(),
                to: to.name().to_string(),
            })?;

        // Notify we're leaving the current state. Every hook of the phase
        // runs to completion before errors are inspected.
        let results = join_all(
            actions
                .iter()
                .map(|action| action.before_transition(&self.instance)),
        )
        .await;
        collect_phase(&actions, results, HookPhase::Before)?;

        // Check if we can transition to the next state.
        let request = TransitionRequest {
            from: from.clone(),
            to: to.clone(),
            payload,
        };
        let results = join_all(
            actions
                .iter()
                .map(|action| action.on_transition(&self.instance, &request)),
        )
        .await;
        let decisions = collect_phase(&actions, results, HookPhase::Decide)?;

        // Approved iff every decision hook agreed. An empty list is
        // vacuously approved.
        if decisions.into_iter().all(|approved| approved) {
            self.commit(to, &actions).await?;
            return Ok(true);
        }

        tracing::info!(from = from.name(), to = to.name(), "transition interrupted");
        Ok(false)
    }

    /// Commits the new state, records it, and notifies the actions that
    /// approved the transition.
    async fn commit(
        &mut self,
        to: S,
        actions: &[Arc<dyn Action<I, S, P>>],
    ) -> Result<(), TransitionError> {
        let from = std::mem::replace(&mut self.state, to.clone());
        self.history = self.history.record(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
        });

        let results = join_all(
            actions
                .iter()
                .map(|action| action.after_transition(&self.instance)),
        )
        .await;
        collect_phase(actions, results, HookPhase::After)?;

        Ok(())
    }
}

/// Unpacks one phase's hook results, surfacing the first raised error
/// (in action order) as a `Hook` transition error.
fn collect_phase<I, S, P, T>(
    actions: &[Arc<dyn Action<I, S, P>>],
    results: Vec<Result<T, HookError>>,
    phase: HookPhase,
) -> Result<Vec<T>, TransitionError>
where
    I: Sync + 'static,
    S: State + 'static,
    P: Sync + 'static,
{
    let mut values = Vec::with_capacity(results.len());
    for (action, result) in actions.iter().zip(results) {
        match result {
            Ok(value) => values.push(value),
            Err(source) => {
                return Err(TransitionError::Hook {
                    action: action.name().to_string(),
                    phase,
                    source,
                });
            }
        }
    }
    Ok(values)
}
