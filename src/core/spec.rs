//! State specifications for action matching.
//!
//! An action is bound to a pair of specifications, one for its source
//! states and one for its destinations. A specification is a single state,
//! a set of states, or the universal wildcard.

use super::state::State;
use std::fmt;

/// Which states one side of an action binding accepts.
///
/// Matching is an exhaustive case analysis: the wildcard matches any
/// candidate, a set matches by membership, a single value by equality.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{State, StateSpec};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum GateState {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for GateState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
/// }
///
/// let any = StateSpec::<GateState>::Any;
/// assert!(any.matches(&GateState::Open));
///
/// let one = StateSpec::One(GateState::Closed);
/// assert!(one.matches(&GateState::Closed));
/// assert!(!one.matches(&GateState::Open));
///
/// let set = StateSpec::Set(vec![GateState::Closed, GateState::Locked]);
/// assert!(set.matches(&GateState::Locked));
/// assert!(!set.matches(&GateState::Open));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum StateSpec<S> {
    /// Matches any state.
    Any,
    /// Matches exactly one state.
    One(S),
    /// Matches any state in the set.
    Set(Vec<S>),
}

impl<S: State> StateSpec<S> {
    /// Check whether a candidate state satisfies this specification.
    ///
    /// Pure and side-effect-free.
    pub fn matches(&self, candidate: &S) -> bool {
        match self {
            StateSpec::Any => true,
            StateSpec::One(state) => state == candidate,
            StateSpec::Set(states) => states.contains(candidate),
        }
    }
}

impl<S: State> From<S> for StateSpec<S> {
    fn from(state: S) -> Self {
        StateSpec::One(state)
    }
}

impl<S: State> From<Vec<S>> for StateSpec<S> {
    fn from(states: Vec<S>) -> Self {
        StateSpec::Set(states)
    }
}

impl<S: State> fmt::Display for StateSpec<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateSpec::Any => write!(f, "*"),
            StateSpec::One(state) => write!(f, "{}", state.name()),
            StateSpec::Set(states) => {
                write!(f, "[")?;
                for (i, state) in states.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", state.name())?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Open,
        Closed,
        Locked,
        Destroyed,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Open => "Open",
                Self::Closed => "Closed",
                Self::Locked => "Locked",
                Self::Destroyed => "Destroyed",
            }
        }
    }

    #[test]
    fn any_matches_every_state() {
        let spec = StateSpec::<TestState>::Any;
        assert!(spec.matches(&TestState::Open));
        assert!(spec.matches(&TestState::Closed));
        assert!(spec.matches(&TestState::Locked));
        assert!(spec.matches(&TestState::Destroyed));
    }

    #[test]
    fn one_matches_by_equality() {
        let spec = StateSpec::One(TestState::Closed);
        assert!(spec.matches(&TestState::Closed));
        assert!(!spec.matches(&TestState::Open));
    }

    #[test]
    fn set_matches_by_membership() {
        let spec = StateSpec::Set(vec![TestState::Closed, TestState::Locked]);
        assert!(spec.matches(&TestState::Closed));
        assert!(spec.matches(&TestState::Locked));
        assert!(!spec.matches(&TestState::Open));
    }

    #[test]
    fn empty_set_matches_nothing() {
        let spec = StateSpec::<TestState>::Set(Vec::new());
        assert!(!spec.matches(&TestState::Open));
    }

    #[test]
    fn from_conversions() {
        let one: StateSpec<TestState> = TestState::Open.into();
        assert_eq!(one, StateSpec::One(TestState::Open));

        let set: StateSpec<TestState> = vec![TestState::Open, TestState::Closed].into();
        assert_eq!(
            set,
            StateSpec::Set(vec![TestState::Open, TestState::Closed])
        );
    }

    #[test]
    fn display_renders_each_variant() {
        assert_eq!(StateSpec::<TestState>::Any.to_string(), "*");
        assert_eq!(StateSpec::One(TestState::Open).to_string(), "Open");
        assert_eq!(
            StateSpec::Set(vec![TestState::Closed, TestState::Locked]).to_string(),
            "[Closed, Locked]"
        );
    }
}
