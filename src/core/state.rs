//! Core State trait for machine states.
//!
//! Every state a machine can occupy implements this trait, which provides
//! a pure, display-friendly identity without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine states.
///
/// States are opaque, comparable identifiers. A machine is constructed with
/// a fixed set of legal states, and its current state is always a member of
/// that set.
///
/// # Required Traits
///
/// - `Clone`: states must be cloneable for history tracking and requests
/// - `PartialEq`: states must be comparable for transition logic
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable for history
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
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
/// assert_eq!(GateState::Open.name(), "Open");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}
