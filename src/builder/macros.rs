//! Macros for ergonomic state machine construction.

/// Generate a `State` trait implementation for a simple enum.
///
/// Derives `Clone`, `PartialEq`, `Debug`, `Serialize` and `Deserialize`
/// and implements `name()` from the variant identifiers.
///
/// # Example
///
/// ```
/// use switchyard::core::State;
/// use switchyard::state_enum;
///
/// state_enum! {
///     pub enum GateState {
///         Open,
///         Closed,
///         Locked,
///     }
/// }
///
/// assert_eq!(GateState::Closed.name(), "Closed");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
