//! Macro for declaring state enums.

/// Generate a state enum together with its `State` and `Display`
/// implementations.
///
/// # Example
///
/// ```
/// use helmsman::state_enum;
/// use helmsman::core::State;
///
/// state_enum! {
///     pub enum WinchState {
///         Idle,
///         Hauling,
///         Seized,
///     }
///     transient: [Hauling]
///     error: [Seized]
/// }
///
/// assert_eq!(WinchState::Idle.to_string(), "Idle");
/// assert!(WinchState::Hauling.is_transient());
/// assert!(WinchState::Seized.is_error());
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

        $(transient: [$($transient:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_transient(&self) -> bool {
                match self {
                    $($(Self::$transient => true,)*)?
                    _ => false,
                }
            }

            #[allow(unreachable_patterns)]
            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
