//! The `dump_enum!` declaration macro.

/// Declares how an enumeration type participates in dumping.
///
/// Two forms, one per rendering path:
///
/// ```rust
/// use typedump::{dump_enum, to_string, Enum};
///
/// #[derive(Clone, Copy)]
/// enum Suit { Clubs, Spades }
///
/// #[derive(Clone, Copy)]
/// enum Rank { Two, Three }
///
/// // With a name table: cases render as their declared names.
/// dump_enum!(Suit { Clubs => "clubs", Spades => "spades" });
///
/// // Without one: cases render as their decimal codes.
/// dump_enum!(Rank);
///
/// assert_eq!(to_string(&Enum(Suit::Spades)).unwrap(), "spades");
/// assert_eq!(to_string(&Enum(Rank::Three)).unwrap(), "1");
/// ```
///
/// The macro expects a fieldless `Copy` enum and generates its
/// [`EnumCode`](crate::EnumCode) implementation (plus
/// [`EnumNames`](crate::EnumNames) for the first form) together with the
/// [`EnumRender`](crate::EnumRender) selection that
/// [`Enum<T>`](crate::Enum) dispatches through. Invoking both forms for
/// one type produces conflicting implementations and fails to compile.
///
/// A name table may list only some of the cases; the ones it leaves out
/// render as their decimal codes.
#[macro_export]
macro_rules! dump_enum {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $crate::EnumCode for $ty {
            fn code(self) -> i64 {
                self as i64
            }
        }

        impl $crate::EnumNames for $ty {
            #[allow(unreachable_patterns)]
            fn name(self) -> ::core::option::Option<&'static str> {
                match self {
                    $($ty::$variant => ::core::option::Option::Some($name),)+
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl $crate::EnumRender for $ty {
            fn render(self, out: &mut $crate::Dumper<'_>) -> $crate::Result<()> {
                $crate::enums::dump_named(out, self)
            }
        }
    };
    ($ty:ident) => {
        impl $crate::EnumCode for $ty {
            fn code(self) -> i64 {
                self as i64
            }
        }

        impl $crate::EnumRender for $ty {
            fn render(self, out: &mut $crate::Dumper<'_>) -> $crate::Result<()> {
                $crate::enums::dump_numeric(out, self)
            }
        }
    };
}
