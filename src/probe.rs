//! Compile-time capability probing.
//!
//! [`Probe`] answers, at compile time and with no runtime cost, whether a
//! concrete type already carries a rendering capability. For each probed
//! capability there is a fallback trait carrying a `false` constant for
//! every type, and an inherent constant carrying `true` for types that
//! satisfy the capability bound. Constant resolution prefers the inherent
//! item, so:
//!
//! - `Probe::<T>::CAN_DUMP` resolves `true` exactly when `T: Dump`
//! - `Probe::<T>::HAS_NAME_TABLE` resolves `true` exactly when
//!   `T: EnumNames`
//!
//! The fallback trait must be in scope for the `false` path to resolve;
//! importing [`DumpFallback`] and [`NameTableFallback`] (or the crate
//! prelude-style glob) is enough.
//!
//! This works for concrete types named at the probe site. It does not see
//! through generic parameters: inside `fn f<T>()`, only the declared
//! bounds of `T` exist.
//!
//! ```rust
//! use typedump::probe::{DumpFallback, NameTableFallback, Probe};
//!
//! struct Opaque;
//!
//! assert!(Probe::<u32>::CAN_DUMP);
//! assert!(Probe::<Vec<String>>::CAN_DUMP);
//! assert!(!Probe::<Opaque>::CAN_DUMP);
//! assert!(!Probe::<u32>::HAS_NAME_TABLE);
//! ```

use std::marker::PhantomData;

use crate::enums::EnumNames;
use crate::ser::Dump;

/// Probe anchor for a type's rendering capabilities.
///
/// Never constructed; only its associated constants are read.
pub struct Probe<T: ?Sized>(PhantomData<T>);

/// Fallback providing `CAN_DUMP = false` for types without a rendering.
pub trait DumpFallback {
    const CAN_DUMP: bool = false;
}

impl<T: ?Sized> DumpFallback for Probe<T> {}

impl<T: Dump + ?Sized> Probe<T> {
    /// `true`: the type has a rendering, direct or by category.
    pub const CAN_DUMP: bool = true;
}

/// Fallback providing `HAS_NAME_TABLE = false` for enumeration types that
/// declared no name table (and for non-enumeration types).
pub trait NameTableFallback {
    const HAS_NAME_TABLE: bool = false;
}

impl<T: ?Sized> NameTableFallback for Probe<T> {}

impl<T: EnumNames> Probe<T> {
    /// `true`: the enumeration type declared a name table.
    pub const HAS_NAME_TABLE: bool = true;
}
