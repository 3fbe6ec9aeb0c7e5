//! Enumeration rendering: the [`Enum`] wrapper and its name/numeric paths.
//!
//! An enumeration value on its own carries no rendering; wrapping it in
//! [`Enum`] selects one at compile time, based on what its type declared
//! through [`dump_enum!`](crate::dump_enum):
//!
//! - a declared name table ([`EnumNames`]) renders the matching case name
//!   as bare, unquoted text
//! - no table ([`EnumCode`] only) renders the underlying code in decimal
//!
//! The selection is made per enumeration type when `dump_enum!` expands,
//! not per value at runtime. Declaring the same type both ways is a
//! duplicate implementation and fails to compile.
//!
//! A name table that does not cover the actual case falls back to the
//! decimal code. An unmapped case therefore still produces output; it is
//! never silently dropped.
//!
//! ```rust
//! use typedump::{dump_enum, to_string, Enum};
//!
//! #[derive(Clone, Copy)]
//! enum Mode { Idle, Busy }
//!
//! #[derive(Clone, Copy)]
//! enum Level { Low, High }
//!
//! dump_enum!(Mode { Idle => "idle", Busy => "busy" });
//! dump_enum!(Level);
//!
//! assert_eq!(to_string(&Enum(Mode::Busy)).unwrap(), "busy");
//! assert_eq!(to_string(&Enum(Level::High)).unwrap(), "1");
//! ```

use crate::error::Result;
use crate::ser::{Dump, Dumper};

/// Pairs a raw enumeration value with its declared type.
///
/// Exists only so the rendering rule can be chosen from the type; it holds
/// no state beyond the value itself.
#[derive(Clone, Copy, Debug)]
pub struct Enum<T>(pub T);

impl<T: EnumRender> Dump for Enum<T> {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        self.0.render(out)
    }
}

/// Access to an enumeration's underlying numeric code.
///
/// Implemented by [`dump_enum!`](crate::dump_enum) for fieldless `Copy`
/// enums as a plain `as i64` cast.
pub trait EnumCode: Copy {
    /// The value's underlying code.
    fn code(self) -> i64;
}

/// A declared name table for an enumeration type.
///
/// `name` returns `None` for cases the table does not cover; rendering
/// then falls back to the numeric code.
pub trait EnumNames: EnumCode {
    /// The declared name for this case, if the table covers it.
    fn name(self) -> Option<&'static str>;
}

/// The rendering path an enumeration type selected when it was declared.
///
/// [`dump_enum!`](crate::dump_enum) implements this once per type, wiring
/// it to either [`dump_named`] or [`dump_numeric`]; the wrapper's
/// [`Dump`] implementation goes through it. Selecting both paths for one
/// type is a duplicate implementation and fails to compile.
pub trait EnumRender: EnumCode {
    /// Appends the textual form of this case.
    fn render(self, out: &mut Dumper<'_>) -> Result<()>;
}

/// Renders an enumeration case through its declared name table, falling
/// back to the decimal code for cases the table does not cover.
pub fn dump_named<T: EnumNames>(out: &mut Dumper<'_>, value: T) -> Result<()> {
    match value.name() {
        Some(name) => out.write_str(name),
        None => dump_numeric(out, value),
    }
}

/// Renders an enumeration case as its decimal underlying code.
pub fn dump_numeric<T: EnumCode>(out: &mut Dumper<'_>, value: T) -> Result<()> {
    out.write_display(&value.code())
}
