//! # typedump
//!
//! Static-dispatch textual value dumping for debug and log output.
//!
//! typedump turns structured values — records, enumerations, sequences,
//! mappings, pairs, tuples — into a canonical single-line text form,
//! without every type hand-writing its own formatting. Rendering is
//! chosen from the value's declared type at compile time; a type with no
//! rendering fails to build instead of failing at runtime.
//!
//! ## Key pieces
//!
//! - [`Dump`]: the recursive serialization contract
//! - [`RecordBuilder`]: move-only field accumulator for custom record
//!   renderers
//! - [`Enum`] + [`dump_enum!`]: name-table or numeric rendering per
//!   enumeration type
//! - [`Serde`]: renders any `serde::Serialize` value through the same
//!   grammar
//! - [`Probe`]: compile-time capability checks
//!
//! ## Quick start
//!
//! ```rust
//! use typedump::{dump_enum, to_string, Dump, Dumper, Enum, Result};
//!
//! #[derive(Clone, Copy)]
//! enum Status {
//!     Active,
//!     Disabled,
//! }
//!
//! dump_enum!(Status { Active => "active", Disabled => "disabled" });
//!
//! struct Account {
//!     id: u32,
//!     tags: Vec<String>,
//!     status: Status,
//! }
//!
//! impl Dump for Account {
//!     fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
//!         out.record("Account")
//!             .field("id", &self.id)
//!             .field("tags", &self.tags)
//!             .field("status", &Enum(self.status))
//!             .finish()
//!     }
//! }
//!
//! let account = Account {
//!     id: 7,
//!     tags: vec!["staff".to_string()],
//!     status: Status::Active,
//! };
//!
//! assert_eq!(
//!     to_string(&account).unwrap(),
//!     r#"Account {id: 7, tags: ["staff"], status: active}"#
//! );
//! ```
//!
//! ## Output grammar
//!
//! One line, no trailing newline:
//!
//! ```text
//! Record   := [Name " "] "{" [Field {", " Field}] "}"
//! Field    := Identifier ": " Value
//! Sequence := "[" [Value {", " Value}] "]"
//! Mapping  := "{" [Entry {", " Entry}] "}"
//! Pair     := "(" Value ", " Value ")"
//! Tuple    := "{" [Value {", " Value}] "}"
//! ```
//!
//! Strings are quoted and escaped; mappings keep their own iteration
//! order; empty containers emit only their markers. The text is meant to
//! be read by humans, not parsed back.

pub mod bridge;
pub mod enums;
pub mod error;
pub mod macros;
pub mod options;
pub mod probe;
pub mod record;
pub mod ser;

pub use bridge::Serde;
pub use enums::{Enum, EnumCode, EnumNames, EnumRender};
pub use error::{Error, Result};
pub use options::DumpOptions;
pub use probe::Probe;
pub use record::RecordBuilder;
pub use ser::{dump_mapping, dump_pair, dump_sequence, Dump, Dumper};

use std::fmt;
use std::io;

/// Dumps any `T: Dump` to a `String`.
///
/// # Examples
///
/// ```rust
/// use typedump::to_string;
///
/// assert_eq!(to_string(&vec![1, 2, 3]).unwrap(), "[1, 2, 3]");
/// assert_eq!(to_string("hi").unwrap(), "\"hi\"");
/// ```
///
/// # Errors
///
/// Returns an error if the value nests deeper than the default depth
/// limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Dump,
{
    to_string_with_options(value, DumpOptions::default())
}

/// Dumps any `T: Dump` to a `String` with custom options.
///
/// # Examples
///
/// ```rust
/// use typedump::{to_string_with_options, DumpOptions};
///
/// let options = DumpOptions::new().with_max_depth(1);
/// assert!(to_string_with_options(&vec![vec![1]], options).is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the value nests deeper than the configured depth
/// limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: DumpOptions) -> Result<String>
where
    T: ?Sized + Dump,
{
    let mut output = String::with_capacity(256);
    dump_to(&mut output, value, options)?;
    Ok(output)
}

/// Dumps any `T: Dump` into an existing text sink.
///
/// Fragments stream straight to the sink; nothing is buffered, so memory
/// use is bounded by nesting depth rather than output size.
///
/// # Errors
///
/// Returns an error if the sink refuses a write or the depth limit is
/// crossed. A failed write aborts the remainder of the dump; whatever was
/// already appended stays in the sink.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn dump_to<W, T>(sink: &mut W, value: &T, options: DumpOptions) -> Result<()>
where
    W: fmt::Write,
    T: ?Sized + Dump,
{
    let mut dumper = Dumper::new(sink, options);
    value.dump(&mut dumper)
}

/// Dumps any `T: Dump` to an `io::Write` destination.
///
/// # Examples
///
/// ```rust
/// use typedump::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &(1, "one")).unwrap();
/// assert_eq!(buffer, b"(1, \"one\")");
/// ```
///
/// # Errors
///
/// Returns an error if dumping fails or the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Dump,
{
    to_writer_with_options(writer, value, DumpOptions::default())
}

/// Dumps any `T: Dump` to an `io::Write` destination with custom options.
///
/// # Errors
///
/// Returns an error if dumping fails or the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(writer: W, value: &T, options: DumpOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Dump,
{
    let mut sink = IoWriter {
        writer,
        error: None,
    };
    let result = dump_to(&mut sink, value, options);
    match sink.error {
        Some(err) => Err(Error::io(&err.to_string())),
        None => result,
    }
}

/// Adapts an `io::Write` destination to the text sink the dumper needs,
/// keeping the real `io::Error` around for reporting.
struct IoWriter<W: io::Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for IoWriter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.writer.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}
