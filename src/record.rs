//! The field-accumulating builder behind custom record renderers.
//!
//! A [`RecordBuilder`] is opened through [`Dumper::record`] or
//! [`Dumper::record_unnamed`], which emit the display name (if any) and
//! the opening marker. Each [`field`](RecordBuilder::field) call consumes
//! the builder and returns it, so exactly one owner exists at every point
//! of the chain; [`finish`](RecordBuilder::finish) consumes it for good,
//! emits the closing marker and reports the first error the chain hit.
//!
//! The builder is not `Clone`, so a record cannot gain two writers, and
//! its `Drop` implementation emits the closing marker on paths that never
//! reach `finish`, so a record cannot stay unterminated.
//!
//! ```rust
//! use typedump::{to_string, Dump, Dumper, Result};
//!
//! struct Session {
//!     user: String,
//!     hits: u32,
//! }
//!
//! impl Dump for Session {
//!     fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
//!         out.record("Session")
//!             .field("user", &self.user)
//!             .field("hits", &self.hits)
//!             .finish()
//!     }
//! }
//!
//! let s = Session { user: "ada".to_string(), hits: 3 };
//! assert_eq!(to_string(&s).unwrap(), "Session {user: \"ada\", hits: 3}");
//! ```

use std::mem;

use crate::error::Result;
use crate::ser::{Dump, Dumper};

/// Accumulates the fields of one composite record.
///
/// For a record with `n` fields the builder emits exactly `n - 1`
/// separators and exactly one opening and one closing marker, for any
/// `n >= 0`. Field identifiers are emitted raw and unquoted; field values
/// recurse through [`Dump`].
#[must_use = "a record builder must be finished to report errors"]
pub struct RecordBuilder<'a, 'w> {
    dumper: &'a mut Dumper<'w>,
    has_fields: bool,
    finished: bool,
    result: Result<()>,
}

impl<'a, 'w> RecordBuilder<'a, 'w> {
    pub(crate) fn open(dumper: &'a mut Dumper<'w>, name: Option<&str>) -> RecordBuilder<'a, 'w> {
        let result = dumper.enter().and_then(|_| match name {
            Some(name) => {
                dumper.write_str(name)?;
                dumper.write_str(" {")
            }
            None => dumper.write_char('{'),
        });
        RecordBuilder {
            dumper,
            has_fields: false,
            finished: false,
            result,
        }
    }

    /// Adds one named field.
    ///
    /// Consumes and returns the builder; the only way to keep adding
    /// fields is through the value returned here. After the first failed
    /// write the remaining fields are skipped and the error surfaces from
    /// [`finish`](RecordBuilder::finish).
    pub fn field<T: Dump + ?Sized>(mut self, name: &str, value: &T) -> Self {
        if self.result.is_ok() {
            self.result = self.write_field(name, value);
        }
        self
    }

    /// Adds every `(name, value)` entry of an iterator as a field, in
    /// iteration order.
    pub fn fields<'i, I, T>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'i str, &'i T)>,
        T: Dump + ?Sized + 'i,
    {
        for (name, value) in entries {
            self = self.field(name, value);
        }
        self
    }

    /// Emits the closing marker and returns the outcome of the whole
    /// chain.
    pub fn finish(mut self) -> Result<()> {
        self.finished = true;
        let result = mem::replace(&mut self.result, Ok(()));
        let close = self.dumper.write_char('}');
        self.dumper.leave();
        result.and(close)
    }

    fn write_field<T: Dump + ?Sized>(&mut self, name: &str, value: &T) -> Result<()> {
        if self.has_fields {
            self.dumper.write_str(", ")?;
        }
        self.has_fields = true;
        self.dumper.write_str(name)?;
        self.dumper.write_str(": ")?;
        value.dump(self.dumper)
    }
}

impl Drop for RecordBuilder<'_, '_> {
    fn drop(&mut self) {
        if !self.finished {
            let _ = self.dumper.write_char('}');
            self.dumper.leave();
        }
    }
}
