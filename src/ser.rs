//! The dump protocol: the [`Dump`] trait, the [`Dumper`] sink state, and
//! the container formatters.
//!
//! ## Overview
//!
//! [`Dump`] is the recursive serialization contract: a type appends its own
//! textual fragment to the sink held by a [`Dumper`]. Dispatch is a closed
//! set of non-overlapping implementations, one per declared type, so every
//! value resolves to exactly one rendering rule at compile time:
//!
//! 1. Text scalars (`str`, `String`, `Cow<str>`, `char`) are quoted and
//!    escaped
//! 2. [`Enum`](crate::Enum) wrappers render through the declared name
//!    table, or the decimal code when no table exists
//! 3. Heterogeneous tuples render as `{a, b, c}` in declaration order
//! 4. Two-element tuples are pairs and render as `(a, b)`
//! 5. Mappings render as `{key: value, ...}` in their own iteration order
//! 6. Sequences render as `[a, b, ...]`
//! 7. Everything else supplies a direct rendering: builtin scalars,
//!    timestamps, big integers, and hand-written record renderers built on
//!    [`RecordBuilder`]
//!
//! A type matching none of these has no `Dump` implementation and fails to
//! compile; a type somehow matching two would be a conflicting
//! implementation, also rejected at compile time.
//!
//! ## Implementing `Dump` for a record
//!
//! ```rust
//! use typedump::{to_string, Dump, Dumper, Result};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Dump for Point {
//!     fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
//!         out.record("Point")
//!             .field("x", &self.x)
//!             .field("y", &self.y)
//!             .finish()
//!     }
//! }
//!
//! let text = to_string(&Point { x: 1, y: 2 }).unwrap();
//! assert_eq!(text, "Point {x: 1, y: 2}");
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{DateTime, TimeZone};
use indexmap::IndexMap;
use num_bigint::{BigInt, BigUint};

use crate::error::{Error, Result};
use crate::options::DumpOptions;
use crate::record::RecordBuilder;

/// The recursive serialization contract.
///
/// `dump` appends a textual fragment for `self` to the sink and has no
/// other side effect; it never mutates the value. Container and record
/// implementations recurse through the same trait, so nested values render
/// uniformly wherever they appear.
pub trait Dump {
    /// Appends the textual form of `self` to the sink.
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()>;
}

/// Serialization state bound to one output sink.
///
/// Wraps the caller-supplied append-only sink together with the active
/// [`DumpOptions`] and the current nesting depth. Created once per
/// top-level dump call; the sink is exclusively owned for the duration of
/// that call.
pub struct Dumper<'w> {
    sink: &'w mut dyn fmt::Write,
    options: DumpOptions,
    depth: usize,
}

impl<'w> Dumper<'w> {
    /// Binds a dumper to a sink with the given options.
    pub fn new(sink: &'w mut dyn fmt::Write, options: DumpOptions) -> Dumper<'w> {
        Dumper {
            sink,
            options,
            depth: 0,
        }
    }

    /// The options this dumper was created with.
    pub fn options(&self) -> &DumpOptions {
        &self.options
    }

    /// Appends raw text with no quoting.
    pub fn write_str(&mut self, s: &str) -> Result<()> {
        self.sink.write_str(s)?;
        Ok(())
    }

    /// Appends a single raw character.
    pub fn write_char(&mut self, c: char) -> Result<()> {
        self.sink.write_char(c)?;
        Ok(())
    }

    /// Appends a value through its `Display` implementation.
    ///
    /// This is the direct-rendering path used by builtin scalars.
    pub fn write_display<T: fmt::Display + ?Sized>(&mut self, value: &T) -> Result<()> {
        write!(self.sink, "{}", value)?;
        Ok(())
    }

    /// Appends text as a quoted, escaped string scalar.
    pub fn write_quoted(&mut self, text: &str) -> Result<()> {
        self.write_char('"')?;
        for ch in text.chars() {
            match ch {
                '"' => self.write_str("\\\"")?,
                '\\' => self.write_str("\\\\")?,
                '\n' => self.write_str("\\n")?,
                '\r' => self.write_str("\\r")?,
                '\t' => self.write_str("\\t")?,
                '\u{0008}' => self.write_str("\\b")?,
                '\u{000C}' => self.write_str("\\f")?,
                '\0' => self.write_str("\\0")?,
                _ => self.write_char(ch)?,
            }
        }
        self.write_char('"')
    }

    /// Opens a named record: emits the name and the opening marker, and
    /// returns the builder that accumulates fields.
    ///
    /// See [`RecordBuilder`] for the chaining discipline.
    pub fn record(&mut self, name: &str) -> RecordBuilder<'_, 'w> {
        RecordBuilder::open(self, Some(name))
    }

    /// Opens an anonymous record: emits only the opening marker.
    pub fn record_unnamed(&mut self) -> RecordBuilder<'_, 'w> {
        RecordBuilder::open(self, None)
    }

    /// Steps one nesting level deeper, failing once the configured depth
    /// limit is crossed.
    pub(crate) fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(Error::depth_limit(self.options.max_depth));
        }
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }
}

/// Writes a sequence of elements between the given markers.
///
/// Elements are comma-separated with exactly one `", "` between adjacent
/// elements; an empty sequence emits only the two markers. This is the
/// shared policy behind the sequence implementations, and is public so
/// custom collection types can reuse it.
pub fn dump_sequence<I>(out: &mut Dumper<'_>, items: I, open: char, close: char) -> Result<()>
where
    I: IntoIterator,
    I::Item: Dump,
{
    out.enter()?;
    out.write_char(open)?;
    let mut first = true;
    for item in items {
        if !first {
            out.write_str(", ")?;
        }
        first = false;
        item.dump(out)?;
    }
    out.write_char(close)?;
    out.leave();
    Ok(())
}

/// Writes mapping entries as `{key: value, ...}` in the iterator's order.
///
/// Both keys and values recurse through [`Dump`], so enumeration keys,
/// record values, or nested containers render the same way they would
/// anywhere else.
pub fn dump_mapping<I, K, V>(out: &mut Dumper<'_>, entries: I) -> Result<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: Dump,
    V: Dump,
{
    out.enter()?;
    out.write_char('{')?;
    let mut first = true;
    for (key, value) in entries {
        if !first {
            out.write_str(", ")?;
        }
        first = false;
        dump_entry(out, &key, &value)?;
    }
    out.write_char('}')?;
    out.leave();
    Ok(())
}

/// Writes a two-element pair as `(first, second)`.
pub fn dump_pair<A, B>(out: &mut Dumper<'_>, first: &A, second: &B) -> Result<()>
where
    A: Dump + ?Sized,
    B: Dump + ?Sized,
{
    out.enter()?;
    out.write_char('(')?;
    first.dump(out)?;
    out.write_str(", ")?;
    second.dump(out)?;
    out.write_char(')')?;
    out.leave();
    Ok(())
}

/// One `key: value` entry. Ephemeral; shared by the mapping formatter and
/// never stored.
fn dump_entry<K, V>(out: &mut Dumper<'_>, key: &K, value: &V) -> Result<()>
where
    K: Dump + ?Sized,
    V: Dump + ?Sized,
{
    key.dump(out)?;
    out.write_str(": ")?;
    value.dump(out)
}

// Text scalars: quoted and escaped.

impl Dump for str {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        out.write_quoted(self)
    }
}

impl Dump for String {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        out.write_quoted(self)
    }
}

impl Dump for Cow<'_, str> {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        out.write_quoted(self)
    }
}

impl Dump for char {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        let mut buf = [0u8; 4];
        out.write_quoted(self.encode_utf8(&mut buf))
    }
}

// Delegating wrappers.

impl<'x, T: Dump + ?Sized> Dump for &'x T {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        (**self).dump(out)
    }
}

impl<T: Dump + ?Sized> Dump for Box<T> {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        (**self).dump(out)
    }
}

// Builtin scalars carry their own direct rendering.

macro_rules! impl_dump_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Dump for $ty {
                fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
                    out.write_display(self)
                }
            }
        )*
    };
}

impl_dump_display!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

// Big integers render as their decimal form, like the builtin ones.

impl Dump for BigInt {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        out.write_display(self)
    }
}

impl Dump for BigUint {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        out.write_display(self)
    }
}

// Timestamps render as quoted RFC 3339 text.

impl<Tz: TimeZone> Dump for DateTime<Tz> {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        out.write_quoted(&self.to_rfc3339())
    }
}

// Two-element tuples are pairs.

impl<A: Dump, B: Dump> Dump for (A, B) {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        dump_pair(out, &self.0, &self.1)
    }
}

// Heterogeneous tuples of every other arity render between braces in
// declaration order. Arity 2 is deliberately absent: it is claimed by the
// pair rule above, and a single type may hold only one rendering.

macro_rules! impl_dump_tuple {
    ($(($T0:ident: $i0:tt $(, $T:ident: $i:tt)*))+) => {
        $(
            impl<$T0: Dump $(, $T: Dump)*> Dump for ($T0, $($T,)*) {
                fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
                    out.enter()?;
                    out.write_char('{')?;
                    self.$i0.dump(out)?;
                    $(
                        out.write_str(", ")?;
                        self.$i.dump(out)?;
                    )*
                    out.write_char('}')?;
                    out.leave();
                    Ok(())
                }
            }
        )+
    };
}

impl_dump_tuple! {
    (T0: 0)
    (T0: 0, T1: 1, T2: 2)
    (T0: 0, T1: 1, T2: 2, T3: 3)
    (T0: 0, T1: 1, T2: 2, T3: 3, T4: 4)
    (T0: 0, T1: 1, T2: 2, T3: 3, T4: 4, T5: 5)
    (T0: 0, T1: 1, T2: 2, T3: 3, T4: 4, T5: 5, T6: 6)
    (T0: 0, T1: 1, T2: 2, T3: 3, T4: 4, T5: 5, T6: 6, T7: 7)
    (T0: 0, T1: 1, T2: 2, T3: 3, T4: 4, T5: 5, T6: 6, T7: 7, T8: 8)
    (T0: 0, T1: 1, T2: 2, T3: 3, T4: 4, T5: 5, T6: 6, T7: 7, T8: 8, T9: 9)
    (T0: 0, T1: 1, T2: 2, T3: 3, T4: 4, T5: 5, T6: 6, T7: 7, T8: 8, T9: 9, T10: 10)
    (T0: 0, T1: 1, T2: 2, T3: 3, T4: 4, T5: 5, T6: 6, T7: 7, T8: 8, T9: 9, T10: 10, T11: 11)
}

// Ordered sequences.

impl<T: Dump> Dump for Vec<T> {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        dump_sequence(out, self, '[', ']')
    }
}

impl<T: Dump> Dump for [T] {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        dump_sequence(out, self, '[', ']')
    }
}

impl<T: Dump, const N: usize> Dump for [T; N] {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        dump_sequence(out, self, '[', ']')
    }
}

// Key-unique mappings, rendered in their own iteration order.

impl<K: Dump, V: Dump> Dump for BTreeMap<K, V> {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        dump_mapping(out, self)
    }
}

impl<K: Dump, V: Dump, S> Dump for HashMap<K, V, S> {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        dump_mapping(out, self)
    }
}

impl<K: Dump, V: Dump, S> Dump for IndexMap<K, V, S> {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        dump_mapping(out, self)
    }
}
