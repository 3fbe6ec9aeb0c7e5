//! Rendering `serde::Serialize` values through the dump grammar.
//!
//! Types that already derive `Serialize` do not need a hand-written
//! [`Dump`] implementation to show up in a dump: wrapping a reference in
//! [`Serde`] drives serde's data model through the same sink, markers and
//! separators the native implementations use.
//!
//! The mapping onto the grammar:
//!
//! - structs render as named records, maps as `{key: value}` mappings,
//!   seqs as `[...]` sequences
//! - tuples of two render as pairs, every other arity between braces
//! - unit enum variants render as their bare variant name
//! - `None`, unit and unit structs render as `null`
//! - enum variants carrying data have no spelling in the grammar and
//!   fail with [`Error::Unsupported`](crate::Error::Unsupported)
//!
//! ```rust
//! use serde::Serialize;
//! use typedump::{to_string, Serde};
//!
//! #[derive(Serialize)]
//! struct User {
//!     name: String,
//!     logins: u32,
//! }
//!
//! let user = User { name: "ada".to_string(), logins: 3 };
//! let text = to_string(&Serde(&user)).unwrap();
//! assert_eq!(text, "User {name: \"ada\", logins: 3}");
//! ```

use serde::ser::{self, Serialize};

use crate::error::{Error, Result};
use crate::record::RecordBuilder;
use crate::ser::{dump_sequence, Dump, Dumper};

/// Adapter rendering any `serde::Serialize` value through the dump
/// grammar.
///
/// Usually wraps a reference: `Serde(&value)`.
pub struct Serde<T>(pub T);

impl<T: Serialize> Dump for Serde<T> {
    fn dump(&self, out: &mut Dumper<'_>) -> Result<()> {
        self.0.serialize(GrammarSerializer { out })
    }
}

/// Streams serde's data model straight into a [`Dumper`]; nothing is
/// buffered.
struct GrammarSerializer<'a, 'w> {
    out: &'a mut Dumper<'w>,
}

impl<'a, 'w> ser::Serializer for GrammarSerializer<'a, 'w> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = ContainerEmitter<'a, 'w>;
    type SerializeTuple = ContainerEmitter<'a, 'w>;
    type SerializeTupleStruct = ContainerEmitter<'a, 'w>;
    type SerializeTupleVariant = ser::Impossible<(), Error>;
    type SerializeMap = MapEmitter<'a, 'w>;
    type SerializeStruct = RecordEmitter<'a, 'w>;
    type SerializeStructVariant = ser::Impossible<(), Error>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.out.write_display(&v)
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.out.write_display(&v)
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.out.write_display(&v)
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.out.write_display(&v)
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.out.write_display(&v)
    }

    fn serialize_i128(self, v: i128) -> Result<()> {
        self.out.write_display(&v)
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.out.write_display(&v)
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.out.write_display(&v)
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.out.write_display(&v)
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.out.write_display(&v)
    }

    fn serialize_u128(self, v: u128) -> Result<()> {
        self.out.write_display(&v)
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        self.out.write_display(&v)
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        self.out.write_display(&v)
    }

    fn serialize_char(self, v: char) -> Result<()> {
        let mut buf = [0u8; 4];
        self.out.write_quoted(v.encode_utf8(&mut buf))
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        self.out.write_quoted(v)
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        dump_sequence(self.out, v, '[', ']')
    }

    fn serialize_none(self) -> Result<()> {
        self.serialize_unit()
    }

    fn serialize_some<T>(self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        self.out.write_str("null")
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.out.write_str(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported("newtype variants"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        ContainerEmitter::open(self.out, '[', "]")
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        if len == 2 {
            ContainerEmitter::open(self.out, '(', ")")
        } else {
            ContainerEmitter::open(self.out, '{', "}")
        }
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        ContainerEmitter::open(self.out, '{', "}")
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        MapEmitter::open(self.out)
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        let out = self.out;
        Ok(RecordEmitter {
            builder: Some(out.record(name)),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported("struct variants"))
    }
}

/// Emits one bracketed container: seqs, tuples and tuple structs share it
/// and differ only in their markers.
struct ContainerEmitter<'a, 'w> {
    out: &'a mut Dumper<'w>,
    first: bool,
    close: &'static str,
}

impl<'a, 'w> ContainerEmitter<'a, 'w> {
    fn open(out: &'a mut Dumper<'w>, open: char, close: &'static str) -> Result<Self> {
        out.enter()?;
        out.write_char(open)?;
        Ok(ContainerEmitter {
            out,
            first: true,
            close,
        })
    }

    fn element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        if !self.first {
            self.out.write_str(", ")?;
        }
        self.first = false;
        value.serialize(GrammarSerializer {
            out: &mut *self.out,
        })
    }

    fn close(self) -> Result<()> {
        self.out.write_str(self.close)?;
        self.out.leave();
        Ok(())
    }
}

impl ser::SerializeSeq for ContainerEmitter<'_, '_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.close()
    }
}

impl ser::SerializeTuple for ContainerEmitter<'_, '_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.close()
    }
}

impl ser::SerializeTupleStruct for ContainerEmitter<'_, '_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.close()
    }
}

/// Emits `{key: value, ...}` mapping entries in arrival order.
struct MapEmitter<'a, 'w> {
    out: &'a mut Dumper<'w>,
    first: bool,
}

impl<'a, 'w> MapEmitter<'a, 'w> {
    fn open(out: &'a mut Dumper<'w>) -> Result<Self> {
        out.enter()?;
        out.write_char('{')?;
        Ok(MapEmitter { out, first: true })
    }
}

impl ser::SerializeMap for MapEmitter<'_, '_> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if !self.first {
            self.out.write_str(", ")?;
        }
        self.first = false;
        key.serialize(GrammarSerializer {
            out: &mut *self.out,
        })
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.out.write_str(": ")?;
        value.serialize(GrammarSerializer {
            out: &mut *self.out,
        })
    }

    fn end(self) -> Result<()> {
        self.out.write_char('}')?;
        self.out.leave();
        Ok(())
    }
}

/// Feeds serde struct fields through the same [`RecordBuilder`] that
/// hand-written record renderers use.
struct RecordEmitter<'a, 'w> {
    builder: Option<RecordBuilder<'a, 'w>>,
}

impl ser::SerializeStruct for RecordEmitter<'_, '_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match self.builder.take() {
            Some(builder) => {
                self.builder = Some(builder.field(key, &Serde(value)));
                Ok(())
            }
            None => Err(Error::custom("record already finished")),
        }
    }

    fn end(self) -> Result<()> {
        match self.builder {
            Some(builder) => builder.finish(),
            None => Ok(()),
        }
    }
}
