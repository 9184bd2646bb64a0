//! Serde bridge into [`Value`].
//!
//! [`ValueSerializer`] turns any `Serialize` type into a value graph the
//! exporter can render:
//!
//! - structs (named, tuple or unit) become [`Record`]s named after the type
//! - sequences and tuples become integer-keyed [`Sequence`]s
//! - byte strings become [`Value::Bytes`]
//! - maps become [`Sequence`]s keyed by their string or integer keys
//! - unit enum variants become [`EnumConstant`]s of the enum type
//! - data-carrying enum variants become records named `Enum::Variant`
//! - `None` and `()` become [`Value::Null`]
//!
//! Every call produces fresh composites, so the resulting graph never contains
//! cycles or aliases.
//!
//! ## Usage
//!
//! ```rust
//! use serde::Serialize;
//! use value_exporter::{to_value, Value};
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 1, y: 2 }).unwrap();
//! let record = value.as_record().unwrap();
//!
//! assert_eq!(record.class_name(), "Point");
//! assert_eq!(record.get("x"), Some(Value::Int(1)));
//! ```

use crate::{EnumConstant, Error, Key, Record, Result, Sequence, Value};
use serde::{ser, Serialize};

/// Serializer producing a [`Value`] instead of text.
pub struct ValueSerializer;

/// Collects the elements of sequences and tuples.
pub struct SerializeSequence {
    seq: Sequence,
}

/// Collects the entries of a map.
pub struct SerializeKeyed {
    seq: Sequence,
    current_key: Option<Key>,
}

/// Collects the fields of structs and data-carrying enum variants.
pub struct SerializeRecord {
    record: Record,
    next_index: i64,
}

/// Converts any serializable value into a [`Value`].
///
/// # Errors
///
/// Fails on map keys that are neither strings nor integers, and on 128-bit
/// integers.
///
/// # Examples
///
/// ```rust
/// use value_exporter::{to_value, Value};
///
/// let value = to_value(&vec![1, 2, 3]).unwrap();
/// assert_eq!(value.as_sequence().map(|seq| seq.len()), Some(3));
/// assert_eq!(to_value(&None::<i32>).unwrap(), Value::Null);
/// ```
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

fn variant_class(name: &str, variant: &str) -> String {
    format!("{}::{}", name, variant)
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeSequence;
    type SerializeTuple = SerializeSequence;
    type SerializeTupleStruct = SerializeRecord;
    type SerializeTupleVariant = SerializeRecord;
    type SerializeMap = SerializeKeyed;
    type SerializeStruct = SerializeRecord;
    type SerializeStructVariant = SerializeRecord;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Int(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        i64::try_from(v)
            .map(Value::Int)
            .map_err(|_| Error::custom(format!("integer {} does not fit in 64 bits", v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        match i64::try_from(v) {
            Ok(i) => Ok(Value::Int(i)),
            Err(_) => Ok(Value::Float(v as f64)),
        }
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        i64::try_from(v)
            .map(Value::Int)
            .map_err(|_| Error::custom(format!("integer {} does not fit in 64 bits", v)))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(v as f64))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Bytes(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
        Ok(Value::Object(Record::new(name)))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::Enum(EnumConstant::unit(name, variant)))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let record = Record::new(&variant_class(name, variant));
        record.set(0, to_value(value)?);
        Ok(Value::Object(record))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeSequence> {
        Ok(SerializeSequence {
            seq: Sequence::new(),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeSequence> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, name: &'static str, _len: usize) -> Result<SerializeRecord> {
        Ok(SerializeRecord::new(name))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeRecord> {
        Ok(SerializeRecord::new(&variant_class(name, variant)))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeKeyed> {
        Ok(SerializeKeyed {
            seq: Sequence::new(),
            current_key: None,
        })
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<SerializeRecord> {
        Ok(SerializeRecord::new(name))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeRecord> {
        Ok(SerializeRecord::new(&variant_class(name, variant)))
    }
}

impl SerializeRecord {
    fn new(class_name: &str) -> Self {
        SerializeRecord {
            record: Record::new(class_name),
            next_index: 0,
        }
    }

    fn push_positional<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.record.set(self.next_index, to_value(value)?);
        self.next_index += 1;
        Ok(())
    }
}

impl ser::SerializeSeq for SerializeSequence {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.seq.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.seq))
    }
}

impl ser::SerializeTuple for SerializeSequence {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeRecord {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push_positional(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.record))
    }
}

impl ser::SerializeTupleVariant for SerializeRecord {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push_positional(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.record))
    }
}

impl ser::SerializeMap for SerializeKeyed {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_value(key)? {
            Value::String(s) => self.current_key = Some(Key::Str(s)),
            Value::Int(i) => self.current_key = Some(Key::Int(i)),
            other => {
                return Err(Error::custom(format!(
                    "map keys must be strings or integers, got {}",
                    other.kind_name()
                )))
            }
        }
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.seq.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.seq))
    }
}

impl ser::SerializeStruct for SerializeRecord {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.record.set(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.record))
    }
}

impl ser::SerializeStructVariant for SerializeRecord {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.record.set(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.record))
    }
}
