//! XTon serialization.
//!
//! This module provides the [`Encoder`], which writes a [`Value`] tree as XTon
//! text, and the [`ValueSerializer`], which converts any `Serialize` type into
//! a [`Value`].
//!
//! ## Quoting
//!
//! The encoder keeps output short by writing strings unquoted where the
//! decoder reads them back unchanged:
//!
//! - **Object keys** are unquoted unless empty or containing whitespace, a
//!   delimiter, a quote or a backslash
//! - **Array elements** follow the key rule, and are also quoted when they
//!   start with a digit
//! - **Object values and a string document** are always quoted
//!
//! ## Top-level collapse
//!
//! A root object with exactly one entry whose key needs no quoting is written
//! as a bare `key-value` pair:
//!
//! ```rust
//! use serde_xton::{encode, xton};
//!
//! assert_eq!(encode(&xton!({"key": "value"})).unwrap(), "key-'value'");
//! assert_eq!(encode(&xton!({"num": 123, "bool": true})).unwrap(), "<num-123/bool-\\true>");
//! ```
//!
//! ## Direct Encoder Usage
//!
//! ```rust
//! use serde_xton::{xton, Encoder, XtonOptions};
//!
//! let mut encoder = Encoder::new(XtonOptions::new());
//! encoder.encode(&xton!([1, [2, 3], 4])).unwrap();
//! assert_eq!(encoder.into_inner(), "[1/[2/3]/4]");
//! ```

use crate::syntax::{
    self, ARRAY_CLOSE, ARRAY_OPEN, ESCAPE, FALSE_TAG, ITEM_SEPARATOR, KEY_SEPARATOR, NONE_TAG,
    OBJECT_CLOSE, OBJECT_OPEN, QUOTE, TRUE_TAG,
};
use crate::{EncodeError, Error, Result, Value, XtonMap, XtonOptions};
use serde::{ser, Serialize};
use tracing::trace;

/// The XTon encoder.
///
/// Writes [`Value`] trees into an internal buffer. Created via
/// [`Encoder::new`] with customizable options.
pub struct Encoder {
    output: String,
    options: XtonOptions,
}

impl Encoder {
    /// Creates an encoder with an empty buffer.
    pub fn new(options: XtonOptions) -> Self {
        Encoder {
            output: String::with_capacity(128),
            options,
        }
    }

    /// Consumes the encoder, returning the text written so far.
    pub fn into_inner(self) -> String {
        self.output
    }

    /// Writes `value` as a whole document.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::NonFiniteNumber`] if the tree holds NaN or an
    /// infinity. The buffer contents are unspecified after an error.
    pub fn encode(&mut self, value: &Value) -> Result<()> {
        if let Value::Object(map) = value {
            if let Some((key, inner)) = self.collapsible_entry(map) {
                trace!(key = key.as_str(), "collapsing single-entry root object");
                self.output.push_str(key);
                self.output.push(KEY_SEPARATOR as char);
                return self.write_value(inner, 0);
            }
        }
        self.write_value(value, 0)
    }

    /// The entry of a root object that can be written without `<>`.
    fn collapsible_entry<'m>(&self, map: &'m XtonMap) -> Option<(&'m String, &'m Value)> {
        if !self.options.collapse_top_level {
            return None;
        }
        let (key, value) = map.single_entry()?;
        if syntax::key_needs_quotes(key) || swallows_separator(key) {
            return None;
        }
        Some((key, value))
    }

    fn write_value(&mut self, value: &Value, level: usize) -> Result<()> {
        match value {
            Value::Null => self.output.push_str(NONE_TAG),
            Value::Bool(true) => self.output.push_str(TRUE_TAG),
            Value::Bool(false) => self.output.push_str(FALSE_TAG),
            Value::Number(n) => self.output.push_str(&format_number(*n)?),
            Value::String(s) => self.write_quoted(s),
            Value::Array(arr) => self.write_array(arr, level)?,
            Value::Object(map) => self.write_object(map, level)?,
        }
        Ok(())
    }

    fn write_array(&mut self, arr: &[Value], level: usize) -> Result<()> {
        self.output.push(ARRAY_OPEN as char);
        for (i, element) in arr.iter().enumerate() {
            if i > 0 {
                self.output.push(ITEM_SEPARATOR as char);
            }
            self.write_item_indent(level + 1);
            match element {
                Value::String(s) if !syntax::element_needs_quotes(s) => self.output.push_str(s),
                other => self.write_value(other, level + 1)?,
            }
        }
        if !arr.is_empty() {
            self.write_item_indent(level);
        }
        self.output.push(ARRAY_CLOSE as char);
        Ok(())
    }

    fn write_object(&mut self, map: &XtonMap, level: usize) -> Result<()> {
        self.output.push(OBJECT_OPEN as char);
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.output.push(ITEM_SEPARATOR as char);
            }
            self.write_item_indent(level + 1);
            self.write_key(key);
            self.output.push(KEY_SEPARATOR as char);
            self.write_value(value, level + 1)?;
        }
        if !map.is_empty() {
            self.write_item_indent(level);
        }
        self.output.push(OBJECT_CLOSE as char);
        Ok(())
    }

    fn write_key(&mut self, key: &str) {
        if syntax::key_needs_quotes(key) {
            self.write_quoted(key);
        } else {
            self.output.push_str(key);
        }
    }

    fn write_quoted(&mut self, s: &str) {
        self.output.reserve(s.len() + 2);
        self.output.push(QUOTE as char);
        for ch in s.chars() {
            if ch.is_ascii() && syntax::needs_escape(ch as u8) {
                self.output.push(ESCAPE as char);
            }
            self.output.push(ch);
        }
        self.output.push(QUOTE as char);
    }

    #[inline]
    fn write_item_indent(&mut self, level: usize) {
        if self.options.pretty {
            self.output.push('\n');
            self.output.push_str(&" ".repeat(level * self.options.indent));
        }
    }
}

/// Whether `key-<digits>` would be read back as one number, as with key `1e`.
fn swallows_separator(key: &str) -> bool {
    if !key.as_bytes()[0].is_ascii_digit() {
        return false;
    }
    let candidate = format!("{key}-0");
    syntax::scan_number(candidate.as_bytes(), 0).is_some_and(|end| end > key.len())
}

/// Formats a finite number so that it parses back to the same `f64`.
///
/// Whole numbers are written as integers; everything else takes the shorter
/// of positional and exponent notation.
pub(crate) fn format_number(n: f64) -> Result<String> {
    if !n.is_finite() {
        return Err(EncodeError::NonFiniteNumber.into());
    }
    if n.fract() == 0.0 {
        return Ok(format!("{}", n));
    }
    let positional = format!("{}", n);
    let scientific = format!("{:e}", n);
    Ok(if scientific.len() < positional.len() {
        scientific
    } else {
        positional
    })
}

/// A serde `Serializer` that builds a [`Value`].
///
/// Used by [`crate::to_value`]; `Serialize` types with no XTon counterpart
/// are rejected with an [`EncodeError`].
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
    variant: Option<&'static str>,
}

pub struct SerializeMap {
    map: XtonMap,
    current_key: Option<String>,
    variant: Option<&'static str>,
}

/// Largest magnitude an `f64` holds with every smaller integer also exact.
const EXACT_INTEGER_LIMIT: u64 = 1 << 53;

fn exact_integer<T>(v: T) -> Result<Value>
where
    T: Copy + std::fmt::Display + TryInto<i64>,
{
    match v.try_into() {
        Ok(i) if i.unsigned_abs() <= EXACT_INTEGER_LIMIT => Ok(Value::Number(i as f64)),
        _ => Err(Error::unsupported_type(format!(
            "integer {v} cannot be represented exactly as a number"
        ))),
    }
}

/// Wraps an enum payload as `{variant: payload}`.
fn wrap_variant(variant: &'static str, payload: Value) -> Value {
    let mut map = XtonMap::with_capacity(1);
    map.insert(variant.to_string(), payload);
    Value::Object(map)
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        exact_integer(v)
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        exact_integer(v)
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        exact_integer(v)
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        exact_integer(v)
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(v.iter().map(|&b| Value::from(b)).collect())
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

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(wrap_variant(variant, to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(Some(len), None))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(Some(len), None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec::new(Some(len), Some(variant)))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len, None))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(Some(len), None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeMap> {
        Ok(SerializeMap::new(Some(len), Some(variant)))
    }
}

impl SerializeVec {
    fn new(len: Option<usize>, variant: Option<&'static str>) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(len.unwrap_or(0)),
            variant,
        }
    }

    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn finish(self) -> Value {
        let array = Value::Array(self.vec);
        match self.variant {
            Some(variant) => wrap_variant(variant, array),
            None => array,
        }
    }
}

impl SerializeMap {
    fn new(len: Option<usize>, variant: Option<&'static str>) -> Self {
        SerializeMap {
            map: XtonMap::with_capacity(len.unwrap_or(0)),
            current_key: None,
            variant,
        }
    }

    fn finish(self) -> Value {
        let object = Value::Object(self.map);
        match self.variant {
            Some(variant) => wrap_variant(variant, object),
            None => object,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_value(key)? {
            Value::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(EncodeError::NonStringKey.into()),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}
