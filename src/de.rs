//! XTon deserialization.
//!
//! This module provides the [`Decoder`], a cursor-based recursive-descent
//! parser that turns XTon text into a [`Value`] tree, and the serde
//! `Deserializer` implementation that maps a [`Value`] onto Rust types.
//!
//! ## Value forms
//!
//! At every value position the decoder tries, in order: object `<...>`, array
//! `[...]`, the literal tags `\true`, `\false`, `\none`, a number, a quoted
//! string `'...'` and finally an unquoted string. Earlier forms shadow later
//! ones, so `\true` is a boolean and never an unquoted string.
//!
//! ## Implicit top-level mapping
//!
//! A document may be a bare `key-value` pair without the enclosing `<>`. The
//! unquoted-string form stops at `-`, so such a document first reads as the
//! string `key` followed by leftover text. The document root is therefore
//! parsed in two attempts: a single value covering the whole input, then a
//! single `key-value` pair covering the whole input.
//!
//! ```rust
//! use serde_xton::{decode, xton};
//!
//! assert_eq!(decode("name-'Ann'").unwrap(), xton!({"name": "Ann"}));
//! assert_eq!(decode("[1/2]").unwrap(), xton!([1, 2]));
//! ```

use crate::syntax::{
    self, ARRAY_CLOSE, ARRAY_OPEN, ESCAPE, FALSE_TAG, ITEM_SEPARATOR, KEY_SEPARATOR, NONE_TAG,
    OBJECT_CLOSE, OBJECT_OPEN, QUOTE, TRUE_TAG,
};
use crate::value::integral_i64;
use crate::{Error, Result, SyntaxError, Value, XtonMap, XtonOptions};
use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;
use tracing::{debug, trace};

/// The XTon decoder.
///
/// Holds a read cursor into the input; a decoder is used for one document.
///
/// # Examples
///
/// ```rust
/// use serde_xton::{Decoder, Value};
///
/// let mut decoder = Decoder::from_str("[a/25.3/87] rest");
/// let value = decoder.decode_value().unwrap();
/// assert_eq!(value.as_array().map(Vec::len), Some(3));
/// assert_eq!(decoder.position(), 11);
/// ```
pub struct Decoder<'a> {
    input: &'a [u8],
    position: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder over raw bytes with default options.
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_options(input, &XtonOptions::default())
    }

    /// Creates a decoder over raw bytes.
    pub fn with_options(input: &'a [u8], options: &XtonOptions) -> Self {
        Decoder {
            input,
            position: 0,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Creates a decoder over UTF-8 text with default options.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str) -> Self {
        Self::new(input.as_bytes())
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Decodes a whole document.
    ///
    /// The input must be either one value or one implicit `key-value` pair,
    /// optionally surrounded by whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] when neither reading covers the whole input.
    pub fn decode_document(&mut self) -> Result<Value> {
        self.skip_whitespace();
        let start = self.position;

        let first = self.parse_value();
        if first.is_ok() {
            self.skip_whitespace();
            if self.at_end() {
                return first;
            }
        }
        let stopped_at = match &first {
            Ok(_) => self.position,
            Err(err) => err.offset().unwrap_or(start),
        };

        self.position = start;
        self.depth = 0;
        if let Some(key) = self.implicit_key()? {
            trace!(
                offset = stopped_at,
                key = key.as_str(),
                "reading document as an implicit key-value pair"
            );
            return self.finish_implicit_pair(key);
        }

        match first {
            Ok(_) => Err(self.invalid_document(stopped_at)),
            Err(err)
                if err.syntax_kind() == Some(SyntaxError::InvalidValue)
                    && err.offset() == Some(start) =>
            {
                Err(self.invalid_document(start))
            }
            Err(err) => Err(err),
        }
    }

    /// Decodes one value at the cursor and leaves the cursor right after it.
    ///
    /// Unlike [`Decoder::decode_document`], trailing text is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] if no value can be read at the cursor.
    pub fn decode_value(&mut self) -> Result<Value> {
        self.parse_value()
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(syntax::is_space) {
            self.position += 1;
        }
    }

    fn error(&self, kind: SyntaxError) -> Error {
        Error::syntax(kind, self.input, self.position)
    }

    fn error_at(&self, kind: SyntaxError, offset: usize) -> Error {
        Error::syntax(kind, self.input, offset)
    }

    fn invalid_document(&self, offset: usize) -> Error {
        debug!(offset, "rejecting document");
        self.error_at(SyntaxError::InvalidDocument, offset)
    }

    /// Reads `identifier ws '-'` at the cursor, or returns `None` if the input
    /// does not start that way.
    fn implicit_key(&mut self) -> Result<Option<String>> {
        let Some(key) = self.parse_unquoted_string()? else {
            return Ok(None);
        };
        self.skip_whitespace();
        if self.peek() != Some(KEY_SEPARATOR) {
            return Ok(None);
        }
        self.position += 1;
        Ok(Some(key))
    }

    fn finish_implicit_pair(&mut self, key: String) -> Result<Value> {
        let value = match self.parse_value() {
            Ok(value) => value,
            Err(err) => {
                return Err(self.invalid_document(err.offset().unwrap_or(self.position)));
            }
        };
        self.skip_whitespace();
        if !self.at_end() {
            return Err(self.invalid_document(self.position));
        }

        let mut map = XtonMap::with_capacity(1);
        map.insert(key, value);
        Ok(Value::Object(map))
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            debug!(max_depth = self.max_depth, "nesting depth limit exceeded");
            return Err(self.error(SyntaxError::DepthLimitExceeded));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();

        match self.peek() {
            Some(OBJECT_OPEN) => return self.parse_object(),
            Some(ARRAY_OPEN) => return self.parse_array(),
            _ => {}
        }

        if let Some(literal) = self.parse_literal() {
            return Ok(literal);
        }

        if syntax::starts_number(self.input, self.position) {
            if let Some(n) = self.parse_number() {
                return Ok(Value::Number(n));
            }
        }

        if self.peek() == Some(QUOTE) {
            return self.parse_quoted_string().map(Value::String);
        }

        match self.parse_unquoted_string()? {
            Some(s) => Ok(Value::String(s)),
            None => Err(self.error(SyntaxError::InvalidValue)),
        }
    }

    fn parse_literal(&mut self) -> Option<Value> {
        let rest = &self.input[self.position..];
        let (tag, value) = if rest.starts_with(TRUE_TAG.as_bytes()) {
            (TRUE_TAG, Value::Bool(true))
        } else if rest.starts_with(FALSE_TAG.as_bytes()) {
            (FALSE_TAG, Value::Bool(false))
        } else if rest.starts_with(NONE_TAG.as_bytes()) {
            (NONE_TAG, Value::Null)
        } else {
            return None;
        };
        self.position += tag.len();
        Some(value)
    }

    fn parse_number(&mut self) -> Option<f64> {
        let end = syntax::scan_number(self.input, self.position)?;
        let text = std::str::from_utf8(&self.input[self.position..end]).ok()?;
        let n = text.parse::<f64>().ok()?;
        self.position = end;
        Some(n)
    }

    fn parse_quoted_string(&mut self) -> Result<String> {
        let start = self.position;
        self.position += 1; // opening quote

        let mut bytes = Vec::new();
        loop {
            match self.peek() {
                Some(QUOTE) => {
                    self.position += 1;
                    break;
                }
                // Every escape stands for the byte after the backslash, whether
                // or not that byte is one of the escapable delimiters.
                Some(ESCAPE) => match self.input.get(self.position + 1) {
                    Some(&escaped) => {
                        bytes.push(escaped);
                        self.position += 2;
                    }
                    None => return Err(self.error_at(SyntaxError::UnterminatedString, start)),
                },
                Some(b) => {
                    bytes.push(b);
                    self.position += 1;
                }
                None => return Err(self.error_at(SyntaxError::UnterminatedString, start)),
            }
        }

        String::from_utf8(bytes).map_err(|_| self.error_at(SyntaxError::InvalidEncoding, start))
    }

    fn parse_unquoted_string(&mut self) -> Result<Option<String>> {
        let start = self.position;
        while self.peek().is_some_and(|b| !syntax::is_delimiter(b)) {
            self.position += 1;
        }
        if self.position == start {
            return Ok(None);
        }

        std::str::from_utf8(&self.input[start..self.position])
            .map(|s| Some(s.to_string()))
            .map_err(|_| self.error_at(SyntaxError::InvalidEncoding, start))
    }

    fn parse_key(&mut self) -> Result<String> {
        if self.peek() == Some(QUOTE) {
            return self.parse_quoted_string();
        }
        match self.parse_unquoted_string()? {
            Some(key) => Ok(key),
            None => Err(self.error(SyntaxError::InvalidValue)),
        }
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter()?;
        self.position += 1; // '<'

        let mut map = XtonMap::new();
        self.skip_whitespace();
        if self.peek() == Some(OBJECT_CLOSE) {
            self.position += 1;
            self.leave();
            return Ok(Value::Object(map));
        }

        loop {
            if self.at_end() {
                return Err(self.error(SyntaxError::UnterminatedObject));
            }
            let key = self.parse_key()?;

            self.skip_whitespace();
            match self.peek() {
                Some(KEY_SEPARATOR) => self.position += 1,
                Some(_) => return Err(self.error(SyntaxError::MissingKeySeparator)),
                None => return Err(self.error(SyntaxError::UnterminatedObject)),
            }

            self.skip_whitespace();
            if self.at_end() {
                return Err(self.error(SyntaxError::UnterminatedObject));
            }
            let value = self.parse_value()?;
            map.insert(key, value);

            self.skip_whitespace();
            match self.peek() {
                Some(OBJECT_CLOSE) => {
                    self.position += 1;
                    break;
                }
                Some(ITEM_SEPARATOR) => {
                    self.position += 1;
                    self.skip_whitespace();
                }
                Some(_) => return Err(self.error(SyntaxError::MalformedObject)),
                None => return Err(self.error(SyntaxError::UnterminatedObject)),
            }
        }

        self.leave();
        Ok(Value::Object(map))
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter()?;
        self.position += 1; // '['

        let mut elements = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(ARRAY_CLOSE) {
            self.position += 1;
            self.leave();
            return Ok(Value::Array(elements));
        }

        loop {
            if self.at_end() {
                return Err(self.error(SyntaxError::UnterminatedArray));
            }
            elements.push(self.parse_value()?);

            self.skip_whitespace();
            match self.peek() {
                Some(ARRAY_CLOSE) => {
                    self.position += 1;
                    break;
                }
                Some(ITEM_SEPARATOR) => {
                    self.position += 1;
                    self.skip_whitespace();
                }
                Some(_) => return Err(self.error(SyntaxError::MalformedArray)),
                None => return Err(self.error(SyntaxError::UnterminatedArray)),
            }
        }

        self.leave();
        Ok(Value::Array(elements))
    }
}

impl<'de> de::Deserializer<'de> for Value {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(n) => match integral_i64(n) {
                Some(i) if !(i == 0 && n.is_sign_negative()) => visitor.visit_i64(i),
                _ => visitor.visit_f64(n),
            },
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            Value::Null => visitor.visit_none(),
            other => visitor.visit_some(other),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Object(obj) if obj.len() == 1 => match obj.into_iter().next() {
                Some((variant, value)) => visitor.visit_enum(EnumDeserializer::new(variant, value)),
                None => Err(Error::custom("expected an object with a single variant key")),
            },
            Value::Object(_) => Err(Error::custom(
                "expected an object with a single variant key",
            )),
            other => Err(Error::custom(format!(
                "expected enum, found {}",
                other.type_name()
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(value).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: XtonMap) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(Value::String(key)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(value),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Value,
}

impl EnumDeserializer {
    fn new(variant: String, value: Value) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(Value::String(self.variant))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Value,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Value::Null => Ok(()),
            _ => Err(Error::custom("expected unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(self.value)
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            _ => Err(Error::custom("expected tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
            _ => Err(Error::custom("expected struct variant")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xton;

    fn document(input: &str) -> Result<Value> {
        Decoder::from_str(input).decode_document()
    }

    fn kind(input: &str) -> Option<SyntaxError> {
        document(input).unwrap_err().syntax_kind()
    }

    #[test]
    fn test_literals_shadow_unquoted_strings() {
        assert_eq!(document("\\true").unwrap(), Value::Bool(true));
        assert_eq!(document("\\false").unwrap(), Value::Bool(false));
        assert_eq!(document("\\none").unwrap(), Value::Null);
        assert_eq!(document("true").unwrap(), Value::from("true"));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(document("123").unwrap(), Value::Number(123.0));
        assert_eq!(document("-67.89").unwrap(), Value::Number(-67.89));
        assert_eq!(document("1e3").unwrap(), Value::Number(1000.0));
        assert_eq!(document("1e999").unwrap(), Value::Number(f64::INFINITY));
        assert_eq!(document("[1.]").unwrap(), xton!([1.0]));
    }

    #[test]
    fn test_quoted_string_escapes() {
        assert_eq!(document("'a\\-b'").unwrap(), Value::from("a-b"));
        assert_eq!(document("'\\<\\>\\[\\]\\/'").unwrap(), Value::from("<>[]/"));
        assert_eq!(document("'it\\'s'").unwrap(), Value::from("it's"));
        assert_eq!(document("'back\\\\slash'").unwrap(), Value::from("back\\slash"));
        assert_eq!(document("'\\q'").unwrap(), Value::from("q"));
        assert_eq!(document("'  spaced  '").unwrap(), Value::from("  spaced  "));
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(kind("'abc"), Some(SyntaxError::UnterminatedString));
        assert_eq!(kind("'abc\\"), Some(SyntaxError::UnterminatedString));
        assert_eq!(kind("['abc"), Some(SyntaxError::UnterminatedString));
    }

    #[test]
    fn test_invalid_encoding() {
        let err = Decoder::new(b"'\xff\xfe'").decode_document().unwrap_err();
        assert_eq!(err.syntax_kind(), Some(SyntaxError::InvalidEncoding));
        assert_eq!(err.offset(), Some(0));

        let err = Decoder::new(b"[ok/\xc3]").decode_document().unwrap_err();
        assert_eq!(err.syntax_kind(), Some(SyntaxError::InvalidEncoding));
        assert_eq!(err.offset(), Some(4));
    }

    #[test]
    fn test_whitespace_around_tokens() {
        let value = document(" < a - 1 / 'b c' - [ x / y ] > ").unwrap();
        assert_eq!(value, xton!({"a": 1, "b c": ["x", "y"]}));
    }

    #[test]
    fn test_object_errors() {
        assert_eq!(kind("<a-1"), Some(SyntaxError::UnterminatedObject));
        assert_eq!(kind("<a-1/"), Some(SyntaxError::UnterminatedObject));
        assert_eq!(kind("<a"), Some(SyntaxError::UnterminatedObject));
        assert_eq!(kind("<a-"), Some(SyntaxError::UnterminatedObject));
        assert_eq!(kind("<"), Some(SyntaxError::UnterminatedObject));
        assert_eq!(kind("<a 1>"), Some(SyntaxError::MissingKeySeparator));
        assert_eq!(kind("<a-1 b-2>"), Some(SyntaxError::MalformedObject));
        assert_eq!(kind("<a-1/>"), Some(SyntaxError::InvalidValue));
    }

    #[test]
    fn test_array_errors() {
        assert_eq!(kind("[1/2"), Some(SyntaxError::UnterminatedArray));
        assert_eq!(kind("["), Some(SyntaxError::UnterminatedArray));
        assert_eq!(kind("[1/"), Some(SyntaxError::UnterminatedArray));
        assert_eq!(kind("[1 2]"), Some(SyntaxError::MalformedArray));
        assert_eq!(kind("[a-1]"), Some(SyntaxError::MalformedArray));
        assert_eq!(kind("[1/]"), Some(SyntaxError::InvalidValue));
    }

    #[test]
    fn test_error_offsets() {
        let err = document("[a-1]").unwrap_err();
        assert_eq!(err.offset(), Some(2));

        let err = document("<a-1").unwrap_err();
        assert_eq!(err.offset(), Some(4));
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let value = document("<a-1/b-2/a-3>").unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.get("a"), Some(&Value::Number(3.0)));
        assert_eq!(obj.keys().next().map(String::as_str), Some("a"));
    }

    #[test]
    fn test_implicit_top_level_pair() {
        assert_eq!(document("x-1").unwrap(), xton!({"x": 1}));
        assert_eq!(document(" name - 'Ann' ").unwrap(), xton!({"name": "Ann"}));
        assert_eq!(document("1-2").unwrap(), xton!({"1": 2}));
    }

    #[test]
    fn test_invalid_document() {
        assert_eq!(kind(""), Some(SyntaxError::InvalidDocument));
        assert_eq!(kind("   "), Some(SyntaxError::InvalidDocument));
        assert_eq!(kind(">"), Some(SyntaxError::InvalidDocument));
        assert_eq!(kind("a b"), Some(SyntaxError::InvalidDocument));
        assert_eq!(kind("x-1 2"), Some(SyntaxError::InvalidDocument));
        assert_eq!(kind("x-"), Some(SyntaxError::InvalidDocument));
        assert_eq!(kind("[1] [2]"), Some(SyntaxError::InvalidDocument));

        let err = document("x-1 2").unwrap_err();
        assert_eq!(err.offset(), Some(4));
    }

    #[test]
    fn test_depth_limit() {
        let options = XtonOptions::new().with_max_depth(2);
        let ok = Decoder::with_options(b"[[1]]", &options).decode_document();
        assert!(ok.is_ok());

        let err = Decoder::with_options(b"[[[1]]]", &options)
            .decode_document()
            .unwrap_err();
        assert_eq!(err.syntax_kind(), Some(SyntaxError::DepthLimitExceeded));
        assert_eq!(err.offset(), Some(2));

        let deep = "[".repeat(10_000);
        assert_eq!(kind(&deep), Some(SyntaxError::DepthLimitExceeded));
    }

    #[test]
    fn test_decode_value_leaves_cursor() {
        let mut decoder = Decoder::from_str("abc-1");
        assert_eq!(decoder.decode_value().unwrap(), Value::from("abc"));
        assert_eq!(decoder.position(), 3);
    }

    #[test]
    fn test_deserialize_from_value() {
        let value = xton!({"id": 7, "tags": ["a", "b"], "score": 2.5, "note": null});

        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Item {
            id: u32,
            tags: Vec<String>,
            score: f64,
            note: Option<String>,
        }

        let item: Item = serde::Deserialize::deserialize(value).unwrap();
        assert_eq!(
            item,
            Item {
                id: 7,
                tags: vec!["a".to_string(), "b".to_string()],
                score: 2.5,
                note: None,
            }
        );
    }
}
