//! # serde_xton
//!
//! A codec for the XTon text format, with a Serde front-end.
//!
//! ## What is XTon?
//!
//! XTon is a compact data notation with the same value model as JSON (null,
//! booleans, numbers, strings, arrays and objects) but different punctuation:
//!
//! | JSON | XTon |
//! |---|---|
//! | `{"a": 1, "b": 2}` | `<a-1/b-2>` |
//! | `[1, "x", null]` | `[1/x/\none]` |
//! | `true` / `false` | `\true` / `\false` |
//! | `"text with spaces"` | `'text with spaces'` |
//!
//! Strings that contain no delimiter may be written without quotes, and a
//! document holding a single-entry object may drop the enclosing `<>`
//! entirely: `name-'Ann'`.
//!
//! ## Key Features
//!
//! - **Dynamic values**: [`decode`] and [`encode`] work on the [`Value`] tree
//! - **Serde Compatible**: any `Serialize`/`Deserialize` type through
//!   [`to_string`] and [`from_str`]
//! - **Positioned errors**: every decoding error carries a byte offset plus
//!   line and column
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_xton::{decode, encode, xton};
//!
//! let value = decode("q-<a-\\none/k-\\true/g-[a/25.3/87]>").unwrap();
//! assert_eq!(
//!     value,
//!     xton!({"q": {"a": null, "k": true, "g": ["a", 25.3, 87]}})
//! );
//!
//! assert_eq!(encode(&value).unwrap(), "q-<a-\\none/k-\\true/g-[a/25.3/87]>");
//! ```
//!
//! ### Serde
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_xton::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "<id-123/name-'Alice'/active-\\true>");
//!
//! let user_back: User = from_str(&text).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events at `trace` and `debug` level (implicit
//! top-level pairs, rejected documents, depth limit hits). It never installs a
//! subscriber.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - decoding and encoding documents
//! - **`macro.rs`** - building values with the `xton!` macro
//! - **`dynamic_values.rs`** - inspecting `Value` trees
//! - **`custom_options.rs`** - pretty output, collapse and depth options
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
mod syntax;
pub mod value;

pub use de::Decoder;
pub use error::{EncodeError, Error, Result, SyntaxError};
pub use map::XtonMap;
pub use options::XtonOptions;
pub use ser::{Encoder, ValueSerializer};
pub use value::Value;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Decode an XTon document into a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_xton::{decode, xton};
///
/// assert_eq!(decode("[a/25.3/87]").unwrap(), xton!(["a", 25.3, 87]));
/// assert_eq!(decode("key-'value'").unwrap(), xton!({"key": "value"}));
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the text is not a valid XTon document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode(text: &str) -> Result<Value> {
    decode_with_options(text, &XtonOptions::default())
}

/// Decode an XTon document given as raw bytes.
///
/// Strings are validated as UTF-8 as they are read.
///
/// # Examples
///
/// ```rust
/// use serde_xton::{decode_slice, SyntaxError};
///
/// assert!(decode_slice(b"<a-1>").is_ok());
///
/// let err = decode_slice(b"'\xff'").unwrap_err();
/// assert_eq!(err.syntax_kind(), Some(SyntaxError::InvalidEncoding));
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the bytes are not a valid XTon document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_slice(bytes: &[u8]) -> Result<Value> {
    Decoder::new(bytes).decode_document()
}

/// Decode an XTon document with custom options.
///
/// # Errors
///
/// Returns [`Error::Syntax`] if the text is not a valid XTon document or is
/// nested deeper than `options.max_depth`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_with_options(text: &str, options: &XtonOptions) -> Result<Value> {
    Decoder::with_options(text.as_bytes(), options).decode_document()
}

/// Encode a [`Value`] as compact XTon text.
///
/// # Examples
///
/// ```rust
/// use serde_xton::{encode, xton};
///
/// assert_eq!(encode(&xton!([true, "hello", null])).unwrap(), "[\\true/hello/\\none]");
/// assert_eq!(encode(&xton!("23.5")).unwrap(), "'23.5'");
/// ```
///
/// # Errors
///
/// Returns [`EncodeError::NonFiniteNumber`] if the tree holds NaN or an infinity.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode(value: &Value) -> Result<String> {
    encode_with_options(value, &XtonOptions::default())
}

/// Encode a [`Value`] with one container item per line.
///
/// # Errors
///
/// Returns [`EncodeError::NonFiniteNumber`] if the tree holds NaN or an infinity.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_pretty(value: &Value) -> Result<String> {
    encode_with_options(value, &XtonOptions::pretty())
}

/// Encode a [`Value`] with custom options.
///
/// # Errors
///
/// Returns [`EncodeError::NonFiniteNumber`] if the tree holds NaN or an infinity.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_with_options(value: &Value, options: &XtonOptions) -> Result<String> {
    let mut encoder = Encoder::new(options.clone());
    encoder.encode(value)?;
    Ok(encoder.into_inner())
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_xton::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns [`Error::Encode`] for map keys that are not strings and for
/// integers beyond 2^53 in magnitude.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to an XTon string.
///
/// # Examples
///
/// ```rust
/// use serde_xton::to_string;
///
/// assert_eq!(to_string(&vec![1, 2, 3]).unwrap(), "[1/2/3]");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented in XTon.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &XtonOptions::default())
}

/// Serialize any `T: Serialize` to a pretty-printed XTon string.
///
/// # Errors
///
/// Returns an error if the value cannot be represented in XTon.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &XtonOptions::pretty())
}

/// Serialize any `T: Serialize` to an XTon string with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be represented in XTon.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &XtonOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    encode_with_options(&to_value(value)?, options)
}

/// Interpret a [`Value`] as an instance of type `T`.
///
/// # Examples
///
/// ```rust
/// use serde_xton::{from_value, xton};
///
/// let pair: (String, f64) = from_value(xton!(["half", 0.5])).unwrap();
/// assert_eq!(pair, ("half".to_string(), 0.5));
/// ```
///
/// # Errors
///
/// Returns [`Error::Custom`] if the value does not match the shape of `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(value)
}

/// Deserialize an instance of type `T` from a string of XTon text.
///
/// # Examples
///
/// ```rust
/// use serde_xton::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("<x-1/y-2>").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid XTon or cannot be deserialized
/// to type `T`. Syntax errors include line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(decode(s)?)
}

/// Deserialize an instance of type `T` from bytes of XTon text.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid XTon document or cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(decode_slice(v)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    fn alice() -> User {
        User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        }
    }

    #[test]
    fn test_serialize_deserialize_point() {
        let point = Point { x: 1, y: 2 };
        let text = to_string(&point).unwrap();
        assert_eq!(text, "<x-1/y-2>");
        let point_back: Point = from_str(&text).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_serialize_deserialize_user() {
        let text = to_string(&alice()).unwrap();
        assert_eq!(
            text,
            "<id-123/name-'Alice'/active-\\true/tags-[admin/user]>"
        );
        let user_back: User = from_str(&text).unwrap();
        assert_eq!(alice(), user_back);
    }

    #[test]
    fn test_pretty_printing() {
        let text = to_string_pretty(&alice()).unwrap();
        assert!(text.contains('\n'));
        let user_back: User = from_str(&text).unwrap();
        assert_eq!(alice(), user_back);
    }

    #[test]
    fn test_to_value() {
        let value = to_value(&Point { x: 1, y: 2 }).unwrap();

        match value {
            Value::Object(obj) => {
                assert_eq!(obj.get("x"), Some(&Value::Number(1.0)));
                assert_eq!(obj.get("y"), Some(&Value::Number(2.0)));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_arrays() {
        let numbers = vec![1, 2, 3, 4, 5];
        let text = to_string(&numbers).unwrap();
        let numbers_back: Vec<i32> = from_str(&text).unwrap();
        assert_eq!(numbers, numbers_back);
    }

    #[test]
    fn test_custom_options() {
        let options = XtonOptions::pretty().with_indent(4);
        let text = to_string_with_options(&alice(), &options).unwrap();
        assert!(text.contains("\n    id-123/"));
        let user_back: User = from_str(&text).unwrap();
        assert_eq!(alice(), user_back);
    }

    #[test]
    fn test_from_slice() {
        let point: Point = from_slice(b" <x-3/y-4> ").unwrap();
        assert_eq!(point, Point { x: 3, y: 4 });
    }

    #[test]
    fn test_decode_with_options_depth() {
        let options = XtonOptions::new().with_max_depth(1);
        assert!(decode_with_options("[1]", &options).is_ok());
        let err = decode_with_options("[[1]]", &options).unwrap_err();
        assert_eq!(err.syntax_kind(), Some(SyntaxError::DepthLimitExceeded));
    }
}
