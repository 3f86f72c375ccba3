//! Error types for XTon encoding and decoding.
//!
//! Decoding failures are reported as [`Error::Syntax`], which pairs a
//! [`SyntaxError`] kind with the byte offset (and 1-based line/column) where
//! the decoder stopped. Encoding failures are reported as [`Error::Encode`].
//!
//! ## Examples
//!
//! ```rust
//! use serde_xton::{decode, SyntaxError};
//!
//! let err = decode("<a-1").unwrap_err();
//! assert_eq!(err.syntax_kind(), Some(SyntaxError::UnterminatedObject));
//! assert_eq!(err.offset(), Some(4));
//! ```

use std::fmt;
use thiserror::Error;

/// The kind of a decoding failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum SyntaxError {
    /// No value form matches at this position.
    #[error("invalid value")]
    InvalidValue,

    /// An object key is not followed by `-`.
    #[error("expected '-' after object key")]
    MissingKeySeparator,

    /// Input ended before the closing `>`.
    #[error("unterminated object")]
    UnterminatedObject,

    /// An object entry is followed by something other than `/` or `>`.
    #[error("expected '/' or '>' in object")]
    MalformedObject,

    /// Input ended before the closing `]`.
    #[error("unterminated array")]
    UnterminatedArray,

    /// An array element is followed by something other than `/` or `]`.
    #[error("expected '/' or ']' in array")]
    MalformedArray,

    /// Input ended before the closing `'`.
    #[error("unterminated quoted string")]
    UnterminatedString,

    /// A string is not valid UTF-8.
    #[error("string is not valid UTF-8")]
    InvalidEncoding,

    /// The document is neither a single value nor an implicit `key-value` pair.
    #[error("invalid document")]
    InvalidDocument,

    /// Containers are nested deeper than the configured maximum.
    #[error("nesting depth limit exceeded")]
    DepthLimitExceeded,
}

/// The kind of an encoding failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A map key did not serialize to a string.
    #[error("object keys must be strings")]
    NonStringKey,

    /// The host value has no counterpart in the XTon value model.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// NaN and infinities cannot be written as XTon numbers.
    #[error("non-finite numbers cannot be encoded")]
    NonFiniteNumber,
}

/// Represents all possible errors that can occur during XTon encoding/decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Decoding failed at a known position in the input.
    #[error("{kind} at line {line}, column {column} (byte {offset})")]
    Syntax {
        kind: SyntaxError,
        offset: usize,
        line: usize,
        column: usize,
    },

    /// Encoding failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Custom error raised through serde.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error at `offset`, computing the line and column from `input`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_xton::{Error, SyntaxError};
    ///
    /// let err = Error::syntax(SyntaxError::MalformedArray, b"[1\n/2 3]", 6);
    /// assert!(err.to_string().contains("line 2, column 4"));
    /// ```
    pub fn syntax(kind: SyntaxError, input: &[u8], offset: usize) -> Self {
        let offset = offset.min(input.len());
        let consumed = &input[..offset];
        let line = consumed.iter().filter(|&&b| b == b'\n').count() + 1;
        let line_start = consumed
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        Error::Syntax {
            kind,
            offset,
            line,
            column: offset - line_start + 1,
        }
    }

    /// Creates an unsupported type error.
    pub fn unsupported_type(msg: impl Into<String>) -> Self {
        Error::Encode(EncodeError::UnsupportedType(msg.into()))
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the syntax error kind if this is a decoding error.
    #[must_use]
    pub fn syntax_kind(&self) -> Option<SyntaxError> {
        match self {
            Error::Syntax { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns the encode error kind if this is an encoding error.
    #[must_use]
    pub fn encode_kind(&self) -> Option<&EncodeError> {
        match self {
            Error::Encode(kind) => Some(kind),
            _ => None,
        }
    }

    /// Returns the byte offset of a decoding error.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Syntax { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
