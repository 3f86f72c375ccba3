//! Configuration options for XTon encoding and decoding.
//!
//! ## Examples
//!
//! ```rust
//! use serde_xton::{encode_with_options, xton, XtonOptions};
//!
//! let value = xton!({"port": 8080});
//!
//! // Keep the enclosing `<>` even for a single entry
//! let options = XtonOptions::new().with_collapse_top_level(false);
//! assert_eq!(encode_with_options(&value, &options).unwrap(), "<port-8080>");
//! ```

/// Default maximum nesting depth accepted by the decoder.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for XTon encoding and decoding.
///
/// # Examples
///
/// ```rust
/// use serde_xton::XtonOptions;
///
/// // Default compact options
/// let options = XtonOptions::new();
///
/// // Pretty-printed with 4-space indentation
/// let options = XtonOptions::pretty().with_indent(4);
///
/// // Reject documents nested more than 16 levels deep
/// let options = XtonOptions::new().with_max_depth(16);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XtonOptions {
    /// Number of spaces per nesting level in pretty mode.
    pub indent: usize,
    /// Put each container item on its own line.
    pub pretty: bool,
    /// Write a single-entry root object as a bare `key-value` pair when its key
    /// needs no quoting.
    pub collapse_top_level: bool,
    /// Maximum container nesting accepted by the decoder.
    pub max_depth: usize,
}

impl Default for XtonOptions {
    fn default() -> Self {
        XtonOptions {
            indent: 2,
            pretty: false,
            collapse_top_level: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl XtonOptions {
    /// Creates default options (compact output, top-level collapse enabled).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_xton::XtonOptions;
    ///
    /// let options = XtonOptions::new();
    /// assert_eq!(options.indent, 2);
    /// assert!(!options.pretty);
    /// assert!(options.collapse_top_level);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for pretty-printed output with newlines and indentation.
    #[must_use]
    pub fn pretty() -> Self {
        XtonOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Enables or disables the bare `key-value` form for single-entry root objects.
    #[must_use]
    pub fn with_collapse_top_level(mut self, collapse: bool) -> Self {
        self.collapse_top_level = collapse;
        self
    }

    /// Sets the maximum container nesting depth accepted by the decoder.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
