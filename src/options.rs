//! Configuration options for TOML decoding and encoding.
//!
//! A single [`TomlOptions`] struct covers both directions; it is read-only
//! from the codec's point of view and supplied by the caller per operation.
//!
//! ## Examples
//!
//! ```rust
//! use toml_tree::{TomlOptions, TomlValue};
//!
//! let options = TomlOptions::new().with_escaped_quotes_in_literal_strings(true);
//! let value = TomlValue::from_literal(r"'it\'s'", 1, &options).unwrap();
//! assert_eq!(value.as_str(), Some("it's"));
//! ```

/// Configuration for the value codec.
///
/// # Examples
///
/// ```rust
/// use toml_tree::TomlOptions;
///
/// let options = TomlOptions::new();
/// assert!(!options.allow_escaped_quotes_in_literal_strings);
/// assert!(!options.allow_multiline_strings);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TomlOptions {
    /// Permits `\'` inside single-quoted (literal) strings.
    ///
    /// This is a deliberate deviation from the TOML specification, which
    /// forbids single quotes in literal strings entirely. When enabled, `\'`
    /// decodes to `'` and a `'` in decoded content re-encodes as `\'`. All
    /// other backslashes in literal strings are always left untouched.
    pub allow_escaped_quotes_in_literal_strings: bool,

    /// Reserved for multiline string output.
    ///
    /// Multiline strings are not yet supported: any multiline write request
    /// for a string kind fails regardless of this flag.
    pub allow_multiline_strings: bool,
}

impl TomlOptions {
    /// Creates the default options (both flags off).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the escaped-single-quote extension for literal
    /// strings.
    #[must_use]
    pub fn with_escaped_quotes_in_literal_strings(mut self, allow: bool) -> Self {
        self.allow_escaped_quotes_in_literal_strings = allow;
        self
    }

    /// Enables or disables multiline string output (currently unsupported).
    #[must_use]
    pub fn with_multiline_strings(mut self, allow: bool) -> Self {
        self.allow_multiline_strings = allow;
        self
    }
}
