//! The abstract output sink the write path targets.
//!
//! [`TomlEmitter`] exposes the primitive operations (emit a fragment, track
//! indentation) and layers the TOML-specific vocabulary on top of them as
//! provided methods. Value and table nodes only ever talk to this trait;
//! [`BufferedEmitter`] is the plain in-memory implementation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::table::TableType;

const INDENT_UNIT: &str = "    ";

/// The sink of primitive write operations.
///
/// Implementors supply fragment output and an indentation counter; every
/// TOML token the tree needs is derived from those.
pub trait TomlEmitter {
    /// Appends a raw fragment to the output.
    fn emit(&mut self, fragment: &str);

    /// Increases the indentation depth, returning the new depth.
    fn indent(&mut self) -> usize;

    /// Decreases the indentation depth, returning the new depth.
    fn dedent(&mut self) -> usize;

    /// Returns the current indentation depth.
    fn indent_depth(&self) -> usize;

    /// Emits the indentation prefix for the current depth.
    fn emit_indent(&mut self) {
        for _ in 0..self.indent_depth() {
            self.emit(INDENT_UNIT);
        }
    }

    fn emit_new_line(&mut self) {
        self.emit("\n");
    }

    fn emit_whitespace(&mut self) {
        self.emit(" ");
    }

    /// Emits the delimiter between array elements.
    fn emit_element_delimiter(&mut self) {
        self.emit(",");
    }

    /// Emits the delimiter between a key and its value.
    fn emit_pair_delimiter(&mut self) {
        self.emit(" = ");
    }

    fn start_array(&mut self) {
        self.emit("[");
    }

    fn end_array(&mut self) {
        self.emit("]");
    }

    /// Emits already-escaped string content wrapped in the quote character
    /// of its kind (`'` for literal strings, `"` for basic strings).
    fn emit_quoted_value(&mut self, content: &str, literal: bool) {
        let quote = if literal { "'" } else { "\"" };
        self.emit(quote);
        self.emit(content);
        self.emit(quote);
    }

    fn emit_integer(&mut self, value: i64) {
        self.emit(&value.to_string());
    }

    /// Emits a float, keeping a decimal point for finite whole values so the
    /// literal re-parses as a float.
    fn emit_float(&mut self, value: f64) {
        if value.is_finite() && value.fract() == 0.0 {
            self.emit(&format!("{value:.1}"));
        } else {
            self.emit(&value.to_string());
        }
    }

    fn emit_boolean(&mut self, value: bool) {
        self.emit(if value { "true" } else { "false" });
    }

    fn emit_null(&mut self) {
        self.emit("null");
    }

    fn emit_offset_date_time(&mut self, instant: &DateTime<Utc>) {
        self.emit(&instant.to_rfc3339_opts(SecondsFormat::AutoSi, true));
    }

    fn emit_local_date_time(&mut self, local: &NaiveDateTime) {
        self.emit(&local.format("%Y-%m-%dT%H:%M:%S%.f").to_string());
    }

    fn emit_local_date(&mut self, date: &NaiveDate) {
        self.emit(&date.format("%Y-%m-%d").to_string());
    }

    /// Emits a table header token: `[name]` for primitive tables and
    /// `[[name]]` for array-of-tables elements.
    fn emit_table_header(&mut self, name: &str, kind: TableType) {
        match kind {
            TableType::Primitive => {
                self.emit("[");
                self.emit(name);
                self.emit("]");
            }
            TableType::Array => {
                self.emit("[[");
                self.emit(name);
                self.emit("]]");
            }
        }
    }

    /// Emits a trailing inline comment on the current line.
    fn emit_inline_comment(&mut self, comment: &str) {
        self.emit(" # ");
        self.emit(comment);
    }
}

/// A [`TomlEmitter`] that collects output into a `String`.
///
/// # Examples
///
/// ```rust
/// use toml_tree::{BufferedEmitter, TomlEmitter};
///
/// let mut emitter = BufferedEmitter::new();
/// emitter.emit_integer(42);
/// assert_eq!(emitter.into_string(), "42");
/// ```
#[derive(Debug, Default)]
pub struct BufferedEmitter {
    out: String,
    depth: usize,
}

impl BufferedEmitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accumulated output.
    #[must_use]
    pub fn into_string(self) -> String {
        self.out
    }

    /// Borrows the accumulated output.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.out
    }
}

impl TomlEmitter for BufferedEmitter {
    fn emit(&mut self, fragment: &str) {
        self.out.push_str(fragment);
    }

    fn indent(&mut self) -> usize {
        self.depth += 1;
        self.depth
    }

    fn dedent(&mut self) -> usize {
        self.depth = self.depth.saturating_sub(1);
        self.depth
    }

    fn indent_depth(&self) -> usize {
        self.depth
    }
}
