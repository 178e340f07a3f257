//! Table nodes of the document tree and the header-explicitness policy.
//!
//! A [`TomlTable`] represents one table discovered by the external document
//! parser — either a primitive table (`[a.b]`) or one element of an array of
//! tables (`[[a.b]]`). A table created implicitly, only because a deeper
//! dotted path needed an ancestor, is *synthetic*; whether a synthetic table
//! renders its own header on output is decided by [`is_explicit_table`], a
//! pure function of the node's shape, and nothing else.

use indexmap::IndexMap;

use crate::emitter::TomlEmitter;
use crate::error::Result;
use crate::options::TomlOptions;
use crate::value::TomlValue;

/// Distinguishes primitive tables from array-of-tables elements.
///
/// Array-of-tables headers are written with double brackets; the
/// explicitness policy is the same for both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableType {
    Primitive,
    Array,
}

/// One child slot of a table, in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub enum TableChild {
    /// A `key = value` pair.
    Pair { key: String, value: TomlValue },
    /// A nested table.
    Table(TomlTable),
    /// An inline table value: `key = { a = 1, b = 2 }`.
    InlineTable {
        key: String,
        pairs: IndexMap<String, TomlValue>,
    },
    /// Placeholder for a declared table with no content.
    Stub,
}

impl TableChild {
    /// Builds a `key = value` pair child.
    pub fn pair(key: impl Into<String>, value: TomlValue) -> Self {
        TableChild::Pair {
            key: key.into(),
            value,
        }
    }
}

/// One table of the hierarchy.
///
/// Constructed by the external document parser as it walks headers, dotted
/// keys, and array-of-tables markers. A synthetic table may gain children as
/// deeper paths are discovered; after the document is fully parsed the tree
/// is only read.
#[derive(Clone, Debug, PartialEq)]
pub struct TomlTable {
    full_name: String,
    tables_list: Vec<String>,
    ty: TableType,
    synthetic: bool,
    line: usize,
    inline_comment: String,
    children: Vec<TableChild>,
}

impl TomlTable {
    /// Creates a table for the given dotted path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_tree::{TomlTable, TableType};
    ///
    /// let table = TomlTable::new("a.b.c", 1, TableType::Primitive, false);
    /// assert_eq!(table.tables_list(), ["a", "b", "c"]);
    /// ```
    #[must_use]
    pub fn new(full_name: impl Into<String>, line: usize, ty: TableType, synthetic: bool) -> Self {
        let full_name = full_name.into().trim().to_string();
        let tables_list = split_dotted_path(&full_name);
        TomlTable {
            full_name,
            tables_list,
            ty,
            synthetic,
            line,
            inline_comment: String::new(),
            children: Vec::new(),
        }
    }

    /// Attaches a trailing comment rendered after the header token.
    #[must_use]
    pub fn with_inline_comment(mut self, comment: impl Into<String>) -> Self {
        self.inline_comment = comment.into();
        self
    }

    /// Appends a child; used by the document parser while the tree grows.
    pub fn push_child(&mut self, child: TableChild) {
        self.children.push(child);
    }

    /// The full dotted path of this table.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The decomposed path segments.
    #[must_use]
    pub fn tables_list(&self) -> &[String] {
        &self.tables_list
    }

    #[must_use]
    pub fn table_type(&self) -> TableType {
        self.ty
    }

    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }

    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn children(&self) -> &[TableChild] {
        &self.children
    }

    /// Whether this table renders its own header when written.
    #[must_use]
    pub fn is_explicit(&self) -> bool {
        is_explicit_table(self.synthetic, self.children.first(), self.children.len())
    }

    /// Serializes this table and its children.
    ///
    /// An explicit table emits its header token (double-bracketed for
    /// array-of-tables), an optional inline comment, then its children one
    /// indentation level deeper. An implicit table writes its children
    /// directly at the current indentation, each child deciding its own
    /// representation.
    pub fn write(&self, emitter: &mut dyn TomlEmitter, options: &TomlOptions) -> Result<()> {
        if self.is_explicit() {
            emitter.emit_indent();
            emitter.emit_table_header(&self.full_name, self.ty);
            if !self.inline_comment.is_empty() {
                emitter.emit_inline_comment(&self.inline_comment);
            }
            if !matches!(self.children.first(), Some(TableChild::Stub)) {
                emitter.emit_new_line();
            }
            emitter.indent();
            self.write_children(emitter, options)?;
            emitter.dedent();
            Ok(())
        } else {
            self.write_children(emitter, options)
        }
    }

    fn write_children(&self, emitter: &mut dyn TomlEmitter, options: &TomlOptions) -> Result<()> {
        let mut first = true;
        for child in &self.children {
            match child {
                TableChild::Stub => {}
                TableChild::Pair { key, value } => {
                    if !first {
                        emitter.emit_new_line();
                    }
                    emitter.emit_indent();
                    emitter.emit(key);
                    emitter.emit_pair_delimiter();
                    value.write(emitter, options, false)?;
                    first = false;
                }
                TableChild::InlineTable { key, pairs } => {
                    if !first {
                        emitter.emit_new_line();
                    }
                    emitter.emit_indent();
                    emitter.emit(key);
                    emitter.emit_pair_delimiter();
                    emitter.emit("{");
                    for (i, (name, value)) in pairs.iter().enumerate() {
                        if i > 0 {
                            emitter.emit_element_delimiter();
                        }
                        emitter.emit_whitespace();
                        emitter.emit(name);
                        emitter.emit_pair_delimiter();
                        value.write(emitter, options, false)?;
                    }
                    emitter.emit_whitespace();
                    emitter.emit("}");
                    first = false;
                }
                TableChild::Table(table) => {
                    if !first {
                        emitter.emit_new_line();
                    }
                    table.write(emitter, options)?;
                    first = false;
                }
            }
        }
        Ok(())
    }
}

/// The explicitness policy, as a pure function of the node's shape.
///
/// A non-synthetic table always emits its header. A synthetic table emits
/// one only when it is a declared-but-empty table (first child is the
/// [`TableChild::Stub`] placeholder), or when its first child is a pair or
/// inline table *and* it has more than one child — a synthetic table with a
/// single pair exists purely to host a dotted key, and a header would
/// duplicate that key's path. In every other synthetic case the children
/// carry their own path representation.
#[must_use]
pub fn is_explicit_table(
    synthetic: bool,
    first_child: Option<&TableChild>,
    child_count: usize,
) -> bool {
    if !synthetic {
        return true;
    }
    match first_child {
        Some(TableChild::Stub) => true,
        Some(TableChild::Pair { .. }) | Some(TableChild::InlineTable { .. }) => child_count > 1,
        _ => false,
    }
}

/// Splits a dotted table path into segments, ignoring dots inside quoted
/// segments.
fn split_dotted_path(full_name: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut buffer = String::new();
    let mut quote: Option<char> = None;

    for ch in full_name.chars() {
        match ch {
            '"' | '\'' => {
                match quote {
                    Some(open) if open == ch => quote = None,
                    None => quote = Some(ch),
                    Some(_) => {}
                }
                buffer.push(ch);
            }
            '.' if quote.is_none() => {
                segments.push(std::mem::take(&mut buffer).trim().to_string());
            }
            other => buffer.push(other),
        }
    }
    segments.push(buffer.trim().to_string());
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::BufferedEmitter;
    use crate::value::{TomlValue, ValueKind};

    fn int(v: i64) -> TomlValue {
        TomlValue::new(ValueKind::Integer(v), 0)
    }

    fn render(table: &TomlTable) -> String {
        let mut emitter = BufferedEmitter::new();
        table.write(&mut emitter, &TomlOptions::default()).unwrap();
        emitter.into_string()
    }

    #[test]
    fn non_synthetic_is_always_explicit() {
        assert!(is_explicit_table(false, None, 0));
        let pair = TableChild::pair("a", int(1));
        assert!(is_explicit_table(false, Some(&pair), 1));
    }

    #[test]
    fn synthetic_single_pair_is_implicit() {
        let pair = TableChild::pair("a", int(1));
        assert!(!is_explicit_table(true, Some(&pair), 1));
        assert!(is_explicit_table(true, Some(&pair), 2));
    }

    #[test]
    fn synthetic_stub_is_explicit() {
        assert!(is_explicit_table(true, Some(&TableChild::Stub), 1));
    }

    #[test]
    fn synthetic_with_nested_table_first_is_implicit() {
        let nested = TableChild::Table(TomlTable::new("a.b", 0, TableType::Primitive, false));
        assert!(!is_explicit_table(true, Some(&nested), 1));
        assert!(!is_explicit_table(true, Some(&nested), 3));
        assert!(!is_explicit_table(true, None, 0));
    }

    #[test]
    fn inline_table_first_child_follows_pair_rule() {
        let inline = TableChild::InlineTable {
            key: "point".to_string(),
            pairs: IndexMap::new(),
        };
        assert!(!is_explicit_table(true, Some(&inline), 1));
        assert!(is_explicit_table(true, Some(&inline), 2));
    }

    #[test]
    fn splits_dotted_paths() {
        let table = TomlTable::new("a.b.c", 1, TableType::Primitive, false);
        assert_eq!(table.tables_list(), ["a", "b", "c"]);

        let table = TomlTable::new("a.\"b.c\".d", 1, TableType::Primitive, false);
        assert_eq!(table.tables_list(), ["a", "\"b.c\"", "d"]);

        let table = TomlTable::new("a . b", 1, TableType::Primitive, false);
        assert_eq!(table.tables_list(), ["a", "b"]);
    }

    #[test]
    fn explicit_table_renders_header_and_children() {
        let mut table = TomlTable::new("server", 1, TableType::Primitive, false);
        table.push_child(TableChild::pair("port", int(8080)));
        table.push_child(TableChild::pair("workers", int(4)));
        assert_eq!(render(&table), "[server]\n    port = 8080\n    workers = 4");
    }

    #[test]
    fn synthetic_dotted_key_host_renders_without_header() {
        let mut table = TomlTable::new("server", 1, TableType::Primitive, true);
        table.push_child(TableChild::pair("port", int(8080)));
        assert_eq!(render(&table), "port = 8080");
    }

    #[test]
    fn synthetic_with_two_pairs_renders_header() {
        let mut table = TomlTable::new("server", 1, TableType::Primitive, true);
        table.push_child(TableChild::pair("port", int(8080)));
        table.push_child(TableChild::pair("workers", int(4)));
        assert_eq!(render(&table), "[server]\n    port = 8080\n    workers = 4");
    }

    #[test]
    fn empty_declared_table_renders_bare_header() {
        let mut table = TomlTable::new("empty", 1, TableType::Primitive, true);
        table.push_child(TableChild::Stub);
        assert_eq!(render(&table), "[empty]");
    }

    #[test]
    fn array_of_tables_uses_double_brackets() {
        let mut table = TomlTable::new("fruit", 1, TableType::Array, false);
        table.push_child(TableChild::pair("name", int(1)));
        assert_eq!(render(&table), "[[fruit]]\n    name = 1");
    }

    #[test]
    fn inline_comment_follows_header() {
        let mut table = TomlTable::new("server", 1, TableType::Primitive, false)
            .with_inline_comment("main listener");
        table.push_child(TableChild::pair("port", int(8080)));
        assert_eq!(render(&table), "[server] # main listener\n    port = 8080");
    }

    #[test]
    fn nested_tables_render_recursively() {
        let mut inner = TomlTable::new("server.tls", 2, TableType::Primitive, false);
        inner.push_child(TableChild::pair("enabled", int(1)));

        let mut outer = TomlTable::new("server", 1, TableType::Primitive, false);
        outer.push_child(TableChild::pair("port", int(8080)));
        outer.push_child(TableChild::Table(inner));

        assert_eq!(
            render(&outer),
            "[server]\n    port = 8080\n    [server.tls]\n        enabled = 1"
        );
    }

    #[test]
    fn implicit_ancestor_delegates_to_nested_table() {
        let mut inner = TomlTable::new("a.b", 2, TableType::Primitive, false);
        inner.push_child(TableChild::pair("x", int(1)));

        let mut outer = TomlTable::new("a", 1, TableType::Primitive, true);
        outer.push_child(TableChild::Table(inner));

        // The synthetic ancestor emits no header of its own.
        assert_eq!(render(&outer), "[a.b]\n    x = 1");
    }

    #[test]
    fn inline_table_child_renders_braced() {
        let mut pairs = IndexMap::new();
        pairs.insert("x".to_string(), int(1));
        pairs.insert("y".to_string(), int(2));

        let mut table = TomlTable::new("geom", 1, TableType::Primitive, false);
        table.push_child(TableChild::InlineTable {
            key: "point".to_string(),
            pairs,
        });
        assert_eq!(render(&table), "[geom]\n    point = { x = 1, y = 2 }");
    }
}
