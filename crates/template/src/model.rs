use std::fmt;

use serde::{Deserialize, Serialize};
use sqlparser::ast::Statement;

/// Top-level SQL verb of one statement.
///
/// Classified from the statement root only; never derived from template
/// text. `EXPLAIN <anything>` classifies as [`OpKind::Explain`] regardless
/// of the wrapped statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpKind {
    /// `SELECT` queries.
    Select,
    /// `INSERT` statements, including `INSERT ... SELECT`.
    Insert,
    /// `UPDATE` statements.
    Update,
    /// `DELETE` statements.
    Delete,
    /// `EXPLAIN` wrapping any statement.
    Explain,
    /// Any statement kind without a dedicated classification.
    Unknown,
}

impl OpKind {
    /// Classify a parsed statement root.
    pub fn of(statement: &Statement) -> Self {
        match statement {
            Statement::Query(_) => Self::Select,
            Statement::Insert(_) => Self::Insert,
            Statement::Update { .. } => Self::Update,
            Statement::Delete(_) => Self::Delete,
            Statement::Explain { .. } => Self::Explain,
            _ => Self::Unknown,
        }
    }

    /// Uppercase SQL verb.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Explain => "EXPLAIN",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One table mentioned by a statement.
///
/// `schema` is empty for unqualified references. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableRef {
    /// Schema (database) qualifier; may be empty.
    pub schema: String,
    /// Table name.
    pub name: String,
}

impl TableRef {
    /// Build a reference from a schema qualifier and a table name.
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
        }
    }

    /// `"schema.name"` when the schema is non-empty, else `"name"`.
    pub fn qualified(&self) -> String {
        if self.schema.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.schema, self.name)
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.schema.is_empty() {
            write!(f, "{}.", self.schema)?;
        }
        f.write_str(&self.name)
    }
}

/// A literal extracted from the source SQL, in placeholder order.
///
/// Boolean literals are normalised to `Int64(0|1)` at extraction time, so
/// there is no boolean variant. Fixed-point numerics are kept string-exact
/// rather than rounded through a float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Signed 64-bit integer literal (also `true`/`false` as 1/0).
    Int64(i64),
    /// Unsigned 64-bit integer literal beyond the `i64` range.
    UInt64(u64),
    /// Float literal written in exponent notation.
    Float64(f64),
    /// Arbitrary-precision fixed-point literal, source-exact.
    Decimal(String),
    /// String literal (single- or double-quoted).
    Str(String),
    /// Hex/binary literal (`X'...'`), digits as written.
    Hex(String),
    /// Typed date/time literal (`DATE '...'`, `TIMESTAMP '...'`).
    DateTime(String),
    /// `NULL`.
    Null,
}
