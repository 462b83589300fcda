//! Thin parser adapter: one input string in, MySQL-dialect statement ASTs out.
//!
//! The rest of the workspace consumes [`sqlparser::ast`] nodes directly;
//! this crate only pins the dialect and maps parser diagnostics into the
//! shared error taxonomy.

use sqf_common::{Result, SqfError};
use sqlparser::ast::Statement;
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::Parser;

/// Parse one or more `;`-separated MySQL statements.
///
/// Comments are accepted and discarded by the parser. The parser's own
/// diagnostic is surfaced verbatim inside [`SqfError::Parse`].
pub fn parse_statements(sql: &str) -> Result<Vec<Statement>> {
    let dialect = MySqlDialect {};
    Parser::parse_sql(&dialect, sql).map_err(|e| SqfError::Parse(e.to_string()))
}
