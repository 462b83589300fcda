use thiserror::Error;

/// Canonical SQF error taxonomy used across crates.
///
/// Classification guidance:
/// - [`SqfError::EmptySql`]: caller handed over an empty or blank input
/// - [`SqfError::Parse`]: the SQL parser rejected the input outright
/// - [`SqfError::NoStatements`]: parse succeeded but yielded nothing to templatize
/// - [`SqfError::Statement`]: templatizing one statement of a batch failed
/// - [`SqfError::Unsupported`]: syntactically valid input the templatizer refuses
#[derive(Debug, Error)]
pub enum SqfError {
    /// Input string was empty or whitespace-only.
    #[error("empty SQL statement")]
    EmptySql,

    /// Parser rejected the input; carries the parser diagnostic verbatim.
    #[error("parse error: {0}")]
    Parse(String),

    /// Parse succeeded but produced zero statements (for example `;;`).
    #[error("no valid SQL statements found")]
    NoStatements,

    /// Templatizing the statement at `index` (zero-based) failed.
    ///
    /// Any statement failure aborts the whole extraction; no partial
    /// results are surfaced.
    #[error("error processing statement {}: {source}", .index + 1)]
    Statement {
        /// Zero-based position of the failing statement in the input.
        index: usize,
        /// Underlying failure.
        source: Box<SqfError>,
    },

    /// Valid SQL the templatizer intentionally refuses to process.
    ///
    /// Examples:
    /// - input that already contains `?` parameter markers
    #[error("unsupported: {0}")]
    Unsupported(String),
}

/// Standard SQF result alias.
pub type Result<T> = std::result::Result<T, SqfError>;
