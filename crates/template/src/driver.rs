use std::time::Instant;

use serde::{Deserialize, Serialize};
use sqf_common::{MetricsRegistry, Result, SqfError, TemplatizerConfig};
use sqlparser::ast::Statement;

use crate::emitter;
use crate::model::{OpKind, TableRef, Value};
use crate::pool::StatePool;

/// Extraction outputs for one statement of the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementTemplate {
    /// Normalised SQL with literals replaced by `?`.
    pub template: String,
    /// Extracted literals, in placeholder order.
    pub params: Vec<Value>,
    /// Tables referenced, in first-visit order.
    pub tables: Vec<TableRef>,
    /// Top-level verb of the statement.
    pub op: OpKind,
}

/// Shareable extraction engine: parser dialect plus a visitor-state pool.
///
/// One `Templatizer` serves concurrent `extract` calls from many threads;
/// each call is synchronous, CPU-bound, and holds one pooled state
/// exclusively for its duration.
#[derive(Debug)]
pub struct Templatizer {
    pool: StatePool,
    metrics: MetricsRegistry,
}

impl Templatizer {
    /// Engine with default configuration.
    pub fn new() -> Self {
        Self::with_config(TemplatizerConfig::default())
    }

    /// Engine with explicit configuration.
    pub fn with_config(config: TemplatizerConfig) -> Self {
        let metrics = MetricsRegistry::global().clone();
        Self {
            pool: StatePool::new(&config, metrics.clone()),
            metrics,
        }
    }

    /// Templatize one or more `;`-separated statements.
    ///
    /// Contract:
    /// - empty/blank input fails with [`SqfError::EmptySql`];
    /// - parser rejection surfaces as [`SqfError::Parse`];
    /// - a parse yielding zero statements fails with [`SqfError::NoStatements`];
    /// - a failure on statement N aborts the call with
    ///   [`SqfError::Statement`]; no partial results are returned.
    pub fn extract(&self, sql: &str) -> Result<Vec<StatementTemplate>> {
        let started = Instant::now();
        let result = self.extract_inner(sql);
        let outcome = if result.is_ok() { "ok" } else { "error" };
        self.metrics
            .record_extract(outcome, started.elapsed().as_secs_f64());
        result
    }

    fn extract_inner(&self, sql: &str) -> Result<Vec<StatementTemplate>> {
        if sql.trim().is_empty() {
            return Err(SqfError::EmptySql);
        }

        let statements = sqf_sql::parse_statements(sql)?;
        if statements.is_empty() {
            return Err(SqfError::NoStatements);
        }

        let mut results = Vec::with_capacity(statements.len());
        for (index, statement) in statements.iter().enumerate() {
            results.push(self.templatize_one(index, statement)?);
        }
        Ok(results)
    }

    fn templatize_one(&self, index: usize, statement: &Statement) -> Result<StatementTemplate> {
        let op = OpKind::of(statement);
        let mut state = self.pool.acquire();

        emitter::emit_statement(&mut state, statement).map_err(|cause| SqfError::Statement {
            index,
            source: Box::new(cause),
        })?;
        self.metrics.record_statement(op.as_str());

        Ok(StatementTemplate {
            template: state.template().to_string(),
            params: state.params().to_vec(),
            tables: state.tables().to_vec(),
            op,
        })
    }
}

impl Default for Templatizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Join per-statement templates into one `"; "`-separated string.
///
/// Params, tables, and op kinds stay per-statement; only the template text
/// is concatenated.
pub fn joined_template(results: &[StatementTemplate]) -> String {
    results
        .iter()
        .map(|result| result.template.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_inputs_fail_fast() {
        let templatizer = Templatizer::new();
        assert!(matches!(
            templatizer.extract("").unwrap_err(),
            SqfError::EmptySql
        ));
        assert!(matches!(
            templatizer.extract("   \n\t").unwrap_err(),
            SqfError::EmptySql
        ));
    }

    #[test]
    fn semicolons_alone_yield_no_statements() {
        let templatizer = Templatizer::new();
        assert!(matches!(
            templatizer.extract(";;").unwrap_err(),
            SqfError::NoStatements
        ));
    }

    #[test]
    fn statement_errors_carry_their_index() {
        let templatizer = Templatizer::new();
        let err = templatizer
            .extract("SELECT 1; SELECT * FROM t WHERE id = ?")
            .unwrap_err();
        match err {
            SqfError::Statement { index, .. } => assert_eq!(index, 1),
            other => panic!("expected statement error, got {other}"),
        }
    }

    #[test]
    fn joined_template_concatenates_with_semicolons() {
        let templatizer = Templatizer::new();
        let results = templatizer
            .extract("SELECT * FROM users; INSERT INTO logs (action) VALUES ('login')")
            .unwrap();
        assert_eq!(
            joined_template(&results),
            "SELECT * FROM users; INSERT INTO logs (action) VALUES (?)"
        );
    }

    #[test]
    fn extraction_is_deterministic() {
        let templatizer = Templatizer::new();
        let sql = "SELECT * FROM users WHERE name = 'kyden' AND age > 20";
        let first = templatizer.extract(sql).unwrap();
        let second = templatizer.extract(sql).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn statement_template_round_trips_through_serde() {
        let results = Templatizer::new()
            .extract("SELECT * FROM t WHERE a = 1")
            .unwrap();
        let json = serde_json::to_string(&results).unwrap();
        let back: Vec<StatementTemplate> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, results);
    }

    #[test]
    fn dedup_config_collapses_repeated_tables() {
        let templatizer = Templatizer::with_config(TemplatizerConfig {
            dedup_tables: true,
            ..TemplatizerConfig::default()
        });
        let results = templatizer
            .extract("SELECT * FROM t WHERE id IN (SELECT id FROM t)")
            .unwrap();
        assert_eq!(results[0].tables, vec![TableRef::new("", "t")]);
    }
}
