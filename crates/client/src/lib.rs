//! Public extraction facade for SQF.
//!
//! [`Extractor`] holds one raw SQL string plus the outputs of its last
//! successful extraction, and delegates the actual work to the shared
//! [`Templatizer`] engine. Template hashing for cache keys lives here too:
//! SHA-256 lowercase hex by default, with an injectable digest override.

use std::sync::Arc;

use sha2::{Digest, Sha256};
use sqf_common::Result;
use sqf_template::{joined_template, OpKind, TableRef, Templatizer, Value};

pub use sqf_common::{SqfError, TemplatizerConfig};
pub use sqf_template::StatementTemplate;

/// Facade over one raw SQL string and its extraction outputs.
///
/// Accessors reflect the last successful [`Extractor::extract`] call; a
/// failed call leaves them untouched (empty if none ever succeeded).
#[derive(Debug, Clone)]
pub struct Extractor {
    raw_sql: String,
    templatizer: Arc<Templatizer>,
    templates: Vec<String>,
    params: Vec<Vec<Value>>,
    table_infos: Vec<Vec<TableRef>>,
    op_types: Vec<OpKind>,
}

impl Extractor {
    /// Facade over `sql` with a dedicated engine.
    pub fn new(sql: impl Into<String>) -> Self {
        Self::with_templatizer(sql, Arc::new(Templatizer::new()))
    }

    /// Facade over `sql` sharing an existing engine.
    ///
    /// Useful when many extractors run concurrently: the engine's visitor
    /// pool is shared instead of duplicated.
    pub fn with_templatizer(sql: impl Into<String>, templatizer: Arc<Templatizer>) -> Self {
        Self {
            raw_sql: sql.into(),
            templatizer,
            templates: Vec::new(),
            params: Vec::new(),
            table_infos: Vec::new(),
            op_types: Vec::new(),
        }
    }

    /// The raw SQL to be extracted.
    pub fn raw_sql(&self) -> &str {
        &self.raw_sql
    }

    /// Replace the raw SQL; previously extracted outputs stay until the
    /// next successful [`Extractor::extract`].
    pub fn set_raw_sql(&mut self, sql: impl Into<String>) {
        self.raw_sql = sql.into();
    }

    /// Extract templates, params, table infos, and op kinds from the raw
    /// SQL, one entry per statement.
    pub fn extract(&mut self) -> Result<()> {
        let results = self.templatizer.extract(&self.raw_sql)?;

        self.templates = results.iter().map(|r| r.template.clone()).collect();
        self.params = results.iter().map(|r| r.params.clone()).collect();
        self.table_infos = results.iter().map(|r| r.tables.clone()).collect();
        self.op_types = results.iter().map(|r| r.op).collect();
        Ok(())
    }

    /// Templatized SQL, one string per input statement.
    pub fn templatized_sql(&self) -> &[String] {
        &self.templates
    }

    /// Extracted parameters, parallel to [`Extractor::templatized_sql`].
    pub fn params(&self) -> &[Vec<Value>] {
        &self.params
    }

    /// Referenced tables, parallel to [`Extractor::templatized_sql`].
    pub fn table_infos(&self) -> &[Vec<TableRef>] {
        &self.table_infos
    }

    /// Operation kinds, parallel to [`Extractor::templatized_sql`].
    pub fn op_type(&self) -> &[OpKind] {
        &self.op_types
    }

    /// All templates joined with `"; "`.
    pub fn joined_template(&self) -> String {
        self.templates.join("; ")
    }

    /// Lowercase-hex SHA-256 digest of each template.
    pub fn templatized_sql_hash(&self) -> Vec<String> {
        self.templatized_sql_hash_with(sha256_hex)
    }

    /// Digest each template with a caller-supplied hash function.
    pub fn templatized_sql_hash_with<F>(&self, hash: F) -> Vec<String>
    where
        F: Fn(&[u8]) -> String,
    {
        self.templates
            .iter()
            .map(|template| hash(template.as_bytes()))
            .collect()
    }
}

/// Default template digest: lowercase-hex SHA-256.
fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// One-shot convenience: extract and return per-statement results.
pub fn extract(sql: &str) -> Result<Vec<StatementTemplate>> {
    Templatizer::new().extract(sql)
}

/// One-shot convenience: extract and return the `"; "`-joined template.
pub fn extract_joined(sql: &str) -> Result<String> {
    Ok(joined_template(&Templatizer::new().extract(sql)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_hex_is_lowercase() {
        let digest = sha256_hex(b"SELECT * FROM users WHERE name eq ?");
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, digest.to_lowercase());
    }

    #[test]
    fn one_shot_helpers_round_trip() {
        let results = extract("SELECT * FROM users WHERE id = 1").unwrap();
        assert_eq!(results[0].template, "SELECT * FROM users WHERE id eq ?");
        assert_eq!(
            extract_joined("SELECT 1; SELECT 2").unwrap(),
            "SELECT ?; SELECT ?"
        );
    }
}
