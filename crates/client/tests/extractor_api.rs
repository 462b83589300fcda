use std::sync::Arc;

use sha2::{Digest, Sha256};
use sqf_client::{extract, Extractor, SqfError};
use sqf_template::{OpKind, TableRef, Templatizer, Value};

#[test]
fn raw_sql_round_trips() {
    let mut extractor = Extractor::new("");
    let sql = "SELECT * FROM users WHERE name = 'kyden'";
    extractor.set_raw_sql(sql);
    extractor.extract().unwrap();
    assert_eq!(extractor.raw_sql(), sql);
}

#[test]
fn accessors_are_parallel_per_statement() {
    let mut extractor = Extractor::new("SELECT * FROM users WHERE name = 'kyden'");
    extractor.extract().unwrap();

    assert_eq!(extractor.op_type(), &[OpKind::Select]);
    assert_eq!(
        extractor.templatized_sql(),
        &["SELECT * FROM users WHERE name eq ?".to_string()]
    );
    assert_eq!(
        extractor.params(),
        &[vec![Value::Str("kyden".to_string())]]
    );
    assert_eq!(
        extractor.table_infos(),
        &[vec![TableRef::new("", "users")]]
    );
}

#[test]
fn reextraction_replaces_previous_outputs() {
    let mut extractor = Extractor::new("SELECT * FROM users WHERE name = 'kyden'");
    extractor.extract().unwrap();

    extractor.set_raw_sql("SELECT * FROM users");
    extractor.extract().unwrap();
    assert_eq!(
        extractor.templatized_sql(),
        &["SELECT * FROM users".to_string()]
    );
    assert_eq!(extractor.params(), &[Vec::<Value>::new()]);
}

#[test]
fn failed_extraction_keeps_previous_outputs() {
    let mut extractor = Extractor::new("SELECT * FROM users WHERE name = 'kyden'");
    extractor.extract().unwrap();
    let before = extractor.templatized_sql().to_vec();

    extractor.set_raw_sql("SELECT * FROM WHERE name = 'kyden'");
    assert!(extractor.extract().is_err());
    assert_eq!(extractor.templatized_sql(), before.as_slice());

    extractor.set_raw_sql("");
    let err = extractor.extract().unwrap_err();
    assert_eq!(err.to_string(), "empty SQL statement");
    assert_eq!(extractor.templatized_sql(), before.as_slice());
}

#[test]
fn accessors_start_empty() {
    let extractor = Extractor::new("SELECT 1");
    assert!(extractor.templatized_sql().is_empty());
    assert!(extractor.params().is_empty());
    assert!(extractor.table_infos().is_empty());
    assert!(extractor.op_type().is_empty());
}

#[test]
fn default_hash_is_sha256_of_each_template() {
    let mut extractor = Extractor::new("SELECT * FROM users WHERE name = 'kyden'");
    extractor.extract().unwrap();

    let hashes = extractor.templatized_sql_hash();
    assert_eq!(hashes.len(), 1);

    let expected = hex::encode(Sha256::digest(b"SELECT * FROM users WHERE name eq ?"));
    assert_eq!(hashes[0], expected);
}

#[test]
fn custom_hash_function_overrides_the_default() {
    let mut extractor = Extractor::new("SELECT * FROM users WHERE name = 'kyden'");
    extractor.extract().unwrap();

    let hashes = extractor.templatized_sql_hash_with(|bytes: &[u8]| hex::encode(bytes));
    assert_eq!(
        hashes,
        vec![hex::encode(b"SELECT * FROM users WHERE name eq ?")]
    );
}

#[test]
fn multi_statement_hashes_are_per_template() {
    let mut extractor =
        Extractor::new("SELECT * FROM users; INSERT INTO logs (action) VALUES ('login')");
    extractor.extract().unwrap();

    assert_eq!(extractor.templatized_sql().len(), 2);
    let hashes = extractor.templatized_sql_hash();
    assert_eq!(hashes.len(), 2);
    for (template, hash) in extractor.templatized_sql().iter().zip(&hashes) {
        assert_eq!(*hash, hex::encode(Sha256::digest(template.as_bytes())));
    }
    assert_eq!(
        extractor.joined_template(),
        "SELECT * FROM users; INSERT INTO logs (action) VALUES (?)"
    );
}

#[test]
fn complex_queries_extract_all_dimensions() {
    let mut extractor = Extractor::new(
        "SELECT u.name, o.order_id FROM users u JOIN orders o ON u.id = o.user_id \
         WHERE u.age > 18 AND o.amount > 100.50",
    );
    extractor.extract().unwrap();

    assert_eq!(extractor.op_type(), &[OpKind::Select]);
    assert_eq!(
        extractor.templatized_sql(),
        &["SELECT u.name, o.order_id FROM users AS u CROSS JOIN orders AS o \
           ON u.id eq o.user_id WHERE u.age gt ? and o.amount gt ?"
            .to_string()]
    );
    assert_eq!(extractor.params()[0].len(), 2);
    assert_eq!(
        extractor.table_infos(),
        &[vec![TableRef::new("", "users"), TableRef::new("", "orders")]]
    );
}

#[test]
fn extractors_share_an_engine() {
    let engine = Arc::new(Templatizer::new());
    let mut first = Extractor::with_templatizer("SELECT 1", Arc::clone(&engine));
    let mut second = Extractor::with_templatizer("SELECT 2", engine);
    first.extract().unwrap();
    second.extract().unwrap();
    assert_eq!(first.templatized_sql(), &["SELECT ?".to_string()]);
    assert_eq!(second.templatized_sql(), &["SELECT ?".to_string()]);
    assert_eq!(first.templatized_sql_hash(), second.templatized_sql_hash());
}

#[test]
fn one_shot_extract_reports_statement_errors() {
    let err = extract("SELECT 1; SELECT * FROM t WHERE id = ?").unwrap_err();
    match err {
        SqfError::Statement { index, source } => {
            assert_eq!(index, 1);
            assert!(matches!(*source, SqfError::Unsupported(_)));
        }
        other => panic!("expected statement error, got {other}"),
    }
}
