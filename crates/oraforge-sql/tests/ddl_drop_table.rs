use oraforge_sql::{Serializer, Statement};
use pretty_assertions::assert_eq;

#[test]
fn drop_table() {
    let stmt = Statement::drop_table("users").unwrap();
    assert_eq!(Serializer::oracle().serialize(&stmt), "DROP TABLE \"users\"");
}

#[test]
fn drop_table_if_exists() {
    let stmt = Statement::drop_table_if_exists("users").unwrap();
    assert_eq!(
        Serializer::oracle().serialize(&stmt),
        "DROP TABLE IF EXISTS \"users\""
    );
}

#[test]
fn drop_qualified_table() {
    let stmt = Statement::drop_table("hr.employees").unwrap();
    assert_eq!(
        Serializer::oracle().serialize(&stmt),
        "DROP TABLE \"hr\".\"employees\""
    );
}

#[test]
fn prefix_applies_to_table_not_owner() {
    let stmt = Statement::drop_table("hr.employees")
        .unwrap()
        .with_table_prefix("app_");
    assert_eq!(
        Serializer::oracle().serialize(&stmt),
        "DROP TABLE \"hr\".\"app_employees\""
    );
}

#[test]
fn empty_name_is_rejected() {
    let err = Statement::drop_table("").unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn empty_name_segment_is_rejected() {
    for name in ["hr.", "hr..employees", ".employees"] {
        let err = Statement::drop_table(name).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("invalid schema: table name `{name}` has an empty segment")
        );
    }
}
