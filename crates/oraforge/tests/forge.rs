use oraforge::{AlterColumn, ColumnAttrs, Config, Forge, TableDef};
use pretty_assertions::assert_eq;

fn users() -> TableDef {
    TableDef::new("users")
        .column("id", ColumnAttrs::new("NUMBER(9)"))
        .column("email", ColumnAttrs::new("VARCHAR2(255)").nullable(true))
        .primary_key("id")
        .unique_key("email")
}

#[test]
fn databases_are_unsupported() {
    let forge = Forge::default();

    assert!(!forge.create_database("reporting"));
    assert!(!forge.drop_database("reporting"));

    let legacy = Forge::new(Config::new().legacy_syntax(true));
    assert!(!legacy.create_database("reporting"));
    assert!(!legacy.drop_database("reporting"));
}

#[test]
fn create_table() {
    let sql = Forge::default().create_table(&users(), false).unwrap();

    assert_eq!(
        sql,
        "CREATE TABLE \"users\" (\n\
         \t\"id\" NUMBER(9) NOT NULL,\n\
         \t\"email\" VARCHAR2(255),\n\
         \tCONSTRAINT \"users\" PRIMARY KEY (\"id\"),\n\
         \tUNIQUE (\"email\")\n\
         )"
    );
}

#[test]
fn table_prefix_applies_to_every_statement() {
    let forge = Forge::new(Config::new().table_prefix("app_"));

    assert_eq!(
        forge.create_table(&users(), true).unwrap(),
        "CREATE TABLE IF NOT EXISTS \"app_users\" (\n\
         \t\"id\" NUMBER(9) NOT NULL,\n\
         \t\"email\" VARCHAR2(255),\n\
         \tCONSTRAINT \"app_users\" PRIMARY KEY (\"id\"),\n\
         \tUNIQUE (\"email\")\n\
         )"
    );
    assert_eq!(forge.drop_table("users").unwrap(), "DROP TABLE \"app_users\"");
    assert_eq!(
        forge.rename_table("users", "accounts").unwrap(),
        "ALTER TABLE \"app_users\" RENAME TO \"app_accounts\""
    );
    assert_eq!(
        forge
            .alter_table(&AlterColumn::add("users", "age").definition("NUMBER(3)"))
            .unwrap(),
        "ALTER TABLE \"app_users\" ADD \"age\" NUMBER(3) NOT NULL"
    );
}

#[test]
fn unescaped_identifiers() {
    let forge = Forge::new(Config::new().escape_identifiers(false));

    assert_eq!(forge.drop_table("users").unwrap(), "DROP TABLE users");
    assert_eq!(
        forge.rename_table("users", "accounts").unwrap(),
        "ALTER TABLE users RENAME TO accounts"
    );
}

#[test]
fn legacy_syntax_rejects_if_exists_clauses() {
    let forge = Forge::new(Config::new().legacy_syntax(true));

    let err = forge.create_table(&users(), true).unwrap_err();
    assert!(err.is_unsupported_feature());

    let err = forge.drop_table_if_exists("users").unwrap_err();
    assert!(err.is_unsupported_feature());

    // Without the clause the statements are still available.
    assert!(forge.create_table(&users(), false).is_ok());
    assert_eq!(forge.drop_table("users").unwrap(), "DROP TABLE \"users\"");
}

#[test]
fn drop_table_if_exists() {
    assert_eq!(
        Forge::default().drop_table_if_exists("users").unwrap(),
        "DROP TABLE IF EXISTS \"users\""
    );
}

#[test]
fn invalid_table_is_an_error() {
    let err = Forge::default()
        .create_table(&TableDef::new("users"), false)
        .unwrap_err();
    assert!(err.is_invalid_schema());
}
