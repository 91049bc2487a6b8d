use oraforge_cli::{load_table, OraforgeCli};
use pretty_assertions::assert_eq;
use std::io::Write;

const USERS: &str = r#"
name = "users"
primary_keys = ["id"]

[[fields]]
name = "id"
type = "NUMBER(9)"

[[fields]]
raw = "created_at DATE DEFAULT SYSDATE"
"#;

fn table_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run(args: &[&str]) -> anyhow::Result<String> {
    OraforgeCli::parse_from(std::iter::once("oraforge").chain(args.iter().copied()))
}

#[test]
fn create_table_from_file() {
    let file = table_file(USERS);
    let path = file.path().to_str().unwrap();

    assert_eq!(
        run(&["create-table", path, "--if-not-exists"]).unwrap(),
        "CREATE TABLE IF NOT EXISTS \"users\" (\n\
         \t\"id\" NUMBER(9) NOT NULL,\n\
         \tcreated_at DATE DEFAULT SYSDATE,\n\
         \tCONSTRAINT \"users\" PRIMARY KEY (\"id\")\n\
         )"
    );
}

#[test]
fn drop_table() {
    assert_eq!(run(&["drop-table", "users"]).unwrap(), "DROP TABLE \"users\"");
    assert_eq!(
        run(&["drop-table", "users", "--if-exists"]).unwrap(),
        "DROP TABLE IF EXISTS \"users\""
    );
}

#[test]
fn alter_table() {
    assert_eq!(
        run(&[
            "alter-table",
            "users",
            "add",
            "nickname",
            "--definition",
            "VARCHAR2(50)",
            "--nullable",
            "--after",
            "id",
        ])
        .unwrap(),
        "ALTER TABLE \"users\" ADD \"nickname\" VARCHAR2(50) NULL AFTER \"id\""
    );
    assert_eq!(
        run(&["alter-table", "users", "drop", "nickname"]).unwrap(),
        "ALTER TABLE \"users\" DROP \"nickname\""
    );
}

#[test]
fn alter_table_kind_in_any_case() {
    assert_eq!(
        run(&["alter-table", "users", "CHANGE", "email", "-d", "VARCHAR2(320)"]).unwrap(),
        "ALTER TABLE \"users\" CHANGE \"email\" VARCHAR2(320) NOT NULL"
    );
    assert_eq!(
        run(&["alter-table", "users", "Drop", "email"]).unwrap(),
        "ALTER TABLE \"users\" DROP \"email\""
    );
}

#[test]
fn alter_table_unknown_kind() {
    let err = run(&["alter-table", "users", "rename", "email"]).unwrap_err();
    assert!(err
        .to_string()
        .contains("unknown ALTER type `rename`; expected one of ADD, DROP, CHANGE"));
}

#[test]
fn rename_table_with_prefix() {
    assert_eq!(
        run(&["rename-table", "users", "accounts", "--table-prefix", "app_"]).unwrap(),
        "ALTER TABLE \"app_users\" RENAME TO \"app_accounts\""
    );
}

#[test]
fn config_file() {
    let config = table_file("escape_identifiers = false\nlegacy_syntax = true\n");
    let path = config.path().to_str().unwrap();

    assert_eq!(
        run(&["--config", path, "drop-table", "users"]).unwrap(),
        "DROP TABLE users"
    );
    assert!(run(&["--config", path, "drop-table", "users", "--if-exists"]).is_err());
}

#[test]
fn databases_are_unsupported() {
    let err = run(&["create-database", "reporting"]).unwrap_err();
    assert!(err.to_string().contains("not supported"));
    assert!(run(&["drop-database", "reporting"]).is_err());
}

#[test]
fn invalid_table_file() {
    let file = table_file("name = \"users\"\n");
    let table = load_table(file.path()).unwrap();
    assert!(table.fields.is_empty());

    let path = file.path().to_str().unwrap();
    let err = run(&["create-table", path]).unwrap_err();
    assert_eq!(err.to_string(), "invalid schema: table `users` has no fields");
}

#[test]
fn unreadable_table_file() {
    let err = load_table("/nonexistent/users.toml").unwrap_err();
    assert!(err
        .to_string()
        .starts_with("failed to read table definition /nonexistent/users.toml"));
}
