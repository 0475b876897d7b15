//! End-to-end tests for the sqlstash binary.
//!
//! Every invocation points HOME at a fresh temp dir so the tests never pick
//! up a real `~/.sqlstash/config.json` and the default confirmation switches
//! apply.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const USERS_FILE: &str = r#"---
-- @name CreateUsersTable
CREATE TABLE users (
    id INTEGER PRIMARY KEY,
    username VARCHAR(50) NOT NULL
);

---
-- @name GetAllUsers
SELECT * FROM users ORDER BY username;
---"#;

fn write_statements(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("statements.sql");
    fs::write(&path, content).expect("write statement file");
    path
}

fn sqlstash(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sqlstash").expect("binary builds");
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn lists_statement_names_when_no_name_given() {
    let dir = TempDir::new().unwrap();
    let path = write_statements(&dir, USERS_FILE);

    sqlstash(&dir)
        .arg(&path)
        .assert()
        .success()
        .stdout("")
        .stderr(
            predicate::str::contains("available statements:")
                .and(predicate::str::contains("CreateUsersTable"))
                .and(predicate::str::contains("GetAllUsers")),
        );
}

#[test]
fn emits_a_read_only_statement_without_prompting() {
    let dir = TempDir::new().unwrap();
    let path = write_statements(&dir, USERS_FILE);

    sqlstash(&dir)
        .arg(&path)
        .arg("GetAllUsers")
        .assert()
        .success()
        .stdout("SELECT * FROM users ORDER BY username;");
}

#[test]
fn name_flag_works_like_the_positional() {
    let dir = TempDir::new().unwrap();
    let path = write_statements(&dir, USERS_FILE);

    sqlstash(&dir)
        .arg(&path)
        .arg("--name")
        .arg("GetAllUsers")
        .assert()
        .success()
        .stdout("SELECT * FROM users ORDER BY username;");
}

#[test]
fn interpolates_variables_before_emitting() {
    let dir = TempDir::new().unwrap();
    let path = write_statements(
        &dir,
        "SET @user_id=123;\nSET @status=\"active\";\n\
         ---\n-- @name FindUser\nSELECT * FROM t WHERE id=@user_id AND s=@status;\n---",
    );

    sqlstash(&dir)
        .arg(&path)
        .arg("FindUser")
        .assert()
        .success()
        .stdout("SELECT * FROM t WHERE id=123 AND s=\"active\";");
}

#[test]
fn unknown_statement_name_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_statements(&dir, USERS_FILE);

    sqlstash(&dir)
        .arg(&path)
        .arg("NoSuchStatement")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'NoSuchStatement' not found"));
}

#[test]
fn rejects_files_without_sql_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("statements.txt");
    fs::write(&path, USERS_FILE).unwrap();

    sqlstash(&dir)
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains(".sql extension"));
}

#[test]
fn missing_file_fails_with_not_found() {
    let dir = TempDir::new().unwrap();

    sqlstash(&dir)
        .arg(dir.path().join("missing.sql"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn schema_change_prompts_and_no_cancels() {
    let dir = TempDir::new().unwrap();
    let path = write_statements(&dir, USERS_FILE);

    sqlstash(&dir)
        .arg(&path)
        .arg("CreateUsersTable")
        .write_stdin("n\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(
            predicate::str::contains("run this statement? (y/n):")
                .and(predicate::str::contains("cancelled")),
        );
}

#[test]
fn schema_change_prompts_and_yes_emits() {
    let dir = TempDir::new().unwrap();
    let path = write_statements(&dir, USERS_FILE);

    sqlstash(&dir)
        .arg(&path)
        .arg("CreateUsersTable")
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE TABLE users"));
}

#[test]
fn confirm_flag_forces_a_prompt_for_read_only_statements() {
    let dir = TempDir::new().unwrap();
    let path = write_statements(&dir, USERS_FILE);

    sqlstash(&dir)
        .arg(&path)
        .arg("GetAllUsers")
        .arg("--confirm")
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cancelled"));
}

#[test]
fn config_file_can_disable_schema_change_prompts() {
    let dir = TempDir::new().unwrap();
    let path = write_statements(&dir, USERS_FILE);

    let config_dir = dir.path().join(".sqlstash");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.json"),
        "{\"confirm\": false, \"confirm_schema_changes\": false, \"confirm_updates\": true}",
    )
    .unwrap();

    sqlstash(&dir)
        .arg(&path)
        .arg("CreateUsersTable")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE TABLE users"));
}
