use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_fintrack"))
}

/// A command with an isolated config home and no inherited fintrack settings.
fn command(config_home: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(bin());
    cmd.args(["--format", "plain"])
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("FINTRACK_CONFIG")
        .env_remove("FINTRACK_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

/// Run a session, feeding `script` on stdin.
fn session(config_home: &Path, args: &[&str], script: &str) -> Output {
    let mut child = command(config_home, args).spawn().expect("spawn fintrack");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(script.as_bytes())
        .expect("write script");
    child.wait_with_output().expect("wait for fintrack")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn write_config(config_home: &Path, contents: &str) {
    let dir = config_home.join("fintrack");
    std::fs::create_dir_all(&dir).expect("create config dir");
    std::fs::write(dir.join("config.toml"), contents).expect("write config");
}

#[test]
fn test_demo_list_shows_rows_and_balance() {
    let home = TempDir::new().unwrap();
    let output = session(home.path(), &["--demo"], "list\n");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "1 2023-04-01 200.00 Income Salary\n2 2023-04-02 50.00 Expense Groceries\nbalance=150.00\n"
    );
}

#[test]
fn test_add_prints_notice_and_assigns_next_id() {
    let home = TempDir::new().unwrap();
    let output = session(
        home.path(),
        &["--demo"],
        "add --date 2023-04-03 --amount 20 --type Expense --category Bills\nbalance\n",
    );
    let out = stdout(&output);
    assert!(out.contains("status=ok\nmessage=Transaction added\nid=3\n"));
    assert!(out.contains("amount=20.00"));
    assert!(out.contains("income=200.00\nexpense=70.00\nbalance=130.00\ncount=3\n"));
}

#[test]
fn test_edit_and_save_updates_in_place() {
    let home = TempDir::new().unwrap();
    let output = session(
        home.path(),
        &["--demo"],
        "edit 2\nsave --amount 75.5\nlist\n",
    );
    let out = stdout(&output);
    assert!(out.contains("message=Transaction updated"));
    assert!(out.contains(
        "1 2023-04-01 200.00 Income Salary\n2 2023-04-02 75.50 Expense Groceries\nbalance=124.50\n"
    ));
}

#[test]
fn test_filter_limits_list_but_not_balance() {
    let home = TempDir::new().unwrap();
    let output = session(
        home.path(),
        &["--demo"],
        "filter --type Expense\nlist\nlist --type all --category Salary\nfilter clear\nlist\n",
    );
    let out = stdout(&output);
    assert!(out.contains("message=Filter updated\ntype=Expense\ncategory=all"));
    assert!(out.contains("2 2023-04-02 50.00 Expense Groceries\nbalance=150.00\n"));
    assert!(out.contains("1 2023-04-01 200.00 Income Salary\nbalance=150.00\n"));
    assert!(out.ends_with(
        "1 2023-04-01 200.00 Income Salary\n2 2023-04-02 50.00 Expense Groceries\nbalance=150.00\n"
    ));
}

#[test]
fn test_date_range_is_inclusive() {
    let home = TempDir::new().unwrap();
    let output = session(
        home.path(),
        &["--demo"],
        "list --from 2023-04-02 --to 2023-04-02\nlist --from 2023-05-01 --to 2023-04-01\n",
    );
    assert_eq!(
        stdout(&output),
        "2 2023-04-02 50.00 Expense Groceries\nbalance=150.00\nbalance=150.00\n"
    );
}

#[test]
fn test_delete_unknown_id_reports_and_continues() {
    let home = TempDir::new().unwrap();
    let output = session(home.path(), &["--demo"], "delete 9\nbalance\n");
    assert!(output.status.success());
    assert!(stderr(&output).contains("error=Not found: transaction 9 does not exist"));
    assert!(stdout(&output).contains("balance=150.00\ncount=2\n"));
}

#[test]
fn test_invalid_input_never_reaches_ledger() {
    let home = TempDir::new().unwrap();
    let output = session(
        home.path(),
        &["--no-input"],
        "add --date 2023-04-01 --amount abc --type Income --category Salary\n\
         add --date 2023-04-01 --amount 10 --type Income\n\
         add --date 2023-04-01 --amount 10 --type Gift --category Salary\n\
         add --date 2023-13-01 --amount 10 --type Income --category Salary\n\
         balance\n",
    );
    let err = stderr(&output);
    assert!(err.contains("error=Invalid input: invalid amount: abc"));
    assert!(err.contains("error=missing required field: category"));
    assert!(err.contains("invalid type"));
    assert!(err.contains("invalid date"));
    assert!(stdout(&output).contains("count=0\n"));
}

#[test]
fn test_delete_clears_edit_cursor() {
    let home = TempDir::new().unwrap();
    let output = session(
        home.path(),
        &["--demo"],
        "edit 1\ndelete 1\nsave --date 2023-04-05 --amount 5 --type Income --category Misc\nlist\n",
    );
    let out = stdout(&output);
    assert!(out.contains("message=Transaction deleted"));
    // With no record under edit, save adds a new one with a fresh id.
    assert!(out.contains("message=Transaction added\nid=3\n"));
    assert!(out.contains(
        "2 2023-04-02 50.00 Expense Groceries\n3 2023-04-05 5.00 Income Misc\nbalance=-45.00\n"
    ));
}

#[test]
fn test_export_then_seed_restores_ledger() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    let path_str = path.to_str().unwrap();

    let output = session(
        home.path(),
        &["--demo"],
        &format!(
            "add --date 2023-04-03 --amount 0.125 --type Expense --category Misc\nexport {}\n",
            path_str
        ),
    );
    assert!(stdout(&output).contains("message=Exported transactions"));

    let payload: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(payload.as_array().unwrap().len(), 3);
    assert_eq!(payload[2]["amount"], "0.125");
    assert_eq!(payload[2]["type"], "Expense");

    let output = session(home.path(), &["--seed", path_str], "list\n");
    assert_eq!(
        stdout(&output),
        "1 2023-04-01 200.00 Income Salary\n2 2023-04-02 50.00 Expense Groceries\n3 2023-04-03 0.13 Expense Misc\nbalance=149.88\n"
    );
}

#[test]
fn test_import_restores_exported_snapshot() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    let path_str = path.to_str().unwrap();

    let output = session(
        home.path(),
        &["--demo"],
        &format!(
            "export {path}\ndelete 1\nedit 2\nimport {path}\nlist\n\
             save --date 2023-04-09 --amount 1 --type Income --category Misc\nlist\n",
            path = path_str
        ),
    );
    let out = stdout(&output);
    assert!(out.contains("message=Imported transactions"));
    assert!(out.contains("count=2"));
    assert!(out.contains(
        "1 2023-04-01 200.00 Income Salary\n2 2023-04-02 50.00 Expense Groceries\nbalance=150.00\n"
    ));
    // The import dropped the edit cursor, so save creates a record.
    assert!(out.contains("message=Transaction added\nid=3\n"));
    assert!(out.ends_with("3 2023-04-09 1.00 Income Misc\nbalance=151.00\n"));
}

#[test]
fn test_import_failures_keep_ledger() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{not json").unwrap();
    let missing = dir.path().join("missing.json");

    let output = session(
        home.path(),
        &["--demo"],
        &format!(
            "import {}\nimport {}\nbalance\n",
            broken.to_str().unwrap(),
            missing.to_str().unwrap()
        ),
    );
    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("error=Invalid input"));
    assert!(err.contains("error=Import file not found"));
    assert!(stdout(&output).contains("balance=150.00\ncount=2\n"));
}

#[test]
fn test_export_to_stdout_jsonl() {
    let home = TempDir::new().unwrap();
    let output = session(home.path(), &["--demo"], "export - --format jsonl\n");
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["id"], 1);
    assert_eq!(first["date"], "2023-04-01");
    assert_eq!(first["category"], "Salary");
}

#[test]
fn test_list_json() {
    let home = TempDir::new().unwrap();
    let output = session(home.path(), &["--demo"], "list --json --type Income\n");
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["transactions"].as_array().unwrap().len(), 1);
    assert_eq!(value["balance"], "150.00");
}

#[test]
fn test_balance_json() {
    let home = TempDir::new().unwrap();
    let output = session(home.path(), &["--demo"], "balance --json\n");
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["income"], "200.00");
    assert_eq!(value["expense"], "50.00");
    assert_eq!(value["balance"], "150.00");
    assert_eq!(value["count"], 2);
}

#[test]
fn test_configured_categories() {
    let home = TempDir::new().unwrap();
    write_config(home.path(), "[categories]\nlabels = [\"Rent\", \"Food\"]\n");

    let output = command(home.path(), &["categories"]).output().unwrap();
    assert_eq!(stdout(&output), "Rent\nFood\n");

    let output = session(
        home.path(),
        &[],
        "add --date 2023-04-01 --amount 10 --type Expense --category Groceries\n\
         add --date 2023-04-01 --amount 10 --type Expense --category rent\nlist\n",
    );
    assert!(stderr(&output).contains("unknown category"));
    assert!(stdout(&output).contains("1 2023-04-01 10.00 Expense Rent\nbalance=-10.00\n"));
}

#[test]
fn test_quit_ignores_remaining_lines() {
    let home = TempDir::new().unwrap();
    let output = session(home.path(), &["--demo"], "quit\ndelete 1\n");
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_missing_seed_exits_not_found() {
    let home = TempDir::new().unwrap();
    let output = session(home.path(), &["--seed", "/nonexistent/seed.json"], "");
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("error=Seed file not found"));
}

#[test]
fn test_missing_explicit_config_exits_config() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("missing.toml");
    let output = session(home.path(), &["--config", missing.to_str().unwrap()], "");
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_malformed_default_config_exits_config() {
    let home = TempDir::new().unwrap();
    write_config(home.path(), "[categories]\nlabels = []\n");
    let output = session(home.path(), &[], "");
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_completions_generate() {
    let home = TempDir::new().unwrap();
    let output = command(home.path(), &["completions", "bash"]).output().unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("fintrack"));
}
