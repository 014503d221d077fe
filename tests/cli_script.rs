use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget_calc_cli").expect("binary builds");
    cmd.env("BUDGET_CALC_CLI_SCRIPT", "1")
        .env("BUDGET_CALC_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn summary_after_salary_and_rent() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("income Salary 3000\nexpense Rent 1000\nsummary\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added income `Salary` ($3000.00)."))
        .stdout(predicate::str::contains("Total Income: $3000.00"))
        .stdout(predicate::str::contains("Total Expenses: $1000.00"))
        .stdout(predicate::str::contains("Net Income: $2000.00"))
        .stdout(predicate::str::contains("Expected Income (1.5x): $1500.00"));
}

#[test]
fn empty_session_reports_zeroes() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("summary\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Income: $0.00"))
        .stdout(predicate::str::contains("Expected Income (1.5x): $0.00"));
}

#[test]
fn multiplier_selection_updates_expected_income() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("expense Rent 1000\nexpense Food 500\nmultiplier 2\nsummary\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expected Income (2x): $3000.00"));
}

#[test]
fn rejected_entry_is_reported_and_session_continues() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("income \"\" 100\nexpense Food 0\nincome Salary 10\nsummary\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Income not added: label must not be empty",
        ))
        .stderr(predicate::str::contains(
            "Expense not added: amount must be greater than zero",
        ))
        .stdout(predicate::str::contains("Total Income: $10.00"))
        .stdout(predicate::str::contains("Total Expenses: $0.00"));
}

#[test]
fn unknown_command_suggests_closest_match() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("sumary\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown command `sumary`"))
        .stdout(predicate::str::contains("Suggestion: `summary`?"));
}

#[test]
fn json_report_lists_entries() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("income Salary 3000\nexpense Rent 1000\nreport --json\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"net_income\": 2000.0"))
        .stdout(predicate::str::contains("\"label\": \"Rent\""));
}

#[test]
fn config_changes_persist_between_runs() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("config set currency_symbol €\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration updated."));

    cli(&home)
        .write_stdin("income Salary 3000\nsummary\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Income: €3000.00"));
}

#[test]
fn entries_do_not_survive_a_restart() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("income Salary 3000\n")
        .assert()
        .success();

    cli(&home)
        .write_stdin("summary\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Income: $0.00"));
}

#[test]
fn double_negative_amount_is_rejected() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .write_stdin("income Refund --40\nsummary\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Income not added: `--40` is not a valid amount",
        ))
        .stdout(predicate::str::contains("Total Income: $0.00"));
}
