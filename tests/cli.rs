//! End-to-end tests for the `expense-tracker` and `task-cli` binaries.
//!
//! Each test points the binary at a store inside a temp directory and checks
//! the printed messages and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense_tracker(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.env_remove("EXPENSE_TRACKER_FILE")
        .env_remove("RUST_LOG")
        .arg("--file")
        .arg(dir.path().join("expenses.json"));
    cmd
}

fn task_cli(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("task-cli").unwrap();
    cmd.env_remove("TASK_CLI_FILE")
        .env_remove("RUST_LOG")
        .arg("--file")
        .arg(dir.path().join("tasks.json"));
    cmd
}

// ─── Expense Tracker Tests ──────────────────────────────────────────────────

mod expense_cli_tests {
    use super::*;

    #[test]
    fn test_add_list_and_summarize() {
        let dir = TempDir::new().unwrap();

        expense_tracker(&dir)
            .args(["add", "--description", "Lunch", "--amount", "12.50"])
            .assert()
            .success()
            .stdout("Expense added successfully (ID: 1)\n");

        expense_tracker(&dir)
            .args(["add", "--description", "Laptop", "--amount", "1,200"])
            .assert()
            .success()
            .stdout("Expense added successfully (ID: 2)\n");

        expense_tracker(&dir)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("Lunch").and(predicate::str::contains("$1,200.00")));

        expense_tracker(&dir)
            .arg("summary")
            .assert()
            .success()
            .stdout("Total expenses: $1,212.50\n");
    }

    #[test]
    fn test_missing_ids_are_reported_not_failed() {
        let dir = TempDir::new().unwrap();
        expense_tracker(&dir)
            .args(["update", "--id", "9", "--description", "X"])
            .assert()
            .success()
            .stdout("Expense with ID 9 not found\n");
        expense_tracker(&dir)
            .args(["delete", "--id", "9"])
            .assert()
            .success()
            .stdout("Expense with ID 9 not found\n");
        assert!(!dir.path().join("expenses.json").exists());
    }

    #[test]
    fn test_update_and_delete_success_messages() {
        let dir = TempDir::new().unwrap();
        expense_tracker(&dir)
            .args(["add", "--description", "Lunch", "--amount", "12.50"])
            .assert()
            .success();
        expense_tracker(&dir)
            .args(["update", "--id", "1", "--amount", "15"])
            .assert()
            .success()
            .stdout("Expense updated successfully\n");
        expense_tracker(&dir)
            .args(["summary"])
            .assert()
            .success()
            .stdout("Total expenses: $15.00\n");
        expense_tracker(&dir)
            .args(["delete", "--id", "1"])
            .assert()
            .success()
            .stdout("Expense deleted successfully\n");
        expense_tracker(&dir)
            .arg("list")
            .assert()
            .success()
            .stdout("No expenses found.\n");
    }

    #[test]
    fn test_huge_amounts_print_every_digit() {
        let dir = TempDir::new().unwrap();
        expense_tracker(&dir)
            .args(["add", "--description", "x", "--amount", "1e20"])
            .assert()
            .success();
        expense_tracker(&dir)
            .arg("summary")
            .assert()
            .success()
            .stdout("Total expenses: $100,000,000,000,000,000,000.00\n");
        expense_tracker(&dir)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("$100,000,000,000,000,000,000.00"));
    }

    #[test]
    fn test_blank_month_prints_the_overall_total() {
        let dir = TempDir::new().unwrap();
        expense_tracker(&dir)
            .args(["add", "--description", "Lunch", "--amount", "12.50"])
            .assert()
            .success();
        expense_tracker(&dir)
            .args(["summary", "--month", ""])
            .assert()
            .success()
            .stdout("Total expenses: $12.50\n");
    }

    #[test]
    fn test_empty_store_messages() {
        let dir = TempDir::new().unwrap();
        expense_tracker(&dir)
            .arg("list")
            .assert()
            .success()
            .stdout("No expenses found.\n");
    }

    #[test]
    fn test_invalid_month() {
        let dir = TempDir::new().unwrap();
        expense_tracker(&dir)
            .args(["summary", "--month", "13"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Invalid month: '13'"));
    }

    #[test]
    fn test_negative_amount_is_a_usage_error() {
        let dir = TempDir::new().unwrap();
        expense_tracker(&dir)
            .args(["add", "--description", "Refund", "--amount", "-5"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--amount"));
        assert!(!dir.path().join("expenses.json").exists());
    }

    #[test]
    fn test_currency_flag_changes_the_symbol() {
        let dir = TempDir::new().unwrap();
        expense_tracker(&dir)
            .args(["add", "--description", "Bread", "--amount", "3"])
            .assert()
            .success();
        expense_tracker(&dir)
            .args(["--currency", "eur", "summary"])
            .assert()
            .success()
            .stdout(predicate::str::contains("3.00"))
            .stdout(predicate::str::contains("$").not());
    }

    #[test]
    fn test_strict_flag_fails_on_garbage() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("expenses.json"), "not json").unwrap();

        expense_tracker(&dir)
            .args(["--strict", "list"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"));

        expense_tracker(&dir)
            .arg("list")
            .assert()
            .success()
            .stdout("No expenses found.\n");
    }
}

// ─── Task CLI Tests ─────────────────────────────────────────────────────────

mod task_cli_tests {
    use super::*;

    #[test]
    fn test_add_mark_and_filter() {
        let dir = TempDir::new().unwrap();

        task_cli(&dir)
            .args(["add", "Buy groceries"])
            .assert()
            .success()
            .stdout("Task added successfully (ID: 1)\n");
        task_cli(&dir)
            .args(["add", "Write report"])
            .assert()
            .success()
            .stdout("Task added successfully (ID: 2)\n");

        task_cli(&dir)
            .args(["mark-done", "1"])
            .assert()
            .success()
            .stdout("Task 1 marked as done\n");
        task_cli(&dir)
            .args(["mark-in-progress", "2"])
            .assert()
            .success()
            .stdout("Task 2 marked as in-progress\n");

        task_cli(&dir)
            .args(["list", "done"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Buy groceries")
                    .and(predicate::str::contains("Write report").not()),
            );
    }

    #[test]
    fn test_generic_mark_accepts_status_names() {
        let dir = TempDir::new().unwrap();
        task_cli(&dir).args(["add", "a"]).assert().success();
        task_cli(&dir)
            .args(["mark", "1", "todo"])
            .assert()
            .success()
            .stdout("Task 1 marked as todo\n");
        task_cli(&dir)
            .args(["mark", "1", "in-progress"])
            .assert()
            .success()
            .stdout("Task 1 marked as in-progress\n");
        task_cli(&dir)
            .args(["mark", "2", "done"])
            .assert()
            .success()
            .stdout("Error: Task with ID 2 not found\n");
    }

    #[test]
    fn test_invalid_status_is_reported() {
        let dir = TempDir::new().unwrap();
        task_cli(&dir).args(["add", "a"]).assert().success();
        let before = std::fs::read(dir.path().join("tasks.json")).unwrap();

        task_cli(&dir)
            .args(["mark", "1", "bogus-status"])
            .assert()
            .success()
            .stdout("Error: Invalid status 'bogus-status'. Use todo, in-progress, done\n");
        assert_eq!(std::fs::read(dir.path().join("tasks.json")).unwrap(), before);
    }

    #[test]
    fn test_missing_task_and_empty_list() {
        let dir = TempDir::new().unwrap();
        task_cli(&dir)
            .arg("list")
            .assert()
            .success()
            .stdout("No tasks found\n");
        task_cli(&dir)
            .args(["delete", "3"])
            .assert()
            .success()
            .stdout("Error: Task with ID 3 not found\n");
    }

    #[test]
    fn test_update_and_delete() {
        let dir = TempDir::new().unwrap();
        task_cli(&dir).args(["add", "a"]).assert().success();
        task_cli(&dir)
            .args(["update", "1", "renamed"])
            .assert()
            .success()
            .stdout("Task 1 updated successfully\n");
        task_cli(&dir)
            .args(["delete", "1"])
            .assert()
            .success()
            .stdout("Task 1 deleted successfully\n");
        task_cli(&dir)
            .arg("list")
            .assert()
            .success()
            .stdout("No tasks found\n");
    }
}
