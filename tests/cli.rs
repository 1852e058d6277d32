use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn budget(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_PLANNER_DIR", dir.path())
        .env_remove("BUDGET_PLANNER_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn summary_of_initial_state() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget:        $2000.00"))
        .stdout(predicate::str::contains("Total Expense: $325.30"))
        .stdout(predicate::str::contains("Remains:       $1674.70"))
        .stdout(predicate::str::contains("within budget"))
        .stdout(predicate::str::contains("Leisure"));
}

#[test]
fn summary_replays_actions() {
    let dir = TempDir::new().unwrap();
    let actions = dir.path().join("actions.jsonl");
    fs::write(
        &actions,
        "# a trip\n\
         {\"type\":\"ADD_EXPENSE\",\"payload\":{\"category\":\"Travel\",\"cost\":50,\"date\":\"2025-03-14\"}}\n\
         \n\
         {\"type\":\"SOMETHING_ELSE\",\"payload\":1}\n",
    )
    .unwrap();

    budget(&dir)
        .arg("summary")
        .arg("--actions")
        .arg(&actions)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expense: $375.30"))
        .stdout(predicate::str::contains("Remains:       $1624.70"))
        .stdout(predicate::str::contains("2025-03-14"));
}

#[test]
fn summary_reports_over_budget() {
    let dir = TempDir::new().unwrap();
    let actions = dir.path().join("actions.jsonl");
    fs::write(&actions, "{\"type\":\"SET_BUDGET\",\"payload\":300}\n").unwrap();

    budget(&dir)
        .args(["summary", "--actions"])
        .arg(&actions)
        .assert()
        .success()
        .stdout(predicate::str::contains("Remains:       -$25.30"))
        .stdout(predicate::str::contains("OVER BUDGET"));
}

#[test]
fn summary_empty_starts_without_samples() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["summary", "--empty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expense: $0.00"))
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn summary_rejects_bad_action_file() {
    let dir = TempDir::new().unwrap();
    let actions = dir.path().join("actions.jsonl");
    fs::write(
        &actions,
        "{\"type\":\"ADD_EXPENSE\",\"payload\":{\"category\":\"Groceries\",\"cost\":5}}\n",
    )
    .unwrap();

    budget(&dir)
        .args(["summary", "--actions"])
        .arg(&actions)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn summary_missing_action_file_fails() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["summary", "--actions"])
        .arg(dir.path().join("nope.jsonl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open action file"));
}

#[test]
fn categories_are_listed_in_order() {
    let dir = TempDir::new().unwrap();

    budget(&dir).arg("categories").assert().success().stdout(
        "Food\nTransport\nHealth & Personal Care\nTravel\nLeisure\nClothing\n",
    );
}

#[test]
fn init_writes_settings_used_by_summary() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));
    assert!(dir.path().join("config.json").exists());

    fs::write(
        dir.path().join("config.json"),
        r#"{ "currency_symbol": "€", "starting_budget": 500, "seed_sample_expenses": false }"#,
    )
    .unwrap();

    budget(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget:        €500.00"))
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn config_shows_paths_and_settings() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("Starting budget:   $2000.00"))
        .stdout(predicate::str::contains("Initialized:      no"));
}

#[test]
fn malformed_settings_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), "{ nope").unwrap();

    budget(&dir)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings file"));
}
