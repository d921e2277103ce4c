//! End-to-end tests for the fairsplit binary

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn fairsplit(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fairsplit").unwrap();
    cmd.env("FAIRSPLIT_DATA_DIR", data_dir.path())
        .env_remove("FAIRSPLIT_LOG");
    cmd
}

/// Initialized data dir with "The Flat": Alex earns 250.00, Sam 150.00
fn setup_household() -> TempDir {
    let dir = TempDir::new().unwrap();

    fairsplit(&dir).arg("init").assert().success();
    fairsplit(&dir)
        .args(["household", "create", "The Flat"])
        .assert()
        .success();
    fairsplit(&dir)
        .args(["household", "add-member", "The Flat", "Alex", "--income", "250"])
        .assert()
        .success();
    fairsplit(&dir)
        .args(["household", "add-member", "the flat", "Sam", "--income", "150.00"])
        .assert()
        .success();

    dir
}

fn save_may_plan(dir: &TempDir) {
    fairsplit(dir)
        .args([
            "plan",
            "save",
            "The Flat",
            "2024-05",
            "--category",
            "Rent=100",
            "--category",
            "Food=40",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan for The Flat 2024-05"));
}

fn summary_json(dir: &TempDir) -> Value {
    let output = fairsplit(dir)
        .args(["summary", "The Flat", "2024-05", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_init_and_config() {
    let dir = TempDir::new().unwrap();

    fairsplit(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("households.json").exists());

    fairsplit(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    Yes"))
        .stdout(predicate::str::contains("Default split:   income"));
}

#[test]
fn test_household_show_lists_members_in_order() {
    let dir = setup_household();

    let output = fairsplit(&dir)
        .args(["household", "show", "The Flat"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let alex = stdout.find("Alex").unwrap();
    let sam = stdout.find("Sam").unwrap();
    assert!(alex < sam);
    assert!(stdout.contains("$400.00"));
}

#[test]
fn test_duplicate_member_is_rejected() {
    let dir = setup_household();

    fairsplit(&dir)
        .args(["household", "add-member", "The Flat", "ALEX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_summary_json_end_to_end() {
    let dir = setup_household();
    save_may_plan(&dir);

    let summary = summary_json(&dir);
    assert_eq!(summary["month"], "2024-05");
    assert_eq!(summary["split"]["mode"], "income");
    assert_eq!(summary["totalBudget"], 14000);
    assert_eq!(summary["totalIncome"], 40000);
    assert_eq!(summary["people"][0]["name"], "Alex");
    assert_eq!(summary["people"][0]["weight"], 0.625);
    assert_eq!(summary["people"][0]["total"], 8750);
    assert_eq!(summary["people"][1]["total"], 5250);
    assert_eq!(summary["categories"][0]["name"], "Rent");
    assert_eq!(summary["categories"][0]["perPerson"][0]["amount"], 6250);
    assert_eq!(summary["categories"][0]["perPerson"][1]["amount"], 3750);
    assert_eq!(summary["categories"][1]["perPerson"][0]["amount"], 2500);
    assert_eq!(summary["categories"][1]["perPerson"][1]["amount"], 1500);
}

#[test]
fn test_summary_table() {
    let dir = setup_household();
    save_may_plan(&dir);

    fairsplit(&dir)
        .args(["summary", "The Flat", "2024-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$87.50"))
        .stdout(predicate::str::contains("$52.50"))
        .stdout(predicate::str::contains("0.6250"));
}

#[test]
fn test_summary_csv() {
    let dir = setup_household();
    save_may_plan(&dir);

    fairsplit(&dir)
        .args(["summary", "The Flat", "2024-05", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Month,Category,Category Amount,Member,Weight,Share",
        ))
        .stdout(predicate::str::contains("2024-05,Rent,100.00,Alex,0.625,62.50"));
}

#[test]
fn test_resaving_replaces_plan() {
    let dir = setup_household();
    save_may_plan(&dir);

    fairsplit(&dir)
        .args([
            "plan",
            "save",
            "The Flat",
            "2024-05",
            "--category",
            "Rent=120",
            "--mode",
            "equal",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated plan for The Flat 2024-05"));

    let summary = summary_json(&dir);
    assert_eq!(summary["totalBudget"], 12000);
    assert_eq!(summary["split"]["mode"], "equal");
    assert_eq!(summary["people"][0]["total"], 6000);
    assert_eq!(summary["categories"].as_array().unwrap().len(), 1);

    fairsplit(&dir)
        .args(["plan", "list", "The Flat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-05").count(1));
}

#[test]
fn test_invalid_categories_are_dropped() {
    let dir = setup_household();

    fairsplit(&dir)
        .args([
            "plan",
            "save",
            "The Flat",
            "2024-06",
            "--category",
            "Rent=100",
            "--category",
            "Refund=-5",
            "--category",
            "Mystery=lots",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Categories: 1"))
        .stdout(predicate::str::contains("Dropped 2 invalid categories"));
}

#[test]
fn test_oversized_amounts_are_rejected() {
    let dir = setup_household();

    fairsplit(&dir)
        .args([
            "plan",
            "save",
            "The Flat",
            "2024-08",
            "--category",
            "X=90000000000000000",
            "--category",
            "Y=90000000000000000",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amounts are too large to add up"));

    fairsplit(&dir)
        .args(["plan", "show", "The Flat", "2024-08"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget plan not found"));

    fairsplit(&dir)
        .args([
            "plan",
            "save",
            "The Flat",
            "2024-08",
            "--category",
            "Rent=922337203685477581",
            "--category",
            "Food=10.999",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Categories: 0"))
        .stdout(predicate::str::contains("Dropped 2 invalid categories"));
}

#[test]
fn test_income_with_extra_decimals_is_rejected() {
    let dir = setup_household();

    fairsplit(&dir)
        .args(["household", "set-income", "The Flat", "Sam", "10.999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 2 decimal places"));
}

#[test]
fn test_split_change_to_top_earner() {
    let dir = setup_household();
    save_may_plan(&dir);

    fairsplit(&dir)
        .args([
            "plan",
            "split",
            "The Flat",
            "2024-05",
            "--mode",
            "topEarnsMore",
            "--percent-more",
            "20",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("topEarnsMore (+20%)"));

    let summary = summary_json(&dir);
    assert_eq!(summary["split"]["percentMore"], 20.0);
    assert_eq!(summary["people"][0]["weight"], 0.5455);
    assert_eq!(summary["people"][1]["weight"], 0.4545);

    let people = summary["people"].as_array().unwrap();
    let total: i64 = people.iter().map(|p| p["total"].as_i64().unwrap()).sum();
    assert_eq!(total, 14000);
}

#[test]
fn test_split_without_plan_fails() {
    let dir = setup_household();

    fairsplit(&dir)
        .args(["plan", "split", "The Flat", "2024-07", "--mode", "equal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget plan not found"));
}

#[test]
fn test_invalid_percent_more_fails() {
    let dir = setup_household();
    save_may_plan(&dir);

    fairsplit(&dir)
        .args([
            "plan",
            "split",
            "The Flat",
            "2024-05",
            "--mode",
            "topEarnsMore",
            "--percent-more",
            "250",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("percentMore must be a number between 0 and 200"));
}

#[test]
fn test_summary_needs_two_members() {
    let dir = setup_household();
    save_may_plan(&dir);

    fairsplit(&dir)
        .args(["household", "remove-member", "The Flat", "Sam"])
        .assert()
        .success();

    fairsplit(&dir)
        .args(["summary", "The Flat", "2024-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least two household members are required"));
}

#[test]
fn test_income_change_updates_summary() {
    let dir = setup_household();
    save_may_plan(&dir);

    fairsplit(&dir)
        .args(["household", "set-income", "The Flat", "Sam", "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$150.00 -> $250.00"));

    let summary = summary_json(&dir);
    assert_eq!(summary["people"][0]["total"], 7000);
    assert_eq!(summary["people"][1]["total"], 7000);
}

#[test]
fn test_audit_records_changes() {
    let dir = setup_household();
    save_may_plan(&dir);

    fairsplit(&dir)
        .args(["audit", "--count", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Member"))
        .stdout(predicate::str::contains("CREATE BudgetPlan"))
        .stdout(predicate::str::contains("CREATE Household").not());
}

#[test]
fn test_unknown_household() {
    let dir = TempDir::new().unwrap();

    fairsplit(&dir)
        .args(["summary", "Nowhere", "2024-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Household not found: Nowhere"));
}

#[test]
fn test_bad_month() {
    let dir = setup_household();

    fairsplit(&dir)
        .args(["plan", "show", "The Flat", "May 2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM"));
}
