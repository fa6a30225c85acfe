use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mess(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mess").unwrap();
    cmd.env("MESS_LEDGER_DATA_DIR", dir.path())
        .env_remove("MESS_LOG")
        .args(["--month", "Sep-25"]);
    cmd
}

fn seed_two_members(dir: &TempDir) {
    mess(dir)
        .args(["member", "add", "Rahim", "--meals", "40", "--bazar", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added member: Rahim (Sep-25)"));
    mess(dir)
        .args(["member", "add", "Karim", "--meals", "20", "--bazar", "500"])
        .assert()
        .success();
    mess(dir)
        .args(["shared", "set", "bua", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("৳1000.00"));
}

#[test]
fn member_list_shows_settlements() {
    let dir = TempDir::new().unwrap();
    seed_two_members(&dir);

    mess(&dir)
        .args(["member", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Members for Sep-25"))
        .stdout(predicate::str::contains("GIVEN: ৳166.7"))
        .stdout(predicate::str::contains("GIVEN: ৳833.3"));
}

#[test]
fn summary_shows_meal_rate_and_totals() {
    let dir = TempDir::new().unwrap();
    seed_two_members(&dir);

    mess(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mess Summary: Sep-25"))
        .stdout(predicate::str::contains("41.67"))
        .stdout(predicate::str::contains("৳3500.00"));
}

#[test]
fn edit_member_recomputes_balance() {
    let dir = TempDir::new().unwrap();
    seed_two_members(&dir);

    mess(&dir)
        .args(["member", "edit", "karim", "--bazar", "1500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated member: Karim"));

    mess(&dir)
        .args(["member", "show", "Karim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bazar:       ৳1500.00"));
}

#[test]
fn malformed_number_is_treated_as_zero() {
    let dir = TempDir::new().unwrap();

    mess(&dir)
        .args(["member", "add", "Rahim", "--meals", "lots", "--bazar", "abc5"])
        .assert()
        .success();

    mess(&dir)
        .args(["member", "show", "rahim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meals:       0"))
        .stdout(predicate::str::contains("Bazar:       ৳0.00"));
}

#[test]
fn duplicate_member_is_rejected() {
    let dir = TempDir::new().unwrap();

    mess(&dir).args(["member", "add", "Rahim"]).assert().success();
    mess(&dir)
        .args(["member", "add", "rahim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn add_then_delete_leaves_month_empty() {
    let dir = TempDir::new().unwrap();

    mess(&dir).args(["member", "add", "Rahim"]).assert().success();
    mess(&dir)
        .args(["member", "delete", "Rahim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted member: Rahim"));

    mess(&dir)
        .args(["member", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No members added for Sep-25."));
}

#[test]
fn corrupted_data_file_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("mess.json"), "{ this is not json").unwrap();

    mess(&dir)
        .args(["member", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No members added for Sep-25."));

    assert_eq!(
        fs::read_to_string(data_dir.join("mess.json.corrupt")).unwrap(),
        "{ this is not json"
    );
}

#[test]
fn invalid_month_is_rejected() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("mess")
        .unwrap()
        .env("MESS_LEDGER_DATA_DIR", dir.path())
        .args(["--month", "Sept 2025", "summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --month"));
}

#[test]
fn export_csv_and_json() {
    let dir = TempDir::new().unwrap();
    seed_two_members(&dir);

    let csv_path = dir.path().join("sep.csv");
    mess(&dir)
        .args(["export", csv_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported Sep-25"));
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("Month,Member,Meals,Bazar"));
    assert!(csv.contains("Sep-25,Rahim,40,2000.00"));

    let json_path = dir.path().join("all.json");
    mess(&dir)
        .args(["export", json_path.to_str().unwrap(), "--format", "json", "--all-months"])
        .assert()
        .success();
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    let months = value["months"].as_array().unwrap();
    assert!(months
        .iter()
        .any(|m| m["record"]["month"] == "Sep-25" && m["balances"].as_array().unwrap().len() == 2));
}

#[test]
fn months_lists_stored_months() {
    let dir = TempDir::new().unwrap();
    seed_two_members(&dir);

    mess(&dir)
        .arg("months")
        .assert()
        .success()
        .stdout(predicate::str::contains("* Sep-25"))
        .stdout(predicate::str::contains(
            "previous: --month Aug-25, next: --month Oct-25",
        ));
}

#[test]
fn months_all_does_not_mark_untouched_months() {
    let dir = TempDir::new().unwrap();
    seed_two_members(&dir);

    // Opening a month creates an empty record for it.
    Command::cargo_bin("mess")
        .unwrap()
        .env("MESS_LEDGER_DATA_DIR", dir.path())
        .args(["--month", "Oct-25", "member", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No members added for Oct-25."));

    mess(&dir)
        .args(["months", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Oct-25+").not())
        .stdout(predicate::str::contains("+ has data"));
}
