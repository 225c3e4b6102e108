//! CLI integration tests for the `roster` binary.
//!
//! Uses `assert_cmd` to spawn `roster`, feed scripted answers on stdin, and
//! verify exit codes, stdout (prompts and tables), and stderr (logs and
//! published events).

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper: create a Command for the `roster` binary with default logging.
fn roster() -> Command {
    let mut cmd = cargo_bin_cmd!("roster");
    cmd.env_remove("ROSTER_LOG");
    cmd
}

/// Write a seed file holding two students and return its directory.
fn seed_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let students = serde_json::json!([
        {
            "id": 101,
            "name": "Asha Rao",
            "dept": "CSE",
            "score": 8.5,
            "email": "asha@college.edu",
            "mobile": "9876543210"
        },
        {
            "id": 102,
            "name": "Ravi Kumar",
            "dept": "ECE",
            "score": 7.25,
            "email": "ravi@college.edu",
            "mobile": "9123456780"
        }
    ]);
    fs::write(dir.path().join("seed.json"), students.to_string()).unwrap();
    dir
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    roster()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive student record console"));
}

#[test]
fn version_exits_0() {
    roster()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("roster"));
}

// ──────────────────────────────────────────────
// 2. Configuration errors
// ──────────────────────────────────────────────

#[test]
fn empty_score_range_exits_1() {
    roster()
        .args(["--min-score", "9", "--max-score", "1", "add"])
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("empty score range"));
}

#[test]
fn missing_seed_file_exits_1() {
    roster()
        .args(["--seed", "no/such/seed.json"])
        .write_stdin("5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error reading seed file"));
}

#[test]
fn malformed_seed_file_exits_1() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("seed.json");
    fs::write(&path, "{ not json").unwrap();

    roster()
        .arg("--seed")
        .arg(&path)
        .write_stdin("5\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid seed data"));
}

// ──────────────────────────────────────────────
// 3. Single-operation subcommands
// ──────────────────────────────────────────────

#[test]
fn add_valid_student_prints_inserted_and_publishes() {
    roster()
        .arg("add")
        .write_stdin("Asha Rao\n101\nCSE\n8.5\nasha@college.edu\n9876543210\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inserted"))
        .stderr(predicate::str::contains("Insertion Succeeded"));
}

#[test]
fn add_respects_configured_score_range() {
    roster()
        .args(["--max-score", "4", "add"])
        .write_stdin("Asha Rao\n101\nCSE\n8.5\nasha@college.edu\n9876543210\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Student CGPA must be between 0 and 4",
        ))
        .stdout(predicate::str::contains("Insertion failed"))
        .stderr(predicate::str::contains("Insertion Failed: other"));
}

#[test]
fn add_non_numeric_id_aborts_without_event() {
    roster()
        .arg("add")
        .write_stdin("Asha Rao\nabc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation aborted"))
        .stderr(predicate::str::contains("Insertion").not());
}

#[test]
fn remove_unknown_id_prints_no_record_found() {
    roster()
        .arg("remove")
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No record found"))
        .stderr(predicate::str::contains("Delete Failed: notexists"));
}

#[test]
fn remove_seeded_student() {
    let dir = seed_dir();
    roster()
        .arg("--seed")
        .arg(dir.path().join("seed.json"))
        .arg("remove")
        .write_stdin("102\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"))
        .stderr(predicate::str::contains("Delete Succeeded"));
}

#[test]
fn update_unknown_id_skips_field_prompts() {
    roster()
        .arg("update")
        .write_stdin("77\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not exists"))
        .stdout(predicate::str::contains("Student Name [").not())
        .stderr(predicate::str::contains("Update Failed: notexists"));
}

#[test]
fn search_seeded_by_department() {
    let dir = seed_dir();
    roster()
        .arg("--seed")
        .arg(dir.path().join("seed.json"))
        .arg("search")
        .write_stdin("3\nECE\n9\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ravi@college.edu"))
        .stdout(predicate::str::contains("asha@college.edu").not())
        .stdout(predicate::str::contains("Wrong Choice! Enter Again!!"))
        .stdout(predicate::str::contains("***THANKS FOR USING SEARCH MENU***"))
        .stderr(predicate::str::contains("Search Succeeded"));
}

#[test]
fn seed_records_failing_validation_are_skipped() {
    let dir = TempDir::new().unwrap();
    let students = serde_json::json!([
        {
            "id": 103,
            "name": "Meera Iyer",
            "dept": "CSE",
            "score": 99,
            "email": "meera@college.edu",
            "mobile": "9988776655"
        }
    ]);
    let seed = dir.path().join("seed.json");
    fs::write(&seed, students.to_string()).unwrap();

    roster()
        .arg("--seed")
        .arg(&seed)
        .arg("search")
        .write_stdin("1\n103\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("*****NO DATA FOUND*****"))
        .stdout(predicate::str::contains("meera@college.edu").not())
        .stderr(predicate::str::contains("invalid student in seed"));
}

#[test]
fn search_with_no_match_shows_banner() {
    roster()
        .arg("search")
        .write_stdin("1\n404\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("*****NO DATA FOUND*****"))
        .stderr(predicate::str::contains("Search Failed: no record found"));
}

// ──────────────────────────────────────────────
// 4. Main menu session
// ──────────────────────────────────────────────

#[test]
fn main_menu_survives_undecodable_input() {
    roster()
        .write_stdin(b"\xe9\n5\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter a number."))
        .stdout(predicate::str::contains("***THANK YOU***"));
}

#[test]
fn main_menu_session_add_update_exit() {
    let script = concat!(
        "1\nAsha Rao\n101\nCSE\n8.5\nasha@college.edu\n9876543210\n",
        "3\n101\nAsha R\nEEE\n9\nasha.r@college.edu\n9000011111\n",
        "5\n",
    );
    roster()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Inserted"))
        .stdout(predicate::str::contains("Student Name [ Asha Rao ]"))
        .stdout(predicate::str::contains("Updated"))
        .stdout(predicate::str::contains("***THANK YOU***"))
        .stderr(predicate::str::contains("Update Succeeded"));
}

#[test]
fn main_menu_ends_on_closed_input() {
    roster()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("***STUDENT MANAGEMENT***"));
}

#[test]
fn quiet_suppresses_event_logs() {
    roster()
        .args(["--quiet", "remove"])
        .write_stdin("5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No record found"))
        .stderr(predicate::str::contains("Delete Failed").not());
}
