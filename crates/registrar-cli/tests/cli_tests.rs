//! Integration tests for the `registrar` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise every subcommand
//! through the actual binary, including config loading, holidays, JSON output
//! and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the small_term.toml fixture.
fn small_term_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/small_term.toml")
}

/// Helper: path to the bad_slots.toml fixture.
fn bad_slots_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/bad_slots.toml")
}

fn registrar() -> Command {
    Command::cargo_bin("registrar").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Schedule subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn schedule_one_day() {
    registrar()
        .args(["schedule", "Sunday"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Schedule for Sunday:\n"))
        .stdout(predicate::str::contains(
            "8:30 AM - 10:30 AM: Data Structures (CS101), Priority: High, Credit Hours: 3, Enrolled: 0/25",
        ))
        .stdout(predicate::str::contains("2:30 PM - 4:30 PM: Mathematics (CS104)"));
}

#[test]
fn schedule_all_days() {
    registrar()
        .arg("schedule")
        .assert()
        .success()
        .stdout(predicate::str::contains("Schedule for Sunday:"))
        .stdout(predicate::str::contains("Schedule for Monday:"))
        .stdout(predicate::str::contains("Schedule for Tuesday:"))
        .stdout(predicate::str::contains("Schedule for Wednesday:"))
        .stdout(predicate::str::contains("Big Data (CS116)"));
}

#[test]
fn schedule_unknown_day_is_not_an_error() {
    registrar()
        .args(["schedule", "Friday"])
        .assert()
        .success()
        .stdout("Schedule for Friday:\nNo courses available.\n");
}

#[test]
fn holiday_flag_empties_day() {
    registrar()
        .args(["--holiday", "Sunday", "schedule", "Sunday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Holiday set for Sunday."))
        .stdout(predicate::str::contains("No courses available."))
        .stdout(predicate::str::contains("Data Structures").not());
}

#[test]
fn invalid_holiday_is_reported_but_not_fatal() {
    registrar()
        .args(["--holiday", "Funday", "schedule", "Monday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid day: Funday"))
        .stdout(predicate::str::contains("Machine Learning (CS105)"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Courses subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn courses_text_lists_every_cell() {
    let output = registrar().arg("courses").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 16);
    assert!(stdout.starts_with("Sunday 8:30 AM - 10:30 AM: Data Structures (CS101)"));
}

#[test]
fn courses_json_is_valid() {
    let output = registrar().args(["courses", "--json"]).output().unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = value.as_array().expect("top-level array");
    assert_eq!(entries.len(), 16);
    assert_eq!(entries[0]["day"], "Sunday");
    assert_eq!(entries[0]["time"], "8:30 AM - 10:30 AM");
    assert_eq!(entries[0]["course"]["code"], "CS101");
    assert_eq!(entries[0]["course"]["max_students"], 25);
}

#[test]
fn courses_json_skips_holidays() {
    let output = registrar()
        .args(["--holiday", "Monday", "courses", "--json"])
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json_start = stdout.find('[').expect("JSON array in output");
    let value: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 12);
    assert!(entries.iter().all(|e| e["day"] != "Monday"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Lookup subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn lookup_finds_first_day() {
    registrar()
        .args(["lookup", "10:30 AM - 12:30 PM"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Lecture at 10:30 AM - 12:30 PM: AI (CS102)",
        ));
}

#[test]
fn lookup_after_holiday_uses_next_day() {
    registrar()
        .args(["--holiday", "Sunday", "lookup", "10:30 AM - 12:30 PM"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Lecture at 10:30 AM - 12:30 PM: Cyber Security (CS106)",
        ));
}

#[test]
fn lookup_unknown_time() {
    registrar()
        .args(["lookup", "7:00 PM"])
        .assert()
        .success()
        .stdout("No lecture at 7:00 PM.\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// Enroll subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn enroll_and_drop() {
    registrar()
        .args(["enroll", "--student", "Ali", "CS101", "CS105", "--drop", "CS101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully enrolled in Data Structures!"))
        .stdout(predicate::str::contains("Successfully enrolled in Machine Learning!"))
        .stdout(predicate::str::contains("Successfully dropped Data Structures."))
        .stdout(predicate::str::contains(
            "ID: UOB-0001, Name: Ali, Enrolled Classes: CS105",
        ))
        .stdout(predicate::str::contains(
            "Enrolled in Data Structures.\nEnrolled in Machine Learning.\nDropped Data Structures.",
        ));
}

#[test]
fn enroll_same_course_twice_conflicts() {
    registrar()
        .args(["enroll", "-s", "Ali", "CS101", "CS101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Conflict with Data Structures."));
}

#[test]
fn enroll_unknown_code_and_drop_unknown_code() {
    registrar()
        .args(["enroll", "-s", "Ali", "XX999", "--drop", "CS101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Course not found: XX999"))
        .stdout(predicate::str::contains("Error: Course not found: CS101"));
}

#[test]
fn enroll_requires_codes() {
    registrar()
        .args(["enroll", "--student", "Ali"])
        .assert()
        .failure();
}

#[test]
fn enroll_with_config_applies_settings() {
    registrar()
        .args(["--config", small_term_path(), "enroll", "-s", "Ali"])
        .args(["T001", "T002", "T003"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully enrolled in Intro Programming!"))
        .stdout(predicate::str::contains("Successfully enrolled in Discrete Math!"))
        .stdout(predicate::str::contains(
            "Error: You have reached the maximum number of classes (2).",
        ))
        .stdout(predicate::str::contains(
            "ID: STU-0001, Name: Ali, Enrolled Classes: T001, T002",
        ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Config handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn config_seed_drives_schedule() {
    registrar()
        .args(["--config", small_term_path(), "schedule", "Sunday"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "09:00 - 10:00: Intro Programming (T001), Priority: High, Credit Hours: 3, Enrolled: 0/1",
        ))
        .stdout(predicate::str::contains(
            "10:00 - 11:00: Discrete Math (T002), Priority: Normal, Credit Hours: 4, Enrolled: 0/25",
        ));
}

#[test]
fn missing_config_fails() {
    registrar()
        .args(["--config", "/nonexistent/term.toml", "schedule"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn invalid_seed_fails() {
    registrar()
        .args(["--config", bad_slots_path(), "schedule"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to build schedule"));
}

#[test]
fn no_subcommand_fails() {
    registrar().assert().failure();
}

// ─────────────────────────────────────────────────────────────────────────────
// Demo subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn demo_walkthrough() {
    registrar()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully enrolled in Data Structures!"))
        .stdout(predicate::str::contains("Attendance for Data Structures:\nUOB-0001: present, absent"))
        .stdout(predicate::str::contains("Successfully dropped Data Structures."))
        .stdout(predicate::str::contains("Holiday set for Sunday."))
        .stdout(predicate::str::contains(
            "Updated Schedule for Sunday:\nSchedule for Sunday:\nNo courses available.",
        ))
        .stdout(predicate::str::contains(
            "Lecture at 10:30 AM - 12:30 PM: Cyber Security (CS106)",
        ));
}

#[test]
fn demo_with_every_day_off_fails() {
    registrar()
        .args(["--holiday", "Sunday", "--holiday", "Monday"])
        .args(["--holiday", "Tuesday", "--holiday", "Wednesday", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Every day is a holiday"));
}
