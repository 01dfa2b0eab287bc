mod common;
use common::{rollcall, setup_data_dir, temp_out};

use predicates::str::contains;
use serde_json::json;
use std::fs;

/// Seed the roster document directly so ids are predictable.
fn seed_roster(data_dir: &str) {
    let doc = json!({
        "1": { "id": "1", "name": "A", "trade": "Welding",
               "time_in": "", "time_out": "", "status": "absent" }
    });
    fs::write(
        format!("{data_dir}/teachers.json"),
        serde_json::to_string_pretty(&doc).unwrap(),
    )
    .unwrap();
}

#[test]
fn init_creates_the_settings_document() {
    let dir = setup_data_dir("cli_init");

    rollcall()
        .args(["--data-dir", &dir, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Initialized"));

    assert!(fs::metadata(format!("{dir}/settings.json")).is_ok());
}

#[test]
fn checkin_checkout_endday_report_round_trip() {
    let dir = setup_data_dir("cli_round_trip");
    rollcall()
        .args(["--data-dir", &dir, "--test", "init"])
        .assert()
        .success();
    seed_roster(&dir);

    rollcall()
        .args(["--data-dir", &dir, "checkin", "1", "--time", "08:50"])
        .assert()
        .success()
        .stdout(contains("present, late"));

    rollcall()
        .args(["--data-dir", &dir, "checkout", "1", "--time", "16:45"])
        .assert()
        .success()
        .stdout(contains("present, late, left_early"));

    rollcall()
        .args(["--data-dir", &dir, "end-day", "--date", "2025-03-03"])
        .assert()
        .success()
        .stdout(contains("archived under 2025-03-03"));

    // The archived day reports the recorded times for exactly one row.
    rollcall()
        .args(["--data-dir", &dir, "report", "--date", "2025-03-03"])
        .assert()
        .success()
        .stdout(contains("A"))
        .stdout(contains("08:50"))
        .stdout(contains("16:45"));

    // The live roster is reset.
    rollcall()
        .args(["--data-dir", &dir, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Absent: 1"));
}

#[test]
fn report_for_an_unarchived_date_fails_with_no_data() {
    let dir = setup_data_dir("cli_no_data");
    rollcall()
        .args(["--data-dir", &dir, "--test", "init"])
        .assert()
        .success();

    rollcall()
        .args(["--data-dir", &dir, "report", "--date", "2025-03-04"])
        .assert()
        .failure()
        .stderr(contains("No attendance data found for 2025-03-04"));
}

#[test]
fn range_report_spans_archived_days() {
    let dir = setup_data_dir("cli_range");
    rollcall()
        .args(["--data-dir", &dir, "--test", "init"])
        .assert()
        .success();
    seed_roster(&dir);

    rollcall()
        .args(["--data-dir", &dir, "checkin", "1", "--time", "08:00"])
        .assert()
        .success();
    rollcall()
        .args(["--data-dir", &dir, "end-day", "--date", "2025-03-03"])
        .assert()
        .success();
    rollcall()
        .args(["--data-dir", &dir, "checkin", "1", "--time", "09:30"])
        .assert()
        .success();
    rollcall()
        .args(["--data-dir", &dir, "end-day", "--date", "2025-03-05"])
        .assert()
        .success();

    let out = temp_out("cli_range");
    rollcall()
        .args([
            "--data-dir", &dir,
            "report", "--range", "2025-03-01:2025-03-07",
            "--out", &out,
        ])
        .assert()
        .success()
        .stdout(contains("2025-03-03"))
        .stdout(contains("2025-03-05"));

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("Date,Name,Trade,Time In,Time Out"));
    assert!(csv.contains("2025-03-03,A,Welding,08:00,Not checked out"));
    assert!(csv.contains("2025-03-05,A,Welding,09:30,Not checked out"));
}

#[test]
fn end_day_requires_admin_role() {
    let dir = setup_data_dir("cli_forbidden");
    rollcall()
        .args(["--data-dir", &dir, "--test", "init"])
        .assert()
        .success();
    seed_roster(&dir);

    rollcall()
        .args(["--data-dir", &dir, "--role", "user", "end-day"])
        .assert()
        .failure()
        .stderr(contains("admin"));
}

#[test]
fn checkin_rejects_malformed_times_and_unknown_ids() {
    let dir = setup_data_dir("cli_bad_input");
    rollcall()
        .args(["--data-dir", &dir, "--test", "init"])
        .assert()
        .success();
    seed_roster(&dir);

    rollcall()
        .args(["--data-dir", &dir, "checkin", "1", "--time", "8am"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    rollcall()
        .args(["--data-dir", &dir, "checkin", "42", "--time", "08:00"])
        .assert()
        .failure()
        .stderr(contains("No person with id 42"));
}

#[test]
fn roster_add_and_list() {
    let dir = setup_data_dir("cli_roster");
    rollcall()
        .args(["--data-dir", &dir, "--test", "init"])
        .assert()
        .success();

    rollcall()
        .args(["--data-dir", &dir, "roster", "add", "Dana", "--trade", "Masonry"])
        .assert()
        .success()
        .stdout(contains("Added Dana"));

    rollcall()
        .args(["--data-dir", &dir, "roster", "list"])
        .assert()
        .success()
        .stdout(contains("Dana"))
        .stdout(contains("Masonry"))
        .stdout(contains("absent"));
}

#[test]
fn settings_set_changes_the_lateness_threshold() {
    let dir = setup_data_dir("cli_settings");
    rollcall()
        .args(["--data-dir", &dir, "--test", "init"])
        .assert()
        .success();
    seed_roster(&dir);

    rollcall()
        .args(["--data-dir", &dir, "settings", "--start", "09:00", "--grace", "0"])
        .assert()
        .success()
        .stdout(contains("Settings updated"));

    // 08:50 is now early instead of late.
    rollcall()
        .args(["--data-dir", &dir, "checkin", "1", "--time", "08:50"])
        .assert()
        .success()
        .stdout(contains("[present]"));
}

#[test]
fn watch_renders_a_fixed_number_of_frames() {
    let dir = setup_data_dir("cli_watch");
    rollcall()
        .args(["--data-dir", &dir, "--test", "init"])
        .assert()
        .success();
    seed_roster(&dir);

    rollcall()
        .args([
            "--data-dir", &dir,
            "watch", "--interval", "0", "--ticks", "2",
        ])
        .assert()
        .success()
        .stdout(contains("Total: 1"));
}
