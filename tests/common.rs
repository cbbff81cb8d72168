#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use punchclock::models::{EntrySource, WorkEntry};
use punchclock::utils::date::weekday_name;
use punchclock::utils::time::parse_time;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pc() -> Command {
    cargo_bin_cmd!("punchclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchclock_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB and register employee `E100` ("Ada Lovelace").
pub fn init_db_with_employee(db_path: &str) {
    pc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    pc().args([
        "--db",
        db_path,
        "--test",
        "employee",
        "add",
        "E100",
        "--name",
        "Ada Lovelace",
    ])
    .assert()
    .success();
}

/// Add a custom entry for `E100` through the CLI.
pub fn add_entry(db_path: &str, date: &str, time_in: &str, time_out: Option<&str>) {
    let mut args = vec!["--db", db_path, "--test", "-e", "E100", "add", date, "--in", time_in];
    if let Some(out) = time_out {
        args.extend(["--out", out]);
    }
    pc().args(args).assert().success();
}

/// Initialize the DB with two weeks of closed entries for `E100`.
pub fn init_db_with_data(db_path: &str) {
    init_db_with_employee(db_path);
    add_entry(db_path, "2025-01-06", "09:00", Some("17:00"));
    add_entry(db_path, "2025-01-07", "08:30", Some("12:15"));
    add_entry(db_path, "2025-01-13", "09:00", Some("17:30"));
}

/// In-memory entry for engine tests.
pub fn entry(id: i64, date: &str, time_in: &str, time_out: Option<&str>) -> WorkEntry {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date");
    WorkEntry {
        id,
        employee_id: "E100".to_string(),
        date: d,
        day_of_week: weekday_name(d),
        time_in: parse_time(time_in).expect("valid time in"),
        time_out: time_out.map(|t| parse_time(t).expect("valid time out")),
        source: EntrySource::Clock,
    }
}

pub fn ymd(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}
