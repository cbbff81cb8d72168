use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_entry, init_db_with_data, init_db_with_employee, pc, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    pc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_employee_add_show_list() {
    let db_path = setup_test_db("employee_crud");
    init_db_with_employee(&db_path);

    pc().args(["--db", &db_path, "employee", "show", "E100"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace (E100)"))
        .stdout(contains("Entries: 0"));

    pc().args(["--db", &db_path, "employee", "add", "E200"])
        .assert()
        .success();

    pc().args(["--db", &db_path, "employee", "list"])
        .assert()
        .success()
        .stdout(contains("E100"))
        .stdout(contains("E200"))
        .stdout(contains("Ada Lovelace"));
}

#[test]
fn test_employee_duplicate_id_fails() {
    let db_path = setup_test_db("employee_dup");
    init_db_with_employee(&db_path);

    pc().args(["--db", &db_path, "employee", "add", "E100"])
        .assert()
        .failure()
        .stderr(contains("Employee ID already exists: E100"));
}

#[test]
fn test_unknown_employee_cannot_log_in() {
    let db_path = setup_test_db("employee_unknown");
    init_db_with_employee(&db_path);

    pc().args(["--db", &db_path, "-e", "NOBODY", "status"])
        .assert()
        .failure()
        .stderr(contains("Employee not found: NOBODY"));
}

#[test]
fn test_employee_delete_removes_entries() {
    let db_path = setup_test_db("employee_del");
    init_db_with_data(&db_path);

    pc().args(["--db", &db_path, "employee", "del", "E100", "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    pc().args(["--db", &db_path, "-e", "E100", "list"])
        .assert()
        .failure()
        .stderr(contains("Employee not found"));
}

#[test]
fn test_status_and_punch_toggle() {
    let db_path = setup_test_db("punch_toggle");
    init_db_with_employee(&db_path);

    pc().args(["--db", &db_path, "-e", "E100", "status"])
        .assert()
        .success()
        .stdout(contains("Ready to Clock In"));

    pc().args(["--db", &db_path, "-e", "E100", "punch"])
        .assert()
        .success()
        .stdout(contains("Clocked in at"))
        .stdout(contains("Next action: Clock Out"));

    pc().args(["--db", &db_path, "-e", "E100", "status"])
        .assert()
        .success()
        .stdout(contains("Ready to Clock Out"))
        .stdout(contains("Clocked in since"));

    pc().args(["--db", &db_path, "-e", "E100", "punch"])
        .assert()
        .success()
        .stdout(contains("Clocked out at"))
        .stdout(contains("Next action: Clock In"));

    pc().args(["--db", &db_path, "-e", "E100", "list"])
        .assert()
        .success()
        .stdout(contains("Clock-Out: N/A").not());
}

#[test]
fn test_add_without_date_fails_validation() {
    let db_path = setup_test_db("add_empty_date");
    init_db_with_employee(&db_path);

    pc().args(["--db", &db_path, "-e", "E100", "add", "", "--in", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Date is required."));
}

#[test]
fn test_add_without_time_in_fails_validation() {
    let db_path = setup_test_db("add_no_in");
    init_db_with_employee(&db_path);

    pc().args(["--db", &db_path, "-e", "E100", "add", "2025-01-06"])
        .assert()
        .failure()
        .stderr(contains("Clock-in time is required."));
}

#[test]
fn test_add_rejects_bad_time() {
    let db_path = setup_test_db("add_bad_time");
    init_db_with_employee(&db_path);

    pc().args([
        "--db", &db_path, "-e", "E100", "add", "2025-01-06", "--in", "9h", "--out", "17:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid time format"));
}

#[test]
fn test_add_prints_rendered_line() {
    let db_path = setup_test_db("add_line");
    init_db_with_employee(&db_path);

    pc().args([
        "--db", &db_path, "-e", "E100", "add", "2025-01-06", "--in", "09:00", "--out", "17:00",
    ])
    .assert()
    .success()
    .stdout(contains(
        "Added entry #1: Monday, January 6, 2025: Clock-In: 9:00 AM, Clock-Out: 5:00 PM",
    ));
}

#[test]
fn test_custom_entries_refused_while_clocked_in() {
    let db_path = setup_test_db("add_two_open");
    init_db_with_employee(&db_path);
    add_entry(&db_path, "2025-01-06", "09:00", None);

    pc().args(["--db", &db_path, "-e", "E100", "add", "2025-01-07", "--in", "09:00"])
        .assert()
        .failure()
        .stderr(contains("still open"));

    pc().args([
        "--db", &db_path, "-e", "E100", "add", "2025-01-03", "--in", "09:00", "--out", "17:00",
    ])
    .assert()
    .failure()
    .stderr(contains("still open"));

    pc().args(["--db", &db_path, "-e", "E100", "punch"])
        .assert()
        .success()
        .stdout(contains("Clocked out at"));
}

#[test]
fn test_list_groups_entries_by_week() {
    let db_path = setup_test_db("list_weeks");
    init_db_with_data(&db_path);

    pc().args(["--db", &db_path, "-e", "E100", "list"])
        .assert()
        .success()
        .stdout(contains("Hours for Employee: Ada Lovelace (E100)"))
        .stdout(contains("Week of January 5, 2025"))
        .stdout(contains("Week of January 12, 2025"))
        .stdout(contains(
            "Tuesday, January 7, 2025: Clock-In: 8:30 AM, Clock-Out: 12:15 PM",
        ));
}

#[test]
fn test_list_with_range_filters_weeks() {
    let db_path = setup_test_db("list_range");
    init_db_with_data(&db_path);

    pc().args(["--db", &db_path, "-e", "E100", "list", "--range", "2025-01-13"])
        .assert()
        .success()
        .stdout(contains("Week of January 12, 2025"))
        .stdout(contains("Week of January 5, 2025").not());

    pc().args(["--db", &db_path, "-e", "E100", "list", "--range", "2025-02:2025-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}

#[test]
fn test_list_ids_and_totals() {
    let db_path = setup_test_db("list_ids_totals");
    init_db_with_data(&db_path);

    pc().args(["--db", &db_path, "-e", "E100", "list", "--ids", "--totals"])
        .assert()
        .success()
        .stdout(contains("#1*"))
        .stdout(contains("#3*"))
        .stdout(contains("(* = custom entry)"))
        .stdout(contains("11h 45m"))
        .stdout(contains("08h 30m"))
        .stdout(contains("All weeks: 20h 15m"));
}

#[test]
fn test_list_empty_employee() {
    let db_path = setup_test_db("list_empty");
    init_db_with_employee(&db_path);

    pc().args(["--db", &db_path, "-e", "E100", "list"])
        .assert()
        .success()
        .stdout(contains("No entries for Ada Lovelace (E100)."));
}

#[test]
fn test_del_removes_entry() {
    let db_path = setup_test_db("del_entry");
    init_db_with_data(&db_path);

    pc().args(["--db", &db_path, "-e", "E100", "del", "2", "--yes"])
        .assert()
        .success()
        .stdout(contains("Entry #2 has been deleted."));

    pc().args(["--db", &db_path, "-e", "E100", "list", "--ids"])
        .assert()
        .success()
        .stdout(contains("#2").not())
        .stdout(contains("#1"))
        .stdout(contains("#3"));
}

#[test]
fn test_del_unknown_entry_fails() {
    let db_path = setup_test_db("del_unknown");
    init_db_with_data(&db_path);

    pc().args(["--db", &db_path, "-e", "E100", "del", "999", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Entry not found: #999"));
}

#[test]
fn test_del_cannot_touch_another_employees_entry() {
    let db_path = setup_test_db("del_foreign");
    init_db_with_data(&db_path);

    pc().args(["--db", &db_path, "employee", "add", "E200"])
        .assert()
        .success();

    pc().args(["--db", &db_path, "-e", "E200", "del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Entry not found: #1"));

    pc().args(["--db", &db_path, "-e", "E100", "list", "--ids"])
        .assert()
        .success()
        .stdout(contains("#1"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_ops");
    init_db_with_data(&db_path);

    pc().args(["--db", &db_path, "-e", "E100", "del", "1", "--yes"])
        .assert()
        .success();

    pc().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("employee_add"))
        .stdout(contains("add"))
        .stdout(contains("del"));
}

#[test]
fn test_log_without_print_shows_hint() {
    let db_path = setup_test_db("log_hint");
    init_db_with_employee(&db_path);

    pc().args(["--db", &db_path, "log"])
        .assert()
        .success()
        .stdout(contains("log --print"))
        .stdout(contains("migration_applied").not());
}
