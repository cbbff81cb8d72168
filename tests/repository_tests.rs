mod common;
use chrono::NaiveTime;
use common::{setup_test_db, ymd};
use punchclock::db::log::load_log;
use punchclock::db::migrate::{applied_versions, run_pending_migrations};
use punchclock::db::{SqliteRepository, WorkEntryRepository};
use punchclock::errors::AppError;
use punchclock::models::{Employee, EntrySource, NewEntry};

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn repo_with(ids: &[&str]) -> SqliteRepository {
    let mut repo = SqliteRepository::in_memory().unwrap();
    for id in ids {
        repo.add_employee(&Employee::new(*id, None)).unwrap();
    }
    repo
}

#[test]
fn test_entries_are_listed_in_creation_order_per_employee() {
    let mut repo = repo_with(&["A", "B"]);

    repo.create_entry(&NewEntry::custom("A", ymd("2025-01-10"), hm(9, 0), Some(hm(10, 0)))).unwrap();
    repo.create_entry(&NewEntry::custom("B", ymd("2025-01-01"), hm(9, 0), None)).unwrap();
    repo.create_entry(&NewEntry::custom("A", ymd("2025-01-02"), hm(9, 0), None)).unwrap();

    let a = repo.list_entries("A").unwrap();
    let dates: Vec<String> = a.iter().map(|e| e.date_str()).collect();
    assert_eq!(dates, vec!["2025-01-10", "2025-01-02"]);
    assert!(a.iter().all(|e| e.employee_id == "A"));

    assert_eq!(repo.list_entries("B").unwrap().len(), 1);
    assert!(repo.list_entries("C").unwrap().is_empty());
}

#[test]
fn test_create_entry_round_trips_all_fields() {
    let mut repo = repo_with(&["A"]);

    let created = repo
        .create_entry(&NewEntry::punch("A", ymd("2025-01-05"), NaiveTime::from_hms_opt(8, 1, 59).unwrap()))
        .unwrap();
    let stored = repo.list_entries("A").unwrap();

    assert_eq!(stored, vec![created.clone()]);
    assert_eq!(created.day_of_week, "Sunday");
    assert_eq!(created.source, EntrySource::Clock);
    assert_eq!(created.time_in_str(), "08:01:59");
    assert!(created.is_open());
}

#[test]
fn test_entry_ids_are_never_reused() {
    let mut repo = repo_with(&["A"]);

    let first = repo.create_entry(&NewEntry::custom("A", ymd("2025-01-06"), hm(9, 0), Some(hm(17, 0)))).unwrap();
    let second = repo.create_entry(&NewEntry::custom("A", ymd("2025-01-07"), hm(9, 0), Some(hm(17, 0)))).unwrap();
    repo.delete_entry("A", second.id).unwrap();

    let third = repo.create_entry(&NewEntry::custom("A", ymd("2025-01-08"), hm(9, 0), Some(hm(17, 0)))).unwrap();

    assert!(second.id > first.id);
    assert!(third.id > second.id);
}

#[test]
fn test_create_entry_for_unknown_employee_is_not_found() {
    let mut repo = repo_with(&[]);
    let err = repo
        .create_entry(&NewEntry::punch("GHOST", ymd("2025-01-06"), hm(9, 0)))
        .unwrap_err();
    assert!(matches!(err, AppError::EmployeeNotFound(id) if id == "GHOST"));
}

#[test]
fn test_close_open_entry_sets_time_out_once() {
    let mut repo = repo_with(&["A"]);
    let open = repo.create_entry(&NewEntry::punch("A", ymd("2025-01-06"), hm(9, 0))).unwrap();

    let closed = repo.close_open_entry(open.id, hm(17, 15)).unwrap();
    assert_eq!(closed.time_out, Some(hm(17, 15)));
    assert_eq!(closed.worked_minutes(), Some(8 * 60 + 15));

    let again = repo.close_open_entry(open.id, hm(18, 0)).unwrap_err();
    assert!(again.is_validation());
    assert_eq!(repo.list_entries("A").unwrap()[0].time_out, Some(hm(17, 15)));

    assert!(matches!(
        repo.close_open_entry(4242, hm(18, 0)),
        Err(AppError::EntryNotFound(4242))
    ));
}

#[test]
fn test_delete_is_scoped_to_the_owner() {
    let mut repo = repo_with(&["A", "B"]);
    let entry = repo.create_entry(&NewEntry::custom("A", ymd("2025-01-06"), hm(9, 0), Some(hm(17, 0)))).unwrap();

    assert!(matches!(
        repo.delete_entry("B", entry.id),
        Err(AppError::EntryNotFound(_))
    ));
    assert_eq!(repo.list_entries("A").unwrap().len(), 1);

    repo.delete_entry("A", entry.id).unwrap();
    assert!(repo.list_entries("A").unwrap().is_empty());
}

#[test]
fn test_duplicate_employee_is_rejected() {
    let mut repo = repo_with(&["A"]);
    let err = repo.add_employee(&Employee::new("A", Some("Other".into()))).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.to_string(), "Employee ID already exists: A");
}

#[test]
fn test_get_employee_returns_none_for_unknown_id() {
    let mut repo = repo_with(&[]);
    repo.add_employee(&Employee::new("A", Some("Ada".into()))).unwrap();

    let found = repo.get_employee("A").unwrap().unwrap();
    assert_eq!(found.label(), "Ada (A)");
    assert!(repo.get_employee("Z").unwrap().is_none());
}

#[test]
fn test_removing_an_employee_removes_their_entries() {
    let mut repo = repo_with(&["A", "B"]);
    repo.create_entry(&NewEntry::custom("A", ymd("2025-01-06"), hm(9, 0), Some(hm(17, 0)))).unwrap();
    repo.create_entry(&NewEntry::custom("B", ymd("2025-01-06"), hm(9, 0), Some(hm(17, 0)))).unwrap();

    repo.remove_employee("A").unwrap();

    assert!(repo.list_entries("A").unwrap().is_empty());
    assert_eq!(repo.list_all_entries().unwrap().len(), 1);
    assert!(matches!(
        repo.remove_employee("A"),
        Err(AppError::EmployeeNotFound(_))
    ));

    let employees = repo.list_employees().unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].0.id, "B");
    assert_eq!(employees[0].1, 1);
}

#[test]
fn test_mutations_are_audited() {
    let mut repo = repo_with(&["A"]);
    let e = repo.create_entry(&NewEntry::punch("A", ymd("2025-01-06"), hm(9, 0))).unwrap();
    repo.close_open_entry(e.id, hm(10, 0)).unwrap();
    repo.delete_entry("A", e.id).unwrap();

    let ops: Vec<String> = load_log(&repo.pool().conn)
        .unwrap()
        .into_iter()
        .map(|r| r.operation)
        .filter(|op| op != "migration_applied")
        .collect();

    assert_eq!(ops, vec!["employee_add", "clock_in", "clock_out", "del"]);
}

#[test]
fn test_migrations_apply_once() {
    let mut repo = SqliteRepository::in_memory().unwrap();
    let conn = &repo.pool().conn;

    let first = applied_versions(conn).unwrap();
    run_pending_migrations(conn).unwrap();
    let second = applied_versions(conn).unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

#[test]
fn test_reopening_a_file_database_keeps_entries() {
    let db_path = setup_test_db("repo_reopen");

    {
        let mut repo = SqliteRepository::open(&db_path).unwrap();
        repo.add_employee(&Employee::new("A", None)).unwrap();
        repo.create_entry(&NewEntry::custom("A", ymd("2025-01-06"), hm(9, 0), Some(hm(17, 0)))).unwrap();
    }

    let mut repo = SqliteRepository::open(&db_path).unwrap();
    let entries = repo.list_entries("A").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].source, EntrySource::Custom);
    assert_eq!(applied_versions(&repo.pool().conn).unwrap().len(), 2);
}
