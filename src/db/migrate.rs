use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, params};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250105_0001_create_employees",
        description: "Created employees table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS employees (
            id          TEXT PRIMARY KEY NOT NULL,
            name        TEXT,
            created_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250105_0002_create_work_entries",
        description: "Created work_entries table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS work_entries (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id  TEXT NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
            date         TEXT NOT NULL,
            day_of_week  TEXT NOT NULL,
            time_in      TEXT NOT NULL,
            time_out     TEXT,
            source       TEXT NOT NULL DEFAULT 'clock' CHECK(source IN ('clock','custom')),
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_work_entries_employee ON work_entries(employee_id, id);
        CREATE INDEX IF NOT EXISTS idx_work_entries_date ON work_entries(date);
        "#,
    },
];

/// Ensure that the `log` table exists; it also records applied migrations.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {e}", m.version)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![chrono::Local::now().to_rfc3339(), m.version, m.description],
    )?;

    tx.commit()?;
    Ok(())
}

/// Public entry point: run all pending migrations, oldest first.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        success(format!("Migration applied: {}", m.version));
    }

    Ok(())
}

/// Versions recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
