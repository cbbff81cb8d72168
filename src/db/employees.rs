//! Employee registry queries.

use crate::errors::AppResult;
use crate::models::Employee;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub fn load_employee(conn: &Connection, id: &str) -> AppResult<Option<Employee>> {
    let emp = conn
        .query_row(
            "SELECT id, name FROM employees WHERE id = ?1",
            [id],
            |row| Ok(Employee::new(row.get::<_, String>(0)?, row.get(1)?)),
        )
        .optional()?;
    Ok(emp)
}

/// Employees with their number of entries, ordered by id.
pub fn list_employees(conn: &Connection) -> AppResult<Vec<(Employee, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT e.id, e.name, COUNT(w.id)
         FROM employees e
         LEFT JOIN work_entries w ON w.employee_id = e.id
         GROUP BY e.id, e.name
         ORDER BY e.id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            Employee::new(row.get::<_, String>(0)?, row.get(1)?),
            row.get::<_, i64>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_employee(conn: &Connection, emp: &Employee) -> AppResult<()> {
    conn.execute(
        "INSERT INTO employees (id, name, created_at) VALUES (?1, ?2, ?3)",
        params![emp.id, emp.name, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

/// Remove an employee; their entries go with them (ON DELETE CASCADE).
pub fn delete_employee(conn: &Connection, id: &str) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM employees WHERE id = ?1", [id])?;
    Ok(n)
}
