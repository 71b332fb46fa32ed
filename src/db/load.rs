//! Bulk load of generated time punches.
//!
//! The destination table is cleared and repopulated inside a single
//! transaction: either every record lands or the table keeps its previous
//! contents.

use crate::errors::AppResult;
use crate::models::shift::ShiftRecord;
use rusqlite::{Connection, params};

pub fn bulk_load_hours(conn: &mut Connection, records: &[ShiftRecord]) -> AppResult<usize> {
    let tx = conn.transaction()?;

    // SQLite has no TRUNCATE; an unqualified DELETE inside the transaction
    // keeps the clear reversible alongside the inserts.
    tx.execute("DELETE FROM Hours", [])?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO Hours (EmployeeID, DateWorked, StartShift, EndShift, HoursWorked)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;

        for rec in records {
            stmt.execute(params![
                rec.employee_id,
                rec.date_str(),
                rec.start_str(),
                rec.end_str(),
                rec.hours,
            ])?;
        }
    }

    tx.commit()?;
    Ok(records.len())
}
