//! Query execution plumbing shared by every report: run a fixed SQL
//! statement, capture the column labels from statement metadata, and
//! stringify each cell the way the renderer expects.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::ToSql;
use rusqlite::types::ValueRef;

/// Column labels plus stringified rows, ready for the table renderer.
pub struct QueryOutput {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn fetch(pool: &DbPool, sql: &str) -> AppResult<QueryOutput> {
    fetch_with(pool, sql, &[])
}

pub fn fetch_with(pool: &DbPool, sql: &str, params: &[&dyn ToSql]) -> AppResult<QueryOutput> {
    let mut stmt = pool.conn.prepare(sql)?;
    let headers: Vec<String> = stmt.column_names().iter().map(|s| s.to_string()).collect();
    let ncols = headers.len();

    let mut rows = Vec::new();
    let mut raw = stmt.query(params)?;
    while let Some(row) = raw.next()? {
        let mut cells = Vec::with_capacity(ncols);
        for i in 0..ncols {
            cells.push(cell_to_string(row.get_ref(i)?));
        }
        rows.push(cells);
    }

    Ok(QueryOutput { headers, rows })
}

/// Every user table, `sqlite_master` order by name. The SHOW TABLES analogue.
pub fn user_tables(pool: &DbPool) -> AppResult<Vec<String>> {
    let mut stmt = pool.conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
         ORDER BY name",
    )?;

    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every employee ID on file, used when `generate` gets no explicit list.
pub fn all_employee_ids(pool: &DbPool) -> AppResult<Vec<i64>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT EmployeeID FROM Employee ORDER BY EmployeeID")?;

    let rows = stmt.query_map([], |row| row.get::<_, i64>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Canonical display form of a cell. Numeric and date formatting is the
/// SQL layer's business; NULL and the empty string are indistinguishable
/// on screen, which is intentional.
fn cell_to_string(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(r) => r.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).to_string(),
        ValueRef::Blob(b) => format!("<{} bytes>", b.len()),
    }
}
