//! Winery schema migrations, driven by PRAGMA user_version.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

const SCHEMA_VERSION: i32 = 1;

pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if version > SCHEMA_VERSION {
        return Err(AppError::Migration(format!(
            "database schema version {} is newer than this binary supports ({})",
            version, SCHEMA_VERSION
        )));
    }

    if version < 1 {
        create_winery_schema(conn)?;
    }

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    Ok(())
}

/// Version 1: the full winery schema.
///
/// Table and column names mirror the production MySQL database so the
/// report SQL keeps its shape, `DistItemOrderID` included. Dates are TEXT
/// "YYYY-MM-DD" and shift timestamps TEXT "YYYY-MM-DD HH:MM", so date
/// comparisons in SQL work lexically.
fn create_winery_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS Department (
            DeptID   INTEGER PRIMARY KEY,
            Name     TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS Employee (
            EmployeeID INTEGER PRIMARY KEY,
            DeptID     INTEGER NOT NULL REFERENCES Department(DeptID),
            FirstName  TEXT NOT NULL,
            LastName   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS Hours (
            HoursID     INTEGER PRIMARY KEY AUTOINCREMENT,
            EmployeeID  INTEGER NOT NULL REFERENCES Employee(EmployeeID),
            DateWorked  TEXT NOT NULL,
            StartShift  TEXT,
            EndShift    TEXT,
            HoursWorked REAL NOT NULL
        );

        CREATE TABLE IF NOT EXISTS Supplier (
            SupplierID INTEGER PRIMARY KEY,
            Name       TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS SupplierDelivery (
            InvoiceID        INTEGER PRIMARY KEY,
            SupplierID       INTEGER NOT NULL REFERENCES Supplier(SupplierID),
            ExpectedDelivery TEXT NOT NULL,
            ActualDelivery   TEXT
        );

        CREATE TABLE IF NOT EXISTS Wine (
            WineID       INTEGER PRIMARY KEY,
            WineName     TEXT NOT NULL,
            YearProduced INTEGER
        );

        CREATE TABLE IF NOT EXISTS Distributor (
            DistID   INTEGER PRIMARY KEY,
            DistName TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS DistOrder (
            OrderID INTEGER PRIMARY KEY,
            DistID  INTEGER NOT NULL REFERENCES Distributor(DistID)
        );

        CREATE TABLE IF NOT EXISTS DistItemOrderID (
            OrderID  INTEGER NOT NULL REFERENCES DistOrder(OrderID),
            WineID   INTEGER NOT NULL REFERENCES Wine(WineID),
            Quantity INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_hours_employee_date ON Hours(EmployeeID, DateWorked);
        CREATE INDEX IF NOT EXISTS idx_delivery_supplier ON SupplierDelivery(SupplierID);
        CREATE INDEX IF NOT EXISTS idx_item_order_wine ON DistItemOrderID(WineID);
        "#,
    )?;
    Ok(())
}
