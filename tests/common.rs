#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn bacchus() -> Command {
    cargo_bin_cmd!("bacchus")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bacchus.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the winery schema through the CLI
pub fn init_db(db_path: &str) {
    bacchus()
        .args(["--db", db_path, "init"])
        .assert()
        .success();
}

/// Load a small reference dataset straight through the DB, the way the
/// production loader scripts would
pub fn seed_reference_data(db_path: &str) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.execute_batch(
        r#"
        INSERT INTO Department (DeptID, Name) VALUES
            (1, 'Production'),
            (2, 'Tasting Room');

        INSERT INTO Employee (EmployeeID, DeptID, FirstName, LastName) VALUES
            (6, 1, 'Janet', 'Collins'),
            (7, 1, 'Roz', 'Murphy'),
            (8, 2, 'Bob', 'Ulrich'),
            (9, 2, 'Hyun', 'Kim');

        INSERT INTO Supplier (SupplierID, Name) VALUES
            (1, 'Valley Cork and Barrel'),
            (2, 'Harvest Glass Co');

        INSERT INTO SupplierDelivery (InvoiceID, SupplierID, ExpectedDelivery, ActualDelivery) VALUES
            (101, 1, '2025-03-01', '2025-02-27'),
            (102, 1, '2025-03-15', '2025-03-15'),
            (103, 2, '2025-04-01', '2025-04-05'),
            (104, 2, '2025-04-20', NULL);

        INSERT INTO Wine (WineID, WineName, YearProduced) VALUES
            (1, 'Merlot', 2022),
            (2, 'Cabernet Sauvignon', 2021),
            (3, 'Chablis', 2023),
            (4, 'Chardonnay', 2022);

        INSERT INTO Distributor (DistID, DistName) VALUES
            (1, 'Gulf Coast Wholesale'),
            (2, 'Mountain Cellars');

        INSERT INTO DistOrder (OrderID, DistID) VALUES
            (11, 1),
            (12, 2);

        INSERT INTO DistItemOrderID (OrderID, WineID, Quantity) VALUES
            (11, 1, 40),
            (11, 2, 25),
            (12, 1, 10),
            (12, 3, 60);
        "#,
    )
    .expect("seed reference data");
}

pub fn count_hours(db_path: &str) -> i64 {
    query_i64(db_path, "SELECT COUNT(*) FROM Hours")
}

pub fn query_i64(db_path: &str, sql: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(sql, [], |row| row.get(0)).expect("query")
}

pub fn query_f64(db_path: &str, sql: &str) -> f64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(sql, [], |row| row.get(0)).expect("query")
}
