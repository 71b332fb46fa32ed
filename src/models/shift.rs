use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One synthetic time punch destined for the `Hours` table.
///
/// `start`/`end` are only present when shift-time derivation is enabled.
/// An absence is never materialized as a record: the missing row for a
/// given (employee, date) pair is the representation of the absence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftRecord {
    pub employee_id: i64,
    pub date: NaiveDate,        // ⇔ Hours.DateWorked (TEXT "YYYY-MM-DD")
    pub start: Option<NaiveDateTime>, // ⇔ Hours.StartShift (TEXT, nullable)
    pub end: Option<NaiveDateTime>,   // ⇔ Hours.EndShift (TEXT, nullable)
    pub hours: f64,             // ⇔ Hours.HoursWorked (REAL, 2 decimals)
}

impl ShiftRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> Option<String> {
        self.start.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
    }

    pub fn end_str(&self) -> Option<String> {
        self.end.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
    }
}
