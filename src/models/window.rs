use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

/// Inclusive calendar-date range for a generation run.
#[derive(Debug, Clone, Copy)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end < start {
            return Err(AppError::InvalidRange(format!(
                "end {} is before start {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    pub fn parse(start: &str, end: &str) -> AppResult<Self> {
        let s = date::parse_date(start).ok_or_else(|| AppError::InvalidDate(start.to_string()))?;
        let e = date::parse_date(end).ok_or_else(|| AppError::InvalidDate(end.to_string()))?;
        Self::new(s, e)
    }

    /// Every calendar date of the window, in order.
    pub fn days(&self) -> Vec<NaiveDate> {
        date::days_between(self.start, self.end)
    }
}
