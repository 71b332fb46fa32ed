//! Synthetic time-punch generation.
//!
//! Attendance odds per calendar day:
//! - Monday to Friday: 5% absent, 10% short day (3 to 6 h), otherwise a
//!   normal day (7.5 to 8.5 h)
//! - Saturday: 20% overtime (5 to 8 h), otherwise absent
//! - Sunday: always absent
//!
//! Hours are rounded to 2 decimal places. Absences produce no record.
//! The RNG is injected so a seeded run reproduces the same punches.

use crate::models::shift::ShiftRecord;
use crate::models::window::DateWindow;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use rand::Rng;

/// Nominal shift start (08:00) in minutes from midnight.
const BASE_START_MINUTES: i64 = 8 * 60;

pub struct ShiftGenerator<R: Rng> {
    rng: R,
    with_shift_times: bool,
}

impl<R: Rng> ShiftGenerator<R> {
    pub fn new(rng: R, with_shift_times: bool) -> Self {
        Self {
            rng,
            with_shift_times,
        }
    }

    /// Worker-major accumulation: every date for the first employee, then
    /// every date for the next, each employee's dates in calendar order.
    pub fn generate(&mut self, employee_ids: &[i64], window: &DateWindow) -> Vec<ShiftRecord> {
        let days = window.days();
        let mut records = Vec::new();

        for &emp in employee_ids {
            for &day in &days {
                let hours = match day.weekday() {
                    Weekday::Sun => None,
                    Weekday::Sat => self.saturday_hours(),
                    _ => self.weekday_hours(),
                };

                let Some(hours) = hours else { continue };

                let (start, end) = if self.with_shift_times {
                    let (s, e) = self.shift_times(day, hours);
                    (Some(s), Some(e))
                } else {
                    (None, None)
                };

                records.push(ShiftRecord {
                    employee_id: emp,
                    date: day,
                    start,
                    end,
                    hours,
                });
            }
        }

        records
    }

    fn weekday_hours(&mut self) -> Option<f64> {
        let roll: f64 = self.rng.random();
        if roll < 0.05 {
            // Absent
            None
        } else if roll < 0.15 {
            // Short day
            Some(round2(self.rng.random_range(3.0..6.0)))
        } else {
            // Normal day
            Some(round2(self.rng.random_range(7.5..8.5)))
        }
    }

    fn saturday_hours(&mut self) -> Option<f64> {
        if self.rng.random::<f64>() < 0.20 {
            // Overtime
            Some(round2(self.rng.random_range(5.0..8.0)))
        } else {
            None
        }
    }

    /// Start = 08:00 plus a triangular minute offset in [-60, 60] peaking
    /// at zero, rounded to the whole minute; end = start + hours worked.
    fn shift_times(&mut self, day: NaiveDate, hours: f64) -> (NaiveDateTime, NaiveDateTime) {
        let offset = self.triangular(-60.0, 60.0, 0.0).round() as i64;
        let start_minutes = (BASE_START_MINUTES + offset) as u32;

        let start_time =
            NaiveTime::from_num_seconds_from_midnight_opt(start_minutes * 60, 0).unwrap();
        let start = day.and_time(start_time);
        let end = start + Duration::seconds((hours * 3600.0).round() as i64);

        (start, end)
    }

    /// Triangular sample over [min, max] with the given mode, inverted from
    /// a single uniform draw.
    fn triangular(&mut self, min: f64, max: f64, mode: f64) -> f64 {
        let u: f64 = self.rng.random();
        let cut = (mode - min) / (max - min);

        if u < cut {
            min + (u * (max - min) * (mode - min)).sqrt()
        } else {
            max - ((1.0 - u) * (max - min) * (max - mode)).sqrt()
        }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
