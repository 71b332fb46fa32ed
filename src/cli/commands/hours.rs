//! Employee hours report: average hours worked per quarter and per year.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::date;
use crate::utils::table::Table;
use chrono::NaiveDate;
use rusqlite::ToSql;

/// Quarterly averages divide each 3-month sum by 13 (weeks per quarter);
/// the yearly average divides the full sum by 52. Quarter bounds arrive as
/// ?1..?8 so the fiscal year start stays configurable.
const HOURS_BY_QUARTER: &str = "
    SELECT
        e.EmployeeID,
        d.Name,
        e.FirstName,
        e.LastName,

        ROUND(SUM(CASE
            WHEN h.DateWorked BETWEEN ?1 AND ?2
            THEN h.HoursWorked END) / 13, 2) AS Q1_Avg,

        ROUND(SUM(CASE
            WHEN h.DateWorked BETWEEN ?3 AND ?4
            THEN h.HoursWorked END) / 13, 2) AS Q2_Avg,

        ROUND(SUM(CASE
            WHEN h.DateWorked BETWEEN ?5 AND ?6
            THEN h.HoursWorked END) / 13, 2) AS Q3_Avg,

        ROUND(SUM(CASE
            WHEN h.DateWorked BETWEEN ?7 AND ?8
            THEN h.HoursWorked END) / 13, 2) AS Q4_Avg,

        ROUND(SUM(h.HoursWorked) / 52, 2) AS Yearly_Avg

    FROM Employee e
    INNER JOIN Hours AS h
        ON e.EmployeeID = h.EmployeeID
    INNER JOIN Department AS d
        ON e.DeptID = d.DeptID
    GROUP BY e.EmployeeID, e.FirstName, e.LastName
    ORDER BY d.Name, e.LastName, e.FirstName;
";

const DISPLAY_HEADERS: [&str; 8] = [
    "Department",
    "Last Name",
    "First Name",
    "Q1 Avg",
    "Q2 Avg",
    "Q3 Avg",
    "Q4 Avg",
    "Year Avg",
];

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Hours { year_start } = cmd {
        let start = date::parse_date(year_start)
            .ok_or_else(|| AppError::InvalidDate(year_start.clone()))?;

        let pool = DbPool::new(&cfg.database)?;

        let bounds = quarter_bounds(start);
        let params: Vec<&dyn ToSql> = bounds.iter().map(|b| b as &dyn ToSql).collect();
        let output = queries::fetch_with(&pool, HOURS_BY_QUARTER, &params)?;

        messages::banner("Average Hours Worked Per Quarter (Last Year)");

        let mut table = Table::new(DISPLAY_HEADERS);
        for row in output.rows {
            table.add_row(reshape(row));
        }
        print!("{}", table.render());
    }
    Ok(())
}

/// Eight "YYYY-MM-DD" bounds: start and end of each of the four quarters.
fn quarter_bounds(year_start: NaiveDate) -> Vec<String> {
    let mut bounds = Vec::with_capacity(8);

    for q in 0..4 {
        let q_start = date::add_months(year_start, 3 * q);
        let q_end = date::add_months(year_start, 3 * (q + 1)).pred_opt().unwrap();
        bounds.push(q_start.format("%Y-%m-%d").to_string());
        bounds.push(q_end.format("%Y-%m-%d").to_string());
    }

    bounds
}

/// Display shape: drop the employee ID, lead with department and name,
/// show quarters without punches as 0 rather than blank.
fn reshape(row: Vec<String>) -> Vec<String> {
    let mut cells = row.into_iter();
    let _employee_id = cells.next();
    let dept = cells.next().unwrap_or_default();
    let first = cells.next().unwrap_or_default();
    let last = cells.next().unwrap_or_default();

    let mut out = vec![dept, last, first];
    out.extend(cells.map(|avg| if avg.is_empty() { "0".to_string() } else { avg }));
    out
}
