//! Synthesize time punches and bulk-load them into the Hours table.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::generator::ShiftGenerator;
use crate::db::load::bulk_load_hours;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::window::DateWindow;
use crate::ui::messages;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        from,
        to,
        employees,
        shifts,
        seed,
    } = cmd
    {
        let window = DateWindow::parse(from, to)?;
        let mut pool = DbPool::new(&cfg.database)?;

        let ids = match employees {
            Some(list) => parse_employee_list(list)?,
            None => queries::all_employee_ids(&pool)?,
        };
        if ids.is_empty() {
            return Err(AppError::InvalidEmployees(
                "no employee IDs given and none on file".to_string(),
            ));
        }

        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(*s),
            None => StdRng::from_os_rng(),
        };

        let records = ShiftGenerator::new(rng, *shifts).generate(&ids, &window);
        let inserted = bulk_load_hours(&mut pool.conn, &records)?;

        messages::success(format!(
            "Hours generated successfully: {} punches for {} employees over {} days",
            inserted,
            ids.len(),
            window.days().len(),
        ));
    }
    Ok(())
}

fn parse_employee_list(list: &str) -> AppResult<Vec<i64>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| AppError::InvalidEmployees(s.to_string()))
        })
        .collect()
}
