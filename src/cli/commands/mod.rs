pub mod config;
pub mod deliveries;
pub mod generate;
pub mod hours;
pub mod init;
pub mod sales;
pub mod tables;

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::table::Table;

/// Shared report step: banner, fixed query, aligned table on stdout.
pub(crate) fn run_report(pool: &DbPool, title: &str, sql: &str) -> AppResult<()> {
    messages::banner(title);
    let output = queries::fetch(pool, sql)?;
    print!("{}", Table::from(output).render());
    Ok(())
}
