//! Dump every table in the database, the quick classroom sanity check.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tables { schema } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let tables = queries::user_tables(&pool)?;
        println!("Found Tables: {:?}", tables);

        for t in &tables {
            if *schema {
                messages::banner(&format!("Table Schema: {}", t));
                let output = queries::fetch(&pool, &format!("PRAGMA table_info('{}')", t))?;
                print!("{}", Table::from(output).render());
            }

            messages::banner(&format!("Data in table: {}", t));
            let output = queries::fetch(&pool, &format!("SELECT * FROM \"{}\"", t))?;
            print!("{}", Table::from(output).render());
        }
    }
    Ok(())
}
