use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    println!("database: {}", cfg.database);
    match &cfg.env_file {
        Some(file) => println!("source:   {} (DB_NAME)", file),
        None => println!("source:   --db override"),
    }
    Ok(())
}
