//! Connection configuration, resolved once at startup.
//!
//! Settings come from an env file (`setup.env` by default, same file the
//! deployment scripts use) through dotenvy. The embedded SQLite engine
//! collapses the old server credentials to a single database path, kept
//! under the `DB_NAME` key. The `--db` flag bypasses the file entirely.

use crate::errors::{AppError, AppResult};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the SQLite database file.
    pub database: String,
    /// Env file the database path was read from; None for a `--db` override.
    pub env_file: Option<String>,
}

impl Config {
    pub fn load(env_file: &str, db_override: Option<&String>) -> AppResult<Self> {
        if let Some(db) = db_override {
            return Ok(Self {
                database: expand_tilde(db).to_string_lossy().to_string(),
                env_file: None,
            });
        }

        if Path::new(env_file).exists() {
            dotenvy::from_filename(env_file)
                .map_err(|e| AppError::Config(format!("cannot read {}: {}", env_file, e)))?;
        }

        match env::var("DB_NAME") {
            Ok(name) if !name.trim().is_empty() => Ok(Self {
                database: expand_tilde(name.trim()).to_string_lossy().to_string(),
                env_file: Some(env_file.to_string()),
            }),
            _ => Err(AppError::Config(format!(
                "DB_NAME is not set (expected in {} or the environment); pass --db to override",
                env_file
            ))),
        }
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
