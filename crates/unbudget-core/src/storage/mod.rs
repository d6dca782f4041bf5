mod config;
pub mod database;
mod kv;
mod repository;

pub use config::{Config, DisplayConfig, ProjectionConfig};
pub use database::Database;
pub use kv::{KeyValueStore, MemoryStore};
pub use repository::ProfileRepository;

use std::path::PathBuf;

use crate::error::PersistenceError;

/// Storage key of the profile document.
pub const USER_DATA_KEY: &str = "@user_data";

/// Returns the directory holding the database and config file.
///
/// `UNBUDGET_DATA_DIR` overrides the location. Otherwise this is
/// `~/.config/unbudget`, or `~/.config/unbudget-dev` when `UNBUDGET_ENV=dev`.
/// The directory is created if missing.
pub fn data_dir() -> Result<PathBuf, PersistenceError> {
    let dir = match std::env::var_os("UNBUDGET_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("UNBUDGET_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("unbudget-dev")
            } else {
                base_dir.join("unbudget")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| PersistenceError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
