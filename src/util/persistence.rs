use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::{info, warn};

use crate::domain::tables::{ConstantTable, TableError};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "WorthIt";
const APP_NAME: &str = "WorthIt";
const TABLES_FILE: &str = "tables.json";

/// Per-user location of the constant table override.
pub fn tables_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(TABLES_FILE))
}

/// Reads and validates a table file.
pub fn load_tables_from(path: &Path) -> Result<ConstantTable, PersistError> {
    let data = fs::read_to_string(path)?;
    let table: ConstantTable = serde_json::from_str(&data)?;
    table.validate()?;
    Ok(table)
}

pub fn save_tables_to(path: &Path, table: &ConstantTable) -> Result<(), PersistError> {
    table.validate()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(table)?;
    fs::write(path, json)?;
    Ok(())
}

/// The user's override, or `None` when there is no override file.
pub fn load_tables() -> Result<Option<ConstantTable>, PersistError> {
    let path = tables_file().ok_or(PersistError::StorageUnavailable)?;
    if !path.exists() {
        return Ok(None);
    }
    load_tables_from(&path).map(Some)
}

pub fn save_tables(table: &ConstantTable) -> Result<(), PersistError> {
    let path = tables_file().ok_or(PersistError::StorageUnavailable)?;
    save_tables_to(&path, table)
}

/// The user's override when it is present and valid, the built-in tables
/// otherwise.
pub fn load_tables_or_default() -> ConstantTable {
    match load_tables() {
        Ok(Some(table)) => {
            info!(schema = %table.schema_version, "loaded constant table override");
            table
        }
        Ok(None) => ConstantTable::default(),
        Err(err) => {
            warn!(error = %err, "ignoring constant table override, using built-in tables");
            ConstantTable::default()
        }
    }
}

/// Same fallback rules as [`load_tables_or_default`] for an explicit path.
pub fn load_tables_from_or_default(path: &Path) -> ConstantTable {
    match load_tables_from(path) {
        Ok(table) => {
            info!(path = %path.display(), "loaded constant table override");
            table
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "using built-in constant tables");
            ConstantTable::default()
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
    #[error("invalid constant table: {0}")]
    Invalid(#[from] TableError),
}
