//! Resolved configuration types.

pub mod sources;

use clientdesk_core::{
    persistence::StorageKeys,
    query::{ClientTab, SortField},
    table::TableOptions,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_STORAGE_PATH: &str = ".clientdesk/state.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub records: RecordsConfig,
    pub table: TableConfig,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON file on disk, survives restarts
    #[default]
    File,
    /// Process memory only
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::File => "file",
            StorageBackend::Memory => "memory",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" | "mem" => Ok(StorageBackend::Memory),
            other => Err(format!("expected 'file' or 'memory', got '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// State file for the `file` backend
    pub path: PathBuf,
    pub keys: StorageKeys,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            path: PathBuf::from(DEFAULT_STORAGE_PATH),
            keys: StorageKeys::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordsConfig {
    /// JSON array of client records; the built-in sample set when unset
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub default_tab: ClientTab,
    pub offered_fields: Vec<SortField>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_tab: ClientTab::All,
            offered_fields: SortField::DEFAULT_OFFERED.to_vec(),
        }
    }
}

impl TableConfig {
    pub fn options(&self) -> TableOptions {
        TableOptions {
            default_tab: self.default_tab,
            offered_fields: self.offered_fields.clone(),
        }
    }
}

/// Where the configuration came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
