use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub storage: FileStorageConfig,
    #[serde(default)]
    pub records: FileRecordsConfig,
    #[serde(default)]
    pub table: FileTableConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileStorageConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub keys: FileStorageKeys,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileStorageKeys {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted_records: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_rule_set: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileRecordsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileTableConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tab: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offered_fields: Option<Vec<String>>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub storage_backend: Option<String>,
    pub storage_path: Option<PathBuf>,
    pub records_path: Option<PathBuf>,
    pub default_tab: Option<String>,
    pub offered_fields: Option<Vec<String>>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            config_path: non_empty_var("CLIENTDESK_CONFIG").map(PathBuf::from),
            storage_backend: non_empty_var("CLIENTDESK_STORAGE_BACKEND"),
            storage_path: non_empty_var("CLIENTDESK_STORAGE_PATH").map(PathBuf::from),
            records_path: non_empty_var("CLIENTDESK_RECORDS_PATH").map(PathBuf::from),
            default_tab: non_empty_var("CLIENTDESK_DEFAULT_TAB"),
            offered_fields: parse_csv_var("CLIENTDESK_OFFERED_FIELDS"),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn parse_csv_var(name: &str) -> Option<Vec<String>> {
    std::env::var(name).ok().map(|raw| {
        raw.split(',')
            .filter_map(|part| {
                let trimmed = part.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect()
    })
}
