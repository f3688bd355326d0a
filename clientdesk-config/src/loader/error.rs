use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
    #[error("unknown sort field '{value}' in {setting}")]
    UnknownSortField {
        setting: &'static str,
        value: String,
    },
    #[error("invalid value '{value}' for {setting}: {reason}")]
    InvalidValue {
        setting: &'static str,
        value: String,
        reason: String,
    },
}
