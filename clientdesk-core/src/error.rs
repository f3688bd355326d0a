use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientDeskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error for key '{key}': {message}")]
    Store { key: String, message: String },

    #[error("Invalid record source {path}: {message}")]
    InvalidRecords { path: PathBuf, message: String },
}

impl ClientDeskError {
    pub fn store(key: impl Into<String>, message: impl std::fmt::Display) -> Self {
        ClientDeskError::Store {
            key: key.into(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientDeskError>;
