use std::fmt::{self, Display};

/// Errors produced by model constructors and parsing routines.
#[derive(Debug)]
pub enum ModelError {
    InvalidClientId(std::num::ParseIntError),
    UnknownClientType(String),
    UnknownClientStatus(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidClientId(err) => {
                write!(f, "invalid client id: {err}")
            }
            ModelError::UnknownClientType(value) => {
                write!(f, "unknown client type: {value}")
            }
            ModelError::UnknownClientStatus(value) => {
                write!(f, "unknown client status: {value}")
            }
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::InvalidClientId(err) => Some(err),
            ModelError::UnknownClientType(_)
            | ModelError::UnknownClientStatus(_) => None,
        }
    }
}

impl From<std::num::ParseIntError> for ModelError {
    fn from(err: std::num::ParseIntError) -> Self {
        ModelError::InvalidClientId(err)
    }
}
