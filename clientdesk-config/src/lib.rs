//! Configuration library for clientdesk.
//!
//! Settings come from a TOML file, `CLIENTDESK_*` environment variables (with
//! optional `.env` support) and built-in defaults, in increasing order of
//! precedence: defaults, file, environment. Front ends apply their own flags
//! on top of the loaded [`Config`].

#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::{
    Config, ConfigMetadata, RecordsConfig, StorageBackend, StorageConfig, TableConfig,
};
pub use validation::{ConfigWarning, ConfigWarnings};
