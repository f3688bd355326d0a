//! Record sources for the table.

use crate::error::{ClientDeskError, Result};
use clientdesk_model::{ClientRecord, fixtures::sample_clients};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Read a JSON array of client records from `path`.
///
/// Ids must be unique; the table keys rows by id.
pub fn load_records(path: &Path) -> Result<Vec<ClientRecord>> {
    let contents = fs::read_to_string(path)?;
    let records: Vec<ClientRecord> =
        serde_json::from_str(&contents).map_err(|err| ClientDeskError::InvalidRecords {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    let mut seen = HashSet::with_capacity(records.len());
    if let Some(dup) = records.iter().find(|record| !seen.insert(record.id)) {
        return Err(ClientDeskError::InvalidRecords {
            path: path.to_path_buf(),
            message: format!("duplicate client id {}", dup.id),
        });
    }

    info!("Loaded {} client records from {}", records.len(), path.display());
    Ok(records)
}

/// Records from `path` when given, otherwise the built-in sample set.
pub fn load_or_sample(path: Option<&Path>) -> Result<Vec<ClientRecord>> {
    match path {
        Some(path) => load_records(path),
        None => Ok(sample_clients()),
    }
}
