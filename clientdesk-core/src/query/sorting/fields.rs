//! Sortable fields of the client table
//!
//! Every field has one storage key and one display label, and
//! [`SortField::resolve`] is the only place either form is turned back into a
//! field. Persisted criteria and user input both go through it.

use super::keys::SortKeyKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Columns a rule set can sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortField {
    ClientId,
    ClientName,
    ClientType,
    Email,
    Status,
    CreatedAt,
    UpdatedAt,
    UpdatedBy,
}

/// Raised when text names no known field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort field '{0}'")]
pub struct UnknownSortField(pub String);

impl SortField {
    pub const ALL: [SortField; 8] = [
        SortField::ClientId,
        SortField::ClientName,
        SortField::ClientType,
        SortField::Email,
        SortField::Status,
        SortField::CreatedAt,
        SortField::UpdatedAt,
        SortField::UpdatedBy,
    ];

    /// Fields offered by the sort panel when nothing else is configured
    pub const DEFAULT_OFFERED: [SortField; 4] = [
        SortField::ClientName,
        SortField::CreatedAt,
        SortField::UpdatedAt,
        SortField::ClientId,
    ];

    /// Canonical storage key, matching the record's wire field name
    pub const fn key(self) -> &'static str {
        match self {
            SortField::ClientId => "id",
            SortField::ClientName => "name",
            SortField::ClientType => "type",
            SortField::Email => "email",
            SortField::Status => "status",
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
            SortField::UpdatedBy => "updatedBy",
        }
    }

    /// Column header shown to users
    pub const fn label(self) -> &'static str {
        match self {
            SortField::ClientId => "Client ID",
            SortField::ClientName => "Client Name",
            SortField::ClientType => "Client Type",
            SortField::Email => "Email",
            SortField::Status => "Status",
            SortField::CreatedAt => "Created At",
            SortField::UpdatedAt => "Updated At",
            SortField::UpdatedBy => "Updated By",
        }
    }

    pub const fn kind(self) -> SortKeyKind {
        match self {
            SortField::ClientId => SortKeyKind::Id,
            SortField::CreatedAt | SortField::UpdatedAt => SortKeyKind::Date,
            SortField::ClientName
            | SortField::ClientType
            | SortField::Email
            | SortField::Status
            | SortField::UpdatedBy => SortKeyKind::Text,
        }
    }

    /// Resolve a storage key or display label, ignoring case and
    /// surrounding whitespace.
    pub fn resolve(value: &str) -> Option<SortField> {
        let needle = value.trim();
        Self::ALL.into_iter().find(|field| {
            field.key().eq_ignore_ascii_case(needle)
                || field.label().eq_ignore_ascii_case(needle)
        })
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or_else(|| UnknownSortField(s.to_string()))
    }
}

impl TryFrom<String> for SortField {
    type Error = UnknownSortField;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortField> for String {
    fn from(field: SortField) -> Self {
        field.key().to_string()
    }
}
