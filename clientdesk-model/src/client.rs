use crate::{error::ModelError, ids::ClientId};
use chrono::{DateTime, Utc};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Kind of client, used by the tab strip to partition the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClientType {
    Individual,
    Company,
}

impl ClientType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientType::Individual => "Individual",
            ClientType::Company => "Company",
        }
    }
}

impl Display for ClientType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "individual" => Ok(ClientType::Individual),
            "company" => Ok(ClientType::Company),
            other => Err(ModelError::UnknownClientType(other.to_string())),
        }
    }
}

/// Account status shown in the status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClientStatus {
    Active,
    Inactive,
    Pending,
}

impl ClientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Inactive => "Inactive",
            ClientStatus::Pending => "Pending",
        }
    }
}

impl Display for ClientStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(ClientStatus::Active),
            "inactive" => Ok(ClientStatus::Inactive),
            "pending" => Ok(ClientStatus::Pending),
            other => Err(ModelError::UnknownClientStatus(other.to_string())),
        }
    }
}

/// A single row of the client table.
///
/// Records are loaded once from the record source and never edited in place.
/// `updated_at`/`updated_by` are absent for clients that were never modified
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ClientRecord {
    pub id: ClientId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub client_type: ClientType,
    pub email: String,
    pub status: ClientStatus,
    pub created_at: DateTime<Utc>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub updated_by: Option<String>,
}

impl ClientRecord {
    pub fn is_company(&self) -> bool {
        self.client_type == ClientType::Company
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_type_parses_case_insensitively() {
        assert_eq!("company".parse::<ClientType>().unwrap(), ClientType::Company);
        assert_eq!(
            " Individual ".parse::<ClientType>().unwrap(),
            ClientType::Individual
        );
        assert!("agency".parse::<ClientType>().is_err());
    }

    #[test]
    fn status_round_trips_through_display() {
        for status in [
            ClientStatus::Active,
            ClientStatus::Inactive,
            ClientStatus::Pending,
        ] {
            assert_eq!(status.to_string().parse::<ClientStatus>().unwrap(), status);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn record_uses_camel_case_wire_keys() {
        let json = r#"{
            "id": 7,
            "name": "Acme Ltd",
            "type": "Company",
            "email": "ops@acme.test",
            "status": "Active",
            "createdAt": "2024-02-01T09:00:00Z"
        }"#;

        let record: ClientRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, ClientId(7));
        assert!(record.is_company());
        assert_eq!(record.updated_at, None);

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedBy").is_none());
    }
}
