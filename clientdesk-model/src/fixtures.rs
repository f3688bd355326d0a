//! Built-in client records used when no record source file is configured.

use crate::{ClientId, ClientRecord, ClientStatus, ClientType};
use chrono::{DateTime, Utc};

type FixtureRow = (
    u64,
    &'static str,
    ClientType,
    &'static str,
    ClientStatus,
    &'static str,
    Option<&'static str>,
    Option<&'static str>,
);

const SAMPLE_ROWS: &[FixtureRow] = &[
    (
        20,
        "John Doe",
        ClientType::Individual,
        "johndoe@email.com",
        ClientStatus::Active,
        "2024-01-15T09:30:00Z",
        Some("2024-03-02T14:10:00Z"),
        Some("Alice Brown"),
    ),
    (
        21,
        "Test Test",
        ClientType::Individual,
        "test@test.com",
        ClientStatus::Active,
        "2024-02-10T11:00:00Z",
        None,
        None,
    ),
    (
        22,
        "Acme Holdings",
        ClientType::Company,
        "contact@acme.test",
        ClientStatus::Active,
        "2023-11-03T08:45:00Z",
        Some("2024-01-20T16:00:00Z"),
        Some("Samuel Reed"),
    ),
    (
        23,
        "Blue Harbor LLC",
        ClientType::Company,
        "hello@blueharbor.test",
        ClientStatus::Pending,
        "2024-04-22T13:05:00Z",
        None,
        None,
    ),
    (
        24,
        "Maria Lopez",
        ClientType::Individual,
        "maria.lopez@email.com",
        ClientStatus::Inactive,
        "2023-09-18T10:20:00Z",
        Some("2024-02-28T09:15:00Z"),
        Some("Alice Brown"),
    ),
    (
        25,
        "Northwind Traders",
        ClientType::Company,
        "sales@northwind.test",
        ClientStatus::Active,
        "2023-06-01T07:00:00Z",
        Some("2024-05-05T12:30:00Z"),
        Some("Priya Shah"),
    ),
    (
        26,
        "Chen Wei",
        ClientType::Individual,
        "chen.wei@email.com",
        ClientStatus::Active,
        "2024-03-11T15:45:00Z",
        Some("2024-03-12T08:00:00Z"),
        Some("Samuel Reed"),
    ),
    (
        27,
        "Globex Corporation",
        ClientType::Company,
        "info@globex.test",
        ClientStatus::Inactive,
        "2022-12-12T12:12:00Z",
        Some("2023-12-01T10:00:00Z"),
        Some("Priya Shah"),
    ),
    (
        28,
        "Amelia Clarke",
        ClientType::Individual,
        "amelia.clarke@email.com",
        ClientStatus::Pending,
        "2024-05-20T17:25:00Z",
        None,
        None,
    ),
    (
        29,
        "Initech",
        ClientType::Company,
        "support@initech.test",
        ClientStatus::Active,
        "2024-01-15T09:30:00Z",
        Some("2024-04-01T11:11:00Z"),
        Some("Alice Brown"),
    ),
];

fn stamp(value: &str) -> DateTime<Utc> {
    value.parse().unwrap_or_default()
}

/// Static record collection standing in for a real data source.
pub fn sample_clients() -> Vec<ClientRecord> {
    SAMPLE_ROWS
        .iter()
        .map(
            |&(id, name, client_type, email, status, created, updated, by)| {
                ClientRecord {
                    id: ClientId(id),
                    name: name.to_string(),
                    client_type,
                    email: email.to_string(),
                    status,
                    created_at: stamp(created),
                    updated_at: updated.map(stamp),
                    updated_by: by.map(str::to_string),
                }
            },
        )
        .collect()
}
