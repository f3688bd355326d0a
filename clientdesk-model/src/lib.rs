//! Core data model definitions shared across clientdesk crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod client;
pub mod error;
pub mod fixtures;
pub mod ids;

// Intentionally curated re-exports for downstream consumers.
pub use client::{ClientRecord, ClientStatus, ClientType};
pub use error::ModelError;
pub use ids::ClientId;
