//! # Clientdesk Core
//!
//! Core library for the clientdesk client table: multi-key sort rule sets,
//! the comparator engine that applies them, tab filtering, and persistence of
//! the sort state through an opaque key-value store.
//!
//! ## Architecture
//!
//! - [`query`]: sort rule sets, the comparator engine and the tab filter
//! - [`persistence`]: the [`KeyValueStore`](persistence::KeyValueStore) seam,
//!   its memory and JSON-file backends, and the sort state repository
//! - [`table`]: the controller that turns user intents into state changes
//! - [`records`]: record sources
//! - [`error`]: error types
//!
//! ## Examples
//!
//! ```
//! use clientdesk_core::{
//!     persistence::{MemoryStore, SortStateRepository},
//!     query::prelude::*,
//!     table::{ClientTableController, TableIntent, TableOptions},
//! };
//! use clientdesk_model::fixtures::sample_clients;
//!
//! let mut table = ClientTableController::hydrate(
//!     sample_clients(),
//!     SortStateRepository::new(MemoryStore::new()),
//!     TableOptions::default(),
//! );
//! table.dispatch(TableIntent::ChangeTab(ClientTab::Company));
//! table.dispatch(TableIntent::AddSortField(SortField::ClientName));
//! table.dispatch(TableIntent::ApplySort);
//!
//! assert_eq!(table.sort_badge(), Some(1));
//! assert!(table.visible_records().iter().all(|c| c.is_company()));
//! ```

#![allow(missing_docs)]

/// Error types and error handling utilities
pub mod error;

/// Sort state persistence
pub mod persistence;

/// Sorting and filtering of client records
pub mod query;

/// Record sources
pub mod records;

/// Client table state and controller
pub mod table;

pub use error::{ClientDeskError, Result};
