//! Sort state persistence behind an opaque key-value store.

pub mod file;
pub mod memory;
pub mod sort_state;
pub mod store;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use sort_state::{PersistedSortState, SortStateRepository, StorageKeys};
pub use store::KeyValueStore;
