//! Client table controller: one state object, intents in, events out.

pub mod controller;
pub mod intent;
pub mod state;

pub use controller::{ClientTableController, TableOptions};
pub use intent::{TableEvent, TableIntent};
pub use state::ClientTableState;
