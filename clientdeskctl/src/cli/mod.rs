//! Interactive pieces of the CLI: command parsing, rendering and the
//! stdin-driven session loop.

pub mod command;
pub mod render;
pub mod session;

pub use session::run_session;
