pub mod filtering;
pub mod prelude;
pub mod sorting;

pub use filtering::*;
pub use sorting::*;
