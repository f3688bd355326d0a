//! Multi-key sorting for the client table
//!
//! This module provides:
//! - The entity trait records implement to expose sort keys
//! - The closed set of sortable fields and their canonical key resolution
//! - Criteria and the ordered rule set users build and reorder
//! - The stable comparator engine driven by a rule set

pub mod comparator;
pub mod criteria;
pub mod fields;
pub mod impls;
pub mod keys;
pub mod rule_set;
pub mod traits;
pub mod utils;


pub use comparator::*;
pub use criteria::*;
pub use fields::*;
pub use keys::*;
pub use rule_set::*;
pub use traits::*;
