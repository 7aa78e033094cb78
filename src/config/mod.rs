// Config tree module
//
// This module provides the storage medium items are written into:
// - ConfigNode, an ordered string-keyed tree of scalars, lists and sections
// - ConfigSection, a trait for small value groups stored as one section

pub mod node;
pub mod section;

pub use node::{ConfigNode, ConfigValue};
pub use section::ConfigSection;
