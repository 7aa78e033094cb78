// Container snapshot module
//
// Block items such as shulker boxes capture the contents of their container.
// This module provides the slot vector those contents live in.

pub mod inventory;

// Re-export main types
pub use inventory::Inventory;
