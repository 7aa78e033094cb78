// Item model module
//
// This module provides the runtime item types the codec converts, including:
// - Materials (item identities) and registry-resolved symbols
// - The symbol registry collaborator and its in-memory implementation
// - Item stacks with optional extension data
// - Closed enums for flags, equipment slots and attribute modifiers

pub mod material;
pub mod properties;
pub mod registry;
pub mod stack;
pub mod symbol;

// Re-export main types for convenient access
pub use material::{BlockStateKind, Material};
pub use properties::{
    AttributeModifier, AttributeOperation, EquipmentSlot, ItemFlag, HIDDEN_FLAGS_MODIFIER,
};
pub use registry::{StaticRegistry, SymbolRegistry};
pub use stack::ItemStack;
pub use symbol::{normalize_name, Symbol, SymbolKind};
