use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::symbol::normalize_name;
use crate::meta::{BasicMeta, ItemMeta, MetaClass};

/// Which captured block state a block-backed item carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockStateKind {
    Spawner,
    ShulkerBox,
}

/// The identity of an item type
///
/// A material is resolved through the symbol registry and decides which
/// concrete meta class its items carry. Think of it as the "class" and
/// ItemStack as the "instance".
#[derive(Debug, Clone)]
pub struct Material {
    /// Canonical name (used for lookups and saves)
    name: Arc<str>,

    /// Concrete meta class instantiated for items of this type
    meta_class: &'static MetaClass,

    /// False when the name is known but absent on the running platform
    supported: bool,

    /// False for technical identities that cannot exist as an item
    item: bool,

    block_state: Option<BlockStateKind>,
}

impl Material {
    /// Creates a supported, displayable material
    pub fn new(name: impl AsRef<str>, meta_class: &'static MetaClass) -> Self {
        Material {
            name: Arc::from(normalize_name(name.as_ref())),
            meta_class,
            supported: true,
            item: true,
            block_state: None,
        }
    }

    /// Marks the material as not present on the running platform
    pub fn unsupported(mut self) -> Self {
        self.supported = false;
        self
    }

    /// Marks the material as a technical identity with no item form
    pub fn not_item(mut self) -> Self {
        self.item = false;
        self
    }

    pub fn with_block_state(mut self, kind: BlockStateKind) -> Self {
        self.block_state = Some(kind);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn meta_class(&self) -> &'static MetaClass {
        self.meta_class
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    pub fn is_item(&self) -> bool {
        self.item
    }

    pub fn block_state(&self) -> Option<BlockStateKind> {
        self.block_state
    }

    /// Creates the default extension data for items of this material
    ///
    /// Falls back to plain item meta if the class cannot be instantiated.
    pub fn new_meta(&self) -> Box<dyn ItemMeta> {
        match self.meta_class.construct {
            Some(construct) => construct(self),
            None => Box::new(BasicMeta::default()),
        }
    }
}

impl PartialEq for Material {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Material {}

impl Hash for Material {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
