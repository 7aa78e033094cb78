//! The capability table
//!
//! A fixed list of (capability → reader, writer) pairs, built once. The
//! resolver only ever asks it one question: is there a handler registered
//! directly against this class?

use std::collections::HashMap;
use std::fmt;

use crate::codec::{ReadContext, WriteContext};
use crate::config::ConfigNode;
use crate::error::CodecError;
use crate::item::ItemStack;
use crate::meta::{ClassKey, ItemMeta, MetaClass};

/// Writes one capability's block for an item
pub type WriteFn = fn(&WriteContext<'_>, &ItemStack, &dyn ItemMeta, &mut ConfigNode);

/// Reads one capability's block back into extension data
pub type ReadFn = fn(&ReadContext<'_>, &ConfigNode, &mut dyn ItemMeta) -> Result<(), CodecError>;

/// Which traversal a handler is being resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Write,
    Read,
}

/// A reader/writer pair bound to one capability
///
/// Either side may be missing; a handler is only composed into the
/// directions it implements.
#[derive(Clone, Copy)]
pub struct Handler {
    pub capability: &'static MetaClass,
    pub write: Option<WriteFn>,
    pub read: Option<ReadFn>,
}

impl Handler {
    pub fn new(capability: &'static MetaClass, write: WriteFn, read: ReadFn) -> Self {
        Handler {
            capability,
            write: Some(write),
            read: Some(read),
        }
    }

    pub fn handles(&self, direction: Direction) -> bool {
        match direction {
            Direction::Write => self.write.is_some(),
            Direction::Read => self.read.is_some(),
        }
    }

    /// Two handlers are the same if they serve the same capability
    pub fn same_capability(&self, other: &Handler) -> bool {
        std::ptr::eq(self.capability, other.capability)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("capability", &self.capability.name)
            .field("write", &self.write.is_some())
            .field("read", &self.read.is_some())
            .finish()
    }
}

/// Source of directly registered handlers
///
/// The resolver walks the class graph and asks this for each class it
/// visits. Test doubles implement it to observe how often that happens.
pub trait CapabilityLookup: Send + Sync {
    fn lookup(&self, class: &'static MetaClass) -> Option<Handler>;
}

/// The immutable, process-wide handler table
#[derive(Debug, Default)]
pub struct CapabilityTable {
    handlers: HashMap<ClassKey, Handler>,
}

impl CapabilityTable {
    /// Builds a table from a list of handlers
    ///
    /// A later handler for the same capability replaces an earlier one.
    pub fn from_handlers(handlers: impl IntoIterator<Item = Handler>) -> Self {
        let mut map = HashMap::new();

        for handler in handlers {
            if let Some(previous) = map.insert(handler.capability.key(), handler) {
                log::warn!(
                    "Handler for {} registered twice, replacing {:?}",
                    handler.capability.name,
                    previous
                );
            }
        }

        CapabilityTable { handlers: map }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl CapabilityLookup for CapabilityTable {
    fn lookup(&self, class: &'static MetaClass) -> Option<Handler> {
        self.handlers.get(&class.key()).copied()
    }
}
