//! ConfigSection trait for value groups stored as one child section
//!
//! Some item data is self-contained: a location, a map view, a firework
//! layer. None of it needs the symbol registry to be read back, so each
//! type owns its own section layout through this trait.

use super::node::ConfigNode;

/// Trait for values that are written into and read from a single section
///
/// # Example
///
/// ```ignore
/// impl ConfigSection for Location {
///     fn write_section(&self, node: &mut ConfigNode) {
///         node.set("x", self.x);
///     }
///
///     fn read_section(node: &ConfigNode) -> Option<Self> {
///         Some(Location { x: node.get_float("x")?, ..Default::default() })
///     }
/// }
/// ```
pub trait ConfigSection {
    /// Writes this value's fields into `node`
    fn write_section(&self, node: &mut ConfigNode);

    /// Reads a value back from `node`
    ///
    /// Returns None when a mandatory field is missing or malformed.
    fn read_section(node: &ConfigNode) -> Option<Self>
    where
        Self: Sized;

    /// Writes this value into the child section under `key`
    fn write_to(&self, parent: &mut ConfigNode, key: &str) {
        self.write_section(parent.section_mut(key));
    }

    /// Reads the child section under `key`, if present and well-formed
    fn read_from(parent: &ConfigNode, key: &str) -> Option<Self>
    where
        Self: Sized,
    {
        Self::read_section(parent.section(key)?)
    }
}
