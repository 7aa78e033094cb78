//! Whole-section reads and writes
//!
//! A section of items is usually hand-edited, and one bad entry should not
//! take the rest of the file with it. Each entry is its own call here.

use indexmap::IndexMap;

use super::{ItemCodec, Recovery, Translator};
use crate::config::ConfigNode;
use crate::error::CodecError;
use crate::item::ItemStack;

/// One entry that could not be read
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure {
    pub key: String,
    pub error: CodecError,
}

/// The outcome of reading a section of items
#[derive(Debug, Default)]
pub struct BatchRead {
    /// Successfully read items, in section order
    pub items: IndexMap<String, ItemStack>,
    pub failures: Vec<BatchFailure>,
}

impl BatchRead {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl ItemCodec<'_> {
    /// Writes each item into its own child section of a new node
    pub fn write_all<'i, K>(
        &self,
        items: impl IntoIterator<Item = (K, &'i ItemStack)>,
        translator: Translator<'_>,
    ) -> ConfigNode
    where
        K: AsRef<str>,
    {
        let mut node = ConfigNode::new();
        for (key, item) in items {
            self.write(item, node.section_mut(key.as_ref()), translator);
        }
        node
    }

    /// Reads every child section of `node` as an item
    ///
    /// Failures are collected instead of returned; scalar entries are not
    /// items and are skipped.
    pub fn read_all(
        &self,
        node: &ConfigNode,
        translator: Translator<'_>,
        recovery: Option<Recovery<'_>>,
    ) -> BatchRead {
        let mut batch = BatchRead::default();

        for (key, value) in node.iter() {
            let Some(section) = value.as_section() else {
                log::warn!("Skipping '{}': not an item section", key);
                continue;
            };

            match self.read(section, translator, recovery) {
                Ok(item) => {
                    batch.items.insert(key.to_string(), item);
                }
                Err(error) => {
                    log::warn!("Failed to read item '{}': {}", key, error);
                    batch.failures.push(BatchFailure {
                        key: key.to_string(),
                        error,
                    });
                }
            }
        }

        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::untranslated;
    use crate::item::{StaticRegistry, SymbolRegistry};
    use crate::platform::FeatureSet;

    #[test]
    fn test_one_bad_entry_does_not_abort_the_batch() {
        let registry = StaticRegistry::create_default();
        let features = FeatureSet::modern();
        let codec = ItemCodec::new(&registry, &features);

        let stone = ItemStack::with_default_meta(registry.material("STONE").unwrap());
        let apple = ItemStack::with_default_meta(registry.material("APPLE").unwrap())
            .with_amount(3);
        let mut node = codec.write_all([("first", &stone), ("third", &apple)], &untranslated);
        node.section_mut("second").set("material", "NOT_A_REAL_MATERIAL");
        node.set("comment", "not an item");

        let batch = codec.read_all(&node, &untranslated, None);

        assert!(!batch.is_complete());
        assert_eq!(batch.items.keys().collect::<Vec<_>>(), vec!["first", "third"]);
        assert_eq!(batch.items["third"].amount(), 3);
        assert_eq!(batch.failures.len(), 1);
        assert_eq!(batch.failures[0].key, "second");
    }
}
