//! Document store for item documents on disk
//!
//! This module provides the DocumentStore struct which handles:
//! - Saving documents as `<name>.json` files
//! - Loading documents back, refusing newer format versions
//! - Listing and removing stored documents

use std::fs;
use std::path::{Path, PathBuf};

use super::types::*;
use crate::error::StoreError;

const EXTENSION: &str = "json";

pub struct DocumentStore {
    directory: PathBuf,
}

impl DocumentStore {
    /// Creates a store rooted at the given directory
    ///
    /// The directory will be created if it doesn't exist.
    pub fn new(directory: impl AsRef<Path>) -> Result<Self, StoreError> {
        let directory = directory.as_ref().to_path_buf();

        if !directory.exists() {
            fs::create_dir_all(&directory)?;
        }

        Ok(DocumentStore { directory })
    }

    /// The per-user data directory, `./itemcodec` when there is none
    pub fn default_location() -> PathBuf {
        dirs::data_dir()
            .map(|p| p.join("itemcodec"))
            .unwrap_or_else(|| PathBuf::from("./itemcodec"))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Saves a document under `name`, replacing any previous one
    pub fn save(&self, name: &str, document: &ItemDocument) -> Result<PathBuf, StoreError> {
        let path = self.path_for(name);

        // Pretty format so documents stay hand-editable
        let json = serde_json::to_string_pretty(document)?;
        fs::write(&path, json)?;

        log::info!("Saved {} items to {}", document.items.len(), path.display());

        Ok(path)
    }

    /// Loads the document stored under `name`
    pub fn load(&self, name: &str) -> Result<ItemDocument, StoreError> {
        let path = self.path_for(name);

        if !path.exists() {
            return Err(StoreError::NotFound(name.to_string()));
        }

        let json = fs::read_to_string(&path)?;
        let document: ItemDocument = serde_json::from_str(&json)?;

        if document.version > CURRENT_DOCUMENT_VERSION {
            return Err(StoreError::InvalidVersion(document.version));
        }

        log::info!("Loaded {} items from {}", document.items.len(), path.display());

        Ok(document)
    }

    /// Lists readable documents, newest first
    ///
    /// Files that fail to load are skipped.
    pub fn list(&self) -> Result<Vec<DocumentInfo>, StoreError> {
        let mut documents = Vec::new();

        for entry in fs::read_dir(&self.directory)? {
            let path = entry?.path();

            if path.extension().and_then(|s| s.to_str()) != Some(EXTENSION) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match self.load(name) {
                Ok(document) => documents.push(DocumentInfo {
                    name: name.to_string(),
                    saved_at: document.saved_at,
                    item_count: document.items.len(),
                }),
                Err(e) => log::debug!("Skipping {}: {}", path.display(), e),
            }
        }

        documents.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));

        Ok(documents)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).exists()
    }

    /// Deletes the document stored under `name`
    pub fn remove(&self, name: &str) -> Result<(), StoreError> {
        let path = self.path_for(name);

        if !path.exists() {
            return Err(StoreError::NotFound(name.to_string()));
        }

        fs::remove_file(path)?;
        Ok(())
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.directory.join(format!("{}.{}", name, EXTENSION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigNode;
    use chrono::Duration;

    fn items(count: usize) -> ConfigNode {
        let mut node = ConfigNode::new();
        for index in 0..count {
            node.section_mut(&format!("item{}", index)).set("material", "STONE");
        }
        node
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path().join("nested")).unwrap();

        let document = ItemDocument::new(items(2));
        let path = store.save("kits", &document).unwrap();

        assert!(path.ends_with("kits.json"));
        assert!(store.exists("kits"));
        assert_eq!(store.load("kits").unwrap(), document);
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path()).unwrap();

        let mut document = ItemDocument::new(items(1));
        document.version = CURRENT_DOCUMENT_VERSION + 1;
        store.save("future", &document).unwrap();

        assert!(matches!(
            store.load("future"),
            Err(StoreError::InvalidVersion(v)) if v == CURRENT_DOCUMENT_VERSION + 1
        ));
    }

    #[test]
    fn test_list_newest_first_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path()).unwrap();

        let mut old = ItemDocument::new(items(1));
        old.saved_at = old.saved_at - Duration::hours(1);
        store.save("old", &old).unwrap();
        store.save("new", &ItemDocument::new(items(3))).unwrap();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let listed = store.list().unwrap();
        let names: Vec<&str> = listed.iter().map(|info| info.name.as_str()).collect();
        assert_eq!(names, vec!["new", "old"]);
        assert_eq!(listed[0].item_count, 3);

        store.remove("old").unwrap();
        assert!(!store.exists("old"));
        assert!(matches!(store.remove("old"), Err(StoreError::NotFound(_))));
        assert!(matches!(store.load("missing"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_rewritten_document_with_bad_number_reloads() {
        use crate::codec::{untranslated, ItemCodec};
        use crate::item::StaticRegistry;
        use crate::platform::FeatureSet;

        let registry = StaticRegistry::create_default();
        let features = FeatureSet::modern();
        let codec = ItemCodec::new(&registry, &features);

        let mut input = ConfigNode::new();
        let sword = input.section_mut("sword");
        sword.set("material", "DIAMOND_SWORD");
        sword
            .section_mut("attributes")
            .section_mut("ATTACK_DAMAGE")
            .set("amount", "NaN");
        input.section_mut("stone").set("material", "STONE");

        let batch = codec.read_all(&input, &untranslated, None);
        assert!(batch.is_complete());
        let rewritten = codec.write_all(batch.items.iter(), &untranslated);

        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path()).unwrap();
        let document = ItemDocument::new(rewritten);
        store.save("kits", &document).unwrap();

        let loaded = store.load("kits").unwrap();
        assert_eq!(loaded, document);
        assert_eq!(
            loaded
                .items
                .lookup("sword.attributes.ATTACK_DAMAGE.amount")
                .and_then(|v| v.as_float()),
            Some(0.0)
        );
    }
}
