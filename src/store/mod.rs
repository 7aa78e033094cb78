//! Persistent item documents
//!
//! # Architecture
//!
//! - `types`: the document structure and format version
//! - `manager`: DocumentStore for file operations
//!
//! # Example Usage
//!
//! ```ignore
//! let store = DocumentStore::new(DocumentStore::default_location())?;
//!
//! let items = codec.write_all([("sword", &sword)], &untranslated);
//! store.save("kits", &ItemDocument::new(items))?;
//!
//! let loaded = store.load("kits")?;
//! let batch = codec.read_all(&loaded.items, &untranslated, None);
//! ```

pub mod manager;
pub mod types;

pub use manager::DocumentStore;
pub use types::*;
