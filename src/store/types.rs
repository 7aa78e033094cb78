//! Item document types
//!
//! A document is a named section of items as written by the codec, plus
//! the bookkeeping needed to load it back safely. Serialized with Serde as
//! pretty JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ConfigNode;

/// Current document format version
pub const CURRENT_DOCUMENT_VERSION: u32 = 1;

/// The root document structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDocument {
    pub version: u32,
    pub saved_at: DateTime<Utc>,

    /// One child section per item, keyed by the caller's item names
    pub items: ConfigNode,
}

impl ItemDocument {
    /// Wraps a section of items in a document stamped with the current time
    pub fn new(items: ConfigNode) -> Self {
        ItemDocument {
            version: CURRENT_DOCUMENT_VERSION,
            saved_at: Utc::now(),
            items,
        }
    }
}

/// Summary of a stored document, as returned by `DocumentStore::list`
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInfo {
    pub name: String,
    pub saved_at: DateTime<Utc>,
    pub item_count: usize,
}
