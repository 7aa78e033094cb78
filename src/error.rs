//! Error types for itemcodec
//!
//! Only one thing can make a single read fail: an identity that cannot be
//! resolved and is not substituted by the caller. Everything else in an
//! item config degrades to "field absent". The remaining types cover the
//! registry, container snapshots and the on-disk document store.

use thiserror::Error;

use crate::codec::UnresolvedIdentity;

/// Errors produced while reading an item
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    /// The material could not be used and no substitute was supplied
    #[error("{0}")]
    UnresolvedIdentity(UnresolvedIdentity),
}

/// Errors produced while populating a symbol registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("'{0}' is already registered")]
    Duplicate(String),

    #[error("alias '{alias}' points at unregistered name '{target}'")]
    UnknownTarget { alias: String, target: String },
}

/// Errors that can occur during container snapshot operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Slot index out of bounds
    #[error("Invalid slot index: {slot} (capacity {capacity})")]
    InvalidSlot { slot: usize, capacity: usize },
}

/// Errors for document save/load operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported document version: {0}")]
    InvalidVersion(u32),

    #[error("Document not found: {0}")]
    NotFound(String),
}
