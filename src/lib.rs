//! itemcodec: capability-dispatched item serialization
//!
//! Items carry extension data whose concrete type is only known at runtime.
//! The codec writes them into an ordered config tree and reads them back,
//! picking the capability handlers that apply to each concrete type by
//! walking its class graph once and caching the result.

pub mod codec;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod inventory;
pub mod item;
pub mod meta;
pub mod platform;
pub mod store;

pub use codec::{
    untranslated, BatchFailure, BatchRead, ItemCodec, ReadContext, Recovery, Translator,
    UnresolvedIdentity, UnresolvedReason, WriteContext,
};
pub use config::{ConfigNode, ConfigSection, ConfigValue};
pub use dispatch::{CapabilityLookup, CapabilityTable, Direction, Handler, HandlerResolver};
pub use error::{CodecError, InventoryError, RegistryError, StoreError};
pub use inventory::Inventory;
pub use item::{ItemStack, Material, StaticRegistry, Symbol, SymbolKind, SymbolRegistry};
pub use meta::{ItemMeta, MetaBase, MetaClass};
pub use platform::{Feature, FeatureSet, PlatformFeatures};
pub use store::{DocumentStore, ItemDocument, CURRENT_DOCUMENT_VERSION};
