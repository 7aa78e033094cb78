// Item codec module
//
// This module turns items into config trees and back:
// - ItemCodec, the entry point bundling registry, features and resolver
// - WriteContext / ReadContext, what capability handlers get to see
// - The unresolved-identity protocol the reader uses for bad materials
// - Batch helpers that isolate one failing entry from the rest

pub mod batch;
mod reader;
mod writer;

use std::fmt;

pub use batch::{BatchFailure, BatchRead};

use crate::config::ConfigNode;
use crate::dispatch::HandlerResolver;
use crate::error::CodecError;
use crate::item::{ItemStack, Material, Symbol, SymbolKind, SymbolRegistry};
use crate::platform::{Feature, PlatformFeatures};

/// Applied to every user-facing text field in both directions
pub type Translator<'a> = &'a dyn Fn(&str) -> String;

/// Offered an identity the reader could not use; may return a substitute
pub type Recovery<'a> = &'a dyn Fn(&UnresolvedIdentity) -> Option<Material>;

/// The identity translator
pub fn untranslated(text: &str) -> String {
    text.to_string()
}

/// Why a material name could not be used as an item identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnresolvedReason {
    /// No such material, not even as an alias
    Unknown,
    /// The material exists but not on the running platform
    Unsupported,
    /// The material exists but can never be an item
    NotDisplayable,
}

/// An identity the reader could not resolve on its own
#[derive(Debug, Clone, PartialEq)]
pub struct UnresolvedIdentity {
    /// The name as written in the config
    pub name: String,
    pub reason: UnresolvedReason,
    /// What the name resolved to, for the unacceptable cases
    pub material: Option<Material>,
}

impl fmt::Display for UnresolvedIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            UnresolvedReason::Unknown => write!(f, "unknown material '{}'", self.name),
            UnresolvedReason::Unsupported => {
                write!(f, "material '{}' is not supported on this platform", self.name)
            }
            UnresolvedReason::NotDisplayable => {
                write!(f, "material '{}' cannot be an item", self.name)
            }
        }
    }
}

/// Writes items into config trees and reads them back
///
/// The codec itself is stateless; the only state that outlives a call is
/// the handler resolution cache inside the resolver, which is shared.
#[derive(Clone, Copy)]
pub struct ItemCodec<'r> {
    registry: &'r dyn SymbolRegistry,
    features: &'r dyn PlatformFeatures,
    resolver: &'r HandlerResolver,
}

impl<'r> ItemCodec<'r> {
    /// Creates a codec using the process-wide resolver
    pub fn new(registry: &'r dyn SymbolRegistry, features: &'r dyn PlatformFeatures) -> Self {
        ItemCodec {
            registry,
            features,
            resolver: HandlerResolver::global(),
        }
    }

    pub fn with_resolver(mut self, resolver: &'r HandlerResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn registry(&self) -> &'r dyn SymbolRegistry {
        self.registry
    }

    pub fn resolver(&self) -> &'r HandlerResolver {
        self.resolver
    }

    /// Writes `item` into `node`
    ///
    /// Only mutates `node`. Fields at their default value are left out.
    pub fn write(&self, item: &ItemStack, node: &mut ConfigNode, translator: Translator<'_>) {
        let ctx = WriteContext {
            codec: self,
            translator,
        };
        writer::write_item(&ctx, item, node);
    }

    /// Reads an item back from `node`
    ///
    /// Fails only when the material cannot be used and `recovery` is absent
    /// or declines to substitute one.
    pub fn read(
        &self,
        node: &ConfigNode,
        translator: Translator<'_>,
        recovery: Option<Recovery<'_>>,
    ) -> Result<ItemStack, CodecError> {
        let ctx = ReadContext {
            codec: self,
            translator,
            recovery,
        };
        reader::read_item(&ctx, node)
    }

    /// Writes `item` into a fresh node without translation
    pub fn serialize(&self, item: &ItemStack) -> ConfigNode {
        let mut node = ConfigNode::new();
        self.write(item, &mut node, &untranslated);
        node
    }
}

impl fmt::Debug for ItemCodec<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemCodec").finish_non_exhaustive()
    }
}

/// What a capability writer can use besides the item itself
pub struct WriteContext<'a> {
    codec: &'a ItemCodec<'a>,
    translator: Translator<'a>,
}

impl WriteContext<'_> {
    pub fn supports(&self, feature: Feature) -> bool {
        self.codec.features.supports(feature)
    }

    pub fn translate(&self, text: &str) -> String {
        (self.translator)(text)
    }

    /// The name a symbol is written out as
    pub fn symbol_name(&self, symbol: &Symbol) -> String {
        self.codec.registry.canonical_name(symbol)
    }

    pub fn material_name(&self, material: &Material) -> String {
        self.codec.registry.canonical_material(material)
    }

    /// Writes a contained item into its own child node
    pub fn write_nested(&self, item: &ItemStack, node: &mut ConfigNode) {
        self.codec.write(item, node, self.translator);
    }
}

/// What a capability reader can use besides the config node
pub struct ReadContext<'a> {
    codec: &'a ItemCodec<'a>,
    translator: Translator<'a>,
    recovery: Option<Recovery<'a>>,
}

impl ReadContext<'_> {
    pub fn supports(&self, feature: Feature) -> bool {
        self.codec.features.supports(feature)
    }

    pub fn translate(&self, text: &str) -> String {
        (self.translator)(text)
    }

    /// Resolves a symbol, logging names this platform does not know
    pub fn resolve(&self, kind: SymbolKind, name: &str) -> Option<Symbol> {
        let symbol = self.codec.registry.resolve(kind, name);
        if symbol.is_none() {
            log::debug!("Skipping unknown {:?} '{}'", kind, name);
        }
        symbol
    }

    /// Reads a contained item from its own child node
    ///
    /// Uses the same translator and recovery callback as the outer call;
    /// an unresolved nested identity fails the outer read too.
    pub fn read_nested(&self, node: &ConfigNode) -> Result<ItemStack, CodecError> {
        self.codec.read(node, self.translator, self.recovery)
    }
}
