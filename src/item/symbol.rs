use std::fmt;
use std::sync::Arc;

/// The namespaces a registry resolves names in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SymbolKind {
    Enchantment,
    Attribute,
    PatternType,
    PotionEffectType,
    PotionType,
    EntityType,
    TrimMaterial,
    TrimPattern,
    Instrument,
    AxolotlVariant,
}

/// A resolved, canonical platform symbol (an enchantment, an attribute, ...)
///
/// Symbols are only ever produced by a registry, so holding one means the
/// name was valid on the running platform when it was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    kind: SymbolKind,
    name: Arc<str>,
}

impl Symbol {
    pub fn new(kind: SymbolKind, name: impl AsRef<str>) -> Self {
        Symbol {
            kind,
            name: Arc::from(normalize_name(name.as_ref())),
        }
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// The canonical name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Normalizes a user-written name into registry form
///
/// `minecraft:diamond sword`, `Diamond-Sword` and `DIAMOND_SWORD` all
/// become `DIAMOND_SWORD`.
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    let bare = trimmed
        .split_once(':')
        .map(|(_, rest)| rest)
        .unwrap_or(trimmed);

    bare.chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("minecraft:diamond sword"), "DIAMOND_SWORD");
        assert_eq!(normalize_name(" Fire-Aspect "), "FIRE_ASPECT");
        assert_eq!(normalize_name("STONE"), "STONE");
    }

    #[test]
    fn test_symbol_is_normalized() {
        let symbol = Symbol::new(SymbolKind::Enchantment, "sharpness");
        assert_eq!(symbol.name(), "SHARPNESS");
        assert_eq!(symbol, Symbol::new(SymbolKind::Enchantment, "SHARPNESS"));
        assert_ne!(symbol, Symbol::new(SymbolKind::Attribute, "SHARPNESS"));
    }
}
