use std::collections::HashMap;

use super::material::{BlockStateKind, Material};
use super::symbol::{normalize_name, Symbol, SymbolKind};
use crate::error::RegistryError;
use crate::meta::classes;

/// Resolves logical names to what the running platform provides
///
/// Implementations must accept historical aliases and answer `None` for
/// names that do not exist in this platform version. The codec never asks
/// for anything else.
pub trait SymbolRegistry: Send + Sync {
    /// Resolves a material name or alias
    fn material(&self, name: &str) -> Option<Material>;

    /// Resolves a symbol name or alias within one namespace
    fn resolve(&self, kind: SymbolKind, name: &str) -> Option<Symbol>;

    /// The name a symbol is written out as
    fn canonical_name(&self, symbol: &Symbol) -> String {
        symbol.name().to_string()
    }

    /// The name a material is written out as
    fn canonical_material(&self, material: &Material) -> String {
        material.name().to_string()
    }
}

/// Central in-memory registry of materials and symbols
///
/// Names are stored normalized; aliases map an old name onto a canonical
/// one that must already be registered.
pub struct StaticRegistry {
    materials: HashMap<String, Material>,
    material_aliases: HashMap<String, String>,
    symbols: HashMap<(SymbolKind, String), Symbol>,
    symbol_aliases: HashMap<(SymbolKind, String), String>,
}

impl StaticRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        StaticRegistry {
            materials: HashMap::new(),
            material_aliases: HashMap::new(),
            symbols: HashMap::new(),
            symbol_aliases: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in vanilla names pre-registered
    pub fn create_default() -> Self {
        let mut registry = Self::new();

        registry.register_base_materials();
        registry.register_base_symbols();

        registry
    }

    /// Registers a new material
    ///
    /// Returns error if a material with this name already exists.
    pub fn register_material(&mut self, material: Material) -> Result<(), RegistryError> {
        let key = material.name().to_string();
        if self.materials.contains_key(&key) {
            return Err(RegistryError::Duplicate(key));
        }

        self.materials.insert(key, material);
        Ok(())
    }

    /// Maps a historical material name onto a registered one
    pub fn alias_material(&mut self, alias: &str, target: &str) -> Result<(), RegistryError> {
        let target = normalize_name(target);
        if !self.materials.contains_key(&target) {
            return Err(RegistryError::UnknownTarget {
                alias: alias.to_string(),
                target,
            });
        }

        self.material_aliases.insert(normalize_name(alias), target);
        Ok(())
    }

    /// Registers a symbol, returning error on duplicates
    pub fn register_symbol(&mut self, kind: SymbolKind, name: &str) -> Result<(), RegistryError> {
        let symbol = Symbol::new(kind, name);
        let key = (kind, symbol.name().to_string());
        if self.symbols.contains_key(&key) {
            return Err(RegistryError::Duplicate(key.1));
        }

        self.symbols.insert(key, symbol);
        Ok(())
    }

    /// Maps a historical symbol name onto a registered one
    pub fn alias_symbol(
        &mut self,
        kind: SymbolKind,
        alias: &str,
        target: &str,
    ) -> Result<(), RegistryError> {
        let target = normalize_name(target);
        if !self.symbols.contains_key(&(kind, target.clone())) {
            return Err(RegistryError::UnknownTarget {
                alias: alias.to_string(),
                target,
            });
        }

        self.symbol_aliases.insert((kind, normalize_name(alias)), target);
        Ok(())
    }

    // ======================================================================
    // Registration - Base Names
    // ======================================================================

    /// Registers the built-in materials
    ///
    /// Every entry is a known name, so a failure here means the table
    /// itself has a duplicate; that is logged and the entry skipped.
    fn register_base_materials(&mut self) {
        let plain = [
            "STONE", "DIRT", "APPLE", "DIAMOND", "STICK", "BOW", "ARROW", "SPECTRAL_ARROW",
            "DIAMOND_SWORD", "NETHERITE_SWORD", "DIAMOND_PICKAXE", "TRIDENT", "ELYTRA",
        ];
        for name in plain {
            self.add_material(Material::new(name, &classes::META_ITEM));
        }

        let by_class = [
            ("POTION", &classes::META_POTION),
            ("SPLASH_POTION", &classes::META_POTION),
            ("LINGERING_POTION", &classes::META_POTION),
            ("TIPPED_ARROW", &classes::META_POTION),
            ("SUSPICIOUS_STEW", &classes::META_SUSPICIOUS_STEW),
            ("WHITE_BANNER", &classes::META_BANNER),
            ("RED_BANNER", &classes::META_BANNER),
            ("BLACK_BANNER", &classes::META_BANNER),
            ("FIREWORK_ROCKET", &classes::META_FIREWORK),
            ("FIREWORK_STAR", &classes::META_CHARGE),
            ("WRITABLE_BOOK", &classes::META_BOOK),
            ("WRITTEN_BOOK", &classes::META_BOOK_SIGNED),
            ("ENCHANTED_BOOK", &classes::META_ENCHANTED_BOOK),
            ("IRON_HELMET", &classes::META_ARMOR),
            ("DIAMOND_CHESTPLATE", &classes::META_ARMOR),
            ("NETHERITE_LEGGINGS", &classes::META_ARMOR),
            ("TURTLE_HELMET", &classes::META_ARMOR),
            ("LEATHER_HORSE_ARMOR", &classes::META_LEATHER_ARMOR),
            ("LEATHER_HELMET", &classes::META_COLORABLE_ARMOR),
            ("LEATHER_CHESTPLATE", &classes::META_COLORABLE_ARMOR),
            ("LEATHER_LEGGINGS", &classes::META_COLORABLE_ARMOR),
            ("LEATHER_BOOTS", &classes::META_COLORABLE_ARMOR),
            ("FILLED_MAP", &classes::META_MAP),
            ("COMPASS", &classes::META_COMPASS),
            ("PIG_SPAWN_EGG", &classes::META_SPAWN_EGG),
            ("ZOMBIE_SPAWN_EGG", &classes::META_SPAWN_EGG),
            ("PLAYER_HEAD", &classes::META_SKULL),
            ("CROSSBOW", &classes::META_CROSSBOW),
            ("AXOLOTL_BUCKET", &classes::META_AXOLOTL_BUCKET),
            ("GOAT_HORN", &classes::META_MUSIC_INSTRUMENT),
        ];
        for (name, class) in by_class {
            self.add_material(Material::new(name, class));
        }

        self.add_material(
            Material::new("SPAWNER", &classes::META_BLOCK_STATE)
                .with_block_state(BlockStateKind::Spawner),
        );
        for name in ["SHULKER_BOX", "WHITE_SHULKER_BOX", "RED_SHULKER_BOX", "BLACK_SHULKER_BOX"] {
            self.add_material(
                Material::new(name, &classes::META_BLOCK_STATE)
                    .with_block_state(BlockStateKind::ShulkerBox),
            );
        }

        // Technical identities that can never be an item
        for name in ["AIR", "WATER", "LAVA", "PISTON_HEAD", "MOVING_PISTON"] {
            self.add_material(Material::new(name, &classes::META_ITEM).not_item());
        }

        let aliases = [
            ("SKULL_ITEM", "PLAYER_HEAD"),
            ("MOB_SPAWNER", "SPAWNER"),
            ("BOOK_AND_QUILL", "WRITABLE_BOOK"),
            ("FIREWORK", "FIREWORK_ROCKET"),
            ("FIREWORK_CHARGE", "FIREWORK_STAR"),
            ("MAP", "FILLED_MAP"),
            ("PURPLE_SHULKER_BOX", "SHULKER_BOX"),
            ("STATIONARY_WATER", "WATER"),
        ];
        for (alias, target) in aliases {
            if let Err(e) = self.alias_material(alias, target) {
                log::warn!("Skipping built-in material alias: {}", e);
            }
        }
    }

    /// Registers enchantments, attributes, patterns, effects and friends
    fn register_base_symbols(&mut self) {
        use SymbolKind::*;

        let names: [(SymbolKind, &[&str]); 10] = [
            (Enchantment, &[
                "PROTECTION", "FIRE_PROTECTION", "FEATHER_FALLING", "SHARPNESS", "SMITE",
                "UNBREAKING", "EFFICIENCY", "FORTUNE", "SILK_TOUCH", "MENDING", "POWER",
                "INFINITY", "FIRE_ASPECT", "LOOTING", "KNOCKBACK", "QUICK_CHARGE",
                "MULTISHOT", "PIERCING", "THORNS",
            ]),
            (Attribute, &[
                "ATTACK_DAMAGE", "ATTACK_SPEED", "MAX_HEALTH", "MOVEMENT_SPEED", "ARMOR",
                "ARMOR_TOUGHNESS", "KNOCKBACK_RESISTANCE", "LUCK",
            ]),
            (PatternType, &[
                "BASE", "STRIPE_BOTTOM", "STRIPE_TOP", "STRIPE_LEFT", "STRIPE_RIGHT",
                "CROSS", "BORDER", "CURLY_BORDER", "CREEPER", "SKULL", "FLOWER", "MOJANG",
                "GLOBE", "PIGLIN", "GRADIENT", "BRICKS", "RHOMBUS", "CIRCLE",
                "SMALL_STRIPES", "TRIANGLE_TOP", "TRIANGLE_BOTTOM",
            ]),
            (PotionEffectType, &[
                "SPEED", "SLOWNESS", "HASTE", "STRENGTH", "INSTANT_HEALTH", "JUMP_BOOST",
                "REGENERATION", "RESISTANCE", "FIRE_RESISTANCE", "WATER_BREATHING",
                "INVISIBILITY", "NIGHT_VISION", "POISON", "WITHER", "SATURATION",
                "BLINDNESS", "ABSORPTION", "GLOWING", "LUCK", "WEAKNESS",
            ]),
            (PotionType, &[
                "WATER", "AWKWARD", "MUNDANE", "THICK", "SWIFTNESS", "LONG_SWIFTNESS",
                "STRENGTH", "STRONG_STRENGTH", "HEALING", "REGENERATION", "NIGHT_VISION",
                "INVISIBILITY", "POISON", "FIRE_RESISTANCE", "WEAKNESS", "LUCK",
            ]),
            (EntityType, &[
                "PIG", "COW", "SHEEP", "ZOMBIE", "SKELETON", "CREEPER", "SPIDER", "BLAZE",
                "ENDERMAN", "AXOLOTL", "VILLAGER",
            ]),
            (TrimMaterial, &[
                "QUARTZ", "IRON", "NETHERITE", "REDSTONE", "COPPER", "GOLD", "EMERALD",
                "DIAMOND", "LAPIS", "AMETHYST",
            ]),
            (TrimPattern, &[
                "SENTRY", "DUNE", "COAST", "WILD", "WARD", "EYE", "VEX", "TIDE", "SNOUT",
                "RIB", "SPIRE", "WAYFINDER", "SHAPER", "SILENCE", "RAISER", "HOST",
            ]),
            (Instrument, &[
                "PONDER_GOAT_HORN", "SING_GOAT_HORN", "SEEK_GOAT_HORN", "FEEL_GOAT_HORN",
                "ADMIRE_GOAT_HORN", "CALL_GOAT_HORN", "YEARN_GOAT_HORN", "DREAM_GOAT_HORN",
            ]),
            (AxolotlVariant, &["LUCY", "WILD", "GOLD", "CYAN", "BLUE"]),
        ];
        for (kind, list) in names {
            for name in list {
                if let Err(e) = self.register_symbol(kind, name) {
                    log::warn!("Skipping built-in {:?} symbol: {}", kind, e);
                }
            }
        }

        let aliases: [(SymbolKind, &str, &str); 27] = [
            (Enchantment, "PROTECTION_ENVIRONMENTAL", "PROTECTION"),
            (Enchantment, "PROTECTION_FIRE", "FIRE_PROTECTION"),
            (Enchantment, "PROTECTION_FALL", "FEATHER_FALLING"),
            (Enchantment, "DAMAGE_ALL", "SHARPNESS"),
            (Enchantment, "DAMAGE_UNDEAD", "SMITE"),
            (Enchantment, "DURABILITY", "UNBREAKING"),
            (Enchantment, "DIG_SPEED", "EFFICIENCY"),
            (Enchantment, "LOOT_BONUS_BLOCKS", "FORTUNE"),
            (Enchantment, "LOOT_BONUS_MOBS", "LOOTING"),
            (Enchantment, "ARROW_DAMAGE", "POWER"),
            (Enchantment, "ARROW_INFINITE", "INFINITY"),
            (Attribute, "GENERIC_ATTACK_DAMAGE", "ATTACK_DAMAGE"),
            (Attribute, "GENERIC_ATTACK_SPEED", "ATTACK_SPEED"),
            (Attribute, "GENERIC_MAX_HEALTH", "MAX_HEALTH"),
            (Attribute, "GENERIC_MOVEMENT_SPEED", "MOVEMENT_SPEED"),
            (Attribute, "GENERIC_ARMOR", "ARMOR"),
            (Attribute, "GENERIC_ARMOR_TOUGHNESS", "ARMOR_TOUGHNESS"),
            (Attribute, "GENERIC_LUCK", "LUCK"),
            (PatternType, "RHOMBUS_MIDDLE", "RHOMBUS"),
            (PatternType, "CIRCLE_MIDDLE", "CIRCLE"),
            (PatternType, "STRIPE_SMALL", "SMALL_STRIPES"),
            (PotionEffectType, "SLOW", "SLOWNESS"),
            (PotionEffectType, "FAST_DIGGING", "HASTE"),
            (PotionEffectType, "INCREASE_DAMAGE", "STRENGTH"),
            (PotionEffectType, "HEAL", "INSTANT_HEALTH"),
            (PotionEffectType, "JUMP", "JUMP_BOOST"),
            (PotionEffectType, "DAMAGE_RESISTANCE", "RESISTANCE"),
        ];
        for (kind, alias, target) in aliases {
            if let Err(e) = self.alias_symbol(kind, alias, target) {
                log::warn!("Skipping built-in {:?} alias: {}", kind, e);
            }
        }

        for (alias, target) in [("SPEED", "SWIFTNESS"), ("INSTANT_HEAL", "HEALING")] {
            if let Err(e) = self.alias_symbol(PotionType, alias, target) {
                log::warn!("Skipping built-in PotionType alias: {}", e);
            }
        }
    }

    fn add_material(&mut self, material: Material) {
        if let Err(e) = self.register_material(material) {
            log::warn!("Skipping built-in material: {}", e);
        }
    }
}

impl SymbolRegistry for StaticRegistry {
    fn material(&self, name: &str) -> Option<Material> {
        let key = normalize_name(name);
        let key = self.material_aliases.get(&key).unwrap_or(&key);
        self.materials.get(key).cloned()
    }

    fn resolve(&self, kind: SymbolKind, name: &str) -> Option<Symbol> {
        let key = (kind, normalize_name(name));
        match self.symbol_aliases.get(&key) {
            Some(target) => self.symbols.get(&(kind, target.clone())).cloned(),
            None => self.symbols.get(&key).cloned(),
        }
    }
}

impl Default for StaticRegistry {
    fn default() -> Self {
        Self::create_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_aliases_resolve_to_canonical() {
        let registry = StaticRegistry::create_default();

        let head = registry.material("skull_item").unwrap();
        assert_eq!(head.name(), "PLAYER_HEAD");
        assert_eq!(registry.canonical_material(&head), "PLAYER_HEAD");
        assert!(registry.material("NOT_A_REAL_MATERIAL").is_none());
    }

    #[test]
    fn test_symbol_aliases_resolve_to_canonical() {
        let registry = StaticRegistry::create_default();

        let unbreaking = registry.resolve(SymbolKind::Enchantment, "DURABILITY").unwrap();
        assert_eq!(registry.canonical_name(&unbreaking), "UNBREAKING");
        assert!(registry.resolve(SymbolKind::Attribute, "DURABILITY").is_none());
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = StaticRegistry::new();
        registry
            .register_material(Material::new("STONE", &classes::META_ITEM))
            .unwrap();

        let err = registry
            .register_material(Material::new("stone", &classes::META_ITEM))
            .unwrap_err();
        assert_eq!(err, RegistryError::Duplicate("STONE".to_string()));
    }

    #[test]
    fn test_alias_requires_target() {
        let mut registry = StaticRegistry::new();
        assert!(registry.alias_material("OLD", "MISSING").is_err());
        assert!(registry
            .alias_symbol(SymbolKind::Enchantment, "OLD", "MISSING")
            .is_err());
    }

    #[test]
    fn test_technical_identities_are_not_items() {
        let registry = StaticRegistry::create_default();
        let water = registry.material("STATIONARY_WATER").unwrap();
        assert!(water.is_supported());
        assert!(!water.is_item());
        assert!(registry.material("SPAWNER").unwrap().block_state().is_some());
    }
}
