//! Config tree → item
//!
//! Mirrors the writer. The material is the only mandatory field; anything
//! else that is missing, malformed or unknown to the running platform is
//! treated as absent.

use indexmap::IndexMap;
use uuid::Uuid;

use super::{ReadContext, UnresolvedIdentity, UnresolvedReason};
use crate::config::ConfigNode;
use crate::error::CodecError;
use crate::item::{
    AttributeModifier, AttributeOperation, EquipmentSlot, ItemFlag, ItemStack, Material, Symbol,
    SymbolKind,
};
use crate::meta::MetaBase;
use crate::platform::Feature;

/// The token that expands to every hide flag
const ALL_FLAGS: &str = "ALL";

pub(super) fn read_item(ctx: &ReadContext<'_>, node: &ConfigNode) -> Result<ItemStack, CodecError> {
    let material = read_material(ctx, node)?;

    // Extension data exists from the start, even for materials without any
    let mut item = ItemStack::with_default_meta(material);

    if let Some(amount) = node.get_int("amount").filter(|amount| *amount > 1) {
        item.set_amount(u32::try_from(amount).unwrap_or(u32::MAX));
    }

    let meta = item.meta_or_default();
    read_base(ctx, node, meta.base_mut());

    if let Some(stored) = meta.stored_enchants_mut() {
        if let Some(section) = node.section("stored-enchants") {
            read_levels(ctx, section, stored);
        }
    }

    ctx.codec
        .resolver
        .resolve_read(meta.class())
        .read(ctx, node, meta)?;

    Ok(item)
}

fn read_material(ctx: &ReadContext<'_>, node: &ConfigNode) -> Result<Material, CodecError> {
    let name = node.get_str("material").unwrap_or_default();

    let (reason, material) = match ctx.codec.registry.material(&name) {
        Some(material) if !material.is_supported() => {
            (UnresolvedReason::Unsupported, Some(material))
        }
        Some(material) if !material.is_item() => {
            (UnresolvedReason::NotDisplayable, Some(material))
        }
        Some(material) => return Ok(material),
        None => (UnresolvedReason::Unknown, None),
    };

    let unresolved = UnresolvedIdentity {
        name,
        reason,
        material,
    };

    match ctx.recovery.and_then(|recover| recover(&unresolved)) {
        Some(substitute) => {
            log::debug!("Substituting {} for {}", substitute, unresolved);
            Ok(substitute)
        }
        None => Err(CodecError::UnresolvedIdentity(unresolved)),
    }
}

fn read_base(ctx: &ReadContext<'_>, node: &ConfigNode, base: &mut MetaBase) {
    if let Some(damage) = node.get_int("damage").filter(|damage| *damage > 0) {
        base.damage = u32::try_from(damage).unwrap_or(u32::MAX);
    }

    if let Some(name) = node.get_str("name") {
        // An explicit empty name still shows up as a name
        base.display_name = Some(if name.is_empty() {
            " ".to_string()
        } else {
            ctx.translate(&name)
        });
    }

    if ctx.supports(Feature::Unbreakable) {
        if let Some(unbreakable) = node.get_bool("unbreakable") {
            base.unbreakable = unbreakable;
        }
    }

    if ctx.supports(Feature::CustomModelData) {
        if let Some(value) = node.get_int("custom-model-data").filter(|value| *value != 0) {
            base.custom_model_data = i32::try_from(value).ok();
        }
    }

    if let Some(entries) = node.get_string_list("lore") {
        base.lore = entries
            .iter()
            .flat_map(|entry| entry.split('\n'))
            .map(|line| {
                if line == " " {
                    String::new()
                } else {
                    ctx.translate(line)
                }
            })
            .collect();
    }

    if let Some(section) = node.section("enchants") {
        read_levels(ctx, section, &mut base.enchants);
    }

    if let Some(flags) = node.get_string_list("flags") {
        for flag in flags {
            if flag.trim().eq_ignore_ascii_case(ALL_FLAGS) {
                base.flags.extend(ItemFlag::ALL);
            } else if let Some(flag) = ItemFlag::from_name(&flag) {
                base.flags.insert(flag);
            } else {
                log::debug!("Skipping unknown item flag '{}'", flag);
            }
        }
    }

    if ctx.supports(Feature::AttributeModifiers) {
        if let Some(section) = node.section("attributes") {
            read_attributes(ctx, section, base);
        }
    }

    // Hide flags have no visible effect on an item without modifiers
    if ctx.supports(Feature::HiddenFlagModifiers)
        && !base.flags.is_empty()
        && base.attributes.is_empty()
    {
        if let Some(luck) = ctx.resolve(SymbolKind::Attribute, "LUCK") {
            base.attributes.push(AttributeModifier::hidden_flags_marker(luck));
        }
    }
}

fn read_levels(ctx: &ReadContext<'_>, section: &ConfigNode, levels: &mut IndexMap<Symbol, u32>) {
    for (name, value) in section.iter() {
        let Some(enchant) = ctx.resolve(SymbolKind::Enchantment, name) else {
            continue;
        };
        match value.as_int().and_then(|level| u32::try_from(level).ok()) {
            Some(level) => {
                levels.insert(enchant, level);
            }
            None => log::debug!("Skipping enchantment {} with a bad level", enchant),
        }
    }
}

fn read_attributes(ctx: &ReadContext<'_>, section: &ConfigNode, base: &mut MetaBase) {
    for (name, entry) in section.sections() {
        let Some(attribute) = ctx.resolve(SymbolKind::Attribute, name) else {
            continue;
        };

        let id = entry
            .get_str("id")
            .and_then(|id| Uuid::parse_str(&id).ok())
            .unwrap_or_else(Uuid::new_v4);

        base.attributes.push(AttributeModifier {
            attribute,
            id,
            name: entry.get_str("name").unwrap_or_else(|| id.to_string()),
            amount: entry.get_float("amount").unwrap_or(0.0),
            operation: entry
                .get_str("operation")
                .and_then(|op| AttributeOperation::from_name(&op))
                .unwrap_or_default(),
            slot: entry
                .get_str("slot")
                .and_then(|slot| EquipmentSlot::from_name(&slot)),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{untranslated, ItemCodec};
    use crate::item::{StaticRegistry, SymbolRegistry};
    use crate::meta::classes;
    use crate::platform::FeatureSet;

    fn node(material: &str) -> ConfigNode {
        let mut node = ConfigNode::new();
        node.set("material", material);
        node
    }

    #[test]
    fn test_minimal_node() {
        let registry = StaticRegistry::create_default();
        let features = FeatureSet::modern();
        let codec = ItemCodec::new(&registry, &features);

        let item = codec.read(&node("stone"), &untranslated, None).unwrap();

        assert_eq!(item.material().name(), "STONE");
        assert_eq!(item.amount(), 1);
        assert_eq!(item.meta().unwrap().base(), &MetaBase::default());
    }

    #[test]
    fn test_aliases_resolve() {
        let registry = StaticRegistry::create_default();
        let features = FeatureSet::modern();
        let codec = ItemCodec::new(&registry, &features);

        let mut input = node("SKULL_ITEM");
        input.section_mut("enchants").set("DURABILITY", 3);

        let item = codec.read(&input, &untranslated, None).unwrap();
        assert_eq!(item.material().name(), "PLAYER_HEAD");

        let unbreaking = Symbol::new(SymbolKind::Enchantment, "UNBREAKING");
        assert_eq!(item.meta().unwrap().base().enchants.get(&unbreaking), Some(&3));
    }

    #[test]
    fn test_unacceptable_identities() {
        let mut registry = StaticRegistry::create_default();
        registry
            .register_material(Material::new("BUNDLE", &classes::META_ITEM).unsupported())
            .unwrap();
        let features = FeatureSet::modern();
        let codec = ItemCodec::new(&registry, &features);

        let seen = std::sync::Mutex::new(Vec::new());
        let stone = registry.material("STONE").unwrap();
        let recover = |unresolved: &UnresolvedIdentity| {
            seen.lock().unwrap().push(unresolved.reason);
            Some(stone.clone())
        };

        for name in ["BUNDLE", "WATER", "NOPE"] {
            let item = codec.read(&node(name), &untranslated, Some(&recover)).unwrap();
            assert_eq!(item.material().name(), "STONE");
        }
        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                UnresolvedReason::Unsupported,
                UnresolvedReason::NotDisplayable,
                UnresolvedReason::Unknown,
            ]
        );

        let decline = |_: &UnresolvedIdentity| -> Option<Material> { None };
        let declined = codec.read(&node("WATER"), &untranslated, Some(&decline));
        match declined {
            Err(CodecError::UnresolvedIdentity(unresolved)) => {
                assert_eq!(unresolved.reason, UnresolvedReason::NotDisplayable);
                let material = unresolved.material.unwrap();
                assert_eq!(material.name(), "WATER");
            }
            other => panic!("expected an unresolved identity, got {:?}", other),
        }
    }

    #[test]
    fn test_name_and_lore_quirks() {
        let registry = StaticRegistry::create_default();
        let features = FeatureSet::modern();
        let codec = ItemCodec::new(&registry, &features);

        let mut input = node("STONE");
        input.set("name", "");
        input.set("lore", vec!["first\nsecond".to_string(), " ".to_string()]);

        let item = codec.read(&input, &untranslated, None).unwrap();
        let base = item.meta().unwrap().base();

        assert_eq!(base.display_name.as_deref(), Some(" "));
        assert_eq!(base.lore, vec!["first", "second", ""]);
    }

    #[test]
    fn test_empty_lore_list_replaces_lore() {
        let registry = StaticRegistry::create_default();
        let features = FeatureSet::modern();
        let codec = ItemCodec::new(&registry, &features);

        let mut input = node("STONE");
        input.set("lore", Vec::<String>::new());

        let item = codec.read(&input, &untranslated, None).unwrap();
        assert!(item.meta().unwrap().base().lore.is_empty());
    }

    #[test]
    fn test_all_flags_and_marker_modifier() {
        let registry = StaticRegistry::create_default();
        let mut input = node("STONE");
        input.set("flags", "ALL");

        let modern = FeatureSet::modern();
        let item = ItemCodec::new(&registry, &modern)
            .read(&input, &untranslated, None)
            .unwrap();
        let base = item.meta().unwrap().base();
        assert_eq!(base.flags.len(), ItemFlag::ALL.len());
        assert_eq!(base.attributes.len(), 1);
        assert!(base.attributes[0].is_hidden_flags_marker());
        assert_eq!(base.attributes[0].attribute.name(), "LUCK");

        let legacy = FeatureSet::legacy();
        let item = ItemCodec::new(&registry, &legacy)
            .read(&input, &untranslated, None)
            .unwrap();
        assert!(item.meta().unwrap().base().attributes.is_empty());
    }

    #[test]
    fn test_unknown_symbols_are_skipped() {
        let registry = StaticRegistry::create_default();
        let features = FeatureSet::modern();
        let codec = ItemCodec::new(&registry, &features);

        let mut input = node("DIAMOND_SWORD");
        let enchants = input.section_mut("enchants");
        enchants.set("SHARPNESS", 5);
        enchants.set("SOUL_HARVEST", 2);
        let attributes = input.section_mut("attributes");
        attributes.section_mut("WINGSPAN").set("amount", 2.0);
        attributes.section_mut("GENERIC_MAX_HEALTH").set("amount", 2.0);

        let item = codec.read(&input, &untranslated, None).unwrap();
        let base = item.meta().unwrap().base();

        assert_eq!(base.enchants.len(), 1);
        assert_eq!(base.attributes.len(), 1);
        let modifier = &base.attributes[0];
        assert_eq!(modifier.attribute.name(), "MAX_HEALTH");
        assert_eq!(modifier.operation, AttributeOperation::AddNumber);
        assert_eq!(modifier.slot, None);
        assert_eq!(modifier.name, modifier.id.to_string());
    }

    #[test]
    fn test_stored_enchants_round_trip() {
        let registry = StaticRegistry::create_default();
        let features = FeatureSet::modern();
        let codec = ItemCodec::new(&registry, &features);

        let mut input = node("ENCHANTED_BOOK");
        let stored = input.section_mut("stored-enchants");
        stored.set("MENDING", 1);
        stored.set("DURABILITY", 3);

        let item = codec.read(&input, &untranslated, None).unwrap();
        let book = item.meta_as::<crate::meta::EnchantedBookMeta>().unwrap();
        assert_eq!(
            book.stored_enchants.iter().map(|(e, l)| (e.name(), *l)).collect::<Vec<_>>(),
            vec![("MENDING", 1), ("UNBREAKING", 3)]
        );
        assert!(book.base.enchants.is_empty());

        let written = codec.serialize(&item);
        assert_eq!(
            written.lookup("stored-enchants.UNBREAKING").and_then(|v| v.as_int()),
            Some(3)
        );
        assert_eq!(codec.read(&written, &untranslated, None).unwrap(), item);
    }

    #[test]
    fn test_stored_enchants_need_storage() {
        let registry = StaticRegistry::create_default();
        let features = FeatureSet::modern();
        let codec = ItemCodec::new(&registry, &features);

        let mut input = node("DIAMOND_SWORD");
        input.section_mut("stored-enchants").set("MENDING", 1);

        let item = codec.read(&input, &untranslated, None).unwrap();
        let meta = item.meta().unwrap();
        assert!(meta.stored_enchants().is_none());
        assert!(meta.base().enchants.is_empty());
        assert!(!codec.serialize(&item).contains("stored-enchants"));
    }

    #[test]
    fn test_non_finite_attribute_amount_reads_as_zero() {
        let registry = StaticRegistry::create_default();
        let features = FeatureSet::modern();
        let codec = ItemCodec::new(&registry, &features);

        let mut input = node("DIAMOND_SWORD");
        let attributes = input.section_mut("attributes");
        attributes.section_mut("ATTACK_DAMAGE").set("amount", "NaN");
        attributes.section_mut("MAX_HEALTH").set("amount", "inf");

        let item = codec.read(&input, &untranslated, None).unwrap();
        let amounts: Vec<f64> = item
            .meta()
            .unwrap()
            .base()
            .attributes
            .iter()
            .map(|modifier| modifier.amount)
            .collect();
        assert_eq!(amounts, vec![0.0, 0.0]);
    }
}
