//! Armor trims and leather dye

use crate::codec::{ReadContext, WriteContext};
use crate::config::ConfigNode;
use crate::error::CodecError;
use crate::item::{ItemStack, SymbolKind};
use crate::meta::{ArmorTrim, ItemMeta};
use crate::platform::Feature;

pub(super) fn write_trim(
    ctx: &WriteContext<'_>,
    _item: &ItemStack,
    meta: &dyn ItemMeta,
    node: &mut ConfigNode,
) {
    if !ctx.supports(Feature::ArmorTrims) {
        return;
    }
    if let Some(trim) = meta.armor().and_then(|armor| armor.trim.as_ref()) {
        let section = node.section_mut("trim");
        section.set("material", ctx.symbol_name(&trim.material));
        section.set("pattern", ctx.symbol_name(&trim.pattern));
    }
}

pub(super) fn read_trim(
    ctx: &ReadContext<'_>,
    node: &ConfigNode,
    meta: &mut dyn ItemMeta,
) -> Result<(), CodecError> {
    if !ctx.supports(Feature::ArmorTrims) {
        return Ok(());
    }
    let (Some(armor), Some(section)) = (meta.armor_mut(), node.section("trim")) else {
        return Ok(());
    };

    // A trim needs both halves
    let material = section
        .get_str("material")
        .and_then(|name| ctx.resolve(SymbolKind::TrimMaterial, &name));
    let pattern = section
        .get_str("pattern")
        .and_then(|name| ctx.resolve(SymbolKind::TrimPattern, &name));

    if let (Some(material), Some(pattern)) = (material, pattern) {
        armor.trim = Some(ArmorTrim { material, pattern });
    }

    Ok(())
}

pub(super) fn write_color(
    _ctx: &WriteContext<'_>,
    _item: &ItemStack,
    meta: &dyn ItemMeta,
    node: &mut ConfigNode,
) {
    if let Some(color) = meta.leather_armor().and_then(|leather| leather.color) {
        node.set("color", color.to_string());
    }
}

pub(super) fn read_color(
    _ctx: &ReadContext<'_>,
    node: &ConfigNode,
    meta: &mut dyn ItemMeta,
) -> Result<(), CodecError> {
    if let (Some(leather), Some(color)) = (meta.leather_armor_mut(), node.get_str("color")) {
        leather.color = color.parse().ok();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{untranslated, ItemCodec};
    use crate::item::{StaticRegistry, Symbol, SymbolRegistry};
    use crate::meta::{ColorableArmorMeta, Color};
    use crate::platform::FeatureSet;

    fn trim(material: &str, pattern: &str) -> ArmorTrim {
        ArmorTrim {
            material: Symbol::new(SymbolKind::TrimMaterial, material),
            pattern: Symbol::new(SymbolKind::TrimPattern, pattern),
        }
    }

    #[test]
    fn test_colorable_armor_has_trim_and_color() {
        let registry = StaticRegistry::create_default();
        let features = FeatureSet::modern();
        let codec = ItemCodec::new(&registry, &features);

        let mut boots = ItemStack::with_default_meta(registry.material("LEATHER_BOOTS").unwrap());
        {
            let meta = boots.meta_as_mut::<ColorableArmorMeta>().unwrap();
            meta.armor.trim = Some(trim("GOLD", "COAST"));
            meta.leather.color = Some(Color::rgb(160, 101, 64));
        }

        let node = codec.serialize(&boots);
        assert_eq!(
            node.lookup("trim.pattern").and_then(|v| v.as_text()).as_deref(),
            Some("COAST")
        );
        assert_eq!(node.get_str("color").as_deref(), Some("160, 101, 64"));

        assert_eq!(codec.read(&node, &untranslated, None).unwrap(), boots);
    }

    #[test]
    fn test_trim_needs_feature_and_both_halves() {
        let registry = StaticRegistry::create_default();

        let mut node = ConfigNode::new();
        node.set("material", "IRON_HELMET");
        node.section_mut("trim").set("material", "IRON");

        let modern = FeatureSet::modern();
        let read = ItemCodec::new(&registry, &modern)
            .read(&node, &untranslated, None)
            .unwrap();
        assert_eq!(read.meta().unwrap().armor().unwrap().trim, None);

        node.section_mut("trim").set("pattern", "WARD");
        let read = ItemCodec::new(&registry, &modern)
            .read(&node, &untranslated, None)
            .unwrap();
        assert_eq!(read.meta().unwrap().armor().unwrap().trim, Some(trim("IRON", "WARD")));

        let legacy = FeatureSet::legacy();
        let read = ItemCodec::new(&registry, &legacy)
            .read(&node, &untranslated, None)
            .unwrap();
        assert_eq!(read.meta().unwrap().armor().unwrap().trim, None);
    }
}
