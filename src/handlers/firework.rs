//! Firework rockets and firework stars
//!
//! Explosion layers are written as `firework.<n>` sections. A star carries a
//! single layer, always at `firework.0`.

use crate::codec::{ReadContext, WriteContext};
use crate::config::{ConfigNode, ConfigSection};
use crate::error::CodecError;
use crate::item::ItemStack;
use crate::meta::{FireworkEffect, ItemMeta};

const MAX_POWER: i64 = 127;

pub(super) fn write_firework(
    _ctx: &WriteContext<'_>,
    _item: &ItemStack,
    meta: &dyn ItemMeta,
    node: &mut ConfigNode,
) {
    let Some(firework) = meta.firework() else {
        return;
    };

    if firework.power > 0 {
        node.set("power", firework.power);
    }

    if !firework.effects.is_empty() {
        let layers = node.section_mut("firework");
        for (index, effect) in firework.effects.iter().enumerate() {
            effect.write_to(layers, &index.to_string());
        }
    }
}

pub(super) fn read_firework(
    _ctx: &ReadContext<'_>,
    node: &ConfigNode,
    meta: &mut dyn ItemMeta,
) -> Result<(), CodecError> {
    let Some(firework) = meta.firework_mut() else {
        return Ok(());
    };

    if let Some(power) = node.get_int("power") {
        firework.power = power.clamp(0, MAX_POWER) as u8;
    }

    if let Some(layers) = node.section("firework") {
        firework.effects = layers
            .sections()
            .filter_map(|(_, layer)| FireworkEffect::read_section(layer))
            .collect();
    }

    Ok(())
}

pub(super) fn write_charge(
    _ctx: &WriteContext<'_>,
    _item: &ItemStack,
    meta: &dyn ItemMeta,
    node: &mut ConfigNode,
) {
    if let Some(effect) = meta.charge().and_then(|charge| charge.effect.as_ref()) {
        effect.write_to(node.section_mut("firework"), "0");
    }
}

pub(super) fn read_charge(
    _ctx: &ReadContext<'_>,
    node: &ConfigNode,
    meta: &mut dyn ItemMeta,
) -> Result<(), CodecError> {
    let Some(charge) = meta.charge_mut() else {
        return Ok(());
    };

    // Older files may number the only layer differently; take the first one
    if let Some((_, layer)) = node.section("firework").and_then(|l| l.sections().next()) {
        charge.effect = FireworkEffect::read_section(layer);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{untranslated, ItemCodec};
    use crate::item::{StaticRegistry, SymbolRegistry};
    use crate::meta::{Color, FireworkChargeMeta, FireworkMeta, FireworkType};
    use crate::platform::FeatureSet;

    fn burst() -> FireworkEffect {
        FireworkEffect {
            kind: FireworkType::Burst,
            flicker: false,
            trail: true,
            colors: vec![Color::rgb(255, 128, 0)],
            fade_colors: Vec::new(),
        }
    }

    #[test]
    fn test_rocket_layers() {
        let registry = StaticRegistry::create_default();
        let features = FeatureSet::modern();
        let codec = ItemCodec::new(&registry, &features);

        let mut rocket = ItemStack::with_default_meta(registry.material("FIREWORK").unwrap());
        {
            let meta = rocket.meta_as_mut::<FireworkMeta>().unwrap();
            meta.firework.power = 2;
            meta.firework.effects = vec![burst(), FireworkEffect::default()];
        }

        let node = codec.serialize(&rocket);
        assert_eq!(node.get_int("power"), Some(2));
        assert!(node.lookup("firework.1.type").is_some());

        let read = codec.read(&node, &untranslated, None).unwrap();
        assert_eq!(read, rocket);
    }

    #[test]
    fn test_star_uses_first_layer() {
        let registry = StaticRegistry::create_default();
        let features = FeatureSet::modern();
        let codec = ItemCodec::new(&registry, &features);

        let mut star = ItemStack::with_default_meta(registry.material("FIREWORK_STAR").unwrap());
        star.meta_as_mut::<FireworkChargeMeta>().unwrap().charge.effect = Some(burst());

        let node = codec.serialize(&star);
        assert_eq!(
            node.lookup("firework.0.type").and_then(|v| v.as_text()).as_deref(),
            Some("BURST")
        );
        assert_eq!(codec.read(&node, &untranslated, None).unwrap(), star);
    }
}
