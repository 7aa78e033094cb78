//! Single-field identity blocks: skull owner, spawn egg creature, axolotl
//! variant and goat horn instrument

use crate::codec::{ReadContext, WriteContext};
use crate::config::ConfigNode;
use crate::error::CodecError;
use crate::item::{ItemStack, SymbolKind};
use crate::meta::ItemMeta;
use crate::platform::Feature;

pub(super) fn write_skull(
    _ctx: &WriteContext<'_>,
    _item: &ItemStack,
    meta: &dyn ItemMeta,
    node: &mut ConfigNode,
) {
    if let Some(owner) = meta.skull().and_then(|skull| skull.owner.as_ref()) {
        node.set("skull", owner.as_str());
    }
}

pub(super) fn read_skull(
    _ctx: &ReadContext<'_>,
    node: &ConfigNode,
    meta: &mut dyn ItemMeta,
) -> Result<(), CodecError> {
    if let (Some(skull), Some(owner)) = (meta.skull_mut(), node.get_str("skull")) {
        skull.owner = Some(owner);
    }
    Ok(())
}

/// Only old platforms store the creature; newer ones have one material per egg
pub(super) fn write_spawn_egg(
    ctx: &WriteContext<'_>,
    _item: &ItemStack,
    meta: &dyn ItemMeta,
    node: &mut ConfigNode,
) {
    if !ctx.supports(Feature::LegacySpawnEggs) {
        return;
    }
    if let Some(creature) = meta.spawn_egg().and_then(|egg| egg.creature.as_ref()) {
        node.set("creature", ctx.symbol_name(creature));
    }
}

pub(super) fn read_spawn_egg(
    ctx: &ReadContext<'_>,
    node: &ConfigNode,
    meta: &mut dyn ItemMeta,
) -> Result<(), CodecError> {
    if !ctx.supports(Feature::LegacySpawnEggs) {
        return Ok(());
    }
    if let (Some(egg), Some(name)) = (meta.spawn_egg_mut(), node.get_str("creature")) {
        egg.creature = ctx.resolve(SymbolKind::EntityType, &name);
    }
    Ok(())
}

pub(super) fn write_axolotl(
    ctx: &WriteContext<'_>,
    _item: &ItemStack,
    meta: &dyn ItemMeta,
    node: &mut ConfigNode,
) {
    if !ctx.supports(Feature::AxolotlBuckets) {
        return;
    }
    if let Some(variant) = meta.axolotl().and_then(|bucket| bucket.variant.as_ref()) {
        node.set("variant", ctx.symbol_name(variant));
    }
}

pub(super) fn read_axolotl(
    ctx: &ReadContext<'_>,
    node: &ConfigNode,
    meta: &mut dyn ItemMeta,
) -> Result<(), CodecError> {
    if !ctx.supports(Feature::AxolotlBuckets) {
        return Ok(());
    }
    if let (Some(bucket), Some(name)) = (meta.axolotl_mut(), node.get_str("variant")) {
        bucket.variant = ctx.resolve(SymbolKind::AxolotlVariant, &name);
    }
    Ok(())
}

pub(super) fn write_instrument(
    ctx: &WriteContext<'_>,
    _item: &ItemStack,
    meta: &dyn ItemMeta,
    node: &mut ConfigNode,
) {
    if !ctx.supports(Feature::Instruments) {
        return;
    }
    if let Some(instrument) = meta.instrument().and_then(|horn| horn.instrument.as_ref()) {
        node.set("instrument", ctx.symbol_name(instrument));
    }
}

pub(super) fn read_instrument(
    ctx: &ReadContext<'_>,
    node: &ConfigNode,
    meta: &mut dyn ItemMeta,
) -> Result<(), CodecError> {
    if !ctx.supports(Feature::Instruments) {
        return Ok(());
    }
    if let (Some(horn), Some(name)) = (meta.instrument_mut(), node.get_str("instrument")) {
        horn.instrument = ctx.resolve(SymbolKind::Instrument, &name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{untranslated, ItemCodec};
    use crate::item::{StaticRegistry, Symbol, SymbolRegistry};
    use crate::meta::{AxolotlBucketMeta, MusicInstrumentMeta, SkullMeta, SpawnEggMeta};
    use crate::platform::FeatureSet;

    #[test]
    fn test_skull_owner() {
        let registry = StaticRegistry::create_default();
        let features = FeatureSet::none();
        let codec = ItemCodec::new(&registry, &features);

        let mut head = ItemStack::with_default_meta(registry.material("PLAYER_HEAD").unwrap());
        head.meta_as_mut::<SkullMeta>().unwrap().skull.owner = Some("Notch".to_string());

        let node = codec.serialize(&head);
        assert_eq!(node.get_str("skull").as_deref(), Some("Notch"));
        assert_eq!(codec.read(&node, &untranslated, None).unwrap(), head);
    }

    #[test]
    fn test_spawn_egg_creature_is_legacy_only() {
        let registry = StaticRegistry::create_default();
        let mut egg = ItemStack::with_default_meta(registry.material("PIG_SPAWN_EGG").unwrap());
        egg.meta_as_mut::<SpawnEggMeta>().unwrap().egg.creature =
            Some(Symbol::new(SymbolKind::EntityType, "COW"));

        let legacy = FeatureSet::legacy();
        let codec = ItemCodec::new(&registry, &legacy);
        let node = codec.serialize(&egg);
        assert_eq!(node.get_str("creature").as_deref(), Some("COW"));
        assert_eq!(codec.read(&node, &untranslated, None).unwrap(), egg);

        let modern = FeatureSet::modern();
        assert!(!ItemCodec::new(&registry, &modern).serialize(&egg).contains("creature"));
    }

    #[test]
    fn test_bucket_and_horn() {
        let registry = StaticRegistry::create_default();
        let features = FeatureSet::modern();
        let codec = ItemCodec::new(&registry, &features);

        let mut bucket = ItemStack::with_default_meta(registry.material("AXOLOTL_BUCKET").unwrap());
        bucket.meta_as_mut::<AxolotlBucketMeta>().unwrap().axolotl.variant =
            Some(Symbol::new(SymbolKind::AxolotlVariant, "BLUE"));
        let mut horn = ItemStack::with_default_meta(registry.material("GOAT_HORN").unwrap());
        horn.meta_as_mut::<MusicInstrumentMeta>().unwrap().instrument.instrument =
            Some(Symbol::new(SymbolKind::Instrument, "DREAM_GOAT_HORN"));

        for item in [bucket, horn] {
            let node = codec.serialize(&item);
            assert_eq!(codec.read(&node, &untranslated, None).unwrap(), item);
        }
    }
}
