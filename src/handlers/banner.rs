//! Banner pattern layers
//!
//! Layers are keyed by pattern name, so a banner using the same pattern
//! twice keeps only the last layer of that pattern.

use crate::codec::{ReadContext, WriteContext};
use crate::config::ConfigNode;
use crate::error::CodecError;
use crate::item::{ItemStack, SymbolKind};
use crate::meta::{BannerPattern, DyeColor, ItemMeta};

pub(super) fn write_banner(
    ctx: &WriteContext<'_>,
    _item: &ItemStack,
    meta: &dyn ItemMeta,
    node: &mut ConfigNode,
) {
    let Some(banner) = meta.banner() else {
        return;
    };
    if banner.patterns.is_empty() {
        return;
    }

    let section = node.section_mut("patterns");
    for layer in &banner.patterns {
        section.set(ctx.symbol_name(&layer.pattern), layer.color.name());
    }
}

pub(super) fn read_banner(
    ctx: &ReadContext<'_>,
    node: &ConfigNode,
    meta: &mut dyn ItemMeta,
) -> Result<(), CodecError> {
    let (Some(banner), Some(section)) = (meta.banner_mut(), node.section("patterns")) else {
        return Ok(());
    };

    banner.patterns = section
        .iter()
        .filter_map(|(name, color)| {
            let pattern = ctx.resolve(SymbolKind::PatternType, name)?;
            let color = DyeColor::from_name(&color.as_text()?)?;
            Some(BannerPattern { pattern, color })
        })
        .collect();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{untranslated, ItemCodec};
    use crate::item::{StaticRegistry, Symbol, SymbolRegistry};
    use crate::meta::BannerMeta;
    use crate::platform::FeatureSet;

    fn layer(pattern: &str, color: DyeColor) -> BannerPattern {
        BannerPattern {
            pattern: Symbol::new(SymbolKind::PatternType, pattern),
            color,
        }
    }

    #[test]
    fn test_banner_round_trip() {
        let registry = StaticRegistry::create_default();
        let features = FeatureSet::modern();
        let codec = ItemCodec::new(&registry, &features);

        let mut banner = ItemStack::with_default_meta(registry.material("WHITE_BANNER").unwrap());
        banner.meta_as_mut::<BannerMeta>().unwrap().banner.patterns = vec![
            layer("CREEPER", DyeColor::Green),
            layer("BORDER", DyeColor::Black),
        ];

        let node = codec.serialize(&banner);
        assert_eq!(node.lookup("patterns.CREEPER").and_then(|v| v.as_text()).as_deref(), Some("GREEN"));

        let read = codec.read(&node, &untranslated, None).unwrap();
        assert_eq!(read, banner);
    }

    #[test]
    fn test_repeated_pattern_collapses() {
        let registry = StaticRegistry::create_default();
        let features = FeatureSet::modern();
        let codec = ItemCodec::new(&registry, &features);

        let mut banner = ItemStack::with_default_meta(registry.material("RED_BANNER").unwrap());
        banner.meta_as_mut::<BannerMeta>().unwrap().banner.patterns = vec![
            layer("STRIPE_TOP", DyeColor::Blue),
            layer("CROSS", DyeColor::White),
            layer("STRIPE_TOP", DyeColor::Yellow),
        ];

        let read = codec
            .read(&codec.serialize(&banner), &untranslated, None)
            .unwrap();
        assert_eq!(
            read.meta_as::<BannerMeta>().unwrap().banner.patterns,
            vec![layer("STRIPE_TOP", DyeColor::Yellow), layer("CROSS", DyeColor::White)]
        );
    }

    #[test]
    fn test_legacy_pattern_and_color_names() {
        let registry = StaticRegistry::create_default();
        let features = FeatureSet::modern();
        let codec = ItemCodec::new(&registry, &features);

        let mut node = ConfigNode::new();
        node.set("material", "BLACK_BANNER");
        let patterns = node.section_mut("patterns");
        patterns.set("STRIPE_SMALL", "SILVER");
        patterns.set("BEES", "RED");

        let read = codec.read(&node, &untranslated, None).unwrap();
        assert_eq!(
            read.meta_as::<BannerMeta>().unwrap().banner.patterns,
            vec![layer("SMALL_STRIPES", DyeColor::LightGray)]
        );
    }
}
