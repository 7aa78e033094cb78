//! Filled maps and lodestone compasses

use crate::codec::{ReadContext, WriteContext};
use crate::config::{ConfigNode, ConfigSection};
use crate::error::CodecError;
use crate::item::ItemStack;
use crate::meta::{ItemMeta, Location, MapView};
use crate::platform::Feature;

pub(super) fn write_map(
    ctx: &WriteContext<'_>,
    _item: &ItemStack,
    meta: &dyn ItemMeta,
    node: &mut ConfigNode,
) {
    let Some(map) = meta.filled_map() else {
        return;
    };

    let mut section = ConfigNode::new();
    if map.scaling {
        section.set("scaling", true);
    }
    if let Some(location) = &map.location_name {
        section.set("location", location.as_str());
    }
    if ctx.supports(Feature::MapColors) {
        if let Some(color) = map.color {
            section.set("color", color.to_string());
        }
    }
    if ctx.supports(Feature::MapViews) {
        if let Some(view) = &map.view {
            view.write_to(&mut section, "view");
        }
    }

    if !section.is_empty() {
        node.set("map", section);
    }
}

pub(super) fn read_map(
    ctx: &ReadContext<'_>,
    node: &ConfigNode,
    meta: &mut dyn ItemMeta,
) -> Result<(), CodecError> {
    let (Some(map), Some(section)) = (meta.filled_map_mut(), node.section("map")) else {
        return Ok(());
    };

    map.scaling = section.get_bool("scaling").unwrap_or(false);
    map.location_name = section.get_str("location");
    if ctx.supports(Feature::MapColors) {
        map.color = section.get_str("color").and_then(|c| c.parse().ok());
    }
    if ctx.supports(Feature::MapViews) {
        map.view = MapView::read_from(section, "view");
    }

    Ok(())
}

pub(super) fn write_lodestone(
    ctx: &WriteContext<'_>,
    _item: &ItemStack,
    meta: &dyn ItemMeta,
    node: &mut ConfigNode,
) {
    if !ctx.supports(Feature::Lodestones) {
        return;
    }
    let Some(compass) = meta.compass() else {
        return;
    };
    if !compass.tracked && compass.lodestone.is_none() {
        return;
    }

    let section = node.section_mut("lodestone");
    section.set("tracked", compass.tracked);
    if let Some(location) = &compass.lodestone {
        location.write_to(section, "location");
    }
}

pub(super) fn read_lodestone(
    ctx: &ReadContext<'_>,
    node: &ConfigNode,
    meta: &mut dyn ItemMeta,
) -> Result<(), CodecError> {
    if !ctx.supports(Feature::Lodestones) {
        return Ok(());
    }
    let (Some(compass), Some(section)) = (meta.compass_mut(), node.section("lodestone")) else {
        return Ok(());
    };

    compass.tracked = section.get_bool("tracked").unwrap_or(false);
    compass.lodestone = Location::read_from(section, "location");

    Ok(())
}
