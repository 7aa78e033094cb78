//! Block states and charged projectiles
//!
//! Both hold whole items. Each contained item is written through the codec
//! again into its own child node: `contents.<slot>` for a shulker box,
//! `projectiles.<n>` for a crossbow. A nested read that fails fails the
//! item containing it.

use crate::codec::{ReadContext, WriteContext};
use crate::config::ConfigNode;
use crate::error::CodecError;
use crate::item::{ItemStack, SymbolKind};
use crate::meta::{BlockState, ItemMeta};

pub(super) fn write_block_state(
    ctx: &WriteContext<'_>,
    _item: &ItemStack,
    meta: &dyn ItemMeta,
    node: &mut ConfigNode,
) {
    match meta.block_state() {
        Some(BlockState::Spawner {
            spawned_type: Some(spawned),
        }) => {
            node.set("spawner", ctx.symbol_name(spawned));
        }
        Some(BlockState::ShulkerBox(inventory)) if !inventory.is_empty() => {
            let contents = node.section_mut("contents");
            for (slot, content) in inventory.occupied() {
                ctx.write_nested(content, contents.section_mut(&slot.to_string()));
            }
        }
        _ => {}
    }
}

pub(super) fn read_block_state(
    ctx: &ReadContext<'_>,
    node: &ConfigNode,
    meta: &mut dyn ItemMeta,
) -> Result<(), CodecError> {
    match meta.block_state_mut() {
        Some(BlockState::Spawner { spawned_type }) => {
            if let Some(name) = node.get_str("spawner") {
                *spawned_type = ctx.resolve(SymbolKind::EntityType, &name);
            }
        }
        Some(BlockState::ShulkerBox(inventory)) => {
            let Some(contents) = node.section("contents") else {
                return Ok(());
            };

            for (key, child) in contents.sections() {
                let Ok(slot) = key.parse::<usize>() else {
                    log::debug!("Skipping container entry with non-numeric slot '{}'", key);
                    continue;
                };

                let content = ctx.read_nested(child)?;
                if let Err(e) = inventory.set(slot, Some(content)) {
                    log::warn!("Dropping container entry: {}", e);
                }
            }
        }
        _ => {}
    }

    Ok(())
}

pub(super) fn write_projectiles(
    ctx: &WriteContext<'_>,
    _item: &ItemStack,
    meta: &dyn ItemMeta,
    node: &mut ConfigNode,
) {
    let Some(crossbow) = meta.crossbow() else {
        return;
    };
    if crossbow.projectiles.is_empty() {
        return;
    }

    let section = node.section_mut("projectiles");
    for (index, projectile) in crossbow.projectiles.iter().enumerate() {
        ctx.write_nested(projectile, section.section_mut(&index.to_string()));
    }
}

pub(super) fn read_projectiles(
    ctx: &ReadContext<'_>,
    node: &ConfigNode,
    meta: &mut dyn ItemMeta,
) -> Result<(), CodecError> {
    let (Some(crossbow), Some(section)) = (meta.crossbow_mut(), node.section("projectiles")) else {
        return Ok(());
    };

    crossbow.projectiles = section
        .sections()
        .map(|(_, child)| ctx.read_nested(child))
        .collect::<Result<Vec<_>, CodecError>>()?;

    Ok(())
}
