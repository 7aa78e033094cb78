//! Item → config tree
//!
//! Base fields first, then every capability block the item's extension data
//! class resolves to. Defaults are never written: an omitted amount is 1,
//! an omitted damage is 0 and so on.

use indexmap::IndexMap;

use super::WriteContext;
use crate::config::ConfigNode;
use crate::item::{ItemFlag, ItemStack, Symbol};
use crate::meta::{ItemMeta, MetaBase};
use crate::platform::Feature;

/// Some consumers of the format collapse true-empty lore lines
const BLANK_LINE: &str = " ";

pub(super) fn write_item(ctx: &WriteContext<'_>, item: &ItemStack, node: &mut ConfigNode) {
    node.set("material", ctx.material_name(item.material()));
    if item.amount() > 1 {
        node.set("amount", item.amount());
    }

    let Some(meta) = item.meta() else {
        return;
    };

    write_base(ctx, meta.base(), node);

    if let Some(stored) = meta.stored_enchants() {
        write_levels(ctx, "stored-enchants", stored, node);
    }

    ctx.codec
        .resolver
        .resolve_write(meta.class())
        .write(ctx, item, meta, node);
}

fn write_base(ctx: &WriteContext<'_>, base: &MetaBase, node: &mut ConfigNode) {
    if base.damage > 0 {
        node.set("damage", base.damage);
    }

    if let Some(name) = &base.display_name {
        node.set("name", ctx.translate(name));
    }

    if !base.lore.is_empty() {
        let lines: Vec<String> = base
            .lore
            .iter()
            .map(|line| {
                if line.is_empty() {
                    BLANK_LINE.to_string()
                } else {
                    ctx.translate(line)
                }
            })
            .collect();
        node.set("lore", lines);
    }

    // Zero and unset are the same thing in this format
    if ctx.supports(Feature::CustomModelData) && base.custom_model_value() != 0 {
        node.set("custom-model-data", base.custom_model_value());
    }

    if base.unbreakable && ctx.supports(Feature::Unbreakable) {
        node.set("unbreakable", true);
    }

    write_levels(ctx, "enchants", &base.enchants, node);

    if !base.flags.is_empty() {
        let flags: Vec<String> = base
            .flags
            .iter()
            .map(|flag| ItemFlag::name(*flag).to_string())
            .collect();
        node.set("flags", flags);
    }

    if ctx.supports(Feature::AttributeModifiers) {
        write_attributes(ctx, base, node);
    }
}

fn write_levels(
    ctx: &WriteContext<'_>,
    key: &str,
    levels: &IndexMap<Symbol, u32>,
    node: &mut ConfigNode,
) {
    if levels.is_empty() {
        return;
    }

    let section = node.section_mut(key);
    for (enchant, level) in levels {
        section.set(ctx.symbol_name(enchant), *level);
    }
}

/// Entries are keyed by attribute, so a second modifier on the same
/// attribute replaces the first one
fn write_attributes(ctx: &WriteContext<'_>, base: &MetaBase, node: &mut ConfigNode) {
    let modifiers: Vec<_> = base
        .attributes
        .iter()
        .filter(|modifier| !modifier.is_hidden_flags_marker())
        .collect();

    if modifiers.is_empty() {
        return;
    }

    let section = node.section_mut("attributes");
    for modifier in modifiers {
        let entry = section.section_mut(&ctx.symbol_name(&modifier.attribute));
        entry.set("id", modifier.id.to_string());
        entry.set("name", modifier.name.as_str());
        entry.set("amount", modifier.amount);
        entry.set("operation", modifier.operation.name());
        if let Some(slot) = modifier.slot {
            entry.set("slot", slot.name());
        }
    }
}
