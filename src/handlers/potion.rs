//! Potion and suspicious stew blocks
//!
//! Both carry effect lines of the form `TYPE, duration, amplifier`. A
//! hand-written line may add a fourth `%chance` column; the effect is then
//! only applied when the roll at read time succeeds. Writers never emit
//! the chance column.

use rand::Rng;

use crate::codec::{ReadContext, WriteContext};
use crate::config::ConfigNode;
use crate::error::CodecError;
use crate::item::{ItemStack, SymbolKind};
use crate::meta::{ItemMeta, PotionEffect};
use crate::platform::Feature;

pub(super) fn write_potion(
    ctx: &WriteContext<'_>,
    _item: &ItemStack,
    meta: &dyn ItemMeta,
    node: &mut ConfigNode,
) {
    let Some(potion) = meta.potion() else {
        return;
    };

    if let Some(base_type) = &potion.base_type {
        node.set("base-type", ctx.symbol_name(base_type));
    }

    write_effects(ctx, &potion.effects, node);

    if ctx.supports(Feature::PotionColors) {
        if let Some(color) = potion.color {
            node.set("color", color.to_string());
        }
    }
}

pub(super) fn read_potion(
    ctx: &ReadContext<'_>,
    node: &ConfigNode,
    meta: &mut dyn ItemMeta,
) -> Result<(), CodecError> {
    let Some(potion) = meta.potion_mut() else {
        return Ok(());
    };

    // Older files write "TYPE, extended, upgraded"
    if let Some(base_type) = node.get_str("base-type") {
        let name = base_type.split(',').next().unwrap_or_default();
        potion.base_type = ctx.resolve(SymbolKind::PotionType, name);
    }

    if let Some(effects) = read_effects(ctx, node) {
        potion.effects = effects;
    }

    if ctx.supports(Feature::PotionColors) {
        if let Some(color) = node.get_str("color") {
            potion.color = color.parse().ok();
        }
    }

    Ok(())
}

pub(super) fn write_stew(
    ctx: &WriteContext<'_>,
    _item: &ItemStack,
    meta: &dyn ItemMeta,
    node: &mut ConfigNode,
) {
    if !ctx.supports(Feature::SuspiciousStew) {
        return;
    }
    if let Some(stew) = meta.stew() {
        write_effects(ctx, &stew.effects, node);
    }
}

pub(super) fn read_stew(
    ctx: &ReadContext<'_>,
    node: &ConfigNode,
    meta: &mut dyn ItemMeta,
) -> Result<(), CodecError> {
    if !ctx.supports(Feature::SuspiciousStew) {
        return Ok(());
    }
    if let Some(stew) = meta.stew_mut() {
        if let Some(effects) = read_effects(ctx, node) {
            stew.effects = effects;
        }
    }
    Ok(())
}

fn write_effects(ctx: &WriteContext<'_>, effects: &[PotionEffect], node: &mut ConfigNode) {
    if effects.is_empty() {
        return;
    }

    let lines: Vec<String> = effects
        .iter()
        .map(|effect| {
            format!(
                "{}, {}, {}",
                ctx.symbol_name(&effect.kind),
                effect.duration,
                effect.amplifier
            )
        })
        .collect();
    node.set("effects", lines);
}

fn read_effects(ctx: &ReadContext<'_>, node: &ConfigNode) -> Option<Vec<PotionEffect>> {
    let lines = node.get_string_list("effects")?;
    Some(
        lines
            .iter()
            .filter_map(|line| parse_effect(ctx, line))
            .collect(),
    )
}

/// Parses one effect line, rolling its chance column if present
///
/// Returns None for unknown effect types and for lost rolls.
fn parse_effect(ctx: &ReadContext<'_>, line: &str) -> Option<PotionEffect> {
    let mut parts = line.split(',').map(str::trim);

    let kind = ctx.resolve(SymbolKind::PotionEffectType, parts.next()?)?;
    let duration = parts
        .next()
        .and_then(|d| d.parse().ok())
        .unwrap_or(PotionEffect::DEFAULT_DURATION);
    let amplifier = parts.next().and_then(|a| a.parse().ok()).unwrap_or(0);

    if let Some(chance) = parts.next().and_then(parse_chance) {
        if rand::thread_rng().gen_range(0.0..100.0) >= chance {
            return None;
        }
    }

    Some(PotionEffect::new(kind, duration, amplifier))
}

/// `%30`, `30%` and `30` all mean a 30 percent chance
fn parse_chance(column: &str) -> Option<f64> {
    column.trim_matches('%').trim().parse().ok()
}
