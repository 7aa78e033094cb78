//! Item extension data
//!
//! This module provides the open-ended part of an item:
//! - `MetaClass` descriptors forming the runtime class graph
//! - The `ItemMeta` trait every concrete extension data type implements
//! - `MetaBase`, the fields every extension data type shares
//! - One data struct per capability, and the concrete types combining them
//!
//! # Capability access
//!
//! Each capability has an accessor pair on `ItemMeta` returning `None` by
//! default. A concrete type overrides the accessors for the capabilities
//! its class declares, so a handler asking an unrelated type for its data
//! simply gets `None` and skips the block.

pub mod class;
pub mod data;
pub mod kinds;

use std::any::Any;
use std::fmt::Debug;

use indexmap::IndexMap;
use std::collections::BTreeSet;

pub use class::{classes, ClassKey, MetaClass, MetaConstructor};
pub use data::*;
pub use kinds::*;

use crate::item::{AttributeModifier, ItemFlag, Material, Symbol};

/// Fields shared by every extension data type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetaBase {
    pub display_name: Option<String>,
    pub lore: Vec<String>,

    /// Wear value, 0 for a pristine item
    pub damage: u32,

    /// Opaque render tag; `Some(0)` cannot survive a round trip
    pub custom_model_data: Option<i32>,

    pub unbreakable: bool,
    pub enchants: IndexMap<Symbol, u32>,
    pub flags: BTreeSet<ItemFlag>,
    pub attributes: Vec<AttributeModifier>,
}

impl MetaBase {
    /// The custom model value as the format sees it: unset reads as 0
    pub fn custom_model_value(&self) -> i32 {
        self.custom_model_data.unwrap_or(0)
    }
}

/// Object-safe clone/equality/downcast support for `ItemMeta`
///
/// Implemented automatically for every `ItemMeta` that is `Clone + PartialEq`.
pub trait MetaObject: Any + Send + Sync {
    fn clone_box(&self) -> Box<dyn ItemMeta>;
    fn eq_dyn(&self, other: &dyn ItemMeta) -> bool;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: ItemMeta + Clone + PartialEq> MetaObject for T {
    fn clone_box(&self) -> Box<dyn ItemMeta> {
        Box::new(self.clone())
    }

    fn eq_dyn(&self, other: &dyn ItemMeta) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Accessor pairs that report a capability as absent
macro_rules! capability_accessors {
    ($($get:ident / $get_mut:ident: $ty:ty),* $(,)?) => {
        $(
            fn $get(&self) -> Option<&$ty> {
                None
            }
            fn $get_mut(&mut self) -> Option<&mut $ty> {
                None
            }
        )*
    };
}

/// Extension data attached to an item
pub trait ItemMeta: MetaObject + Debug {
    /// The concrete runtime class of this value
    fn class(&self) -> &'static MetaClass;

    fn base(&self) -> &MetaBase;
    fn base_mut(&mut self) -> &mut MetaBase;

    capability_accessors! {
        stored_enchants / stored_enchants_mut: IndexMap<Symbol, u32>,
        potion / potion_mut: PotionData,
        stew / stew_mut: StewData,
        banner / banner_mut: BannerData,
        firework / firework_mut: FireworkData,
        charge / charge_mut: ChargeData,
        writable_book / writable_book_mut: WritableBookData,
        book / book_mut: BookData,
        armor / armor_mut: ArmorData,
        leather_armor / leather_armor_mut: LeatherArmorData,
        filled_map / filled_map_mut: MapData,
        compass / compass_mut: CompassData,
        spawn_egg / spawn_egg_mut: SpawnEggData,
        skull / skull_mut: SkullData,
        block_state / block_state_mut: BlockState,
        crossbow / crossbow_mut: CrossbowData,
        axolotl / axolotl_mut: AxolotlData,
        instrument / instrument_mut: InstrumentData,
    }
}

/// Default constructor for meta types that ignore the material
pub fn instantiate<M: ItemMeta + Default>(_material: &Material) -> Box<dyn ItemMeta> {
    Box::new(M::default())
}
