//! Concrete extension data types
//!
//! Each type pairs the shared `MetaBase` with the capability data its class
//! declares, and reports its class descriptor for dispatch.

use indexmap::IndexMap;

use super::class::{classes, MetaClass};
use super::data::*;
use super::{ItemMeta, MetaBase};
use crate::inventory::Inventory;
use crate::item::{BlockStateKind, Material, Symbol};

/// Slots in a captured shulker box
pub const SHULKER_BOX_SIZE: usize = 27;

/// Declares a concrete meta type and its `ItemMeta` impl
///
/// Each field is listed with the accessor pair that exposes it.
macro_rules! meta_kind {
    (
        $(#[$attr:meta])*
        $name:ident => $class:ident {
            $($field:ident: $ty:ty => $get:ident / $get_mut:ident),* $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            pub base: MetaBase,
            $(pub $field: $ty,)*
        }

        impl ItemMeta for $name {
            fn class(&self) -> &'static MetaClass {
                &classes::$class
            }

            fn base(&self) -> &MetaBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut MetaBase {
                &mut self.base
            }

            $(
                fn $get(&self) -> Option<&$ty> {
                    Some(&self.$field)
                }

                fn $get_mut(&mut self) -> Option<&mut $ty> {
                    Some(&mut self.$field)
                }
            )*
        }
    };
}

meta_kind! {
    /// Plain extension data: only the shared fields
    BasicMeta => META_ITEM {}
}

meta_kind! {
    /// Potions, splash/lingering potions and tipped arrows
    PotionMeta => META_POTION {
        potion: PotionData => potion / potion_mut,
    }
}

meta_kind! {
    StewMeta => META_SUSPICIOUS_STEW {
        stew: StewData => stew / stew_mut,
    }
}

meta_kind! {
    BannerMeta => META_BANNER {
        banner: BannerData => banner / banner_mut,
    }
}

meta_kind! {
    /// Firework rockets
    FireworkMeta => META_FIREWORK {
        firework: FireworkData => firework / firework_mut,
    }
}

meta_kind! {
    /// Firework stars, holding at most one explosion
    FireworkChargeMeta => META_CHARGE {
        charge: ChargeData => charge / charge_mut,
    }
}

meta_kind! {
    /// Book and quill
    WritableBookMeta => META_BOOK {
        pages: WritableBookData => writable_book / writable_book_mut,
    }
}

meta_kind! {
    /// Signed book; extends the writable book's pages
    WrittenBookMeta => META_BOOK_SIGNED {
        pages: WritableBookData => writable_book / writable_book_mut,
        book: BookData => book / book_mut,
    }
}

meta_kind! {
    EnchantedBookMeta => META_ENCHANTED_BOOK {
        stored_enchants: IndexMap<Symbol, u32> => stored_enchants / stored_enchants_mut,
    }
}

meta_kind! {
    /// Trimmable armor
    ArmorMeta => META_ARMOR {
        armor: ArmorData => armor / armor_mut,
    }
}

meta_kind! {
    /// Dyeable items that cannot be trimmed (horse armor)
    LeatherArmorMeta => META_LEATHER_ARMOR {
        leather: LeatherArmorData => leather_armor / leather_armor_mut,
    }
}

meta_kind! {
    /// Leather armor pieces: trimmable and dyeable
    ColorableArmorMeta => META_COLORABLE_ARMOR {
        armor: ArmorData => armor / armor_mut,
        leather: LeatherArmorData => leather_armor / leather_armor_mut,
    }
}

meta_kind! {
    MapMeta => META_MAP {
        map: MapData => filled_map / filled_map_mut,
    }
}

meta_kind! {
    CompassMeta => META_COMPASS {
        compass: CompassData => compass / compass_mut,
    }
}

meta_kind! {
    SpawnEggMeta => META_SPAWN_EGG {
        egg: SpawnEggData => spawn_egg / spawn_egg_mut,
    }
}

meta_kind! {
    SkullMeta => META_SKULL {
        skull: SkullData => skull / skull_mut,
    }
}

meta_kind! {
    /// Block items carrying a captured block state
    BlockStateMeta => META_BLOCK_STATE {
        state: BlockState => block_state / block_state_mut,
    }
}

meta_kind! {
    CrossbowMeta => META_CROSSBOW {
        crossbow: CrossbowData => crossbow / crossbow_mut,
    }
}

meta_kind! {
    AxolotlBucketMeta => META_AXOLOTL_BUCKET {
        axolotl: AxolotlData => axolotl / axolotl_mut,
    }
}

meta_kind! {
    /// Goat horns
    MusicInstrumentMeta => META_MUSIC_INSTRUMENT {
        instrument: InstrumentData => instrument / instrument_mut,
    }
}

impl BlockStateMeta {
    /// Creates the empty block state matching the material
    pub fn for_material(material: &Material) -> Self {
        let state = match material.block_state() {
            Some(BlockStateKind::Spawner) => BlockState::Spawner { spawned_type: None },
            Some(BlockStateKind::ShulkerBox) => {
                BlockState::ShulkerBox(Inventory::new(SHULKER_BOX_SIZE))
            }
            None => BlockState::Empty,
        };

        BlockStateMeta {
            base: MetaBase::default(),
            state,
        }
    }
}
