// Capability handlers
//
// One reader/writer pair per capability interface, and the standard table
// binding them. Handlers are registered against interfaces only; concrete
// classes pick them up through the resolver's ancestor walk.

mod armor;
mod banner;
mod book;
mod container;
mod firework;
mod map;
mod potion;
mod simple;

use crate::dispatch::{CapabilityTable, Handler};
use crate::meta::classes;

impl CapabilityTable {
    /// The table every codec uses unless given another resolver
    pub fn standard() -> Self {
        CapabilityTable::from_handlers([
            Handler::new(&classes::POTION_META, potion::write_potion, potion::read_potion),
            Handler::new(&classes::SUSPICIOUS_STEW_META, potion::write_stew, potion::read_stew),
            Handler::new(&classes::BANNER_META, banner::write_banner, banner::read_banner),
            Handler::new(&classes::FIREWORK_META, firework::write_firework, firework::read_firework),
            Handler::new(&classes::FIREWORK_EFFECT_META, firework::write_charge, firework::read_charge),
            Handler::new(&classes::WRITABLE_BOOK_META, book::write_pages, book::read_pages),
            Handler::new(&classes::BOOK_META, book::write_signature, book::read_signature),
            Handler::new(&classes::ARMOR_META, armor::write_trim, armor::read_trim),
            Handler::new(&classes::LEATHER_ARMOR_META, armor::write_color, armor::read_color),
            Handler::new(&classes::MAP_META, map::write_map, map::read_map),
            Handler::new(&classes::COMPASS_META, map::write_lodestone, map::read_lodestone),
            Handler::new(&classes::SPAWN_EGG_META, simple::write_spawn_egg, simple::read_spawn_egg),
            Handler::new(&classes::SKULL_META, simple::write_skull, simple::read_skull),
            Handler::new(
                &classes::BLOCK_STATE_META,
                container::write_block_state,
                container::read_block_state,
            ),
            Handler::new(
                &classes::CROSSBOW_META,
                container::write_projectiles,
                container::read_projectiles,
            ),
            Handler::new(&classes::AXOLOTL_BUCKET_META, simple::write_axolotl, simple::read_axolotl),
            Handler::new(
                &classes::MUSIC_INSTRUMENT_META,
                simple::write_instrument,
                simple::read_instrument,
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::CapabilityLookup;

    #[test]
    fn test_standard_table_binds_interfaces_only() {
        let table = CapabilityTable::standard();
        assert_eq!(table.len(), 17);

        assert!(table.lookup(&classes::POTION_META).is_some());
        assert!(table.lookup(&classes::META_POTION).is_none());
        assert!(table.lookup(&classes::ITEM_META).is_none());
        assert!(table.lookup(&classes::COLORABLE_ARMOR_META).is_none());
    }
}
