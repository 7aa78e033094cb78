//! Runtime class descriptors for the extension data hierarchy
//!
//! Extension data types form a small inheritance graph: concrete classes
//! with at most one superclass, and capability interfaces that may extend
//! other interfaces. The graph is described with static `MetaClass`
//! values so the dispatcher can walk it at runtime.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::ItemMeta;
use crate::item::Material;

/// Constructs default extension data for a material
pub type MetaConstructor = fn(&Material) -> Box<dyn ItemMeta>;

/// One node of the extension data class graph
pub struct MetaClass {
    pub name: &'static str,

    /// Interfaces are capability markers; they are never instantiated
    pub interface: bool,

    pub superclass: Option<&'static MetaClass>,

    /// Directly implemented (or extended) interfaces, in declaration order
    pub interfaces: &'static [&'static MetaClass],

    pub construct: Option<MetaConstructor>,
}

/// Identity of a class descriptor, usable as a map key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassKey(usize);

impl MetaClass {
    pub fn key(&'static self) -> ClassKey {
        ClassKey(self as *const MetaClass as usize)
    }

    /// Returns true if `other` is this class or one of its ancestors
    pub fn is_a(&'static self, other: &'static MetaClass) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        self.superclass.is_some_and(|s| s.is_a(other))
            || self.interfaces.iter().any(|i| i.is_a(other))
    }
}

impl PartialEq for MetaClass {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for MetaClass {}

impl Hash for MetaClass {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self as *const MetaClass as usize).hash(state);
    }
}

impl fmt::Debug for MetaClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetaClass")
            .field("name", &self.name)
            .field("interface", &self.interface)
            .field("superclass", &self.superclass.map(|s| s.name))
            .field(
                "interfaces",
                &self.interfaces.iter().map(|i| i.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// The built-in class graph
pub mod classes {
    use super::MetaClass;
    use crate::meta::kinds::*;
    use crate::meta::{instantiate, ItemMeta};
    use crate::item::Material;

    // Capability interfaces

    pub static ITEM_META: MetaClass = MetaClass {
        name: "ItemMeta",
        interface: true,
        superclass: None,
        interfaces: &[],
        construct: None,
    };
    pub static DAMAGEABLE: MetaClass = MetaClass {
        name: "Damageable",
        interface: true,
        superclass: None,
        interfaces: &[&ITEM_META],
        construct: None,
    };
    pub static POTION_META: MetaClass = MetaClass {
        name: "PotionMeta",
        interface: true,
        superclass: None,
        interfaces: &[&ITEM_META],
        construct: None,
    };
    pub static SUSPICIOUS_STEW_META: MetaClass = MetaClass {
        name: "SuspiciousStewMeta",
        interface: true,
        superclass: None,
        interfaces: &[&ITEM_META],
        construct: None,
    };
    pub static BANNER_META: MetaClass = MetaClass {
        name: "BannerMeta",
        interface: true,
        superclass: None,
        interfaces: &[&ITEM_META],
        construct: None,
    };
    pub static FIREWORK_META: MetaClass = MetaClass {
        name: "FireworkMeta",
        interface: true,
        superclass: None,
        interfaces: &[&ITEM_META],
        construct: None,
    };
    pub static FIREWORK_EFFECT_META: MetaClass = MetaClass {
        name: "FireworkEffectMeta",
        interface: true,
        superclass: None,
        interfaces: &[&ITEM_META],
        construct: None,
    };
    pub static WRITABLE_BOOK_META: MetaClass = MetaClass {
        name: "WritableBookMeta",
        interface: true,
        superclass: None,
        interfaces: &[&ITEM_META],
        construct: None,
    };
    pub static BOOK_META: MetaClass = MetaClass {
        name: "BookMeta",
        interface: true,
        superclass: None,
        interfaces: &[&WRITABLE_BOOK_META],
        construct: None,
    };
    pub static ENCHANTMENT_STORAGE_META: MetaClass = MetaClass {
        name: "EnchantmentStorageMeta",
        interface: true,
        superclass: None,
        interfaces: &[&ITEM_META],
        construct: None,
    };
    pub static ARMOR_META: MetaClass = MetaClass {
        name: "ArmorMeta",
        interface: true,
        superclass: None,
        interfaces: &[&ITEM_META],
        construct: None,
    };
    pub static LEATHER_ARMOR_META: MetaClass = MetaClass {
        name: "LeatherArmorMeta",
        interface: true,
        superclass: None,
        interfaces: &[&ITEM_META],
        construct: None,
    };
    pub static COLORABLE_ARMOR_META: MetaClass = MetaClass {
        name: "ColorableArmorMeta",
        interface: true,
        superclass: None,
        interfaces: &[&ARMOR_META, &LEATHER_ARMOR_META],
        construct: None,
    };
    pub static MAP_META: MetaClass = MetaClass {
        name: "MapMeta",
        interface: true,
        superclass: None,
        interfaces: &[&ITEM_META],
        construct: None,
    };
    pub static COMPASS_META: MetaClass = MetaClass {
        name: "CompassMeta",
        interface: true,
        superclass: None,
        interfaces: &[&ITEM_META],
        construct: None,
    };
    pub static SPAWN_EGG_META: MetaClass = MetaClass {
        name: "SpawnEggMeta",
        interface: true,
        superclass: None,
        interfaces: &[&ITEM_META],
        construct: None,
    };
    pub static SKULL_META: MetaClass = MetaClass {
        name: "SkullMeta",
        interface: true,
        superclass: None,
        interfaces: &[&ITEM_META],
        construct: None,
    };
    pub static BLOCK_STATE_META: MetaClass = MetaClass {
        name: "BlockStateMeta",
        interface: true,
        superclass: None,
        interfaces: &[&ITEM_META],
        construct: None,
    };
    pub static CROSSBOW_META: MetaClass = MetaClass {
        name: "CrossbowMeta",
        interface: true,
        superclass: None,
        interfaces: &[&ITEM_META],
        construct: None,
    };
    pub static AXOLOTL_BUCKET_META: MetaClass = MetaClass {
        name: "AxolotlBucketMeta",
        interface: true,
        superclass: None,
        interfaces: &[&ITEM_META],
        construct: None,
    };
    pub static MUSIC_INSTRUMENT_META: MetaClass = MetaClass {
        name: "MusicInstrumentMeta",
        interface: true,
        superclass: None,
        interfaces: &[&ITEM_META],
        construct: None,
    };

    // Concrete classes

    pub static META_ITEM: MetaClass = MetaClass {
        name: "MetaItem",
        interface: false,
        superclass: None,
        interfaces: &[&ITEM_META, &DAMAGEABLE],
        construct: Some(instantiate::<BasicMeta>),
    };
    pub static META_POTION: MetaClass = MetaClass {
        name: "MetaPotion",
        interface: false,
        superclass: Some(&META_ITEM),
        interfaces: &[&POTION_META],
        construct: Some(instantiate::<PotionMeta>),
    };
    pub static META_SUSPICIOUS_STEW: MetaClass = MetaClass {
        name: "MetaSuspiciousStew",
        interface: false,
        superclass: Some(&META_ITEM),
        interfaces: &[&SUSPICIOUS_STEW_META],
        construct: Some(instantiate::<StewMeta>),
    };
    pub static META_BANNER: MetaClass = MetaClass {
        name: "MetaBanner",
        interface: false,
        superclass: Some(&META_ITEM),
        interfaces: &[&BANNER_META],
        construct: Some(instantiate::<BannerMeta>),
    };
    pub static META_FIREWORK: MetaClass = MetaClass {
        name: "MetaFirework",
        interface: false,
        superclass: Some(&META_ITEM),
        interfaces: &[&FIREWORK_META],
        construct: Some(instantiate::<FireworkMeta>),
    };
    pub static META_CHARGE: MetaClass = MetaClass {
        name: "MetaCharge",
        interface: false,
        superclass: Some(&META_ITEM),
        interfaces: &[&FIREWORK_EFFECT_META],
        construct: Some(instantiate::<FireworkChargeMeta>),
    };
    pub static META_BOOK: MetaClass = MetaClass {
        name: "MetaBook",
        interface: false,
        superclass: Some(&META_ITEM),
        interfaces: &[&WRITABLE_BOOK_META],
        construct: Some(instantiate::<WritableBookMeta>),
    };
    pub static META_BOOK_SIGNED: MetaClass = MetaClass {
        name: "MetaBookSigned",
        interface: false,
        superclass: Some(&META_BOOK),
        interfaces: &[&BOOK_META],
        construct: Some(instantiate::<WrittenBookMeta>),
    };
    pub static META_ENCHANTED_BOOK: MetaClass = MetaClass {
        name: "MetaEnchantedBook",
        interface: false,
        superclass: Some(&META_ITEM),
        interfaces: &[&ENCHANTMENT_STORAGE_META],
        construct: Some(instantiate::<EnchantedBookMeta>),
    };
    pub static META_ARMOR: MetaClass = MetaClass {
        name: "MetaArmor",
        interface: false,
        superclass: Some(&META_ITEM),
        interfaces: &[&ARMOR_META],
        construct: Some(instantiate::<ArmorMeta>),
    };
    pub static META_LEATHER_ARMOR: MetaClass = MetaClass {
        name: "MetaLeatherArmor",
        interface: false,
        superclass: Some(&META_ITEM),
        interfaces: &[&LEATHER_ARMOR_META],
        construct: Some(instantiate::<LeatherArmorMeta>),
    };
    pub static META_COLORABLE_ARMOR: MetaClass = MetaClass {
        name: "MetaColorableArmor",
        interface: false,
        superclass: Some(&META_ARMOR),
        interfaces: &[&COLORABLE_ARMOR_META],
        construct: Some(instantiate::<ColorableArmorMeta>),
    };
    pub static META_MAP: MetaClass = MetaClass {
        name: "MetaMap",
        interface: false,
        superclass: Some(&META_ITEM),
        interfaces: &[&MAP_META],
        construct: Some(instantiate::<MapMeta>),
    };
    pub static META_COMPASS: MetaClass = MetaClass {
        name: "MetaCompass",
        interface: false,
        superclass: Some(&META_ITEM),
        interfaces: &[&COMPASS_META],
        construct: Some(instantiate::<CompassMeta>),
    };
    pub static META_SPAWN_EGG: MetaClass = MetaClass {
        name: "MetaSpawnEgg",
        interface: false,
        superclass: Some(&META_ITEM),
        interfaces: &[&SPAWN_EGG_META],
        construct: Some(instantiate::<SpawnEggMeta>),
    };
    pub static META_SKULL: MetaClass = MetaClass {
        name: "MetaSkull",
        interface: false,
        superclass: Some(&META_ITEM),
        interfaces: &[&SKULL_META],
        construct: Some(instantiate::<SkullMeta>),
    };
    pub static META_BLOCK_STATE: MetaClass = MetaClass {
        name: "MetaBlockState",
        interface: false,
        superclass: Some(&META_ITEM),
        interfaces: &[&BLOCK_STATE_META],
        construct: Some(block_state_for),
    };
    pub static META_CROSSBOW: MetaClass = MetaClass {
        name: "MetaCrossbow",
        interface: false,
        superclass: Some(&META_ITEM),
        interfaces: &[&CROSSBOW_META],
        construct: Some(instantiate::<CrossbowMeta>),
    };
    pub static META_AXOLOTL_BUCKET: MetaClass = MetaClass {
        name: "MetaAxolotlBucket",
        interface: false,
        superclass: Some(&META_ITEM),
        interfaces: &[&AXOLOTL_BUCKET_META],
        construct: Some(instantiate::<AxolotlBucketMeta>),
    };
    pub static META_MUSIC_INSTRUMENT: MetaClass = MetaClass {
        name: "MetaMusicInstrument",
        interface: false,
        superclass: Some(&META_ITEM),
        interfaces: &[&MUSIC_INSTRUMENT_META],
        construct: Some(instantiate::<MusicInstrumentMeta>),
    };

    fn block_state_for(material: &Material) -> Box<dyn ItemMeta> {
        Box::new(BlockStateMeta::for_material(material))
    }
}
