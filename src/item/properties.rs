use std::fmt;

use uuid::Uuid;

use super::symbol::{normalize_name, Symbol};

/// Tooltip sections an item can hide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemFlag {
    HideEnchants,
    HideAttributes,
    HideUnbreakable,
    HideDestroys,
    HidePlacedOn,
    HideAdditionalTooltip,
    HideDye,
    HideArmorTrim,
    HideStoredEnchants,
}

impl ItemFlag {
    /// Every decorative hide flag, what the `ALL` token expands to
    pub const ALL: [ItemFlag; 9] = [
        ItemFlag::HideEnchants,
        ItemFlag::HideAttributes,
        ItemFlag::HideUnbreakable,
        ItemFlag::HideDestroys,
        ItemFlag::HidePlacedOn,
        ItemFlag::HideAdditionalTooltip,
        ItemFlag::HideDye,
        ItemFlag::HideArmorTrim,
        ItemFlag::HideStoredEnchants,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ItemFlag::HideEnchants => "HIDE_ENCHANTS",
            ItemFlag::HideAttributes => "HIDE_ATTRIBUTES",
            ItemFlag::HideUnbreakable => "HIDE_UNBREAKABLE",
            ItemFlag::HideDestroys => "HIDE_DESTROYS",
            ItemFlag::HidePlacedOn => "HIDE_PLACED_ON",
            ItemFlag::HideAdditionalTooltip => "HIDE_ADDITIONAL_TOOLTIP",
            ItemFlag::HideDye => "HIDE_DYE",
            ItemFlag::HideArmorTrim => "HIDE_ARMOR_TRIM",
            ItemFlag::HideStoredEnchants => "HIDE_STORED_ENCHANTS",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let flag = match normalize_name(name).as_str() {
            "HIDE_ENCHANTS" => ItemFlag::HideEnchants,
            "HIDE_ATTRIBUTES" => ItemFlag::HideAttributes,
            "HIDE_UNBREAKABLE" => ItemFlag::HideUnbreakable,
            "HIDE_DESTROYS" => ItemFlag::HideDestroys,
            "HIDE_PLACED_ON" => ItemFlag::HidePlacedOn,
            "HIDE_ADDITIONAL_TOOLTIP" | "HIDE_POTION_EFFECTS" => {
                ItemFlag::HideAdditionalTooltip
            }
            "HIDE_DYE" => ItemFlag::HideDye,
            "HIDE_ARMOR_TRIM" => ItemFlag::HideArmorTrim,
            "HIDE_STORED_ENCHANTS" => ItemFlag::HideStoredEnchants,
            _ => return None,
        };
        Some(flag)
    }
}

/// Equipment slots an attribute modifier can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentSlot {
    Hand,
    OffHand,
    Head,
    Chest,
    Legs,
    Feet,
    Body,
}

impl EquipmentSlot {
    pub fn name(self) -> &'static str {
        match self {
            EquipmentSlot::Hand => "HAND",
            EquipmentSlot::OffHand => "OFF_HAND",
            EquipmentSlot::Head => "HEAD",
            EquipmentSlot::Chest => "CHEST",
            EquipmentSlot::Legs => "LEGS",
            EquipmentSlot::Feet => "FEET",
            EquipmentSlot::Body => "BODY",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let slot = match normalize_name(name).as_str() {
            "HAND" | "MAINHAND" | "MAIN_HAND" => EquipmentSlot::Hand,
            "OFF_HAND" | "OFFHAND" => EquipmentSlot::OffHand,
            "HEAD" | "HELMET" => EquipmentSlot::Head,
            "CHEST" | "CHESTPLATE" => EquipmentSlot::Chest,
            "LEGS" | "LEGGINGS" => EquipmentSlot::Legs,
            "FEET" | "BOOTS" => EquipmentSlot::Feet,
            "BODY" => EquipmentSlot::Body,
            _ => return None,
        };
        Some(slot)
    }
}

/// How an attribute modifier's amount is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttributeOperation {
    #[default]
    AddNumber,
    AddScalar,
    MultiplyScalar1,
}

impl AttributeOperation {
    pub fn name(self) -> &'static str {
        match self {
            AttributeOperation::AddNumber => "ADD_NUMBER",
            AttributeOperation::AddScalar => "ADD_SCALAR",
            AttributeOperation::MultiplyScalar1 => "MULTIPLY_SCALAR_1",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let op = match normalize_name(name).as_str() {
            "ADD_NUMBER" | "ADD_VALUE" | "0" => AttributeOperation::AddNumber,
            "ADD_SCALAR" | "ADD_MULTIPLIED_BASE" | "1" => AttributeOperation::AddScalar,
            "MULTIPLY_SCALAR_1" | "ADD_MULTIPLIED_TOTAL" | "2" => {
                AttributeOperation::MultiplyScalar1
            }
            _ => return None,
        };
        Some(op)
    }
}

/// Name carried by the inert modifier that makes hide flags take effect
pub const HIDDEN_FLAGS_MODIFIER: &str = "itemcodec:hidden-flags";

/// One attribute modifier entry on an item
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeModifier {
    pub attribute: Symbol,
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub operation: AttributeOperation,

    /// None applies the modifier in any slot
    pub slot: Option<EquipmentSlot>,
}

impl AttributeModifier {
    /// Creates a modifier with a freshly generated id and name
    pub fn new(attribute: Symbol, amount: f64, operation: AttributeOperation) -> Self {
        let id = Uuid::new_v4();
        AttributeModifier {
            attribute,
            id,
            name: id.to_string(),
            amount,
            operation,
            slot: None,
        }
    }

    /// The zero-effect modifier synthesized for items that only hide flags
    pub fn hidden_flags_marker(attribute: Symbol) -> Self {
        AttributeModifier {
            attribute,
            id: Uuid::nil(),
            name: HIDDEN_FLAGS_MODIFIER.to_string(),
            amount: 0.0,
            operation: AttributeOperation::AddNumber,
            slot: None,
        }
    }

    pub fn is_hidden_flags_marker(&self) -> bool {
        self.name == HIDDEN_FLAGS_MODIFIER && self.amount == 0.0
    }

    pub fn with_slot(mut self, slot: EquipmentSlot) -> Self {
        self.slot = Some(slot);
        self
    }
}

impl fmt::Display for AttributeModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.attribute,
            self.operation.name(),
            self.amount,
            self.slot.map(EquipmentSlot::name).unwrap_or("ANY")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::SymbolKind;

    #[test]
    fn test_flag_aliases() {
        assert_eq!(
            ItemFlag::from_name("hide_potion_effects"),
            Some(ItemFlag::HideAdditionalTooltip)
        );
        assert_eq!(ItemFlag::from_name("HIDE_DYE"), Some(ItemFlag::HideDye));
        assert_eq!(ItemFlag::from_name("ALL"), None);
    }

    #[test]
    fn test_flag_names_round_trip() {
        for flag in ItemFlag::ALL {
            assert_eq!(ItemFlag::from_name(flag.name()), Some(flag));
        }
    }

    #[test]
    fn test_slot_and_operation_aliases() {
        assert_eq!(EquipmentSlot::from_name("mainhand"), Some(EquipmentSlot::Hand));
        assert_eq!(EquipmentSlot::from_name("OFFHAND"), Some(EquipmentSlot::OffHand));
        assert_eq!(
            AttributeOperation::from_name("ADD_MULTIPLIED_TOTAL"),
            Some(AttributeOperation::MultiplyScalar1)
        );
        assert_eq!(AttributeOperation::from_name("nope"), None);
    }

    #[test]
    fn test_hidden_flags_marker() {
        let luck = Symbol::new(SymbolKind::Attribute, "LUCK");
        let marker = AttributeModifier::hidden_flags_marker(luck.clone());
        assert!(marker.is_hidden_flags_marker());
        assert!(!AttributeModifier::new(luck, 0.0, AttributeOperation::AddNumber)
            .is_hidden_flags_marker());
    }
}
