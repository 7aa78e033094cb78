use crate::error::InventoryError;
use crate::item::ItemStack;

/// Fixed-capacity container snapshot with slots
///
/// This is what a block item captures from its container: each slot holds
/// at most one stack, and the slot index is what the codec keys contents by.
/// Stacking and slot packing are the host's business, not this type's.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Inventory {
    /// Slots that can hold item stacks (None = empty)
    slots: Vec<Option<ItemStack>>,
}

impl Inventory {
    /// Creates a new empty inventory with the specified capacity
    pub fn new(capacity: usize) -> Self {
        Inventory {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the inventory has no items
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// Returns the stack in a slot, None if empty or out of range
    pub fn get(&self, slot_index: usize) -> Option<&ItemStack> {
        self.slots.get(slot_index)?.as_ref()
    }

    /// Places a stack in a slot, replacing its previous content
    ///
    /// Returns the previous content of the slot.
    pub fn set(
        &mut self,
        slot_index: usize,
        item_stack: Option<ItemStack>,
    ) -> Result<Option<ItemStack>, InventoryError> {
        let capacity = self.capacity();
        let slot = self
            .slots
            .get_mut(slot_index)
            .ok_or(InventoryError::InvalidSlot {
                slot: slot_index,
                capacity,
            })?;

        Ok(std::mem::replace(slot, item_stack))
    }

    /// Returns an iterator over occupied slots and their stacks
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &ItemStack)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|stack| (index, stack)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Material;
    use crate::meta::classes;

    fn stone() -> ItemStack {
        ItemStack::new(Material::new("STONE", &classes::META_ITEM))
    }

    #[test]
    fn test_set_and_get() {
        let mut inventory = Inventory::new(3);
        assert!(inventory.is_empty());

        assert_eq!(inventory.set(2, Some(stone())), Ok(None));
        assert_eq!(inventory.get(2), Some(&stone()));
        assert_eq!(inventory.get(0), None);
        assert!(!inventory.is_empty());

        assert_eq!(inventory.set(2, None), Ok(Some(stone())));
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_invalid_slot() {
        let mut inventory = Inventory::new(3);
        assert_eq!(
            inventory.set(3, Some(stone())),
            Err(InventoryError::InvalidSlot {
                slot: 3,
                capacity: 3
            })
        );
        assert_eq!(inventory.get(10), None);
    }

    #[test]
    fn test_occupied_skips_empty_slots() {
        let mut inventory = Inventory::new(6);
        for slot in [0, 2, 5] {
            inventory.set(slot, Some(stone())).unwrap();
        }

        let slots: Vec<usize> = inventory.occupied().map(|(slot, _)| slot).collect();
        assert_eq!(slots, vec![0, 2, 5]);
    }
}
