use std::fmt;

use super::material::Material;
use crate::meta::ItemMeta;

/// An instance of an item with quantity and optional extension data
///
/// The extension data's concrete type is only known at runtime; the codec
/// dispatches on its meta class to find out which capabilities it has.
pub struct ItemStack {
    /// Resolved identity
    material: Material,

    /// How many of this item (at least 1)
    amount: u32,

    meta: Option<Box<dyn ItemMeta>>,
}

impl ItemStack {
    /// Creates a stack of one with no extension data
    pub fn new(material: Material) -> Self {
        ItemStack {
            material,
            amount: 1,
            meta: None,
        }
    }

    /// Creates a stack of one carrying the material's default meta
    pub fn with_default_meta(material: Material) -> Self {
        let meta = material.new_meta();
        ItemStack {
            material,
            amount: 1,
            meta: Some(meta),
        }
    }

    /// Sets the amount, clamped to at least 1
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.set_amount(amount);
        self
    }

    pub fn with_meta(mut self, meta: Box<dyn ItemMeta>) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn set_amount(&mut self, amount: u32) {
        self.amount = amount.max(1);
    }

    pub fn meta(&self) -> Option<&dyn ItemMeta> {
        self.meta.as_deref()
    }

    pub fn meta_mut(&mut self) -> Option<&mut dyn ItemMeta> {
        match &mut self.meta {
            Some(meta) => Some(meta.as_mut()),
            None => None,
        }
    }

    /// Returns the extension data, creating the material's default if missing
    pub fn meta_or_default(&mut self) -> &mut dyn ItemMeta {
        let material = &self.material;
        self.meta.get_or_insert_with(|| material.new_meta()).as_mut()
    }

    /// Downcasts the extension data to a concrete meta type
    pub fn meta_as<M: ItemMeta>(&self) -> Option<&M> {
        self.meta()?.as_any().downcast_ref::<M>()
    }

    pub fn meta_as_mut<M: ItemMeta>(&mut self) -> Option<&mut M> {
        self.meta_mut()?.as_any_mut().downcast_mut::<M>()
    }
}

impl Clone for ItemStack {
    fn clone(&self) -> Self {
        ItemStack {
            material: self.material.clone(),
            amount: self.amount,
            meta: self.meta.as_ref().map(|meta| meta.clone_box()),
        }
    }
}

impl PartialEq for ItemStack {
    fn eq(&self, other: &Self) -> bool {
        let meta_eq = match (self.meta(), other.meta()) {
            (None, None) => true,
            (Some(a), Some(b)) => a.eq_dyn(b),
            _ => false,
        };
        self.material == other.material && self.amount == other.amount && meta_eq
    }
}

impl fmt::Debug for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemStack")
            .field("material", &self.material.name())
            .field("amount", &self.amount)
            .field("meta", &self.meta)
            .finish()
    }
}
