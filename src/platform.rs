//! Platform feature probing
//!
//! Field handling that depends on what the running platform can store goes
//! through one yes/no question: does it support this feature? Version
//! numbers never reach the codec.

use std::collections::HashSet;

/// Optional data the running platform may or may not be able to store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    CustomModelData,
    Unbreakable,
    AttributeModifiers,
    /// Hide flags only show when the item has at least one modifier
    HiddenFlagModifiers,
    ArmorTrims,
    Lodestones,
    /// Spawn eggs store their creature instead of encoding it in the material
    LegacySpawnEggs,
    MapViews,
    MapColors,
    PotionColors,
    SuspiciousStew,
    AxolotlBuckets,
    Instruments,
}

impl Feature {
    pub const ALL: [Feature; 13] = [
        Feature::CustomModelData,
        Feature::Unbreakable,
        Feature::AttributeModifiers,
        Feature::HiddenFlagModifiers,
        Feature::ArmorTrims,
        Feature::Lodestones,
        Feature::LegacySpawnEggs,
        Feature::MapViews,
        Feature::MapColors,
        Feature::PotionColors,
        Feature::SuspiciousStew,
        Feature::AxolotlBuckets,
        Feature::Instruments,
    ];
}

/// Answers capability questions about the running platform
pub trait PlatformFeatures: Send + Sync {
    fn supports(&self, feature: Feature) -> bool;
}

/// A fixed set of supported features
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet {
    features: HashSet<Feature>,
}

impl FeatureSet {
    /// A platform with no optional features at all
    pub fn none() -> Self {
        Self::default()
    }

    /// Everything a current platform offers
    pub fn modern() -> Self {
        Feature::ALL
            .into_iter()
            .filter(|f| *f != Feature::LegacySpawnEggs)
            .collect()
    }

    /// An old platform: spawn eggs carry their creature, nothing newer exists
    pub fn legacy() -> Self {
        [
            Feature::Unbreakable,
            Feature::AttributeModifiers,
            Feature::LegacySpawnEggs,
            Feature::MapColors,
            Feature::PotionColors,
        ]
        .into_iter()
        .collect()
    }

    pub fn with(mut self, feature: Feature) -> Self {
        self.features.insert(feature);
        self
    }

    pub fn without(mut self, feature: Feature) -> Self {
        self.features.remove(&feature);
        self
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        FeatureSet {
            features: iter.into_iter().collect(),
        }
    }
}

impl PlatformFeatures for FeatureSet {
    fn supports(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modern_and_legacy_differ_on_spawn_eggs() {
        assert!(!FeatureSet::modern().supports(Feature::LegacySpawnEggs));
        assert!(FeatureSet::legacy().supports(Feature::LegacySpawnEggs));
        assert!(FeatureSet::modern().supports(Feature::ArmorTrims));
        assert!(!FeatureSet::legacy().supports(Feature::ArmorTrims));
    }

    #[test]
    fn test_with_and_without() {
        let set = FeatureSet::none().with(Feature::Lodestones);
        assert!(set.supports(Feature::Lodestones));
        assert!(!set.without(Feature::Lodestones).supports(Feature::Lodestones));
    }
}
