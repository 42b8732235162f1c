//! Storage-method keyword matching and base-days selection.

use serde::{Deserialize, Serialize};

use crate::inputs::ShelfLifeProfile;

/// Storage condition recognised from a free-text storage method name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageCondition {
    Room,
    Fridge,
    Freezer,
}

impl StorageCondition {
    /// Match order. A name containing several keywords resolves to the first.
    pub const ALL: [StorageCondition; 3] = [Self::Room, Self::Fridge, Self::Freezer];

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Room => "room",
            Self::Fridge => "fridge",
            Self::Freezer => "freezer",
        }
    }

    /// First condition whose keyword occurs in `name`, case-insensitively.
    pub fn from_method_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::ALL.into_iter().find(|c| lower.contains(c.keyword()))
    }
}

/// Pick the shelf-life days that apply to `storage_method_name`.
///
/// Conditions are tried in [`StorageCondition::ALL`] order. A condition only
/// wins when its keyword matches *and* its override is set to a non-zero
/// value; otherwise the next condition is tried. Falls back to
/// `base_shelf_life_days`.
pub fn select_base_days(profile: &ShelfLifeProfile, storage_method_name: &str) -> f64 {
    let lower = storage_method_name.to_lowercase();

    StorageCondition::ALL
        .into_iter()
        .filter(|c| lower.contains(c.keyword()))
        .find_map(|c| profile.override_for(c).filter(|days| is_set(*days)))
        .unwrap_or(profile.base_shelf_life_days)
}

// Zero and NaN overrides count as unset.
fn is_set(days: f64) -> bool {
    days != 0.0 && !days.is_nan()
}
