use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pantry_core::ValueObject;

use crate::storage::StorageCondition;

/// Per-product shelf-life reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfLifeProfile {
    /// Shelf life used when no storage-specific override applies.
    pub base_shelf_life_days: f64,
    #[serde(default)]
    pub room_temp_shelf_life_days: Option<f64>,
    #[serde(default)]
    pub fridge_shelf_life_days: Option<f64>,
    #[serde(default)]
    pub freezer_shelf_life_days: Option<f64>,
    /// Acceptable ambient temperature band (°C).
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    /// Ideal relative humidity (0–100).
    pub humidity_preferred: f64,
}

impl ShelfLifeProfile {
    /// The override configured for `condition`, if any (zero included).
    pub fn override_for(&self, condition: StorageCondition) -> Option<f64> {
        match condition {
            StorageCondition::Room => self.room_temp_shelf_life_days,
            StorageCondition::Fridge => self.fridge_shelf_life_days,
            StorageCondition::Freezer => self.freezer_shelf_life_days,
        }
    }
}

impl ValueObject for ShelfLifeProfile {}

/// Observed ambient conditions where the item is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientConditions {
    pub temp_c: f64,
    pub humidity: f64,
}

impl ValueObject for AmbientConditions {}

/// Everything the estimator needs for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfLifeInputs {
    pub profile: ShelfLifeProfile,
    /// Free-text storage label, e.g. "Fridge (4°C)".
    pub storage_method_name: String,
    pub conditions: AmbientConditions,
    pub purchased_at: DateTime<Utc>,
    #[serde(default)]
    pub opened_at: Option<DateTime<Utc>>,
}

impl ValueObject for ShelfLifeInputs {}
