//! Snapshot input format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pantry_core::{InventoryItemId, UserId};
use pantry_inventory::{CreateItem, ProductProfile, StorageMethod};
use pantry_shelf_life::AmbientConditions;

/// A pantry as exported by the surrounding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Report time. Defaults to the current time when absent.
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
    pub conditions: AmbientConditions,
    #[serde(default)]
    pub items: Vec<SnapshotItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotItem {
    #[serde(default)]
    pub id: InventoryItemId,
    #[serde(default)]
    pub owner_id: UserId,
    pub product: ProductProfile,
    pub quantity: f64,
    pub unit: String,
    pub storage_method: StorageMethod,
    pub purchased_at: DateTime<Utc>,
    #[serde(default)]
    pub opened_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl SnapshotItem {
    pub fn into_command(self, occurred_at: DateTime<Utc>) -> CreateItem {
        CreateItem {
            item_id: self.id,
            owner_id: self.owner_id,
            product: self.product,
            quantity: self.quantity,
            unit: self.unit,
            storage_method: self.storage_method,
            purchased_at: self.purchased_at,
            opened_at: self.opened_at,
            notes: self.notes,
            occurred_at,
        }
    }
}
