use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pantry_core::{
    DomainError, DomainResult, Entity, InventoryItemId, ProductId, StorageMethodId, UserId,
};
use pantry_shelf_life::{AmbientConditions, Prediction, ShelfLifeInputs, ShelfLifeProfile, try_estimate};

/// Upper bound on free-text notes.
pub const MAX_NOTES_LEN: usize = 500;

/// Catalogue product the item is an instance of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductProfile {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub shelf_life: ShelfLifeProfile,
}

/// Where the item is kept (reference data, e.g. "Fridge").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageMethod {
    pub id: StorageMethodId,
    pub name: String,
}

/// One stored prediction, stamped with when it was computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub prediction: Prediction,
    pub computed_at: DateTime<Utc>,
}

/// Entity: an item in a user's pantry.
#[derive(Debug, Clone, PartialEq)]
pub struct PantryItem {
    id: InventoryItemId,
    owner_id: UserId,
    product: ProductProfile,
    quantity: f64,
    unit: String,
    storage_method: StorageMethod,
    purchased_at: DateTime<Utc>,
    opened_at: Option<DateTime<Utc>>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    predictions: Vec<PredictionRecord>,
}

/// Command: CreateItem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateItem {
    pub item_id: InventoryItemId,
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
    pub occurred_at: DateTime<Utc>,
}

/// Command: UpdateItem. `None` leaves a field untouched.
///
/// `opened_at: Some(None)` clears the opened date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateItem {
    pub quantity: Option<f64>,
    pub storage_method: Option<StorageMethod>,
    pub opened_at: Option<Option<DateTime<Utc>>>,
    pub notes: Option<String>,
}

fn validate_quantity(quantity: f64) -> DomainResult<()> {
    if !(quantity.is_finite() && quantity > 0.0) {
        return Err(DomainError::validation("quantity must be a positive number"));
    }
    Ok(())
}

fn validate_notes(notes: Option<&str>) -> DomainResult<()> {
    if let Some(notes) = notes {
        if notes.chars().count() > MAX_NOTES_LEN {
            return Err(DomainError::validation(format!(
                "notes cannot exceed {MAX_NOTES_LEN} characters"
            )));
        }
    }
    Ok(())
}

fn validate_storage_method(method: &StorageMethod) -> DomainResult<()> {
    if method.name.trim().is_empty() {
        return Err(DomainError::validation("storage method name cannot be empty"));
    }
    Ok(())
}

impl PantryItem {
    pub fn create(cmd: CreateItem) -> DomainResult<Self> {
        if cmd.product.name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        validate_quantity(cmd.quantity)?;
        if cmd.unit.trim().is_empty() {
            return Err(DomainError::validation("unit cannot be empty"));
        }
        validate_storage_method(&cmd.storage_method)?;
        validate_notes(cmd.notes.as_deref())?;

        Ok(Self {
            id: cmd.item_id,
            owner_id: cmd.owner_id,
            product: cmd.product,
            quantity: cmd.quantity,
            unit: cmd.unit,
            storage_method: cmd.storage_method,
            purchased_at: cmd.purchased_at,
            opened_at: cmd.opened_at,
            notes: cmd.notes,
            created_at: cmd.occurred_at,
            predictions: Vec::new(),
        })
    }

    /// Apply a partial update. Validates everything before changing anything.
    ///
    /// Returns `true` when the change invalidates the current prediction
    /// (storage method or opened state changed) and the caller should refresh.
    pub fn update(&mut self, upd: UpdateItem) -> DomainResult<bool> {
        if let Some(quantity) = upd.quantity {
            validate_quantity(quantity)?;
        }
        if let Some(method) = &upd.storage_method {
            validate_storage_method(method)?;
        }
        validate_notes(upd.notes.as_deref())?;

        let mut stale = false;

        if let Some(quantity) = upd.quantity {
            self.quantity = quantity;
        }
        if let Some(method) = upd.storage_method {
            stale |= method != self.storage_method;
            self.storage_method = method;
        }
        if let Some(opened_at) = upd.opened_at {
            stale |= opened_at != self.opened_at;
            self.opened_at = opened_at;
        }
        if let Some(notes) = upd.notes {
            self.notes = Some(notes);
        }

        Ok(stale)
    }

    /// Assemble estimator inputs from this item and the observed conditions.
    pub fn estimator_inputs(&self, conditions: &AmbientConditions) -> ShelfLifeInputs {
        ShelfLifeInputs {
            profile: self.product.shelf_life.clone(),
            storage_method_name: self.storage_method.name.clone(),
            conditions: *conditions,
            purchased_at: self.purchased_at,
            opened_at: self.opened_at,
        }
    }

    /// Recompute the prediction under `conditions` and append it to the history.
    pub fn refresh_prediction(
        &mut self,
        conditions: &AmbientConditions,
        computed_at: DateTime<Utc>,
    ) -> DomainResult<&PredictionRecord> {
        let prediction = try_estimate(&self.estimator_inputs(conditions))?;

        tracing::debug!(
            item_id = %self.id,
            product = %self.product.name,
            storage = %self.storage_method.name,
            predicted_expiry = %prediction.predicted_expiry,
            confidence = prediction.confidence,
            model_version = %prediction.model_version,
            "shelf-life prediction refreshed"
        );

        Ok(self.record_prediction(PredictionRecord {
            prediction,
            computed_at,
        }))
    }

    /// Append a prediction computed elsewhere (e.g. loaded from storage).
    pub fn record_prediction(&mut self, record: PredictionRecord) -> &PredictionRecord {
        let idx = self.predictions.len();
        self.predictions.push(record);
        &self.predictions[idx]
    }

    /// Most recently computed prediction. Ties go to the one recorded last.
    pub fn latest_prediction(&self) -> Option<&PredictionRecord> {
        self.predictions.iter().max_by_key(|r| r.computed_at)
    }

    pub fn predictions(&self) -> &[PredictionRecord] {
        &self.predictions
    }

    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    pub fn product(&self) -> &ProductProfile {
        &self.product
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn storage_method(&self) -> &StorageMethod {
        &self.storage_method
    }

    pub fn purchased_at(&self) -> DateTime<Utc> {
        self.purchased_at
    }

    pub fn opened_at(&self) -> Option<DateTime<Utc>> {
        self.opened_at
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for PantryItem {
    type Id = InventoryItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
