//! User feedback on how long an item actually lasted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pantry_core::{DomainError, DomainResult, FeedbackId, InventoryItemId};
use pantry_shelf_life::Prediction;

use crate::item::MAX_NOTES_LEN;

const FRESHNESS_SCORE_RANGE: core::ops::RangeInclusive<u8> = 1..=5;

/// Command: SubmitFeedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitFeedback {
    pub feedback_id: FeedbackId,
    pub inventory_item_id: InventoryItemId,
    pub user_reported_expiry: DateTime<Utc>,
    #[serde(default)]
    pub freshness_score: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    id: FeedbackId,
    inventory_item_id: InventoryItemId,
    user_reported_expiry: DateTime<Utc>,
    freshness_score: Option<u8>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn submit(cmd: SubmitFeedback) -> DomainResult<Self> {
        if let Some(score) = cmd.freshness_score {
            if !FRESHNESS_SCORE_RANGE.contains(&score) {
                return Err(DomainError::validation(
                    "freshness_score must be between 1 and 5",
                ));
            }
        }
        if let Some(notes) = &cmd.notes {
            if notes.chars().count() > MAX_NOTES_LEN {
                return Err(DomainError::validation(format!(
                    "notes cannot exceed {MAX_NOTES_LEN} characters"
                )));
            }
        }

        Ok(Self {
            id: cmd.feedback_id,
            inventory_item_id: cmd.inventory_item_id,
            user_reported_expiry: cmd.user_reported_expiry,
            freshness_score: cmd.freshness_score,
            notes: cmd.notes,
            created_at: cmd.occurred_at,
        })
    }

    /// Reported minus predicted expiry, in whole days (truncated).
    ///
    /// Positive when the item outlived the prediction.
    pub fn expiry_error_days(&self, prediction: &Prediction) -> i64 {
        (self.user_reported_expiry - prediction.predicted_expiry).num_days()
    }

    pub fn id(&self) -> FeedbackId {
        self.id
    }

    pub fn inventory_item_id(&self) -> InventoryItemId {
        self.inventory_item_id
    }

    pub fn user_reported_expiry(&self) -> DateTime<Utc> {
        self.user_reported_expiry
    }

    pub fn freshness_score(&self) -> Option<u8> {
        self.freshness_score
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
