//! Expiry prediction.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use pantry_core::{DomainResult, ValueObject};

use crate::inputs::ShelfLifeInputs;
use crate::penalty::explain;

/// Tag of the rule set implemented here. Bump when the rules change so stored
/// predictions from different revisions can be told apart.
pub const MODEL_VERSION: &str = "rb-1.1";

pub const BASE_CONFIDENCE: f64 = 0.8;
pub const MIN_CONFIDENCE: f64 = 0.5;
pub const MAX_CONFIDENCE: f64 = 0.9;

/// Estimator output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_expiry: DateTime<Utc>,
    /// Always within `[MIN_CONFIDENCE, MAX_CONFIDENCE]`.
    pub confidence: f64,
    pub model_version: String,
}

impl ValueObject for Prediction {}

/// Predict expiry and confidence for one item.
///
/// Never fails. Inputs are assumed valid; see [`ShelfLifeInputs::validate`].
/// Expiry is `purchased_at` plus the effective days rounded half away from
/// zero, saturating at the latest representable instant.
pub fn estimate(inputs: &ShelfLifeInputs) -> Prediction {
    let breakdown = explain(inputs);

    let confidence = (BASE_CONFIDENCE - breakdown.total).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

    Prediction {
        predicted_expiry: add_whole_days(inputs.purchased_at, breakdown.effective_days),
        confidence,
        model_version: MODEL_VERSION.to_string(),
    }
}

/// Validate, then [`estimate`].
pub fn try_estimate(inputs: &ShelfLifeInputs) -> DomainResult<Prediction> {
    inputs.validate()?;
    Ok(estimate(inputs))
}

fn add_whole_days(start: DateTime<Utc>, days: f64) -> DateTime<Utc> {
    // `as` saturates; effective days are never negative.
    let whole = days.round() as i64;
    Duration::try_days(whole)
        .and_then(|d| start.checked_add_signed(d))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
