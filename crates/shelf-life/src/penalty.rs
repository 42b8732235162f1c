//! Penalty model.
//!
//! ```text
//! penalty   = temperature + humidity + opened        (no upper clamp)
//! effective = max(0, base_days * (1 - penalty))
//! ```

use serde::{Deserialize, Serialize};

use crate::inputs::ShelfLifeInputs;
use crate::storage::select_base_days;

/// Penalty per °C outside the product's temperature band.
pub const TEMPERATURE_PENALTY_PER_DEGREE: f64 = 0.03;
pub const TEMPERATURE_PENALTY_CAP: f64 = 0.5;

/// Penalty per percentage point away from the preferred humidity.
pub const HUMIDITY_PENALTY_PER_POINT: f64 = 0.003;
pub const HUMIDITY_PENALTY_CAP: f64 = 0.2;

/// Flat penalty once the package has been opened.
pub const OPENED_PENALTY: f64 = 0.25;

/// Temperature component. Zero inside `[temp_min_c, temp_max_c]`.
pub fn temperature_penalty(temp_c: f64, temp_min_c: f64, temp_max_c: f64) -> f64 {
    if temp_c < temp_min_c {
        f64::min(TEMPERATURE_PENALTY_CAP, TEMPERATURE_PENALTY_PER_DEGREE * (temp_min_c - temp_c))
    } else if temp_c > temp_max_c {
        f64::min(TEMPERATURE_PENALTY_CAP, TEMPERATURE_PENALTY_PER_DEGREE * (temp_c - temp_max_c))
    } else {
        0.0
    }
}

/// Humidity component, symmetric in the direction of the deviation.
pub fn humidity_penalty(humidity: f64, humidity_preferred: f64) -> f64 {
    f64::min(
        HUMIDITY_PENALTY_CAP,
        HUMIDITY_PENALTY_PER_POINT * (humidity - humidity_preferred).abs(),
    )
}

pub fn opened_penalty(opened: bool) -> f64 {
    if opened { OPENED_PENALTY } else { 0.0 }
}

/// Shelf-life days left after applying `penalty`, floored at zero.
pub fn effective_days(base_days: f64, penalty: f64) -> f64 {
    f64::max(0.0, base_days * (1.0 - penalty))
}

/// Every intermediate value of one estimation, for explaining a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenaltyBreakdown {
    /// Days selected from the profile for the storage method.
    pub base_days: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub opened: f64,
    /// Plain sum of the three components.
    pub total: f64,
    pub effective_days: f64,
}

/// Run base-days selection and the penalty model without producing a date.
pub fn explain(inputs: &ShelfLifeInputs) -> PenaltyBreakdown {
    let profile = &inputs.profile;
    let base_days = select_base_days(profile, &inputs.storage_method_name);

    let temperature =
        temperature_penalty(inputs.conditions.temp_c, profile.temp_min_c, profile.temp_max_c);
    let humidity = humidity_penalty(inputs.conditions.humidity, profile.humidity_preferred);
    let opened = opened_penalty(inputs.opened_at.is_some());

    let total = temperature + humidity + opened;

    PenaltyBreakdown {
        base_days,
        temperature,
        humidity,
        opened,
        total,
        effective_days: effective_days(base_days, total),
    }
}
