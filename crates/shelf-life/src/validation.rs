//! Input validation.
//!
//! The estimator is only defined for finite inputs with a sane temperature
//! band. Callers run these checks before estimating so bad reference data
//! surfaces as [`DomainError::Validation`] instead of a nonsense date.

use pantry_core::{DomainError, DomainResult};

use crate::inputs::{AmbientConditions, ShelfLifeInputs, ShelfLifeProfile};

const HUMIDITY_RANGE: core::ops::RangeInclusive<f64> = 0.0..=100.0;

fn finite(field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() {
        return Err(DomainError::validation(format!("{field} must be a finite number")));
    }
    Ok(())
}

fn humidity(field: &str, value: f64) -> DomainResult<()> {
    finite(field, value)?;
    if !HUMIDITY_RANGE.contains(&value) {
        return Err(DomainError::validation(format!(
            "{field} must be within 0..=100 (got {value})"
        )));
    }
    Ok(())
}

impl ShelfLifeProfile {
    pub fn validate(&self) -> DomainResult<()> {
        finite("base_shelf_life_days", self.base_shelf_life_days)?;
        if self.base_shelf_life_days <= 0.0 {
            return Err(DomainError::validation("base_shelf_life_days must be positive"));
        }

        for (field, value) in [
            ("room_temp_shelf_life_days", self.room_temp_shelf_life_days),
            ("fridge_shelf_life_days", self.fridge_shelf_life_days),
            ("freezer_shelf_life_days", self.freezer_shelf_life_days),
        ] {
            // Zero is allowed: it means "no override".
            if let Some(days) = value {
                finite(field, days)?;
                if days < 0.0 {
                    return Err(DomainError::validation(format!("{field} cannot be negative")));
                }
            }
        }

        finite("temp_min_c", self.temp_min_c)?;
        finite("temp_max_c", self.temp_max_c)?;
        if self.temp_min_c >= self.temp_max_c {
            return Err(DomainError::validation(
                "temp_min_c must be lower than temp_max_c",
            ));
        }

        humidity("humidity_preferred", self.humidity_preferred)
    }
}

impl AmbientConditions {
    pub fn validate(&self) -> DomainResult<()> {
        finite("temp_c", self.temp_c)?;
        humidity("humidity", self.humidity)
    }
}

impl ShelfLifeInputs {
    /// Check everything the estimator assumes about its inputs.
    ///
    /// `purchased_at` lying in the future is not checked; there is no clock here.
    pub fn validate(&self) -> DomainResult<()> {
        self.profile.validate()?;
        self.conditions.validate()
    }
}
