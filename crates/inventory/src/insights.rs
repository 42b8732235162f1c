//! Aggregate pantry statistics.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use pantry_core::{DomainError, DomainResult};

use crate::item::PantryItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightsConfig {
    /// Items expiring within this many days of `now` count as "expiring soon".
    pub expiring_window_days: i64,
    /// How many categories to report.
    pub top_categories: usize,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            expiring_window_days: 3,
            top_categories: 5,
        }
    }
}

impl InsightsConfig {
    pub fn validate(&self) -> DomainResult<()> {
        if self.expiring_window_days < 0 {
            return Err(DomainError::validation("expiring_window_days cannot be negative"));
        }
        if self.top_categories == 0 {
            return Err(DomainError::validation("top_categories must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
    /// Share of all items, 0–100.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsSummary {
    pub total_items: usize,
    pub expired: usize,
    pub expiring_soon: usize,
    /// Includes items that have no prediction yet.
    pub fresh: usize,
    /// Mean confidence of the latest predictions; `None` if nothing is predicted.
    pub average_confidence: Option<f64>,
    pub top_categories: Vec<CategoryCount>,
}

impl InsightsSummary {
    pub fn compute(items: &[PantryItem], now: DateTime<Utc>, config: &InsightsConfig) -> Self {
        let window_end = Duration::try_days(config.expiring_window_days)
            .and_then(|d| now.checked_add_signed(d))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut expired = 0;
        let mut expiring_soon = 0;
        let mut fresh = 0;
        let mut confidence_sum = 0.0;
        let mut predicted = 0usize;

        for item in items {
            let Some(record) = item.latest_prediction() else {
                fresh += 1;
                continue;
            };

            predicted += 1;
            confidence_sum += record.prediction.confidence;

            let expiry = record.prediction.predicted_expiry;
            if expiry < now {
                expired += 1;
            } else if expiry <= window_end {
                expiring_soon += 1;
            } else {
                fresh += 1;
            }
        }

        Self {
            total_items: items.len(),
            expired,
            expiring_soon,
            fresh,
            average_confidence: (predicted > 0).then(|| confidence_sum / predicted as f64),
            top_categories: top_categories(items, config.top_categories),
        }
    }
}

fn top_categories(items: &[PantryItem], limit: usize) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for item in items {
        *counts.entry(item.product().category.as_str()).or_default() += 1;
    }

    // BTreeMap yields names in order; the stable sort keeps that for equal counts.
    let mut sorted: Vec<(&str, usize)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    let total = items.len() as f64;
    sorted
        .into_iter()
        .take(limit)
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
            percentage: count as f64 / total * 100.0,
        })
        .collect()
}
