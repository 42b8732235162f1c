use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pantry_core::{DomainResult, Entity, InventoryItemId};
use pantry_inventory::{
    ExpiryStatus, InsightsConfig, InsightsSummary, PantryItem, Urgency, days_until_expiry,
    needing_attention,
};
use pantry_shelf_life::{MODEL_VERSION, PenaltyBreakdown, Prediction, explain};

use crate::snapshot::Snapshot;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemReport {
    pub item_id: InventoryItemId,
    pub product: String,
    pub category: String,
    pub storage_method: String,
    pub prediction: Prediction,
    pub breakdown: PenaltyBreakdown,
    pub days_until_expiry: i64,
    pub urgency: Urgency,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub model_version: String,
    pub items: Vec<ItemReport>,
    /// At-risk and soon-to-expire items, soonest first.
    pub needing_attention: Vec<InventoryItemId>,
    pub insights: InsightsSummary,
}

/// Estimate every snapshot item at `now` and summarise the pantry.
///
/// The first item that fails validation aborts the report.
pub fn build_report(snapshot: Snapshot, now: DateTime<Utc>, config: &InsightsConfig) -> DomainResult<Report> {
    let conditions = snapshot.conditions;
    conditions.validate()?;

    let mut items = Vec::with_capacity(snapshot.items.len());
    for entry in snapshot.items {
        let mut item = PantryItem::create(entry.into_command(now))?;
        item.refresh_prediction(&conditions, now)?;
        items.push(item);
    }

    let mut rows = Vec::with_capacity(items.len());
    for item in &items {
        let Some(record) = item.latest_prediction() else {
            continue;
        };
        let days = days_until_expiry(record.prediction.predicted_expiry, now);
        rows.push(ItemReport {
            item_id: *item.id(),
            product: item.product().name.clone(),
            category: item.product().category.clone(),
            storage_method: item.storage_method().name.clone(),
            prediction: record.prediction.clone(),
            breakdown: explain(&item.estimator_inputs(&conditions)),
            days_until_expiry: days,
            urgency: Urgency::classify(Some(days)),
            status: ExpiryStatus::from_days(days).to_string(),
        });
    }

    let attention: Vec<InventoryItemId> = needing_attention(&items, now)
        .into_iter()
        .map(|item| *item.id())
        .collect();

    let insights = InsightsSummary::compute(&items, now, config);

    tracing::info!(
        items = items.len(),
        needing_attention = attention.len(),
        expired = insights.expired,
        expiring_soon = insights.expiring_soon,
        "pantry report built"
    );

    Ok(Report {
        generated_at: now,
        model_version: MODEL_VERSION.to_string(),
        items: rows,
        needing_attention: attention,
        insights,
    })
}
