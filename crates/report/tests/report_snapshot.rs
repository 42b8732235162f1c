use chrono::{DateTime, Duration, TimeZone, Utc};

use pantry_core::InventoryItemId;
use pantry_inventory::{InsightsConfig, Urgency};
use pantry_report::{Report, Snapshot, build_report};

const FIXTURE: &str = include_str!("fixtures/pantry.json");

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 10, 8, 0, 0).unwrap()
}

fn item_id(n: u8) -> InventoryItemId {
    format!("01960000-0000-7000-8000-00000000000{n}").parse().unwrap()
}

fn report() -> Report {
    let snapshot: Snapshot = serde_json::from_str(FIXTURE).unwrap();
    assert_eq!(snapshot.generated_at, Some(now()));
    build_report(snapshot, now(), &InsightsConfig::default()).unwrap()
}

#[test]
fn every_item_is_estimated() {
    let r = report();
    assert_eq!(r.model_version, "rb-1.1");
    assert_eq!(r.items.len(), 4);

    let by_name = |name: &str| r.items.iter().find(|i| i.product == name).unwrap();

    let bananas = by_name("Bananas");
    assert_eq!(bananas.prediction.predicted_expiry, now() - Duration::days(4));
    assert_eq!(bananas.days_until_expiry, -4);
    assert_eq!(bananas.urgency, Urgency::AtRisk);
    assert_eq!(bananas.status, "Expired");

    // Fridge override 30 days, opened: round(30 * 0.75) = 23.
    let cheddar = by_name("Cheddar");
    assert_eq!(cheddar.breakdown.base_days, 30.0);
    assert_eq!(cheddar.breakdown.opened, 0.25);
    assert_eq!(cheddar.days_until_expiry, 22);
    assert!((cheddar.prediction.confidence - 0.55).abs() < 1e-12);
    assert_eq!(cheddar.urgency, Urgency::Ok);

    // No room override: base 4 days, humidity 20 points off: round(4 * 0.94) = 4.
    let bread = by_name("Sourdough");
    assert!((bread.breakdown.humidity - 0.06).abs() < 1e-12);
    assert_eq!(bread.days_until_expiry, 2);
    assert_eq!(bread.urgency, Urgency::Soon);
    assert_eq!(bread.status, "2 days left");

    let peas = by_name("Frozen peas");
    assert_eq!(peas.breakdown.base_days, 240.0);
    assert_eq!(peas.days_until_expiry, 231);
}

#[test]
fn attention_list_and_insights() {
    let r = report();
    assert_eq!(r.needing_attention, vec![item_id(1), item_id(3)]);

    let s = &r.insights;
    assert_eq!(s.total_items, 4);
    assert_eq!(s.expired, 1);
    assert_eq!(s.expiring_soon, 1);
    assert_eq!(s.fresh, 2);
    assert!((s.average_confidence.unwrap() - 0.7225).abs() < 1e-12);

    let categories: Vec<_> = s.top_categories.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(categories, ["Produce", "Bakery", "Dairy"]);
}

#[test]
fn invalid_conditions_abort_the_report() {
    let mut snapshot: Snapshot = serde_json::from_str(FIXTURE).unwrap();
    snapshot.conditions.humidity = 140.0;
    let err = build_report(snapshot, now(), &InsightsConfig::default()).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn invalid_item_aborts_the_report() {
    let mut snapshot: Snapshot = serde_json::from_str(FIXTURE).unwrap();
    snapshot.items[2].quantity = -1.0;
    let err = build_report(snapshot, now(), &InsightsConfig::default()).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn report_serializes_to_json() {
    let json = serde_json::to_value(report()).unwrap();
    assert_eq!(json["items"][0]["urgency"], "at_risk");
    assert_eq!(json["insights"]["total_items"], 4);
}
