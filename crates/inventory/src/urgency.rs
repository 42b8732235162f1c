//! Urgency classification for display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::item::PantryItem;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Items this many days or fewer from expiry are flagged as [`Urgency::Soon`].
pub const SOON_WITHIN_DAYS: i64 = 2;

/// Whole days from `now` until `expiry`, rounded up.
///
/// Anything due later today counts as 1; anything already past is `<= 0`.
pub fn days_until_expiry(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (expiry - now).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    AtRisk,
    Soon,
    Ok,
}

impl Urgency {
    /// Classify by days until expiry. Items without a prediction are `Ok`.
    pub fn classify(days_until: Option<i64>) -> Self {
        match days_until {
            None => Self::Ok,
            Some(d) if d <= 0 => Self::AtRisk,
            Some(d) if d <= SOON_WITHIN_DAYS => Self::Soon,
            Some(_) => Self::Ok,
        }
    }

    pub fn of(item: &PantryItem, now: DateTime<Utc>) -> Self {
        Self::classify(
            item.latest_prediction()
                .map(|r| days_until_expiry(r.prediction.predicted_expiry, now)),
        )
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::AtRisk => "red",
            Self::Soon => "orange",
            Self::Ok => "green",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AtRisk => "At Risk",
            Self::Soon => "Soon",
            Self::Ok => "OK",
        }
    }
}

impl core::fmt::Display for Urgency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Human-readable countdown for an item with a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "days", rename_all = "snake_case")]
pub enum ExpiryStatus {
    Expired,
    ExpiresToday,
    DaysLeft(i64),
}

impl ExpiryStatus {
    pub fn from_days(days_until: i64) -> Self {
        match days_until {
            d if d < 0 => Self::Expired,
            0 => Self::ExpiresToday,
            d => Self::DaysLeft(d),
        }
    }
}

impl core::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Expired => f.write_str("Expired"),
            Self::ExpiresToday => f.write_str("Expires today"),
            Self::DaysLeft(d) => write!(f, "{d} days left"),
        }
    }
}

/// Items that are at risk or due soon, soonest expiry first.
pub fn needing_attention(items: &[PantryItem], now: DateTime<Utc>) -> Vec<&PantryItem> {
    let mut flagged: Vec<(&PantryItem, DateTime<Utc>)> = items
        .iter()
        .filter(|item| Urgency::of(item, now) != Urgency::Ok)
        .filter_map(|item| {
            item.latest_prediction()
                .map(|r| (item, r.prediction.predicted_expiry))
        })
        .collect();

    flagged.sort_by_key(|(_, expiry)| *expiry);
    flagged.into_iter().map(|(item, _)| item).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::tests::{create_cmd, in_band, test_time};
    use chrono::Duration;

    fn purchased_on(at: DateTime<Utc>) -> crate::item::CreateItem {
        let mut cmd = create_cmd("Dairy");
        cmd.purchased_at = at;
        cmd
    }

    #[test]
    fn days_until_expiry_rounds_up() {
        let now = test_time();
        assert_eq!(days_until_expiry(now + Duration::hours(1), now), 1);
        assert_eq!(days_until_expiry(now + Duration::days(3), now), 3);
        assert_eq!(days_until_expiry(now, now), 0);
        assert_eq!(days_until_expiry(now - Duration::hours(1), now), 0);
        assert_eq!(days_until_expiry(now - Duration::hours(25), now), -1);
    }

    #[test]
    fn classify_thresholds() {
        assert_eq!(Urgency::classify(None), Urgency::Ok);
        assert_eq!(Urgency::classify(Some(-4)), Urgency::AtRisk);
        assert_eq!(Urgency::classify(Some(0)), Urgency::AtRisk);
        assert_eq!(Urgency::classify(Some(1)), Urgency::Soon);
        assert_eq!(Urgency::classify(Some(2)), Urgency::Soon);
        assert_eq!(Urgency::classify(Some(3)), Urgency::Ok);
    }

    #[test]
    fn labels_and_colors() {
        assert_eq!(Urgency::AtRisk.to_string(), "At Risk");
        assert_eq!(Urgency::Soon.color(), "orange");
        assert_eq!(Urgency::Ok.color(), "green");
    }

    #[test]
    fn expiry_status_text() {
        assert_eq!(ExpiryStatus::from_days(-2).to_string(), "Expired");
        assert_eq!(ExpiryStatus::from_days(0).to_string(), "Expires today");
        assert_eq!(ExpiryStatus::from_days(5).to_string(), "5 days left");
    }

    #[test]
    fn needing_attention_orders_by_expiry_and_skips_fresh_items() {
        // Fridge override is 12 days.
        let now = test_time() + Duration::days(11);

        let mut due_tomorrow = PantryItem::create(create_cmd("Dairy")).unwrap();
        due_tomorrow.refresh_prediction(&in_band(), test_time()).unwrap();

        let mut overdue = PantryItem::create(purchased_on(test_time() - Duration::days(3))).unwrap();
        overdue.refresh_prediction(&in_band(), test_time()).unwrap();

        let mut fresh = PantryItem::create(purchased_on(test_time() + Duration::days(5))).unwrap();
        fresh.refresh_prediction(&in_band(), test_time()).unwrap();

        let unpredicted = PantryItem::create(create_cmd("Dairy")).unwrap();

        let items = vec![fresh, due_tomorrow.clone(), unpredicted, overdue.clone()];
        let flagged = needing_attention(&items, now);

        assert_eq!(flagged, vec![&overdue, &due_tomorrow]);
        assert_eq!(Urgency::of(&overdue, now), Urgency::AtRisk);
        assert_eq!(Urgency::of(&due_tomorrow, now), Urgency::Soon);
    }

}
