//! Persisted habit and profile shapes.
//!
//! Field names serialize in camelCase so the stored JSON matches the
//! `@user_data` document written by the mobile shell. Every field has a
//! default because older documents omit some of them.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::streak::{Tier, TierProgress};

/// One tracked habit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HabitRecord {
    /// Avoided cost credited per logged instance.
    pub per_use_spend: f64,
    /// User-declared average monthly cost. Zero when never entered.
    pub monthly_spend: f64,
    /// Consecutive days logged without a gap.
    pub streak: u32,
    /// Cumulative dollars credited. Never decreases.
    pub total_saved: f64,
    pub last_logged_date: Option<NaiveDate>,
}

impl HabitRecord {
    /// Whether this habit was already credited on `today`.
    pub fn logged_on(&self, today: NaiveDate) -> bool {
        self.last_logged_date == Some(today)
    }

    pub fn tier(&self) -> Tier {
        Tier::of(self.streak)
    }
}

/// Singleton profile for one installation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    /// Tracked habits in insertion order, oldest first.
    pub habits: IndexMap<String, HabitRecord>,
    /// Age in whole years, 1-120 when set.
    pub age: Option<u8>,
    /// Sum of every habit's `total_saved`.
    pub total_saved: f64,
    /// Aggregate streak across all habits.
    pub streak: u32,
    pub last_logged_date: Option<NaiveDate>,
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn habit(&self, name: &str) -> Option<&HabitRecord> {
        self.habits.get(name)
    }

    /// Habit names, oldest first.
    pub fn habit_names(&self) -> impl Iterator<Item = &str> {
        self.habits.keys().map(String::as_str)
    }

    /// Habit the projection screen reports on when none is named: the
    /// oldest tracked one.
    pub fn primary_habit(&self) -> Option<(&str, &HabitRecord)> {
        self.habits
            .get_index(0)
            .map(|(name, record)| (name.as_str(), record))
    }

    pub fn tier_progress(&self) -> TierProgress {
        TierProgress::of(self.streak)
    }

    /// Re-derive the denormalized profile total from the habit map.
    pub(crate) fn recompute_total_saved(&mut self) {
        self.total_saved = self.habits.values().map(|h| h.total_saved).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let record = HabitRecord {
            per_use_spend: 25.0,
            monthly_spend: 120.0,
            streak: 3,
            total_saved: 75.0,
            last_logged_date: NaiveDate::from_ymd_opt(2024, 12, 31),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["perUseSpend"], 25.0);
        assert_eq!(json["monthlySpend"], 120.0);
        assert_eq!(json["totalSaved"], 75.0);
        assert_eq!(json["lastLoggedDate"], "2024-12-31");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"habits":{"Uber":{"monthlySpend":40}},"age":27}"#).unwrap();
        let uber = profile.habit("Uber").unwrap();
        assert_eq!(uber.monthly_spend, 40.0);
        assert_eq!(uber.per_use_spend, 0.0);
        assert_eq!(uber.last_logged_date, None);
        assert_eq!(profile.age, Some(27));
        assert_eq!(profile.streak, 0);
    }

    #[test]
    fn null_last_logged_date_is_none() {
        let record: HabitRecord =
            serde_json::from_str(r#"{"perUseSpend":12,"lastLoggedDate":null}"#).unwrap();
        assert_eq!(record.last_logged_date, None);
    }

    #[test]
    fn habit_order_survives_json() {
        let mut profile = UserProfile::new();
        for name in ["Uber", "DoorDash", "Crypto coins"] {
            profile.habits.insert(name.to_string(), HabitRecord::default());
        }
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: UserProfile = serde_json::from_str(&json).unwrap();
        let names: Vec<_> = parsed.habit_names().collect();
        assert_eq!(names, ["Uber", "DoorDash", "Crypto coins"]);
        assert_eq!(parsed.primary_habit().map(|(n, _)| n), Some("Uber"));
    }
}
