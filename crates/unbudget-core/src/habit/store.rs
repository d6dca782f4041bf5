//! Habit map rules: initialization from defaults and the keep-last-N cap.

use super::catalog::default_per_use_spend;
use super::record::{HabitRecord, UserProfile};
use crate::validation::{MAX_AGE, MIN_AGE};

/// Maximum number of habits a profile tracks at once.
pub const MAX_HABITS: usize = 3;

/// Caller-supplied values that replace the catalogue defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HabitOverrides {
    pub per_use_spend: Option<f64>,
    pub monthly_spend: Option<f64>,
}

impl HabitOverrides {
    pub fn monthly(amount: f64) -> Self {
        Self {
            monthly_spend: Some(amount),
            ..Self::default()
        }
    }

    /// Apply the overrides to an existing record.
    pub fn apply_to(&self, record: &mut HabitRecord) {
        if let Some(per_use) = self.per_use_spend {
            record.per_use_spend = per_use;
        }
        if let Some(monthly) = self.monthly_spend {
            record.monthly_spend = monthly;
        }
    }
}

/// Build a fresh record for `name`.
///
/// Per-use spend comes from the catalogue (10 for unknown names); streak,
/// totals and dates start empty.
pub fn initialize_habit(name: &str, overrides: HabitOverrides) -> HabitRecord {
    let mut record = HabitRecord {
        per_use_spend: default_per_use_spend(name),
        ..HabitRecord::default()
    };
    overrides.apply_to(&mut record);
    record
}

/// Insert or replace `name`, then evict the oldest entries past the cap.
///
/// A replaced entry keeps its insertion position and cannot grow the map. A
/// new entry goes last, so it is never the one evicted. The profile total is
/// re-derived afterwards.
pub fn upsert_habit(mut profile: UserProfile, name: &str, record: HabitRecord) -> UserProfile {
    profile.habits.insert(name.to_string(), record);
    let mut profile = enforce_habit_cap(profile);
    profile.recompute_total_saved();
    profile
}

/// Number of tracked habits.
pub fn count_habits(profile: &UserProfile) -> usize {
    profile.habits.len()
}

/// Trim the habit map to the newest [`MAX_HABITS`] entries.
pub fn enforce_habit_cap(mut profile: UserProfile) -> UserProfile {
    let excess = profile.habits.len().saturating_sub(MAX_HABITS);
    if excess > 0 {
        for (name, record) in profile.habits.drain(..excess) {
            tracing::info!(
                habit = %name,
                total_saved = record.total_saved,
                "evicted oldest habit to stay within cap"
            );
        }
        profile.recompute_total_saved();
    }
    profile
}

/// Repair a profile read from storage.
///
/// Enforces the cap, backfills a missing per-use spend from the catalogue,
/// drops an age outside 1-120, and re-derives the profile total.
pub fn normalize_profile(profile: UserProfile) -> UserProfile {
    let mut profile = enforce_habit_cap(profile);
    if let Some(age) = profile.age.filter(|age| !(MIN_AGE..=MAX_AGE).contains(age)) {
        tracing::warn!(age, "discarding out-of-range stored age");
        profile.age = None;
    }
    for (name, record) in profile.habits.iter_mut() {
        if !(record.per_use_spend.is_finite() && record.per_use_spend > 0.0) {
            record.per_use_spend = default_per_use_spend(name);
        }
    }
    profile.recompute_total_saved();
    profile
}
