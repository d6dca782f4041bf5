//! Profile-level actions: selecting habits, editing spend, setting age and
//! logging a save.
//!
//! Each action borrows the current profile and returns the next one, so a
//! rejected action leaves the caller's value untouched and a failed write
//! can be retried with the value already computed.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{AlreadyLoggedToday, Result, TrackerError};
use crate::habit::{initialize_habit, upsert_habit, HabitOverrides, HabitRecord, UserProfile};
use crate::streak::{advance_aggregate, log_save, milestone, Tier};
use crate::validation::{check_age, check_spend, parse_habit_name};

/// Start tracking `name`, or update it if already tracked.
///
/// An existing record keeps its streak and totals; only the overrides are
/// applied. A new record starts from catalogue defaults and may evict the
/// oldest habit.
pub fn select_habit(
    profile: &UserProfile,
    name: &str,
    overrides: HabitOverrides,
) -> Result<UserProfile> {
    let name = parse_habit_name(name)?;
    if let Some(per_use) = overrides.per_use_spend {
        check_spend("per-use spend", per_use)?;
    }
    if let Some(monthly) = overrides.monthly_spend {
        check_spend("monthly spend", monthly)?;
    }

    let record = match profile.habit(&name) {
        Some(existing) => {
            let mut record = existing.clone();
            overrides.apply_to(&mut record);
            record
        }
        None => {
            tracing::debug!(habit = %name, "initializing habit from defaults");
            initialize_habit(&name, overrides)
        }
    };
    Ok(upsert_habit(profile.clone(), &name, record))
}

/// Change the declared monthly spend of a tracked habit.
pub fn set_monthly_spend(profile: &UserProfile, name: &str, amount: f64) -> Result<UserProfile> {
    let amount = check_spend("monthly spend", amount)?;
    edit_habit(profile, name, |record| record.monthly_spend = amount)
}

/// Change the amount credited per log for a tracked habit.
pub fn set_per_use_spend(profile: &UserProfile, name: &str, amount: f64) -> Result<UserProfile> {
    let amount = check_spend("per-use spend", amount)?;
    edit_habit(profile, name, |record| record.per_use_spend = amount)
}

pub fn set_age(profile: &UserProfile, age: i64) -> Result<UserProfile> {
    let age = check_age(age)?;
    Ok(UserProfile {
        age: Some(age),
        ..profile.clone()
    })
}

fn edit_habit(
    profile: &UserProfile,
    name: &str,
    edit: impl FnOnce(&mut HabitRecord),
) -> Result<UserProfile> {
    let name = parse_habit_name(name)?;
    let mut next = profile.clone();
    let record = next
        .habits
        .get_mut(&name)
        .ok_or(TrackerError::UnknownHabit(name))?;
    edit(record);
    Ok(next)
}

/// Result of an accepted log-save action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogOutcome {
    pub profile: UserProfile,
    pub habit: String,
    /// Amount credited, the habit's per-use spend.
    pub amount: f64,
    pub habit_streak: u32,
    /// Aggregate streak after the log.
    pub streak: u32,
    /// Tier reached by the aggregate streak on this log, if any.
    pub tier_up: Option<Tier>,
    /// Tier reached by the habit's own streak on this log, if any.
    pub habit_tier_up: Option<Tier>,
}

impl LogOutcome {
    pub fn tier(&self) -> Tier {
        Tier::of(self.streak)
    }
}

/// Credit one avoided instance of `name` on `today`.
///
/// `name` is matched after trimming. The habit and the profile aggregate are
/// advanced with the same `today`.
/// Rejected with [`TrackerError::AlreadyLoggedToday`] if this habit was
/// already credited today.
pub fn log_habit(
    profile: &UserProfile,
    name: &str,
    today: NaiveDate,
) -> std::result::Result<LogOutcome, TrackerError> {
    let name = name.trim();
    let record = profile
        .habit(name)
        .ok_or_else(|| TrackerError::UnknownHabit(name.to_string()))?;
    let amount = record.per_use_spend;

    let updated = log_save(record, today, amount).map_err(|AlreadyLoggedToday(date)| {
        TrackerError::AlreadyLoggedToday {
            habit: name.to_string(),
            date,
        }
    })?;
    let habit_streak = updated.streak;

    let mut next = profile.clone();
    if let Some(slot) = next.habits.get_mut(name) {
        *slot = updated;
    }
    let previous_streak = next.streak;
    next.streak = advance_aggregate(previous_streak, next.last_logged_date, today);
    next.last_logged_date = Some(today);
    next.recompute_total_saved();

    let tier_up = if next.streak != previous_streak {
        milestone(next.streak)
    } else {
        None
    };
    if let Some(tier) = tier_up {
        tracing::info!(streak = next.streak, %tier, "reached new tier");
    }

    Ok(LogOutcome {
        streak: next.streak,
        profile: next,
        habit: name.to_string(),
        amount,
        habit_streak,
        tier_up,
        habit_tier_up: milestone(habit_streak),
    })
}

/// Whether `name` was already credited on `today`.
pub fn logged_today(profile: &UserProfile, name: &str, today: NaiveDate) -> bool {
    profile
        .habit(name.trim())
        .is_some_and(|record| record.logged_on(today))
}
