//! Streak transitions for a single log-save action.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::tier::Tier;
use crate::error::AlreadyLoggedToday;
use crate::habit::HabitRecord;

/// Where a record stands relative to `today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    NeverLogged,
    LoggedToday,
    /// Streak continues on the next log.
    LoggedYesterday,
    /// Gap of two or more days. A date after `today` also lands here.
    LoggedEarlier,
}

impl DayStatus {
    pub fn classify(last: Option<NaiveDate>, today: NaiveDate) -> Self {
        match last {
            None => DayStatus::NeverLogged,
            Some(day) if day == today => DayStatus::LoggedToday,
            Some(day) if Some(day) == today.pred_opt() => DayStatus::LoggedYesterday,
            Some(_) => DayStatus::LoggedEarlier,
        }
    }

    /// Streak after a credited log, given the streak before it.
    fn next_streak(&self, streak: u32) -> u32 {
        match self {
            DayStatus::LoggedToday => streak,
            DayStatus::LoggedYesterday => streak.saturating_add(1),
            DayStatus::NeverLogged | DayStatus::LoggedEarlier => 1,
        }
    }
}

/// Credit `amount` to `record` for `today`.
///
/// Fails without touching the record when it was already logged today.
pub fn log_save(
    record: &HabitRecord,
    today: NaiveDate,
    amount: f64,
) -> Result<HabitRecord, AlreadyLoggedToday> {
    let status = DayStatus::classify(record.last_logged_date, today);
    if status == DayStatus::LoggedToday {
        return Err(AlreadyLoggedToday(today));
    }

    let streak = status.next_streak(record.streak);
    if status == DayStatus::LoggedEarlier && record.streak > 0 {
        tracing::debug!(previous = record.streak, "streak gap, restarting at 1");
    }

    Ok(HabitRecord {
        streak,
        total_saved: record.total_saved + amount,
        last_logged_date: Some(today),
        ..record.clone()
    })
}

/// Profile-level streak after any habit is logged on `today`.
///
/// A second habit logged on the same day leaves the aggregate unchanged.
pub fn advance_aggregate(streak: u32, last: Option<NaiveDate>, today: NaiveDate) -> u32 {
    DayStatus::classify(last, today).next_streak(streak)
}

/// Tier reached when a streak lands exactly on a tier threshold.
pub fn milestone(new_streak: u32) -> Option<Tier> {
    match new_streak {
        7 | 21 | 30 => Some(Tier::of(new_streak)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(streak: u32, last: Option<NaiveDate>) -> HabitRecord {
        HabitRecord {
            per_use_spend: 25.0,
            streak,
            total_saved: 100.0,
            last_logged_date: last,
            ..HabitRecord::default()
        }
    }

    #[test]
    fn classify_states() {
        let today = date(2024, 6, 10);
        assert_eq!(DayStatus::classify(None, today), DayStatus::NeverLogged);
        assert_eq!(DayStatus::classify(Some(today), today), DayStatus::LoggedToday);
        assert_eq!(
            DayStatus::classify(Some(date(2024, 6, 9)), today),
            DayStatus::LoggedYesterday
        );
        assert_eq!(
            DayStatus::classify(Some(date(2024, 6, 8)), today),
            DayStatus::LoggedEarlier
        );
        assert_eq!(
            DayStatus::classify(Some(date(2024, 6, 11)), today),
            DayStatus::LoggedEarlier
        );
    }

    #[test]
    fn yesterday_across_year_boundary() {
        let rec = record(4, Some(date(2023, 12, 31)));
        let updated = log_save(&rec, date(2024, 1, 1), 25.0).unwrap();
        assert_eq!(updated.streak, 5);
    }

    #[test]
    fn yesterday_across_leap_day() {
        let rec = record(2, Some(date(2024, 2, 29)));
        let updated = log_save(&rec, date(2024, 3, 1), 25.0).unwrap();
        assert_eq!(updated.streak, 3);
    }

    #[test]
    fn consecutive_day_increments() {
        let rec = record(6, Some(date(2024, 6, 9)));
        let updated = log_save(&rec, date(2024, 6, 10), 25.0).unwrap();
        assert_eq!(updated.streak, 7);
        assert_eq!(updated.total_saved, 125.0);
        assert_eq!(updated.last_logged_date, Some(date(2024, 6, 10)));
        assert_eq!(updated.per_use_spend, 25.0);
    }

    #[test]
    fn gap_resets_to_one() {
        let rec = record(12, Some(date(2024, 6, 1)));
        let updated = log_save(&rec, date(2024, 6, 10), 25.0).unwrap();
        assert_eq!(updated.streak, 1);
    }

    #[test]
    fn first_log_starts_at_one() {
        let updated = log_save(&record(0, None), date(2024, 6, 10), 25.0).unwrap();
        assert_eq!(updated.streak, 1);
        assert_eq!(updated.total_saved, 125.0);
    }

    #[test]
    fn same_day_rejected_without_change() {
        let today = date(2024, 6, 10);
        let first = log_save(&record(3, Some(date(2024, 6, 9))), today, 25.0).unwrap();
        let second = log_save(&first, today, 25.0);
        assert_eq!(second, Err(AlreadyLoggedToday(today)));
        assert_eq!(first.streak, 4);
        assert_eq!(first.total_saved, 125.0);
    }

    #[test]
    fn aggregate_same_day_is_noop() {
        let today = date(2024, 6, 10);
        assert_eq!(advance_aggregate(5, Some(today), today), 5);
        assert_eq!(advance_aggregate(5, Some(date(2024, 6, 9)), today), 6);
        assert_eq!(advance_aggregate(5, Some(date(2024, 5, 1)), today), 1);
        assert_eq!(advance_aggregate(0, None, today), 1);
    }

    #[test]
    fn milestones_only_on_thresholds() {
        assert_eq!(milestone(7), Some(Tier::Silver));
        assert_eq!(milestone(21), Some(Tier::Gold));
        assert_eq!(milestone(30), Some(Tier::Platinum));
        assert_eq!(milestone(6), None);
        assert_eq!(milestone(8), None);
        assert_eq!(milestone(31), None);
    }
}
