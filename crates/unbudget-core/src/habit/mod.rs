//! Habit records, the built-in habit catalogue, and the store rules that
//! keep a profile to at most [`MAX_HABITS`] tracked habits.

mod catalog;
mod record;
mod store;

pub use catalog::{default_per_use_spend, HabitKind, DEFAULT_PER_USE_SPEND};
pub use record::{HabitRecord, UserProfile};
pub use store::{
    count_habits, enforce_habit_cap, initialize_habit, normalize_profile, upsert_habit,
    HabitOverrides, MAX_HABITS,
};
