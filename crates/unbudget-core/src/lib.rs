//! # UnBudget Core Library
//!
//! Domain logic for UnBudget, a habit tracker that credits the money you
//! did not spend on a "guilty spending habit" and projects what it would
//! grow to if invested. Front ends (the `unbudget` CLI, a mobile shell)
//! own one [`UserProfile`] value, pass it into these functions, and persist
//! the value they get back.
//!
//! ## Architecture
//!
//! - **Habits**: habit records, the built-in catalogue, and the three-habit
//!   cap with keep-last-N eviction
//! - **Streaks**: calendar-day streak transitions and savings tiers
//! - **Projection**: future value of a monthly contribution (annuity due)
//! - **Tracker**: the screen-level actions built from the above
//! - **Storage**: key-value persistence of the profile document and TOML
//!   configuration
//!
//! ## Key Components
//!
//! - [`log_habit`]: credit one avoided instance of a habit
//! - [`project`]: future value of a recurring monthly amount
//! - [`ProfileRepository`]: load and save the profile document
//! - [`Config`]: application configuration management

pub mod error;
pub mod habit;
pub mod projection;
pub mod storage;
pub mod streak;
pub mod tracker;
pub mod validation;

pub use error::{
    AlreadyLoggedToday, ConfigError, CoreError, PersistenceError, ProjectionError, TrackerError,
    ValidationError,
};
pub use habit::{
    count_habits, initialize_habit, upsert_habit, HabitKind, HabitOverrides, HabitRecord,
    UserProfile, MAX_HABITS,
};
pub use projection::{project, projection_grid, Horizon, DEFAULT_ANNUAL_RATE};
pub use storage::{Config, Database, KeyValueStore, MemoryStore, ProfileRepository};
pub use streak::{log_save, DayStatus, Tier, TierProgress};
pub use tracker::{log_habit, select_habit, LogOutcome};
