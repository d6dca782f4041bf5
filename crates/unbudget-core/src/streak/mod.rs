//! Daily-logging streaks and savings tiers.
//!
//! The same transition rule runs at two granularities: per habit, where a
//! same-day repeat is rejected, and per profile, where it is a no-op.

mod engine;
mod tier;

pub use engine::{advance_aggregate, log_save, milestone, DayStatus};
pub use tier::{Tier, TierProgress};
