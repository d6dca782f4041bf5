pub mod age;
pub mod config;
pub mod habit;
pub mod log;
pub mod project;
pub mod reset;
pub mod stats;

use chrono::{Local, NaiveDate};
use unbudget_core::{Database, ProfileRepository};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Repository over the on-disk store in the data directory.
pub fn open_repo() -> Result<ProfileRepository<Database>, Box<dyn std::error::Error>> {
    Ok(ProfileRepository::open_default()?)
}

/// Local calendar day, unless the caller pinned one.
pub fn today_or(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}
