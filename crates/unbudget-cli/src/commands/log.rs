//! The daily "I skipped it" action.

use chrono::NaiveDate;
use unbudget_core::{log_habit, Config, TrackerError};

use super::{open_repo, today_or, CommandResult};

pub fn run(habit: &str, date: Option<NaiveDate>) -> CommandResult {
    let today = today_or(date);
    let repo = open_repo()?;
    let profile = repo.load()?;
    let config = Config::load_or_default();

    let outcome = match log_habit(&profile, habit, today) {
        Ok(outcome) => outcome,
        Err(TrackerError::AlreadyLoggedToday { habit, .. }) => {
            println!("You've already logged {habit} today. Come back tomorrow!");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    repo.save(&outcome.profile)?;

    let tier = outcome.tier();
    println!("Saved {} by skipping {}!", config.money(outcome.amount), outcome.habit);
    println!("  Total saved: {}", config.money(outcome.profile.total_saved));
    println!("  {} streak: {} days", outcome.habit, outcome.habit_streak);
    println!("  Overall streak: {} days {} {}", outcome.streak, tier.icon(), tier.label());
    if let Some(tier) = outcome.tier_up {
        println!();
        println!("Level up! You've reached {} status!", tier.label());
    }
    Ok(())
}
