use serde::Serialize;
use unbudget_core::tracker::logged_today;
use unbudget_core::{Config, HabitRecord, Tier, TierProgress};

use super::{open_repo, today_or, CommandResult};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HabitStats<'a> {
    name: &'a str,
    #[serde(flatten)]
    record: &'a HabitRecord,
    tier: Tier,
    logged_today: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Stats<'a> {
    streak: u32,
    total_saved: f64,
    age: Option<u8>,
    progress: TierProgress,
    habits: Vec<HabitStats<'a>>,
}

pub fn run(json: bool) -> CommandResult {
    let profile = open_repo()?.load()?;
    let today = today_or(None);

    let stats = Stats {
        streak: profile.streak,
        total_saved: profile.total_saved,
        age: profile.age,
        progress: profile.tier_progress(),
        habits: profile
            .habits
            .iter()
            .map(|(name, record)| HabitStats {
                name,
                record,
                tier: record.tier(),
                logged_today: logged_today(&profile, name, today),
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let config = Config::load_or_default();
    let progress = stats.progress;
    println!("Total saved: {}", config.money(stats.total_saved));
    println!(
        "Streak: {} days {} {}",
        stats.streak,
        progress.tier.icon(),
        progress.tier.label()
    );
    match (progress.tier.next(), progress.days_remaining()) {
        (Some(next), Some(days)) => println!(
            "  {:.0}% to {} ({days} more days)",
            progress.percentage(),
            next.label()
        ),
        _ => println!("  Top tier reached"),
    }

    if !stats.habits.is_empty() {
        println!();
        for habit in &stats.habits {
            let done = if habit.logged_today { " [completed today]" } else { "" };
            println!(
                "  {}: {} saved, {} day streak{}",
                habit.name,
                config.money(habit.record.total_saved),
                habit.record.streak,
                done
            );
        }
    }
    Ok(())
}
