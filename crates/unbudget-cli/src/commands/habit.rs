//! Habit selection and spend commands.
//!
//! Covers the onboarding steps: pick a habit, declare what it costs per
//! month, and adjust the amount credited per avoided instance.

use clap::Subcommand;
use serde::Serialize;
use unbudget_core::habit::DEFAULT_PER_USE_SPEND;
use unbudget_core::tracker::{logged_today, set_monthly_spend, set_per_use_spend};
use unbudget_core::validation::parse_spend;
use unbudget_core::{select_habit, Config, HabitKind, HabitOverrides, MAX_HABITS};

use super::{open_repo, today_or, CommandResult};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Start tracking a habit (up to 3; the oldest is dropped)
    Select {
        /// Habit name (e.g. "DoorDash", "Uber", or any free text)
        name: String,
        /// Average monthly spend on this habit
        #[arg(long)]
        monthly_spend: Option<String>,
        /// Amount credited each time you avoid it
        #[arg(long)]
        per_use_spend: Option<String>,
    },

    /// List tracked habits
    List {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Set the monthly spend of a tracked habit
    Spend {
        /// Habit name
        name: String,
        /// Monthly amount
        amount: String,
    },

    /// Set the amount credited per avoided instance
    PerUse {
        /// Habit name
        name: String,
        /// Per-use amount
        amount: String,
    },

    /// Show the built-in habits and their default per-use spend
    Catalog,
}

pub fn run(action: HabitAction) -> CommandResult {
    match action {
        HabitAction::Select {
            name,
            monthly_spend,
            per_use_spend,
        } => select(&name, monthly_spend.as_deref(), per_use_spend.as_deref()),
        HabitAction::List { json } => list(json),
        HabitAction::Spend { name, amount } => spend(&name, &amount),
        HabitAction::PerUse { name, amount } => per_use(&name, &amount),
        HabitAction::Catalog => catalog(),
    }
}

fn select(name: &str, monthly: Option<&str>, per_use: Option<&str>) -> CommandResult {
    let overrides = HabitOverrides {
        monthly_spend: monthly
            .map(|m| parse_spend("monthly spend", m))
            .transpose()?,
        per_use_spend: per_use
            .map(|p| parse_spend("per-use spend", p))
            .transpose()?,
    };

    let repo = open_repo()?;
    let config = Config::load_or_default();
    let before = repo.load()?;
    let profile = select_habit(&before, name, overrides)?;
    repo.save(&profile)?;

    let name = name.trim();
    let record = profile.habit(name).ok_or("habit missing after select")?;
    println!(
        "Tracking {} ({} per use)",
        name,
        config.money(record.per_use_spend)
    );
    if let Some(kind) = HabitKind::from_name(name) {
        println!("  {}", kind.roast());
    }
    for dropped in before.habit_names().filter(|n| profile.habit(n).is_none()) {
        println!("Dropped {dropped} (you can track up to {MAX_HABITS} habits).");
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HabitRow<'a> {
    name: &'a str,
    per_use_spend: f64,
    monthly_spend: f64,
    streak: u32,
    total_saved: f64,
    logged_today: bool,
}

fn list(json: bool) -> CommandResult {
    let profile = open_repo()?.load()?;
    let config = Config::load_or_default();
    let today = today_or(None);

    let rows: Vec<HabitRow> = profile
        .habits
        .iter()
        .map(|(name, record)| HabitRow {
            name,
            per_use_spend: record.per_use_spend,
            monthly_spend: record.monthly_spend,
            streak: record.streak,
            total_saved: record.total_saved,
            logged_today: logged_today(&profile, name, today),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No habits added yet.");
        println!("Use 'habit select <name>' to start tracking one.");
        return Ok(());
    }

    println!("Your Habits ({}/{MAX_HABITS})", rows.len());
    println!();
    for row in rows {
        let status = if row.logged_today {
            " [completed today]"
        } else {
            ""
        };
        println!("  {}{}", row.name, status);
        println!("    Per use: {}", config.money(row.per_use_spend));
        println!("    Monthly: {}", config.money(row.monthly_spend));
        println!("    Streak: {} days", row.streak);
        println!("    Saved: {}", config.money(row.total_saved));
    }
    Ok(())
}

fn spend(name: &str, amount: &str) -> CommandResult {
    let amount = parse_spend("monthly spend", amount)?;
    let repo = open_repo()?;
    let profile = set_monthly_spend(&repo.load()?, name, amount)?;
    repo.save(&profile)?;
    println!(
        "Monthly spend for {name} set to {}",
        Config::load_or_default().money(amount)
    );
    Ok(())
}

fn per_use(name: &str, amount: &str) -> CommandResult {
    let amount = parse_spend("per-use spend", amount)?;
    let repo = open_repo()?;
    let profile = set_per_use_spend(&repo.load()?, name, amount)?;
    repo.save(&profile)?;
    println!(
        "Per-use spend for {name} set to {}",
        Config::load_or_default().money(amount)
    );
    Ok(())
}

fn catalog() -> CommandResult {
    let config = Config::load_or_default();
    println!("Pick your guilty habit:");
    println!();
    for kind in HabitKind::ALL {
        println!(
            "  {} - {} per use",
            kind.name(),
            config.money(kind.per_use_spend())
        );
        println!("    {}", kind.roast());
    }
    println!();
    println!(
        "Any other name works too ({} per use).",
        config.money(DEFAULT_PER_USE_SPEND)
    );
    Ok(())
}
