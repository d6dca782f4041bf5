//! Projection of avoided spend into invested savings.

use clap::Args;
use unbudget_core::validation::{check_age, parse_spend};
use unbudget_core::{project, projection_grid, Config, UserProfile};

use super::{open_repo, CommandResult};

#[derive(Args)]
pub struct ProjectArgs {
    /// Habit whose monthly spend to project (default: first tracked habit)
    #[arg(long, conflicts_with = "monthly")]
    habit: Option<String>,
    /// Monthly amount to project instead of a habit's spend
    #[arg(long)]
    monthly: Option<String>,
    /// Current age (default: stored age)
    #[arg(long)]
    age: Option<i64>,
    /// Single target age instead of the full grid
    #[arg(long)]
    target: Option<i64>,
    /// Annual return rate, e.g. 0.08 (default: projection.annual_rate)
    #[arg(long)]
    rate: Option<f64>,
    /// Print JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ProjectArgs) -> CommandResult {
    let config = Config::load_or_default();
    let profile = open_repo()?.load()?;

    let monthly = monthly_amount(&profile, &args)?;
    let age = match args.age {
        Some(age) => check_age(age)?,
        None => profile
            .age
            .ok_or("no age on record; run 'unbudget age <years>' or pass --age")?,
    };
    let age = u32::from(age);
    let rate = args.rate.unwrap_or(config.projection.annual_rate);

    if let Some(target) = args.target {
        let target = u32::from(check_age(target)?);
        let value = project(monthly, age, target, rate)?;
        if args.json {
            let body = serde_json::json!({
                "monthlyAmount": monthly,
                "currentAge": age,
                "targetAge": target,
                "annualRate": rate,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        } else {
            println!(
                "{} a month from age {age} grows to {} by age {target}",
                config.money(monthly),
                config.money(value as f64)
            );
        }
        return Ok(());
    }

    let grid = projection_grid(monthly, age, config.projection.retirement_age, rate)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }

    println!(
        "If you invested {} a month at {:.1}% instead:",
        config.money(monthly),
        rate * 100.0
    );
    println!();
    for horizon in grid {
        println!("  {:<14} {}", horizon.label, config.money(horizon.value as f64));
    }
    Ok(())
}

fn monthly_amount(
    profile: &UserProfile,
    args: &ProjectArgs,
) -> Result<f64, Box<dyn std::error::Error>> {
    if let Some(monthly) = &args.monthly {
        return Ok(parse_spend("monthly spend", monthly)?);
    }
    let record = match &args.habit {
        Some(name) => profile
            .habit(name)
            .ok_or_else(|| format!("'{name}' is not a tracked habit"))?,
        None => {
            profile
                .primary_habit()
                .ok_or("no habits tracked; run 'unbudget habit select <name>' first")?
                .1
        }
    };
    Ok(record.monthly_spend)
}
