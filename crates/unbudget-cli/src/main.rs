use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use unbudget_core::{CoreError, PersistenceError};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "unbudget", version, about = "UnBudget CLI")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit selection and spend settings
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Set your age (used for projections)
    Age {
        /// Age in whole years, 1-120
        age: String,
    },
    /// Log that you avoided a habit today
    Log {
        /// Habit name
        habit: String,
        /// Calendar day to log (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Project what the money would grow to if invested
    Project(commands::project::ProjectArgs),
    /// Streak, savings and tier progress
    Stats {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Delete all stored habit data
    Reset,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Age { age } => commands::age::run(&age),
        Commands::Log { habit, date } => commands::log::run(&habit, date),
        Commands::Project(args) => commands::project::run(args),
        Commands::Stats { json } => commands::stats::run(json),
        Commands::Config { action } => commands::config::run(action),
        Commands::Reset => commands::reset::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        let retryable = e.downcast_ref::<PersistenceError>().is_some()
            || e.downcast_ref::<CoreError>()
                .is_some_and(CoreError::is_retryable);
        if retryable {
            eprintln!("Unable to save your progress. Please try again.");
        }
        std::process::exit(1);
    }
}
