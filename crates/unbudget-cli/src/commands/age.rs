use unbudget_core::tracker::set_age;
use unbudget_core::validation::parse_age;

use super::{open_repo, CommandResult};

pub fn run(input: &str) -> CommandResult {
    let age = parse_age(input)?;
    let repo = open_repo()?;
    let profile = set_age(&repo.load()?, i64::from(age))?;
    repo.save(&profile)?;
    println!("Age set to {age}");
    Ok(())
}
