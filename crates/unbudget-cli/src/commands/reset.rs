use super::{open_repo, CommandResult};

pub fn run() -> CommandResult {
    open_repo()?.clear()?;
    println!("All habit data cleared.");
    Ok(())
}
