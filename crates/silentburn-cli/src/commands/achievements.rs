use clap::Subcommand;

use super::open_journal;

#[derive(Subcommand)]
pub enum AchievementsAction {
    /// Show the full catalog with unlock state
    List,
}

pub fn run(action: AchievementsAction) -> Result<(), Box<dyn std::error::Error>> {
    let journal = open_journal()?;

    match action {
        AchievementsAction::List => {
            let catalog = journal.achievements()?;
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
    }
    Ok(())
}
