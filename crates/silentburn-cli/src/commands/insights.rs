use clap::Subcommand;
use silentburn_core::{forecast, generate_insights};

use super::open_journal;

#[derive(Subcommand)]
pub enum InsightsAction {
    /// Insights derived from recent entries
    Show,
    /// Next-day risk projection and recommendations
    Forecast,
}

pub fn run(action: InsightsAction) -> Result<(), Box<dyn std::error::Error>> {
    let journal = open_journal()?;
    let entries = journal.entries()?;

    match action {
        InsightsAction::Show => {
            let insights = generate_insights(&entries);
            println!("{}", serde_json::to_string_pretty(&insights)?);
        }
        InsightsAction::Forecast => match forecast(&entries) {
            Some(f) => println!("{}", serde_json::to_string_pretty(&f)?),
            None => println!("need at least 3 days of data to generate predictions"),
        },
    }
    Ok(())
}
