use clap::Subcommand;
use silentburn_core::{JournalEntry, RiskInputs};

use super::open_journal;

#[derive(Subcommand)]
pub enum JournalAction {
    /// Log today's entry (replaces an existing entry for today)
    Log {
        /// Hours worked (clamped to 4-12)
        #[arg(long)]
        hours: u32,
        /// Mood, 1 (best) to 5 (worst)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        mood: u8,
        /// Mark the day as productive
        #[arg(long)]
        productive: bool,
        /// Social connection, 1 (isolated) to 5 (well-connected)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        social: u8,
        /// Energy drain, 1-5
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        energy: Option<u8>,
        /// Sleep quality, 1 (worst) to 5 (best)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        sleep: Option<u8>,
        /// Free-text summary of the day
        #[arg(long, default_value = "")]
        summary: String,
        /// Stress trigger label (repeatable)
        #[arg(long = "trigger")]
        triggers: Vec<String>,
    },
    /// Show today's entry, if logged
    Today,
    /// List all persisted entries, most recent first
    List,
    /// Delete all entries (achievements are kept)
    Clear,
    /// Print a backup bundle of entries and achievements
    Export,
}

pub fn run(action: JournalAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut journal = open_journal()?;

    match action {
        JournalAction::Log {
            hours,
            mood,
            productive,
            social,
            energy,
            sleep,
            summary,
            triggers,
        } => {
            let entry = JournalEntry::new(RiskInputs {
                work_hours: hours,
                emotional_state: mood,
                was_productive: productive,
                social_connection: social,
                energy_level: energy,
                sleep_quality: sleep,
                text_summary: summary,
                stress_triggers: triggers,
            });
            journal.save_entry(entry.clone())?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        JournalAction::Today => match journal.today_entry()? {
            Some(entry) => println!("{}", serde_json::to_string_pretty(&entry)?),
            None => println!("no entry logged today"),
        },
        JournalAction::List => {
            let entries = journal.entries()?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        JournalAction::Clear => {
            journal.clear_history()?;
            println!("history cleared");
        }
        JournalAction::Export => {
            let bundle = journal.export()?;
            println!("{}", serde_json::to_string_pretty(&bundle)?);
        }
    }
    Ok(())
}
