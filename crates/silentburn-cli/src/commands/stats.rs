use chrono::{Duration, Utc};
use clap::Subcommand;
use serde::Serialize;
use silentburn_core::{heat_bucket, weekly_stats};

use super::open_journal;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Aggregates over the 7 most recent entries
    Weekly,
    /// Consecutive logged days ending today
    Streak,
    /// Per-day risk buckets for the trailing window
    Heatmap {
        /// Window length in days
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
}

/// One heatmap cell; score and bucket are absent for unlogged days.
#[derive(Serialize)]
struct HeatmapDay {
    date: chrono::NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bucket: Option<u8>,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let journal = open_journal()?;
    let today = Utc::now().date_naive();

    match action {
        StatsAction::Weekly => {
            let stats = weekly_stats(&journal.entries()?, today);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        StatsAction::Streak => {
            println!("{}", journal.streak()?);
        }
        StatsAction::Heatmap { days } => {
            let entries = journal.entries()?;
            let grid: Vec<HeatmapDay> = (0..days as i64)
                .rev()
                .map(|offset| {
                    let date = today - Duration::days(offset);
                    let score = entries
                        .iter()
                        .find(|e| e.calendar_date() == date)
                        .map(|e| e.risk_score);
                    HeatmapDay {
                        date,
                        score,
                        bucket: score.map(heat_bucket),
                    }
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&grid)?);
        }
    }
    Ok(())
}
