use clap::Subcommand;
use silentburn_core::{random_tip, tips_by_category, RiskLevel, TipCategory};

use super::open_journal;

#[derive(Subcommand)]
pub enum TipsAction {
    /// Random tip for a risk level (defaults to today's entry, else low)
    Suggest {
        /// Risk level: low, medium or high
        #[arg(long)]
        level: Option<String>,
    },
    /// All tips in a category: rest, social, productivity or mindfulness
    Category { category: String },
}

fn parse_level(s: &str) -> Result<RiskLevel, String> {
    match s.to_lowercase().as_str() {
        "low" => Ok(RiskLevel::Low),
        "medium" => Ok(RiskLevel::Medium),
        "high" => Ok(RiskLevel::High),
        other => Err(format!("unknown risk level '{other}'")),
    }
}

fn parse_category(s: &str) -> Result<TipCategory, String> {
    match s.to_lowercase().as_str() {
        "rest" => Ok(TipCategory::Rest),
        "social" => Ok(TipCategory::Social),
        "productivity" => Ok(TipCategory::Productivity),
        "mindfulness" => Ok(TipCategory::Mindfulness),
        other => Err(format!("unknown tip category '{other}'")),
    }
}

pub fn run(action: TipsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TipsAction::Suggest { level } => {
            let level = match level {
                Some(s) => parse_level(&s)?,
                None => {
                    let journal = open_journal()?;
                    journal
                        .today_entry()?
                        .map(|e| e.risk_level)
                        .unwrap_or(RiskLevel::Low)
                }
            };
            match random_tip(level) {
                Some(tip) => println!("{}", serde_json::to_string_pretty(tip)?),
                None => println!("no tips available for level {level}"),
            }
        }
        TipsAction::Category { category } => {
            let tips = tips_by_category(parse_category(&category)?);
            println!("{}", serde_json::to_string_pretty(&tips)?);
        }
    }
    Ok(())
}
