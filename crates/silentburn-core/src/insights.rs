//! Rule-based insight generation over recent history.
//!
//! Insights are ephemeral: recomputed on every read from the current entry
//! list and never persisted. Each rule is evaluated independently over the
//! 7 most recent entries; the result is sorted by priority, highest first,
//! stable among equals.

use serde::{Deserialize, Serialize};

use crate::entry::JournalEntry;

/// Number of most-recent entries the rules look at.
pub const INSIGHT_WINDOW: usize = 7;

/// Minimum history length before any insight is produced.
pub const MIN_ENTRIES: usize = 3;

/// Category of an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Pattern,
    Warning,
    Positive,
}

/// A derived, non-persisted observation about recent patterns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Higher is more important; used for ranking.
    pub priority: u8,
}

/// Generate insights from the entry list (most-recent-first).
///
/// Returns an empty list for histories shorter than [`MIN_ENTRIES`].
pub fn generate_insights(entries: &[JournalEntry]) -> Vec<Insight> {
    let mut insights = Vec::new();

    if entries.len() < MIN_ENTRIES {
        return insights;
    }

    let recent = &entries[..entries.len().min(INSIGHT_WINDOW)];
    let count = recent.len() as f64;
    let avg_hours = recent.iter().map(|e| e.work_hours as f64).sum::<f64>() / count;
    let avg_mood = recent.iter().map(|e| e.emotional_state as f64).sum::<f64>() / count;

    if avg_hours > 9.0 {
        insights.push(Insight {
            kind: InsightKind::Warning,
            title: "High Workload Detected".to_string(),
            description: format!(
                "You're averaging {avg_hours:.1} hours per day. Consider setting boundaries."
            ),
            icon: "⚠️".to_string(),
            priority: 3,
        });
    }

    if avg_mood > 3.5 {
        insights.push(Insight {
            kind: InsightKind::Positive,
            title: "Positive Mood Trend".to_string(),
            description: "Your emotional state has been consistently positive. Keep it up!"
                .to_string(),
            icon: "🌟".to_string(),
            priority: 1,
        });
    } else if avg_mood < 2.5 {
        insights.push(Insight {
            kind: InsightKind::Pattern,
            title: "Mood Concern".to_string(),
            description: "Your mood has been lower than usual. Consider reaching out for support."
                .to_string(),
            icon: "💭".to_string(),
            priority: 2,
        });
    }

    if recent.len() >= 5 {
        insights.push(Insight {
            kind: InsightKind::Positive,
            title: "Great Consistency".to_string(),
            description: format!(
                "You've logged {} entries this week. Consistency builds awareness!",
                recent.len()
            ),
            icon: "📈".to_string(),
            priority: 1,
        });
    }

    // sort_by is stable, so equal priorities keep insertion order
    insights.sort_by(|a, b| b.priority.cmp(&a.priority));
    insights
}
