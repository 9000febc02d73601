//! Weekly aggregates and heatmap bucketing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::achievements;
use crate::entry::JournalEntry;

/// Number of most-recent entries the weekly view aggregates.
pub const WEEKLY_WINDOW: usize = 7;

/// Direction of the mood over the weekly window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTrend {
    Improving,
    Declining,
    Stable,
}

/// Aggregates over the 7 most recent entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStats {
    /// Average risk score, rounded to the nearest integer
    pub avg_risk_score: u32,
    /// Sum of work hours in the window
    pub total_work_hours: u32,
    /// Days in the window that felt productive
    pub productive_days: u32,
    /// Average emotional state (1 best, 5 worst)
    pub avg_mood: f64,
    /// Mood direction across the window
    pub mood_trend: MoodTrend,
    /// Consecutive logged days ending today
    pub streak: u32,
    /// Entries in the window
    pub entries_count: usize,
}

/// Aggregate the 7 most recent entries. Zeroed stats on empty history.
pub fn weekly_stats(entries: &[JournalEntry], today: NaiveDate) -> WeeklyStats {
    let window = &entries[..entries.len().min(WEEKLY_WINDOW)];
    let streak = achievements::streak(entries, today);

    if window.is_empty() {
        return WeeklyStats {
            avg_risk_score: 0,
            total_work_hours: 0,
            productive_days: 0,
            avg_mood: 0.0,
            mood_trend: MoodTrend::Stable,
            streak,
            entries_count: 0,
        };
    }

    let count = window.len() as f64;
    let avg_risk = window.iter().map(|e| e.risk_score as f64).sum::<f64>() / count;
    let avg_mood = window.iter().map(|e| e.emotional_state as f64).sum::<f64>() / count;

    WeeklyStats {
        avg_risk_score: avg_risk.round() as u32,
        total_work_hours: window.iter().map(|e| e.work_hours).sum(),
        productive_days: window.iter().filter(|e| e.was_productive).count() as u32,
        avg_mood: (avg_mood * 10.0).round() / 10.0,
        mood_trend: mood_trend(window),
        streak,
        entries_count: window.len(),
    }
}

/// Compare the newer half of the window against the older half. Lower
/// emotional state means better mood; differences within 0.25 read as
/// stable.
fn mood_trend(window: &[JournalEntry]) -> MoodTrend {
    let mid = window.len() / 2;
    if mid == 0 {
        return MoodTrend::Stable;
    }

    let mean = |slice: &[JournalEntry]| {
        slice.iter().map(|e| e.emotional_state as f64).sum::<f64>() / slice.len() as f64
    };
    let newer = mean(&window[..mid]);
    let older = mean(&window[mid..]);

    if newer < older - 0.25 {
        MoodTrend::Improving
    } else if newer > older + 0.25 {
        MoodTrend::Declining
    } else {
        MoodTrend::Stable
    }
}

/// Heatmap intensity bucket for a risk score: 1 (calm) through 4 (severe).
pub fn heat_bucket(score: u8) -> u8 {
    if score <= 30 {
        1
    } else if score <= 50 {
        2
    } else if score <= 70 {
        3
    } else {
        4
    }
}
