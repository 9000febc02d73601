//! Next-day risk projection and recent-pattern detection.
//!
//! Read-only over the entry list, never persisted. All averages run over
//! the 7 most recent entries; at least 3 are required before a forecast is
//! produced.

use serde::{Deserialize, Serialize};

use crate::entry::JournalEntry;
use crate::insights::{INSIGHT_WINDOW, MIN_ENTRIES};

/// Coarse High/Medium/Low label for forecast figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastLabel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for ForecastLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForecastLabel::Low => write!(f, "Low"),
            ForecastLabel::Medium => write!(f, "Medium"),
            ForecastLabel::High => write!(f, "High"),
        }
    }
}

/// Boolean pattern detections over the forecast window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternFlags {
    /// Average day length over the window exceeds 8 hours
    pub consistently_long_days: bool,
    /// More than 3 unproductive days in the window
    pub low_productivity: bool,
    /// More than 2 days with emotional state 4 or worse
    pub negative_mood: bool,
}

/// Derived forecast over the recent window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    /// Average risk score over the window
    pub avg_risk: f64,
    /// Average work hours over the window
    pub avg_work_hours: f64,
    /// Average emotional state over the window
    pub avg_mood: f64,
    /// Whether the last 3 scores were strictly increasing, oldest to newest
    pub risk_increasing: bool,
    /// Projected risk score for tomorrow, 0-100
    pub projected_risk: u8,
    /// Energy outlook from recent mood
    pub energy_forecast: ForecastLabel,
    /// Burnout likelihood over the next 7 days
    pub burnout_probability: ForecastLabel,
    /// Conditional recommendation strings
    pub recommendations: Vec<String>,
    /// Pattern detections
    pub patterns: PatternFlags,
}

/// Build the forecast from the entry list (most-recent-first).
///
/// Returns `None` when fewer than 3 entries exist ("need more data").
pub fn forecast(entries: &[JournalEntry]) -> Option<Forecast> {
    let recent = &entries[..entries.len().min(INSIGHT_WINDOW)];
    if recent.len() < MIN_ENTRIES {
        return None;
    }

    let count = recent.len() as f64;
    let avg_risk = recent.iter().map(|e| e.risk_score as f64).sum::<f64>() / count;
    let avg_work_hours = recent.iter().map(|e| e.work_hours as f64).sum::<f64>() / count;
    let avg_mood = recent.iter().map(|e| e.emotional_state as f64).sum::<f64>() / count;

    // Last 3 days chronologically: recent[2] is the oldest of the three,
    // recent[0] the newest.
    let risk_increasing =
        recent[2].risk_score < recent[1].risk_score && recent[1].risk_score < recent[0].risk_score;

    let projected = if risk_increasing {
        (avg_risk + 15.0).min(100.0)
    } else {
        (avg_risk - 5.0).max(0.0)
    };

    let energy_forecast = if avg_mood > 3.0 {
        ForecastLabel::High
    } else if avg_mood > 2.0 {
        ForecastLabel::Medium
    } else {
        ForecastLabel::Low
    };

    let burnout_probability = if avg_risk > 60.0 {
        ForecastLabel::High
    } else if avg_risk > 35.0 {
        ForecastLabel::Medium
    } else {
        ForecastLabel::Low
    };

    let mut recommendations = Vec::new();
    if avg_work_hours > 9.0 {
        recommendations.push("Consider reducing work hours by 1-2 hours".to_string());
    }
    if risk_increasing {
        recommendations.push("Schedule a recovery day soon".to_string());
    }
    if avg_mood < 3.0 {
        recommendations.push("Try mood-boosting activities".to_string());
    }

    let unproductive_days = recent.iter().filter(|e| !e.was_productive).count();
    let negative_mood_days = recent.iter().filter(|e| e.emotional_state >= 4).count();
    let patterns = PatternFlags {
        consistently_long_days: avg_work_hours > 8.0,
        low_productivity: unproductive_days > 3,
        negative_mood: negative_mood_days > 2,
    };

    Some(Forecast {
        avg_risk,
        avg_work_hours,
        avg_mood,
        risk_increasing,
        projected_risk: projected.round() as u8,
        energy_forecast,
        burnout_probability,
        recommendations,
        patterns,
    })
}
