//! Burnout risk scoring heuristic.
//!
//! An additive point system over a day's self-reported signals, clamped to
//! [0, 100]. The point table and level thresholds are exact contracts: the
//! score drives the level, wellness tips, and heatmap bucketing, so any
//! change shifts every downstream surface.
//!
//! | Factor | Condition | Points |
//! |--------|-----------|--------|
//! | Work hours | >= 10 | +20 |
//! | Work hours | >= 8 | +10 |
//! | Emotional state | >= 4 | +25 |
//! | Emotional state | == 3 | +15 |
//! | Energy level | >= 4 | +15 |
//! | Energy level | == 3 | +8 |
//! | Sleep quality | <= 2 | +20 |
//! | Sleep quality | == 3 | +10 |
//! | Not productive | | +15 |
//! | Social connection | <= 2 | +20 |
//! | Social connection | == 3 | +10 |
//! | Negative keyword in summary | | +15 |
//! | Positive keyword in summary | | -10 |
//! | Stress triggers | | +5 each |

use crate::entry::{RiskInputs, RiskLevel};

/// Keywords that raise the score when found in the day's summary
/// (case-insensitive substring match).
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "tired",
    "done",
    "can't",
    "overwhelmed",
    "exhausted",
    "burned",
    "stressed",
    "drained",
];

/// Keywords that lower the score when found in the day's summary.
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "great",
    "good",
    "energized",
    "focused",
    "accomplished",
    "productive",
    "balanced",
];

/// Canonical stress trigger labels offered by the journal form. Scoring
/// only counts selected triggers; it does not validate against this list.
pub const STRESS_TRIGGERS: &[&str] = &[
    "deadline",
    "meeting",
    "client",
    "pressure",
    "urgent",
    "crisis",
    "conflict",
];

/// Map a day's inputs to a risk score in [0, 100].
///
/// Pure and deterministic. Absent optional fields contribute nothing.
pub fn calculate_risk_score(inputs: &RiskInputs) -> u8 {
    let mut score: i32 = 0;

    if inputs.work_hours >= 10 {
        score += 20;
    } else if inputs.work_hours >= 8 {
        score += 10;
    }

    if inputs.emotional_state >= 4 {
        score += 25;
    } else if inputs.emotional_state == 3 {
        score += 15;
    }

    match inputs.energy_level {
        Some(level) if level >= 4 => score += 15,
        Some(3) => score += 8,
        _ => {}
    }

    match inputs.sleep_quality {
        Some(quality) if quality <= 2 => score += 20,
        Some(3) => score += 10,
        _ => {}
    }

    if !inputs.was_productive {
        score += 15;
    }

    if inputs.social_connection <= 2 {
        score += 20;
    } else if inputs.social_connection == 3 {
        score += 10;
    }

    let summary = inputs.text_summary.to_lowercase();
    if NEGATIVE_KEYWORDS.iter().any(|kw| summary.contains(kw)) {
        score += 15;
    }
    if POSITIVE_KEYWORDS.iter().any(|kw| summary.contains(kw)) {
        score -= 10;
    }

    score += inputs.stress_triggers.len() as i32 * 5;

    score.clamp(0, 100) as u8
}

/// Map a score to its risk level: <=30 low, 31-65 medium, >=66 high.
pub fn risk_level(score: u8) -> RiskLevel {
    if score <= 30 {
        RiskLevel::Low
    } else if score <= 65 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}
