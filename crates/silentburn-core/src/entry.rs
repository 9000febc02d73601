//! Journal entry model.
//!
//! A [`JournalEntry`] is one user submission for a calendar day. It is
//! composed from raw [`RiskInputs`] at save time; the risk score and level
//! are computed once during composition and never mutated afterwards.
//!
//! Persisted fields use camelCase names so on-disk records and export
//! bundles keep the original application's record shape.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::risk::{calculate_risk_score, risk_level};

/// Minimum work hours the form accepts.
pub const MIN_WORK_HOURS: u32 = 4;
/// Maximum work hours the form accepts.
pub const MAX_WORK_HOURS: u32 = 12;

/// Coarse 3-bucket risk category derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// Raw self-reported signals for one day.
///
/// Ratings are on a 1-5 scale. Emotional state runs 1 = best mood to
/// 5 = worst; sleep quality runs 1 = worst to 5 = best. Optional fields
/// contribute nothing to the score when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskInputs {
    /// Hours worked today
    pub work_hours: u32,

    /// Mood rating, 1 (best) to 5 (worst)
    pub emotional_state: u8,

    /// Whether today felt productive
    pub was_productive: bool,

    /// Social connection rating, 1 (isolated) to 5 (well-connected)
    pub social_connection: u8,

    /// Energy drain rating, 1-5, optional
    pub energy_level: Option<u8>,

    /// Sleep quality rating, 1 (worst) to 5 (best), optional
    pub sleep_quality: Option<u8>,

    /// Free-text summary of the day
    pub text_summary: String,

    /// Selected stress trigger labels
    pub stress_triggers: Vec<String>,
}

impl RiskInputs {
    /// Clamp all fields into their form domains: work hours into
    /// [`MIN_WORK_HOURS`]..=[`MAX_WORK_HOURS`], ratings into 1..=5.
    pub fn clamped(mut self) -> Self {
        self.work_hours = self.work_hours.clamp(MIN_WORK_HOURS, MAX_WORK_HOURS);
        self.emotional_state = self.emotional_state.clamp(1, 5);
        self.social_connection = self.social_connection.clamp(1, 5);
        self.energy_level = self.energy_level.map(|v| v.clamp(1, 5));
        self.sleep_quality = self.sleep_quality.map(|v| v.clamp(1, 5));
        self
    }
}

/// One persisted journal submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Opaque unique identifier
    pub id: String,

    /// Creation instant
    pub date: DateTime<Utc>,

    /// Hours worked, clamped to [4, 12]
    pub work_hours: u32,

    /// Mood rating, 1 (best) to 5 (worst)
    pub emotional_state: u8,

    /// Whether the day felt productive
    pub was_productive: bool,

    /// Social connection rating, 1-5
    pub social_connection: u8,

    /// Energy drain rating, 1-5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<u8>,

    /// Sleep quality rating, 1-5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<u8>,

    /// Free-text summary of the day
    #[serde(default)]
    pub text_summary: String,

    /// Selected stress trigger labels
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stress_triggers: Vec<String>,

    /// Risk score computed at save time, 0-100
    pub risk_score: u8,

    /// Risk level derived from the score at save time
    pub risk_level: RiskLevel,
}

impl JournalEntry {
    /// Compose an entry from raw inputs at a given instant.
    ///
    /// Inputs are domain-clamped first, then scored. The resulting score
    /// and level are immutable for the lifetime of the entry.
    pub fn compose(inputs: RiskInputs, at: DateTime<Utc>) -> Self {
        let inputs = inputs.clamped();
        let score = calculate_risk_score(&inputs);
        Self {
            id: Uuid::new_v4().to_string(),
            date: at,
            work_hours: inputs.work_hours,
            emotional_state: inputs.emotional_state,
            was_productive: inputs.was_productive,
            social_connection: inputs.social_connection,
            energy_level: inputs.energy_level,
            sleep_quality: inputs.sleep_quality,
            text_summary: inputs.text_summary,
            stress_triggers: inputs.stress_triggers,
            risk_score: score,
            risk_level: risk_level(score),
        }
    }

    /// Compose an entry from raw inputs at the current instant.
    pub fn new(inputs: RiskInputs) -> Self {
        Self::compose(inputs, Utc::now())
    }

    /// Calendar day this entry belongs to (UTC, day granularity).
    pub fn calendar_date(&self) -> NaiveDate {
        self.date.date_naive()
    }
}
