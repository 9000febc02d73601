//! # Silentburn Core Library
//!
//! This library provides the core logic for Silentburn, a personal burnout
//! journaling tool. It implements a CLI-first philosophy where all operations
//! are available via a standalone CLI binary, with any GUI being a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Risk Calculator**: A pure additive point system mapping a day's
//!   self-reported signals to a 0-100 score and a coarse risk level
//! - **Journal**: Entry persistence over an injected key-value store,
//!   capped at the 90 most recent entries
//! - **Achievements**: Streak derivation and a fixed milestone catalog
//!   re-evaluated on every save
//! - **Analytics**: Insights, next-day forecast, weekly stats, and heatmap
//!   bucketing derived read-only from recent history
//!
//! ## Key Components
//!
//! - [`calculate_risk_score`]: Scoring heuristic
//! - [`Journal`]: Entry and achievement persistence
//! - [`generate_insights`] / [`forecast`]: Derived analytics
//! - [`KeyValueStore`]: Persistence capability trait

pub mod achievements;
pub mod entry;
pub mod error;
pub mod forecast;
pub mod insights;
pub mod journal;
pub mod risk;
pub mod stats;
pub mod storage;
pub mod tips;

pub use achievements::{streak, Achievement};
pub use entry::{JournalEntry, RiskInputs, RiskLevel};
pub use error::{CoreError, Result, StorageError};
pub use forecast::{forecast, Forecast, ForecastLabel, PatternFlags};
pub use insights::{generate_insights, Insight, InsightKind};
pub use journal::{ExportBundle, Journal, MAX_ENTRIES};
pub use risk::{calculate_risk_score, risk_level};
pub use stats::{heat_bucket, weekly_stats, MoodTrend, WeeklyStats};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use tips::{random_tip, tips_by_category, TipCategory, WellnessTip};
