//! Streak and achievement engine.
//!
//! The streak is a pure function of the set of distinct calendar dates
//! present in the history: it walks backward from today and stops at the
//! first missing date. Multiple same-day entries and out-of-order lists
//! cannot break it.
//!
//! The achievement catalog is fixed at 5 milestones. Each unlocks at most
//! once, is timestamped at the transition, and is never re-locked.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entry::{JournalEntry, RiskLevel};

/// A named milestone with monotonic unlock state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Achievement {
    fn locked(id: &str, title: &str, description: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            unlocked: false,
            unlocked_at: None,
        }
    }
}

/// The fixed catalog, seeded on first read, all locked.
pub fn default_catalog() -> Vec<Achievement> {
    vec![
        Achievement::locked(
            "first_entry",
            "First Step",
            "Complete your first journal entry",
            "🌱",
        ),
        Achievement::locked(
            "week_streak",
            "Week Warrior",
            "Maintain a 7-day streak",
            "🔥",
        ),
        Achievement::locked(
            "month_streak",
            "Monthly Master",
            "Maintain a 30-day streak",
            "👑",
        ),
        Achievement::locked(
            "balanced",
            "Balance Champion",
            "Have 5 consecutive low-risk days",
            "⚖️",
        ),
        // No automatic trigger; unlockable only by a future product surface.
        Achievement::locked(
            "insightful",
            "Self-Aware",
            "Generate 10 insights",
            "💡",
        ),
    ]
}

/// Count consecutive logged calendar days ending at `today`.
///
/// Walks backward from `today` over the set of distinct entry dates and
/// stops at the first missing day. Returns 0 when `today` has no entry.
pub fn streak(entries: &[JournalEntry], today: NaiveDate) -> u32 {
    let dates: HashSet<NaiveDate> = entries.iter().map(|e| e.calendar_date()).collect();

    let mut count = 0;
    let mut day = today;
    while dates.contains(&day) {
        count += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    count
}

/// Evaluate unlock conditions against the current history and streak.
///
/// Mutates the catalog in place, stamping any fresh unlocks with `now`.
/// Returns true if any achievement transitioned, so the caller knows
/// whether to persist. Already-unlocked achievements are never touched.
pub fn check_and_unlock(
    catalog: &mut [Achievement],
    entries: &[JournalEntry],
    streak: u32,
    now: DateTime<Utc>,
) -> bool {
    let mut changed = false;

    for achievement in catalog.iter_mut() {
        if achievement.unlocked {
            continue;
        }

        let met = match achievement.id.as_str() {
            "first_entry" => !entries.is_empty(),
            "week_streak" => streak >= 7,
            "month_streak" => streak >= 30,
            "balanced" => {
                entries.len() >= 5
                    && entries[..5].iter().all(|e| e.risk_level == RiskLevel::Low)
            }
            // "insightful" and any unknown id: dormant
            _ => false,
        };

        if met {
            achievement.unlocked = true;
            achievement.unlocked_at = Some(now);
            changed = true;
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::RiskInputs;
    use chrono::{Duration, TimeZone};

    fn entry_on(date: NaiveDate, risky: bool) -> JournalEntry {
        let at = Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap());
        let inputs = if risky {
            RiskInputs {
                work_hours: 12,
                emotional_state: 5,
                was_productive: false,
                social_connection: 1,
                ..Default::default()
            }
        } else {
            RiskInputs {
                work_hours: 6,
                emotional_state: 1,
                was_productive: true,
                social_connection: 5,
                ..Default::default()
            }
        };
        JournalEntry::compose(inputs, at)
    }

    fn consecutive_entries(today: NaiveDate, days: i64) -> Vec<JournalEntry> {
        (0..days)
            .map(|i| entry_on(today - Duration::days(i), false))
            .collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    #[test]
    fn test_streak_empty_history() {
        assert_eq!(streak(&[], today()), 0);
    }

    #[test]
    fn test_streak_counts_consecutive_days() {
        let entries = consecutive_entries(today(), 4);
        assert_eq!(streak(&entries, today()), 4);
    }

    #[test]
    fn test_streak_stops_at_gap() {
        let mut entries = consecutive_entries(today(), 3);
        // A day beyond the gap does not extend the streak
        entries.push(entry_on(today() - Duration::days(5), false));
        assert_eq!(streak(&entries, today()), 3);
    }

    #[test]
    fn test_streak_zero_without_entry_today() {
        let entries = vec![entry_on(today() - Duration::days(1), false)];
        assert_eq!(streak(&entries, today()), 0);
    }

    #[test]
    fn test_streak_survives_duplicates_and_disorder() {
        let mut entries = consecutive_entries(today(), 3);
        entries.push(entry_on(today(), false)); // duplicate of today
        entries.reverse(); // oldest-first ordering
        assert_eq!(streak(&entries, today()), 3);
    }

    #[test]
    fn test_first_entry_unlocks_on_first_save() {
        let mut catalog = default_catalog();
        let entries = consecutive_entries(today(), 1);
        let now = Utc::now();

        let changed = check_and_unlock(&mut catalog, &entries, 1, now);
        assert!(changed);

        let first = catalog.iter().find(|a| a.id == "first_entry").unwrap();
        assert!(first.unlocked);
        assert_eq!(first.unlocked_at, Some(now));
    }

    #[test]
    fn test_streak_achievements() {
        let mut catalog = default_catalog();
        let entries = consecutive_entries(today(), 7);
        check_and_unlock(&mut catalog, &entries, 7, Utc::now());

        assert!(catalog.iter().find(|a| a.id == "week_streak").unwrap().unlocked);
        assert!(!catalog.iter().find(|a| a.id == "month_streak").unwrap().unlocked);

        let entries = consecutive_entries(today(), 30);
        check_and_unlock(&mut catalog, &entries, 30, Utc::now());
        assert!(catalog.iter().find(|a| a.id == "month_streak").unwrap().unlocked);
    }

    #[test]
    fn test_balanced_requires_five_low_risk() {
        let mut catalog = default_catalog();
        let mut entries = consecutive_entries(today(), 5);
        check_and_unlock(&mut catalog, &entries, 5, Utc::now());
        assert!(catalog.iter().find(|a| a.id == "balanced").unwrap().unlocked);

        // A high-risk entry among the most recent 5 blocks the unlock
        let mut catalog = default_catalog();
        entries[2] = entry_on(today() - Duration::days(2), true);
        check_and_unlock(&mut catalog, &entries, 5, Utc::now());
        assert!(!catalog.iter().find(|a| a.id == "balanced").unwrap().unlocked);
    }

    #[test]
    fn test_insightful_stays_dormant() {
        let mut catalog = default_catalog();
        let entries = consecutive_entries(today(), 40);
        check_and_unlock(&mut catalog, &entries, 40, Utc::now());
        assert!(!catalog.iter().find(|a| a.id == "insightful").unwrap().unlocked);
    }

    #[test]
    fn test_unlock_is_monotonic() {
        let mut catalog = default_catalog();
        let entries = consecutive_entries(today(), 1);
        let first_ts = Utc::now();
        check_and_unlock(&mut catalog, &entries, 1, first_ts);

        // Re-evaluation against an empty history must not re-lock or restamp
        let changed = check_and_unlock(&mut catalog, &[], 0, Utc::now() + Duration::hours(1));
        assert!(!changed);

        let first = catalog.iter().find(|a| a.id == "first_entry").unwrap();
        assert!(first.unlocked);
        assert_eq!(first.unlocked_at, Some(first_ts));
    }
}
