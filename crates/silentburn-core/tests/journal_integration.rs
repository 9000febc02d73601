//! Integration tests for the full journaling workflow on file storage.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use silentburn_core::storage::{ACHIEVEMENTS_KEY, ENTRIES_KEY};
use silentburn_core::{
    forecast, generate_insights, weekly_stats, FileStore, Journal, JournalEntry, KeyValueStore,
    RiskInputs, RiskLevel, MAX_ENTRIES,
};

fn entry_for(date: NaiveDate, inputs: RiskInputs) -> JournalEntry {
    let at = Utc.from_utc_datetime(&date.and_hms_opt(19, 0, 0).unwrap());
    JournalEntry::compose(inputs, at)
}

fn heavy_day() -> RiskInputs {
    RiskInputs {
        work_hours: 10,
        emotional_state: 4,
        was_productive: false,
        social_connection: 2,
        sleep_quality: Some(2),
        text_summary: "completely drained after the release".to_string(),
        stress_triggers: vec!["deadline".to_string()],
        ..Default::default()
    }
}

fn light_day() -> RiskInputs {
    RiskInputs {
        work_hours: 6,
        emotional_state: 1,
        was_productive: true,
        social_connection: 5,
        text_summary: "good, balanced day".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_full_journaling_workflow() {
    let temp = tempfile::tempdir().unwrap();
    let store = FileStore::with_dir(temp.path().to_path_buf());
    let mut journal = Journal::new(store);

    let today = NaiveDate::from_ymd_opt(2026, 7, 10).unwrap();

    // A week of alternating days, oldest first
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        let inputs = if offset % 2 == 0 { heavy_day() } else { light_day() };
        journal.save_entry_on(entry_for(date, inputs), today).unwrap();
    }

    let entries = journal.entries().unwrap();
    assert_eq!(entries.len(), 7);
    assert_eq!(entries[0].calendar_date(), today);

    // Heavy day scoring: 20+25+15+20+20+15+5 = 120 -> clamped
    assert_eq!(entries[0].risk_score, 100);
    assert_eq!(entries[0].risk_level, RiskLevel::High);
    assert_eq!(entries[1].risk_level, RiskLevel::Low);

    assert_eq!(journal.streak_on(today).unwrap(), 7);

    // Week streak and first entry unlocked, persisted to its own key
    let unlocked: Vec<_> = journal
        .achievements()
        .unwrap()
        .into_iter()
        .filter(|a| a.unlocked)
        .map(|a| a.id)
        .collect();
    assert!(unlocked.contains(&"first_entry".to_string()));
    assert!(unlocked.contains(&"week_streak".to_string()));
    assert!(temp.path().join(format!("{ACHIEVEMENTS_KEY}.json")).exists());

    // Derived analytics run off the same history
    let insights = generate_insights(&entries);
    assert!(insights
        .iter()
        .any(|i| i.title == "Great Consistency"));

    let f = forecast(&entries).unwrap();
    assert!(f.projected_risk <= 100);

    let stats = weekly_stats(&entries, today);
    assert_eq!(stats.entries_count, 7);
    assert_eq!(stats.streak, 7);

    // Export carries both keys plus a timestamp
    let bundle = journal.export().unwrap();
    assert_eq!(bundle.entries.len(), 7);
    assert_eq!(bundle.achievements.len(), 5);
}

#[test]
fn test_history_cap_and_clear_on_disk() {
    let temp = tempfile::tempdir().unwrap();
    let store = FileStore::with_dir(temp.path().to_path_buf());
    let mut journal = Journal::new(store);

    let today = NaiveDate::from_ymd_opt(2026, 7, 10).unwrap();
    for offset in (0..91).rev() {
        let date = today - Duration::days(offset);
        journal.save_entry_on(entry_for(date, light_day()), today).unwrap();
    }

    assert_eq!(journal.entries().unwrap().len(), MAX_ENTRIES);

    journal.clear_history().unwrap();
    assert!(journal.entries().unwrap().is_empty());
    assert!(!temp.path().join(format!("{ENTRIES_KEY}.json")).exists());

    // Achievements survive a history wipe
    let first = journal
        .achievements()
        .unwrap()
        .into_iter()
        .find(|a| a.id == "first_entry")
        .unwrap();
    assert!(first.unlocked);
}

#[test]
fn test_reopen_reads_persisted_state() {
    let temp = tempfile::tempdir().unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 7, 10).unwrap();

    {
        let store = FileStore::with_dir(temp.path().to_path_buf());
        let mut journal = Journal::new(store);
        journal.save_entry_on(entry_for(today, heavy_day()), today).unwrap();
    }

    let store = FileStore::with_dir(temp.path().to_path_buf());
    let journal = Journal::new(store);
    let entries = journal.entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].risk_level, RiskLevel::High);
    assert_eq!(entries[0].text_summary, "completely drained after the release");
}

#[test]
fn test_corrupt_file_is_a_hard_error() {
    let temp = tempfile::tempdir().unwrap();
    let mut store = FileStore::with_dir(temp.path().to_path_buf());
    store.set(ENTRIES_KEY, "{ definitely not an entry list").unwrap();

    let journal = Journal::new(store);
    assert!(journal.entries().is_err());
}
