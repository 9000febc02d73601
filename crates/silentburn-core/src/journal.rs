//! Journal entry store over an injected key-value backend.
//!
//! The journal owns the persisted entry list and the achievement catalog,
//! each under its own key. Entries are kept most-recent-first and truncated
//! to the 90 newest. Saving is an upsert by calendar date: a second save on
//! the same day replaces that day's entry instead of appending. Every save
//! re-evaluates achievements against the fresh history.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::achievements::{self, Achievement};
use crate::entry::JournalEntry;
use crate::error::{Result, StorageError};
use crate::storage::{KeyValueStore, ACHIEVEMENTS_KEY, ENTRIES_KEY};

/// Maximum number of persisted entries; older ones are dropped.
pub const MAX_ENTRIES: usize = 90;

/// Read-only backup bundle produced by [`Journal::export`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub entries: Vec<JournalEntry>,
    pub achievements: Vec<Achievement>,
    pub export_date: DateTime<Utc>,
}

/// Entry and achievement persistence over a [`KeyValueStore`].
pub struct Journal<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> Journal<S> {
    /// Wrap a backing store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist an entry, treating its calendar date as "today".
    pub fn save_entry(&mut self, entry: JournalEntry) -> Result<()> {
        let today = entry.calendar_date();
        self.save_entry_on(entry, today)
    }

    /// Persist an entry with an explicit "today" for streak evaluation.
    ///
    /// Replaces any existing entry on the same calendar date, otherwise
    /// prepends; truncates to [`MAX_ENTRIES`]; then re-evaluates the
    /// achievement catalog and persists it if anything unlocked.
    pub fn save_entry_on(&mut self, entry: JournalEntry, today: NaiveDate) -> Result<()> {
        let mut entries = self.entries()?;

        let day = entry.calendar_date();
        if let Some(pos) = entries.iter().position(|e| e.calendar_date() == day) {
            entries[pos] = entry;
        } else {
            entries.insert(0, entry);
        }
        entries.truncate(MAX_ENTRIES);

        self.write_entries(&entries)?;

        let streak = achievements::streak(&entries, today);
        let mut catalog = self.achievements()?;
        if achievements::check_and_unlock(&mut catalog, &entries, streak, Utc::now()) {
            self.write_achievements(&catalog)?;
        }

        Ok(())
    }

    /// All persisted entries, most-recent-first. Empty when nothing has
    /// been saved yet.
    pub fn entries(&self) -> Result<Vec<JournalEntry>> {
        match self.store.get(ENTRIES_KEY)? {
            None => Ok(Vec::new()),
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| corrupt(ENTRIES_KEY, e).into())
            }
        }
    }

    /// Today's entry, if one was logged.
    pub fn today_entry(&self) -> Result<Option<JournalEntry>> {
        self.today_entry_on(Utc::now().date_naive())
    }

    /// The entry logged on `date`, if any.
    pub fn today_entry_on(&self, date: NaiveDate) -> Result<Option<JournalEntry>> {
        let entries = self.entries()?;
        Ok(entries.into_iter().find(|e| e.calendar_date() == date))
    }

    /// Consecutive logged days ending today.
    pub fn streak(&self) -> Result<u32> {
        self.streak_on(Utc::now().date_naive())
    }

    /// Consecutive logged days ending at `today`.
    pub fn streak_on(&self, today: NaiveDate) -> Result<u32> {
        Ok(achievements::streak(&self.entries()?, today))
    }

    /// The achievement catalog, seeded with the default locked set on
    /// first read.
    pub fn achievements(&self) -> Result<Vec<Achievement>> {
        match self.store.get(ACHIEVEMENTS_KEY)? {
            None => Ok(achievements::default_catalog()),
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| corrupt(ACHIEVEMENTS_KEY, e).into())
            }
        }
    }

    /// Remove all persisted entries. Achievements and settings are
    /// untouched.
    pub fn clear_history(&mut self) -> Result<()> {
        self.store.remove(ENTRIES_KEY)?;
        Ok(())
    }

    /// Build the backup bundle of entries plus achievements.
    pub fn export(&self) -> Result<ExportBundle> {
        Ok(ExportBundle {
            entries: self.entries()?,
            achievements: self.achievements()?,
            export_date: Utc::now(),
        })
    }

    fn write_entries(&mut self, entries: &[JournalEntry]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        self.store.set(ENTRIES_KEY, &raw)?;
        Ok(())
    }

    fn write_achievements(&mut self, catalog: &[Achievement]) -> Result<()> {
        let raw = serde_json::to_string(catalog)?;
        self.store.set(ACHIEVEMENTS_KEY, &raw)?;
        Ok(())
    }
}

fn corrupt(key: &str, err: serde_json::Error) -> StorageError {
    StorageError::Corrupt {
        key: key.to_string(),
        message: err.to_string(),
    }
}
