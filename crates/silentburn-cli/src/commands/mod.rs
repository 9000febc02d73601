pub mod achievements;
pub mod insights;
pub mod journal;
pub mod stats;
pub mod tips;

use silentburn_core::{FileStore, Journal};

/// Open the journal over the default data directory.
pub fn open_journal() -> Result<Journal<FileStore>, Box<dyn std::error::Error>> {
    Ok(Journal::new(FileStore::open()?))
}
