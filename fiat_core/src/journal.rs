//! Reflection journal persistence.
//!
//! Entries are appended to a JSONL (JSON Lines) file with file locking;
//! reads collapse the log to the latest entry per day, which gives the
//! one-entry-per-day upsert semantics callers see. No edit history is
//! surfaced.

use crate::types::JournalEntry;
use crate::Result;
use fs2::FileExt;
use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Entry sink trait for persisting journal entries
pub trait EntrySink {
    fn append(&mut self, entry: &JournalEntry) -> Result<()>;
}

/// JSONL-based journal sink with file locking
pub struct JsonlJournal {
    path: PathBuf,
}

impl JsonlJournal {
    /// Create a new JSONL journal for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl EntrySink for JsonlJournal {
    fn append(&mut self, entry: &JournalEntry) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(entry)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        file.unlock()?;

        tracing::debug!("Appended journal entry for day {}", entry.day);
        Ok(())
    }
}

/// Read the journal, collapsed to the latest entry per day
///
/// Later writes for a day replace earlier ones. Unparseable lines are
/// skipped with a warning rather than failing the whole read.
pub fn read_entries(path: &Path) -> Result<BTreeMap<u32, JournalEntry>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut entries = BTreeMap::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<JournalEntry>(&line) {
            Ok(entry) => {
                entries.insert(entry.day, entry);
            }
            Err(e) => {
                tracing::warn!("Failed to parse journal entry at line {}: {}", line_num + 1, e);
            }
        }
    }

    file.unlock()?;
    tracing::debug!("Read {} journal entries", entries.len());
    Ok(entries)
}

/// The stored entry for one day, if any
pub fn entry_for_day(path: &Path, day: u32) -> Result<Option<JournalEntry>> {
    Ok(read_entries(path)?.remove(&day))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(day: u32, text: &str) -> JournalEntry {
        JournalEntry {
            day,
            text: text.into(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_append_and_read_single_entry() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("journal.jsonl");

        let mut journal = JsonlJournal::new(&path);
        journal.append(&entry(3, "open hands")).unwrap();

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[&3].text, "open hands");
    }

    #[test]
    fn test_upsert_latest_wins() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("journal.jsonl");

        let mut journal = JsonlJournal::new(&path);
        journal.append(&entry(5, "first draft")).unwrap();
        journal.append(&entry(5, "revised")).unwrap();

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[&5].text, "revised");
    }

    #[test]
    fn test_entries_keyed_per_day() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("journal.jsonl");

        let mut journal = JsonlJournal::new(&path);
        journal.append(&entry(2, "day two")).unwrap();
        journal.append(&entry(7, "day seven")).unwrap();
        journal.append(&entry(4, "day four")).unwrap();

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 3);
        // BTreeMap keeps day order
        let days: Vec<u32> = entries.keys().copied().collect();
        assert_eq!(days, vec![2, 4, 7]);
    }

    #[test]
    fn test_entry_for_day() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("journal.jsonl");

        let mut journal = JsonlJournal::new(&path);
        journal.append(&entry(9, "rash judgment")).unwrap();

        assert_eq!(entry_for_day(&path, 9).unwrap().unwrap().text, "rash judgment");
        assert!(entry_for_day(&path, 10).unwrap().is_none());
    }

    #[test]
    fn test_read_empty_journal() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nonexistent.jsonl");

        let entries = read_entries(&path).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_garbled_line_is_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("journal.jsonl");

        let mut journal = JsonlJournal::new(&path);
        journal.append(&entry(1, "kept")).unwrap();

        let mut contents = std::fs::read_to_string(&path).unwrap();
        contents.push_str("not json at all\n");
        std::fs::write(&path, contents).unwrap();

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[&1].text, "kept");
    }
}
