//! CSV export of the reflection journal.
//!
//! Writes the collapsed per-day entries to a CSV file for use outside the
//! application. Unlike a log rollup, the journal file is left in place:
//! it is the primary store, not a staging area.

use crate::content::ordinal_label;
use crate::Result;
use std::fs::File;
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    day: u32,
    ordinal: String,
    updated_at: String,
    text: String,
}

/// Export journal entries to CSV, returning the number of rows written
///
/// The CSV is truncated and rewritten from the collapsed journal on every
/// call, so repeated exports stay in sync with the journal instead of
/// accumulating duplicate rows. The file is fsynced before returning.
pub fn journal_to_csv(journal_path: &Path, csv_path: &Path) -> Result<usize> {
    let entries = crate::journal::read_entries(journal_path)?;

    if entries.is_empty() {
        tracing::info!("No journal entries to export");
        return Ok(0);
    }

    if let Some(parent) = csv_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(csv_path)?;
    let mut writer = csv::Writer::from_writer(file);

    let count = entries.len();
    for entry in entries.into_values() {
        let row = CsvRow {
            day: entry.day,
            ordinal: ordinal_label(entry.day).unwrap_or_default().to_string(),
            updated_at: entry.updated_at.to_rfc3339(),
            text: entry.text,
        };
        writer.serialize(row)?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Exported {} journal entries to {:?}", count, csv_path);
    Ok(count)
}
