//! Journey store persistence with file locking.
//!
//! The store holds every journey ever begun (historical runs are kept);
//! the active journey is the most recently created one that has not been
//! completed. Saves are atomic: write to a temp file, sync, rename.

use crate::types::Journey;
use crate::{Error, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// All journeys, persisted as a single JSON document
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct JourneyStore {
    pub journeys: Vec<Journey>,
}

impl JourneyStore {
    /// The active journey: most recently created and not yet completed
    pub fn active(&self) -> Option<&Journey> {
        self.journeys
            .iter()
            .filter(|j| !j.is_completed)
            .max_by_key(|j| j.created_at)
    }

    /// Mutable access to the active journey
    pub fn active_mut(&mut self) -> Option<&mut Journey> {
        self.journeys
            .iter_mut()
            .filter(|j| !j.is_completed)
            .max_by_key(|j| j.created_at)
    }

    /// Add a new journey to the store
    pub fn push(&mut self, journey: Journey) {
        self.journeys.push(journey);
    }

    /// Drop the active journey without completing it (explicit restart)
    ///
    /// Returns the discarded journey, if there was one.
    pub fn discard_active(&mut self) -> Option<Journey> {
        let id = self.active()?.id;
        let idx = self.journeys.iter().position(|j| j.id == id)?;
        Some(self.journeys.remove(idx))
    }

    /// Load the store from a file with shared locking
    ///
    /// A missing file yields an empty store. An unreadable or corrupt
    /// file is an error: a store may hold weeks of progress, and starting
    /// fresh over a parse failure would silently discard it.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No journey store found, starting empty");
            return Ok(Self::default());
        }

        let file = File::open(path)?;
        file.lock_shared()?;

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        let read_result = reader.read_to_string(&mut contents);
        file.unlock()?;
        read_result?;

        let store = serde_json::from_str::<JourneyStore>(&contents).map_err(|e| {
            Error::State(format!("Journey store {:?} failed to parse: {}", path, e))
        })?;

        tracing::debug!("Loaded {} journeys from {:?}", store.journeys.len(), path);
        Ok(store)
    }

    /// Save the store to a file with exclusive locking
    ///
    /// Atomically writes by:
    /// 1. Writing to a temp file
    /// 2. Syncing to disk
    /// 3. Renaming over the original
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Unique temp file in the same directory for atomic rename
        let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "store path missing parent")
        })?)?;

        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved {} journeys to {:?}", self.journeys.len(), path);
        Ok(())
    }

    /// Load the store, modify it, and save it back
    ///
    /// On any failure the on-disk store is untouched and the error is
    /// returned; nothing partial is persisted.
    pub fn update<F>(path: &Path, f: F) -> Result<Self>
    where
        F: FnOnce(&mut JourneyStore) -> Result<()>,
    {
        let mut store = Self::load(path)?;
        f(&mut store)?;
        store.save(path)?;
        Ok(store)
    }
}
