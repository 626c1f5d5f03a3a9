// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! File persistence for the Sportsplex reservation ledger.
//!
//! The ledger is stored as a single JSON array of reservation records.
//!
//! ## Write discipline
//!
//! - The whole file is rewritten after every append or removal
//! - Writes go to `<path>.tmp` first and are renamed over the ledger, so a
//!   crash mid-write leaves the previous contents intact
//! - If a write fails, the in-memory change is rolled back and the ledger
//!   keeps matching what is on disk
//!
//! A missing file is an empty ledger; it is created on the first append.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use sportsplex::{CoreError, ReservationLedger, ReservationRecord};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A reservation ledger backed by a JSON file.
#[derive(Debug)]
pub struct JsonFileLedger {
    path: PathBuf,
    records: Vec<ReservationRecord>,
}

impl JsonFileLedger {
    /// Opens the ledger stored at `path`.
    ///
    /// # Arguments
    ///
    /// * `path` - The ledger file; it need not exist yet
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The contents are not a JSON array of records
    /// - Two records share an id
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path: PathBuf = path.as_ref().to_path_buf();

        let records: Vec<ReservationRecord> = match std::fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => Vec::new(),
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Ledger file not found, starting empty");
                Vec::new()
            }
            Err(err) => return Err(PersistenceError::io(path, err)),
        };

        let mut seen: HashSet<u32> = HashSet::with_capacity(records.len());
        if let Some(duplicate) = records.iter().find(|record| !seen.insert(record.id)) {
            return Err(PersistenceError::DuplicateId(duplicate.id));
        }

        info!(
            path = %path.display(),
            records = records.len(),
            "Opened ledger file"
        );
        Ok(Self { path, records })
    }

    /// Returns the ledger file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes every record to disk, replacing the previous contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be serialized or the file
    /// cannot be written.
    pub fn save(&self) -> Result<(), PersistenceError> {
        let contents: String = serde_json::to_string_pretty(&self.records)?;

        let mut tmp_name: std::ffi::OsString = self.path.clone().into_os_string();
        tmp_name.push(".tmp");
        let tmp_path: PathBuf = PathBuf::from(tmp_name);

        std::fs::write(&tmp_path, contents)
            .map_err(|err| PersistenceError::io(&tmp_path, err))?;
        std::fs::rename(&tmp_path, &self.path)
            .map_err(|err| PersistenceError::io(&self.path, err))?;

        debug!(
            path = %self.path.display(),
            records = self.records.len(),
            "Saved ledger file"
        );
        Ok(())
    }
}

impl ReservationLedger for JsonFileLedger {
    fn records(&self) -> Result<&[ReservationRecord], CoreError> {
        Ok(&self.records)
    }

    fn append(&mut self, record: ReservationRecord) -> Result<(), CoreError> {
        if self.records.iter().any(|existing| existing.id == record.id) {
            return Err(CoreError::DuplicateRecordId(record.id));
        }

        self.records.push(record);
        if let Err(err) = self.save() {
            warn!(%err, "Ledger write failed, dropping appended record");
            self.records.pop();
            return Err(err.into());
        }
        Ok(())
    }

    fn remove(&mut self, id: u32) -> Result<Option<ReservationRecord>, CoreError> {
        let Some(index) = self.records.iter().position(|record| record.id == id) else {
            return Ok(None);
        };

        let removed: ReservationRecord = self.records.remove(index);
        if let Err(err) = self.save() {
            warn!(%err, record_id = id, "Ledger write failed, restoring record");
            self.records.insert(index, removed);
            return Err(err.into());
        }
        Ok(Some(removed))
    }
}
