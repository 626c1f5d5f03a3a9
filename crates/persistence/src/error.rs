// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sportsplex::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving a ledger file.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The ledger file could not be read or written.
    #[error("Ledger file {}: {source}", .path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// The ledger contents are not valid JSON records.
    #[error("Ledger serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Two records in the ledger file share an id.
    #[error("Ledger file holds booking ID {0} more than once")]
    DuplicateId(u32),
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<PersistenceError> for CoreError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::DuplicateId(id) => Self::DuplicateRecordId(id),
            other => Self::Storage(other.to_string()),
        }
    }
}
