// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sportsplex_domain::{DomainError, ReservedSlot};

/// Errors that can occur while reading or changing the ledger and cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// Checkout was attempted with nothing in the cart.
    EmptyCart,
    /// No reservation record carries this id.
    RecordNotFound(u32),
    /// A reservation record with this id already exists.
    DuplicateRecordId(u32),
    /// A court booking overlaps an existing reservation.
    ScheduleConflict {
        /// The window being committed.
        requested: ReservedSlot,
        /// The reservation it overlaps.
        existing: ReservedSlot,
    },
    /// The ledger's backing store failed.
    Storage(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::EmptyCart => write!(f, "Cart is empty"),
            Self::RecordNotFound(id) => write!(f, "Booking ID {id} not found"),
            Self::DuplicateRecordId(id) => write!(f, "Booking ID {id} already exists"),
            Self::ScheduleConflict {
                requested,
                existing,
            } => write!(
                f,
                "{} on {} at {}-{} overlaps existing booking {}-{}",
                requested.facility,
                requested.date,
                requested.start,
                requested.end,
                existing.start,
                existing.end
            ),
            Self::Storage(msg) => write!(f, "Ledger storage error: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
