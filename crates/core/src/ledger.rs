// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The reservation ledger: every completed transaction, which doubles as
//! the source of truth for existing court schedules.
//!
//! ## Invariants
//!
//! - Records are immutable once appended; they are only ever removed whole
//! - Schedules are reconstructed by scanning every record on every query,
//!   so a query always reflects the latest appends and removals
//! - Items that do not decode as court bookings are skipped silently

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use sportsplex_domain::{
    CalendarDate, ClockTime, FacilityKind, ItemDescriptor, ReservedSlot, find_clash,
};
use tracing::trace;

/// Id assigned to the first transaction of an empty ledger.
pub const FIRST_RECORD_ID: u32 = 1001;

/// A completed transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationRecord {
    /// The booking id quoted to the customer.
    pub id: u32,
    /// Customer name.
    pub customer_name: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// When the transaction was made (`DD/MM/YYYY HH:MM`).
    pub created_at: String,
    /// Amount paid.
    pub total: f64,
    /// Encoded item descriptors, one per line item.
    pub items: Vec<String>,
}

impl ReservationRecord {
    /// Decodes every item, skipping descriptors that do not decode.
    pub fn decoded_items(&self) -> impl Iterator<Item = ItemDescriptor> + '_ {
        self.items.iter().filter_map(|item| match ItemDescriptor::decode(item) {
            Ok(descriptor) => Some(descriptor),
            Err(err) => {
                trace!(record_id = self.id, %err, "Skipping undecodable item");
                None
            }
        })
    }

    /// Returns the court reservations held by this record.
    pub fn court_bookings(&self) -> impl Iterator<Item = ReservedSlot> + '_ {
        self.decoded_items()
            .filter_map(|descriptor| descriptor.reserved_slot())
    }

    /// Returns whether the transaction was made on `date`.
    #[must_use]
    pub fn made_on(&self, date: CalendarDate) -> bool {
        self.created_at.starts_with(&date.to_string())
    }
}

/// Repository of completed transactions.
///
/// The booking core only reads through this trait; checkout appends and
/// cancellation removes.
pub trait ReservationLedger {
    /// Returns every record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn records(&self) -> Result<&[ReservationRecord], CoreError>;

    /// Appends a record.
    ///
    /// # Errors
    ///
    /// Returns an error if a record with the same id exists or the backing
    /// store cannot be written.
    fn append(&mut self, record: ReservationRecord) -> Result<(), CoreError>;

    /// Removes and returns the record with this id, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn remove(&mut self, id: u32) -> Result<Option<ReservationRecord>, CoreError>;

    /// Returns the id the next appended record should carry.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn next_id(&self) -> Result<u32, CoreError> {
        Ok(self
            .records()?
            .iter()
            .map(|record| record.id)
            .max()
            .map_or(FIRST_RECORD_ID, |id| id.saturating_add(1).max(FIRST_RECORD_ID)))
    }

    /// Returns the court reservations of `facility` on `date`.
    ///
    /// The history is rescanned on every call.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn reservations_on(
        &self,
        facility: FacilityKind,
        date: CalendarDate,
    ) -> Result<impl Iterator<Item = ReservedSlot> + '_, CoreError> {
        let records: &[ReservationRecord] = self.records()?;
        Ok(records
            .iter()
            .flat_map(|record| record.court_bookings())
            .filter(move |slot| slot.facility == facility && slot.date == date))
    }
}

/// Returns the first reservation overlapping `[start, end)` on `facility`
/// and `date`, if any.
///
/// # Errors
///
/// Returns an error if the ledger cannot be read.
pub fn find_conflict<L: ReservationLedger>(
    ledger: &L,
    facility: FacilityKind,
    date: CalendarDate,
    start: ClockTime,
    end: ClockTime,
) -> Result<Option<ReservedSlot>, CoreError> {
    let existing = ledger.reservations_on(facility, date)?;
    Ok(find_clash(facility, date, start, end, existing))
}

/// Returns whether `[start, end)` overlaps an existing reservation of
/// `facility` on `date`.
///
/// # Errors
///
/// Returns an error if the ledger cannot be read.
pub fn has_clash<L: ReservationLedger>(
    ledger: &L,
    facility: FacilityKind,
    date: CalendarDate,
    start: ClockTime,
    end: ClockTime,
) -> Result<bool, CoreError> {
    Ok(find_conflict(ledger, facility, date, start, end)?.is_some())
}

/// Returns every court reservation on `date`, ordered by facility then start.
///
/// # Errors
///
/// Returns an error if the ledger cannot be read.
pub fn schedule_for<L: ReservationLedger>(
    ledger: &L,
    date: CalendarDate,
) -> Result<Vec<ReservedSlot>, CoreError> {
    let mut slots: Vec<ReservedSlot> = ledger
        .records()?
        .iter()
        .flat_map(|record| record.court_bookings())
        .filter(|slot| slot.date == date)
        .collect();
    slots.sort_by_key(|slot| (slot.facility, slot.start, slot.end));
    Ok(slots)
}

/// Returns the records whose transaction was made on `date`.
///
/// # Errors
///
/// Returns an error if the ledger cannot be read.
pub fn records_on<L: ReservationLedger>(
    ledger: &L,
    date: CalendarDate,
) -> Result<Vec<ReservationRecord>, CoreError> {
    Ok(ledger
        .records()?
        .iter()
        .filter(|record| record.made_on(date))
        .cloned()
        .collect())
}

/// A ledger held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    records: Vec<ReservationRecord>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates a ledger preloaded with `records`.
    #[must_use]
    pub const fn with_records(records: Vec<ReservationRecord>) -> Self {
        Self { records }
    }
}

impl ReservationLedger for InMemoryLedger {
    fn records(&self) -> Result<&[ReservationRecord], CoreError> {
        Ok(&self.records)
    }

    fn append(&mut self, record: ReservationRecord) -> Result<(), CoreError> {
        if self.records.iter().any(|existing| existing.id == record.id) {
            return Err(CoreError::DuplicateRecordId(record.id));
        }
        self.records.push(record);
        Ok(())
    }

    fn remove(&mut self, id: u32) -> Result<Option<ReservationRecord>, CoreError> {
        let index: Option<usize> = self.records.iter().position(|record| record.id == id);
        Ok(index.map(|index| self.records.remove(index)))
    }
}
