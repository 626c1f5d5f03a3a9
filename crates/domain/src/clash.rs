// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Clash detection between a requested window and existing reservations.
//!
//! ## Invariants
//!
//! - Intervals are half-open: `[start, end)`
//! - Back-to-back reservations never clash
//! - Only reservations of the same facility on the same date are compared
//! - The scan stops at the first overlap; there is no tolerance or priority

use crate::interval::ReservedSlot;
use crate::rates::FacilityKind;
use crate::time_model::{CalendarDate, ClockTime};

/// Finds the first existing reservation that overlaps `[start, end)`.
///
/// Slots for other facilities or other dates are skipped, so callers may
/// pass an unfiltered history.
///
/// # Arguments
///
/// * `facility` - The requested facility
/// * `date` - The requested day
/// * `start` - Requested start (inclusive)
/// * `end` - Requested end (exclusive)
/// * `existing` - Reservations to check against
///
/// # Returns
///
/// The first overlapping slot, or `None` if the window is free.
pub fn find_clash<I>(
    facility: FacilityKind,
    date: CalendarDate,
    start: ClockTime,
    end: ClockTime,
    existing: I,
) -> Option<ReservedSlot>
where
    I: IntoIterator<Item = ReservedSlot>,
{
    existing
        .into_iter()
        .filter(|slot| slot.facility == facility && slot.date == date)
        .find(|slot| slot.overlaps(start, end))
}

/// Returns whether `[start, end)` overlaps any existing reservation of the
/// same facility on the same date.
pub fn has_clash<I>(
    facility: FacilityKind,
    date: CalendarDate,
    start: ClockTime,
    end: ClockTime,
    existing: I,
) -> bool
where
    I: IntoIterator<Item = ReservedSlot>,
{
    find_clash(facility, date, start, end, existing).is_some()
}
