// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time windows on a facility and the rules a new booking must satisfy.

use crate::error::DomainError;
use crate::rates::FacilityKind;
use crate::time_model::{CalendarDate, ClockTime};

/// Opening time, in minutes after midnight (10:00).
pub const OPENING_MINUTES: u16 = 10 * 60;

/// Closing time, in minutes after midnight (22:00).
pub const CLOSING_MINUTES: u16 = 22 * 60;

/// Shortest bookable window, in minutes.
pub const MIN_BOOKING_MINUTES: u16 = 60;

/// An existing reservation of a facility, as recovered from the ledger.
///
/// Historical slots are taken as recorded; only the `HHMM` validity of
/// their bounds is checked when they are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReservedSlot {
    /// The reserved facility.
    pub facility: FacilityKind,
    /// The reserved day.
    pub date: CalendarDate,
    /// Start of the reservation (inclusive).
    pub start: ClockTime,
    /// End of the reservation (exclusive).
    pub end: ClockTime,
}

impl ReservedSlot {
    /// Returns whether `[start, end)` overlaps this slot.
    ///
    /// Touching windows (`end == self.start` or `start == self.end`) do not overlap.
    #[must_use]
    pub fn overlaps(&self, start: ClockTime, end: ClockTime) -> bool {
        !(end <= self.start || start >= self.end)
    }
}

/// A validated request for a facility time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    facility: FacilityKind,
    date: CalendarDate,
    start: ClockTime,
    end: ClockTime,
}

impl TimeInterval {
    /// Returns the facility.
    #[must_use]
    pub const fn facility(&self) -> FacilityKind {
        self.facility
    }

    /// Returns the day.
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Returns the start time.
    #[must_use]
    pub const fn start(&self) -> ClockTime {
        self.start
    }

    /// Returns the end time.
    #[must_use]
    pub const fn end(&self) -> ClockTime {
        self.end
    }

    /// Returns the length of the window in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> u16 {
        self.end.to_minutes() - self.start.to_minutes()
    }

    /// Returns the length of the window in (possibly fractional) hours.
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        f64::from(self.duration_minutes()) / 60.0
    }

    /// Returns the window as a reservation slot.
    #[must_use]
    pub const fn as_slot(&self) -> ReservedSlot {
        ReservedSlot {
            facility: self.facility,
            date: self.date,
            start: self.start,
            end: self.end,
        }
    }
}

/// Validates a requested time window on an hourly facility.
///
/// Rules are checked in this order, and the first failure is returned:
/// 1. The facility must be booked by the hour
/// 2. The start must be within 10:00-22:00 and the end no later than 22:00
/// 3. The end must be after the start
/// 4. The window must be at least 60 minutes long
///
/// # Errors
///
/// Returns the `DomainError` for the first rule that fails.
pub fn validate_time_window(
    facility: FacilityKind,
    date: CalendarDate,
    start: ClockTime,
    end: ClockTime,
) -> Result<TimeInterval, DomainError> {
    if !facility.is_hourly() {
        return Err(DomainError::NotHourlyFacility(facility));
    }

    // Rule: inside operation hours
    if start.to_minutes() < OPENING_MINUTES
        || start.to_minutes() > CLOSING_MINUTES
        || end.to_minutes() > CLOSING_MINUTES
    {
        return Err(DomainError::OutsideOperatingHours { start, end });
    }

    // Rule: end after start
    if end <= start {
        return Err(DomainError::EndNotAfterStart { start, end });
    }

    // Rule: minimum length
    let minutes: u16 = end.to_minutes() - start.to_minutes();
    if minutes < MIN_BOOKING_MINUTES {
        return Err(DomainError::BelowMinimumDuration {
            minutes,
            minimum: MIN_BOOKING_MINUTES,
        });
    }

    Ok(TimeInterval {
        facility,
        date,
        start,
        end,
    })
}

/// Validates that a same-day booking starts strictly after the current minute.
///
/// # Errors
///
/// Returns `DomainError::StartTimePassed` if `start` is at or before `now`.
pub fn validate_not_started(start: ClockTime, now: ClockTime) -> Result<(), DomainError> {
    if start <= now {
        return Err(DomainError::StartTimePassed { start, now });
    }
    Ok(())
}

/// Validates that `date` is today or later.
///
/// # Errors
///
/// Returns `DomainError::DateInPast` if `date` is before `today`.
pub fn validate_bookable_date(date: CalendarDate, today: CalendarDate) -> Result<(), DomainError> {
    if date < today {
        return Err(DomainError::DateInPast { date, today });
    }
    Ok(())
}
