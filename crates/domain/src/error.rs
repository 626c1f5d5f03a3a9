// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::rates::FacilityKind;
use crate::time_model::{CalendarDate, ClockTime};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A clock literal could not be parsed as `HHMM`.
    InvalidClockTime {
        /// The rejected input.
        input: String,
        /// Why the input was rejected.
        reason: &'static str,
    },
    /// A calendar date could not be parsed or does not exist.
    InvalidDate {
        /// The rejected input.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },
    /// The year lies outside the supported calendar range.
    DateOutOfRange {
        /// The offending year.
        year: i32,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// The requested window starts before opening or ends after closing.
    OutsideOperatingHours {
        /// Requested start.
        start: ClockTime,
        /// Requested end.
        end: ClockTime,
    },
    /// The requested window ends at or before its start.
    EndNotAfterStart {
        /// Requested start.
        start: ClockTime,
        /// Requested end.
        end: ClockTime,
    },
    /// The requested window is shorter than the minimum booking length.
    BelowMinimumDuration {
        /// The requested length in minutes.
        minutes: u16,
        /// The minimum length in minutes.
        minimum: u16,
    },
    /// A same-day booking starts at or before the current time.
    StartTimePassed {
        /// Requested start.
        start: ClockTime,
        /// Current wall-clock time.
        now: ClockTime,
    },
    /// The requested day is already over.
    DateInPast {
        /// Requested day.
        date: CalendarDate,
        /// Current day.
        today: CalendarDate,
    },
    /// The facility is not booked by the hour.
    NotHourlyFacility(FacilityKind),
    /// The facility is not sold as a per-entry pass.
    NotEntryFacility(FacilityKind),
    /// No facility carries this display name.
    UnknownFacility(String),
    /// The item descriptor does not match any known line-item form.
    UnrecognizedDescriptor(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidClockTime { input, reason } => {
                write!(f, "Invalid time '{input}': {reason}")
            }
            Self::InvalidDate { input, reason } => write!(f, "Invalid date '{input}': {reason}"),
            Self::DateOutOfRange { year } => {
                write!(f, "Year {year} is outside the supported range 1900-2100")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::OutsideOperatingHours { start, end } => {
                write!(
                    f,
                    "Requested time {start}-{end} is outside operation hours (1000-2200)"
                )
            }
            Self::EndNotAfterStart { start, end } => {
                write!(f, "End time {end} must be after start time {start}")
            }
            Self::BelowMinimumDuration { minutes, minimum } => {
                write!(
                    f,
                    "Booking of {minutes} minutes is below the minimum of {minimum} minutes"
                )
            }
            Self::StartTimePassed { start, now } => {
                write!(
                    f,
                    "Start time {start} has already passed for today (now {now})"
                )
            }
            Self::DateInPast { date, today } => {
                write!(f, "Date {date} is before today ({today})")
            }
            Self::NotHourlyFacility(kind) => {
                write!(f, "{kind} is not booked by the hour")
            }
            Self::NotEntryFacility(kind) => {
                write!(f, "{kind} is not sold as an entry pass")
            }
            Self::UnknownFacility(name) => write!(f, "Unknown facility '{name}'"),
            Self::UnrecognizedDescriptor(text) => {
                write!(f, "Unrecognized item descriptor '{text}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
