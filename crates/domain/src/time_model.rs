// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Clock values and calendar dates used by the booking flow.
//!
//! ## Invariants
//!
//! - A `ClockTime` is always within `0..=1439` minutes after midnight
//! - A `CalendarDate` always names a real Gregorian day in `1900..=2100`
//! - External forms are `HHMM` for clock values and `DD/MM/YYYY` for dates

use crate::error::DomainError;
use std::str::FromStr;
use time::{Date, Duration, Month, Weekday};

/// Earliest supported calendar year.
pub const MIN_YEAR: i32 = 1900;

/// Latest supported calendar year.
pub const MAX_YEAR: i32 = 2100;

/// A wall-clock time of day with minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    /// Minutes since midnight.
    minutes: u16,
}

impl ClockTime {
    /// Parses an `HHMM` literal.
    ///
    /// Leading zeros are optional, so `"930"` and `"0930"` are both 09:30.
    ///
    /// # Arguments
    ///
    /// * `text` - The literal to parse (surrounding whitespace is ignored)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The literal is not 3 or 4 ASCII digits
    /// - The hour is greater than 23
    /// - The minute is greater than 59
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let trimmed: &str = text.trim();

        // Rule: 3 or 4 digits, nothing else
        if !(3..=4).contains(&trimmed.len()) || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidClockTime {
                input: trimmed.to_string(),
                reason: "expected 3 or 4 digits in HHMM form",
            });
        }

        let hhmm: u16 = trimmed
            .parse()
            .map_err(|_| DomainError::InvalidClockTime {
                input: trimmed.to_string(),
                reason: "not a number",
            })?;

        Self::from_hhmm(hhmm).map_err(|err| match err {
            DomainError::InvalidClockTime { reason, .. } => DomainError::InvalidClockTime {
                input: trimmed.to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Builds a clock value from its numeric `HHMM` form (e.g. `1330`).
    ///
    /// # Errors
    ///
    /// Returns an error if the hour is greater than 23 or the minute is greater than 59.
    pub fn from_hhmm(hhmm: u16) -> Result<Self, DomainError> {
        let hour: u16 = hhmm / 100;
        let minute: u16 = hhmm % 100;

        if hour > 23 {
            return Err(DomainError::InvalidClockTime {
                input: hhmm.to_string(),
                reason: "hour must be between 00 and 23",
            });
        }
        if minute > 59 {
            return Err(DomainError::InvalidClockTime {
                input: hhmm.to_string(),
                reason: "minute must be between 00 and 59",
            });
        }

        Ok(Self {
            minutes: hour * 60 + minute,
        })
    }

    /// Builds a clock value from an hour and minute.
    ///
    /// # Errors
    ///
    /// Returns an error if the hour is greater than 23 or the minute is greater than 59.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, DomainError> {
        if hour > 23 {
            return Err(DomainError::InvalidClockTime {
                input: format!("{hour}:{minute}"),
                reason: "hour must be between 00 and 23",
            });
        }
        if minute > 59 {
            return Err(DomainError::InvalidClockTime {
                input: format!("{hour}:{minute}"),
                reason: "minute must be between 00 and 59",
            });
        }

        Ok(Self {
            minutes: u16::from(hour) * 60 + u16::from(minute),
        })
    }

    /// Returns the number of minutes since midnight.
    #[must_use]
    pub const fn to_minutes(self) -> u16 {
        self.minutes
    }

    /// Returns the hour component (0-23).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hour(self) -> u8 {
        (self.minutes / 60) as u8
    }

    /// Returns the minute component (0-59).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn minute(self) -> u8 {
        (self.minutes % 60) as u8
    }

    /// Returns the numeric `HHMM` form (e.g. `930` for 09:30).
    #[must_use]
    pub const fn hhmm(self) -> u16 {
        (self.minutes / 60) * 100 + self.minutes % 60
    }

    /// Returns the signed distance in minutes from `self` to `later`.
    #[must_use]
    pub fn minutes_until(self, later: Self) -> i32 {
        i32::from(later.minutes) - i32::from(self.minutes)
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A calendar day in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(Date);

impl CalendarDate {
    /// Parses a strict `DD/MM/YYYY` date.
    ///
    /// # Arguments
    ///
    /// * `text` - The date literal, exactly 10 characters with `/` separators
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The literal is not `DD/MM/YYYY` with fixed-width numeric fields
    /// - The year is outside 1900-2100
    /// - The day does not exist in that month (leap years included)
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let bytes: &[u8] = text.as_bytes();
        let well_formed: bool = bytes.len() == 10
            && bytes[2] == b'/'
            && bytes[5] == b'/'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());

        if !well_formed {
            return Err(DomainError::InvalidDate {
                input: text.to_string(),
                reason: String::from("expected DD/MM/YYYY"),
            });
        }

        let field_error = |_| DomainError::InvalidDate {
            input: text.to_string(),
            reason: String::from("expected DD/MM/YYYY"),
        };
        let day: u8 = text[0..2].parse().map_err(field_error)?;
        let month: u8 = text[3..5].parse().map_err(field_error)?;
        let year: i32 = text[6..10].parse().map_err(field_error)?;

        Self::from_dmy(day, month, year).map_err(|err| match err {
            DomainError::InvalidDate { reason, .. } => DomainError::InvalidDate {
                input: text.to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Builds a date from day, month and year.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside 1900-2100 or the day does not
    /// exist in the given month.
    pub fn from_dmy(day: u8, month: u8, year: i32) -> Result<Self, DomainError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DomainError::DateOutOfRange { year });
        }

        let month: Month = Month::try_from(month).map_err(|_| DomainError::InvalidDate {
            input: format!("{day:02}/{month:02}/{year:04}"),
            reason: String::from("month must be between 01 and 12"),
        })?;

        let date: Date =
            Date::from_calendar_date(year, month, day).map_err(|_| DomainError::InvalidDate {
                input: format!("{day:02}/{:02}/{year:04}", u8::from(month)),
                reason: format!("{month} {year} has no day {day}"),
            })?;

        Ok(Self(date))
    }

    /// Wraps a `time::Date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside 1900-2100.
    pub fn from_date(date: Date) -> Result<Self, DomainError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            return Err(DomainError::DateOutOfRange { year: date.year() });
        }
        Ok(Self(date))
    }

    /// Returns the underlying `time::Date`.
    #[must_use]
    pub const fn date(self) -> Date {
        self.0
    }

    /// Returns the day of the month (1-31).
    #[must_use]
    pub const fn day(self) -> u8 {
        self.0.day()
    }

    /// Returns the month (1-12).
    #[must_use]
    pub const fn month(self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the day of the week.
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Returns whether the date falls on a Saturday or Sunday.
    #[must_use]
    pub const fn is_weekend(self) -> bool {
        matches!(self.0.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// Returns the date `days` days away (negative values go backwards).
    ///
    /// # Errors
    ///
    /// Returns an error if the result leaves the supported calendar range.
    pub fn offset_days(self, days: i64) -> Result<Self, DomainError> {
        let shifted: Date =
            self.0
                .checked_add(Duration::days(days))
                .ok_or_else(|| DomainError::DateArithmeticOverflow {
                    operation: format!("offsetting {self} by {days} days"),
                })?;
        Self::from_date(shifted)
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:04}",
            self.day(),
            self.month(),
            self.year()
        )
    }
}

impl FromStr for CalendarDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A local wall-clock reading: a calendar date plus a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    /// The calendar day.
    pub date: CalendarDate,
    /// The time of day.
    pub time: ClockTime,
}

impl Timestamp {
    /// Creates a new timestamp.
    #[must_use]
    pub const fn new(date: CalendarDate, time: ClockTime) -> Self {
        Self { date, time }
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}",
            self.date,
            self.time.hour(),
            self.time.minute()
        )
    }
}
