// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wall-clock capability.
//!
//! Date selection ("today" / "tomorrow") and the same-day cutoff both read
//! the clock through this trait so tests can pin the current time.

use chrono::{Datelike, Timelike};
use sportsplex_domain::{CalendarDate, ClockTime, DomainError, Timestamp};
use std::cell::Cell;

/// Source of the current local date and time.
pub trait Clock {
    /// Returns the current local wall-clock reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the current date is outside the supported calendar range.
    fn now(&self) -> Result<Timestamp, DomainError>;

    /// Returns today's date.
    ///
    /// # Errors
    ///
    /// Returns an error if the current date is outside the supported calendar range.
    fn today(&self) -> Result<CalendarDate, DomainError> {
        Ok(self.now()?.date)
    }

    /// Returns the date `days` days from today.
    ///
    /// # Errors
    ///
    /// Returns an error if either date is outside the supported calendar range.
    fn offset_date(&self, days: i64) -> Result<CalendarDate, DomainError> {
        self.today()?.offset_days(days)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Result<Timestamp, DomainError> {
        (**self).now()
    }
}

/// The host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<Timestamp, DomainError> {
        let local: chrono::NaiveDateTime = chrono::Local::now().naive_local();

        let date: CalendarDate = CalendarDate::from_dmy(
            component(local.day()),
            component(local.month()),
            local.year(),
        )?;
        let time: ClockTime =
            ClockTime::from_hm(component(local.hour()), component(local.minute()))?;

        Ok(Timestamp::new(date, time))
    }
}

/// Narrows a chrono calendar component; out-of-range values are rejected by
/// the domain constructors.
fn component(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

/// A clock that reports a fixed, adjustable reading.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<Timestamp>,
}

impl FixedClock {
    /// Creates a clock stopped at `now`.
    #[must_use]
    pub const fn new(now: Timestamp) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Moves the clock to a new reading.
    pub fn set(&self, now: Timestamp) {
        self.now.set(now);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<Timestamp, DomainError> {
        Ok(self.now.get())
    }
}
