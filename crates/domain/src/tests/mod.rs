// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod rates;
mod time_model;

use crate::{CalendarDate, ClockTime};

/// Parses a `DD/MM/YYYY` literal known to be valid.
pub fn date(text: &str) -> CalendarDate {
    CalendarDate::parse(text).expect("valid test date")
}

/// Builds a clock value from a numeric `HHMM` known to be valid.
pub fn clock(hhmm: u16) -> ClockTime {
    ClockTime::from_hhmm(hhmm).expect("valid test time")
}
