// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FixedClock, ReservationRecord};
use sportsplex_domain::{CalendarDate, ClockTime, Timestamp};

/// Parses a `DD/MM/YYYY` literal known to be valid.
pub fn date(text: &str) -> CalendarDate {
    CalendarDate::parse(text).expect("valid test date")
}

/// Builds a clock value from a numeric `HHMM` known to be valid.
pub fn clock(hhmm: u16) -> ClockTime {
    ClockTime::from_hhmm(hhmm).expect("valid test time")
}

/// A clock stopped at Friday 05/01/2024, `hhmm`. Tomorrow is a Saturday.
pub fn friday_at(hhmm: u16) -> FixedClock {
    FixedClock::new(Timestamp::new(date("05/01/2024"), clock(hhmm)))
}

/// Builds a ledger record holding `items`.
pub fn create_test_record(id: u32, created_at: &str, items: &[&str]) -> ReservationRecord {
    ReservationRecord {
        id,
        customer_name: String::from("Alice Tan"),
        customer_phone: String::from("0123456789"),
        created_at: String::from(created_at),
        total: 0.0,
        items: items.iter().map(|item| String::from(*item)).collect(),
    }
}
