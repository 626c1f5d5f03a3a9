// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod app_tests;

use crate::app::App;
use crate::console::Console;
use sportsplex::{FixedClock, ReservationLedger, ReservationRecord};
use sportsplex_domain::{CalendarDate, ClockTime, Timestamp};

/// A clock stopped at Friday 05/01/2024 08:00. Tomorrow is a Saturday.
pub fn friday_morning() -> FixedClock {
    FixedClock::new(Timestamp::new(
        CalendarDate::parse("05/01/2024").unwrap(),
        ClockTime::from_hhmm(800).unwrap(),
    ))
}

/// Builds a ledger record holding `items`.
pub fn create_test_record(id: u32, items: &[&str]) -> ReservationRecord {
    ReservationRecord {
        id,
        customer_name: String::from("Alice Tan"),
        customer_phone: String::from("0123456789"),
        created_at: String::from("05/01/2024 07:45"),
        total: 20.0,
        items: items.iter().map(|item| String::from(*item)).collect(),
    }
}

/// Runs the terminal over `script` and returns the ledger and everything printed.
pub fn run_script<L: ReservationLedger>(ledger: L, script: &str) -> (L, String) {
    let clock: FixedClock = friday_morning();
    let console = Console::new(script.as_bytes(), Vec::new());
    let mut app = App::new(ledger, &clock, console);
    app.run().unwrap();

    let (ledger, console) = app.into_parts();
    (ledger, String::from_utf8(console.into_output()).unwrap())
}
