// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod cart;
mod clock;
mod error;
mod ledger;
mod session;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use cart::{Cart, Customer, LineItemSink, cancel, checkout};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CoreError;
pub use ledger::{
    FIRST_RECORD_ID, InMemoryLedger, ReservationLedger, ReservationRecord, find_conflict,
    has_clash, records_on, schedule_for,
};
pub use session::{
    BookingError, BookingSession, ErrorKind, Prompt, SessionState, StepOutcome, book_court,
    book_entry,
};
