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

mod clash;
mod descriptor;
mod error;
mod interval;
mod rates;
mod time_model;

#[cfg(test)]
mod tests;

pub use clash::{find_clash, has_clash};
pub use descriptor::{
    BOOKING_MARKER, ItemDescriptor, LOCKER_MARKER, LineItem, PURCHASE_MARKER, RENTAL_MARKER,
};
pub use error::DomainError;
pub use interval::{
    CLOSING_MINUTES, MIN_BOOKING_MINUTES, OPENING_MINUTES, ReservedSlot, TimeInterval,
    validate_bookable_date, validate_not_started, validate_time_window,
};
pub use rates::{Equipment, FacilityKind, LockerSize, PricingUnit, Rate, price_for};
pub use time_model::{CalendarDate, ClockTime, MAX_YEAR, MIN_YEAR, Timestamp};
