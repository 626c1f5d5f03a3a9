// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Line items and their textual descriptors.
//!
//! The ledger stores every purchased item as a descriptor string. Bookings,
//! rentals, purchases and lockers share that list, so decoding has to tell
//! them apart:
//!
//! ```text
//! Booking: Badminton Court [25/12/2025 1330-1430]   court booking
//! Booking: Swimming Pool Entry [25/12/2025]          entry pass
//! Rent: Yoga Mat                                     equipment rental
//! Buy: Mineral Water x 2                             retail purchase
//! Locker: Medium                                     locker rental
//! ```
//!
//! Court bookings written by older tills may separate the times with an
//! en-dash and may drop the leading zero of the start time (`930-1030`).
//! Both forms decode; new descriptors always use `-` and four digits.

use crate::error::DomainError;
use crate::interval::{ReservedSlot, TimeInterval};
use crate::rates::{Equipment, FacilityKind, LockerSize};
use crate::time_model::{CalendarDate, ClockTime};
use std::str::FromStr;

/// Prefix shared by court bookings and entry passes.
pub const BOOKING_MARKER: &str = "Booking:";
/// Prefix of equipment rentals.
pub const RENTAL_MARKER: &str = "Rent:";
/// Prefix of retail purchases.
pub const PURCHASE_MARKER: &str = "Buy:";
/// Prefix of locker rentals.
pub const LOCKER_MARKER: &str = "Locker:";

const ENTRY_SUFFIX: &str = " Entry";
const LEGACY_TIME_SEPARATOR: char = '\u{2013}';

/// A structured line item, one variant per kind of thing sold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemDescriptor {
    /// An hourly court reservation. The only schedulable variant.
    CourtBooking(ReservedSlot),
    /// A single entry to a per-entry facility on a day.
    EntryPass {
        /// The facility entered.
        facility: FacilityKind,
        /// The day of entry.
        date: CalendarDate,
    },
    /// One unit of rented equipment.
    Rental {
        /// The rented item.
        equipment: Equipment,
    },
    /// Retail goods.
    Purchase {
        /// The product name as shown on the shelf.
        product: String,
        /// Number of units.
        quantity: u32,
    },
    /// A locker for the visit.
    Locker {
        /// The locker size.
        size: LockerSize,
    },
}

impl ItemDescriptor {
    /// Builds a court booking descriptor from a validated window.
    #[must_use]
    pub const fn court_booking(interval: &TimeInterval) -> Self {
        Self::CourtBooking(interval.as_slot())
    }

    /// Returns the reserved slot if this is a court booking.
    #[must_use]
    pub const fn reserved_slot(&self) -> Option<ReservedSlot> {
        match self {
            Self::CourtBooking(slot) => Some(*slot),
            _ => None,
        }
    }

    /// Returns whether this item occupies a facility time window.
    #[must_use]
    pub const fn is_schedulable(&self) -> bool {
        matches!(self, Self::CourtBooking(_))
    }

    /// Decodes a descriptor string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnrecognizedDescriptor` if the text is not a
    /// well-formed descriptor of any known kind.
    pub fn decode(text: &str) -> Result<Self, DomainError> {
        let trimmed: &str = text.trim();
        let unrecognized = || DomainError::UnrecognizedDescriptor(trimmed.to_string());

        if let Some(rest) = trimmed.strip_prefix(BOOKING_MARKER) {
            return decode_booking(rest).ok_or_else(unrecognized);
        }

        if let Some(rest) = trimmed.strip_prefix(RENTAL_MARKER) {
            return Equipment::from_display_name(rest.trim())
                .map(|equipment| Self::Rental { equipment })
                .ok_or_else(unrecognized);
        }

        if let Some(rest) = trimmed.strip_prefix(PURCHASE_MARKER) {
            let (product, quantity) = rest.trim().rsplit_once(" x ").ok_or_else(unrecognized)?;
            let quantity: u32 = quantity.trim().parse().map_err(|_| unrecognized())?;
            let product: &str = product.trim();
            if product.is_empty() || quantity == 0 {
                return Err(unrecognized());
            }
            return Ok(Self::Purchase {
                product: product.to_string(),
                quantity,
            });
        }

        if let Some(rest) = trimmed.strip_prefix(LOCKER_MARKER) {
            return LockerSize::from_display_name(rest.trim())
                .map(|size| Self::Locker { size })
                .ok_or_else(unrecognized);
        }

        Err(unrecognized())
    }
}

/// Decodes the part of a booking descriptor after the marker.
///
/// Returns `None` for anything that is not an exact court booking or
/// entry pass.
fn decode_booking(rest: &str) -> Option<ItemDescriptor> {
    let (name, bracketed) = rest.split_once('[')?;
    let inside: &str = bracketed.trim_end().strip_suffix(']')?.trim();
    let name: &str = name.trim();

    if let Some(entry_name) = name.strip_suffix(ENTRY_SUFFIX) {
        let facility: FacilityKind = FacilityKind::from_display_name(entry_name.trim())?;
        if facility.is_hourly() {
            return None;
        }
        let date: CalendarDate = CalendarDate::parse(inside).ok()?;
        return Some(ItemDescriptor::EntryPass { facility, date });
    }

    let facility: FacilityKind = FacilityKind::from_display_name(name)?;
    if !facility.is_hourly() {
        return None;
    }

    let (date, times) = inside.split_once(' ')?;
    let date: CalendarDate = CalendarDate::parse(date).ok()?;
    let (start, end) = split_time_range(times.trim())?;
    let start: ClockTime = ClockTime::parse(start).ok()?;
    let end: ClockTime = ClockTime::parse(end).ok()?;

    Some(ItemDescriptor::CourtBooking(ReservedSlot {
        facility,
        date,
        start,
        end,
    }))
}

/// Splits `HHMM-HHMM`, falling back to the en-dash separator.
fn split_time_range(times: &str) -> Option<(&str, &str)> {
    times
        .split_once('-')
        .or_else(|| times.split_once(LEGACY_TIME_SEPARATOR))
}

impl std::fmt::Display for ItemDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CourtBooking(slot) => write!(
                f,
                "{BOOKING_MARKER} {} [{} {}-{}]",
                slot.facility, slot.date, slot.start, slot.end
            ),
            Self::EntryPass { facility, date } => {
                write!(f, "{BOOKING_MARKER} {facility}{ENTRY_SUFFIX} [{date}]")
            }
            Self::Rental { equipment } => write!(f, "{RENTAL_MARKER} {equipment}"),
            Self::Purchase { product, quantity } => {
                write!(f, "{PURCHASE_MARKER} {product} x {quantity}")
            }
            Self::Locker { size } => write!(f, "{LOCKER_MARKER} {size}"),
        }
    }
}

impl FromStr for ItemDescriptor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

/// One priced entry destined for a customer's bill.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    descriptor: ItemDescriptor,
    price: f64,
}

impl LineItem {
    /// Creates a new line item.
    #[must_use]
    pub const fn new(descriptor: ItemDescriptor, price: f64) -> Self {
        Self { descriptor, price }
    }

    /// Returns the structured descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &ItemDescriptor {
        &self.descriptor
    }

    /// Returns the encoded label stored in the ledger.
    #[must_use]
    pub fn label(&self) -> String {
        self.descriptor.to_string()
    }

    /// Returns the price.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }
}
