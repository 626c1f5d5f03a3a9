// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The shopping cart and the transaction lifecycle around it.
//!
//! Line items collect in a `Cart` until checkout turns them into a single
//! `ReservationRecord` in the ledger. Cancellation removes a whole record.

use crate::clock::Clock;
use crate::error::CoreError;
use crate::ledger::{ReservationLedger, ReservationRecord, find_conflict};
use sportsplex_domain::{
    Equipment, ItemDescriptor, LineItem, LockerSize, ReservedSlot, Timestamp,
};
use tracing::{debug, info, warn};

/// Receiver of committed line items.
pub trait LineItemSink {
    /// Takes ownership of a committed line item.
    fn accept_line_item(&mut self, item: LineItem);

    /// Returns the court slots held by items not yet in the ledger.
    fn pending_slots(&self) -> Vec<ReservedSlot> {
        Vec::new()
    }
}

impl LineItemSink for Vec<LineItem> {
    fn accept_line_item(&mut self, item: LineItem) {
        self.push(item);
    }

    fn pending_slots(&self) -> Vec<ReservedSlot> {
        self.iter()
            .filter_map(|item| item.descriptor().reserved_slot())
            .collect()
    }
}

/// Line items awaiting checkout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds a line item.
    pub fn add(&mut self, item: LineItem) {
        debug!(label = %item.label(), price = item.price(), "Added to cart");
        self.items.push(item);
    }

    /// Adds an equipment rental.
    pub fn add_rental(&mut self, equipment: Equipment) {
        self.add(LineItem::new(
            ItemDescriptor::Rental { equipment },
            equipment.price(),
        ));
    }

    /// Adds a locker.
    pub fn add_locker(&mut self, size: LockerSize) {
        self.add(LineItem::new(ItemDescriptor::Locker { size }, size.price()));
    }

    /// Returns the items in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the sum of all item prices.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::price).sum()
    }

    /// Returns the refundable deposits owed on rented equipment.
    ///
    /// Deposits are collected at the counter and are not part of the total.
    #[must_use]
    pub fn deposits(&self) -> f64 {
        self.items
            .iter()
            .filter_map(|item| match item.descriptor() {
                ItemDescriptor::Rental { equipment } => equipment.deposit(),
                _ => None,
            })
            .sum()
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl LineItemSink for Cart {
    fn accept_line_item(&mut self, item: LineItem) {
        self.add(item);
    }

    fn pending_slots(&self) -> Vec<ReservedSlot> {
        self.items.pending_slots()
    }
}

/// Contact details captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Customer name.
    pub name: String,
    /// Customer phone number.
    pub phone: String,
}

impl Customer {
    /// Creates a customer.
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// Turns the cart into a ledger record and empties the cart.
///
/// Every court booking in the cart is checked again, against the ledger and
/// against the bookings ahead of it in the same cart, because the ledger may
/// have changed since the item was added. On any failure the cart and the
/// ledger are left untouched.
///
/// # Arguments
///
/// * `cart` - The cart to check out
/// * `ledger` - The ledger the record is appended to
/// * `clock` - Source of the transaction timestamp
/// * `customer` - Who is paying
///
/// # Returns
///
/// The appended record.
///
/// # Errors
///
/// Returns an error if:
/// - The cart is empty
/// - A court booking now clashes with the ledger or with another cart item
/// - The ledger cannot be read or written
pub fn checkout<L, C>(
    cart: &mut Cart,
    ledger: &mut L,
    clock: &C,
    customer: &Customer,
) -> Result<ReservationRecord, CoreError>
where
    L: ReservationLedger,
    C: Clock + ?Sized,
{
    // Rule: nothing to pay for
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let mut pending: Vec<ReservedSlot> = Vec::new();
    for slot in cart.items().iter().filter_map(|item| item.descriptor().reserved_slot()) {
        let in_ledger: Option<ReservedSlot> =
            find_conflict(&*ledger, slot.facility, slot.date, slot.start, slot.end)?;
        let in_cart: Option<ReservedSlot> = pending.iter().copied().find(|other| {
            other.facility == slot.facility
                && other.date == slot.date
                && other.overlaps(slot.start, slot.end)
        });

        // Rule: no double booking
        if let Some(existing) = in_ledger.or(in_cart) {
            warn!(
                facility = %slot.facility,
                date = %slot.date,
                start = %slot.start,
                end = %slot.end,
                "Checkout rejected, booking clashes"
            );
            return Err(CoreError::ScheduleConflict {
                requested: slot,
                existing,
            });
        }
        pending.push(slot);
    }

    let created_at: Timestamp = clock.now()?;
    let record: ReservationRecord = ReservationRecord {
        id: ledger.next_id()?,
        customer_name: customer.name.clone(),
        customer_phone: customer.phone.clone(),
        created_at: created_at.to_string(),
        total: cart.total(),
        items: cart.items().iter().map(LineItem::label).collect(),
    };

    ledger.append(record.clone())?;
    cart.clear();

    info!(
        record_id = record.id,
        total = record.total,
        items = record.items.len(),
        "Checkout complete"
    );
    Ok(record)
}

/// Cancels a transaction, removing every item it holds from the ledger.
///
/// # Errors
///
/// Returns `CoreError::RecordNotFound` if no record has this id, or an
/// error if the ledger cannot be written.
pub fn cancel<L: ReservationLedger>(
    ledger: &mut L,
    id: u32,
) -> Result<ReservationRecord, CoreError> {
    let record: ReservationRecord = ledger.remove(id)?.ok_or(CoreError::RecordNotFound(id))?;
    info!(record_id = id, refund = record.total, "Booking cancelled");
    Ok(record)
}
