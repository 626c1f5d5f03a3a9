// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The counter terminal menus.

use crate::console::Console;
use color_eyre::Result;
use sportsplex::{
    BookingSession, Cart, Clock, CoreError, Customer, Prompt, ReservationLedger,
    ReservationRecord, StepOutcome, cancel, checkout, records_on, schedule_for,
};
use sportsplex_domain::{CalendarDate, Equipment, FacilityKind, LineItem, LockerSize, ReservedSlot};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

const MAIN_MENU: &str = "\n==== SPORTSPLEX COUNTER ====\n\
    1. Book facility\n\
    2. Rent equipment\n\
    3. Rent locker\n\
    4. View cart\n\
    5. Checkout\n\
    6. Cancel booking\n\
    7. View bookings by date\n\
    8. Clear cart\n\
    0. Exit";

/// Most units of one item rented in a single pass.
const MAX_RENTAL_QUANTITY: u32 = 20;

/// One counter terminal: a cart in front of a ledger.
#[derive(Debug)]
pub struct App<L, C, R, W> {
    ledger: L,
    clock: C,
    cart: Cart,
    console: Console<R, W>,
}

impl<L, C, R, W> App<L, C, R, W>
where
    L: ReservationLedger,
    C: Clock,
    R: BufRead,
    W: Write,
{
    /// Creates a terminal with an empty cart.
    pub const fn new(ledger: L, clock: C, console: Console<R, W>) -> Self {
        Self {
            ledger,
            clock,
            cart: Cart::new(),
            console,
        }
    }

    /// Runs the main menu until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal fails, the clock reports an
    /// unsupported date, or the ledger cannot be read. Rejected input and
    /// failed checkouts or cancellations are reported to the user and do not
    /// end the loop.
    pub fn run(&mut self) -> Result<()> {
        info!("Counter terminal started");

        loop {
            self.console.say(MAIN_MENU)?;
            let Some(choice) = self.console.ask("Select option: ")? else {
                break;
            };
            debug!(choice = choice.trim(), "Main menu choice");

            match choice.trim() {
                "1" => self.book_facility()?,
                "2" => self.rent_equipment()?,
                "3" => self.rent_locker()?,
                "4" => self.view_cart()?,
                "5" => self.checkout()?,
                "6" => self.cancel_booking()?,
                "7" => self.view_bookings_by_date()?,
                "8" => self.clear_cart()?,
                "0" => break,
                _ => self.console.say("Invalid option.")?,
            }
        }

        if !self.cart.is_empty() {
            warn!(items = self.cart.len(), "Exiting with unpaid items in cart");
            self.console.say("Unpaid items in the cart were discarded.")?;
        }
        self.console.say("Goodbye.")?;
        info!("Counter terminal stopped");
        Ok(())
    }

    fn book_facility(&mut self) -> Result<()> {
        let mut session = BookingSession::new(&self.clock)?;

        while !session.is_finished() {
            self.console.say(&render_prompt(&session.prompt()))?;
            let Some(line) = self.console.ask("> ")? else {
                return Ok(());
            };

            match session.handle(&line, &self.ledger, &mut self.cart) {
                StepOutcome::Restart(err) => {
                    self.console
                        .say(&format!("{err}. Restarting from date selection."))?;
                }
                StepOutcome::Retry(err) => {
                    self.console
                        .say(&format!("{err}. Please choose another time."))?;
                }
                StepOutcome::Committed(item) => announce_added(&mut self.console, &item)?,
                StepOutcome::Continue | StepOutcome::Exited | StepOutcome::Finished => {}
            }
        }
        Ok(())
    }

    fn rent_equipment(&mut self) -> Result<()> {
        self.console.say("\n-- Equipment Rental --")?;
        for (index, equipment) in Equipment::ALL.iter().enumerate() {
            let deposit: String = equipment
                .deposit()
                .map_or_else(String::new, |deposit| {
                    format!(" (deposit {})", money(deposit))
                });
            self.console.say(&format!(
                "{}. {} {}{deposit}",
                index + 1,
                equipment,
                money(equipment.price())
            ))?;
        }
        self.console.say("0. Back")?;

        let Some(line) = self.console.ask("Select item: ")? else {
            return Ok(());
        };
        if line.trim() == "0" {
            return Ok(());
        }
        let Some(equipment) = pick(&line, &Equipment::ALL) else {
            self.console.say("Invalid option.")?;
            return Ok(());
        };

        let Some(line) = self.console.ask("Quantity: ")? else {
            return Ok(());
        };
        let quantity: u32 = match line.trim().parse::<u32>() {
            // Rule: at least one unit, at most MAX_RENTAL_QUANTITY
            Ok(quantity) if (1..=MAX_RENTAL_QUANTITY).contains(&quantity) => quantity,
            _ => {
                self.console.say(&format!(
                    "Quantity must be between 1 and {MAX_RENTAL_QUANTITY}."
                ))?;
                return Ok(());
            }
        };

        for _ in 0..quantity {
            self.cart.add_rental(equipment);
        }
        self.console.say(&format!(
            ">> Added {quantity} x Rent: {equipment} ({}) to cart.",
            money(equipment.price() * f64::from(quantity))
        ))?;
        if let Some(deposit) = equipment.deposit() {
            self.console.say(&format!(
                ">> Deposit at counter: {} ({} x {quantity})",
                money(deposit * f64::from(quantity)),
                money(deposit)
            ))?;
        }
        Ok(())
    }

    fn rent_locker(&mut self) -> Result<()> {
        self.console.say("\n-- Locker Rental --")?;
        for (index, size) in LockerSize::ALL.iter().enumerate() {
            self.console
                .say(&format!("{}. {} {}", index + 1, size, money(size.price())))?;
        }
        self.console.say("0. Back")?;

        let Some(line) = self.console.ask("Select size: ")? else {
            return Ok(());
        };
        if line.trim() == "0" {
            return Ok(());
        }
        match pick(&line, &LockerSize::ALL) {
            Some(size) => {
                self.cart.add_locker(size);
                self.say_last_added()?;
            }
            None => self.console.say("Invalid option.")?,
        }
        Ok(())
    }

    fn view_cart(&mut self) -> Result<()> {
        if self.cart.is_empty() {
            self.console.say("Cart is empty.")?;
            return Ok(());
        }

        self.console.say("\n-- Current Cart --")?;
        for (index, item) in self.cart.items().iter().enumerate() {
            self.console.say(&format!(
                "{}. {} {}",
                index + 1,
                item.label(),
                money(item.price())
            ))?;
        }
        self.console
            .say(&format!("Total: {}", money(self.cart.total())))?;
        let deposits: f64 = self.cart.deposits();
        if deposits > 0.0 {
            self.console.say(&format!(
                "Refundable deposit due at the counter: {}",
                money(deposits)
            ))?;
        }
        Ok(())
    }

    fn checkout(&mut self) -> Result<()> {
        if self.cart.is_empty() {
            self.console.say("Cart is empty.")?;
            return Ok(());
        }
        self.view_cart()?;

        let Some(name) = self.console.ask("Customer name: ")? else {
            return Ok(());
        };
        let name: &str = name.trim();
        if name.is_empty() {
            self.console.say("Invalid name.")?;
            return Ok(());
        }

        let Some(phone) = self.console.ask("Phone number: ")? else {
            return Ok(());
        };
        let phone: &str = phone.trim();
        if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
            self.console.say("Invalid phone.")?;
            return Ok(());
        }

        let customer: Customer = Customer::new(name, phone);
        match checkout(&mut self.cart, &mut self.ledger, &self.clock, &customer) {
            Ok(record) => {
                self.console.say(&format!(
                    "Payment received. Booking ID: {} Total: {}",
                    record.id,
                    money(record.total)
                ))?;
            }
            Err(err @ CoreError::ScheduleConflict { .. }) => {
                self.console.say(&format!(
                    "{err}. Choose 8 to clear the cart, then book again."
                ))?;
            }
            Err(err) => self.console.say(&format!("Checkout failed: {err}"))?,
        }
        Ok(())
    }

    fn cancel_booking(&mut self) -> Result<()> {
        let Some(line) = self.console.ask("Booking ID to cancel: ")? else {
            return Ok(());
        };
        let Ok(id) = line.trim().parse::<u32>() else {
            self.console.say("Invalid booking ID.")?;
            return Ok(());
        };

        let Some(record) = self
            .ledger
            .records()?
            .iter()
            .find(|record| record.id == id)
            .cloned()
        else {
            self.console.say(&CoreError::RecordNotFound(id).to_string())?;
            return Ok(());
        };

        self.console.say("\n-- Booking Found --")?;
        self.console
            .say(&format!("Name       : {}", record.customer_name))?;
        self.console.say(&format!("Paid on    : {}", record.created_at))?;
        self.console
            .say(&format!("Total paid : {}", money(record.total)))?;
        self.console.say("Items      :")?;
        for item in &record.items {
            self.console.say(&format!(" - {item}"))?;
        }

        let Some(answer) = self.console.ask("Cancel and refund? (y/n): ")? else {
            return Ok(());
        };
        if !answer.trim().eq_ignore_ascii_case("y") {
            debug!(record_id = id, "Cancellation declined");
            self.console.say("Cancellation aborted.")?;
            return Ok(());
        }

        match cancel(&mut self.ledger, id) {
            Ok(record) => {
                self.console.say(&format!(
                    "Booking ID {} cancelled. Refund: {}",
                    record.id,
                    money(record.total)
                ))?;
            }
            Err(err) => self.console.say(&err.to_string())?,
        }
        Ok(())
    }

    fn clear_cart(&mut self) -> Result<()> {
        if self.cart.is_empty() {
            self.console.say("Cart is empty.")?;
            return Ok(());
        }

        let removed: usize = self.cart.len();
        self.cart.clear();
        info!(removed, "Cart cleared");
        self.console
            .say(&format!("Cart cleared ({removed} item(s) removed)."))?;
        Ok(())
    }

    fn view_bookings_by_date(&mut self) -> Result<()> {
        let Some(line) = self.console.ask("Date (DD/MM/YYYY, blank for today): ")? else {
            return Ok(());
        };
        let date: CalendarDate = if line.trim().is_empty() {
            self.clock.today()?
        } else {
            match CalendarDate::parse(line.trim()) {
                Ok(date) => date,
                Err(err) => {
                    self.console.say(&err.to_string())?;
                    return Ok(());
                }
            }
        };

        let records: Vec<ReservationRecord> = records_on(&self.ledger, date)?;
        self.console
            .say(&format!("\n-- Transactions on {date} --"))?;
        if records.is_empty() {
            self.console.say("No transactions.")?;
        }
        for record in &records {
            self.console.say(&format!(
                "ID {} | {} | {} ({}) | {}",
                record.id,
                record.created_at,
                record.customer_name,
                record.customer_phone,
                money(record.total)
            ))?;
            for item in &record.items {
                self.console.say(&format!("    {item}"))?;
            }
        }

        let schedule: Vec<ReservedSlot> = schedule_for(&self.ledger, date)?;
        self.console
            .say(&format!("\n-- Court schedule for {date} --"))?;
        if schedule.is_empty() {
            self.console.say("No courts booked.")?;
        }
        for slot in &schedule {
            self.console
                .say(&format!("{} {}-{}", slot.facility, slot.start, slot.end))?;
        }
        Ok(())
    }

    fn say_last_added(&mut self) -> Result<()> {
        if let Some(item) = self.cart.items().last() {
            announce_added(&mut self.console, item)?;
        }
        Ok(())
    }

    /// Returns the ledger, for inspecting what a scripted run committed.
    #[cfg(test)]
    pub fn into_parts(self) -> (L, Console<R, W>) {
        (self.ledger, self.console)
    }
}

fn announce_added<R, W: Write>(console: &mut Console<R, W>, item: &LineItem) -> Result<()>
where
    R: BufRead,
{
    console.say(&format!(
        ">> Added {} ({}) to cart.",
        item.label(),
        money(item.price())
    ))?;
    Ok(())
}

/// Renders a booking prompt as menu text.
fn render_prompt(prompt: &Prompt) -> String {
    match prompt {
        Prompt::Date { today, tomorrow } => format!(
            "\n-- Select Date --\n1. Today ({today}, {})\n2. Tomorrow ({tomorrow}, {})\n0. Back",
            today.weekday(),
            tomorrow.weekday()
        ),
        Prompt::BookingType { date, weekend } => format!(
            "\n-- Booking Type for {date} ({} rates) --\n1. Court (hourly)\n2. Entry pass",
            if *weekend { "weekend" } else { "weekday" }
        ),
        Prompt::Entry { weekend } => {
            let mut text: String = String::from("\n-- Select Entry --");
            for (index, facility) in FacilityKind::ENTRIES.iter().enumerate() {
                text.push_str(&format!(
                    "\n{}. {} {}",
                    index + 1,
                    facility,
                    money(facility.rate().for_day(*weekend))
                ));
            }
            text
        }
        Prompt::Court => {
            let mut text: String = String::from("\n-- Select Court --");
            for (index, facility) in FacilityKind::COURTS.iter().enumerate() {
                text.push_str(&format!("\n{}. {}", index + 1, facility));
            }
            text
        }
        Prompt::StartTime {
            facility,
            hourly_rate,
        } => format!(
            "{facility} at {} per hour, open 1000-2200, minimum 1 hour.\nStart time (HHMM):",
            money(*hourly_rate)
        ),
        Prompt::EndTime { facility, start } => {
            format!("{facility} from {start}.\nEnd time (HHMM):")
        }
        Prompt::Finished => String::new(),
    }
}

/// Maps a 1-based menu choice onto `options`.
fn pick<T: Copy>(input: &str, options: &[T]) -> Option<T> {
    let choice: usize = input.trim().parse().ok()?;
    options.get(choice.checked_sub(1)?).copied()
}

fn money(amount: f64) -> String {
    format!("RM {amount:.2}")
}
