// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scripted sessions against the counter terminal.

use sportsplex::{InMemoryLedger, ReservationLedger};
use sportsplex_persistence::JsonFileLedger;
use tempfile::TempDir;

use super::{create_test_record, run_script};

const SATURDAY_BADMINTON: &str = "Booking: Badminton Court [06/01/2024 1000-1100]";

#[test]
fn test_book_and_checkout() {
    let script: &str = "1\n2\n1\n1\n1000\n1100\n5\nBob Lim\n0198765432\n0\n";

    let (ledger, output) = run_script(InMemoryLedger::new(), script);

    assert!(output.contains(">> Added Booking: Badminton Court [06/01/2024 1000-1100] (RM 20.00) to cart."));
    assert!(output.contains("Payment received. Booking ID: 1001 Total: RM 20.00"));
    assert!(!output.contains("Unpaid items"));

    let records = ledger.records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].customer_name, "Bob Lim");
    assert_eq!(records[0].items, vec![String::from(SATURDAY_BADMINTON)]);
}

#[test]
fn test_clash_asks_for_another_time() {
    let ledger: InMemoryLedger =
        InMemoryLedger::with_records(vec![create_test_record(1001, &[SATURDAY_BADMINTON])]);
    let script: &str = "1\n2\n1\n1\n1030\n1130\n1100\n1200\n0\n";

    let (_, output) = run_script(ledger, script);

    assert!(output.contains("Please choose another time."));
    assert!(output.contains(">> Added Booking: Badminton Court [06/01/2024 1100-1200]"));
    assert!(output.contains("Unpaid items in the cart were discarded."));
}

#[test]
fn test_rule_violation_restarts_booking() {
    let script: &str = "1\n1\n1\n2\n0900\n1000\n0\n0\n";

    let (_, output) = run_script(InMemoryLedger::new(), script);

    assert!(output.contains("outside operation hours"));
    assert!(output.contains("Restarting from date selection."));
    assert!(!output.contains(">> Added"));
}

#[test]
fn test_rentals_show_in_cart() {
    let script: &str = "2\n1\n2\n3\n2\n4\n0\n";

    let (_, output) = run_script(InMemoryLedger::new(), script);

    assert!(output.contains(">> Added 2 x Rent: Badminton Racket (RM 20.00) to cart."));
    assert!(output.contains(">> Deposit at counter: RM 60.00 (RM 30.00 x 2)"));
    assert!(output.contains(">> Added Locker: Medium (RM 8.00) to cart."));
    assert_eq!(output.matches("Rent: Badminton Racket RM 10.00").count(), 2);
    assert!(output.contains("Total: RM 28.00"));
    assert!(output.contains("Refundable deposit due at the counter: RM 60.00"));
}

#[test]
fn test_rental_quantity_must_be_positive() {
    let script: &str = "2\n5\n0\n2\n5\nabc\n2\n5\n21\n4\n0\n";

    let (_, output) = run_script(InMemoryLedger::new(), script);

    assert_eq!(output.matches("Quantity must be between 1 and 20.").count(), 3);
    assert!(!output.contains(">> Added"));
    assert!(output.contains("Cart is empty."));
}

#[test]
fn test_invalid_menu_choices() {
    let script: &str = "9\nabc\n2\n7\n3\n0\n0\n";

    let (_, output) = run_script(InMemoryLedger::new(), script);

    assert_eq!(output.matches("Invalid option.").count(), 3);
    assert!(!output.contains(">> Added"));
}

#[test]
fn test_end_of_input_exits() {
    let (_, output) = run_script(InMemoryLedger::new(), "1\n2\n");

    assert!(output.ends_with("Goodbye.\n"));
}

#[test]
fn test_checkout_empty_cart() {
    let (ledger, output) = run_script(InMemoryLedger::new(), "5\n0\n");

    assert!(output.contains("Cart is empty."));
    assert!(ledger.records().unwrap().is_empty());
}

#[test]
fn test_checkout_rejects_bad_phone() {
    let script: &str = "3\n1\n5\nBob Lim\n01-234\n0\n";

    let (ledger, output) = run_script(InMemoryLedger::new(), script);

    assert!(output.contains("Invalid phone."));
    assert!(ledger.records().unwrap().is_empty());
}

#[test]
fn test_cancel_booking() {
    let ledger: InMemoryLedger =
        InMemoryLedger::with_records(vec![create_test_record(1001, &[SATURDAY_BADMINTON])]);
    let script: &str = "6\n1001\nn\n6\n1001\ny\n6\n1001\n6\nabc\n0\n";

    let (ledger, output) = run_script(ledger, script);

    assert!(output.contains("Name       : Alice Tan"));
    assert!(output.contains(" - Booking: Badminton Court [06/01/2024 1000-1100]"));
    assert_eq!(output.matches("Cancel and refund? (y/n): ").count(), 2);
    assert!(output.contains("Cancellation aborted."));
    assert!(output.contains("Booking ID 1001 cancelled. Refund: RM 20.00"));
    assert!(output.contains("Booking ID 1001 not found"));
    assert!(output.contains("Invalid booking ID."));
    assert!(ledger.records().unwrap().is_empty());
}

#[test]
fn test_view_bookings_by_date() {
    let ledger: InMemoryLedger =
        InMemoryLedger::with_records(vec![create_test_record(1001, &[SATURDAY_BADMINTON])]);
    let script: &str = "7\n\n7\n06/01/2024\n7\n31/02/2024\n0\n";

    let (_, output) = run_script(ledger, script);

    assert!(output.contains("-- Transactions on 05/01/2024 --"));
    assert!(output.contains("ID 1001 | 05/01/2024 07:45 | Alice Tan (0123456789) | RM 20.00"));
    assert!(output.contains("-- Court schedule for 06/01/2024 --"));
    assert!(output.contains("Badminton Court 1000-1100"));
    assert!(output.contains("Invalid date"));
}

#[test]
fn test_file_ledger_keeps_checkout() {
    let dir: TempDir = TempDir::new().unwrap();
    let path = dir.path().join("ledger.json");
    let script: &str = "1\n1\n2\n1\n5\nBob Lim\n0198765432\n0\n";

    let (ledger, output) = run_script(JsonFileLedger::open(&path).unwrap(), script);
    assert!(output.contains("Booking ID: 1001 Total: RM 5.00"));
    drop(ledger);

    let reopened: JsonFileLedger = JsonFileLedger::open(&path).unwrap();
    let records = reopened.records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].items,
        vec![String::from("Booking: Swimming Pool Entry [05/01/2024]")]
    );
}

#[test]
fn test_same_slot_twice_asks_for_another_time() {
    let script: &str =
        "1\n2\n1\n1\n1000\n1100\n1\n2\n1\n1\n1000\n1100\n1100\n1200\n5\nBob Lim\n0198765432\n0\n";

    let (ledger, output) = run_script(InMemoryLedger::new(), script);

    assert!(output.contains("Please choose another time."));
    assert_eq!(output.matches(">> Added Booking: Badminton Court").count(), 2);
    assert!(output.contains("Payment received. Booking ID: 1001 Total: RM 40.00"));
    assert_eq!(
        ledger.records().unwrap()[0].items,
        vec![
            String::from(SATURDAY_BADMINTON),
            String::from("Booking: Badminton Court [06/01/2024 1100-1200]"),
        ]
    );
}

#[test]
fn test_clear_cart_then_rebook_and_checkout() {
    let script: &str =
        "1\n2\n1\n1\n1000\n1100\n3\n1\n8\n4\n8\n1\n2\n1\n1\n1000\n1100\n5\nBob Lim\n0198765432\n0\n";

    let (ledger, output) = run_script(InMemoryLedger::new(), script);

    assert!(output.contains("Cart cleared (2 item(s) removed)."));
    assert_eq!(output.matches("Cart is empty.").count(), 2);
    assert!(output.contains("Payment received. Booking ID: 1001 Total: RM 20.00"));
    assert!(!output.contains("Unpaid items"));

    let records = ledger.records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].items, vec![String::from(SATURDAY_BADMINTON)]);
}
