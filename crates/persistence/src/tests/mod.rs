// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use sportsplex::ReservationRecord;

/// Builds a ledger record holding `items`.
pub fn create_test_record(id: u32, items: &[&str]) -> ReservationRecord {
    ReservationRecord {
        id,
        customer_name: String::from("Alice Tan"),
        customer_phone: String::from("0123456789"),
        created_at: String::from("05/01/2024 08:15"),
        total: 20.0,
        items: items.iter().map(|item| String::from(*item)).collect(),
    }
}
