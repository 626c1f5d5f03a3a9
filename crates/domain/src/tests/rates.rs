// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::date;
use crate::{
    CalendarDate, DomainError, Equipment, FacilityKind, LockerSize, PricingUnit, price_for,
};

fn weekday() -> CalendarDate {
    // Monday
    date("08/01/2024")
}

fn weekend() -> CalendarDate {
    // Saturday
    date("06/01/2024")
}

#[test]
fn test_court_rates() {
    assert!((price_for(FacilityKind::BadmintonCourt, weekday(), 1.0) - 15.0).abs() < f64::EPSILON);
    assert!((price_for(FacilityKind::BadmintonCourt, weekend(), 1.0) - 20.0).abs() < f64::EPSILON);
    assert!((price_for(FacilityKind::PickleballCourt, weekday(), 1.0) - 15.0).abs() < f64::EPSILON);
    assert!((price_for(FacilityKind::PickleballCourt, weekend(), 1.0) - 20.0).abs() < f64::EPSILON);
    assert!((price_for(FacilityKind::BasketballCourt, weekday(), 1.0) - 40.0).abs() < f64::EPSILON);
    assert!((price_for(FacilityKind::BasketballCourt, weekend(), 1.0) - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_hourly_price_supports_fractional_hours() {
    let price: f64 = price_for(FacilityKind::BadmintonCourt, weekday(), 1.5);
    assert!((price - 22.5).abs() < f64::EPSILON);

    let price: f64 = price_for(FacilityKind::BasketballCourt, weekend(), 2.25);
    assert!((price - 112.5).abs() < f64::EPSILON);
}

#[test]
fn test_entry_price_ignores_duration() {
    assert!((price_for(FacilityKind::SwimmingPool, weekday(), 3.0) - 5.0).abs() < f64::EPSILON);
    assert!((price_for(FacilityKind::SwimmingPool, weekend(), 0.0) - 8.0).abs() < f64::EPSILON);
    assert!((price_for(FacilityKind::GymRoom, weekday(), 2.0) - 10.0).abs() < f64::EPSILON);
    assert!((price_for(FacilityKind::GymRoom, weekend(), 2.0) - 10.0).abs() < f64::EPSILON);
    assert!((price_for(FacilityKind::FitnessStudio, weekday(), 1.0) - 30.0).abs() < f64::EPSILON);
    assert!((price_for(FacilityKind::FitnessStudio, weekend(), 1.0) - 30.0).abs() < f64::EPSILON);
}

#[test]
fn test_pricing_units() {
    for kind in FacilityKind::COURTS {
        assert_eq!(kind.pricing_unit(), PricingUnit::Hourly);
        assert!(kind.is_hourly());
    }
    for kind in FacilityKind::ENTRIES {
        assert_eq!(kind.pricing_unit(), PricingUnit::PerEntry);
        assert!(!kind.is_hourly());
    }
}

#[test]
fn test_facility_display_names_round_trip() {
    for kind in FacilityKind::ALL {
        let parsed: FacilityKind = kind.display_name().parse().unwrap();
        assert_eq!(parsed, kind);
    }
    assert_eq!(FacilityKind::BadmintonCourt.to_string(), "Badminton Court");
}

#[test]
fn test_unknown_facility_name() {
    let result: Result<FacilityKind, DomainError> = "badminton court".parse();
    assert_eq!(
        result,
        Err(DomainError::UnknownFacility(String::from("badminton court")))
    );
}

#[test]
fn test_equipment_prices_and_deposits() {
    assert!((Equipment::BadmintonRacket.price() - 10.0).abs() < f64::EPSILON);
    assert!((Equipment::Paddle.price() - 8.0).abs() < f64::EPSILON);
    assert_eq!(Equipment::Basketball.deposit(), Some(30.0));
    assert_eq!(Equipment::YogaMat.deposit(), None);
    assert_eq!(
        Equipment::from_display_name("Resistance Band"),
        Some(Equipment::ResistanceBand)
    );
}

#[test]
fn test_locker_prices() {
    assert!((LockerSize::Small.price() - 5.0).abs() < f64::EPSILON);
    assert!((LockerSize::Medium.price() - 8.0).abs() < f64::EPSILON);
    assert!((LockerSize::Large.price() - 10.0).abs() < f64::EPSILON);
    assert_eq!(LockerSize::from_display_name("Large"), Some(LockerSize::Large));
    assert_eq!(LockerSize::from_display_name("Huge"), None);
}
