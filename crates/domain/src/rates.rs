// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static price tables.
//!
//! | Facility         | Weekday | Weekend | Unit      |
//! |------------------|---------|---------|-----------|
//! | Badminton Court  | 15      | 20      | per hour  |
//! | Pickleball Court | 15      | 20      | per hour  |
//! | Basketball Court | 40      | 50      | per hour  |
//! | Swimming Pool    | 5       | 8       | per entry |
//! | Gym Room         | 10      | 10      | per entry |
//! | Fitness Studio   | 30      | 30      | per entry |
//!
//! Equipment rentals and lockers share the ledger with facility bookings,
//! so their prices live here too.

use crate::error::DomainError;
use crate::time_model::CalendarDate;
use std::str::FromStr;

/// How a facility is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PricingUnit {
    /// Charged per hour of a booked time window.
    Hourly,
    /// Charged once per entry, regardless of duration.
    PerEntry,
}

/// A weekday/weekend price pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rate {
    /// Price Monday to Friday.
    pub weekday: f64,
    /// Price on Saturday and Sunday.
    pub weekend: f64,
    /// How the price is applied.
    pub unit: PricingUnit,
}

impl Rate {
    /// Returns the price applicable on a weekday or weekend.
    #[must_use]
    pub const fn for_day(&self, weekend: bool) -> f64 {
        if weekend { self.weekend } else { self.weekday }
    }
}

/// A bookable court or an enterable venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FacilityKind {
    BadmintonCourt,
    PickleballCourt,
    BasketballCourt,
    SwimmingPool,
    GymRoom,
    FitnessStudio,
}

impl FacilityKind {
    /// Every facility, in menu order.
    pub const ALL: [Self; 6] = [
        Self::BadmintonCourt,
        Self::PickleballCourt,
        Self::BasketballCourt,
        Self::SwimmingPool,
        Self::GymRoom,
        Self::FitnessStudio,
    ];

    /// Facilities booked by the hour, in menu order.
    pub const COURTS: [Self; 3] = [
        Self::BadmintonCourt,
        Self::PickleballCourt,
        Self::BasketballCourt,
    ];

    /// Facilities sold as entry passes, in menu order.
    pub const ENTRIES: [Self; 3] = [Self::SwimmingPool, Self::GymRoom, Self::FitnessStudio];

    /// Returns the display name used on bills and in the ledger.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BadmintonCourt => "Badminton Court",
            Self::PickleballCourt => "Pickleball Court",
            Self::BasketballCourt => "Basketball Court",
            Self::SwimmingPool => "Swimming Pool",
            Self::GymRoom => "Gym Room",
            Self::FitnessStudio => "Fitness Studio",
        }
    }

    /// Looks a facility up by its exact display name.
    #[must_use]
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.display_name() == name)
    }

    /// Returns the price rule for this facility.
    #[must_use]
    pub const fn rate(self) -> Rate {
        match self {
            Self::BadmintonCourt | Self::PickleballCourt => Rate {
                weekday: 15.0,
                weekend: 20.0,
                unit: PricingUnit::Hourly,
            },
            Self::BasketballCourt => Rate {
                weekday: 40.0,
                weekend: 50.0,
                unit: PricingUnit::Hourly,
            },
            Self::SwimmingPool => Rate {
                weekday: 5.0,
                weekend: 8.0,
                unit: PricingUnit::PerEntry,
            },
            Self::GymRoom => Rate {
                weekday: 10.0,
                weekend: 10.0,
                unit: PricingUnit::PerEntry,
            },
            Self::FitnessStudio => Rate {
                weekday: 30.0,
                weekend: 30.0,
                unit: PricingUnit::PerEntry,
            },
        }
    }

    /// Returns how this facility is charged.
    #[must_use]
    pub const fn pricing_unit(self) -> PricingUnit {
        self.rate().unit
    }

    /// Returns whether this facility is booked by time window.
    #[must_use]
    pub const fn is_hourly(self) -> bool {
        matches!(self.pricing_unit(), PricingUnit::Hourly)
    }
}

impl std::fmt::Display for FacilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for FacilityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_display_name(s).ok_or_else(|| DomainError::UnknownFacility(s.to_string()))
    }
}

/// Computes the price of a booking.
///
/// Hourly facilities are charged `rate * hours`, where `hours` may be
/// fractional (90 minutes is 1.5 hours). Per-entry facilities are charged
/// their flat rate and `hours` is ignored.
///
/// # Arguments
///
/// * `kind` - The facility being booked
/// * `date` - The day of the booking, which selects weekday or weekend pricing
/// * `hours` - The booked duration in hours
#[must_use]
pub fn price_for(kind: FacilityKind, date: CalendarDate, hours: f64) -> f64 {
    let rate: Rate = kind.rate();
    let unit_price: f64 = rate.for_day(date.is_weekend());
    match rate.unit {
        PricingUnit::Hourly => unit_price * hours,
        PricingUnit::PerEntry => unit_price,
    }
}

/// Rentable equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Equipment {
    BadmintonRacket,
    Paddle,
    Basketball,
    ResistanceBand,
    YogaMat,
}

impl Equipment {
    /// Every rentable item, in menu order.
    pub const ALL: [Self; 5] = [
        Self::BadmintonRacket,
        Self::Paddle,
        Self::Basketball,
        Self::ResistanceBand,
        Self::YogaMat,
    ];

    /// Returns the display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BadmintonRacket => "Badminton Racket",
            Self::Paddle => "Paddle",
            Self::Basketball => "Basketball",
            Self::ResistanceBand => "Resistance Band",
            Self::YogaMat => "Yoga Mat",
        }
    }

    /// Looks an item up by its exact display name.
    #[must_use]
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|item| item.display_name() == name)
    }

    /// Returns the rental price per unit.
    #[must_use]
    pub const fn price(self) -> f64 {
        match self {
            Self::BadmintonRacket | Self::Basketball => 10.0,
            Self::Paddle => 8.0,
            Self::ResistanceBand | Self::YogaMat => 5.0,
        }
    }

    /// Returns the refundable deposit per unit, collected at the counter.
    #[must_use]
    pub const fn deposit(self) -> Option<f64> {
        match self {
            Self::BadmintonRacket | Self::Paddle | Self::Basketball => Some(30.0),
            Self::ResistanceBand | Self::YogaMat => None,
        }
    }
}

impl std::fmt::Display for Equipment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Locker sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockerSize {
    Small,
    Medium,
    Large,
}

impl LockerSize {
    /// Every locker size, in menu order.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Returns the display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    /// Looks a size up by its exact display name.
    #[must_use]
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.display_name() == name)
    }

    /// Returns the rental price.
    #[must_use]
    pub const fn price(self) -> f64 {
        match self {
            Self::Small => 5.0,
            Self::Medium => 8.0,
            Self::Large => 10.0,
        }
    }
}

impl std::fmt::Display for LockerSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
