// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{clock, date};
use crate::{CalendarDate, ClockTime, DomainError, Timestamp};
use time::Weekday;

#[test]
fn test_parse_clock_accepts_four_digits() {
    let value: ClockTime = ClockTime::parse("1330").unwrap();
    assert_eq!(value.hour(), 13);
    assert_eq!(value.minute(), 30);
    assert_eq!(value.to_minutes(), 13 * 60 + 30);
}

#[test]
fn test_parse_clock_leading_zero_is_optional() {
    let short: ClockTime = ClockTime::parse("930").unwrap();
    let padded: ClockTime = ClockTime::parse("0930").unwrap();
    assert_eq!(short, padded);
    assert_eq!(short.to_minutes(), 570);
}

#[test]
fn test_parse_clock_trims_whitespace() {
    let value: ClockTime = ClockTime::parse("  1000\n").unwrap();
    assert_eq!(value.hhmm(), 1000);
}

#[test]
fn test_parse_clock_rejects_bad_hour() {
    let result: Result<ClockTime, DomainError> = ClockTime::parse("2400");
    assert!(matches!(result, Err(DomainError::InvalidClockTime { .. })));
}

#[test]
fn test_parse_clock_rejects_bad_minute() {
    let result: Result<ClockTime, DomainError> = ClockTime::parse("1260");
    assert!(matches!(result, Err(DomainError::InvalidClockTime { .. })));
}

#[test]
fn test_from_hm_checks_each_field() {
    assert_eq!(ClockTime::from_hm(13, 45).unwrap().hhmm(), 1345);
    assert!(matches!(
        ClockTime::from_hm(0, 150),
        Err(DomainError::InvalidClockTime { .. })
    ));
    assert!(matches!(
        ClockTime::from_hm(24, 0),
        Err(DomainError::InvalidClockTime { .. })
    ));
}

#[test]
fn test_parse_clock_rejects_non_digits() {
    for input in ["12:30", "abcd", "", "12", "13300", "-930", "1 30"] {
        assert!(
            ClockTime::parse(input).is_err(),
            "expected '{input}' to be rejected"
        );
    }
}

#[test]
fn test_every_valid_literal_parses_and_minutes_are_monotonic() {
    let mut previous: Option<u16> = None;
    for hour in 0..24_u16 {
        for minute in 0..60_u16 {
            let literal: String = format!("{hour:02}{minute:02}");
            let value: ClockTime = ClockTime::parse(&literal).unwrap();
            let minutes: u16 = value.to_minutes();
            assert_eq!(minutes, hour * 60 + minute);
            if let Some(previous) = previous {
                assert!(minutes > previous, "{literal} did not increase");
            }
            previous = Some(minutes);
        }
    }
    assert_eq!(previous, Some(1439));
}

#[test]
fn test_clock_display_is_zero_padded() {
    assert_eq!(clock(930).to_string(), "0930");
    assert_eq!(clock(0).to_string(), "0000");
    assert_eq!(clock(2359).to_string(), "2359");
}

#[test]
fn test_minutes_until() {
    assert_eq!(clock(1000).minutes_until(clock(1130)), 90);
    assert_eq!(clock(1130).minutes_until(clock(1000)), -90);
}

#[test]
fn test_parse_date_accepts_valid_date() {
    let value: CalendarDate = CalendarDate::parse("25/12/2025").unwrap();
    assert_eq!(value.day(), 25);
    assert_eq!(value.month(), 12);
    assert_eq!(value.year(), 2025);
    assert_eq!(value.to_string(), "25/12/2025");
}

#[test]
fn test_parse_date_requires_fixed_width_fields() {
    for input in ["5/12/2025", "05/1/2025", "05-12-2025", "05/12/25", "2025/12/05", ""] {
        assert!(
            matches!(
                CalendarDate::parse(input),
                Err(DomainError::InvalidDate { .. })
            ),
            "expected '{input}' to be rejected"
        );
    }
}

#[test]
fn test_parse_date_rejects_impossible_days() {
    assert!(CalendarDate::parse("31/04/2025").is_err());
    assert!(CalendarDate::parse("00/01/2025").is_err());
    assert!(CalendarDate::parse("10/13/2025").is_err());
    assert!(CalendarDate::parse("10/00/2025").is_err());
}

#[test]
fn test_parse_date_leap_years() {
    assert!(CalendarDate::parse("29/02/2024").is_ok());
    assert!(CalendarDate::parse("29/02/2000").is_ok());
    assert!(CalendarDate::parse("29/02/2023").is_err());
    assert!(CalendarDate::parse("29/02/1900").is_err());
}

#[test]
fn test_parse_date_rejects_out_of_range_year() {
    assert_eq!(
        CalendarDate::parse("01/01/1899"),
        Err(DomainError::DateOutOfRange { year: 1899 })
    );
    assert_eq!(
        CalendarDate::parse("01/01/2101"),
        Err(DomainError::DateOutOfRange { year: 2101 })
    );
    assert!(CalendarDate::parse("01/01/1900").is_ok());
    assert!(CalendarDate::parse("31/12/2100").is_ok());
}

#[test]
fn test_weekend_classification() {
    // 2024-01-06 is a Saturday, 2024-01-07 a Sunday, 2024-01-08 a Monday
    assert_eq!(date("06/01/2024").weekday(), Weekday::Saturday);
    assert!(date("06/01/2024").is_weekend());
    assert!(date("07/01/2024").is_weekend());
    assert!(!date("08/01/2024").is_weekend());
    assert!(!date("12/01/2024").is_weekend());
}

#[test]
fn test_weekend_classification_every_weekday() {
    let monday: CalendarDate = date("08/01/2024");
    let expected: [bool; 7] = [false, false, false, false, false, true, true];
    for (offset, weekend) in expected.into_iter().enumerate() {
        let day: CalendarDate = monday.offset_days(i64::try_from(offset).unwrap()).unwrap();
        assert_eq!(day.is_weekend(), weekend, "{day}");
    }
}

#[test]
fn test_offset_days_crosses_month_and_year() {
    assert_eq!(date("31/12/2025").offset_days(1).unwrap(), date("01/01/2026"));
    assert_eq!(date("28/02/2024").offset_days(1).unwrap(), date("29/02/2024"));
    assert_eq!(date("01/03/2024").offset_days(-1).unwrap(), date("29/02/2024"));
}

#[test]
fn test_offset_days_leaving_range_fails() {
    assert!(matches!(
        date("31/12/2100").offset_days(1),
        Err(DomainError::DateOutOfRange { year: 2101 })
    ));
}

#[test]
fn test_timestamp_display() {
    let stamp: Timestamp = Timestamp::new(date("05/01/2024"), clock(905));
    assert_eq!(stamp.to_string(), "05/01/2024 09:05");
}
