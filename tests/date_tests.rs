//! Tests for the period grammar and the duration formatting helpers.

use chrono::NaiveDate;
use ticktrack::utils::date::period_bounds;
use ticktrack::utils::formatting::secs2readable;
use ticktrack::utils::time::{format_centis, format_seconds};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_period_bounds_year() {
    assert_eq!(
        period_bounds("2026").unwrap(),
        (d(2026, 1, 1), d(2026, 12, 31))
    );
}

#[test]
fn test_period_bounds_month() {
    assert_eq!(
        period_bounds("2026-02").unwrap(),
        (d(2026, 2, 1), d(2026, 2, 28))
    );

    // leap year
    assert_eq!(
        period_bounds("2024-02").unwrap(),
        (d(2024, 2, 1), d(2024, 2, 29))
    );
}

#[test]
fn test_period_bounds_day() {
    assert_eq!(
        period_bounds("2026-08-06").unwrap(),
        (d(2026, 8, 6), d(2026, 8, 6))
    );
}

#[test]
fn test_period_bounds_ranges() {
    assert_eq!(
        period_bounds("2025:2026").unwrap(),
        (d(2025, 1, 1), d(2026, 12, 31))
    );

    assert_eq!(
        period_bounds("2026-01:2026-03").unwrap(),
        (d(2026, 1, 1), d(2026, 3, 31))
    );

    assert_eq!(
        period_bounds("2026-01-10:2026-01-20").unwrap(),
        (d(2026, 1, 10), d(2026, 1, 20))
    );
}

#[test]
fn test_period_bounds_rejects_garbage() {
    assert!(period_bounds("2026-9").is_err());
    assert!(period_bounds("banana").is_err());
    assert!(period_bounds("2026:2026-01").is_err());
    assert!(period_bounds("2026-03:2026-01").is_err());
}

#[test]
fn test_format_seconds() {
    assert_eq!(format_seconds(0), "00:00:00");
    assert_eq!(format_seconds(8 * 3600 + 5 * 60 + 9), "08:05:09");
    assert_eq!(format_seconds(-61), "-00:01:01");
}

#[test]
fn test_format_centis() {
    assert_eq!(format_centis(0), "00:00:00.00");
    assert_eq!(format_centis(500), "00:00:05.00");
    assert_eq!(format_centis(6543), "00:01:05.43");
}

#[test]
fn test_secs2readable() {
    assert_eq!(secs2readable(8700, true), "02:25");
    assert_eq!(secs2readable(8700, false), "02h 25m");
    assert_eq!(secs2readable(-3660, true), "-01:01");
}
