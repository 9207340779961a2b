//! Tests for the bounded earliest-free-window search.

use chrono::NaiveDate;
use rental_engine::{
    has_conflict, suggest_window, suggest_with, DateRange, RentalError, Reservation,
    SearchConfig,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn reservation(id: &str, start: NaiveDate, end: NaiveDate) -> Reservation {
    Reservation::new(id, DateRange::new(start, end))
}

#[test]
fn empty_calendar_returns_first_probe() {
    let baseline = date(2024, 6, 1);

    let window = suggest_window(baseline, &[], 3, 1, 365).unwrap();

    assert_eq!(window, DateRange::new(date(2024, 6, 2), date(2024, 6, 5)));
}

#[test]
fn zero_offset_starts_at_baseline() {
    let baseline = date(2024, 6, 1);
    let window = suggest_window(baseline, &[], 2, 0, 10).unwrap();
    assert_eq!(window.start, baseline);
}

#[test]
fn skips_past_a_blocking_reservation() {
    // Baseline 1st, probe from 2nd with a 2-day window; reserved 3rd-6th.
    // 2nd-4th, 3rd-5th, ..., 6th-8th all touch the reservation; 7th-9th is free.
    let existing = vec![reservation("r1", date(2024, 6, 3), date(2024, 6, 6))];

    let window = suggest_window(date(2024, 6, 1), &existing, 2, 1, 365).unwrap();

    assert_eq!(window, DateRange::new(date(2024, 6, 7), date(2024, 6, 9)));
    assert!(!has_conflict(&window, &existing));
}

#[test]
fn earliest_gap_wins_over_later_gaps() {
    // Gap on the 8th-9th fits a 1-day window (8th-9th) before the second booking.
    let existing = vec![
        reservation("r1", date(2024, 6, 2), date(2024, 6, 7)),
        reservation("r2", date(2024, 6, 10), date(2024, 6, 20)),
    ];

    let window = suggest_window(date(2024, 6, 1), &existing, 1, 1, 365).unwrap();

    assert_eq!(window, DateRange::new(date(2024, 6, 8), date(2024, 6, 9)));
}

#[test]
fn gap_too_short_is_skipped() {
    // Free 8th-9th cannot hold a 3-day window; next free start is the 21st.
    let existing = vec![
        reservation("r1", date(2024, 6, 2), date(2024, 6, 7)),
        reservation("r2", date(2024, 6, 10), date(2024, 6, 20)),
    ];

    let window = suggest_window(date(2024, 6, 1), &existing, 3, 1, 365).unwrap();

    assert_eq!(window.start, date(2024, 6, 21));
}

#[test]
fn exhausting_the_bound_reports_no_availability() {
    let existing = vec![reservation("long", date(2024, 1, 1), date(2025, 12, 31))];

    let err = suggest_window(date(2024, 6, 1), &existing, 3, 1, 30).unwrap_err();

    assert_eq!(
        err,
        RentalError::NoAvailability {
            searched_days: 30,
            from: date(2024, 6, 2),
        }
    );
}

#[test]
fn last_probe_within_bound_is_tried() {
    // Probes: 2nd..=6th (5 probes). Reserved through the 5th, so the 6th is the
    // last probe allowed and must still succeed.
    let existing = vec![reservation("r1", date(2024, 6, 1), date(2024, 6, 5))];

    let window = suggest_window(date(2024, 6, 1), &existing, 0, 1, 5).unwrap();
    assert_eq!(window, DateRange::new(date(2024, 6, 6), date(2024, 6, 6)));

    let err = suggest_window(date(2024, 6, 1), &existing, 0, 1, 4).unwrap_err();
    assert!(matches!(err, RentalError::NoAvailability { .. }));
}

#[test]
fn zero_bound_rejected() {
    let err = suggest_window(date(2024, 6, 1), &[], 3, 1, 0).unwrap_err();
    assert!(matches!(err, RentalError::InvalidConfig(_)));
}

#[test]
fn incomplete_reservations_do_not_block_suggestions() {
    let mut broken = reservation("r1", date(2024, 6, 2), date(2024, 6, 10));
    broken.end = None;

    let window = suggest_window(date(2024, 6, 1), &[broken], 3, 1, 365).unwrap();
    assert_eq!(window.start, date(2024, 6, 2));
}

#[test]
fn config_defaults_drive_the_search() {
    let config = SearchConfig::default();

    let window = suggest_with(date(2024, 6, 1), &[], &config).unwrap();

    assert_eq!(window, DateRange::new(date(2024, 6, 2), date(2024, 6, 5)));
}
