//! Tests for blocked-range merging and free-window computation.

use chrono::NaiveDate;
use rental_engine::{
    blocked_dates, blocked_ranges, first_free_window, free_windows, DateRange, Reservation,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

fn june(id: &str, start: u32, end: u32) -> Reservation {
    Reservation::new(id, DateRange::new(day(start), day(end)))
}

fn range(start: u32, end: u32) -> DateRange {
    DateRange::new(day(start), day(end))
}

#[test]
fn no_reservations_no_blocked_ranges() {
    assert!(blocked_ranges(&[]).is_empty());
    assert!(blocked_dates(&[]).is_empty());
}

#[test]
fn unsorted_reservations_come_back_sorted() {
    let existing = vec![june("b", 20, 22), june("a", 3, 4)];
    assert_eq!(blocked_ranges(&existing), vec![range(3, 4), range(20, 22)]);
}

#[test]
fn overlapping_reservations_merge() {
    let existing = vec![june("a", 3, 8), june("b", 6, 10)];
    assert_eq!(blocked_ranges(&existing), vec![range(3, 10)]);
}

#[test]
fn back_to_back_reservations_merge() {
    // 3-5 and 6-8 leave no free day between them.
    let existing = vec![june("a", 3, 5), june("b", 6, 8)];
    assert_eq!(blocked_ranges(&existing), vec![range(3, 8)]);
}

#[test]
fn one_free_day_keeps_ranges_apart() {
    let existing = vec![june("a", 3, 5), june("b", 7, 8)];
    assert_eq!(blocked_ranges(&existing), vec![range(3, 5), range(7, 8)]);
}

#[test]
fn contained_reservation_absorbed() {
    let existing = vec![june("outer", 1, 20), june("inner", 5, 6)];
    assert_eq!(blocked_ranges(&existing), vec![range(1, 20)]);
}

#[test]
fn inverted_and_incomplete_reservations() {
    let mut incomplete = june("c", 1, 2);
    incomplete.start = None;
    let existing = vec![june("inverted", 12, 10), incomplete];

    assert_eq!(blocked_ranges(&existing), vec![range(10, 12)]);
}

#[test]
fn blocked_dates_lists_every_day_once() {
    let existing = vec![june("a", 3, 4), june("b", 4, 5), june("c", 9, 9)];

    assert_eq!(
        blocked_dates(&existing),
        vec![day(3), day(4), day(5), day(9)]
    );
}

#[test]
fn free_windows_between_blocks() {
    let existing = vec![june("a", 5, 7), june("b", 10, 12)];

    let free = free_windows(&existing, &range(1, 15));

    assert_eq!(free, vec![range(1, 4), range(8, 9), range(13, 15)]);
}

#[test]
fn free_windows_with_empty_calendar_is_the_horizon() {
    assert_eq!(free_windows(&[], &range(1, 30)), vec![range(1, 30)]);
}

#[test]
fn blocks_straddling_horizon_edges_are_clipped() {
    let existing = vec![june("a", 1, 4), june("b", 12, 25)];

    let free = free_windows(&existing, &range(3, 15));

    assert_eq!(free, vec![range(5, 11)]);
}

#[test]
fn fully_booked_horizon_has_no_free_windows() {
    let existing = vec![june("a", 1, 30)];
    assert!(free_windows(&existing, &range(5, 10)).is_empty());
}

#[test]
fn inverted_horizon_has_no_free_windows() {
    assert!(free_windows(&[], &range(10, 5)).is_empty());
}

#[test]
fn first_free_window_respects_minimum_length() {
    let existing = vec![june("a", 3, 4), june("b", 7, 10)];

    // Free: 1-2 (2 days), 5-6 (2 days), 11-20 (10 days).
    assert_eq!(first_free_window(&existing, &range(1, 20), 2), Some(range(1, 2)));
    assert_eq!(first_free_window(&existing, &range(1, 20), 3), Some(range(11, 20)));
    assert_eq!(first_free_window(&existing, &range(1, 20), 11), None);
}
