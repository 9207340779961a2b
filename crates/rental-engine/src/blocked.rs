//! Blocked and free calendar days for a resource.
//!
//! Sorts reservations by start date, merges overlapping or back-to-back
//! reservations into blocked ranges, then computes the free gaps between
//! them within a horizon. Ranges are inclusive on both ends.

use chrono::{Days, NaiveDate};

use crate::range::DateRange;
use crate::reservation::Reservation;

/// Merge reservations into sorted, disjoint blocked ranges.
///
/// Reservations that overlap or sit on consecutive days collapse into one
/// range, so any two returned ranges have at least one free day between them.
/// Incomplete reservations are ignored; inverted ones are normalized.
pub fn blocked_ranges(existing: &[Reservation]) -> Vec<DateRange> {
    let mut ranges: Vec<DateRange> = existing
        .iter()
        .filter_map(Reservation::blocked_range)
        .collect();

    if ranges.is_empty() {
        return Vec::new();
    }

    ranges.sort();

    let mut merged: Vec<DateRange> = Vec::new();
    for range in ranges {
        if let Some(last) = merged.last_mut() {
            if range.start <= next_day(last.end) {
                last.end = last.end.max(range.end);
                continue;
            }
        }
        merged.push(range);
    }

    merged
}

/// Every blocked calendar day, sorted and without duplicates.
pub fn blocked_dates(existing: &[Reservation]) -> Vec<NaiveDate> {
    blocked_ranges(existing)
        .iter()
        .flat_map(DateRange::days)
        .collect()
}

/// Free ranges within `horizon` (inclusive), given the existing reservations.
///
/// Returns the gaps between blocked ranges, sorted by start date.
pub fn free_windows(existing: &[Reservation], horizon: &DateRange) -> Vec<DateRange> {
    if horizon.is_inverted() {
        return Vec::new();
    }

    let mut free = Vec::new();
    let mut cursor = Some(horizon.start);

    for blocked in blocked_ranges(existing) {
        let Some(from) = cursor else {
            break;
        };
        if blocked.end < from {
            continue;
        }
        if blocked.start > horizon.end {
            break;
        }
        if from < blocked.start {
            free.push(DateRange::new(from, previous_day(blocked.start)));
        }
        cursor = blocked.end.checked_add_days(Days::new(1));
    }

    if let Some(from) = cursor {
        if from <= horizon.end {
            free.push(DateRange::new(from, horizon.end));
        }
    }

    free
}

/// The first free range within `horizon` of at least `min_days` calendar days.
pub fn first_free_window(
    existing: &[Reservation],
    horizon: &DateRange,
    min_days: i64,
) -> Option<DateRange> {
    free_windows(existing, horizon)
        .into_iter()
        .find(|window| window.calendar_days() >= min_days)
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX)
}

fn previous_day(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(1)).unwrap_or(NaiveDate::MIN)
}
