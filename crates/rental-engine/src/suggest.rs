//! Suggest the earliest conflict-free rental window.
//!
//! Probes start dates one day at a time from `baseline + offset`, testing a
//! window of fixed length against [`has_conflict`]. The scan is bounded: after
//! `max_search_days` probes it gives up with [`RentalError::NoAvailability`].

use chrono::{Days, NaiveDate};
use tracing::{debug, warn};

use crate::config::SearchConfig;
use crate::conflict::has_conflict;
use crate::error::{RentalError, Result};
use crate::range::DateRange;
use crate::reservation::Reservation;

/// Find the first window `[probe, probe + window_length_days]` that does not
/// conflict with `existing`, probing from `baseline + search_start_offset_days`.
///
/// # Errors
/// - `RentalError::InvalidConfig` if `max_search_days` is 0.
/// - `RentalError::NoAvailability` if every probe within the bound conflicts.
/// - `RentalError::InvalidDate` if the probe walks past the end of the calendar.
pub fn suggest_window(
    baseline: NaiveDate,
    existing: &[Reservation],
    window_length_days: u32,
    search_start_offset_days: u32,
    max_search_days: u32,
) -> Result<DateRange> {
    if max_search_days == 0 {
        return Err(RentalError::InvalidConfig(
            "max_search_days must be at least 1".to_string(),
        ));
    }

    let first_probe = add_days(baseline, search_start_offset_days)?;
    let mut probe = first_probe;

    for attempt in 0..max_search_days {
        let trial = DateRange::new(probe, add_days(probe, window_length_days)?);
        if !has_conflict(&trial, existing) {
            debug!(window = %trial, attempts = attempt + 1, "found free window");
            return Ok(trial);
        }
        probe = add_days(probe, 1)?;
    }

    warn!(
        from = %first_probe,
        searched_days = max_search_days,
        "no conflict-free window found"
    );
    Err(RentalError::NoAvailability {
        searched_days: max_search_days,
        from: first_probe,
    })
}

/// [`suggest_window`] with parameters taken from a [`SearchConfig`].
pub fn suggest_with(
    baseline: NaiveDate,
    existing: &[Reservation],
    config: &SearchConfig,
) -> Result<DateRange> {
    suggest_window(
        baseline,
        existing,
        config.window_length_days,
        config.search_start_offset_days,
        config.max_search_days,
    )
}

fn add_days(date: NaiveDate, days: u32) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| RentalError::InvalidDate(format!("{} + {} days is out of range", date, days)))
}
