//! Calendar date ranges and date parsing.
//!
//! All booking arithmetic works on whole calendar days. Time-of-day is dropped
//! when a date string is parsed, so `2024-06-12T23:59:59Z` and `2024-06-12`
//! name the same day.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{RentalError, Result};

/// An inclusive range of calendar dates.
///
/// `start <= end` is expected but not enforced by [`DateRange::new`]; use
/// [`DateRange::checked`] where the ordering matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Build a range, rejecting one whose end falls before its start.
    pub fn checked(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(RentalError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// The same range with its endpoints swapped if it was inverted.
    pub fn normalized(&self) -> Self {
        if self.is_inverted() {
            Self::new(self.end, self.start)
        } else {
            *self
        }
    }

    /// Inclusive overlap: ranges sharing even a single boundary day overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The days shared by both ranges, if any.
    pub fn intersection(&self, other: &DateRange) -> Option<DateRange> {
        if !self.overlaps(other) {
            return None;
        }
        Some(DateRange::new(
            self.start.max(other.start),
            self.end.min(other.end),
        ))
    }

    /// Number of calendar days covered, counting both endpoints.
    /// An inverted range covers no days.
    pub fn calendar_days(&self) -> i64 {
        if self.is_inverted() {
            0
        } else {
            (self.end - self.start).num_days() + 1
        }
    }

    /// Iterate every calendar day in the range, both endpoints included.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A user's date selection, either end of which may not have been picked yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSelection {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateSelection {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// The selected range, once both dates are present.
    pub fn range(&self) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

impl From<DateRange> for DateSelection {
    fn from(range: DateRange) -> Self {
        Self {
            start: Some(range.start),
            end: Some(range.end),
        }
    }
}

/// Parse a date string into a calendar date, dropping any time-of-day.
///
/// Accepts `YYYY-MM-DD`, naive `YYYY-MM-DDTHH:MM:SS[.fff]`, and RFC 3339
/// (e.g. `2024-06-12T23:59:59Z`). The offset of an RFC 3339 value is ignored:
/// the date is the one written in the string, with no time-zone shift.
pub fn parse_calendar_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|ndt| ndt.date())
        .map_err(|e| RentalError::InvalidDate(format!("'{}': {}", s, e)))
}
