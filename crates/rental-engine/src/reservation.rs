//! Existing reservations as fetched from the booking service.
//!
//! Reservations are read-only inputs. Records with a missing or unparseable
//! date are kept (so callers can still list them) but never block a booking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{RentalError, Result};
use crate::range::{parse_calendar_date, DateRange};

/// A booking that already occupies the resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Opaque identifier assigned by the booking service.
    pub id: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    /// Display-only status (e.g. "confirmed"). Not consulted by conflict logic.
    pub status_label: String,
}

impl Reservation {
    pub fn new(id: impl Into<String>, range: DateRange) -> Self {
        Self {
            id: id.into(),
            start: Some(range.start),
            end: Some(range.end),
            status_label: String::new(),
        }
    }

    pub fn with_status(mut self, status_label: impl Into<String>) -> Self {
        self.status_label = status_label.into();
        self
    }

    /// The occupied range, or `None` when either date is missing.
    pub fn date_range(&self) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        }
    }

    /// The days this reservation keeps off the calendar. An inverted record
    /// (end before start) blocks the same days as its swapped form.
    pub fn blocked_range(&self) -> Option<DateRange> {
        self.date_range().map(|range| range.normalized())
    }
}

/// Wire shape of a reservation in the booking service's JSON.
///
/// The service may send `_id`, `id`, or both, and `startDate`/`endDate` or
/// `start`/`end`. Each spelling is its own field so a record carrying both
/// still parses; the plain `id`/`start`/`end` keys win when both are present.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReservationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl From<ReservationRecord> for Reservation {
    fn from(record: ReservationRecord) -> Self {
        let id = match record.id.or(record.object_id) {
            Some(id) => id,
            None => {
                warn!("reservation record has no id");
                String::new()
            }
        };
        let start = lenient_date(&id, "start", record.start.or(record.start_date).as_deref());
        let end = lenient_date(&id, "end", record.end.or(record.end_date).as_deref());
        Self {
            id,
            start,
            end,
            status_label: record.status.unwrap_or_default(),
        }
    }
}

fn lenient_date(id: &str, field: &str, raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?;
    match parse_calendar_date(raw) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!(reservation = id, field, error = %e, "ignoring unparseable reservation date");
            None
        }
    }
}

/// Parse a JSON array of reservation records.
///
/// Malformed JSON is an error. Individual records with bad dates are not:
/// they come back with the offending date set to `None`.
pub fn parse_reservations_json(json: &str) -> Result<Vec<Reservation>> {
    let records: Vec<ReservationRecord> = serde_json::from_str(json)
        .map_err(|e| RentalError::InvalidReservations(e.to_string()))?;
    Ok(records.into_iter().map(Reservation::from).collect())
}
