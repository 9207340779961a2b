//! Detect overlaps between a candidate booking and existing reservations.
//!
//! Overlap is inclusive on both ends: a booking that starts on the day another
//! ends IS a conflict, since the car cannot be handed over on the same day.
//! Reservations missing either date are skipped and never block.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::range::DateRange;
use crate::reservation::Reservation;

/// A reservation that overlaps the candidate range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub reservation_id: String,
    pub reserved: DateRange,
    /// The days claimed by both the candidate and the reservation.
    pub overlap: DateRange,
    pub overlap_days: i64,
}

/// Does `candidate` overlap any of the `existing` reservations?
///
/// Two ranges conflict when `a.start <= b.end && a.end >= b.start`.
pub fn has_conflict(candidate: &DateRange, existing: &[Reservation]) -> bool {
    if existing.is_empty() {
        return false;
    }

    existing
        .iter()
        .filter_map(blocking_range)
        .any(|reserved| candidate.overlaps(&reserved))
}

/// Find every reservation that overlaps `candidate`, in input order.
///
/// Agrees with [`has_conflict`]: the result is empty exactly when
/// `has_conflict` returns `false`.
pub fn find_conflicts(candidate: &DateRange, existing: &[Reservation]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for reservation in existing {
        let Some(reserved) = blocking_range(reservation) else {
            continue;
        };
        let Some(overlap) = candidate.intersection(&reserved) else {
            continue;
        };
        conflicts.push(Conflict {
            reservation_id: reservation.id.clone(),
            reserved,
            overlap,
            overlap_days: overlap.calendar_days(),
        });
    }

    conflicts
}

/// The range a reservation blocks, or `None` for an incomplete record.
/// Inverted records are swapped, matching the blocked-dates calendar.
fn blocking_range(reservation: &Reservation) -> Option<DateRange> {
    let range = reservation.blocked_range();
    if range.is_none() {
        debug!(
            reservation = %reservation.id,
            "skipping reservation with missing start or end date"
        );
    }
    range
}
