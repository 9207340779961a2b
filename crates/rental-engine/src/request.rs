//! The reservation payload submitted to the booking service.
//!
//! Dates go over the wire as UTC timestamps pinned to the start of the first
//! day and the end of the last day, so the service sees the same inclusive
//! range the conflict detector checked.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::conflict::find_conflicts;
use crate::error::{RentalError, Result};
use crate::pricing::{quote, DailyRate, PricingQuote};
use crate::range::DateRange;
use crate::reservation::Reservation;

pub const START_OF_DAY_SUFFIX: &str = "T00:00:00Z";
pub const END_OF_DAY_SUFFIX: &str = "T23:59:59Z";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub resource_id: String,
    pub start_date: String,
    pub end_date: String,
    pub duration_days: u32,
    pub total_cost: Decimal,
}

impl BookingRequest {
    pub fn new(resource_id: impl Into<String>, range: &DateRange, quote: PricingQuote) -> Self {
        Self {
            resource_id: resource_id.into(),
            start_date: format!("{}{}", range.start.format("%Y-%m-%d"), START_OF_DAY_SUFFIX),
            end_date: format!("{}{}", range.end.format("%Y-%m-%d"), END_OF_DAY_SUFFIX),
            duration_days: quote.duration_days,
            total_cost: quote.total_cost,
        }
    }
}

/// Validate `range` against `existing` and build the request to submit.
///
/// # Errors
/// - `RentalError::InvalidRange` if the range ends before it starts.
/// - `RentalError::Conflict` if the range overlaps any reservation.
pub fn prepare_booking(
    resource_id: impl Into<String>,
    range: &DateRange,
    existing: &[Reservation],
    rate: DailyRate,
) -> Result<BookingRequest> {
    let range = DateRange::checked(range.start, range.end)?;

    let conflicts = find_conflicts(&range, existing);
    if !conflicts.is_empty() {
        return Err(RentalError::Conflict {
            count: conflicts.len(),
        });
    }

    Ok(BookingRequest::new(
        resource_id,
        &range,
        quote(&range.into(), rate),
    ))
}
