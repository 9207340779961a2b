//! Booking page state for a single resource.
//!
//! A [`BookingSession`] is an explicit value owned by the caller and changed
//! only through [`BookingSession::apply`]. Every derived view (quote,
//! availability, blocked dates) is recomputed from the current state on each
//! call.
//!
//! The session fails closed: until the reservation list has loaded
//! successfully, no booking can be submitted.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::blocked;
use crate::conflict::{find_conflicts, Conflict};
use crate::error::{RentalError, Result};
use crate::pricing::{self, DailyRate, PricingQuote};
use crate::range::DateSelection;
use crate::request::BookingRequest;
use crate::reservation::Reservation;

/// State of the reservation list fetched from the booking service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReservationFeed {
    /// Fetch not finished yet.
    #[default]
    Pending,
    Loaded(Vec<Reservation>),
    /// Fetch failed; holds the message shown to the user.
    Failed(String),
}

/// The only ways a session changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingAction {
    ReservationsLoaded(Vec<Reservation>),
    ReservationsFailed(String),
    SelectStart(NaiveDate),
    SelectEnd(NaiveDate),
    ClearSelection,
}

/// Whether the current selection can be booked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// One or both dates not chosen.
    Incomplete,
    /// End date before start date.
    InvalidRange,
    /// Reservation list still loading.
    Unverified,
    /// Reservation list failed to load.
    Unavailable(String),
    Conflict(Vec<Conflict>),
    Available,
}

#[derive(Debug, Clone)]
pub struct BookingSession {
    resource_id: String,
    daily_rate: DailyRate,
    selection: DateSelection,
    feed: ReservationFeed,
}

impl BookingSession {
    pub fn new(resource_id: impl Into<String>, daily_rate: DailyRate) -> Self {
        Self {
            resource_id: resource_id.into(),
            daily_rate,
            selection: DateSelection::default(),
            feed: ReservationFeed::Pending,
        }
    }

    pub fn apply(&mut self, action: BookingAction) {
        match action {
            BookingAction::ReservationsLoaded(reservations) => {
                debug!(
                    resource = %self.resource_id,
                    count = reservations.len(),
                    "reservations loaded"
                );
                self.feed = ReservationFeed::Loaded(reservations);
            }
            BookingAction::ReservationsFailed(reason) => {
                warn!(
                    resource = %self.resource_id,
                    %reason,
                    "reservation fetch failed, booking disabled"
                );
                self.feed = ReservationFeed::Failed(reason);
            }
            BookingAction::SelectStart(date) => self.selection.start = Some(date),
            BookingAction::SelectEnd(date) => self.selection.end = Some(date),
            BookingAction::ClearSelection => self.selection = DateSelection::default(),
        }
    }

    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    pub fn daily_rate(&self) -> DailyRate {
        self.daily_rate
    }

    pub fn selection(&self) -> &DateSelection {
        &self.selection
    }

    pub fn feed(&self) -> &ReservationFeed {
        &self.feed
    }

    /// Running total for the current selection.
    pub fn quote(&self) -> PricingQuote {
        pricing::quote(&self.selection, self.daily_rate)
    }

    pub fn availability(&self) -> Availability {
        let Some(range) = self.selection.range() else {
            return Availability::Incomplete;
        };
        if range.is_inverted() {
            return Availability::InvalidRange;
        }
        match &self.feed {
            ReservationFeed::Pending => Availability::Unverified,
            ReservationFeed::Failed(reason) => Availability::Unavailable(reason.clone()),
            ReservationFeed::Loaded(reservations) => {
                let conflicts = find_conflicts(&range, reservations);
                if conflicts.is_empty() {
                    Availability::Available
                } else {
                    Availability::Conflict(conflicts)
                }
            }
        }
    }

    pub fn can_submit(&self) -> bool {
        self.availability() == Availability::Available
    }

    /// Days to render as unavailable. Empty until the feed has loaded.
    pub fn blocked_dates(&self) -> Vec<NaiveDate> {
        match &self.feed {
            ReservationFeed::Loaded(reservations) => blocked::blocked_dates(reservations),
            _ => Vec::new(),
        }
    }

    /// Build the payload to submit for the current selection.
    pub fn submission(&self) -> Result<BookingRequest> {
        let range = self
            .selection
            .range()
            .ok_or(RentalError::IncompleteSelection)?;

        match self.availability() {
            Availability::Available => Ok(BookingRequest::new(
                self.resource_id.clone(),
                &range,
                self.quote(),
            )),
            Availability::Incomplete => Err(RentalError::IncompleteSelection),
            Availability::InvalidRange => Err(RentalError::InvalidRange {
                start: range.start,
                end: range.end,
            }),
            Availability::Unverified => Err(RentalError::ReservationsPending),
            Availability::Unavailable(reason) => Err(RentalError::FeedUnavailable(reason)),
            Availability::Conflict(conflicts) => Err(RentalError::Conflict {
                count: conflicts.len(),
            }),
        }
    }
}
