//! Error types for rental-engine operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RentalError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid reservation data: {0}")]
    InvalidReservations(String),

    #[error("Daily rate must not be negative, got {0}")]
    NegativeRate(Decimal),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The bounded window search probed every candidate start date without
    /// finding a free window.
    #[error("No availability found in {searched_days} days starting {from}")]
    NoAvailability { searched_days: u32, from: NaiveDate },

    #[error("Both a start and an end date must be selected")]
    IncompleteSelection,

    #[error("Reservation data unavailable: {0}")]
    FeedUnavailable(String),

    #[error("Reservation data has not been loaded yet")]
    ReservationsPending,

    #[error("Selected dates overlap {count} existing reservation(s)")]
    Conflict { count: usize },
}

pub type Result<T> = std::result::Result<T, RentalError>;
