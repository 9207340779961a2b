//! # rental-engine
//!
//! Availability and pricing for car rental bookings.
//!
//! Given the reservations already on a car's calendar, the engine answers
//! whether a requested date range is free, what it costs, and which window is
//! the earliest one still open. Everything works on whole calendar days with
//! inclusive boundaries, so a booking may not start on the day another ends.
//!
//! ## Modules
//!
//! - [`range`] — `DateRange`, `DateSelection`, date parsing
//! - [`reservation`] — existing reservations and their JSON wire shape
//! - [`conflict`] — inclusive-overlap conflict detection
//! - [`pricing`] — rental duration, daily rate, total cost
//! - [`suggest`] — bounded search for the earliest free window
//! - [`blocked`] — merged blocked ranges and free gaps
//! - [`request`] — the booking payload sent to the booking service
//! - [`session`] — booking page state driven by explicit actions
//! - [`config`] — TOML-loadable engine settings
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rental_engine::{has_conflict, DateRange, Reservation};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
//! let existing = vec![Reservation::new("r1", DateRange::new(day(10), day(12)))];
//!
//! // Starting on the day the previous rental ends is a conflict.
//! assert!(has_conflict(&DateRange::new(day(12), day(14)), &existing));
//! assert!(!has_conflict(&DateRange::new(day(13), day(14)), &existing));
//! ```

pub mod blocked;
pub mod config;
pub mod conflict;
pub mod error;
pub mod pricing;
pub mod range;
pub mod request;
pub mod reservation;
pub mod session;
pub mod suggest;

pub use blocked::{blocked_dates, blocked_ranges, first_free_window, free_windows};
pub use config::{EngineConfig, PricingConfig, SearchConfig};
pub use conflict::{find_conflicts, has_conflict, Conflict};
pub use error::RentalError;
pub use pricing::{compute_duration, compute_total_cost, quote, DailyRate, PricingQuote};
pub use range::{parse_calendar_date, DateRange, DateSelection};
pub use request::{prepare_booking, BookingRequest};
pub use reservation::{parse_reservations_json, Reservation, ReservationRecord};
pub use session::{Availability, BookingAction, BookingSession, ReservationFeed};
pub use suggest::{suggest_window, suggest_with};
