//! Rental duration and total cost for a date selection.
//!
//! Both calculations return `0` while either date is still unselected. Once
//! both dates are present the duration is at least one day, so a same-day
//! rental is charged as a full day.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{RentalError, Result};
use crate::range::DateSelection;

const SECONDS_PER_DAY: i64 = 86_400;

/// A non-negative price per rental day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct DailyRate(Decimal);

impl DailyRate {
    pub fn new(amount: Decimal) -> Result<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(RentalError::NegativeRate(amount));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for DailyRate {
    type Error = RentalError;

    fn try_from(amount: Decimal) -> Result<Self> {
        Self::new(amount)
    }
}

impl From<DailyRate> for Decimal {
    fn from(rate: DailyRate) -> Self {
        rate.0
    }
}

/// Duration and cost of a not-yet-submitted booking. Recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingQuote {
    pub duration_days: u32,
    pub total_cost: Decimal,
}

impl PricingQuote {
    /// Returned while the selection is incomplete.
    pub const ZERO: PricingQuote = PricingQuote {
        duration_days: 0,
        total_cost: Decimal::ZERO,
    };

    pub fn is_zero(&self) -> bool {
        self.duration_days == 0
    }
}

/// Number of rental days covered by `selection`.
///
/// The absolute day difference between the two dates, rounded up and floored
/// at 1. Returns 0 if either date is missing.
pub fn compute_duration(selection: &DateSelection) -> u32 {
    let Some(range) = selection.range() else {
        return 0;
    };
    let seconds = (range.end - range.start).num_seconds().abs();
    let days = (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
    u32::try_from(days).unwrap_or(u32::MAX).max(1)
}

/// `rate * duration`. No taxes, fees or discounts. Returns 0 if either date is
/// missing.
pub fn compute_total_cost(selection: &DateSelection, rate: DailyRate) -> Decimal {
    let days = compute_duration(selection);
    rate.amount() * Decimal::from(days)
}

/// Duration and total cost together.
pub fn quote(selection: &DateSelection, rate: DailyRate) -> PricingQuote {
    if !selection.is_complete() {
        return PricingQuote::ZERO;
    }
    PricingQuote {
        duration_days: compute_duration(selection),
        total_cost: compute_total_cost(selection, rate),
    }
}
