//! WASM bindings for rental-engine.
//!
//! Exposes conflict detection, pricing, window suggestion and blocked-date
//! merging to the booking page via `wasm-bindgen`. Complex values cross the
//! boundary as JSON strings; dates are `YYYY-MM-DD` or ISO 8601 timestamps.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p rental-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/rental_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use rental_engine::{DailyRate, DateRange, DateSelection, Reservation};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input format for a candidate range passed from JavaScript.
#[derive(Deserialize)]
struct RangeInput {
    start: String,
    end: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteDto {
    duration_days: u32,
    total_cost: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    rental_engine::parse_calendar_date(s).map_err(js_err)
}

/// Empty strings mean "not selected yet".
fn parse_optional_date(s: Option<String>) -> Result<Option<NaiveDate>, JsValue> {
    match s.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_date(raw).map(Some),
    }
}

fn parse_range_json(json: &str) -> Result<DateRange, JsValue> {
    let input: RangeInput = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid range JSON: {}", e)))?;
    Ok(DateRange::new(parse_date(&input.start)?, parse_date(&input.end)?))
}

fn parse_reservations(json: &str) -> Result<Vec<Reservation>, JsValue> {
    rental_engine::parse_reservations_json(json).map_err(js_err)
}

fn parse_rate(rate: &str) -> Result<DailyRate, JsValue> {
    let amount: Decimal = rate
        .trim()
        .parse()
        .map_err(|e| JsValue::from_str(&format!("Invalid rate '{}': {}", rate, e)))?;
    DailyRate::new(amount).map_err(js_err)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Does the candidate range overlap any reservation?
///
/// `candidate_json` is a `{start, end}` object; `reservations_json` is the
/// reservation list as returned by the booking service.
#[wasm_bindgen(js_name = "hasConflict")]
pub fn has_conflict(candidate_json: &str, reservations_json: &str) -> Result<bool, JsValue> {
    let candidate = parse_range_json(candidate_json)?;
    let reservations = parse_reservations(reservations_json)?;
    Ok(rental_engine::has_conflict(&candidate, &reservations))
}

/// Every reservation overlapping the candidate range.
///
/// Returns a JSON array of `{reservation_id, reserved, overlap, overlap_days}`.
#[wasm_bindgen(js_name = "findConflicts")]
pub fn find_conflicts(candidate_json: &str, reservations_json: &str) -> Result<String, JsValue> {
    let candidate = parse_range_json(candidate_json)?;
    let reservations = parse_reservations(reservations_json)?;
    to_json(&rental_engine::find_conflicts(&candidate, &reservations))
}

/// Duration and total cost of a selection. Either date may be omitted or
/// empty, in which case both figures are zero.
///
/// `rate` is a decimal string (e.g. "49.90"). Returns `{durationDays, totalCost}`
/// with `totalCost` as a decimal string.
#[wasm_bindgen(js_name = "quote")]
pub fn quote(start: Option<String>, end: Option<String>, rate: &str) -> Result<String, JsValue> {
    let selection = DateSelection::new(parse_optional_date(start)?, parse_optional_date(end)?);
    let q = rental_engine::quote(&selection, parse_rate(rate)?);
    to_json(&QuoteDto {
        duration_days: q.duration_days,
        total_cost: q.total_cost.to_string(),
    })
}

/// Earliest conflict-free window, as a `{start, end}` JSON object.
///
/// Fails with a "No availability found" message once `max_search_days`
/// start dates have been probed.
#[wasm_bindgen(js_name = "suggestWindow")]
pub fn suggest_window(
    baseline: &str,
    reservations_json: &str,
    window_length_days: u32,
    search_start_offset_days: u32,
    max_search_days: u32,
) -> Result<String, JsValue> {
    let baseline = parse_date(baseline)?;
    let reservations = parse_reservations(reservations_json)?;
    let window = rental_engine::suggest_window(
        baseline,
        &reservations,
        window_length_days,
        search_start_offset_days,
        max_search_days,
    )
    .map_err(js_err)?;
    to_json(&window)
}

/// Merged blocked ranges for rendering the calendar, as a JSON array of
/// `{start, end}` objects.
#[wasm_bindgen(js_name = "blockedRanges")]
pub fn blocked_ranges(reservations_json: &str) -> Result<String, JsValue> {
    let reservations = parse_reservations(reservations_json)?;
    to_json(&rental_engine::blocked_ranges(&reservations))
}

/// Booking payload for a free range, with day-boundary timestamps.
///
/// Fails if the range is inverted or overlaps an existing reservation.
#[wasm_bindgen(js_name = "bookingRequest")]
pub fn booking_request(
    resource_id: &str,
    candidate_json: &str,
    reservations_json: &str,
    rate: &str,
) -> Result<String, JsValue> {
    let candidate = parse_range_json(candidate_json)?;
    let reservations = parse_reservations(reservations_json)?;
    let request =
        rental_engine::prepare_booking(resource_id, &candidate, &reservations, parse_rate(rate)?)
            .map_err(js_err)?;
    to_json(&request)
}
