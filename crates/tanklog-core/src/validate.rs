//! Record creation and validation.
//!
//! [`create_record`] is the only way a [`FuelRecord`] enters a history.
//! It either returns a fully valid record or a [`RejectReason`]; there is
//! no partially valid state. Checks run in a fixed order and stop at the
//! first violation, so callers always see the same rejection for the same
//! input.

use chrono::NaiveDate;

use crate::error::RejectReason;
use crate::record::{FuelRecord, DATE_FORMAT};

/// Validate a candidate refuel against the existing history and build the
/// record.
///
/// Validation order:
/// 1. `date` parses as strict `YYYY-MM-DD`
/// 2. `date` is not earlier than the last record's date (ties allowed,
///    same-day refuels happen)
/// 3. `liters` is positive
/// 4. `price_per_liter` is positive
/// 5. `odometer` is positive
/// 6. `odometer` exceeds the last recorded value
///
/// Only the last element of `history` is consulted; insertion order is
/// trusted, never re-derived. The accepted record stores the date text as
/// given, not a reparsed value.
pub fn create_record(
    date: &str,
    liters: f64,
    price_per_liter: f64,
    odometer: i64,
    history: &[FuelRecord],
) -> Result<FuelRecord, RejectReason> {
    let candidate =
        NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| RejectReason::DateFormat)?;

    if let Some(last) = history.last() {
        // The stored date can be unreadable if the data file was
        // hand-edited; that is the file's fault, not the input's.
        let last_date = last.parsed_date().ok_or(RejectReason::CorruptLastDate)?;
        if candidate < last_date {
            return Err(RejectReason::DateBeforeLast);
        }
    }

    if liters <= 0.0 {
        return Err(RejectReason::LitersNotPositive);
    }

    if price_per_liter <= 0.0 {
        return Err(RejectReason::PriceNotPositive);
    }

    if odometer <= 0 {
        return Err(RejectReason::OdometerNotPositive);
    }

    if let Some(last) = history.last() {
        if odometer <= last.odometer {
            return Err(RejectReason::OdometerNotIncreasing);
        }
    }

    Ok(FuelRecord {
        date: date.to_string(),
        liters,
        price_per_liter,
        odometer,
    })
}
