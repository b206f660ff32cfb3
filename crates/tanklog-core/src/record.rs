//! The refuel record data model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Strict date format used everywhere a date is parsed or stored.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One refueling event.
///
/// Records are created through [`crate::validate::create_record`], which
/// checks every field against the existing history, and are immutable once
/// appended. The date is kept as the text the user entered, never
/// reformatted, so hand-edited data files compare the same way they read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelRecord {
    /// Calendar date of the refuel, `YYYY-MM-DD` text
    pub date: String,

    /// Volume dispensed, strictly positive
    pub liters: f64,

    /// Unit price, strictly positive
    #[serde(rename = "pricePerLiter")]
    pub price_per_liter: f64,

    /// Cumulative vehicle distance counter at time of refueling
    pub odometer: i64,
}

impl FuelRecord {
    /// Cost of this refuel (`liters * price_per_liter`).
    pub fn cost(&self) -> f64 {
        self.liters * self.price_per_liter
    }

    /// Parse the stored date text.
    ///
    /// Returns `None` when the stored text is not a valid `YYYY-MM-DD`
    /// date, which can only happen with a corrupted or hand-edited file.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}
