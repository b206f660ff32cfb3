//! Derived statistics over a refuel history.
//!
//! All functions assume the slice is in insertion order (the order the
//! validator enforced) and never re-sort or re-validate. "First" and
//! "last" mean position, not minimum and maximum: on a corrupted or
//! hand-edited file the positional reading is what the rest of the system
//! acts on, so it is preserved here.

use serde::Serialize;

use crate::record::FuelRecord;

/// Total volume over the whole history. Zero for an empty history.
pub fn total_liters(history: &[FuelRecord]) -> f64 {
    history.iter().map(|r| r.liters).sum()
}

/// Total fuel spend over the whole history. Zero for an empty history.
pub fn total_cost(history: &[FuelRecord]) -> f64 {
    history.iter().map(|r| r.cost()).sum()
}

/// Distance covered between the first and last refuel.
///
/// Zero with fewer than two records; a single refuel says nothing about
/// distance traveled.
pub fn total_distance(history: &[FuelRecord]) -> i64 {
    if history.len() < 2 {
        return 0;
    }
    // len >= 2 guarantees first and last exist and differ
    let first = &history[0];
    let last = &history[history.len() - 1];
    last.odometer - first.odometer
}

/// Average consumption in liters per 100 distance units.
///
/// `None` with fewer than two records, and `None` when the span distance
/// is not positive (possible on corrupted data with a decreasing
/// odometer). Never divides by zero and never reports a negative
/// consumption.
pub fn average_consumption(history: &[FuelRecord]) -> Option<f64> {
    if history.len() < 2 {
        return None;
    }

    let distance = total_distance(history);
    if distance <= 0 {
        return None;
    }

    Some(total_liters(history) / distance as f64 * 100.0)
}

/// First and last records of the history, by position.
///
/// `None` for an empty history. Returns borrows into the slice, not
/// copies; with a single record both sides are the same record.
pub fn first_and_last(history: &[FuelRecord]) -> Option<(&FuelRecord, &FuelRecord)> {
    Some((history.first()?, history.last()?))
}

/// Aggregate view over a whole history, for the summary display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Date of the first recorded refuel
    pub first_date: String,

    /// Date of the last recorded refuel
    pub last_date: String,

    /// Total fuel spend
    pub total_cost: f64,

    /// Distance between first and last refuel
    pub total_distance: i64,

    /// Total volume dispensed
    pub total_liters: f64,

    /// Average consumption, when computable
    pub average_consumption: Option<f64>,
}

/// Build the summary for a history. `None` when the history is empty.
pub fn summary(history: &[FuelRecord]) -> Option<Summary> {
    let (first, last) = first_and_last(history)?;
    Some(Summary {
        first_date: first.date.clone(),
        last_date: last.date.clone(),
        total_cost: total_cost(history),
        total_distance: total_distance(history),
        total_liters: total_liters(history),
        average_consumption: average_consumption(history),
    })
}
