//! Number formatting for fuel quantities and statistics.

/// Format a monetary or volume amount with two decimals.
pub fn amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format a volume for display.
pub fn liters(value: f64) -> String {
    format!("{:.2} L", value)
}

/// Format a distance for display.
pub fn distance(value: i64) -> String {
    format!("{} km", value)
}

/// Format an average consumption for display.
pub fn consumption(value: f64) -> String {
    format!("{:.2} L/100 km", value)
}
