//! Display formatting for asset numbers.
//!
//! Everything is fixed to two decimals. Values that failed to parse render as
//! [`NOT_AVAILABLE`] rather than `NaN`.

pub const NOT_AVAILABLE: &str = "N/A";

/// `1234.5` -> `"1234.50"`
pub fn fixed2(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// `1234.5` -> `"$1234.50"`
pub fn usd(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${:.2}", v),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// `-1.234` -> `"-1.23%"`
pub fn percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v),
        None => NOT_AVAILABLE.to_string(),
    }
}
