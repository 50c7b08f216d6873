/// Result formatting helpers.
///
/// This module renders `f64` results as decimal strings for display. Values
/// are rounded to ten decimal places, trailing fractional zeros are removed,
/// and the decimal point is dropped entirely for whole numbers.
pub mod fmt;
