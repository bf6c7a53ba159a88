/// Numeric conversion helpers.
///
/// This module provides the decimal-accurate arithmetic used by `+`, `-` and
/// `*`, and safe conversions such as turning an `i64` into a list index.
/// Conversions return `Option` so callers decide which error to report.
pub mod num;
