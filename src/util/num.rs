use std::str::FromStr;

use rust_decimal::{Decimal, prelude::ToPrimitive};

/// Converts an `f64` to a `Decimal` through its shortest round-trip text.
///
/// `0.1_f64` is stored in binary as a value slightly above one tenth; going
/// through its shortest decimal text yields exactly `0.1`, which is the number
/// the rule author wrote.
///
/// The conversion must be exact: a value whose text needs more than
/// [`DECIMAL_MAX_SCALE`] fractional digits would be rounded by `Decimal`, so
/// it is reported as not fitting.
///
/// ## Returns
/// - `Some(Decimal)`: The decimal value.
/// - `None`: If the value is not finite, is outside the decimal range, or
///   cannot be held without rounding.
///
/// ## Example
/// ```
/// use ruleval::util::num::f64_to_decimal;
///
/// assert_eq!(f64_to_decimal(0.1).unwrap().to_string(), "0.1");
/// assert!(f64_to_decimal(f64::INFINITY).is_none());
/// assert!(f64_to_decimal(1e300).is_none());
/// assert!(f64_to_decimal(1e-30).is_none());
/// ```
#[must_use]
pub fn f64_to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    let text = value.to_string();
    Decimal::from_str(&text).ok()
                            .filter(|decimal| decimal.to_string() == text)
}

/// Largest number of fractional digits a `Decimal` holds.
pub const DECIMAL_MAX_SCALE: u32 = 28;

/// Multiplies two decimals, refusing products that `Decimal` would round.
///
/// The exact product of `left` and `right` has `left.scale() + right.scale()`
/// fractional digits. Past [`DECIMAL_MAX_SCALE`] the low digits are rounded
/// away, which can turn a tiny product into zero.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use rust_decimal::Decimal;
/// use ruleval::util::num::exact_mul;
///
/// let tenth = Decimal::from_str("0.1").unwrap();
/// assert_eq!(exact_mul(tenth, Decimal::from(3)).unwrap().to_string(), "0.3");
///
/// let tiny = Decimal::from_str("0.00000000000000000001").unwrap();
/// assert!(exact_mul(tiny, tiny).is_none());
/// ```
#[must_use]
pub fn exact_mul(left: Decimal, right: Decimal) -> Option<Decimal> {
    if left.scale() + right.scale() > DECIMAL_MAX_SCALE {
        return None;
    }
    left.checked_mul(right)
}

/// Converts a `Decimal` back to the nearest `f64`.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use rust_decimal::Decimal;
/// use ruleval::util::num::decimal_to_f64;
///
/// assert_eq!(decimal_to_f64(Decimal::from_str("0.3").unwrap()), Some(0.3));
/// ```
#[must_use]
pub fn decimal_to_f64(value: Decimal) -> Option<f64> {
    value.to_f64()
}

/// Applies `op` in decimal arithmetic, falling back to `fallback` in `f64`.
///
/// Both operands are converted with [`f64_to_decimal`]. If either conversion
/// fails, or `op` returns `None` because the result overflows or would be
/// rounded, the result of `fallback(left, right)` is returned instead.
///
/// ## Parameters
/// - `left`, `right`: The operands.
/// - `op`: A checked decimal operation such as `Decimal::checked_add` or
///   [`exact_mul`].
/// - `fallback`: The plain floating-point operation.
///
/// ## Example
/// ```
/// use rust_decimal::Decimal;
/// use ruleval::util::num::{decimal_op, exact_mul};
///
/// let sum = decimal_op(0.1, 0.2, Decimal::checked_add, |a, b| a + b);
/// assert_eq!(sum, 0.3);
/// assert_ne!(0.1 + 0.2, 0.3);
///
/// // Out of decimal range: computed as a plain float.
/// let big = decimal_op(1e300, 2.0, exact_mul, |a, b| a * b);
/// assert_eq!(big, 2e300);
///
/// // Too small for 28 decimal places: also a plain float.
/// let tiny = decimal_op(1e-30, 1.0, exact_mul, |a, b| a * b);
/// assert_eq!(tiny, 1e-30);
/// ```
pub fn decimal_op(left: f64,
                  right: f64,
                  op: fn(Decimal, Decimal) -> Option<Decimal>,
                  fallback: fn(f64, f64) -> f64)
                  -> f64 {
    f64_to_decimal(left).zip(f64_to_decimal(right))
                        .and_then(|(l, r)| op(l, r))
                        .and_then(decimal_to_f64)
                        .unwrap_or_else(|| fallback(left, right))
}

/// Truncates an `f64` toward zero into an `i64`.
///
/// ## Returns
/// - `Some(i64)`: If the truncated value lies within the `i64` range.
/// - `None`: If the value is NaN, infinite or out of range.
///
/// ## Example
/// ```
/// use ruleval::util::num::f64_to_i64;
///
/// assert_eq!(f64_to_i64(-3.9), Some(-3));
/// assert_eq!(f64_to_i64(f64::NAN), None);
/// assert_eq!(f64_to_i64(f64::INFINITY), None);
/// assert_eq!(f64_to_i64(1e19), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn f64_to_i64(value: f64) -> Option<i64> {
    // Rounds up to exactly 2^63.
    const LIMIT: f64 = i64::MAX as f64;

    let truncated = value.trunc();
    (truncated >= -LIMIT && truncated < LIMIT).then_some(truncated as i64)
}

/// Converts an `i64` list index to `usize`.
///
/// ## Returns
/// - `Some(usize)`: If the index is non-negative and fits.
/// - `None`: If it is negative or does not fit.
///
/// ## Example
/// ```
/// use ruleval::util::num::i64_to_index;
///
/// assert_eq!(i64_to_index(3), Some(3));
/// assert_eq!(i64_to_index(-1), None);
/// ```
#[must_use]
pub fn i64_to_index(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}
