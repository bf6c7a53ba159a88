use crate::{error::FunctionError, interpreter::value::core::Value};

/// Reports whether `haystack` contains `needle`.
///
/// Accepts exactly two arguments:
/// - a string and a string: substring test,
/// - a list and any value: element test, where numbers compare by value
///   (`1` matches `1.0`),
/// - a map and a string: key test.
///
/// Any other combination produces an `InvalidArgument` error, and any other
/// number of arguments an `ArgumentCount` error.
///
/// Under the default [`LiteralArguments::Raw`](crate::LiteralArguments::Raw)
/// a literal argument arrives as its source text, quotes included, so
/// `contains(tags, "vip")` looks for the five characters `"vip"`. Take the
/// needle from the context, or evaluate with
/// [`LiteralArguments::Typed`](crate::LiteralArguments::Typed).
///
/// # Parameters
/// - `args`: `[haystack, needle]`.
///
/// # Returns
/// `Value::Bool` with the result of the test.
///
/// # Example
/// ```
/// use ruleval::interpreter::{evaluator::function::builtin::contains, value::core::Value};
///
/// let tags = Value::from(vec![Value::from("new"), Value::from("sale")]);
/// let r = contains(&[tags, Value::from("sale")]).unwrap();
/// assert_eq!(r, Value::Bool(true));
///
/// let r = contains(&[Value::from("hello"), Value::from("ell")]).unwrap();
/// assert_eq!(r, Value::Bool(true));
/// ```
pub fn contains(args: &[Value]) -> Result<Value, FunctionError> {
    let [haystack, needle] = args else {
        return Err(FunctionError::ArgumentCount { expected: 2,
                                                  found:    args.len(), });
    };

    let found = match (haystack, needle) {
        (Value::String(s), Value::String(sub)) => s.contains(sub.as_str()),
        (Value::List(items), needle) => items.iter().any(|item| loosely_equal(item, needle)),
        (Value::Map(map), Value::String(key)) => map.contains_key(key),
        (h, n) => {
            return Err(FunctionError::InvalidArgument(format!("cannot search for {} in {}",
                                                              n.type_name(),
                                                              h.type_name())));
        },
    };

    Ok(Value::Bool(found))
}

/// Returns the length of a string (in characters), list or map.
///
/// Any other argument, or any other number of arguments, is an error.
///
/// # Example
/// ```
/// use ruleval::interpreter::{evaluator::function::builtin::len, value::core::Value};
///
/// assert_eq!(len(&[Value::from("héllo")]).unwrap(), Value::Integer(5));
/// assert!(len(&[Value::Integer(5)]).is_err());
/// ```
pub fn len(args: &[Value]) -> Result<Value, FunctionError> {
    let [value] = args else {
        return Err(FunctionError::ArgumentCount { expected: 1,
                                                  found:    args.len(), });
    };

    let n = match value {
        Value::String(s) => s.chars().count(),
        Value::List(items) => items.len(),
        Value::Map(map) => map.len(),
        other => {
            return Err(FunctionError::InvalidArgument(format!("{} has no length",
                                                              other.type_name())));
        },
    };

    i64::try_from(n).map(Value::Integer)
                    .map_err(|_| FunctionError::Failed(format!("length {n} does not fit in an integer")))
}

/// Structural equality, except that integers and floats compare by value.
#[allow(clippy::float_cmp, clippy::cast_precision_loss)]
fn loosely_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Integer(i), Value::Real(r)) | (Value::Real(r), Value::Integer(i)) => *i as f64 == *r,
        _ => a == b,
    }
}
