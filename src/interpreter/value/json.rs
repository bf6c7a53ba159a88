use std::sync::Arc;

use crate::interpreter::value::core::Value;

/// Converts a JSON document into a [`Value`].
///
/// Numbers that fit in an `i64` become `Value::Integer`; every other number
/// becomes `Value::Real`. Objects become maps and arrays become lists.
///
/// # Example
/// ```
/// use ruleval::interpreter::value::core::Value;
/// use serde_json::json;
///
/// let value = Value::from(json!({"a": [1, 2.5, "x", null]}));
/// let list = value.as_map().unwrap()["a"].clone();
///
/// assert_eq!(list,
///            Value::from(vec![Value::Integer(1),
///                             Value::Real(2.5),
///                             Value::from("x"),
///                             Value::Null]));
/// ```
impl From<serde_json::Value> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Real(u as f64)
                } else {
                    Self::Real(n.as_f64().unwrap_or(f64::NAN))
                }
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::List(Arc::new(items.into_iter().map(Self::from).collect()))
            },
            serde_json::Value::Object(fields) => {
                Self::Map(Arc::new(fields.into_iter()
                                         .map(|(k, v)| (k, Self::from(v)))
                                         .collect()))
            },
        }
    }
}

/// Converts a [`Value`] into JSON.
///
/// Non-finite floats have no JSON representation and become `null`.
impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Integer(n) => Self::from(*n),
            Value::Real(r) => Self::from(*r),
            Value::String(s) => Self::String(s.clone()),
            Value::List(items) => Self::Array(items.iter().map(Self::from).collect()),
            Value::Map(fields) => {
                Self::Object(fields.iter()
                                   .map(|(k, v)| (k.clone(), Self::from(v)))
                                   .collect())
            },
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}
