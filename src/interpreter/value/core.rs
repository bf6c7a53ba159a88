use std::{collections::HashMap, sync::Arc};

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the evaluator.
///
/// This enum models every value that can be supplied in a context or produced
/// by an expression. Containers are shared behind `Arc`, so cloning a value
/// out of a context is cheap and values can be sent across threads.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators.
    Bool(bool),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number. Every arithmetic result is a
    /// `Real`.
    Real(f64),
    /// A text value.
    String(String),
    /// A string-keyed map, reachable through member access and string indices.
    Map(Arc<HashMap<String, Self>>),
    /// A list, reachable through integer indices.
    List(Arc<Vec<Self>>),
    /// The absent value. Produced when a map is indexed with a missing key.
    Null,
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Arc::new(v))
    }
}

impl From<HashMap<String, Self>> for Value {
    fn from(v: HashMap<String, Self>) -> Self {
        Self::Map(Arc::new(v))
    }
}

impl<V: Into<Self>> FromIterator<(String, V)> for Value {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        Self::Map(Arc::new(iter.into_iter().map(|(k, v)| (k, v.into())).collect()))
    }
}

impl Value {
    /// Returns the name of the value's type, as used in error messages.
    ///
    /// # Example
    /// ```
    /// use ruleval::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(1.5).type_name(), "float");
    /// assert_eq!(Value::Null.type_name(), "null");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Integer(_) => "int",
            Self::Real(_) => "float",
            Self::String(_) => "string",
            Self::Map(_) => "map",
            Self::List(_) => "list",
            Self::Null => "null",
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Real` and `Value::Integer`; integers are widened.
    ///
    /// # Parameters
    /// - `position`: Source offset for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If value is numeric.
    /// - `Err(RuntimeError::ExpectedNumber)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use ruleval::interpreter::value::core::Value;
    ///
    /// let x = Value::Integer(10);
    /// assert_eq!(x.as_real(0).unwrap(), 10.0);
    ///
    /// assert!(Value::from("10").as_real(0).is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(&self, position: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(*n as f64),
            _ => Err(RuntimeError::ExpectedNumber { found: self.type_name(),
                                                    position }),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// There is no truthiness: only `Value::Bool` is accepted.
    ///
    /// # Parameters
    /// - `position`: Source offset for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(RuntimeError::ExpectedBoolean)`: If not boolean.
    pub const fn as_bool(&self, position: usize) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(RuntimeError::ExpectedBoolean { found: self.type_name(),
                                                     position }),
        }
    }

    /// Returns the map if the value is one.
    #[must_use]
    pub fn as_map(&self) -> Option<&HashMap<String, Self>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the list if the value is one.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the string if the value is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` for `Value::Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Formats values as JSON-like text. Strings are quoted inside containers
/// but printed bare at the top level.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Map(_) | Self::List(_) => write!(f, "{}", serde_json::Value::from(self)),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Null => write!(f, "null"),
        }
    }
}
