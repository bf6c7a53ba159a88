use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, LiteralArguments, lookup_key},
        value::core::Value,
    },
    util::num::i64_to_index,
};

impl Evaluator<'_> {
    /// Converts a literal to a value.
    ///
    /// Integer literals are read in base 10 and must fit in an `i64`; float
    /// literals must parse as `f64`. String literals are unquoted, and
    /// double-quoted ones have their escapes resolved. Imaginary and character
    /// literals have no value representation.
    ///
    /// # Parameters
    /// - `literal`: The literal as written.
    /// - `position`: Source offset for error reporting.
    ///
    /// # Returns
    /// - `Ok(Value)`: The converted value.
    /// - `Err(RuntimeError::InvalidLiteral)`: Numeric text that cannot be
    ///   converted.
    /// - `Err(RuntimeError::UnsupportedParam)`: Imaginary or character
    ///   literal.
    ///
    /// # Example
    /// ```
    /// use ruleval::{
    ///     ast::LiteralValue,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_literal(&LiteralValue::Integer("42".into()), 0).unwrap();
    /// assert_eq!(v, Value::Integer(42));
    ///
    /// let v = Evaluator::eval_literal(&LiteralValue::String(r#""a\tb""#.into()), 0).unwrap();
    /// assert_eq!(v, Value::from("a\tb"));
    ///
    /// assert!(Evaluator::eval_literal(&LiteralValue::Integer("0x2A".into()), 0).is_err());
    /// ```
    pub fn eval_literal(literal: &LiteralValue, position: usize) -> EvalResult<Value> {
        let invalid = || RuntimeError::InvalidLiteral { literal: literal.raw().to_string(),
                                                        position };

        match literal {
            LiteralValue::Integer(text) => text.parse::<i64>().map(Value::Integer).map_err(|_| invalid()),
            LiteralValue::Real(text) => text.parse::<f64>().map(Value::Real).map_err(|_| invalid()),
            LiteralValue::String(text) => unquote(text).map(Value::String).ok_or_else(invalid),
            LiteralValue::Imaginary(text) | LiteralValue::Char(text) => {
                Err(RuntimeError::UnsupportedParam { literal: text.clone(),
                                                     position })
            },
        }
    }

    /// Evaluates a unary operation.
    ///
    /// The operand is evaluated first, then handed to
    /// [`Evaluator::eval_unary`].
    pub(crate) fn eval_unary_op(&self,
                                op: UnaryOperator,
                                expr: &Expr,
                                position: usize)
                                -> EvalResult<Value> {
        let value = self.eval(expr)?;
        Self::eval_unary(op, &value, position)
    }

    /// Evaluates a binary operation.
    ///
    /// Both operands are always evaluated, left first, before the operator is
    /// applied. `&&` and `||` do not short-circuit: an error on the right-hand
    /// side is reported even when the left-hand side already decides the
    /// result.
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 position: usize)
                                 -> EvalResult<Value> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        Self::eval_binary(op, &left, &right, position)
    }

    /// Evaluates member access on a map (`target.name`).
    ///
    /// The member is resolved with the same rules as a top-level identifier:
    /// `true` and `false` are booleans, any other missing name is an error.
    pub(crate) fn eval_member(&self,
                              target: &Expr,
                              name: &str,
                              position: usize)
                              -> EvalResult<Value> {
        match self.eval(target)? {
            Value::Map(map) => lookup_key(&map, name, position),
            other => Err(RuntimeError::TypeMismatch { details: format!("cannot access member '{name}' of {}",
                                                                       other.type_name()),
                                                      position }),
        }
    }

    /// Evaluates an index expression (`target[index]`).
    ///
    /// - A map indexed by a string yields the stored value, or `Null` when the
    ///   key is absent.
    /// - A list indexed by an integer yields the element at that index.
    ///
    /// # Errors
    /// - `IndexNotNumber`: a list index that is not an integer.
    /// - `IndexOutOfBounds`: a negative index or one past the end.
    /// - `TypeMismatch`: a non-string map key, or a target that is neither map
    ///   nor list.
    pub(crate) fn eval_index(&self,
                             target: &Expr,
                             index: &Expr,
                             position: usize)
                             -> EvalResult<Value> {
        let target = self.eval(target)?;
        let index = self.eval(index)?;

        match (&target, &index) {
            (Value::Map(map), Value::String(key)) => Ok(map.get(key).cloned().unwrap_or(Value::Null)),
            (Value::Map(_), key) => {
                Err(RuntimeError::TypeMismatch { details: format!("map key must be a string, found {}",
                                                                  key.type_name()),
                                                 position })
            },
            (Value::List(items), Value::Integer(i)) => {
                i64_to_index(*i).and_then(|idx| items.get(idx))
                                .cloned()
                                .ok_or(RuntimeError::IndexOutOfBounds { index: *i,
                                                                        len: items.len(),
                                                                        position })
            },
            (Value::List(_), other) => Err(RuntimeError::IndexNotNumber { found: other.type_name(),
                                                                          position }),
            (other, _) => Err(RuntimeError::TypeMismatch { details: format!("cannot index into {}",
                                                                            other.type_name()),
                                                           position }),
        }
    }

    /// Evaluates a function call.
    ///
    /// Arguments are prepared left to right, then the function is looked up
    /// by name and invoked once. Under [`LiteralArguments::Raw`] a literal
    /// argument is passed as a string holding its source text; every other
    /// argument is evaluated.
    pub(crate) fn eval_call(&self,
                            name: &str,
                            arguments: &[Expr],
                            position: usize)
                            -> EvalResult<Value> {
        let args = arguments.iter()
                            .map(|arg| match (arg, self.options.literal_arguments) {
                                (Expr::Literal { value, .. }, LiteralArguments::Raw) => {
                                    Ok(Value::String(value.raw().to_string()))
                                },
                                _ => self.eval(arg),
                            })
                            .collect::<EvalResult<Vec<_>>>()?;

        self.eval_function(name, &args, position)
    }
}

/// Strips the quotes from a string literal and resolves its escapes.
///
/// Back-quoted strings are taken verbatim and lose both backticks, just as
/// double-quoted strings lose their quotes. Double-quoted strings support
/// `\"`, `\\`, `\n`, `\t`, `\r`, `\'` and `\0`.
///
/// # Returns
/// - `Some(String)`: The string value.
/// - `None`: If the text is not a well-formed string literal.
///
/// # Example
/// ```
/// use ruleval::interpreter::evaluator::utils::unquote;
///
/// assert_eq!(unquote(r#""say \"hi\"""#).as_deref(), Some("say \"hi\""));
/// assert_eq!(unquote(r"`C:\dir`").as_deref(), Some(r"C:\dir"));
/// assert_eq!(unquote(r#""bad \q""#), None);
/// ```
#[must_use]
pub fn unquote(text: &str) -> Option<String> {
    if let Some(inner) = text.strip_prefix('`').and_then(|t| t.strip_suffix('`')) {
        return Some(inner.to_string());
    }

    let inner = text.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        out.push(match chars.next()? {
                     '"' => '"',
                     '\\' => '\\',
                     '\'' => '\'',
                     'n' => '\n',
                     't' => '\t',
                     'r' => '\r',
                     '0' => '\0',
                     _ => return None,
                 });
    }

    Some(out)
}
