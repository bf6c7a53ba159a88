use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation. Integers are widened, so the result is
    ///   always a `Real`.
    /// - `Not`: boolean negation. The operand must be a `Bool`.
    ///
    /// Unary plus has no evaluation rule and is reported as an unsupported
    /// expression.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `position`: Source offset for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use ruleval::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// // Negation
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, &Value::Integer(5), 0).unwrap();
    /// assert_eq!(v, Value::Real(-5.0));
    ///
    /// // Boolean not
    /// let v = Evaluator::eval_unary(UnaryOperator::Not, &Value::Bool(false), 0).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    ///
    /// assert!(Evaluator::eval_unary(UnaryOperator::Plus, &Value::Integer(5), 0).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, position: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => Ok(Value::Real(-value.as_real(position)?)),
            UnaryOperator::Not => Ok(Value::Bool(!value.as_bool(position)?)),
            UnaryOperator::Plus => {
                Err(RuntimeError::UnsupportedExpression { details: format!("unary {op} on {}",
                                                                           value.type_name()),
                                                          position })
            },
        }
    }
}
