use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Equality and relational operators alike coerce both operands to `f64`
    /// (integers widen) and compare numerically. Strings, booleans and
    /// containers are not comparable, not even with `==`.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `position`: Source offset for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use ruleval::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let a = Value::Integer(3);
    /// let b = Value::Real(3.0);
    ///
    /// let result = Evaluator::eval_comparison(BinaryOperator::Equal, &a, &b, 0);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let s = Value::from("3");
    /// assert!(Evaluator::eval_comparison(BinaryOperator::Equal, &s, &s, 0).is_err());
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           position: usize)
                           -> EvalResult<Value> {
        let left = left.as_real(position)?;
        let right = right.as_real(position)?;

        #[allow(clippy::float_cmp)]
        let result = match op {
            BinaryOperator::Less => left < right,
            BinaryOperator::Greater => left > right,
            BinaryOperator::LessEqual => left <= right,
            BinaryOperator::GreaterEqual => left >= right,
            BinaryOperator::Equal => left == right,
            BinaryOperator::NotEqual => left != right,
            _ => {
                return Err(RuntimeError::UnsupportedExpression { details: format!("'{op}' is not a comparison operator"),
                                                                 position });
            },
        };

        Ok(Value::Bool(result))
    }
}
