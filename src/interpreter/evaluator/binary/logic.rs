use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a logical operation between two boolean values.
    ///
    /// The operands are converted to booleans using `as_bool`; there is no
    /// truthiness, so only `Value::Bool` is accepted. Both operands are checked
    /// even when the left one decides the result.
    ///
    /// # Parameters
    /// - `op`: The logical operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source offset for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    ///
    /// # Example
    /// ```
    /// use ruleval::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let a = Value::Bool(true);
    /// let b = Value::Bool(false);
    ///
    /// let result = Evaluator::eval_logic(BinaryOperator::Or, &a, &b, 0);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Evaluator::eval_logic(BinaryOperator::Or, &a, &Value::Integer(1), 0);
    /// assert!(result.is_err());
    /// ```
    pub fn eval_logic(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      position: usize)
                      -> EvalResult<Value> {
        let left = left.as_bool(position)?;
        let right = right.as_bool(position)?;

        match op {
            BinaryOperator::And => Ok(Value::Bool(left && right)),
            BinaryOperator::Or => Ok(Value::Bool(left || right)),
            _ => Err(RuntimeError::UnsupportedExpression { details: format!("'{op}' is not a logical operator"),
                                                           position }),
        }
    }
}
