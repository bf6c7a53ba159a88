use rust_decimal::Decimal;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
    util::num::{decimal_op, exact_mul},
};

impl Evaluator<'_> {
    /// Evaluates an arithmetic operation.
    ///
    /// Both operands are coerced to `f64` (integers widen) and the result is
    /// always a `Real`. Addition, subtraction and multiplication are carried
    /// out in decimal arithmetic, so `0.1 + 0.2` is exactly `0.3`. If an
    /// operand or the result cannot be held exactly in 28 decimal places, or
    /// falls outside the decimal range, plain `f64` arithmetic is used
    /// instead. Division is plain `f64` division.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul`, `Div`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source offset for error reporting.
    ///
    /// # Returns
    /// - `Ok(Value::Real)`: The result.
    /// - `Err(RuntimeError::ExpectedNumber)`: If an operand is not numeric.
    /// - `Err(RuntimeError::DivisionByZero)`: If the divisor is exactly zero.
    ///
    /// # Example
    /// ```
    /// use ruleval::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let sum = Evaluator::eval_arithmetic(BinaryOperator::Add,
    ///                                      &Value::Real(0.1),
    ///                                      &Value::Real(0.2),
    ///                                      0).unwrap();
    /// assert_eq!(sum, Value::Real(0.3));
    ///
    /// let err = Evaluator::eval_arithmetic(BinaryOperator::Div,
    ///                                      &Value::Integer(1),
    ///                                      &Value::Integer(0),
    ///                                      0);
    /// assert!(err.is_err());
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           position: usize)
                           -> EvalResult<Value> {
        let l = left.as_real(position)?;
        let r = right.as_real(position)?;

        let result = match op {
            BinaryOperator::Add => decimal_op(l, r, Decimal::checked_add, |a, b| a + b),
            BinaryOperator::Sub => decimal_op(l, r, Decimal::checked_sub, |a, b| a - b),
            BinaryOperator::Mul => decimal_op(l, r, exact_mul, |a, b| a * b),
            BinaryOperator::Div => {
                if r == 0.0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                l / r
            },
            _ => {
                return Err(RuntimeError::UnsupportedExpression { details: format!("'{op}' is not an arithmetic operator"),
                                                                 position });
            },
        };

        Ok(Value::Real(result))
    }
}
