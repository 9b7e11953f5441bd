use crate::{
    ast::{BinaryOperator, Expr},
    compiler::evaluator::core::{Context, EvalResult, truth_value},
};

impl Context {
    /// Evaluates a binary operation.
    ///
    /// Both operands are evaluated unconditionally, left first. `AND` and
    /// `OR` do not short-circuit, so an error in the right operand surfaces
    /// even when the left operand already decides the result. Comparisons
    /// and the logical connectives normalize to exactly `1.0` or `0.0`.
    /// Division is plain IEEE 754 division; dividing by zero produces the
    /// usual infinities or NaN rather than an error.
    ///
    /// # Parameters
    /// - `op`: The binary operator.
    /// - `left`: Left operand expression.
    /// - `right`: Right operand expression.
    ///
    /// # Returns
    /// The combined numeric result.
    ///
    /// # Example
    /// ```
    /// use turtlec::{
    ///     ast::{BinaryOperator, Expr},
    ///     compiler::evaluator::core::Context,
    /// };
    ///
    /// let mut context = Context::new();
    /// let one = Expr::Literal { value: 1.0, line: 1 };
    /// let two = Expr::Literal { value: 2.0, line: 1 };
    ///
    /// let result = context.eval_binary(BinaryOperator::Less, &one, &two);
    /// assert_eq!(result.unwrap(), 1.0);
    /// ```
    pub fn eval_binary(&mut self,
                       op: BinaryOperator,
                       left: &Expr,
                       right: &Expr)
                       -> EvalResult<f64> {
        let lhs = self.eval(left)?;
        let rhs = self.eval(right)?;

        Ok(match op {
            BinaryOperator::Add => lhs + rhs,
            BinaryOperator::Sub => lhs - rhs,
            BinaryOperator::Mul => lhs * rhs,
            BinaryOperator::Div => lhs / rhs,
            BinaryOperator::Equal => truth_value(lhs == rhs),
            BinaryOperator::NotEqual => truth_value(lhs != rhs),
            BinaryOperator::Less => truth_value(lhs < rhs),
            BinaryOperator::LessEqual => truth_value(lhs <= rhs),
            BinaryOperator::Greater => truth_value(lhs > rhs),
            BinaryOperator::GreaterEqual => truth_value(lhs >= rhs),
            BinaryOperator::And => truth_value(lhs != 0.0 && rhs != 0.0),
            BinaryOperator::Or => truth_value(lhs != 0.0 || rhs != 0.0),
        })
    }
}
