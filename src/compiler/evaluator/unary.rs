use crate::{
    ast::{Expr, UnaryOperator},
    compiler::evaluator::core::{Context, EvalResult, truth_value},
};

impl Context {
    /// Evaluates a unary operation.
    ///
    /// - `Negate` flips the sign of its operand.
    /// - `Not` yields `1.0` when the operand is exactly `0.0`, else `0.0`,
    ///   so double negation coerces any value to a canonical truth value.
    ///
    /// # Example
    /// ```
    /// use turtlec::{
    ///     ast::{Expr, UnaryOperator},
    ///     compiler::evaluator::core::Context,
    /// };
    ///
    /// let mut context = Context::new();
    /// let five = Expr::Literal { value: 5.0, line: 1 };
    ///
    /// let negated = context.eval_unary(UnaryOperator::Negate, &five);
    /// assert_eq!(negated.unwrap(), -5.0);
    ///
    /// let truth = context.eval_unary(UnaryOperator::Not, &five);
    /// assert_eq!(truth.unwrap(), 0.0);
    /// ```
    pub fn eval_unary(&mut self, op: UnaryOperator, expr: &Expr) -> EvalResult<f64> {
        let value = self.eval(expr)?;

        Ok(match op {
            UnaryOperator::Negate => -value,
            UnaryOperator::Not => truth_value(value == 0.0),
        })
    }
}
