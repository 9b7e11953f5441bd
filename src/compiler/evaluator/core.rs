use std::collections::HashMap;

use crate::{
    ast::{Expr, Statement},
    compiler::command::Command,
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the whole execution state: the single flat variable
/// namespace and the plotter commands emitted so far. Assignment execution
/// is the only writer of `variables` and variable-reference evaluation the
/// only reader; turtle actions append to `commands` in execution order.
///
/// ## Usage
///
/// `Context` is created once per program run and driven with
/// [`Context::eval_statement`] for each top-level statement. Commands
/// accumulated in `commands` stay there even when a later statement fails,
/// so output produced before a runtime error is never retracted.
pub struct Context {
    /// Variable bindings, name to current value.
    pub variables: HashMap<String, f64>,
    /// Plotter commands emitted so far, in execution order.
    pub commands:  Vec<Command>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with no bindings and no output.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new(),
               commands:  Vec::new(), }
    }

    /// Evaluates an expression to its numeric value.
    ///
    /// Every expression in the language produces exactly one number. Truth
    /// is encoded numerically: `0.0` is false, anything else is true, and
    /// the boolean operators normalize their results to exactly `1.0` or
    /// `0.0`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownVariable`] when a variable reference
    /// has no binding.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, .. } => self.eval_unary(*op, expr),
            Expr::BinaryOp { left, op, right, .. } => self.eval_binary(*op, left, right),
        }
    }

    /// Executes a single statement.
    ///
    /// Assignments evaluate their right-hand side fully, then create or
    /// overwrite the binding. Control flow re-enters [`Context::eval`] and
    /// `eval_statement`; turtle actions evaluate their argument (if any) and
    /// append one command each.
    ///
    /// # Errors
    /// Propagates the first evaluation error; commands emitted before the
    /// failure remain in [`Context::commands`].
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.variables.insert(name.clone(), value);
                Ok(())
            },
            Statement::Block { statements, .. } => {
                for statement in statements {
                    self.eval_statement(statement)?;
                }
                Ok(())
            },
            Statement::While { condition, body, .. } => {
                // The condition is re-evaluated before every iteration,
                // including the first; the loop stops the moment it is
                // exactly 0.0.
                while self.eval(condition)? != 0.0 {
                    self.eval_statement(body)?;
                }
                Ok(())
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.eval(condition)? != 0.0 {
                    self.eval_statement(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.eval_statement(else_branch)
                } else {
                    Ok(())
                }
            },
            Statement::Forward { distance, .. } => {
                let distance = self.eval(distance)?;
                self.forward(distance);
                Ok(())
            },
            Statement::Left { angle, .. } => {
                let angle = self.eval(angle)?;
                self.turn_left(angle);
                Ok(())
            },
            Statement::Right { angle, .. } => {
                let angle = self.eval(angle)?;
                self.turn_right(angle);
                Ok(())
            },
            Statement::Home { .. } => {
                self.go_home();
                Ok(())
            },
            Statement::PenUp { .. } => {
                self.pen_up();
                Ok(())
            },
            Statement::PenDown { .. } => {
                self.pen_down();
                Ok(())
            },
            Statement::PushState { .. } => {
                self.push_state();
                Ok(())
            },
            Statement::PopState { .. } => {
                self.pop_state();
                Ok(())
            },
        }
    }

    /// Looks up a variable's current value.
    ///
    /// Reading a name that was never assigned is an error, not a default.
    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<f64> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }
}

/// Converts a boolean into the language's canonical truth values.
pub(crate) const fn truth_value(condition: bool) -> f64 {
    if condition { 1.0 } else { 0.0 }
}
