/// Core evaluation logic for expressions and statements.
///
/// Contains the evaluation context (the variable namespace and the emitted
/// command list), expression dispatch and statement execution.
pub mod core;

/// Unary operator evaluation.
///
/// Handles negation and logical NOT.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements evaluation for all binary operations: arithmetic, comparisons
/// and the logical connectives.
pub mod binary;

/// Turtle action execution.
///
/// Emits one plotter command per executed action.
pub mod turtle;
