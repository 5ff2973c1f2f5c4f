/// Binary operator evaluation logic.
///
/// Applies the field operation for each operator, checks divisors for zero,
/// and records the operator in the trace.
pub mod binary;

/// Literal evaluation.
///
/// Reduces number literals and negated number literals into the field (or the
/// exponent ring) and records them as operands.
pub mod unary;

/// Core evaluation state.
///
/// Contains the per-statement [`Context`](core::Context) that owns the trace
/// and the error reporter, and turns them into an
/// [`Outcome`](crate::interpreter::outcome::Outcome) when the statement ends.
pub mod core;
