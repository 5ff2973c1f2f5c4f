/// Core parsing state.
///
/// Contains the [`Parser`](core::Parser) with its one-token lookahead, the
/// statement loop, and recovery after grammar errors.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level: additive, multiplicative and
/// exponentiation.
pub mod binary;

/// Primary expression parsing.
///
/// Parenthesized expressions, number literals and unary minus applied to a
/// number literal.
pub mod unary;
