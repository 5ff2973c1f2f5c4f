//! # modcalc
//!
//! modcalc is a calculator for arithmetic expressions over a prime field,
//! written in Rust. Each input line is one statement: it is lexed, parsed and
//! evaluated exactly, modulo a fixed prime, and printed both in reverse Polish
//! notation and as a value.
//!
//! Evaluation is total. Illegal characters, grammar errors and division by
//! zero are reported for the statement they occur in and never stop the
//! evaluation of later statements.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::Config,
    error::ConfigError,
    interpreter::{outcome::Outcome, session::Session},
};

/// Settings fixed for a whole session.
///
/// Defines the modulus and how exponents are reduced, with the defaults used
/// when nothing is configured.
pub mod config;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while processing a
/// statement, and the configuration errors raised before any statement runs.
///
/// # Responsibilities
/// - Defines error enums for each phase (lexer, parser, evaluator,
///   configuration).
/// - Renders each error as the exact message printed for it.
/// - Distinguishes lexer diagnostics from errors subject to the statement
///   latch.
pub mod error;
/// Finite field arithmetic.
///
/// This module implements the integers modulo a prime: normalisation into
/// canonical form, the ring operations, exponentiation and modular inversion
/// by the extended Euclidean algorithm.
///
/// # Responsibilities
/// - Keeps every produced value in canonical form `[0, Z)`.
/// - Provides the unchecked division and remainder used after a zero divisor
///   has been reported.
pub mod field;
/// Orchestrates the processing of statements.
///
/// This module ties together lexing, parsing, evaluation and error reporting,
/// and exposes the session type used to evaluate source text.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator, trace and reporter.
/// - Scopes traces and error latches to a single statement.
/// - Produces one outcome per statement.
pub mod interpreter;
/// Reading input line by line.
///
/// Provides the line source abstraction with an explicit end of input and the
/// loop that evaluates each line and prints its outcomes.
pub mod repl;
/// General numeric utilities.
///
/// Modulus bounds, primality testing and exact reduction of decimal literals.
pub mod util;

/// Evaluates every statement in `source` under `config`.
///
/// # Errors
/// Returns an error if the configured modulus is not an acceptable prime.
/// Problems inside statements are never errors here; they are reported in the
/// returned outcomes.
///
/// # Examples
/// ```
/// use modcalc::{config::Config, evaluate};
///
/// let outcomes = evaluate("1 + 2\n(1+2)*3\n", &Config::default()).unwrap();
/// assert_eq!(outcomes[0].trace.as_ref().unwrap().to_string(), "1 2 +");
/// assert_eq!(outcomes[1].printable_value().unwrap().value(), 9);
///
/// // A composite modulus is rejected up front.
/// let config = Config { modulus: 1_234_576,
///                       ..Config::default() };
/// assert!(evaluate("1\n", &config).is_err());
/// ```
pub fn evaluate(source: &str, config: &Config) -> Result<Vec<Outcome>, ConfigError> {
    Ok(Session::new(config)?.eval(source))
}
