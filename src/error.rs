/// Configuration errors.
///
/// Raised while validating a [`Config`](crate::config::Config) before any
/// statement is evaluated. These are the only errors that stop the program.
pub mod config_error;
/// Diagnostics.
///
/// Unifies lexer, parser and arithmetic errors into the messages a statement
/// reports, and defines the kind stored in the statement latch.
pub mod diagnostic;
/// Lexer errors.
///
/// Characters that do not start any token. They are reported every time and
/// never abort lexing.
pub mod lex_error;
/// Parsing errors.
///
/// Tokens that do not fit the grammar at the point they appear, and input
/// that ends in the middle of a statement.
pub mod parse_error;
/// Runtime errors.
///
/// Arithmetic that is undefined in the field, such as division by zero. The
/// evaluator reports these and carries on.
pub mod runtime_error;

pub use config_error::ConfigError;
pub use diagnostic::{Diagnostic, ErrorKind};
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
