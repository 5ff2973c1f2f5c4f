use tracing::debug;

use crate::{
    config::{Config, ExponentMode},
    error::ConfigError,
    field::Field,
    interpreter::{outcome::Outcome, parser::core::Parser},
};

/// An evaluator bound to one validated configuration.
///
/// A session holds no per-statement state, so it can evaluate any number of
/// sources, one after another or from several threads at once.
///
/// # Example
/// ```
/// use modcalc::{config::Config, interpreter::session::Session};
///
/// let session = Session::new(&Config::default()).unwrap();
/// let values: Vec<_> = session.statements("1 + 2\n2 ^ 10\n")
///                             .map(|outcome| outcome.printable_value().unwrap().value())
///                             .collect();
/// assert_eq!(values, vec![3, 1024]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Session {
    field:         Field,
    exponent_mode: ExponentMode,
}

impl Session {
    /// Validates `config` and creates a session.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the modulus is not an acceptable prime.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let field = Field::new(config.modulus)?;
        debug!(modulus = field.modulus(), exponents = %config.exponent_mode, "session created");

        Ok(Self { field,
                  exponent_mode: config.exponent_mode })
    }

    /// Returns the session's field.
    #[must_use]
    pub const fn field(&self) -> &Field {
        &self.field
    }

    /// Returns how exponents are reduced.
    #[must_use]
    pub const fn exponent_mode(&self) -> ExponentMode {
        self.exponent_mode
    }

    /// Returns a lazy iterator over the outcomes of the statements in
    /// `source`. Each statement is lexed, parsed and evaluated only when the
    /// iterator reaches it.
    #[must_use]
    pub fn statements<'a>(&'a self, source: &'a str) -> Statements<'a> {
        self.statements_from(source, 1)
    }

    /// Like [`Session::statements`], but numbers the first line of `source`
    /// as `first_line`. Used when a source arrives in pieces, such as one
    /// line at a time from a terminal.
    ///
    /// # Example
    /// ```
    /// use modcalc::{config::Config, interpreter::session::Session};
    ///
    /// let session = Session::new(&Config::default()).unwrap();
    /// let outcome = session.statements_from("5 / 0\n", 4).next().unwrap();
    /// assert_eq!(outcome.line, 4);
    /// assert_eq!(outcome.diagnostics[0].line(), 4);
    /// ```
    #[must_use]
    pub fn statements_from<'a>(&'a self, source: &'a str, first_line: usize) -> Statements<'a> {
        Statements { session: self,
                     parser:  Parser::starting_at(source, first_line), }
    }

    /// Evaluates every statement in `source`.
    #[must_use]
    pub fn eval(&self, source: &str) -> Vec<Outcome> {
        self.statements(source).collect()
    }
}

/// Iterator over the statement outcomes of one source text.
pub struct Statements<'a> {
    session: &'a Session,
    parser:  Parser<'a>,
}

impl Iterator for Statements<'_> {
    type Item = Outcome;

    fn next(&mut self) -> Option<Outcome> {
        self.parser
            .parse_statement(&self.session.field, self.session.exponent_mode)
    }
}
