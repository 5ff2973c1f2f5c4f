use crate::{
    config::ExponentMode,
    error::{Diagnostic, LexError},
    field::{Field, FieldElement},
    interpreter::{outcome::Outcome, reporter::Reporter, trace::Trace},
};

/// Stores the evaluation state of one statement.
///
/// The parser computes values bottom-up through the context, which applies the
/// field arithmetic, records the postfix trace, and routes errors to the
/// statement's reporter.
///
/// ## Usage
///
/// A fresh `Context` is created for every statement and consumed by
/// [`Context::finish`], so traces and error latches never leak from one
/// statement into the next.
pub struct Context<'f> {
    field:         &'f Field,
    exponent_mode: ExponentMode,
    trace:         Trace,
    reporter:      Reporter,
}

impl<'f> Context<'f> {
    /// Creates the context for a new statement with an empty trace and a clear
    /// error latch.
    #[must_use]
    pub fn new(field: &'f Field, exponent_mode: ExponentMode) -> Self {
        Self { field,
               exponent_mode,
               trace: Trace::default(),
               reporter: Reporter::default() }
    }

    /// Returns the field the statement is evaluated in.
    #[must_use]
    pub const fn field(&self) -> &'f Field {
        self.field
    }

    /// Returns how exponents are reduced.
    #[must_use]
    pub const fn exponent_mode(&self) -> ExponentMode {
        self.exponent_mode
    }

    /// Returns the trace recorded so far.
    #[must_use]
    pub const fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Returns `true` if any diagnostic has been recorded for the statement.
    #[must_use]
    pub fn has_diagnostics(&self) -> bool {
        !self.reporter.diagnostics().is_empty()
    }

    /// Returns `true` once the statement's error latch has fired.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.reporter.has_error()
    }

    /// Forwards an illegal character to the lexer channel.
    pub fn lex_error(&mut self, error: LexError) {
        self.reporter.lex_error(error);
    }

    /// Reports a statement error through the latch.
    ///
    /// # Returns
    /// `true` if this was the first statement error and was recorded.
    pub fn report(&mut self, diagnostic: impl Into<Diagnostic>) -> bool {
        self.reporter.report(diagnostic)
    }

    /// Ends a statement that parsed, producing its trace and value.
    ///
    /// The value is kept even when the latch fired; the outcome marks it as
    /// unreliable.
    #[must_use]
    pub fn finish(self, value: FieldElement, line: usize) -> Outcome {
        let (error, diagnostics) = self.reporter.into_parts();
        Outcome { line,
                  diagnostics,
                  trace: Some(self.trace),
                  value: Some(value),
                  error }
    }

    /// Ends a statement that failed to parse. It has neither trace nor value.
    #[must_use]
    pub fn abandon(self, line: usize) -> Outcome {
        let (error, diagnostics) = self.reporter.into_parts();
        Outcome { line,
                  diagnostics,
                  trace: None,
                  value: None,
                  error }
    }

    pub(in crate::interpreter::evaluator) const fn trace_mut(&mut self) -> &mut Trace {
        &mut self.trace
    }
}
