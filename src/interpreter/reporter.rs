use tracing::trace;

use crate::error::{Diagnostic, ErrorKind, LexError};

/// Collects the diagnostics of one statement.
///
/// Lexer diagnostics are recorded every time they occur. Statement errors go
/// through a latch: the first one is recorded and sets the latch, later ones in
/// the same statement are dropped. A reporter lives for exactly one statement.
///
/// # Example
/// ```
/// use modcalc::{
///     error::{ErrorKind, LexError, RuntimeError},
///     interpreter::reporter::Reporter,
/// };
///
/// let mut reporter = Reporter::default();
/// assert!(reporter.report(RuntimeError::DivisionByZero { line: 1 }));
/// assert!(!reporter.report(RuntimeError::ModuloByZero { line: 1 }));
/// reporter.lex_error(LexError::IllegalCharacter { character: '&',
///                                                 line:      1, });
///
/// assert_eq!(reporter.error_kind(), Some(ErrorKind::DivisionByZero));
/// assert_eq!(reporter.diagnostics().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Reporter {
    latch:       Option<ErrorKind>,
    diagnostics: Vec<Diagnostic>,
}

impl Reporter {
    /// Records a lexer diagnostic. Never consults or sets the latch.
    pub fn lex_error(&mut self, error: LexError) {
        self.diagnostics.push(error.into());
    }

    /// Records a statement error if the latch is still clear.
    ///
    /// Lexer diagnostics passed here are recorded unconditionally, as with
    /// [`Reporter::lex_error`].
    ///
    /// # Returns
    /// `true` if the diagnostic was recorded, `false` if the latch had already
    /// fired in this statement.
    pub fn report(&mut self, diagnostic: impl Into<Diagnostic>) -> bool {
        let diagnostic = diagnostic.into();
        let Some(kind) = diagnostic.kind() else {
            self.diagnostics.push(diagnostic);
            return true;
        };

        if let Some(first) = self.latch {
            trace!(%first, suppressed = %kind, "error latch already set");
            return false;
        }

        self.latch = Some(kind);
        self.diagnostics.push(diagnostic);
        true
    }

    /// Returns `true` once a statement error has been reported.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.latch.is_some()
    }

    /// Returns the kind of the first statement error, if any.
    #[must_use]
    pub const fn error_kind(&self) -> Option<ErrorKind> {
        self.latch
    }

    /// Returns the recorded diagnostics in the order they were reported.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the reporter, returning the latch and the diagnostics.
    #[must_use]
    pub fn into_parts(self) -> (Option<ErrorKind>, Vec<Diagnostic>) {
        (self.latch, self.diagnostics)
    }
}
