use crate::error::{LexError, ParseError, RuntimeError};

/// The kind of error held by a statement's error latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A token no production accepts.
    UnexpectedToken,
    /// Input ended in the middle of a statement.
    UnexpectedEndOfInput,
    /// Division by the zero residue.
    DivisionByZero,
    /// Modulo by the zero residue.
    ModuloByZero,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::UnexpectedToken => "unexpected token",
            Self::UnexpectedEndOfInput => "unexpected end of input",
            Self::DivisionByZero => "division by zero",
            Self::ModuloByZero => "modulo by zero",
        };
        f.write_str(name)
    }
}

/// A message reported while processing one statement.
///
/// Displaying a diagnostic yields exactly the line printed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Reported by the lexer, independent of the latch.
    Lex(LexError),
    /// A grammar error; subject to the latch.
    Parse(ParseError),
    /// An arithmetic error; subject to the latch.
    Runtime(RuntimeError),
}

impl Diagnostic {
    /// Returns the latch kind for statement errors, or `None` for lexer
    /// diagnostics, which never touch the latch.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Lex(_) => None,
            Self::Parse(ParseError::UnexpectedToken { .. }) => Some(ErrorKind::UnexpectedToken),
            Self::Parse(ParseError::UnexpectedEndOfInput { .. }) => {
                Some(ErrorKind::UnexpectedEndOfInput)
            },
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => Some(ErrorKind::DivisionByZero),
            Self::Runtime(RuntimeError::ModuloByZero { .. }) => Some(ErrorKind::ModuloByZero),
        }
    }

    /// Returns the source line the diagnostic refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line(),
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}

impl From<LexError> for Diagnostic {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Diagnostic {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Diagnostic {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => std::fmt::Display::fmt(e, f),
            Self::Parse(e) => std::fmt::Display::fmt(e, f),
            Self::Runtime(e) => std::fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Diagnostic {}
