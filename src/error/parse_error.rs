use crate::interpreter::lexer::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that no production accepts at this point.
    UnexpectedToken {
        /// The token encountered.
        token: Token,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input in the middle of a statement.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Returns the source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. } | Self::UnexpectedEndOfInput { line } => *line,
        }
    }

    /// Returns `true` if the error already consumed the end of its statement,
    /// so recovery has nothing left to discard.
    #[must_use]
    pub const fn reached_statement_end(&self) -> bool {
        matches!(self,
                 Self::UnexpectedToken { token: Token::NewLine,
                                         .. }
                 | Self::UnexpectedEndOfInput { .. })
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, .. } => write!(f, "error: token '{token}'"),
            Self::UnexpectedEndOfInput { .. } => write!(f, "error: unexpected end of input"),
        }
    }
}

impl std::error::Error for ParseError {}
