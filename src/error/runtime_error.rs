#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents the arithmetic errors that can occur during evaluation.
///
/// Neither stops evaluation: the unchecked arithmetic still produces a value,
/// which the caller must treat as unreliable.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted modulo by zero.
    ModuloByZero {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Returns the source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::DivisionByZero { line } | Self::ModuloByZero { line } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Modulo shares the message; both divide by the zero residue.
            Self::DivisionByZero { .. } | Self::ModuloByZero { .. } => {
                write!(f, "error: division by 0")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
