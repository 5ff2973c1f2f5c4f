/// Binary operators of the expression language.
///
/// Each operator maps to one field operation and is recorded in the trace by
/// its source symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`, field addition.
    Add,
    /// `-`, field subtraction.
    Sub,
    /// `*`, field multiplication.
    Mul,
    /// `/`, multiplication by the inverse.
    Div,
    /// `%`, remainder of the canonical representatives.
    Mod,
    /// `^`, exponentiation.
    Pow,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
