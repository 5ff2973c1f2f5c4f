use crate::{field::FieldElement, interpreter::operator::BinaryOperator};

/// The postfix (RPN) rendering of one statement.
///
/// Operands are recorded as their canonical field values and operators after
/// their operands, so the trace reads in evaluation order. Displaying a trace
/// joins its symbols with single spaces.
///
/// # Example
/// ```
/// use modcalc::{
///     field::Field,
///     interpreter::{operator::BinaryOperator, trace::Trace},
/// };
///
/// let field = Field::default();
/// let mut trace = Trace::default();
/// trace.push_operand(field.normalise(1));
/// trace.push_operand(field.normalise(2));
/// trace.push_operator(BinaryOperator::Add);
/// assert_eq!(trace.to_string(), "1 2 +");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    symbols: Vec<String>,
}

impl Trace {
    /// Appends an operand.
    pub fn push_operand(&mut self, value: FieldElement) {
        self.symbols.push(value.to_string());
    }

    /// Appends an operator.
    pub fn push_operator(&mut self, op: BinaryOperator) {
        self.symbols.push(op.to_string());
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbols.join(" "))
    }
}
