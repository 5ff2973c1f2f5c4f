use crate::{
    config::ExponentMode,
    field::FieldElement,
    interpreter::evaluator::core::Context,
};

/// Where a literal term appears, which decides how it is reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// An ordinary operand, reduced into the field.
    Value,
    /// The right operand of `^`. Reduced into the field, or into the ring of
    /// exponents under [`ExponentMode::Ring`].
    Exponent,
}

impl Context<'_> {
    /// Evaluates a number literal and records it in the trace.
    ///
    /// # Example
    /// ```
    /// use modcalc::{
    ///     config::ExponentMode,
    ///     field::Field,
    ///     interpreter::evaluator::{core::Context, unary::Operand},
    /// };
    ///
    /// let field = Field::default();
    /// let mut context = Context::new(&field, ExponentMode::Field);
    /// assert_eq!(context.eval_literal("1234579", Operand::Value).value(), 2);
    /// assert_eq!(context.trace().to_string(), "2");
    /// ```
    pub fn eval_literal(&mut self, digits: &str, operand: Operand) -> FieldElement {
        let value = if self.reduces_into_ring(operand) {
            self.field().normalise_exponent_decimal(digits)
        } else {
            self.field().normalise_decimal(digits)
        };

        self.trace_mut().push_operand(value);
        value
    }

    /// Evaluates a unary minus applied to a number literal and records the
    /// canonical result in the trace.
    ///
    /// # Example
    /// ```
    /// use modcalc::{
    ///     config::ExponentMode,
    ///     field::Field,
    ///     interpreter::evaluator::{core::Context, unary::Operand},
    /// };
    ///
    /// let field = Field::default();
    /// let mut context = Context::new(&field, ExponentMode::Ring);
    /// assert_eq!(context.eval_negated_literal("1", Operand::Value).value(), 1_234_576);
    /// assert_eq!(context.eval_negated_literal("1", Operand::Exponent).value(), 1_234_575);
    /// assert_eq!(context.trace().to_string(), "1234576 1234575");
    /// ```
    pub fn eval_negated_literal(&mut self, digits: &str, operand: Operand) -> FieldElement {
        let field = self.field();
        let value = if self.reduces_into_ring(operand) {
            field.normalise_exponent(-field.normalise_exponent_decimal(digits).value())
        } else {
            field.unary_minus(field.normalise_decimal(digits))
        };

        self.trace_mut().push_operand(value);
        value
    }

    fn reduces_into_ring(&self, operand: Operand) -> bool {
        operand == Operand::Exponent && self.exponent_mode() == ExponentMode::Ring
    }
}
