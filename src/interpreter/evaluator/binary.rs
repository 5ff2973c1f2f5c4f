use crate::{
    error::RuntimeError,
    field::FieldElement,
    interpreter::{evaluator::core::Context, operator::BinaryOperator},
};

impl Context<'_> {
    /// Evaluates a binary operation between two field elements and records
    /// the operator in the trace.
    ///
    /// Division and modulo check their right operand for zero first. A zero
    /// divisor is reported (only the first error of a statement is kept) and
    /// the unchecked operation runs anyway, so a value is always produced.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The result of the operation in the field.
    ///
    /// # Example
    /// ```
    /// use modcalc::{
    ///     config::ExponentMode,
    ///     field::Field,
    ///     interpreter::{evaluator::core::Context, operator::BinaryOperator},
    /// };
    ///
    /// let field = Field::default();
    /// let mut context = Context::new(&field, ExponentMode::Field);
    ///
    /// let quotient = context.eval_binary(BinaryOperator::Div,
    ///                                    field.normalise(5),
    ///                                    field.normalise(0),
    ///                                    1);
    /// assert_eq!(quotient, field.normalise(5));
    /// assert!(context.has_error());
    /// assert_eq!(context.trace().to_string(), "/");
    /// ```
    pub fn eval_binary(&mut self,
                       op: BinaryOperator,
                       left: FieldElement,
                       right: FieldElement,
                       line: usize)
                       -> FieldElement {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        let field = self.field();
        let value = match op {
            Add => field.add(left, right),
            Sub => field.subtract(left, right),
            Mul => field.multiply(left, right),
            Div => {
                if right.is_zero() {
                    self.report(RuntimeError::DivisionByZero { line });
                }
                field.divide_unchecked(left, right)
            },
            Mod => {
                if right.is_zero() {
                    self.report(RuntimeError::ModuloByZero { line });
                }
                field.mod_unchecked(left, right)
            },
            Pow => field.power(left, right),
        };

        self.trace_mut().push_operator(op);
        value
    }
}
