use crate::{
    field::FieldElement,
    interpreter::{
        evaluator::{core::Context, unary::Operand},
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := "(" expression ")"
    ///              | term
    /// ```
    /// # Parameters
    /// - `context`: The statement being evaluated.
    ///
    /// # Returns
    /// The value of the primary expression or a `ParseError` on failure.
    pub(crate) fn parse_primary(&mut self,
                                context: &mut Context<'_>)
                                -> ParseResult<FieldElement> {
        if matches!(self.peek(context), Some(Token::LParen)) {
            self.parse_grouping(context)
        } else {
            self.parse_term(context, Operand::Value)
        }
    }

    /// Parses a parenthesized expression. Grouping adds nothing to the trace.
    ///
    /// Grammar: `grouping := "(" expression ")"`
    fn parse_grouping(&mut self, context: &mut Context<'_>) -> ParseResult<FieldElement> {
        self.advance(context);
        let value = self.parse_expression(context)?;

        match self.advance(context) {
            Some((Token::RParen, _)) => Ok(value),
            other => Err(self.unexpected(other)),
        }
    }

    /// Parses a number literal, optionally preceded by a unary minus.
    ///
    /// Unary minus binds tighter than every binary operator and applies only
    /// to a literal: `-(1)` and `--1` are grammar errors.
    ///
    /// Grammar: `term := "-" NUMBER | NUMBER`
    ///
    /// # Parameters
    /// - `context`: The statement being evaluated.
    /// - `operand`: Whether the term is an ordinary operand or an exponent.
    pub(crate) fn parse_term(&mut self,
                             context: &mut Context<'_>,
                             operand: Operand)
                             -> ParseResult<FieldElement> {
        match self.advance(context) {
            Some((Token::Number(digits), _)) => Ok(context.eval_literal(&digits, operand)),
            Some((Token::Minus, _)) => match self.advance(context) {
                Some((Token::Number(digits), _)) => {
                    Ok(context.eval_negated_literal(&digits, operand))
                },
                other => Err(self.unexpected(other)),
            },
            other => Err(self.unexpected(other)),
        }
    }
}
