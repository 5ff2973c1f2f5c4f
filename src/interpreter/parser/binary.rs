use crate::{
    field::FieldElement,
    interpreter::{
        evaluator::{core::Context, unary::Operand},
        lexer::Token,
        operator::BinaryOperator,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    ///
    /// # Parameters
    /// - `context`: The statement being evaluated.
    ///
    /// # Returns
    /// The value of the parsed expression.
    pub fn parse_additive(&mut self, context: &mut Context<'_>) -> ParseResult<FieldElement> {
        let mut left = self.parse_multiplicative(context)?;
        while let Some((op, line)) =
            self.peek_operator(context, &[BinaryOperator::Add, BinaryOperator::Sub])
        {
            self.advance(context);
            let right = self.parse_multiplicative(context)?;
            left = context.eval_binary(op, left, right, line);
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators: `*`, `/` and `%`.
    ///
    /// The rule is: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
    pub fn parse_multiplicative(&mut self,
                                context: &mut Context<'_>)
                                -> ParseResult<FieldElement> {
        let mut left = self.parse_exponent(context)?;
        while let Some((op, line)) = self.peek_operator(context,
                                                        &[BinaryOperator::Mul,
                                                          BinaryOperator::Div,
                                                          BinaryOperator::Mod])
        {
            self.advance(context);
            let right = self.parse_exponent(context)?;
            left = context.eval_binary(op, left, right, line);
        }
        Ok(left)
    }

    /// Parses exponentiation expressions.
    ///
    /// The right operand of `^` is always a single term, a number literal
    /// with an optional minus, never a parenthesized expression. Chains
    /// therefore fold from the left: `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
    ///
    /// The rule is: `exponent := primary ("^" term)*`
    pub fn parse_exponent(&mut self, context: &mut Context<'_>) -> ParseResult<FieldElement> {
        let mut left = self.parse_primary(context)?;
        while let Some((op, line)) = self.peek_operator(context, &[BinaryOperator::Pow]) {
            self.advance(context);
            let right = self.parse_term(context, Operand::Exponent)?;
            left = context.eval_binary(op, left, right, line);
        }
        Ok(left)
    }

    /// Returns the lookahead operator and its line if it is one of
    /// `accepted`.
    fn peek_operator(&mut self,
                     context: &mut Context<'_>,
                     accepted: &[BinaryOperator])
                     -> Option<(BinaryOperator, usize)> {
        self.fill(context);
        let (token, line) = self.lookahead()?;
        token_to_binary_operator(token).filter(|op| accepted.contains(op))
                                       .map(|op| (op, line))
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` for `+`, `-`, `*`, `/`, `%` and `^`, and
/// `None` for all other tokens. A `-` is only read as subtraction when it
/// follows a complete operand; elsewhere it is a unary minus.
///
/// # Example
/// ```
/// use modcalc::interpreter::{
///     lexer::Token,
///     operator::BinaryOperator,
///     parser::binary::token_to_binary_operator,
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
