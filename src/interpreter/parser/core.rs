use tracing::{debug, trace};

use crate::{
    config::ExponentMode,
    error::ParseError,
    field::{Field, FieldElement},
    interpreter::{
        evaluator::core::Context,
        lexer::{Token, TokenStream},
        outcome::Outcome,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser that evaluates while it parses.
///
/// The parser pulls tokens lazily from a [`TokenStream`] and keeps a single
/// token of lookahead. Illegal characters met while pulling are handed to the
/// current statement's [`Context`] as they are encountered.
///
/// Grammar, lowest precedence first:
/// ```text
///     statement      := expression (NEWLINE | END)
///     expression     := additive
///     additive       := multiplicative (("+" | "-") multiplicative)*
///     multiplicative := exponent (("*" | "/" | "%") exponent)*
///     exponent       := primary ("^" term)*
///     primary        := "(" expression ")" | term
///     term           := "-" NUMBER | NUMBER
/// ```
pub struct Parser<'src> {
    tokens:    TokenStream<'src>,
    lookahead: Option<(Token, usize)>,
    line:      usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::starting_at(source, 1)
    }

    /// Creates a parser over `source` whose first line is numbered `line`.
    #[must_use]
    pub fn starting_at(source: &'src str, line: usize) -> Self {
        Self { tokens: TokenStream::starting_at(source, line),
               lookahead: None,
               line }
    }

    /// Parses and evaluates the next statement.
    ///
    /// Blank statements (an empty line, or one holding only a comment) are
    /// skipped, unless the lexer reported illegal characters on them; those
    /// yield an outcome carrying just the diagnostics.
    ///
    /// After a grammar error the rest of the statement is discarded, so the
    /// next call starts on the following line.
    ///
    /// # Parameters
    /// - `field`: The field to evaluate in.
    /// - `exponent_mode`: How exponents are reduced.
    ///
    /// # Returns
    /// The statement's [`Outcome`], or `None` at the end of input.
    ///
    /// # Example
    /// ```
    /// use modcalc::{config::ExponentMode, field::Field, interpreter::parser::core::Parser};
    ///
    /// let field = Field::default();
    /// let mut parser = Parser::new("\n(1+2)*3\n");
    ///
    /// let outcome = parser.parse_statement(&field, ExponentMode::Field).unwrap();
    /// assert_eq!(outcome.trace.unwrap().to_string(), "1 2 + 3 *");
    /// assert_eq!(outcome.value.unwrap().value(), 9);
    /// assert!(parser.parse_statement(&field, ExponentMode::Field).is_none());
    /// ```
    pub fn parse_statement(&mut self,
                           field: &Field,
                           exponent_mode: ExponentMode)
                           -> Option<Outcome> {
        loop {
            let mut context = Context::new(field, exponent_mode);

            if self.peek(&mut context).is_none() {
                return context.has_diagnostics()
                              .then(|| context.abandon(self.tokens.line()));
            }

            let line = self.peek_line();
            if matches!(self.peek(&mut context), Some(Token::NewLine)) {
                self.advance(&mut context);
                if context.has_diagnostics() {
                    return Some(context.abandon(line));
                }
                continue;
            }

            let outcome = match self.parse_terminated_expression(&mut context) {
                Ok(value) => context.finish(value, line),
                Err(error) => {
                    context.report(error.clone());
                    self.synchronize(&mut context, &error);
                    context.abandon(line)
                },
            };

            debug!(line,
                   trace = ?outcome.trace.as_ref().map(ToString::to_string),
                   value = ?outcome.value.map(FieldElement::value),
                   error = ?outcome.error,
                   "statement evaluated");
            return Some(outcome);
        }
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing.
    /// It begins at the lowest-precedence level, addition, and recursively
    /// descends through the precedence hierarchy.
    ///
    /// Grammar: `expression := additive`
    pub fn parse_expression(&mut self, context: &mut Context<'_>) -> ParseResult<FieldElement> {
        self.parse_additive(context)
    }

    /// Parses an expression that must be followed by the end of the
    /// statement.
    fn parse_terminated_expression(&mut self,
                                   context: &mut Context<'_>)
                                   -> ParseResult<FieldElement> {
        let value = self.parse_expression(context)?;

        match self.advance(context) {
            Some((Token::NewLine, _)) | None => Ok(value),
            Some((token, line)) => Err(ParseError::UnexpectedToken { token, line }),
        }
    }

    /// Discards the remaining tokens of a statement that failed to parse, up
    /// to and including its line break.
    fn synchronize(&mut self, context: &mut Context<'_>, error: &ParseError) {
        if error.reached_statement_end() {
            return;
        }

        let mut discarded = 0_usize;
        while let Some((token, _)) = self.advance(context) {
            if token == Token::NewLine {
                break;
            }
            discarded += 1;
        }
        trace!(discarded, "discarded rest of statement");
    }

    /// Pulls the next token into the lookahead slot, forwarding any illegal
    /// characters on the way to the statement's reporter.
    pub(in crate::interpreter::parser) fn fill(&mut self, context: &mut Context<'_>) {
        if self.lookahead.is_some() {
            return;
        }

        for item in self.tokens.by_ref() {
            match item {
                Ok(token) => {
                    self.lookahead = Some(token);
                    return;
                },
                Err(error) => context.lex_error(error),
            }
        }
    }

    /// Returns the next token without consuming it.
    pub(in crate::interpreter::parser) fn peek(&mut self,
                                               context: &mut Context<'_>)
                                               -> Option<&Token> {
        self.fill(context);
        self.lookahead.as_ref().map(|(token, _)| token)
    }

    /// Returns the lookahead token and its line, if one has been pulled.
    pub(in crate::interpreter::parser) fn lookahead(&self) -> Option<(&Token, usize)> {
        self.lookahead.as_ref().map(|(token, line)| (token, *line))
    }

    /// Returns the line of the lookahead token, or of the lexer position if
    /// there is none.
    fn peek_line(&self) -> usize {
        self.lookahead
            .as_ref()
            .map_or_else(|| self.tokens.line(), |(_, line)| *line)
    }

    /// Consumes and returns the next token.
    pub(in crate::interpreter::parser) fn advance(&mut self,
                                                  context: &mut Context<'_>)
                                                  -> Option<(Token, usize)> {
        self.fill(context);
        let next = self.lookahead.take();
        if let Some((_, line)) = &next {
            self.line = *line;
        }
        next
    }

    /// Builds the error for a token that no production accepts. `None` means
    /// the input ended.
    pub(in crate::interpreter::parser) fn unexpected(&self,
                                                    found: Option<(Token, usize)>)
                                                    -> ParseError {
        match found {
            Some((token, line)) => ParseError::UnexpectedToken { token, line },
            None => ParseError::UnexpectedEndOfInput { line: self.line },
        }
    }
}
