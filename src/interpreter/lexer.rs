use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Non-negative integer literals such as `42`, kept as their decimal
    /// digits. Literals may be arbitrarily long; they are reduced into the
    /// field by the parser.
    #[regex(r"[0-9]+", |lex| lex.slice().to_owned())]
    Number(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `# Comments`, running to the end of the line. A backslash before the
    /// line break continues the comment on the next line.
    #[regex(r"#([^\n]|\\\r?\n)*", skip_lines, allow_greedy = true)]
    Comment,
    /// A backslash immediately followed by a line break joins two lines.
    #[regex(r"\\\r?\n", skip_lines)]
    Continuation,
    /// Ends a statement.
    #[regex(r"\r?\n")]
    NewLine,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(digits) => f.write_str(digits),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Percent => f.write_str("%"),
            Self::Caret => f.write_str("^"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::NewLine => f.write_str("\\n"),
            // Skipped by the lexer, so never part of a diagnostic.
            Self::Comment | Self::Continuation | Self::Ignored => Ok(()),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Skips a comment or continuation, counting the line breaks it swallows.
fn skip_lines(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    lex.extras.line += lex.slice().matches('\n').count();
    logos::Skip
}

/// A lazy stream of `(Token, line)` pairs over one source text.
///
/// Illegal characters are yielded as [`LexError`]s in the position they occur.
/// Exactly one character is skipped for each of them and lexing resumes right
/// after it, so the stream always runs to the end of the input.
///
/// # Example
/// ```
/// use modcalc::{
///     error::LexError,
///     interpreter::lexer::{Token, TokenStream},
/// };
///
/// let items: Vec<_> = TokenStream::new("1 & 2\n").collect();
/// assert_eq!(items,
///            vec![Ok((Token::Number("1".into()), 1)),
///                 Err(LexError::IllegalCharacter { character: '&',
///                                                  line:      1, }),
///                 Ok((Token::Number("2".into()), 1)),
///                 Ok((Token::NewLine, 1)),]);
/// ```
pub struct TokenStream<'src> {
    source: &'src str,
    offset: usize,
    lexer:  logos::Lexer<'src, Token>,
}

impl<'src> TokenStream<'src> {
    /// Creates a stream starting on line 1 of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::starting_at(source, 1)
    }

    /// Creates a stream that numbers the first line of `source` as `line`.
    #[must_use]
    pub fn starting_at(source: &'src str, line: usize) -> Self {
        Self { source,
               offset: 0,
               lexer: Token::lexer_with_extras(source, LexerExtras { line }) }
    }

    /// Returns the line the lexer is currently on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.lexer.extras.line
    }

    /// Skips the single character at the start of the current error span.
    ///
    /// The error span may cover more than one character when a pattern fails
    /// part way through (a `\` not followed by a line break). In that case the
    /// lexer is restarted right after the first character so the rest of the
    /// span is lexed again.
    fn illegal_character(&mut self) -> Option<LexError> {
        let line = self.lexer.extras.line;
        let span = self.lexer.span();
        let start = self.offset + span.start;
        let character = self.source[start..].chars().next()?;
        let resume = start + character.len_utf8();

        if resume != self.offset + span.end {
            let extras = std::mem::take(&mut self.lexer.extras);
            self.lexer = Token::lexer_with_extras(&self.source[resume..], extras);
            self.offset = resume;
        }

        trace!(line, %character, "skipping illegal character");
        Some(LexError::IllegalCharacter { character, line })
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Result<(Token, usize), LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.lexer.next()? {
            Ok(Token::NewLine) => {
                let line = self.lexer.extras.line;
                self.lexer.extras.line += 1;
                Some(Ok((Token::NewLine, line)))
            },
            Ok(token) => Some(Ok((token, self.lexer.extras.line))),
            Err(()) => self.illegal_character().map(Err),
        }
    }
}
