/// The evaluator module computes values while the parser reduces.
///
/// There is no syntax tree: every reduction immediately applies the field
/// operation to its already computed operands.
///
/// # Responsibilities
/// - Applies field arithmetic for each operator and literal.
/// - Records the postfix trace of the statement.
/// - Reports division and modulo by zero without stopping evaluation.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a lazy stream
/// of tokens: numbers, operators, parentheses and line breaks. Comments,
/// whitespace and line continuations are discarded.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Reports every illegal character and skips it.
pub mod lexer;
/// Binary operators and their symbols.
pub mod operator;
/// Per-statement results.
///
/// Defines [`Outcome`](outcome::Outcome), which carries a statement's
/// diagnostics, trace and value, and knows how to print them.
pub mod outcome;
/// The parser module drives evaluation from the token stream.
///
/// # Responsibilities
/// - Parses one statement at a time with precedence climbing.
/// - Reports grammar errors and skips to the next statement after them.
pub mod parser;
/// Error reporting with a per-statement latch.
pub mod reporter;
/// Sessions tie a validated configuration to the parser.
pub mod session;
/// The postfix trace of a statement.
pub mod trace;
