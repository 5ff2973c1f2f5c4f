use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::interpreter::session::Session;

/// A source of logical input lines.
///
/// End of input is an explicit `Ok(None)`, so the read loop terminates
/// normally rather than through an error.
pub trait LineSource {
    /// Returns the next logical line including its line break, or `None` at
    /// end of input.
    ///
    /// # Errors
    /// Propagates read failures of the underlying input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads logical lines from any buffered reader.
///
/// A physical line ending in a backslash continuation is joined with the
/// line after it, so the lexer sees the whole statement at once.
///
/// # Example
/// ```
/// use modcalc::repl::{LineSource, ReaderLines};
///
/// let mut lines = ReaderLines::new("1 + \\\n2\n3\n".as_bytes());
/// assert_eq!(lines.next_line().unwrap().as_deref(), Some("1 + \\\n2\n"));
/// assert_eq!(lines.next_line().unwrap().as_deref(), Some("3\n"));
/// assert_eq!(lines.next_line().unwrap(), None);
/// ```
pub struct ReaderLines<R> {
    reader: R,
}

impl<R: BufRead> ReaderLines<R> {
    /// Wraps `reader`.
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderLines<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        while self.reader.read_line(&mut line)? > 0 && ends_with_continuation(&line) {}

        Ok((!line.is_empty()).then_some(line))
    }
}

/// Returns `true` if `line` ends in a backslash directly before its line
/// break.
fn ends_with_continuation(line: &str) -> bool {
    line.strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .is_some_and(|rest| rest.ends_with('\\'))
}

/// Evaluates lines from `source` until it is exhausted, writing every
/// statement's output to `out`.
///
/// When `prompt` is set, `> ` is written before each line is read. Outcome
/// and diagnostic lines count from the start of `source`, not from the start
/// of each logical line.
///
/// # Errors
/// Propagates read errors from `source` and write errors from `out`.
///
/// # Returns
/// The number of statements that reported an error.
///
/// # Example
/// ```
/// use modcalc::{
///     config::Config,
///     interpreter::session::Session,
///     repl::{ReaderLines, run},
/// };
///
/// let session = Session::new(&Config::default()).unwrap();
/// let mut out = Vec::new();
/// let failures = run(&session, &mut ReaderLines::new("2 ^ 10\n5 / 0\n".as_bytes()), &mut out, false).unwrap();
///
/// assert_eq!(failures, 1);
/// assert_eq!(String::from_utf8(out).unwrap(), "2 10 ^\n1024\nerror: division by 0\n5 0 /\n");
/// ```
pub fn run<S, W>(session: &Session, source: &mut S, out: &mut W, prompt: bool) -> io::Result<usize>
    where S: LineSource + ?Sized,
          W: Write
{
    let mut failures = 0;
    let mut line_number = 1;

    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        let Some(line) = source.next_line()? else {
            if prompt {
                writeln!(out)?;
            }
            break;
        };

        failures += write_outcomes(session, &line, line_number, out)?;
        line_number += lines_spanned(&line);
    }

    debug!(failures, "end of input");
    Ok(failures)
}

/// Evaluates a whole source text, writing every statement's output to `out`.
///
/// # Errors
/// Propagates write errors from `out`.
///
/// # Returns
/// The number of statements that reported an error.
pub fn run_source<W: Write>(session: &Session, source: &str, out: &mut W) -> io::Result<usize> {
    write_outcomes(session, source, 1, out)
}

/// Evaluates `source`, numbering its first line `first_line`, and writes every
/// outcome to `out`. Returns the number of statements that reported an error.
fn write_outcomes<W>(session: &Session,
                     source: &str,
                     first_line: usize,
                     out: &mut W)
                     -> io::Result<usize>
    where W: Write
{
    let mut failures = 0;

    for outcome in session.statements_from(source, first_line) {
        if outcome.error.is_some() {
            failures += 1;
        }
        outcome.write_to(out)?;
    }

    out.flush()?;
    Ok(failures)
}

/// Returns the number of physical lines a logical line covers. A final line
/// without a line break still counts as one.
fn lines_spanned(line: &str) -> usize {
    line.matches('\n').count().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn continued_lines_span_every_physical_line() {
        assert_eq!(lines_spanned("1\n"), 1);
        assert_eq!(lines_spanned("1 + \\\n2 + \\\r\n3\r\n"), 3);
        assert_eq!(lines_spanned("7"), 1);
    }

    #[test]
    fn later_lines_keep_their_position() {
        let session = Session::new(&Config::default()).unwrap();
        let mut lines = ReaderLines::new("1\n2 + \\\n3\n5 / 0\n".as_bytes());
        let mut first_line = 1;
        let mut outcomes = Vec::new();

        while let Some(line) = lines.next_line().unwrap() {
            outcomes.extend(session.statements_from(&line, first_line));
            first_line += lines_spanned(&line);
        }

        let starts: Vec<usize> = outcomes.iter().map(|o| o.line).collect();
        assert_eq!(starts, vec![1, 2, 4]);
        assert_eq!(outcomes[2].diagnostics[0].line(), 4);
    }
}
