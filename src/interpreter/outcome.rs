use std::io::{self, Write};

use crate::{
    error::{Diagnostic, ErrorKind},
    field::FieldElement,
    interpreter::trace::Trace,
};

/// The result of evaluating one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The line the statement started on.
    pub line:        usize,
    /// Diagnostics in the order they were reported.
    pub diagnostics: Vec<Diagnostic>,
    /// The postfix trace, present when the statement parsed.
    pub trace:       Option<Trace>,
    /// The computed value, present when the statement parsed. Unreliable when
    /// `error` is set.
    pub value:       Option<FieldElement>,
    /// The kind of the first statement error, if the latch fired.
    pub error:       Option<ErrorKind>,
}

impl Outcome {
    /// Returns the value only if no statement error was reported.
    ///
    /// # Example
    /// ```
    /// use modcalc::{config::Config, evaluate};
    ///
    /// let outcomes = evaluate("5 / 0\n7 + 1\n", &Config::default()).unwrap();
    /// assert_eq!(outcomes[0].printable_value(), None);
    /// assert_eq!(outcomes[1].printable_value().map(|v| v.value()), Some(8));
    /// ```
    #[must_use]
    pub const fn printable_value(&self) -> Option<FieldElement> {
        if self.error.is_some() { None } else { self.value }
    }

    /// Returns `true` if the statement parsed and no statement error was
    /// reported. Illegal characters do not count as statement errors.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none() && self.value.is_some()
    }

    /// Writes the statement's output: each diagnostic, then the trace, then
    /// the value, one per line. Omitted parts produce no line.
    ///
    /// # Errors
    /// Propagates any error from the writer.
    ///
    /// # Example
    /// ```
    /// use modcalc::{config::Config, evaluate};
    ///
    /// let mut out = Vec::new();
    /// for outcome in evaluate("1 + & 2\n", &Config::default()).unwrap() {
    ///     outcome.write_to(&mut out).unwrap();
    /// }
    /// assert_eq!(String::from_utf8(out).unwrap(), "illegal character '&'\n1 2 +\n3\n");
    /// ```
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for diagnostic in &self.diagnostics {
            writeln!(out, "{diagnostic}")?;
        }
        if let Some(trace) = &self.trace {
            writeln!(out, "{trace}")?;
        }
        if let Some(value) = self.printable_value() {
            writeln!(out, "{value}")?;
        }
        Ok(())
    }
}
