//! Number literal lexing.
//!
//! Numbers are decimal: a run of digits, optionally followed by `.` and a
//! further run of digits. There is no sign, exponent or radix prefix.

use lox_util::Span;
use tracing::warn;

use crate::classify::is_digit;
use crate::error::{Result, ScanError};
use crate::token::{Literal, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes a number literal whose first digit has been consumed.
    ///
    /// A `.` is only taken as a decimal point when a digit follows it, so
    /// `3.` scans as `3` then `.`.
    pub(super) fn lex_number(&mut self) -> Result<()> {
        self.consume_digits();

        if self.cursor.peek() == '.' && is_digit(self.cursor.peek_next()) {
            self.cursor.advance();
            self.consume_digits();
        }

        let lexeme = self.cursor.slice_from(self.token_start);
        let value = parse_number_literal(lexeme, self.current_span())?;
        self.add_literal_token(TokenKind::Number, Literal::Number(value));
        Ok(())
    }

    fn consume_digits(&mut self) {
        while is_digit(self.cursor.peek()) {
            self.cursor.advance();
        }
    }
}

/// Parses a scanned number lexeme.
///
/// The scanner only hands over digit-and-dot text, so a failure here is a
/// scanner defect and comes back as [`ScanError::InvalidNumberLiteral`].
///
/// # Example
///
/// ```
/// use lox_lex::scanner::parse_number_literal;
/// use lox_util::Span;
///
/// assert_eq!(parse_number_literal("3.25", Span::new(0, 4, 1)), Ok(3.25));
/// assert!(parse_number_literal("1.2.3", Span::new(0, 5, 1)).unwrap_err().is_defect());
/// ```
pub fn parse_number_literal(lexeme: &str, span: Span) -> Result<f64> {
    lexeme.parse::<f64>().map_err(|err| {
        warn!(lexeme, line = span.line, %err, "scanner produced an unparsable number");
        ScanError::InvalidNumberLiteral {
            lexeme: lexeme.to_string(),
            line: span.line,
            span,
        }
    })
}
