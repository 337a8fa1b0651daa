//! String literal lexing.
//!
//! Strings have no escape sequences and may span lines.

use crate::error::{Result, ScanError};
use crate::token::{Literal, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes a string literal whose opening quote has been consumed.
    ///
    /// The token's line is the line of the opening quote. An unterminated
    /// string is reported on the line where input ran out.
    pub(super) fn lex_string(&mut self) -> Result<()> {
        while self.cursor.peek() != '"' && !self.cursor.is_at_end() {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            return Err(ScanError::UnterminatedString {
                line: self.cursor.line(),
                span: self.current_span(),
            });
        }

        // The closing quote.
        self.cursor.advance();

        let value = self.current_span().shrink(1).slice(self.cursor.source());
        self.add_literal_token(TokenKind::String, Literal::String(value.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ScanError;
    use crate::token::{Literal, TokenKind};
    use crate::Scanner;
    use lox_util::Span;

    #[test]
    fn test_simple_string() {
        let tokens = Scanner::new("\"abc\"").scan_all().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "\"abc\"");
        assert_eq!(tokens[0].literal, Some(Literal::String("abc".into())));
        assert_eq!(tokens[0].span, Span::new(0, 5, 1));
    }

    #[test]
    fn test_empty_string() {
        let tokens = Scanner::new("\"\"").scan_all().unwrap();
        assert_eq!(tokens[0].literal, Some(Literal::String(String::new())));
        assert_eq!(tokens[0].lexeme, "\"\"");
    }

    #[test]
    fn test_string_not_at_start() {
        let tokens = Scanner::new("print \"hi\";").scan_all().unwrap();
        assert_eq!(tokens[1].literal, Some(Literal::String("hi".into())));
        assert_eq!(tokens[2].kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_no_escape_sequences() {
        let tokens = Scanner::new(r#""a\nb""#).scan_all().unwrap();
        assert_eq!(tokens[0].literal, Some(Literal::String(r"a\nb".into())));
    }

    #[test]
    fn test_multiline_string_advances_line() {
        let tokens = Scanner::new("\"one\ntwo\" x").scan_all().unwrap();
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[0].literal, Some(Literal::String("one\ntwo".into())));
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_non_ascii_content() {
        let tokens = Scanner::new("\"héllo 😀\"").scan_all().unwrap();
        assert_eq!(tokens[0].literal, Some(Literal::String("héllo 😀".into())));
    }

    #[test]
    fn test_unterminated_string() {
        let err = Scanner::new("\"unterminated").scan_all().unwrap_err();
        assert_eq!(
            err,
            ScanError::UnterminatedString {
                line: 1,
                span: Span::new(0, 13, 1),
            }
        );
    }

    #[test]
    fn test_unterminated_string_reports_last_line() {
        let err = Scanner::new("x = \"a\nb\n").scan_all().unwrap_err();
        assert_eq!(err.line(), 3);
        assert_eq!(err.span(), Span::new(4, 9, 1));
    }

    #[test]
    fn test_lone_quote() {
        let err = Scanner::new("\"").scan_all().unwrap_err();
        assert!(matches!(err, ScanError::UnterminatedString { line: 1, .. }));
    }
}
