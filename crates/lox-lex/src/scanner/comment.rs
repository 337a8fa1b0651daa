//! Comment skipping.

use crate::token::TokenKind;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes a slash or skips a `//` comment.
    ///
    /// The comment runs up to, but not including, the next newline, so the
    /// newline still advances the line counter.
    pub(super) fn lex_slash(&mut self) {
        if self.cursor.match_char('/') {
            self.skip_line_comment();
        } else {
            self.add_token(TokenKind::Slash);
        }
    }

    fn skip_line_comment(&mut self) {
        while self.cursor.peek() != '\n' && !self.cursor.is_at_end() {
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Literal, TokenKind};
    use crate::Scanner;

    #[test]
    fn test_comment_is_skipped() {
        let tokens = Scanner::new("1 // ignored\n2").scan_all().unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].literal, Some(Literal::Number(1.0)));
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].literal, Some(Literal::Number(2.0)));
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_comment_at_end_of_input() {
        let tokens = Scanner::new("// only a comment").scan_all().unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
        assert_eq!(tokens[0].line, 1);
    }

    #[test]
    fn test_comment_swallows_anything() {
        let tokens = Scanner::new("//@#\"unterminated é\n;").scan_all().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Semicolon);
    }

    #[test]
    fn test_lone_slash() {
        let tokens = Scanner::new("a / b").scan_all().unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Slash);
        assert_eq!(tokens[1].lexeme, "/");
    }

    #[test]
    fn test_slash_at_end_of_input() {
        let tokens = Scanner::new("/").scan_all().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Slash);
        assert!(tokens[1].is_eof());
    }
}
