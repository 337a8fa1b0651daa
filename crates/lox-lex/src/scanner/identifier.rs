//! Identifier and keyword lexing.

use crate::classify::is_alphanumeric;
use crate::token::{Literal, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes an identifier or reserved word whose first character has been
    /// consumed.
    ///
    /// Only the complete run is looked up, so `classroom` is an identifier
    /// even though it starts with `class`.
    pub(super) fn lex_identifier(&mut self) {
        while is_alphanumeric(self.cursor.peek()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        match self.keywords.get(text) {
            Some(kind) => self.add_token(kind),
            None => {
                self.add_literal_token(TokenKind::Identifier, Literal::String(text.to_string()))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::keywords::RESERVED_WORDS;
    use crate::token::{Literal, Token, TokenKind};
    use crate::Scanner;

    fn scan(source: &str) -> Vec<Token> {
        Scanner::new(source).scan_all().unwrap()
    }

    #[test]
    fn test_identifier_literal_is_its_name() {
        let tokens = scan("foo_bar1");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "foo_bar1");
        assert_eq!(tokens[0].literal, Some(Literal::String("foo_bar1".into())));
    }

    #[test]
    fn test_every_keyword() {
        for (word, kind) in RESERVED_WORDS {
            let tokens = scan(word);
            assert_eq!(tokens[0].kind, kind, "{word}");
            assert_eq!(tokens[0].lexeme, word);
            assert_eq!(tokens[0].literal, None);
        }
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let tokens = scan("classroom");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_keyword_case_sensitive() {
        assert_eq!(scan("While")[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_underscore_identifiers() {
        let tokens = scan("_ __init__");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "_");
        assert_eq!(tokens[1].lexeme, "__init__");
    }

    #[test]
    fn test_identifier_stops_at_non_ascii() {
        let err = Scanner::new("caféx").scan_all().unwrap_err();
        assert_eq!(err.to_string(), "[line 1] Error: Unexpected character 'é'.");
    }
}
