//! Operator lexing.
//!
//! Each operator here is either a single character or that character
//! followed by `=`. The longer form always wins.

use crate::token::TokenKind;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Emits `paired` if the next character is `=`, otherwise `single`.
    fn lex_with_equals(&mut self, paired: TokenKind, single: TokenKind) {
        let kind = if self.cursor.match_char('=') {
            paired
        } else {
            single
        };
        self.add_token(kind);
    }

    /// Handles: `!`, `!=`
    pub(super) fn lex_bang(&mut self) {
        self.lex_with_equals(TokenKind::BangEqual, TokenKind::Bang);
    }

    /// Handles: `=`, `==`
    pub(super) fn lex_equals(&mut self) {
        self.lex_with_equals(TokenKind::EqualEqual, TokenKind::Equal);
    }

    /// Handles: `<`, `<=`
    pub(super) fn lex_less(&mut self) {
        self.lex_with_equals(TokenKind::LessEqual, TokenKind::Less);
    }

    /// Handles: `>`, `>=`
    pub(super) fn lex_greater(&mut self) {
        self.lex_with_equals(TokenKind::GreaterEqual, TokenKind::Greater);
    }
}
