//! Core scanner implementation.
//!
//! This module contains the `Scanner` struct, its main loop and the
//! per-character dispatch.

use lox_util::Span;
use tracing::{debug, debug_span, trace};

use crate::classify::{is_alpha, is_digit};
use crate::cursor::Cursor;
use crate::error::{Result, ScanError};
use crate::keywords::Keywords;
use crate::token::{Literal, Token, TokenKind};

/// Scanner for Lox source text.
///
/// A scanner is single-use: [`Scanner::scan_all`] consumes it and returns
/// either the complete token sequence or the first lexical error.
///
/// # Example
///
/// ```
/// use lox_lex::{Scanner, TokenKind};
///
/// let tokens = Scanner::new("x != 1").scan_all().unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::BangEqual, TokenKind::Number, TokenKind::Eof]
/// );
/// ```
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Reserved words recognised by this scanner.
    pub(super) keywords: &'a Keywords,

    /// Starting position of the current token (byte offset).
    pub(super) token_start: usize,

    /// Line number where the current token starts (1-based).
    pub(super) token_start_line: u32,

    /// Tokens emitted so far.
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `source` using the standard reserved words.
    pub fn new(source: &'a str) -> Self {
        Self::with_keywords(source, Keywords::global())
    }

    /// Creates a scanner that recognises the words in `keywords` instead of
    /// the standard table.
    pub fn with_keywords(source: &'a str, keywords: &'a Keywords) -> Self {
        Self {
            cursor: Cursor::new(source),
            keywords,
            token_start: 0,
            token_start_line: 1,
            tokens: Vec::new(),
        }
    }

    /// Scans the whole source.
    ///
    /// On success the last token is always [`TokenKind::Eof`]. The first
    /// lexical error aborts the scan and no tokens are returned.
    pub fn scan_all(mut self) -> Result<Vec<Token>> {
        let _span = debug_span!("scan", bytes = self.cursor.source().len()).entered();

        while !self.cursor.is_at_end() {
            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();
            self.scan_token()?;
        }

        self.tokens
            .push(Token::eof(self.cursor.position(), self.cursor.line()));

        debug!(
            tokens = self.tokens.len(),
            lines = self.cursor.line(),
            "scan complete"
        );
        Ok(self.tokens)
    }

    /// Scans one token, or skips one run of whitespace or comment.
    fn scan_token(&mut self) -> Result<()> {
        match self.cursor.advance() {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => self.lex_bang(),
            '=' => self.lex_equals(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '/' => self.lex_slash(),
            // Newlines are counted by the cursor.
            ' ' | '\r' | '\t' | '\n' => {},
            '"' => self.lex_string()?,
            c if is_digit(c) => self.lex_number()?,
            c if is_alpha(c) => self.lex_identifier(),
            c => {
                return Err(ScanError::UnexpectedCharacter {
                    character: c,
                    line: self.cursor.line(),
                    span: self.current_span(),
                })
            },
        }
        Ok(())
    }

    /// Span of the current token so far.
    pub(super) fn current_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
        )
    }

    /// Emits a token with no literal.
    pub(super) fn add_token(&mut self, kind: TokenKind) {
        self.push(kind, None);
    }

    /// Emits a token carrying `literal`.
    pub(super) fn add_literal_token(&mut self, kind: TokenKind, literal: Literal) {
        self.push(kind, Some(literal));
    }

    fn push(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.cursor.slice_from(self.token_start);
        let token = Token::new(kind, lexeme, literal, self.current_span());
        trace!(kind = %token.kind, lexeme = %token.lexeme, line = token.line, "token");
        self.tokens.push(token);
    }
}
