//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line information for error reporting.

/// Character returned by [`Cursor::peek`] and [`Cursor::peek_next`] when
/// there is no character left to look at.
pub const EOF_CHAR: char = '\0';

/// A cursor for traversing source code character by character.
///
/// Positions are byte offsets into the source and always sit on a character
/// boundary. The line counter advances whenever a `'\n'` is consumed, no
/// matter which scanning routine consumes it.
///
/// # Example
///
/// ```
/// use lox_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x;");
///
/// assert_eq!(cursor.peek(), 'v');
/// assert_eq!(cursor.advance(), 'v');
/// assert_eq!(cursor.peek(), 'a');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source (next unread character).
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the character starting at byte `pos`, or [`EOF_CHAR`] past
    /// the end.
    #[inline]
    fn char_at(&self, pos: usize) -> char {
        match self.source.as_bytes().get(pos) {
            None => EOF_CHAR,
            // Fast path for ASCII (most common case)
            Some(&b) if b < 128 => b as char,
            // Slow path for UTF-8
            Some(_) => self.source[pos..].chars().next().unwrap_or(EOF_CHAR),
        }
    }

    /// Returns the next unread character without consuming it.
    ///
    /// Returns [`EOF_CHAR`] at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use lox_lex::cursor::{Cursor, EOF_CHAR};
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert_eq!(cursor.peek(), 'a');
    /// cursor.advance();
    /// assert_eq!(cursor.peek(), EOF_CHAR);
    /// ```
    #[inline]
    pub fn peek(&self) -> char {
        self.char_at(self.position)
    }

    /// Returns the character after the next unread one without consuming
    /// anything.
    ///
    /// # Example
    ///
    /// ```
    /// use lox_lex::cursor::{Cursor, EOF_CHAR};
    ///
    /// let cursor = Cursor::new("λx");
    /// assert_eq!(cursor.peek_next(), 'x');
    /// assert_eq!(Cursor::new("x").peek_next(), EOF_CHAR);
    /// ```
    #[inline]
    pub fn peek_next(&self) -> char {
        if self.is_at_end() {
            return EOF_CHAR;
        }
        self.char_at(self.position + self.peek().len_utf8())
    }

    /// Consumes and returns the next character.
    ///
    /// Must not be called at the end of the source; the scanner only calls
    /// it after checking [`Cursor::is_at_end`]. In release builds a call at
    /// the end returns [`EOF_CHAR`] and leaves the cursor where it is.
    ///
    /// # Example
    ///
    /// ```
    /// use lox_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// assert_eq!(cursor.line(), 1);
    /// assert_eq!(cursor.advance(), '\n');
    /// assert_eq!(cursor.line(), 2);
    /// ```
    #[inline]
    pub fn advance(&mut self) -> char {
        debug_assert!(!self.is_at_end(), "advance called at end of source");
        if self.is_at_end() {
            return EOF_CHAR;
        }

        let c = self.peek();
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        c
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// Returns true if the character was matched and consumed, false
    /// otherwise. Nothing is consumed at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use lox_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('>'));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    #[inline]
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from `start` to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use lox_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("var x");
    /// let start = cursor.position();
    /// for _ in 0..3 {
    ///     cursor.advance();
    /// }
    /// assert_eq!(cursor.slice_from(start), "var");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
