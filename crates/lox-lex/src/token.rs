//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact lexeme that produced it,
//! an optional decoded [`Literal`], and the line and byte span it came from.

use std::fmt;

use lox_util::Span;

/// Lexical category of a token.
///
/// The set is closed: the scanner never produces anything outside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character tokens.
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,

    // One or two character tokens.
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    // Literals.
    /// A name that is not a reserved word.
    Identifier,
    /// A double-quoted string literal.
    String,
    /// A decimal number literal.
    Number,

    // Keywords.
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fun`
    Fun,
    /// `for`
    For,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    /// End-of-input sentinel; always the last token of a scan.
    Eof,
}

impl TokenKind {
    /// Returns the upper-case name used when printing tokens.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }

    /// Returns true for the sixteen reserved words.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::Fun
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded value carried by literal tokens.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// String contents without the quotes, or an identifier's name.
    String(String),
    /// Numeric value of a number literal.
    Number(f64),
}

impl Literal {
    /// Returns the text of a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            Literal::Number(_) => None,
        }
    }

    /// Returns the value of a number literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            Literal::String(_) => None,
        }
    }
}

/// Integral numbers keep one decimal place (`1.0`) so a printed number is
/// always recognisable as a float.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => f.write_str(s),
            Literal::Number(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{:.1}", n),
            Literal::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One lexical unit of the source.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// Lexical category.
    pub kind: TokenKind,
    /// Exact source text of the token; empty for [`TokenKind::Eof`].
    pub lexeme: String,
    /// Decoded value for strings, numbers and identifiers.
    pub literal: Option<Literal>,
    /// 1-based line on which the token starts.
    pub line: u32,
    /// Byte range of the lexeme in the source.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Option<Literal>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line: span.line,
            span,
        }
    }

    /// Creates the end-of-input sentinel at byte `offset` on `line`.
    pub fn eof(offset: usize, line: u32) -> Self {
        Self::new(TokenKind::Eof, "", None, Span::point(offset, line))
    }

    /// Returns true for the end-of-input sentinel.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Prints `KIND lexeme literal`, with `null` for a missing literal.
///
/// Control characters and backslashes in the lexeme and in string literals
/// are escaped, so a token always prints on a single line.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.kind)?;
        write_escaped(f, &self.lexeme)?;
        f.write_str(" ")?;
        match &self.literal {
            Some(Literal::String(s)) => write_escaped(f, s),
            Some(literal) => write!(f, "{}", literal),
            None => f.write_str("null"),
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            c if c.is_control() => write!(f, "{}", c.escape_default())?,
            c => write!(f, "{}", c)?,
        }
    }
    Ok(())
}
