//! Lexical errors.
//!
//! Every error aborts the scan that raised it; no tokens are returned
//! alongside an error.

use lox_util::diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, SourceSnippet};
use lox_util::Span;
use thiserror::Error;

/// Error raised while scanning source text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// A character that cannot start any token.
    #[error("[line {line}] Error: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Line the character sits on.
        line: u32,
        /// Byte range of the character.
        span: Span,
    },

    /// Input ended inside a string literal.
    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString {
        /// Line on which the end of input was reached.
        line: u32,
        /// From the opening quote to the end of input.
        span: Span,
    },

    /// A digit-and-dot lexeme failed to parse as a number.
    ///
    /// Only reachable through a scanner bug; see [`ScanError::is_defect`].
    #[error("[line {line}] Error: Invalid number literal '{lexeme}'.")]
    InvalidNumberLiteral {
        /// The lexeme that failed to parse.
        lexeme: String,
        /// Line of the lexeme.
        line: u32,
        /// Byte range of the lexeme.
        span: Span,
    },
}

/// Result type alias for scanning.
pub type Result<T> = std::result::Result<T, ScanError>;

impl ScanError {
    /// Line the error is reported on.
    pub fn line(&self) -> u32 {
        match self {
            ScanError::UnexpectedCharacter { line, .. }
            | ScanError::UnterminatedString { line, .. }
            | ScanError::InvalidNumberLiteral { line, .. } => *line,
        }
    }

    /// Byte range of the offending source text.
    pub fn span(&self) -> Span {
        match self {
            ScanError::UnexpectedCharacter { span, .. }
            | ScanError::UnterminatedString { span, .. }
            | ScanError::InvalidNumberLiteral { span, .. } => *span,
        }
    }

    /// Stable diagnostic code for this kind of error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            ScanError::UnexpectedCharacter { .. } => DiagnosticCode::E0001,
            ScanError::UnterminatedString { .. } => DiagnosticCode::E0002,
            ScanError::InvalidNumberLiteral { .. } => DiagnosticCode::E0003,
        }
    }

    /// Returns true when the error points at a scanner bug rather than at
    /// bad input.
    pub fn is_defect(&self) -> bool {
        matches!(self, ScanError::InvalidNumberLiteral { .. })
    }

    /// The message without the `[line N] Error:` prefix.
    pub fn message(&self) -> String {
        match self {
            ScanError::UnexpectedCharacter { character, .. } => {
                format!("Unexpected character '{}'.", character)
            },
            ScanError::UnterminatedString { .. } => "Unterminated string.".to_string(),
            ScanError::InvalidNumberLiteral { lexeme, .. } => {
                format!("Invalid number literal '{}'.", lexeme)
            },
        }
    }

    /// Builds a renderable diagnostic, with a snippet cut from `source`.
    ///
    /// # Example
    ///
    /// ```
    /// use lox_lex::scan_all;
    ///
    /// let source = "var x = @;";
    /// let err = scan_all(source).unwrap_err();
    /// let rendered = err.to_diagnostic(source).to_string();
    /// assert!(rendered.starts_with("error[E0001]: Unexpected character '@'."));
    /// ```
    pub fn to_diagnostic(&self, source: &str) -> Diagnostic {
        let span = self.span();
        let builder = if self.is_defect() {
            DiagnosticBuilder::bug(self.message())
        } else {
            DiagnosticBuilder::error(self.message())
        };

        let mut snippet = SourceSnippet::from_source(source, span);
        let builder = match self {
            ScanError::UnexpectedCharacter { .. } => {
                snippet = snippet.with_label("not a valid token");
                builder
            },
            ScanError::UnterminatedString { .. } => {
                snippet = snippet.with_label("string starts here");
                builder.note("add a closing '\"' to end the string")
            },
            ScanError::InvalidNumberLiteral { .. } => {
                builder.note("the scanner accepted a lexeme it cannot convert; please report this")
            },
        };

        builder.code(self.code()).span(span).snippet(snippet).build()
    }
}
