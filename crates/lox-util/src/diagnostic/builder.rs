//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including source code snippets.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::Span;

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with the highlighted
/// column range.
///
/// # Examples
///
/// ```
/// use lox_util::diagnostic::SourceSnippet;
/// use lox_util::span::Span;
///
/// let source = "var x = @;";
/// let snippet = SourceSnippet::from_source(source, Span::new(8, 9, 1));
/// assert_eq!(snippet.line, "var x = @;");
/// assert_eq!(snippet.start_column, 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based, in characters)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive, in characters)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: None,
        }
    }

    /// Cut the snippet for `span` out of the full `source` text.
    ///
    /// Only the first line of the span is shown; a span running past the end
    /// of its line (an unterminated string, say) is underlined to the end of
    /// that line.
    pub fn from_source(source: &str, span: Span) -> Self {
        let start = floor_char_boundary(source, span.start);
        let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[start..]
            .find('\n')
            .map_or(source.len(), |i| start + i);
        let end = floor_char_boundary(source, span.end.clamp(start, line_end));

        let start_column = source[line_start..start].chars().count() + 1;
        let end_column = start_column + source[start..end].chars().count();
        let line = source[line_start..line_end].trim_end_matches('\r');

        Self::new(line, span.line as usize, start_column, end_column)
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns a formatted string showing the source line with carets (^)
    /// under the relevant range.
    ///
    /// # Examples
    ///
    /// ```
    /// use lox_util::diagnostic::SourceSnippet;
    ///
    /// let snippet = SourceSnippet::new("var x = @;", 1, 9, 10).with_label("here");
    /// assert_eq!(snippet.format(), "  1 | var x = @;\n    |         ^ here");
    /// ```
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);

        result.push_str(&format!("{:>width$} | ", ""));
        result.push_str(&" ".repeat(self.start_column.saturating_sub(1)));
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push(' ');
            result.push_str(label);
        }

        result
    }
}

fn floor_char_boundary(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use lox_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use lox_util::span::Span;
///
/// let diag = DiagnosticBuilder::error("Unexpected character '@'.")
///     .code(DiagnosticCode::E0001)
///     .span(Span::new(0, 1, 1))
///     .note("only ASCII letters, digits and operators start a token")
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.code, Some(DiagnosticCode::E0001));
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create a new builder with the given level and message
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create a builder for an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a builder for an internal-bug diagnostic
    pub fn bug(message: impl Into<String>) -> Self {
        Self::new(Level::Bug, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the primary span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a source snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            snippets: self.snippets,
        }
    }

    /// Build the diagnostic and emit it to the handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
