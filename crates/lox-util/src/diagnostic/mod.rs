//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, formatting, and collecting
//! front-end diagnostics.
//!
//! # Examples
//!
//! ```
//! use lox_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use lox_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unterminated string.")
//!     .code(DiagnosticCode::E0002)
//!     .span(Span::new(0, 4, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use level::Level;

use crate::span::Span;
use std::cell::RefCell;
use std::fmt;

/// A diagnostic message with severity and location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }
}

/// Renders the diagnostic the way it is shown to users:
///
/// ```text
/// error[E0001]: Unexpected character '@'.
///   --> line 1
///   1 | @
///     | ^
///   = note: ...
/// ```
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }
        if self.span.line > 0 {
            write!(f, "\n  --> line {}", self.span.line)?;
        }
        for snippet in &self.snippets {
            write!(f, "\n{}", snippet.format())?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        Ok(())
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics and provides methods for querying
/// their counts.
///
/// # Examples
///
/// ```
/// use lox_util::diagnostic::{Diagnostic, Handler};
/// use lox_util::span::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unexpected character", Span::DUMMY));
///
/// if handler.has_errors() {
///     eprintln!("Scanning failed with {} errors", handler.error_count());
/// }
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors (or internal bugs) have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors, internal bugs included
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
