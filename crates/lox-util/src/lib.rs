//! lox-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! Shared building blocks for the lox front end:
//!
//! - [`span`] - byte-offset source ranges tagged with their line
//! - [`diagnostic`] - levels, codes, snippets and the collecting [`Handler`]
//!
//! The hash map used by the keyword table is re-exported here so every crate
//! in the workspace agrees on one hasher.
//!
//! # Example
//!
//! ```
//! use lox_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character '#'.")
//!     .code(DiagnosticCode::E0001)
//!     .span(Span::new(0, 1, 1))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use span::Span;

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
