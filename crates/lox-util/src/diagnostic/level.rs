//! Diagnostic severity levels.
//!
//! # Examples
//!
//! ```
//! use lox_util::diagnostic::Level;
//!
//! assert!(Level::Error.is_error());
//! assert!(!Level::Warning.is_error());
//! assert_eq!(Level::Bug.to_string(), "internal error");
//! ```

use std::fmt;

/// Diagnostic severity level
///
/// Each diagnostic has a severity level that determines whether the front
/// end may continue and how the diagnostic is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A bug message indicating an internal front-end issue
    ///
    /// Bugs are never caused by user input; they signal a broken invariant
    /// inside the scanner itself.
    Bug,
    /// An error that prevents the source from being processed further
    Error,
    /// A warning that doesn't stop processing
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl Level {
    /// Returns true for levels that stop processing (`Error` and `Bug`).
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Level::Error | Level::Bug)
    }

    /// Returns the label printed in front of a rendered diagnostic.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Bug => "internal error",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
