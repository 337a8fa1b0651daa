//! Diagnostic codes for categorizing front-end errors.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, so users can look a code up in the documentation.
//!
//! # Examples
//!
//! ```
//! use lox_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E0002;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 2);
//! assert_eq!(code.as_str(), "E0002");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where `prefix` is
/// "E" for errors and `number` is zero-padded to four digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E0001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E0001-E0099)
    // =========================================================================

    /// E0001: Unexpected character
    pub const E0001: Self = Self::new("E", 1);
    /// E0002: Unterminated string literal
    pub const E0002: Self = Self::new("E", 2);
    /// E0003: Invalid number literal (internal scanner defect)
    pub const E0003: Self = Self::new("E", 3);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_format() {
        assert_eq!(DiagnosticCode::E0001.as_str(), "E0001");
        assert_eq!(DiagnosticCode::new("E", 42).as_str(), "E0042");
        assert_eq!(DiagnosticCode::new("W", 1234).to_string(), "W1234");
    }

    #[test]
    fn test_code_debug() {
        assert_eq!(format!("{:?}", DiagnosticCode::E0003), "DiagnosticCode(E0003)");
    }
}
