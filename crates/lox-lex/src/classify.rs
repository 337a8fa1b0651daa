//! Character classification for the scanner.
//!
//! Lox identifiers and numbers are ASCII-only: letters, digits and the
//! underscore. Any other character (including non-ASCII letters) never
//! starts or continues an identifier.

/// Checks if a character is a decimal digit (`'0'..='9'`).
///
/// # Example
///
/// ```
/// use lox_lex::classify::is_digit;
///
/// assert!(is_digit('0'));
/// assert!(is_digit('9'));
/// assert!(!is_digit('a'));
/// assert!(!is_digit('٣'));  // Arabic-Indic digit three
/// ```
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character may start an identifier: an ASCII letter or `_`.
///
/// # Example
///
/// ```
/// use lox_lex::classify::is_alpha;
///
/// assert!(is_alpha('a'));
/// assert!(is_alpha('Z'));
/// assert!(is_alpha('_'));
/// assert!(!is_alpha('1'));
/// assert!(!is_alpha('α'));
/// ```
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character may continue an identifier.
///
/// # Example
///
/// ```
/// use lox_lex::classify::is_alphanumeric;
///
/// assert!(is_alphanumeric('a'));
/// assert!(is_alphanumeric('_'));
/// assert!(is_alphanumeric('7'));
/// assert!(!is_alphanumeric('-'));
/// ```
#[inline]
pub fn is_alphanumeric(c: char) -> bool {
    is_digit(c) || is_alpha(c)
}
