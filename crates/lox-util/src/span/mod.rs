//! Span module - Source location tracking.
//!
//! This module provides the [`Span`] type for representing a range of source
//! text by byte offsets, together with the line it starts on.
//!
//! # Examples
//!
//! ```
//! use lox_util::span::Span;
//!
//! // The lexeme `var` at the start of the first line
//! let span = Span::new(0, 3, 1);
//! assert_eq!(span.slice("var x;"), "var");
//! ```

/// Source location span
///
/// A `Span` represents a half-open range `[start, end)` of byte offsets into
/// a source text, plus the 1-based line on which the range begins.
///
/// # Examples
///
/// ```
/// use lox_util::span::Span;
///
/// let span = Span::new(4, 9, 2);
/// assert_eq!(span.len(), 5);
/// assert_eq!(span.line, 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use lox_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32) -> Self {
        Self { start, end, line }
    }

    /// Create an empty span at a single offset
    ///
    /// # Examples
    ///
    /// ```
    /// use lox_util::span::Span;
    ///
    /// let point = Span::point(7, 3);
    /// assert!(point.is_empty());
    /// ```
    #[inline]
    pub const fn point(offset: usize, line: u32) -> Self {
        Self {
            start: offset,
            end: offset,
            line,
        }
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Shrink the span by the specified number of bytes from each end
    ///
    /// # Examples
    ///
    /// ```
    /// use lox_util::span::Span;
    ///
    /// // Strip the quotes from `"abc"`
    /// let inner = Span::new(0, 5, 1).shrink(1);
    /// assert_eq!(inner.slice("\"abc\""), "abc");
    /// ```
    #[inline]
    pub fn shrink(self, amount: usize) -> Span {
        let start = (self.start + amount).min(self.end);
        Span {
            start,
            end: self.end.saturating_sub(amount).max(start),
            ..self
        }
    }

    /// Returns the text covered by this span.
    ///
    /// Returns an empty string if the span does not lie on character
    /// boundaries of `source`.
    #[inline]
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20, 3);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.line, 3);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_point() {
        let span = Span::point(4, 1);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert_eq!(span.slice("abcdef"), "");
    }

    #[test]
    fn test_span_shrink() {
        let span = Span::new(10, 20, 1).shrink(2);
        assert_eq!((span.start, span.end), (12, 18));
    }

    #[test]
    fn test_span_shrink_never_inverts() {
        let span = Span::new(3, 4, 1).shrink(1);
        assert!(span.is_empty());
        assert!(span.start <= span.end);
    }

    #[test]
    fn test_span_slice() {
        let source = "print \"hi\";";
        assert_eq!(Span::new(0, 5, 1).slice(source), "print");
        assert_eq!(Span::new(6, 10, 1).shrink(1).slice(source), "hi");
    }

    #[test]
    fn test_span_slice_out_of_range() {
        assert_eq!(Span::new(5, 50, 1).slice("abc"), "");
    }

    #[test]
    fn test_span_slice_not_char_boundary() {
        // 'é' is two bytes; offset 1 splits it.
        assert_eq!(Span::new(1, 2, 1).slice("é"), "");
    }
}
