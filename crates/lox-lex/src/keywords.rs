//! Reserved-word table.
//!
//! The table is immutable once built. A single process-wide instance is
//! built on first use and shared by reference with every scanner, so
//! concurrent scans need no synchronization.

use lazy_static::lazy_static;
use lox_util::FxHashMap;

use crate::token::TokenKind;

/// The sixteen reserved words of the language.
pub const RESERVED_WORDS: [(&str, TokenKind); 16] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("fun", TokenKind::Fun),
    ("for", TokenKind::For),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

lazy_static! {
    static ref KEYWORDS: Keywords = Keywords::new();
}

/// Mapping from reserved-word spelling to its [`TokenKind`].
///
/// # Example
///
/// ```
/// use lox_lex::keywords::Keywords;
/// use lox_lex::TokenKind;
///
/// let keywords = Keywords::global();
/// assert_eq!(keywords.get("while"), Some(TokenKind::While));
/// assert_eq!(keywords.get("whilst"), None);
/// ```
#[derive(Clone, Debug)]
pub struct Keywords {
    map: FxHashMap<&'static str, TokenKind>,
}

impl Keywords {
    /// Builds the standard table of [`RESERVED_WORDS`].
    pub fn new() -> Self {
        RESERVED_WORDS.into_iter().collect()
    }

    /// Returns the shared standard table.
    pub fn global() -> &'static Keywords {
        &KEYWORDS
    }

    /// Looks up an exact, case-sensitive spelling.
    #[inline]
    pub fn get(&self, ident: &str) -> Option<TokenKind> {
        self.map.get(ident).copied()
    }

    /// Number of reserved words in the table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the table reserves nothing.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(&'static str, TokenKind)> for Keywords {
    fn from_iter<I: IntoIterator<Item = (&'static str, TokenKind)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

/// Looks `ident` up in the shared standard table.
///
/// # Example
///
/// ```
/// use lox_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("class"), Some(TokenKind::Class));
/// assert_eq!(keyword_from_ident("classroom"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    Keywords::global().get(ident)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_all_reserved_words() {
        let keywords = Keywords::new();
        assert_eq!(keywords.len(), 16);
        for (word, kind) in RESERVED_WORDS {
            assert_eq!(keywords.get(word), Some(kind));
            assert!(kind.is_keyword());
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(keyword_from_ident("or"), Some(TokenKind::Or));
        assert_eq!(keyword_from_ident("orchid"), None);
        assert_eq!(keyword_from_ident("fo"), None);
        assert_eq!(keyword_from_ident(""), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(keyword_from_ident("Class"), None);
        assert_eq!(keyword_from_ident("NIL"), None);
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(Keywords::global(), Keywords::global()));
    }

    #[test]
    fn test_custom_table() {
        let keywords: Keywords = [("fn", TokenKind::Fun)].into_iter().collect();
        assert_eq!(keywords.get("fn"), Some(TokenKind::Fun));
        assert_eq!(keywords.get("fun"), None);
        assert!(!keywords.is_empty());
    }

    #[test]
    fn test_global_usable_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| keyword_from_ident("super")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(TokenKind::Super));
        }
    }
}
