//! lox-lex - Scanner for the Lox Programming Language
//!
//! This crate turns Lox source text into the flat token sequence consumed by
//! a parser. Scanning is a single left-to-right pass with one character of
//! look-ahead (two for number literals) and maximal munch.
//!
//! # Example Usage
//!
//! ```
//! use lox_lex::{scan_all, Literal, TokenKind};
//!
//! let tokens = scan_all("var answer = 42;").unwrap();
//!
//! assert_eq!(tokens[0].kind, TokenKind::Var);
//! assert_eq!(tokens[3].literal, Some(Literal::Number(42.0)));
//! assert!(tokens.last().unwrap().is_eof());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, token kind and literal definitions
//! - [`keywords`] - Reserved-word table
//! - [`classify`] - Character classes for digits and identifiers
//! - [`cursor`] - Character cursor for source traversal
//! - [`scanner`] - Main scanner implementation
//! - [`error`] - Lexical errors and their diagnostics
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `and`, `class`, `else`, `false`, `fun`, `for`, `if`, `nil`, `or`,
//! `print`, `return`, `super`, `this`, `true`, `var`, `while`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`. The token's literal is its name.
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.14` (no sign, exponent or radix prefix)
//! - **String**: `"hello"`, may span lines, no escape sequences
//!
//! ## Operators and Delimiters
//!
//! `( ) { } , . - + ; / *` and `! != = == < <= > >=`
//!
//! Whitespace (space, tab, carriage return, newline) and `//` line comments
//! are skipped.
//!
//! # Errors
//!
//! The first lexical error aborts the scan; see [`ScanError`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod error;
pub mod keywords;
pub mod scanner;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{Result, ScanError};
pub use keywords::{keyword_from_ident, Keywords};
pub use scanner::Scanner;
pub use token::{Literal, Token, TokenKind};

/// Scans `source` with the standard reserved words.
///
/// Returns every token in source order, ending with [`TokenKind::Eof`], or
/// the first lexical error.
///
/// # Example
///
/// ```
/// use lox_lex::{scan_all, ScanError};
///
/// assert_eq!(scan_all("").unwrap().len(), 1);
/// assert!(matches!(
///     scan_all("@"),
///     Err(ScanError::UnexpectedCharacter { character: '@', line: 1, .. })
/// ));
/// ```
pub fn scan_all(source: &str) -> Result<Vec<Token>> {
    Scanner::new(source).scan_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_class_declaration_program() {
        let source = r#"
            class Breakfast {
                cook() {
                    print "Eggs a-fryin'!";
                }
            }
        "#;
        let tokens = scan_all(source).unwrap();

        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Class,
                TokenKind::Identifier,
                TokenKind::LeftBrace,
                TokenKind::Identifier,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::Print,
                TokenKind::String,
                TokenKind::Semicolon,
                TokenKind::RightBrace,
                TokenKind::RightBrace,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[1].literal, Some(Literal::String("Breakfast".into())));
        assert_eq!(tokens[7].line, 4);
        assert_eq!(tokens[8].literal, Some(Literal::String("Eggs a-fryin'!".into())));
        assert_eq!(tokens[12].line, 7);
    }

    #[test]
    fn test_fibonacci_program() {
        let source = "fun fib(n) {\n  if (n <= 1) return n;\n  return fib(n - 2) + fib(n - 1);\n}\n";
        let tokens = scan_all(source).unwrap();

        let fib_calls = tokens
            .iter()
            .filter(|t| t.literal.as_ref().and_then(Literal::as_str) == Some("fib"))
            .count();
        assert_eq!(fib_calls, 3);
        assert!(tokens.iter().any(|t| t.kind == TokenKind::LessEqual));
        assert_eq!(tokens.last().unwrap().line, 5);
    }

    #[test]
    fn test_lossless_coverage() {
        let source = "var a = \"x\" ; // c\n  print a != 1.5;\n";
        let tokens = scan_all(source).unwrap();

        let mut rebuilt = String::new();
        let mut offset = 0;
        for token in &tokens {
            rebuilt.push_str(&source[offset..token.span.start]);
            assert_eq!(token.span.slice(source), token.lexeme);
            rebuilt.push_str(&token.lexeme);
            offset = token.span.end;
        }
        rebuilt.push_str(&source[offset..]);
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_numbers_on_separate_lines() {
        let tokens = scan_all("1\n2").unwrap();
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_error_returns_no_tokens() {
        assert!(matches!(
            scan_all("var ok = 1; \"unterminated"),
            Err(ScanError::UnterminatedString { line: 1, .. })
        ));
    }

    #[test]
    fn test_first_error_wins() {
        let err = scan_all("@ \"open").unwrap_err();
        assert!(matches!(err, ScanError::UnexpectedCharacter { character: '@', .. }));
    }

    #[test]
    fn test_independent_scans_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let source = format!("var v{i} = {i};");
                    scan_all(&source).map(|tokens| tokens.len())
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(6));
        }
    }
}
