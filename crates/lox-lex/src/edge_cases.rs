//! Edge case tests for lox-lex
