//! Scanner module.
//!
//! The scanner implementation is split by token family:
//! - `core` - Scanner struct, main loop and dispatch
//! - `operator` - One- and two-character operators
//! - `comment` - Line comments and the lone slash
//! - `string` - String literals
//! - `number` - Number literals
//! - `identifier` - Identifiers and reserved words

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Scanner;
pub use number::parse_number_literal;
