//! Scanning module for locale identifiers
//!
//! Scanning happens in two steps. First a logos lexer splits the lowercased
//! input into separator and subtag tokens. It never fails: every character is
//! either a `-` or part of a subtag. Then the [`SubtagScanner`] walks those
//! tokens with a one-subtag lookahead. It rejects the structural problems the
//! lexer cannot see: leading, trailing and doubled separators.
//!
//! The scanner is the only component that knows about byte offsets. Parsers
//! only see subtag text.

pub mod scanner;
pub mod token;

pub use scanner::SubtagScanner;
pub use token::{tokenize, Token};
