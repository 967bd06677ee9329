//! Token definitions for locale identifiers
//!
//! Only two tokens exist. Character classes are checked later by the subtag
//! predicates, since the same subtag text can be valid under one production
//! and invalid under another.
use logos::Logos;

/// All possible tokens in a locale identifier
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    #[token("-")]
    Separator,

    // Anything up to the next separator; classes are checked per production
    #[regex(r"[^-]+")]
    Subtag,
}

/// Tokenize a string and collect tokens with their byte spans
pub fn tokenize(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        // The two patterns cover every character, so the lexer has no error path
        let token = result.unwrap_or(Token::Subtag);
        tokens.push((token, lexer.span()));
    }

    tokens
}
