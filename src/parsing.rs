//! Recursive descent parser for Unicode locale identifiers
//!
//! The grammar is TR35's `unicode_locale_id`:
//!
//!     unicode_locale_id = unicode_language_id extensions* pu_extensions? ;
//!
//! Parsing is a single pass with one subtag of lookahead and no backtracking.
//! A [`LanguageTagParser`] owns one input string, a [`SubtagScanner`] over its
//! ASCII-lowercased copy, and the [`ParsedLocaleIdentifier`] under
//! construction. Each grammar rule lives in its own module as a method on the
//! parser:
//!
//! - `language`: `language[-script][-region][-variant]*`, also reused for the
//!   `tlang` of a transformed extension
//! - `extensions`: singleton dispatch and duplicate-singleton detection
//! - `unicode`, `transformed`, `private`, `other`: the extension grammars
//! - `insertion`: sorted insertion shared by variants and attributes
//!
//! Any rule failing fails the whole parse. There are no partial results.

mod extensions;
pub mod insertion;
mod language;
mod other;
mod private;
mod transformed;
mod unicode;

use crate::config::ParserOptions;
use crate::error::{ParseError, ParseResult};
use crate::identifier::ParsedLocaleIdentifier;
use crate::scanning::SubtagScanner;
use std::collections::BTreeSet;
use std::str::FromStr;
use tracing::{debug, debug_span};

/// Single-use parser for one locale identifier
#[derive(Debug)]
pub struct LanguageTagParser<'a> {
    source: &'a str,
    options: ParserOptions,
    scanner: SubtagScanner,
    parsed: ParsedLocaleIdentifier,
    seen_singletons: BTreeSet<char>,
}

impl<'a> LanguageTagParser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, ParserOptions::default())
    }

    pub fn with_options(source: &'a str, options: ParserOptions) -> Self {
        // Over-long input is never tokenized; `parse` reports it first
        let scanner = if source.len() > options.max_length {
            SubtagScanner::default()
        } else {
            SubtagScanner::new(source.to_ascii_lowercase())
        };
        Self {
            source,
            options,
            scanner,
            parsed: ParsedLocaleIdentifier::default(),
            seen_singletons: BTreeSet::new(),
        }
    }

    /// The input exactly as given, before lowercasing
    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse the whole input, consuming the parser
    pub fn parse(mut self) -> ParseResult<ParsedLocaleIdentifier> {
        let span = debug_span!("parse_locale_id", input = self.source);
        let _guard = span.enter();

        match self.parse_unicode_locale_id() {
            Ok(()) => {
                debug!("accepted locale identifier");
                Ok(self.parsed)
            }
            Err(err) => {
                debug!(error = %err, "rejected locale identifier");
                Err(err)
            }
        }
    }

    fn parse_unicode_locale_id(&mut self) -> ParseResult<()> {
        if self.source.len() > self.options.max_length {
            return Err(ParseError::TooLong {
                len: self.source.len(),
                max: self.options.max_length,
            });
        }
        if !self.scanner.next_subtag() {
            return Err(self.scanner.leftover_error());
        }

        self.parsed.language_identifier = self.parse_language_id(false)?;

        if self.options.extensions {
            self.parse_extensions()?;
        }

        if !self.scanner.is_finished() {
            return Err(self.scanner.leftover_error());
        }
        Ok(())
    }
}

/// Parse a locale identifier with the default options.
///
/// Returns `None` for anything that is not a structurally valid tag.
pub fn parse_locale_id(input: &str) -> Option<ParsedLocaleIdentifier> {
    try_parse_locale_id(input).ok()
}

/// Parse a locale identifier given as UTF-16 code units.
///
/// Unpaired surrogates decode to U+FFFD, which no subtag production accepts.
pub fn parse_locale_id_utf16(input: &[u16]) -> Option<ParsedLocaleIdentifier> {
    parse_locale_id(&String::from_utf16_lossy(input))
}

/// Parse a locale identifier with the default options, keeping the error
pub fn try_parse_locale_id(input: &str) -> ParseResult<ParsedLocaleIdentifier> {
    LanguageTagParser::new(input).parse()
}

pub fn is_structurally_valid_language_tag(input: &str) -> bool {
    try_parse_locale_id(input).is_ok()
}

/// Parse `input` and write it back in canonical form
pub fn canonicalize_locale_id(input: &str) -> ParseResult<String> {
    try_parse_locale_id(input).map(|parsed| parsed.to_string())
}

impl FromStr for ParsedLocaleIdentifier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_parse_locale_id(s)
    }
}
