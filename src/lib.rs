//! # langtag
//!
//! A structural parser for Unicode locale identifiers (BCP 47 language tags
//! in the `unicode_locale_id` form of UTS #35).
//!
//! The parser checks the shape of a tag and decomposes it into its parts:
//! language, script, region, variants, and the `u`, `t`, private-use and
//! other extensions. It does not validate subtags against any registry and
//! does not resolve aliases.
//!
//!     use langtag::parse_locale_id;
//!
//!     let parsed = parse_locale_id("zh-hant-tw-u-nu-hanidec").unwrap();
//!     assert_eq!(parsed.language_identifier.script.as_deref(), Some("Hant"));
//!     assert_eq!(parsed.to_string(), "zh-Hant-TW-u-nu-hanidec");
//!
//! ## Layout
//!
//! - [`scanning`]: tokenizes the input and walks it one subtag at a time
//! - [`subtags`]: the character-class predicates for every subtag kind
//! - [`parsing`]: the recursive descent parser and the public entry points
//! - [`identifier`]: the parsed result and its canonical serialization
//! - [`config`]: parser options and the layered configuration loader
//!
//! ## Testing
//!
//! See the [testing module](testing) for the fluent assertion API used by the
//! test suite.

pub mod config;
pub mod error;
pub mod identifier;
pub mod parsing;
pub mod scanning;
pub mod subtags;
pub mod testing;

pub use config::{LangtagConfig, Loader, OutputFormat, ParserOptions};
pub use error::{ParseError, ParseResult};
pub use identifier::{ParsedLanguageIdentifier, ParsedLocaleIdentifier};
pub use parsing::{
    canonicalize_locale_id, is_structurally_valid_language_tag, parse_locale_id,
    parse_locale_id_utf16, try_parse_locale_id, LanguageTagParser,
};
