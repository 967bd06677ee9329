//! Testing helpers for locale identifier parsing
//!
//! Tests should assert on the parsed structure, not on counts alone. The
//! fluent API reads like the tag it checks:
//!
//!     let parsed = parse_valid("zh-Hant-TW-u-nu-hanidec");
//!     assert_locale(&parsed)
//!         .language("zh")
//!         .script("Hant")
//!         .region("TW")
//!         .keyword("nu", &["hanidec"]);
//!
//! Every assertion panics with the input tag as context, so table-driven
//! tests point straight at the failing case.

use crate::error::ParseError;
use crate::identifier::{ParsedLanguageIdentifier, ParsedLocaleIdentifier};
use crate::parsing::try_parse_locale_id;

/// Install an env-filtered tracing subscriber for tests (`RUST_LOG=langtag=trace`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parse `input`, panicking with the parse error if it is rejected
pub fn parse_valid(input: &str) -> ParsedLocaleIdentifier {
    try_parse_locale_id(input)
        .unwrap_or_else(|err| panic!("`{input}` should be a valid locale identifier: {err}"))
}

/// Parse `input`, panicking if it is accepted
pub fn parse_invalid(input: &str) -> ParseError {
    match try_parse_locale_id(input) {
        Ok(parsed) => panic!("`{input}` should be rejected, parsed as {parsed:?}"),
        Err(err) => err,
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a parsed locale
pub fn assert_locale(locale: &ParsedLocaleIdentifier) -> LocaleAssertion<'_> {
    LocaleAssertion {
        context: locale.to_string(),
        locale,
    }
}

// ============================================================================
// Locale Assertions
// ============================================================================

pub struct LocaleAssertion<'a> {
    locale: &'a ParsedLocaleIdentifier,
    context: String,
}

impl<'a> LocaleAssertion<'a> {
    fn id(&self) -> LanguageAssertion<'a> {
        LanguageAssertion {
            id: &self.locale.language_identifier,
            context: self.context.clone(),
        }
    }

    pub fn language(self, expected: &str) -> Self {
        self.id().language(expected);
        self
    }

    pub fn script(self, expected: &str) -> Self {
        self.id().script(expected);
        self
    }

    pub fn no_script(self) -> Self {
        self.id().no_script();
        self
    }

    pub fn region(self, expected: &str) -> Self {
        self.id().region(expected);
        self
    }

    pub fn no_region(self) -> Self {
        self.id().no_region();
        self
    }

    pub fn variants(self, expected: &[&str]) -> Self {
        self.id().variants(expected);
        self
    }

    pub fn attributes(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.locale.unicode_extension_attributes,
            owned(expected),
            "{}: unicode extension attributes",
            self.context
        );
        self
    }

    pub fn keyword(self, key: &str, expected: &[&str]) -> Self {
        assert_eq!(
            self.locale.keyword(key),
            Some(owned(expected).as_slice()),
            "{}: unicode extension keyword `{}`",
            self.context,
            key
        );
        self
    }

    pub fn keyword_count(self, expected: usize) -> Self {
        let actual = self.locale.unicode_extension_keywords.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} unicode keywords, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Assert on the `tlang` of the transformed extension
    pub fn tlang<F>(self, check: F) -> Self
    where
        F: FnOnce(LanguageAssertion<'a>),
    {
        match &self.locale.transformed_language_identifier {
            Some(id) => check(LanguageAssertion {
                id,
                context: format!("{} (tlang)", self.context),
            }),
            None => panic!("{}: Expected a transformed language identifier", self.context),
        }
        self
    }

    pub fn no_tlang(self) -> Self {
        assert!(
            self.locale.transformed_language_identifier.is_none(),
            "{}: Expected no transformed language identifier",
            self.context
        );
        self
    }

    pub fn field(self, key: &str, expected: &[&str]) -> Self {
        assert_eq!(
            self.locale.field(key),
            Some(owned(expected).as_slice()),
            "{}: transformed extension field `{}`",
            self.context,
            key
        );
        self
    }

    pub fn other(self, singleton: char, expected: &[&str]) -> Self {
        assert_eq!(
            self.locale.other_extensions.get(&singleton),
            Some(&owned(expected)),
            "{}: `{}` extension",
            self.context,
            singleton
        );
        self
    }

    pub fn private_use(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.locale.private_use,
            owned(expected),
            "{}: private-use extension",
            self.context
        );
        self
    }

    pub fn no_extensions(self) -> Self {
        assert!(
            !self.locale.has_extensions(),
            "{}: Expected no extensions",
            self.context
        );
        self
    }

    pub fn canonical(self, expected: &str) -> Self {
        assert_eq!(self.locale.to_string(), expected, "canonical form");
        self
    }
}

// ============================================================================
// Language Identifier Assertions
// ============================================================================

pub struct LanguageAssertion<'a> {
    id: &'a ParsedLanguageIdentifier,
    context: String,
}

impl LanguageAssertion<'_> {
    pub fn language(self, expected: &str) -> Self {
        assert_eq!(self.id.language, expected, "{}: language subtag", self.context);
        self
    }

    pub fn script(self, expected: &str) -> Self {
        assert_eq!(
            self.id.script.as_deref(),
            Some(expected),
            "{}: script subtag",
            self.context
        );
        self
    }

    pub fn no_script(self) -> Self {
        assert_eq!(self.id.script, None, "{}: script subtag", self.context);
        self
    }

    pub fn region(self, expected: &str) -> Self {
        assert_eq!(
            self.id.region.as_deref(),
            Some(expected),
            "{}: region subtag",
            self.context
        );
        self
    }

    pub fn no_region(self) -> Self {
        assert_eq!(self.id.region, None, "{}: region subtag", self.context);
        self
    }

    pub fn variants(self, expected: &[&str]) -> Self {
        assert_eq!(self.id.variants, owned(expected), "{}: variants", self.context);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fluent_assertions_pass() {
        let parsed = parse_valid("en-Latn-US-t-es-ar-a-bbb-x-priv");
        assert_locale(&parsed)
            .language("en")
            .script("Latn")
            .region("US")
            .variants(&[])
            .tlang(|tlang| {
                tlang.language("es").region("ar").no_script();
            })
            .other('a', &["bbb"])
            .private_use(&["priv"]);
    }

    #[test]
    #[should_panic(expected = "region subtag")]
    fn test_fluent_assertions_fail_with_context() {
        let parsed = parse_valid("en-GB");
        assert_locale(&parsed).region("US");
    }

    #[test]
    fn test_parse_invalid_returns_error() {
        assert_eq!(
            parse_invalid("en-a-bbb-a-ccc"),
            ParseError::DuplicateExtension { singleton: 'a' }
        );
    }
}
