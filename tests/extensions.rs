//! Integration tests for the extension grammars: `u`, `t`, `x` and the other
//! singletons.

use langtag::testing::{assert_locale, init_tracing, parse_invalid, parse_valid};
use langtag::ParseError;
use rstest::rstest;

// ============================================================================
// Unicode extension
// ============================================================================

#[test]
fn test_unicode_keyword() {
    let parsed = parse_valid("en-u-nu-thai");
    assert_locale(&parsed)
        .language("en")
        .attributes(&[])
        .keyword("nu", &["thai"])
        .keyword_count(1)
        .no_tlang();
}

#[test]
fn test_unicode_attribute_and_keyword() {
    let parsed = parse_valid("en-u-foobar-nu-thai");
    assert_locale(&parsed)
        .attributes(&["foobar"])
        .keyword("nu", &["thai"])
        .keyword_count(1);
}

#[test]
fn test_unicode_keywords_with_region() {
    let parsed = parse_valid("de-DE-u-co-phonebk-ka-shifted");
    assert_locale(&parsed)
        .region("DE")
        .keyword("co", &["phonebk"])
        .keyword("ka", &["shifted"])
        .canonical("de-DE-u-co-phonebk-ka-shifted");
}

#[test]
fn test_unicode_duplicate_attributes_are_kept() {
    let parsed = parse_valid("en-u-zzz-aaa-zzz-ca-gregory");
    assert_locale(&parsed)
        .attributes(&["aaa", "zzz", "zzz"])
        .keyword("ca", &["gregory"]);
}

#[test]
fn test_unicode_repeated_key_keeps_first_types() {
    init_tracing();
    let parsed = parse_valid("en-u-ca-gregory-nu-thai-ca-buddhist");
    assert_locale(&parsed)
        .keyword("ca", &["gregory"])
        .keyword("nu", &["thai"])
        .keyword_count(2);
}

#[test]
fn test_unicode_key_without_type() {
    let parsed = parse_valid("en-u-ca-nu-thai");
    assert_locale(&parsed).keyword("nu", &["thai"]).keyword_count(1);
    assert_eq!(parsed.keyword("ca"), None);
}

#[test]
fn test_unicode_keywords_serialize_sorted() {
    let parsed = parse_valid("th-u-nu-thai-ca-buddhist");
    let keys: Vec<_> = parsed.unicode_extension_keywords.keys().cloned().collect();
    assert_eq!(keys, vec!["nu", "ca"]);
    assert_locale(&parsed).canonical("th-u-ca-buddhist-nu-thai");
}

// ============================================================================
// Transformed extension
// ============================================================================

#[test]
fn test_transformed_tlang_keeps_lowercase() {
    let parsed = parse_valid("en-t-es-AR");
    assert_locale(&parsed)
        .language("en")
        .no_region()
        .tlang(|tlang| {
            tlang.language("es").region("ar").no_script();
        });
}

#[test]
fn test_transformed_tlang_and_fields() {
    let parsed = parse_valid("en-t-en-us-h0-hybrid");
    assert_locale(&parsed)
        .tlang(|tlang| {
            tlang.language("en").region("us");
        })
        .field("h0", &["hybrid"])
        .canonical("en-t-en-us-h0-hybrid");
}

#[test]
fn test_transformed_fields_only() {
    let parsed = parse_valid("und-Cyrl-t-und-latn-m0-ungegn-2007");
    assert_locale(&parsed)
        .language("und")
        .script("Cyrl")
        .tlang(|tlang| {
            tlang.language("und").script("latn");
        })
        .field("m0", &["ungegn", "2007"]);
}

#[test]
fn test_transformed_then_unicode() {
    let parsed = parse_valid("ja-t-it-u-ca-japanese");
    assert_locale(&parsed)
        .tlang(|tlang| {
            tlang.language("it");
        })
        .keyword("ca", &["japanese"])
        .canonical("ja-u-ca-japanese-t-it");
}

// ============================================================================
// Private-use and other extensions
// ============================================================================

#[test]
fn test_private_use_only() {
    let parsed = parse_valid("en-x-foo-bar");
    assert_locale(&parsed).private_use(&["foo", "bar"]).keyword_count(0);
}

#[rstest]
#[case("en-x-foo-a", &["foo", "a"])]
#[case("und-x-a-b", &["a", "b"])]
#[case("en-x-u-bar", &["u", "bar"])]
fn test_private_use_one_character_items(#[case] input: &str, #[case] expected: &[&str]) {
    let parsed = parse_valid(input);
    assert_locale(&parsed)
        .private_use(expected)
        .keyword_count(0)
        .canonical(&input.to_ascii_lowercase());
}

#[test]
fn test_other_extensions_sorted_on_output() {
    let parsed = parse_valid("en-b-bbb-a-aaa-cc");
    assert_locale(&parsed)
        .other('a', &["aaa", "cc"])
        .other('b', &["bbb"])
        .canonical("en-a-aaa-cc-b-bbb");
}

#[test]
fn test_all_extension_kinds() {
    let parsed = parse_valid("en-Latn-US-a-aaa-u-attr-co-phonebk-t-de-m0-din-x-private");
    assert_locale(&parsed)
        .script("Latn")
        .region("US")
        .other('a', &["aaa"])
        .attributes(&["attr"])
        .keyword("co", &["phonebk"])
        .tlang(|tlang| {
            tlang.language("de");
        })
        .field("m0", &["din"])
        .private_use(&["private"])
        .canonical("en-Latn-US-u-attr-co-phonebk-t-de-m0-din-a-aaa-x-private");
}

// ============================================================================
// Rejections
// ============================================================================

#[rstest]
#[case("en-a-bbb-a-ccc", ParseError::DuplicateExtension { singleton: 'a' })]
#[case("en-u-nu-thai-u-ca-gregory", ParseError::DuplicateExtension { singleton: 'u' })]
#[case("en-t-es-t-m0-din", ParseError::DuplicateExtension { singleton: 't' })]
#[case("en-x-foo-u-bar", ParseError::TrailingAfterPrivateUse { subtag: "u".to_string() })]
#[case("en-u", ParseError::EmptyExtension { singleton: 'u' })]
#[case("en-x", ParseError::EmptyExtension { singleton: 'x' })]
#[case("en-t-h0", ParseError::MissingFieldValue { key: "h0".to_string() })]
#[case("en-t-123", ParseError::EmptyExtension { singleton: 't' })]
#[case("en-a-b-ccc", ParseError::InvalidExtensionSubtag { singleton: 'a', subtag: "b".to_string() })]
#[case("en-x-toolongitem", ParseError::InvalidExtensionSubtag { singleton: 'x', subtag: "toolongitem".to_string() })]
#[case("en-t-de-fonipa-fonipa", ParseError::DuplicateVariant { subtag: "fonipa".to_string() })]
fn test_rejects_malformed_extensions(#[case] input: &str, #[case] expected: ParseError) {
    init_tracing();
    assert_eq!(parse_invalid(input), expected);
}

#[test]
fn test_nothing_follows_private_use() {
    assert!(matches!(
        parse_invalid("en-x-foo-toolongitem"),
        ParseError::TrailingAfterPrivateUse { .. }
    ));
}
