//! Integration tests for the language identifier part of a locale tag and
//! for the whole-tag acceptance contract.

use langtag::testing::{assert_locale, init_tracing, parse_invalid, parse_valid};
use langtag::{
    canonicalize_locale_id, is_structurally_valid_language_tag, parse_locale_id,
    parse_locale_id_utf16, LanguageTagParser, ParseError, ParsedLocaleIdentifier, ParserOptions,
};
use rstest::rstest;

#[rstest]
#[case("en")]
#[case("und")]
#[case("abcde")]
#[case("en-GB")]
#[case("es-419")]
#[case("zh-Hant-TW")]
#[case("sr-Latn")]
#[case("sl-rozaj-biske")]
#[case("en-1ab")]
#[case("de-CH-fonipa-scouse")]
#[case("EN-us")]
fn test_accepts_language_identifiers(#[case] input: &str) {
    init_tracing();
    assert!(
        is_structurally_valid_language_tag(input),
        "{input} should be accepted"
    );
}

#[rstest]
#[case("", ParseError::Empty)]
#[case("-en", ParseError::EmptySubtag { offset: 0 })]
#[case("en--US", ParseError::EmptySubtag { offset: 3 })]
#[case("en-", ParseError::EmptySubtag { offset: 3 })]
#[case("e", ParseError::InvalidLanguage { subtag: "e".to_string() })]
#[case("1234", ParseError::InvalidLanguage { subtag: "1234".to_string() })]
#[case("abcdefghi", ParseError::InvalidLanguage { subtag: "abcdefghi".to_string() })]
#[case("en-fonipa-fonipa", ParseError::DuplicateVariant { subtag: "fonipa".to_string() })]
#[case("en-FONIPA-fonipa", ParseError::DuplicateVariant { subtag: "fonipa".to_string() })]
#[case("en-US-ab", ParseError::UnexpectedSubtag { subtag: "ab".to_string(), offset: 6 })]
#[case("en-abcdefghi", ParseError::UnexpectedSubtag { subtag: "abcdefghi".to_string(), offset: 3 })]
fn test_rejects_malformed_identifiers(#[case] input: &str, #[case] expected: ParseError) {
    init_tracing();
    assert_eq!(parse_invalid(input), expected);
    assert_eq!(parse_locale_id(input), None);
}

#[test]
fn test_language_only() {
    let parsed = parse_valid("en");
    assert_locale(&parsed)
        .language("en")
        .no_script()
        .no_region()
        .variants(&[])
        .no_extensions();
}

#[test]
fn test_region_is_upper_cased() {
    let parsed = parse_valid("en-gb");
    assert_locale(&parsed).language("en").region("GB").no_extensions();
}

#[test]
fn test_script_is_title_cased() {
    let parsed = parse_valid("ZH-hANT-tw");
    assert_locale(&parsed)
        .language("zh")
        .script("Hant")
        .region("TW")
        .canonical("zh-Hant-TW");
}

#[test]
fn test_numeric_region() {
    let parsed = parse_valid("es-419");
    assert_locale(&parsed).language("es").no_script().region("419");
}

#[test]
fn test_variants_are_sorted() {
    let parsed = parse_valid("sl-IT-rozaj-biske-1ab");
    assert_locale(&parsed)
        .region("IT")
        .variants(&["1ab", "biske", "rozaj"])
        .canonical("sl-IT-1ab-biske-rozaj");
}

#[test]
fn test_four_digit_subtag_is_not_a_variant() {
    assert!(matches!(
        parse_invalid("de-1901"),
        ParseError::UnexpectedSubtag { .. }
    ));
}

#[test]
fn test_from_str() {
    let parsed: ParsedLocaleIdentifier = "en-GB".parse().unwrap();
    assert_locale(&parsed).language("en").region("GB");

    let err = "en--GB".parse::<ParsedLocaleIdentifier>().unwrap_err();
    assert_eq!(err, ParseError::EmptySubtag { offset: 3 });
}

#[test]
fn test_utf16_entry_point() {
    let units: Vec<u16> = "zh-Hant-TW".encode_utf16().collect();
    let parsed = parse_locale_id_utf16(&units).unwrap();
    assert_locale(&parsed).script("Hant").region("TW");

    let lone_surrogate = [0x65, 0x6e, 0x2d, 0xd800];
    assert_eq!(parse_locale_id_utf16(&lone_surrogate), None);
}

#[test]
fn test_non_ascii_rejected() {
    assert_eq!(parse_locale_id("en-GBé"), None);
    assert_eq!(parse_locale_id("ébc"), None);
    assert_eq!(parse_locale_id("en GB"), None);
}

#[test]
fn test_canonicalize_locale_id() {
    assert_eq!(canonicalize_locale_id("EN-latn-us").unwrap(), "en-Latn-US");
    assert_eq!(canonicalize_locale_id("en--us"), Err(ParseError::EmptySubtag { offset: 3 }));
}

#[rstest]
#[case("en")]
#[case("en-GB")]
#[case("zh-Hant-TW")]
#[case("sl-rozaj-biske")]
#[case("en-u-foobar-nu-thai")]
#[case("en-t-es-AR")]
#[case("en-a-bbb-x-foo")]
fn test_round_trip_shape(#[case] input: &str) {
    let parsed = parse_valid(input);
    let canonical = parsed.to_string();
    let reparsed = parse_valid(&canonical);
    assert_eq!(reparsed, parsed, "{input} -> {canonical}");
    assert_eq!(reparsed.to_string(), canonical);
}

#[test]
fn test_parsing_is_idempotent() {
    let input = "ja-Jpan-JP-u-ca-japanese-t-m0-ungegn-x-priv";
    assert_eq!(parse_locale_id(input), parse_locale_id(input));
}

// ============================================================================
// Parser options
// ============================================================================

#[test]
fn test_without_canonical_case() {
    let options = ParserOptions {
        canonical_case: false,
        ..ParserOptions::default()
    };
    let parsed = LanguageTagParser::with_options("zh-Hant-TW", options)
        .parse()
        .unwrap();
    assert_locale(&parsed)
        .script("hant")
        .region("tw")
        .canonical("zh-Hant-TW");
}

#[test]
fn test_language_only_mode_rejects_extensions() {
    let options = ParserOptions {
        extensions: false,
        ..ParserOptions::default()
    };
    let parser = LanguageTagParser::with_options("en-u-nu-thai", options.clone());
    assert_eq!(
        parser.parse(),
        Err(ParseError::UnexpectedSubtag {
            subtag: "u".to_string(),
            offset: 3
        })
    );

    let parsed = LanguageTagParser::with_options("en-Latn-US", options)
        .parse()
        .unwrap();
    assert_locale(&parsed).script("Latn").region("US");
}

#[test]
fn test_length_cap() {
    let options = ParserOptions {
        max_length: 4,
        ..ParserOptions::default()
    };
    assert_eq!(
        LanguageTagParser::with_options("en-GB", options.clone()).parse(),
        Err(ParseError::TooLong { len: 5, max: 4 })
    );
    assert!(LanguageTagParser::with_options("en", options).parse().is_ok());

    let capped = ParserOptions {
        max_length: 1024,
        ..ParserOptions::default()
    };
    let long = format!("en-a{}", "-bb".repeat(400));
    assert_eq!(
        LanguageTagParser::with_options(&long, capped).parse(),
        Err(ParseError::TooLong { len: 1204, max: 1024 })
    );
}

#[test]
fn test_default_options_accept_long_tags() {
    let long = format!("en-a{}", "-bb".repeat(400));
    let parsed = parse_valid(&long);
    assert_eq!(parsed.other_extensions.get(&'a').map(Vec::len), Some(400));
    assert!(is_structurally_valid_language_tag(&long));
}

#[test]
fn test_parser_keeps_source() {
    let parser = LanguageTagParser::new("EN-gb");
    assert_eq!(parser.source(), "EN-gb");
    assert_eq!(parser.options(), &ParserOptions::default());
}
