//! Error types for locale identifier parsing
//!
//! Every variant means the same thing to a caller: the input is not a
//! structurally valid language tag. The payloads only exist for diagnostics.

/// Errors that can occur while parsing a locale identifier
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input contained no subtags at all
    #[error("empty locale identifier")]
    Empty,

    /// The input exceeded the configured length cap
    #[error("locale identifier is {len} bytes long, the limit is {max}")]
    TooLong { len: usize, max: usize },

    /// A leading, trailing or doubled separator produced an empty subtag
    #[error("empty subtag at offset {offset}")]
    EmptySubtag { offset: usize },

    /// The first subtag is not 2-3 or 5-8 ASCII letters
    #[error("invalid language subtag `{subtag}`")]
    InvalidLanguage { subtag: String },

    /// The same variant appeared twice in one language identifier
    #[error("duplicate variant subtag `{subtag}`")]
    DuplicateVariant { subtag: String },

    /// A singleton was not followed by any usable content
    #[error("extension `{singleton}` has no content")]
    EmptyExtension { singleton: char },

    /// A singleton appeared more than once
    #[error("duplicate extension `{singleton}`")]
    DuplicateExtension { singleton: char },

    /// A subtag did not match the shape required by its extension
    #[error("invalid subtag `{subtag}` in `{singleton}` extension")]
    InvalidExtensionSubtag { singleton: char, subtag: String },

    /// A transformed extension field key had no value
    #[error("transformed extension field `{key}` has no value")]
    MissingFieldValue { key: String },

    /// Something followed the private-use extension
    #[error("subtag `{subtag}` follows the private-use extension")]
    TrailingAfterPrivateUse { subtag: String },

    /// A subtag was left over after the grammar finished
    #[error("unexpected subtag `{subtag}` at offset {offset}")]
    UnexpectedSubtag { subtag: String, offset: usize },
}

/// Result alias used throughout the parser
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ParseError::DuplicateVariant {
            subtag: "fonipa".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate variant subtag `fonipa`");

        let err = ParseError::TooLong { len: 2000, max: 1024 };
        assert_eq!(
            err.to_string(),
            "locale identifier is 2000 bytes long, the limit is 1024"
        );

        let err = ParseError::InvalidExtensionSubtag {
            singleton: 'a',
            subtag: "b".to_string(),
        };
        assert_eq!(err.to_string(), "invalid subtag `b` in `a` extension");
    }
}
