//! Language identifier rule
//!
//!     unicode_language_id = unicode_language_subtag
//!                           (sep unicode_script_subtag)?
//!                           (sep unicode_region_subtag)?
//!                           (sep unicode_variant_subtag)* ;
//!
//! Used for the primary identifier and for the `tlang` of a transformed
//! extension. Only the primary identifier gets canonical casing; an embedded
//! `tlang` keeps the lowercased text as scanned.

use super::insertion::{insert_sorted, Duplicates};
use super::LanguageTagParser;
use crate::error::{ParseError, ParseResult};
use crate::identifier::ParsedLanguageIdentifier;
use crate::subtags::{
    is_language_subtag, is_region_subtag, is_script_subtag, is_variant_subtag, to_ascii_titlecase,
};

impl LanguageTagParser<'_> {
    /// Parse a language identifier starting at the current subtag.
    ///
    /// Stops without error at the first subtag that is not a script, region or
    /// variant in its position; that subtag is left for the caller.
    pub(super) fn parse_language_id(&mut self, embedded: bool) -> ParseResult<ParsedLanguageIdentifier> {
        let language = match self.scanner.peek() {
            Some(subtag) if is_language_subtag(subtag) => subtag.to_owned(),
            Some(subtag) => {
                return Err(ParseError::InvalidLanguage {
                    subtag: subtag.to_owned(),
                })
            }
            None => return Err(self.scanner.leftover_error()),
        };
        let canonical_case = !embedded && self.options.canonical_case;
        let mut id = ParsedLanguageIdentifier::new(language);

        if !self.scanner.next_subtag() {
            return Ok(id);
        }

        if let Some(script) = self.scanner.peek().filter(|s| is_script_subtag(s)).map(str::to_owned) {
            id.script = Some(if canonical_case {
                to_ascii_titlecase(&script)
            } else {
                script
            });
            if !self.scanner.next_subtag() {
                return Ok(id);
            }
        }

        if let Some(region) = self.scanner.peek().filter(|s| is_region_subtag(s)).map(str::to_owned) {
            id.region = Some(if canonical_case {
                region.to_ascii_uppercase()
            } else {
                region
            });
            if !self.scanner.next_subtag() {
                return Ok(id);
            }
        }

        while let Some(variant) = self.scanner.peek().filter(|s| is_variant_subtag(s)).map(str::to_owned) {
            insert_sorted(&mut id.variants, variant, Duplicates::Reject)
                .map_err(|subtag| ParseError::DuplicateVariant { subtag })?;
            self.scanner.next_subtag();
        }

        Ok(id)
    }
}
