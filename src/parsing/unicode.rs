//! Unicode (`u`) extension rule
//!
//!     unicode_locale_extensions = sep [uU]
//!                                 ((sep keyword)+
//!                                 |(sep attribute)+ (sep keyword)*) ;
//!     keyword   = key (sep type)? ;
//!     key       = alphanum alpha ;
//!     type      = alphanum{3,8} (sep alphanum{3,8})* ;
//!     attribute = alphanum{3,8} ;
//!
//! Attributes are kept sorted and may repeat. For keywords, the first key
//! that carries at least one type wins; a later occurrence of the same key is
//! dropped, and a key with no types is never recorded. Once attributes or
//! keywords start, this rule never fails: it stops at the first subtag that
//! fits neither phase.

use super::insertion::{insert_sorted, Duplicates};
use super::LanguageTagParser;
use crate::error::{ParseError, ParseResult};
use crate::subtags::{is_unicode_attribute, is_unicode_key, is_unicode_type_item};
use tracing::debug;

impl LanguageTagParser<'_> {
    pub(super) fn parse_unicode_extension(&mut self) -> ParseResult<()> {
        if self.parsed.has_unicode_extension() {
            return Err(ParseError::DuplicateExtension { singleton: 'u' });
        }

        while let Some(attribute) = self.scanner.peek().filter(|s| is_unicode_attribute(s)).map(str::to_owned) {
            insert_sorted(
                &mut self.parsed.unicode_extension_attributes,
                attribute,
                Duplicates::Allow,
            )
            .map_err(|subtag| ParseError::InvalidExtensionSubtag {
                singleton: 'u',
                subtag,
            })?;
            self.scanner.next_subtag();
        }

        while let Some(key) = self.scanner.peek().filter(|s| is_unicode_key(s)).map(str::to_owned) {
            self.scanner.next_subtag();

            let mut types = Vec::new();
            while let Some(item) = self.scanner.peek().filter(|s| is_unicode_type_item(s)).map(str::to_owned) {
                types.push(item);
                self.scanner.next_subtag();
            }

            if types.is_empty() {
                continue;
            }
            if self.parsed.unicode_extension_keywords.contains_key(&key) {
                debug!(%key, "ignoring repeated unicode extension key");
                continue;
            }
            self.parsed.unicode_extension_keywords.insert(key, types);
        }

        Ok(())
    }
}
