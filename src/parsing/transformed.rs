//! Transformed (`t`) extension rule
//!
//!     transformed_extensions = sep [tT]
//!                              ((sep tlang (sep tfield)*)
//!                              | (sep tfield)+) ;
//!     tlang  = unicode_language_id ;
//!     tfield = tkey tvalue ;
//!     tkey   = alpha digit ;
//!     tvalue = (sep alphanum{3,8})+ ;
//!
//! The `tlang` goes through the language identifier rule without canonical
//! casing. A key that appears twice in the field block collects the values of
//! both occurrences.

use super::LanguageTagParser;
use crate::error::{ParseError, ParseResult};
use crate::subtags::{is_language_subtag, is_transformed_key, is_transformed_value_item};

impl LanguageTagParser<'_> {
    pub(super) fn parse_transformed_extension(&mut self) -> ParseResult<()> {
        let mut has_content = false;

        if self.scanner.peek().is_some_and(is_language_subtag) {
            let tlang = self.parse_language_id(true)?;
            self.parsed.transformed_language_identifier = Some(tlang);
            has_content = true;
        }

        if self.scanner.peek().is_some_and(is_transformed_key) {
            if !self.parsed.transformed_extension_fields.is_empty() {
                return Err(ParseError::DuplicateExtension { singleton: 't' });
            }
            has_content = true;
            self.parse_transformed_fields()?;
        }

        if has_content {
            Ok(())
        } else {
            Err(ParseError::EmptyExtension { singleton: 't' })
        }
    }

    fn parse_transformed_fields(&mut self) -> ParseResult<()> {
        while let Some(key) = self.scanner.peek().filter(|s| is_transformed_key(s)).map(str::to_owned) {
            self.scanner.next_subtag();

            let mut values = Vec::new();
            while let Some(value) = self.scanner.peek().filter(|s| is_transformed_value_item(s)).map(str::to_owned) {
                values.push(value);
                self.scanner.next_subtag();
            }
            if values.is_empty() {
                return Err(ParseError::MissingFieldValue { key });
            }

            self.parsed
                .transformed_extension_fields
                .entry(key)
                .or_default()
                .extend(values);
        }
        Ok(())
    }
}
