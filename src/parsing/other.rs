//! Other extensions: any singleton except `t`, `u` and `x`
//!
//!     other_extensions = sep [alphanum-[tTuUxX]] (sep alphanum{2,8})+ ;

use super::LanguageTagParser;
use crate::error::{ParseError, ParseResult};
use crate::subtags::is_other_extension_item;

impl LanguageTagParser<'_> {
    pub(super) fn parse_other_extension(&mut self, singleton: char) -> ParseResult<()> {
        if self.parsed.other_extensions.contains_key(&singleton) {
            return Err(ParseError::DuplicateExtension { singleton });
        }

        let mut values = Vec::new();
        while let Some(value) = self.scanner.peek().filter(|s| is_other_extension_item(s)).map(str::to_owned) {
            values.push(value);
            self.scanner.next_subtag();
        }
        if values.is_empty() {
            return Err(ParseError::InvalidExtensionSubtag {
                singleton,
                subtag: self.scanner.current_subtag().to_owned(),
            });
        }

        self.parsed.other_extensions.insert(singleton, values);
        Ok(())
    }
}
