//! Private-use (`x`) extension rule
//!
//!     pu_extensions = sep [xX] (sep alphanum{1,8})+ ;
//!
//! Nothing may follow a private-use extension. A one-character subtag after
//! the first item that is followed by more subtags has the shape of a new
//! extension (`-x-foo-u-bar`), so it is rejected as trailing content. As the
//! last subtag it cannot open an extension and is an ordinary item.

use super::LanguageTagParser;
use crate::error::{ParseError, ParseResult};
use crate::subtags::{is_private_use_item, singleton};

impl LanguageTagParser<'_> {
    pub(super) fn parse_private_use_extension(&mut self) -> ParseResult<()> {
        let first = self.scanner.current_subtag();
        if !is_private_use_item(first) {
            return Err(ParseError::InvalidExtensionSubtag {
                singleton: 'x',
                subtag: first.to_owned(),
            });
        }

        while let Some(item) = self.scanner.peek().filter(|s| is_private_use_item(s)).map(str::to_owned) {
            if !self.parsed.private_use.is_empty()
                && singleton(&item).is_some()
                && self.scanner.has_more_subtags()
            {
                return Err(ParseError::TrailingAfterPrivateUse { subtag: item });
            }
            self.parsed.private_use.push(item);
            self.scanner.next_subtag();
        }

        if let Some(subtag) = self.scanner.peek() {
            return Err(ParseError::TrailingAfterPrivateUse {
                subtag: subtag.to_owned(),
            });
        }
        if self.scanner.has_more_subtags() {
            return Err(self.scanner.leftover_error());
        }
        Ok(())
    }
}
