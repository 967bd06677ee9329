//! Extension dispatch
//!
//!     extensions = unicode_locale_extensions
//!                | transformed_extensions
//!                | other_extensions ;
//!
//! Each extension starts with a one-character singleton. The dispatcher
//! records every singleton it sees and rejects a repeat before any extension
//! grammar runs, so duplicate detection is the same for `u`, `t` and the
//! other singletons. `x` must come last and ends dispatch.

use super::LanguageTagParser;
use crate::error::{ParseError, ParseResult};
use crate::subtags;
use tracing::trace;

impl LanguageTagParser<'_> {
    /// Parse extensions until the current subtag is not a singleton
    pub(super) fn parse_extensions(&mut self) -> ParseResult<()> {
        while let Some(singleton) = self.scanner.peek().and_then(subtags::singleton) {
            if !self.seen_singletons.insert(singleton) {
                return Err(ParseError::DuplicateExtension { singleton });
            }
            if !self.scanner.next_subtag() {
                return Err(ParseError::EmptyExtension { singleton });
            }
            trace!(%singleton, "extension");

            match singleton {
                'u' => self.parse_unicode_extension()?,
                't' => self.parse_transformed_extension()?,
                'x' => return self.parse_private_use_extension(),
                other => self.parse_other_extension(other)?,
            }
        }
        Ok(())
    }
}
