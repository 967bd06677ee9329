//! Cursor over the subtags of a locale identifier
//!
//! The scanner keeps a *current* subtag and remembers whether the last
//! [`SubtagScanner::next_subtag`] call succeeded. When it did, the current
//! subtag has not been consumed by any grammar rule yet and is exposed through
//! [`SubtagScanner::peek`]. When it failed (end of input or a malformed
//! separator), the cursor does not move and `peek` returns `None`, so parsers
//! never re-read a subtag they already consumed.

use super::token::{tokenize, Token};
use crate::error::ParseError;
use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct SubtagScanner {
    text: String,
    tokens: Vec<(Token, logos::Span)>,
    /// Index into `tokens` of the current subtag
    cursor: Option<usize>,
    /// Whether the last advance succeeded, i.e. the current subtag is unconsumed
    pending: bool,
}

impl SubtagScanner {
    /// Create a scanner positioned before the first subtag of `text`
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let tokens = tokenize(&text);
        Self {
            text,
            tokens,
            cursor: None,
            pending: false,
        }
    }

    /// Whether unconsumed characters remain after the current subtag
    pub fn has_more_subtags(&self) -> bool {
        match self.cursor {
            None => !self.tokens.is_empty(),
            Some(index) => index + 1 < self.tokens.len(),
        }
    }

    /// Advance to the next subtag.
    ///
    /// Fails without moving when the input is exhausted, when it ends in a
    /// separator, or when the next subtag would be empty.
    pub fn next_subtag(&mut self) -> bool {
        let next = match self.cursor {
            None => 0,
            Some(index) => match self.tokens.get(index + 1) {
                Some((Token::Separator, _)) => index + 2,
                _ => {
                    self.pending = false;
                    return false;
                }
            },
        };

        self.pending = matches!(self.tokens.get(next), Some((Token::Subtag, _)));
        if self.pending {
            self.cursor = Some(next);
            trace!(subtag = self.current_subtag(), "next subtag");
        }
        self.pending
    }

    /// Text of the current subtag, empty before the first advance
    pub fn current_subtag(&self) -> &str {
        self.current_span()
            .and_then(|span| self.text.get(span))
            .unwrap_or("")
    }

    /// Byte span of the current subtag in the scanned text
    pub fn current_span(&self) -> Option<logos::Span> {
        self.cursor
            .and_then(|index| self.tokens.get(index))
            .map(|(_, span)| span.clone())
    }

    /// The current subtag, if no grammar rule has consumed it yet
    pub fn peek(&self) -> Option<&str> {
        if self.pending {
            Some(self.current_subtag())
        } else {
            None
        }
    }

    /// Byte offset of the first character the scanner could not move past
    pub fn stall_offset(&self) -> usize {
        match self.current_span() {
            Some(span) if self.pending => span.start,
            Some(span) => (span.end + 1).min(self.text.len()),
            None => 0,
        }
    }

    /// Describe why scanning stopped before the end of the input.
    ///
    /// An unconsumed subtag is reported as unexpected. Otherwise the scanner
    /// stalled on a malformed separator (or on empty input).
    pub fn leftover_error(&self) -> ParseError {
        match self.peek() {
            Some(subtag) => ParseError::UnexpectedSubtag {
                subtag: subtag.to_string(),
                offset: self.stall_offset(),
            },
            None if self.text.is_empty() => ParseError::Empty,
            None => ParseError::EmptySubtag {
                offset: self.stall_offset(),
            },
        }
    }

    /// Whether every character of the input has been consumed
    pub fn is_finished(&self) -> bool {
        !self.pending && !self.has_more_subtags()
    }
}
