//! Multi-buffer search engine
//!
//! Literal (non-regex) matching over plain text buffers:
//! - [`matcher`] - forward/backward search with wrap-around
//! - [`count`] - non-overlapping occurrence counting and collection
//! - [`replace`] - replace-one (selection guarded) and replace-all
//! - [`cross`] - line-oriented search across every open buffer
//!
//! All offsets are character offsets, not byte offsets.

pub mod count;
pub mod cross;
pub mod matcher;
pub mod pattern;
pub mod replace;

pub use count::{count_in_buffer, find_all};
pub use cross::{
    search_all, BufferMatches, BufferRecord, BufferSource, CrossBufferResult, HighlightSpan,
    LineMatch,
};
pub use matcher::{find_backward, find_forward, find_next, find_previous, SearchHit};
pub use pattern::{Pattern, SearchError};
pub use replace::{replace_all, replace_one, ReplaceOutcome};

/// Matching rules shared by every search, count and replace operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// When false, pattern and text are lower-cased before comparison
    pub case_sensitive: bool,
    /// Only accept matches not surrounded by word characters
    pub whole_word: bool,
}

impl MatchOptions {
    pub fn new(case_sensitive: bool, whole_word: bool) -> Self {
        Self {
            case_sensitive,
            whole_word,
        }
    }

    /// Case-sensitive, substring matching
    pub fn exact() -> Self {
        Self::new(true, false)
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_whole_word(mut self, whole_word: bool) -> Self {
        self.whole_word = whole_word;
        self
    }
}

/// A located occurrence: start offset and length, both in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    pub index: usize,
    pub length: usize,
}

impl Match {
    pub fn new(index: usize, length: usize) -> Self {
        Self { index, length }
    }

    /// Offset one past the last matched character
    pub fn end(&self) -> usize {
        self.index + self.length
    }
}

/// Word characters for whole-word matching: alphanumeric or underscore (`\w`)
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
