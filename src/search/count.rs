//! Occurrence counting and collection
//!
//! Both use the same non-overlapping, left-to-right scan: after an accepted
//! match the scan resumes at the match end, so `"aa"` occurs twice in
//! `"aaaa"`, not three times. The replace engine relies on this scan too,
//! which keeps counts and replacements in agreement.

use super::matcher::forward_in;
use super::pattern::{haystack, Pattern};
use super::{Match, MatchOptions};

/// Iterator over non-overlapping match start offsets in a prepared haystack
pub(crate) struct Occurrences<'a> {
    hay: &'a [char],
    needle: &'a [char],
    whole_word: bool,
    position: usize,
}

impl<'a> Occurrences<'a> {
    pub(crate) fn new(hay: &'a [char], needle: &'a [char], whole_word: bool) -> Self {
        Self {
            hay,
            needle,
            whole_word,
            position: 0,
        }
    }
}

impl Iterator for Occurrences<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let index = forward_in(self.hay, self.needle, self.position, self.whole_word)?;
        self.position = index + self.needle.len();
        Some(index)
    }
}

/// Count non-overlapping occurrences of `pattern` in `content`
pub fn count_in_buffer(content: &str, pattern: &Pattern, options: MatchOptions) -> usize {
    let hay = haystack(content, options);
    Occurrences::new(&hay, pattern.needle(options), options.whole_word).count()
}

/// Collect up to `limit` non-overlapping matches, e.g. for highlighting
///
/// The limit bounds the work done per call; pass `usize::MAX` for all.
pub fn find_all(
    content: &str,
    pattern: &Pattern,
    options: MatchOptions,
    limit: usize,
) -> Vec<Match> {
    let hay = haystack(content, options);
    Occurrences::new(&hay, pattern.needle(options), options.whole_word)
        .take(limit)
        .map(|index| Match::new(index, pattern.char_len()))
        .collect()
}
