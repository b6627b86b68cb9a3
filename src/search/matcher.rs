//! Single-buffer search: forward, backward and wrap-around
//!
//! Scanning is a plain literal comparison over case-folded characters.
//! Whole-word candidates that touch a word character are rejected and the
//! scan continues one character past the rejected start, so every retry
//! makes progress and the loop is bounded by the content length.

use super::pattern::{haystack, Pattern};
use super::{is_word_char, Match, MatchOptions};

/// A match located by a navigating search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub found: Match,
    /// True when the match was only found after wrapping past the buffer edge
    pub wrapped: bool,
}

/// Find the first match starting at or after `start_offset`
///
/// Offsets past the end of `content` are clamped and yield `None`.
pub fn find_forward(
    content: &str,
    pattern: &Pattern,
    start_offset: usize,
    options: MatchOptions,
) -> Option<Match> {
    let hay = haystack(content, options);
    let needle = pattern.needle(options);
    forward_in(&hay, needle, start_offset, options.whole_word)
        .map(|index| Match::new(index, pattern.char_len()))
}

/// Find the last match lying entirely before `before_offset`
///
/// Word boundaries are checked against the full content, so a match ending
/// exactly at `before_offset` still sees its real right-hand neighbour.
pub fn find_backward(
    content: &str,
    pattern: &Pattern,
    before_offset: usize,
    options: MatchOptions,
) -> Option<Match> {
    let hay = haystack(content, options);
    let needle = pattern.needle(options);
    backward_in(&hay, needle, before_offset, options.whole_word)
        .map(|index| Match::new(index, pattern.char_len()))
}

/// Forward search from `from`, retried once from the start of the buffer
pub fn find_next(
    content: &str,
    pattern: &Pattern,
    from: usize,
    options: MatchOptions,
) -> Option<SearchHit> {
    let hay = haystack(content, options);
    let needle = pattern.needle(options);
    let hit = |index, wrapped| SearchHit {
        found: Match::new(index, pattern.char_len()),
        wrapped,
    };

    if let Some(index) = forward_in(&hay, needle, from, options.whole_word) {
        return Some(hit(index, false));
    }
    if from == 0 {
        return None;
    }
    forward_in(&hay, needle, 0, options.whole_word).map(|index| hit(index, true))
}

/// Backward search before `before`, retried once from the end of the buffer
pub fn find_previous(
    content: &str,
    pattern: &Pattern,
    before: usize,
    options: MatchOptions,
) -> Option<SearchHit> {
    let hay = haystack(content, options);
    let needle = pattern.needle(options);
    let hit = |index, wrapped| SearchHit {
        found: Match::new(index, pattern.char_len()),
        wrapped,
    };

    if let Some(index) = backward_in(&hay, needle, before, options.whole_word) {
        return Some(hit(index, false));
    }
    if before >= hay.len() {
        return None;
    }
    backward_in(&hay, needle, hay.len(), options.whole_word).map(|index| hit(index, true))
}

#[inline]
fn matches_at(hay: &[char], needle: &[char], index: usize) -> bool {
    hay[index..].starts_with(needle)
}

/// Whether the span `[start, start + len)` is bounded by non-word characters
///
/// Out-of-range neighbours count as boundaries.
pub(crate) fn is_whole_word(hay: &[char], start: usize, len: usize) -> bool {
    let before = start.checked_sub(1).and_then(|i| hay.get(i));
    let after = hay.get(start + len);
    !before.is_some_and(|&ch| is_word_char(ch)) && !after.is_some_and(|&ch| is_word_char(ch))
}

/// First accepted match index at or after `from`
pub(crate) fn forward_in(
    hay: &[char],
    needle: &[char],
    from: usize,
    whole_word: bool,
) -> Option<usize> {
    if needle.is_empty() || needle.len() > hay.len() {
        return None;
    }
    let last_start = hay.len() - needle.len();
    let mut index = from;
    while index <= last_start {
        if matches_at(hay, needle, index) {
            if !whole_word || is_whole_word(hay, index, needle.len()) {
                return Some(index);
            }
        }
        index += 1;
    }
    None
}

/// Last accepted match index whose end is at or before `before`
pub(crate) fn backward_in(
    hay: &[char],
    needle: &[char],
    before: usize,
    whole_word: bool,
) -> Option<usize> {
    let window_end = before.min(hay.len());
    if needle.is_empty() || needle.len() > window_end {
        return None;
    }
    let mut index = window_end - needle.len() + 1;
    while index > 0 {
        index -= 1;
        if matches_at(hay, needle, index) {
            if !whole_word || is_whole_word(hay, index, needle.len()) {
                return Some(index);
            }
        }
    }
    None
}
