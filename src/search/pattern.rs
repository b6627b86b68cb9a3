//! Validated search patterns and case folding

use super::MatchOptions;

/// Errors raised before any scan takes place
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The search text is empty
    EmptyPattern,
}

impl SearchError {
    /// Status-bar text for this error
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyPattern => "Enter search text",
        }
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPattern => write!(f, "search pattern is empty"),
        }
    }
}

impl std::error::Error for SearchError {}

/// A non-empty literal search pattern
///
/// Every search entry point takes a `&Pattern`, so an empty pattern is
/// rejected once at construction instead of inside each scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    text: String,
    chars: Vec<char>,
    folded: Vec<char>,
}

impl Pattern {
    pub fn new(text: impl Into<String>) -> Result<Self, SearchError> {
        let text = text.into();
        if text.is_empty() {
            return Err(SearchError::EmptyPattern);
        }
        let chars: Vec<char> = text.chars().collect();
        let folded = chars.iter().copied().map(fold_char).collect();
        Ok(Self {
            text,
            chars,
            folded,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Pattern length in characters
    pub fn char_len(&self) -> usize {
        self.chars.len()
    }

    /// The needle to scan for under the given case rule
    pub(crate) fn needle(&self, options: MatchOptions) -> &[char] {
        if options.case_sensitive {
            &self.chars
        } else {
            &self.folded
        }
    }

    /// Whether `text` equals this pattern under the case rule of `options`
    pub fn equals(&self, text: &str, options: MatchOptions) -> bool {
        let needle = self.needle(options);
        let mut chars = text.chars();
        for &expected in needle {
            match chars.next() {
                Some(ch) if fold(ch, options) == expected => {}
                _ => return false,
            }
        }
        chars.next().is_none()
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Lower-case a single character, keeping one output char per input char
///
/// Multi-char lowercase expansions (e.g. `İ`) keep only their first char so
/// offsets in the folded text line up with the original.
#[inline]
pub(crate) fn fold_char(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

#[inline]
pub(crate) fn fold(ch: char, options: MatchOptions) -> char {
    if options.case_sensitive {
        ch
    } else {
        fold_char(ch)
    }
}

/// Characters of `text` prepared for comparison under `options`
pub(crate) fn haystack(text: &str, options: MatchOptions) -> Vec<char> {
    text.chars().map(|ch| fold(ch, options)).collect()
}
