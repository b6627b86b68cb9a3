//! Cross-buffer search
//!
//! Runs the single-buffer matcher over every line of every open buffer and
//! groups matching lines by buffer. Reporting is per line: a line with
//! several occurrences is listed, and counted, once.

use std::borrow::Cow;

use super::matcher::forward_in;
use super::pattern::{haystack, Pattern};
use super::MatchOptions;
use crate::model::BufferId;
use crate::util::text::{escape_markup, pluralize};

/// Read-only view of one buffer as seen by the cross-buffer search
#[derive(Debug, Clone)]
pub struct BufferRecord<'a> {
    pub id: BufferId,
    pub name: &'a str,
    pub content: Cow<'a, str>,
}

impl<'a> BufferRecord<'a> {
    pub fn new(id: BufferId, name: &'a str, content: impl Into<Cow<'a, str>>) -> Self {
        Self {
            id,
            name,
            content: content.into(),
        }
    }
}

/// An ordered collection of buffers that can be searched together
///
/// Records are yielded in tab order; the search does not care how the
/// buffers are stored.
pub trait BufferSource {
    fn records(&self) -> impl Iterator<Item = BufferRecord<'_>>;
}

impl BufferSource for [BufferRecord<'_>] {
    fn records(&self) -> impl Iterator<Item = BufferRecord<'_>> {
        self.iter().map(|record| BufferRecord {
            id: record.id,
            name: record.name,
            content: Cow::Borrowed(record.content.as_ref()),
        })
    }
}

impl BufferSource for Vec<BufferRecord<'_>> {
    fn records(&self) -> impl Iterator<Item = BufferRecord<'_>> {
        self.as_slice().records()
    }
}

/// Span of the first match on a line, in characters from the line start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub length: usize,
}

/// One matching line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// 1-based line number
    pub line_number: usize,
    pub line_text: String,
    /// Character offset of the line start within the buffer
    pub line_start: usize,
    pub highlight: HighlightSpan,
    /// Markup-escaped line text with the first match wrapped in `<mark>`
    pub rendered: String,
}

impl LineMatch {
    /// Buffer offset of the highlighted match, for navigation
    pub fn match_offset(&self) -> usize {
        self.line_start + self.highlight.start
    }
}

/// All matching lines of one buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferMatches {
    pub buffer_id: BufferId,
    pub buffer_name: String,
    pub lines: Vec<LineMatch>,
}

/// Result of a search across all open buffers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossBufferResult {
    /// Number of matching lines across all buffers
    pub total_matches: usize,
    /// Buffers with at least one matching line, in source order
    pub buffers: Vec<BufferMatches>,
}

impl CrossBufferResult {
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    /// Find the entry for a buffer
    pub fn for_buffer(&self, id: BufferId) -> Option<&BufferMatches> {
        self.buffers.iter().find(|b| b.buffer_id == id)
    }

    /// Flattened `(buffer, line)` entries in display order
    pub fn entries(&self) -> impl Iterator<Item = (BufferId, &LineMatch)> {
        self.buffers
            .iter()
            .flat_map(|b| b.lines.iter().map(move |line| (b.buffer_id, line)))
    }

    /// The `index`-th entry in display order
    pub fn entry(&self, index: usize) -> Option<(BufferId, &LineMatch)> {
        self.entries().nth(index)
    }

    /// Status-bar summary, e.g. "3 matching lines in 2 buffers"
    pub fn summary(&self) -> String {
        format!(
            "{} in {}",
            pluralize(self.total_matches, "matching line"),
            pluralize(self.buffers.len(), "buffer")
        )
    }
}

/// Search every buffer of `source`, line by line
pub fn search_all<S>(source: &S, pattern: &Pattern, options: MatchOptions) -> CrossBufferResult
where
    S: BufferSource + ?Sized,
{
    let needle = pattern.needle(options);
    let mut result = CrossBufferResult::default();

    for record in source.records() {
        let mut lines = Vec::new();
        let mut line_start = 0;

        for (line_idx, raw_line) in record.content.split('\n').enumerate() {
            let line_len = raw_line.chars().count();
            let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
            let hay = haystack(line, options);

            if let Some(start) = forward_in(&hay, needle, 0, options.whole_word) {
                let highlight = HighlightSpan {
                    start,
                    length: pattern.char_len(),
                };
                lines.push(LineMatch {
                    line_number: line_idx + 1,
                    rendered: render_line(line, highlight),
                    line_text: line.to_string(),
                    line_start,
                    highlight,
                });
            }

            line_start += line_len + 1;
        }

        if !lines.is_empty() {
            result.total_matches += lines.len();
            result.buffers.push(BufferMatches {
                buffer_id: record.id,
                buffer_name: record.name.to_string(),
                lines,
            });
        }
    }

    result
}

/// Escape `line` for markup and wrap the highlighted span in `<mark>`
fn render_line(line: &str, span: HighlightSpan) -> String {
    let mut chars = line.chars();
    let before: String = chars.by_ref().take(span.start).collect();
    let matched: String = chars.by_ref().take(span.length).collect();
    let after: String = chars.collect();

    format!(
        "{}<mark>{}</mark>{}",
        escape_markup(&before),
        escape_markup(&matched),
        escape_markup(&after)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pat(text: &str) -> Pattern {
        Pattern::new(text).unwrap()
    }

    fn records<'a>(items: &[(u64, &'a str, &'a str)]) -> Vec<BufferRecord<'a>> {
        items
            .iter()
            .map(|&(id, name, content)| BufferRecord::new(BufferId(id), name, content))
            .collect()
    }

    #[test]
    fn test_aggregates_lines_and_omits_empty_buffers() {
        let source = records(&[(1, "one", "foo\nbar foo"), (2, "two", "baz")]);
        let result = search_all(&source, &pat("foo"), MatchOptions::default());

        assert_eq!(result.total_matches, 2);
        assert_eq!(result.buffers.len(), 1);
        let entry = &result.buffers[0];
        assert_eq!(entry.buffer_id, BufferId(1));
        assert_eq!(entry.buffer_name, "one");
        let numbers: Vec<usize> = entry.lines.iter().map(|l| l.line_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert!(result.for_buffer(BufferId(2)).is_none());
    }

    #[test]
    fn test_line_counted_once_for_multiple_occurrences() {
        let source = records(&[(1, "a", "foo foo foo\nfoo")]);
        let result = search_all(&source, &pat("foo"), MatchOptions::default());
        assert_eq!(result.total_matches, 2);
        assert_eq!(result.buffers[0].lines[0].highlight.start, 0);
    }

    #[test]
    fn test_buffer_order_follows_source() {
        let source = records(&[(3, "c", "x"), (1, "a", "x"), (2, "b", "x")]);
        let result = search_all(&source, &pat("x"), MatchOptions::default());
        let ids: Vec<BufferId> = result.buffers.iter().map(|b| b.buffer_id).collect();
        assert_eq!(ids, vec![BufferId(3), BufferId(1), BufferId(2)]);
    }

    #[test]
    fn test_whole_word_per_line() {
        let source = records(&[(1, "a", "catalog\nthe cat sat\nconcat")]);
        let options = MatchOptions::default().with_whole_word(true);
        let result = search_all(&source, &pat("cat"), options);
        assert_eq!(result.total_matches, 1);
        let line = &result.buffers[0].lines[0];
        assert_eq!(line.line_number, 2);
        assert_eq!(line.highlight, HighlightSpan { start: 4, length: 3 });
    }

    #[test]
    fn test_case_rules_per_line() {
        let source = records(&[(1, "a", "Foo\nfoo\nFOO")]);
        let insensitive = search_all(&source, &pat("foo"), MatchOptions::default());
        assert_eq!(insensitive.total_matches, 3);
        let sensitive = search_all(&source, &pat("foo"), MatchOptions::exact());
        assert_eq!(sensitive.total_matches, 1);
        assert_eq!(sensitive.buffers[0].lines[0].line_number, 2);
    }

    #[test]
    fn test_rendered_line_is_escaped() {
        let source = records(&[(1, "a", "<b>if a && b</b>")]);
        let result = search_all(&source, &pat("&&"), MatchOptions::default());
        let line = &result.buffers[0].lines[0];
        assert_eq!(line.line_text, "<b>if a && b</b>");
        assert_eq!(
            line.rendered,
            "&lt;b&gt;if a <mark>&amp;&amp;</mark> b&lt;/b&gt;"
        );
    }

    #[test]
    fn test_match_offset_points_into_buffer() {
        let content = "first\nsecond match\nthird";
        let source = records(&[(1, "a", content)]);
        let result = search_all(&source, &pat("match"), MatchOptions::default());
        let (id, line) = result.entry(0).unwrap();
        assert_eq!(id, BufferId(1));
        assert_eq!(line.match_offset(), 13);
        let tail: String = content.chars().skip(13).take(5).collect();
        assert_eq!(tail, "match");
    }

    #[test]
    fn test_crlf_lines_are_trimmed() {
        let source = records(&[(1, "a", "one\r\ntwo\r\n")]);
        let result = search_all(&source, &pat("two"), MatchOptions::default());
        assert_eq!(result.buffers[0].lines[0].line_text, "two");
        assert_eq!(result.buffers[0].lines[0].line_number, 2);
    }

    #[test]
    fn test_no_matches_gives_empty_result() {
        let source = records(&[(1, "a", "abc"), (2, "b", "")]);
        let result = search_all(&source, &pat("zzz"), MatchOptions::default());
        assert!(result.is_empty());
        assert!(result.buffers.is_empty());
        assert_eq!(result.summary(), "0 matching lines in 0 buffers");
    }

    #[test]
    fn test_summary_pluralization() {
        let source = records(&[(1, "a", "x")]);
        let result = search_all(&source, &pat("x"), MatchOptions::default());
        assert_eq!(result.summary(), "1 matching line in 1 buffer");
    }
}
