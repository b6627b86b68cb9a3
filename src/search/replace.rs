//! Replacement within the active buffer

use super::count::Occurrences;
use super::matcher::{find_next, SearchHit};
use super::pattern::{haystack, Pattern};
use super::MatchOptions;
use crate::model::TextBuffer;

/// What a replace operation did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaceOutcome {
    /// Number of occurrences replaced
    pub replaced: usize,
    /// Next candidate selected after a replace-one, if any
    pub next: Option<SearchHit>,
}

/// Replace the current selection if it equals `pattern`, then select the next match
///
/// A selection that does not match the pattern (under the case rule) is left
/// alone and the call behaves like "find next" from the cursor. After a
/// replacement the search resumes from the end of the inserted text.
pub fn replace_one(
    buffer: &mut TextBuffer,
    pattern: &Pattern,
    replacement: &str,
    options: MatchOptions,
) -> ReplaceOutcome {
    let selection = buffer.selection;
    let selection_matches =
        !selection.is_empty() && pattern.equals(&buffer.selected_text(), options);

    let (replaced, resume_at) = if selection_matches {
        let inserted = buffer.replace_range(selection.range(), replacement);
        (1, selection.start() + inserted)
    } else {
        (0, selection.end())
    };

    let next = find_next(&buffer.text(), pattern, resume_at, options);
    if let Some(hit) = next {
        buffer.select(hit.found);
    }

    ReplaceOutcome { replaced, next }
}

/// Replace every non-overlapping occurrence of `pattern`
///
/// Uses the same scan as [`count_in_buffer`](super::count_in_buffer), so
/// `replaced` always equals the count taken before the call. With no
/// occurrences the buffer is not touched.
pub fn replace_all(
    buffer: &mut TextBuffer,
    pattern: &Pattern,
    replacement: &str,
    options: MatchOptions,
) -> ReplaceOutcome {
    let hay = haystack(&buffer.text(), options);
    let starts: Vec<usize> =
        Occurrences::new(&hay, pattern.needle(options), options.whole_word).collect();

    if starts.is_empty() {
        return ReplaceOutcome::default();
    }

    let cursor = buffer.selection.head;
    let len = pattern.char_len();
    let inserted = replacement.chars().count();

    // Back to front so earlier offsets stay valid
    for &start in starts.iter().rev() {
        buffer.content.remove(start..start + len);
        buffer.content.insert(start, replacement);
    }

    // Shift the cursor by the size change of every replacement before it. A
    // cursor inside a replaced occurrence lands at the end of its replacement.
    let mut before_cursor = 0;
    let mut anchor = cursor;
    for &start in &starts {
        if start + len <= cursor {
            before_cursor += 1;
        } else {
            if start < cursor {
                anchor = start + inserted;
            }
            break;
        }
    }
    let shifted = (anchor + before_cursor * inserted).saturating_sub(before_cursor * len);
    buffer.finish_edit(shifted);

    ReplaceOutcome {
        replaced: starts.len(),
        next: None,
    }
}
