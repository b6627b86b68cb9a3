//! Text buffer model - the content of one tab and its selection

use ropey::Rope;
use std::ops::Range;
use std::path::PathBuf;

use crate::search::Match;
use crate::util::file_validation::{is_likely_binary, validate_file_for_opening, BufferLoadError};

/// Unique identifier for an open buffer, stable for the buffer's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub u64);

impl std::fmt::Display for BufferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A selection as two character offsets; empty when anchor == head
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// Where the cursor is (moving point)
    pub head: usize,
}

impl Selection {
    /// Create an empty selection (a bare cursor) at an offset
    pub fn cursor(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Selection covering a match, with the cursor at its end
    pub fn from_match(found: Match) -> Self {
        Self::new(found.index, found.end())
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// The smaller offset
    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// The larger offset
    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    fn clamped(self, len: usize) -> Self {
        Self::new(self.anchor.min(len), self.head.min(len))
    }
}

/// One open buffer: identity, display name, text and selection
#[derive(Debug, Clone)]
pub struct TextBuffer {
    pub id: BufferId,
    /// Display label (not necessarily a file name)
    pub name: String,
    /// The text; sole source of truth for searching
    pub content: Rope,
    /// Current selection in character offsets
    pub selection: Selection,
    /// Backing file, if the buffer was loaded from disk
    pub path: Option<PathBuf>,
    /// Whether the buffer has unsaved changes
    pub is_modified: bool,
    /// Incremented on each edit
    pub revision: u64,
}

impl TextBuffer {
    /// Create an empty buffer
    pub fn new(id: BufferId, name: impl Into<String>) -> Self {
        Self::with_text(id, name, "")
    }

    /// Create a buffer with initial text
    pub fn with_text(id: BufferId, name: impl Into<String>, text: &str) -> Self {
        Self {
            id,
            name: name.into(),
            content: Rope::from_str(text),
            selection: Selection::default(),
            path: None,
            is_modified: false,
            revision: 0,
        }
    }

    /// Load a buffer from a file, rejecting directories, huge and binary files
    pub fn from_file(id: BufferId, path: PathBuf) -> Result<Self, BufferLoadError> {
        validate_file_for_opening(&path)?;
        if is_likely_binary(&path) {
            return Err(BufferLoadError::BinaryFile);
        }
        let text = std::fs::read_to_string(&path).map_err(BufferLoadError::from_io)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        let mut buffer = Self::with_text(id, name, &text);
        buffer.path = Some(path);
        Ok(buffer)
    }

    /// Full text as a single string
    pub fn text(&self) -> String {
        self.content.to_string()
    }

    /// Length in characters
    pub fn len_chars(&self) -> usize {
        self.content.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.content.len_chars() == 0
    }

    /// Tab label, with a trailing `*` when modified
    pub fn display_name(&self) -> String {
        if self.is_modified {
            format!("{}*", self.name)
        } else {
            self.name.clone()
        }
    }

    /// The currently selected text (empty for a bare cursor)
    pub fn selected_text(&self) -> String {
        let range = self.selection.clamped(self.len_chars()).range();
        self.content.slice(range).to_string()
    }

    /// Set the selection, clamping both ends to the content length
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamped(self.len_chars());
    }

    /// Select a match (anchor at start, cursor at end)
    pub fn select(&mut self, found: Match) {
        self.set_selection(Selection::from_match(found));
    }

    /// Replace a character range with `text`, returning the inserted length
    ///
    /// The selection collapses to a cursor after the inserted text.
    pub fn replace_range(&mut self, range: Range<usize>, text: &str) -> usize {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);

        self.content.remove(start..end);
        self.content.insert(start, text);
        let inserted = text.chars().count();

        self.selection = Selection::cursor(start + inserted);
        self.mark_modified();
        inserted
    }

    /// Replace the current selection (or insert at the cursor)
    pub fn replace_selection(&mut self, text: &str) -> usize {
        let range = self.selection.range();
        self.replace_range(range, text)
    }

    /// Replace the whole content, keeping the selection within bounds
    pub fn set_text(&mut self, text: &str) {
        self.content = Rope::from_str(text);
        self.selection = self.selection.clamped(self.len_chars());
        self.mark_modified();
    }

    /// Write the content back to the backing file
    pub fn save(&mut self) -> std::io::Result<()> {
        let Some(path) = &self.path else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Buffer has no backing file",
            ));
        };
        std::fs::write(path, self.text())?;
        self.is_modified = false;
        Ok(())
    }

    /// Convert a character offset to a 0-indexed (line, column) pair
    pub fn offset_to_position(&self, offset: usize) -> (usize, usize) {
        let clamped = offset.min(self.len_chars());
        let line = self.content.char_to_line(clamped);
        let line_start = self.content.line_to_char(line);
        (line, clamped - line_start)
    }

    /// Record an edit made directly on `content`, placing the cursor at `cursor`
    pub(crate) fn finish_edit(&mut self, cursor: usize) {
        self.selection = Selection::cursor(cursor.min(self.len_chars()));
        self.mark_modified();
    }

    fn mark_modified(&mut self) {
        self.is_modified = true;
        self.revision = self.revision.wrapping_add(1);
    }
}
