//! Tabs - the ordered set of open buffers and which one is active

use std::borrow::Cow;
use std::path::PathBuf;

use super::buffer::{BufferId, TextBuffer};
use crate::search::{BufferRecord, BufferSource};
use crate::util::file_validation::BufferLoadError;

/// Base name for buffers that have never been named
const UNTITLED: &str = "Untitled";

/// Open buffers in tab (insertion) order
#[derive(Debug, Clone, Default)]
pub struct Tabs {
    buffers: Vec<TextBuffer>,
    active: Option<BufferId>,
    next_id: u64,
}

impl Tabs {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> BufferId {
        self.next_id += 1;
        BufferId(self.next_id)
    }

    /// Add a buffer built by `make` with a fresh id and make it active
    fn push(&mut self, make: impl FnOnce(BufferId) -> TextBuffer) -> BufferId {
        let id = self.allocate_id();
        self.buffers.push(make(id));
        self.active = Some(id);
        id
    }

    /// Open an empty buffer named "Untitled", "Untitled-2", ...
    pub fn open_untitled(&mut self) -> BufferId {
        let name = self.next_untitled_name();
        self.push(|id| TextBuffer::new(id, name))
    }

    /// Open a buffer with the given name and text
    pub fn open_with_text(&mut self, name: impl Into<String>, text: &str) -> BufferId {
        let name = name.into();
        self.push(|id| TextBuffer::with_text(id, name, text))
    }

    /// Load a file into a new tab
    pub fn open_file(&mut self, path: PathBuf) -> Result<BufferId, BufferLoadError> {
        let id = BufferId(self.next_id + 1);
        let buffer = TextBuffer::from_file(id, path)?;
        self.next_id = id.0;
        self.buffers.push(buffer);
        self.active = Some(id);
        tracing::debug!("Opened buffer {} from file", id);
        Ok(id)
    }

    fn next_untitled_name(&self) -> String {
        let taken = |name: &str| self.buffers.iter().any(|b| b.name == name);
        if !taken(UNTITLED) {
            return UNTITLED.to_string();
        }
        (2..)
            .map(|n| format!("{}-{}", UNTITLED, n))
            .find(|name| !taken(name.as_str()))
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    /// Rename a buffer; empty names are rejected
    pub fn rename(&mut self, id: BufferId, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        match self.get_mut(id) {
            Some(buffer) => {
                buffer.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Close a buffer, activating its left neighbour (or the new first tab)
    pub fn close(&mut self, id: BufferId) -> Option<TextBuffer> {
        let index = self.position(id)?;
        let closed = self.buffers.remove(index);

        if self.active == Some(id) {
            self.active = if self.buffers.is_empty() {
                None
            } else {
                let neighbour = index.saturating_sub(1).min(self.buffers.len() - 1);
                Some(self.buffers[neighbour].id)
            };
        }
        Some(closed)
    }

    /// Make `id` the active buffer
    pub fn activate(&mut self, id: BufferId) -> bool {
        if self.position(id).is_some() {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    pub fn active_id(&self) -> Option<BufferId> {
        self.active
    }

    pub fn active(&self) -> Option<&TextBuffer> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn active_mut(&mut self) -> Option<&mut TextBuffer> {
        let id = self.active?;
        self.get_mut(id)
    }

    pub fn get(&self, id: BufferId) -> Option<&TextBuffer> {
        self.buffers.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BufferId) -> Option<&mut TextBuffer> {
        self.buffers.iter_mut().find(|b| b.id == id)
    }

    /// Index of a buffer in tab order
    pub fn position(&self, id: BufferId) -> Option<usize> {
        self.buffers.iter().position(|b| b.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextBuffer> {
        self.buffers.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TextBuffer> {
        self.buffers.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}

fn record(buffer: &TextBuffer) -> BufferRecord<'_> {
    // Contiguous ropes borrow; chunked ones are joined once per search
    let content = match buffer.content.slice(..).as_str() {
        Some(text) => Cow::Borrowed(text),
        None => Cow::Owned(buffer.text()),
    };
    BufferRecord::new(buffer.id, &buffer.name, content)
}

impl BufferSource for Tabs {
    fn records(&self) -> impl Iterator<Item = BufferRecord<'_>> {
        self.buffers.iter().map(record)
    }
}

impl BufferSource for [TextBuffer] {
    fn records(&self) -> impl Iterator<Item = BufferRecord<'_>> {
        self.iter().map(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untitled_names_fill_gaps() {
        let mut tabs = Tabs::new();
        let first = tabs.open_untitled();
        let second = tabs.open_untitled();
        tabs.open_untitled();

        assert_eq!(tabs.get(first).unwrap().name, "Untitled");
        assert_eq!(tabs.get(second).unwrap().name, "Untitled-2");

        tabs.close(second);
        let reopened = tabs.open_untitled();
        assert_eq!(tabs.get(reopened).unwrap().name, "Untitled-2");
    }

    #[test]
    fn test_ids_are_unique_and_stable() {
        let mut tabs = Tabs::new();
        let a = tabs.open_with_text("a", "");
        let b = tabs.open_with_text("b", "");
        tabs.close(a);
        let c = tabs.open_with_text("c", "");
        assert_ne!(a, c);
        assert_ne!(b, c);
        assert_eq!(tabs.get(b).unwrap().name, "b");
    }

    #[test]
    fn test_new_tab_becomes_active() {
        let mut tabs = Tabs::new();
        tabs.open_with_text("a", "");
        let b = tabs.open_with_text("b", "");
        assert_eq!(tabs.active_id(), Some(b));
    }

    #[test]
    fn test_close_active_activates_left_neighbour() {
        let mut tabs = Tabs::new();
        let a = tabs.open_with_text("a", "");
        let b = tabs.open_with_text("b", "");
        let c = tabs.open_with_text("c", "");

        tabs.activate(b);
        tabs.close(b);
        assert_eq!(tabs.active_id(), Some(a));

        tabs.activate(a);
        tabs.close(a);
        assert_eq!(tabs.active_id(), Some(c));

        tabs.close(c);
        assert_eq!(tabs.active_id(), None);
        assert!(tabs.is_empty());
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let mut tabs = Tabs::new();
        let a = tabs.open_with_text("a", "");
        let b = tabs.open_with_text("b", "");
        tabs.close(a);
        assert_eq!(tabs.active_id(), Some(b));
    }

    #[test]
    fn test_rename() {
        let mut tabs = Tabs::new();
        let id = tabs.open_untitled();
        assert!(tabs.rename(id, "  notes.txt "));
        assert_eq!(tabs.get(id).unwrap().name, "notes.txt");
        assert!(!tabs.rename(id, "   "));
        assert!(!tabs.rename(BufferId(999), "x"));
    }

    #[test]
    fn test_activate_unknown_id() {
        let mut tabs = Tabs::new();
        let a = tabs.open_untitled();
        assert!(!tabs.activate(BufferId(42)));
        assert_eq!(tabs.active_id(), Some(a));
    }

    #[test]
    fn test_records_follow_tab_order() {
        let mut tabs = Tabs::new();
        tabs.open_with_text("first", "1");
        tabs.open_with_text("second", "2");
        let names: Vec<&str> = tabs.records().map(|r| r.name).collect();
        assert_eq!(names, vec!["first", "second"]);
        let contents: Vec<String> = tabs.records().map(|r| r.content.into_owned()).collect();
        assert_eq!(contents, vec!["1", "2"]);
    }

    #[test]
    fn test_open_missing_file_does_not_consume_id() {
        let mut tabs = Tabs::new();
        let result = tabs.open_file(PathBuf::from("/nonexistent/file.txt"));
        assert_eq!(result, Err(BufferLoadError::NotFound));
        assert!(tabs.is_empty());
        assert_eq!(tabs.open_untitled(), BufferId(1));
    }
}
