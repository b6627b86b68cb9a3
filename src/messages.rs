//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{BufferId, Selection};

/// Find/replace panel messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindMsg {
    /// Replace the search query
    SetQuery(String),
    /// Replace the replacement text
    SetReplacement(String),
    /// Flip the case-sensitive toggle
    ToggleCaseSensitive,
    /// Flip the whole-word toggle
    ToggleWholeWord,
    /// Select the next match after the selection, wrapping at the end
    FindNext,
    /// Select the previous match before the selection, wrapping at the start
    FindPrevious,
    /// Replace the selected match and move to the next one
    ReplaceOne,
    /// Replace every match in the active buffer
    ReplaceAll,
    /// Count matches in the active buffer
    CountMatches,
    /// List matching lines across every open buffer
    SearchAllBuffers,
    /// Highlight matches in the active buffer
    HighlightAll,
    /// Jump to the `index`-th cross-buffer result
    OpenResult(usize),
}

/// Tab lifecycle messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabMsg {
    /// Open an empty "Untitled" buffer
    New,
    /// Rename a buffer
    Rename { id: BufferId, name: String },
    /// Close a buffer
    Close(BufferId),
    /// Switch to a buffer
    Activate(BufferId),
}

/// Editing messages for the active buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMsg {
    /// Set the selection (clamped to the content)
    SetSelection(Selection),
    /// Paste text over the selection, auto-formatting if enabled
    Paste(String),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Find(FindMsg),
    Tab(TabMsg),
    Edit(EditMsg),
}

impl From<FindMsg> for Msg {
    fn from(msg: FindMsg) -> Self {
        Msg::Find(msg)
    }
}

impl From<TabMsg> for Msg {
    fn from(msg: TabMsg) -> Self {
        Msg::Tab(msg)
    }
}

impl From<EditMsg> for Msg {
    fn from(msg: EditMsg) -> Self {
        Msg::Edit(msg)
    }
}
