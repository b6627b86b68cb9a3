//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod buffer;
pub mod tabs;
pub mod ui;

pub use buffer::{BufferId, Selection, TextBuffer};
pub use tabs::Tabs;
pub use ui::{FindReplaceState, TransientMessage, UiState};

use crate::config::EditorConfig;
use crate::search::{Pattern, SearchError};

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Open buffers and the active tab
    pub tabs: Tabs,
    /// Find/replace panel state
    pub find: FindReplaceState,
    /// Status line and toasts
    pub ui: UiState,
    /// Persisted editor configuration
    pub config: EditorConfig,
}

impl AppModel {
    /// Create a model with no open buffers
    pub fn new(config: EditorConfig) -> Self {
        Self {
            tabs: Tabs::new(),
            find: FindReplaceState::with_options(config.default_match_options()),
            ui: UiState::new(),
            config,
        }
    }

    /// The current query as a validated pattern
    pub fn pattern(&self) -> Result<Pattern, SearchError> {
        Pattern::new(self.find.query.as_str())
    }

    /// Make sure there is a buffer to work in, opening "Untitled" if needed
    pub fn ensure_buffer(&mut self) -> BufferId {
        match self.tabs.active_id() {
            Some(id) => id,
            None => self.tabs.open_untitled(),
        }
    }

    pub fn active_buffer(&self) -> Option<&TextBuffer> {
        self.tabs.active()
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
