//! Session persistence
//!
//! Snapshots the open buffers, their selections and the find panel settings
//! to `~/.config/tabpad/session.json` so the next launch can pick up where
//! the last one left off.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::model::{AppModel, FindReplaceState, Selection, Tabs};

/// A single buffer in a saved session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferSnapshot {
    pub name: String,
    pub content: String,
    /// `(anchor, head)` character offsets
    #[serde(default)]
    pub selection: (usize, usize),
    /// Backing file, if the buffer was opened from disk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Find panel settings carried across sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindSettings {
    pub query: String,
    pub replacement: String,
    pub case_sensitive: bool,
    pub whole_word: bool,
}

impl FindSettings {
    fn capture(find: &FindReplaceState) -> Self {
        Self {
            query: find.query.clone(),
            replacement: find.replacement.clone(),
            case_sensitive: find.case_sensitive,
            whole_word: find.whole_word,
        }
    }

    /// Copy the settings into the find panel, dropping stale results
    pub fn apply(&self, find: &mut FindReplaceState) {
        find.query = self.query.clone();
        find.replacement = self.replacement.clone();
        find.case_sensitive = self.case_sensitive;
        find.whole_word = self.whole_word;
        find.clear_results();
    }
}

/// Everything needed to reopen the editor as it was
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    /// Buffers in tab order
    pub buffers: Vec<BufferSnapshot>,
    /// Index of the active buffer in `buffers`
    #[serde(default)]
    pub active: Option<usize>,
    #[serde(default)]
    pub find: FindSettings,
}

impl SessionSnapshot {
    pub const CURRENT_VERSION: u32 = 1;

    /// Snapshot the model's tabs and find settings
    pub fn capture(model: &AppModel) -> Self {
        let buffers = model
            .tabs
            .iter()
            .map(|buffer| BufferSnapshot {
                name: buffer.name.clone(),
                content: buffer.text(),
                selection: (buffer.selection.anchor, buffer.selection.head),
                path: buffer.path.clone(),
            })
            .collect();

        Self {
            version: Self::CURRENT_VERSION,
            buffers,
            active: model
                .tabs
                .active_id()
                .and_then(|id| model.tabs.position(id)),
            find: FindSettings::capture(&model.find),
        }
    }

    /// Rebuild tabs from the snapshot
    ///
    /// Selections are clamped to the restored content; an out-of-range
    /// active index falls back to the last buffer.
    pub fn restore(&self) -> Tabs {
        let mut tabs = Tabs::new();
        let mut ids = Vec::with_capacity(self.buffers.len());

        for snapshot in &self.buffers {
            let id = tabs.open_with_text(snapshot.name.as_str(), &snapshot.content);
            if let Some(buffer) = tabs.get_mut(id) {
                let (anchor, head) = snapshot.selection;
                buffer.set_selection(Selection::new(anchor, head));
                buffer.path = snapshot.path.clone();
            }
            ids.push(id);
        }

        let active = self
            .active
            .and_then(|index| ids.get(index))
            .or(ids.last())
            .copied();
        if let Some(id) = active {
            tabs.activate(id);
        }
        tabs
    }

    /// Replace the model's tabs and find settings with this session
    pub fn apply(&self, model: &mut AppModel) {
        model.tabs = self.restore();
        self.find.apply(&mut model.find);
    }

    /// Load a session from the default location
    pub fn load() -> Option<Self> {
        let path = crate::config_paths::session_file()?;
        Self::load_from(&path)
    }

    /// Load a session file; missing or unreadable files yield `None`
    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            tracing::debug!("No session file at {}", path.display());
            return None;
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!("Failed to read session at {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<Self>(&contents) {
            Ok(session) if session.version > Self::CURRENT_VERSION => {
                tracing::warn!(
                    "Ignoring session at {} with newer version {}",
                    path.display(),
                    session.version
                );
                None
            }
            Ok(session) => {
                tracing::info!(
                    "Loaded session with {} buffers from {}",
                    session.buffers.len(),
                    path.display()
                );
                Some(session)
            }
            Err(e) => {
                tracing::warn!("Failed to parse session at {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Save the session to the default location
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = crate::config_paths::session_file() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config directory available",
            ));
        };
        self.save_to(&path)
    }

    /// Save the session to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        tracing::debug!(
            "Saved session with {} buffers to {}",
            self.buffers.len(),
            path.display()
        );
        Ok(())
    }
}
