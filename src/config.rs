//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/tabpad/config.yaml`

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::search::MatchOptions;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Initial state of the case-sensitive toggle
    pub case_sensitive: bool,
    /// Initial state of the whole-word toggle
    pub whole_word: bool,
    /// Upper bound on highlighted occurrences per search
    pub max_highlights: usize,
    /// Pretty-print pasted JSON/XML/CSS
    pub format_on_paste: bool,
    /// Indent width used by the paste formatters
    pub indent_width: usize,
    /// Reopen the previous session's buffers on startup
    pub restore_session: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            whole_word: false,
            max_highlights: 1000,
            format_on_paste: true,
            indent_width: 2,
            restore_session: true,
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Match options the find panel starts with
    pub fn default_match_options(&self) -> MatchOptions {
        MatchOptions::new(self.case_sensitive, self.whole_word)
    }
}
