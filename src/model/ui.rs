//! UI state - find/replace panel, status text and transient toasts

use std::time::{Duration, Instant};

use crate::search::{CrossBufferResult, Match, MatchOptions, SearchHit};

/// How long a transient toast stays visible
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// State for the find/replace panel
#[derive(Debug, Clone, Default)]
pub struct FindReplaceState {
    /// Search query
    pub query: String,
    /// Replacement text
    pub replacement: String,
    /// Case-sensitive search
    pub case_sensitive: bool,
    /// Whole-word search
    pub whole_word: bool,
    /// Highlighted occurrences in the active buffer (capped)
    pub highlights: Vec<Match>,
    /// Most recent navigation result
    pub last_hit: Option<SearchHit>,
    /// Results of the last search across all buffers
    pub results: Option<CrossBufferResult>,
    /// Selected entry in `results`, for keyboard navigation
    pub selected_result: usize,
}

impl FindReplaceState {
    /// Start from the configured defaults
    pub fn with_options(options: MatchOptions) -> Self {
        Self {
            case_sensitive: options.case_sensitive,
            whole_word: options.whole_word,
            ..Self::default()
        }
    }

    pub fn options(&self) -> MatchOptions {
        MatchOptions::new(self.case_sensitive, self.whole_word)
    }

    /// Drop results that no longer reflect the query or the buffers
    pub fn clear_results(&mut self) {
        self.highlights.clear();
        self.last_hit = None;
        self.results = None;
        self.selected_result = 0;
    }
}

/// A toast message with auto-expiry
#[derive(Debug, Clone)]
pub struct TransientMessage {
    pub text: String,
    pub expires_at: Instant,
}

impl TransientMessage {
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI state - status line and toasts
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Informational status text (e.g. "Found 'x' (wrapped)")
    pub status_message: String,
    /// Toast shown on top of the status line
    pub transient_message: Option<TransientMessage>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Show a toast for [`TOAST_DURATION`]
    pub fn toast(&mut self, message: impl Into<String>) {
        self.transient_message = Some(TransientMessage::new(message, TOAST_DURATION));
    }

    /// Drop an expired toast; returns true if one was removed
    pub fn expire_toast(&mut self) -> bool {
        if self
            .transient_message
            .as_ref()
            .is_some_and(TransientMessage::is_expired)
        {
            self.transient_message = None;
            true
        } else {
            false
        }
    }

    /// Text to display: an active toast wins over the status message
    pub fn visible_text(&self) -> &str {
        match &self.transient_message {
            Some(toast) if !toast.is_expired() => &toast.text,
            _ => &self.status_message,
        }
    }
}
