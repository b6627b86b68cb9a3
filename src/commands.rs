//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::model::BufferId;
use crate::search::CrossBufferResult;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the UI
    Redraw,
    /// Persist the session (buffer content or tabs changed)
    SaveSession,
    /// Scroll a match into view
    Reveal {
        buffer: BufferId,
        index: usize,
        length: usize,
    },
    /// Show the cross-buffer results list
    ShowResults(CrossBufferResult),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::SaveSession => false,
            Cmd::Reveal { .. } => true,
            Cmd::ShowResults(_) => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Check if this command asks for the session to be saved
    pub fn saves_session(&self) -> bool {
        match self {
            Cmd::SaveSession => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.saves_session()),
            _ => false,
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}
