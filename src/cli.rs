//! Command-line argument parsing
//!
//! Supports:
//! - Opening files as tabs, or restoring the saved session
//! - Case-sensitive / whole-word overrides
//! - One find/count/replace/search/format command per invocation

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::EditorConfig;
use crate::search::MatchOptions;

/// A multi-tab plain-text editor core with cross-buffer find and replace
#[derive(Parser, Debug)]
#[command(name = "tabpad", version, about = "Multi-buffer find and replace")]
pub struct CliArgs {
    #[command(flatten)]
    pub open: OpenArgs,

    /// Start with empty buffers (ignore session restore)
    #[arg(short = 'n', long, global = true)]
    pub new: bool,

    /// Match case exactly
    #[arg(short = 'c', long, global = true)]
    pub case_sensitive: bool,

    /// Only match whole words
    #[arg(short = 'w', long, global = true)]
    pub whole_word: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

// Files to open, accepted both before and after the command name. Each buffer
// command flattens its own copy; `CliArgs::into_config` appends those after the
// ones given before the command.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenArgs {
    /// Files to open as tabs (repeatable)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// What to do with the opened buffers
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Find the next (or previous) match in the first buffer
    Find {
        pattern: String,
        /// Search backward from the offset
        #[arg(short, long)]
        backward: bool,
        /// Character offset to search from
        #[arg(long, value_name = "N")]
        from: Option<usize>,
        #[command(flatten)]
        open: OpenArgs,
    },
    /// Count matches in every buffer
    Count {
        pattern: String,
        #[command(flatten)]
        open: OpenArgs,
    },
    /// Replace every match in every buffer
    Replace {
        pattern: String,
        replacement: String,
        /// Write changed buffers back to their files
        #[arg(long)]
        write: bool,
        #[command(flatten)]
        open: OpenArgs,
    },
    /// List matching lines across all buffers
    Search {
        pattern: String,
        /// Print lines with the match wrapped in <mark>
        #[arg(long)]
        html: bool,
        #[command(flatten)]
        open: OpenArgs,
    },
    /// Pretty-print a JSON, XML or CSS file to stdout
    Format { file: PathBuf },
}

/// Where the initial buffers come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupSource {
    /// Restore the saved session
    Session,
    /// Start with no buffers
    Empty,
    /// Open these files as tabs
    Files(Vec<PathBuf>),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub source: StartupSource,
    /// Forced case-sensitive matching
    pub case_sensitive: bool,
    /// Forced whole-word matching
    pub whole_word: bool,
    pub command: CliCommand,
}

impl CliCommand {
    /// Move out the files given after the command name
    fn take_files(&mut self) -> Vec<PathBuf> {
        match self {
            Self::Find { open, .. }
            | Self::Count { open, .. }
            | Self::Replace { open, .. }
            | Self::Search { open, .. } => std::mem::take(&mut open.files),
            Self::Format { .. } => Vec::new(),
        }
    }
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(mut self) -> StartupConfig {
        let mut files = self.open.files;
        files.extend(self.command.take_files());

        let source = if !files.is_empty() {
            StartupSource::Files(files)
        } else if self.new {
            StartupSource::Empty
        } else {
            StartupSource::Session
        };

        StartupConfig {
            source,
            case_sensitive: self.case_sensitive,
            whole_word: self.whole_word,
            command: self.command,
        }
    }
}

impl StartupConfig {
    /// Apply the command-line overrides on top of configured options
    pub fn match_options(&self, base: MatchOptions) -> MatchOptions {
        MatchOptions::new(
            base.case_sensitive || self.case_sensitive,
            base.whole_word || self.whole_word,
        )
    }

    /// Whether the command changes buffer content
    pub fn mutates(&self) -> bool {
        matches!(self.command, CliCommand::Replace { .. })
    }

    /// Whether `Cmd::SaveSession` should write the session file
    ///
    /// Only a restored session is written back, and only by a command that
    /// changes content. Read-only commands leave the saved tab and query alone.
    pub fn persists_session(&self, config: &EditorConfig) -> bool {
        self.source == StartupSource::Session && config.restore_session && self.mutates()
    }
}
