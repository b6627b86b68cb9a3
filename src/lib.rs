//! tabpad - multi-tab plain-text editor core
//!
//! This crate provides the buffer model, the multi-buffer search engine and
//! the Elm-style update loop that drives them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod format;
pub mod messages;
pub mod model;
pub mod search;
pub mod session;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
