//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod edit;
mod find;
mod tabs;

use tracing::{debug, span, Level};

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

pub use edit::update_edit;
pub use find::update_find;
pub use tabs::update_tabs;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    let result = match msg {
        Msg::Find(m) => update_find(model, m),
        Msg::Tab(m) => update_tabs(model, m),
        Msg::Edit(m) => update_edit(model, m),
    };

    model.ui.expire_toast();
    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Find::FindNext`
/// - `Tab::Close(#3)`
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Find(m) => format!("Find::{:?}", m),
        Msg::Tab(m) => format!("Tab::{:?}", m),
        Msg::Edit(m) => match m {
            // Pasted text can be large
            crate::messages::EditMsg::Paste(text) => {
                format!("Edit::Paste({} chars)", text.chars().count())
            }
            other => format!("Edit::{:?}", other),
        },
    }
}

/// Redraw and persist the session after a content or tab change
fn changed() -> Option<Cmd> {
    Some(Cmd::batch(vec![Cmd::Redraw, Cmd::SaveSession]))
}
