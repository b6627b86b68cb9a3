//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use tabpad::config::EditorConfig;
use tabpad::messages::{EditMsg, FindMsg, Msg};
use tabpad::model::{AppModel, BufferId, Selection};
use tabpad::update::update;
use tabpad::Cmd;

/// Create a test model with one buffer holding `text` and the cursor at `cursor`
pub fn test_model(text: &str, cursor: usize) -> AppModel {
    let mut model = AppModel::new(EditorConfig::default());
    let id = model.tabs.open_with_text("test.txt", text);
    model
        .tabs
        .get_mut(id)
        .expect("buffer just opened")
        .set_selection(Selection::cursor(cursor));
    model
}

/// Create a test model with one buffer per `(name, text)` pair; the first is active
pub fn model_with_buffers(buffers: &[(&str, &str)]) -> AppModel {
    let mut model = AppModel::new(EditorConfig::default());
    let ids: Vec<BufferId> = buffers
        .iter()
        .map(|(name, text)| model.tabs.open_with_text(*name, text))
        .collect();
    if let Some(first) = ids.first() {
        model.tabs.activate(*first);
    }
    model
}

/// Dispatch a sequence of messages, returning the last command
pub fn run(model: &mut AppModel, msgs: impl IntoIterator<Item = Msg>) -> Option<Cmd> {
    let mut last = None;
    for msg in msgs {
        last = update(model, msg);
    }
    last
}

/// Set the query and dispatch one find message
pub fn find(model: &mut AppModel, query: &str, msg: FindMsg) -> Option<Cmd> {
    let set_query = Msg::Find(FindMsg::SetQuery(query.to_string()));
    run(model, [set_query, Msg::Find(msg)])
}

/// Put the selection of the active buffer at `anchor..head`
pub fn select(model: &mut AppModel, anchor: usize, head: usize) {
    update(
        model,
        Msg::Edit(EditMsg::SetSelection(Selection::new(anchor, head))),
    );
}

/// Text of the active buffer
pub fn active_text(model: &AppModel) -> String {
    model.active_buffer().map(|b| b.text()).unwrap_or_default()
}

/// Selection of the active buffer as `(anchor, head)`
pub fn active_selection(model: &AppModel) -> (usize, usize) {
    model
        .active_buffer()
        .map(|b| (b.selection.anchor, b.selection.head))
        .unwrap_or_default()
}
