//! Search across every open buffer

mod common;

use std::borrow::Cow;

use common::{find, model_with_buffers, run};
use tabpad::messages::{FindMsg, Msg, TabMsg};
use tabpad::model::BufferId;
use tabpad::search::{search_all, BufferRecord, MatchOptions, Pattern};
use tabpad::Cmd;

#[test]
fn test_aggregates_per_buffer() {
    let records = vec![
        BufferRecord::new(BufferId(1), "one", "foo\nbar foo"),
        BufferRecord::new(BufferId(2), "two", "baz"),
    ];
    let result = search_all(
        &records,
        &Pattern::new("foo").unwrap(),
        MatchOptions::default(),
    );

    assert_eq!(result.total_matches, 2);
    assert_eq!(result.buffers.len(), 1);
    let entry = &result.buffers[0];
    assert_eq!(entry.buffer_id, BufferId(1));
    let lines: Vec<usize> = entry.lines.iter().map(|l| l.line_number).collect();
    assert_eq!(lines, vec![1, 2]);
    assert!(result.for_buffer(BufferId(2)).is_none());
}

#[test]
fn test_one_entry_per_line_even_with_repeats() {
    let records = [BufferRecord::new(
        BufferId(7),
        "notes",
        Cow::Owned("foo foo foo\nnone".to_string()),
    )];
    let result = search_all(
        &records[..],
        &Pattern::new("foo").unwrap(),
        MatchOptions::default(),
    );
    assert_eq!(result.total_matches, 1);
    assert_eq!(result.buffers[0].lines[0].highlight.start, 0);
}

#[test]
fn test_rendered_line_is_escaped() {
    let records = vec![BufferRecord::new(BufferId(1), "page", "<b>Tom & Jerry</b>")];
    let result = search_all(
        &records,
        &Pattern::new("jerry").unwrap(),
        MatchOptions::default(),
    );
    assert_eq!(
        result.buffers[0].lines[0].rendered,
        "&lt;b&gt;Tom &amp; <mark>Jerry</mark>&lt;/b&gt;"
    );
}

#[test]
fn test_search_all_buffers_through_update() {
    let mut model = model_with_buffers(&[
        ("a.txt", "alpha\nbeta alpha"),
        ("b.txt", "gamma"),
        ("c.txt", "ALPHA"),
    ]);
    let cmd = find(&mut model, "alpha", FindMsg::SearchAllBuffers).unwrap();

    assert_eq!(model.ui.status_message, "3 matching lines in 2 buffers");
    let shown = cmd
        .flatten()
        .into_iter()
        .find_map(|c| match c {
            Cmd::ShowResults(result) => Some(result),
            _ => None,
        })
        .unwrap();
    let names: Vec<&str> = shown
        .buffers
        .iter()
        .map(|b| b.buffer_name.as_str())
        .collect();
    assert_eq!(names, vec!["a.txt", "c.txt"]);
    assert_eq!(model.find.results.as_ref(), Some(&shown));
}

#[test]
fn test_no_matches_in_any_buffer() {
    let mut model = model_with_buffers(&[("a", "x"), ("b", "y")]);
    find(&mut model, "zzz", FindMsg::SearchAllBuffers);
    assert_eq!(model.ui.status_message, "No matches for 'zzz'");
    assert!(model.find.results.as_ref().unwrap().is_empty());
}

#[test]
fn test_open_result_jumps_to_buffer() {
    let mut model = model_with_buffers(&[("a", "nope"), ("b", "one\ntwo needle")]);
    find(&mut model, "needle", FindMsg::SearchAllBuffers);
    let cmd = run(&mut model, [Msg::Find(FindMsg::OpenResult(0))]).unwrap();

    let active = model.active_buffer().unwrap();
    assert_eq!(active.name, "b");
    assert_eq!(active.selected_text(), "needle");
    let reveal = Cmd::Reveal {
        buffer: active.id,
        index: 8,
        length: 6,
    };
    assert!(cmd.flatten().contains(&reveal));
}

#[test]
fn test_closing_buffer_invalidates_results() {
    let mut model = model_with_buffers(&[("a", "x"), ("b", "x")]);
    find(&mut model, "x", FindMsg::SearchAllBuffers);
    let first = model.tabs.active_id().unwrap();
    run(&mut model, [Msg::Tab(TabMsg::Close(first))]);
    assert!(model.find.results.is_none());
    assert_eq!(run(&mut model, [Msg::Find(FindMsg::OpenResult(0))]), None);
}
