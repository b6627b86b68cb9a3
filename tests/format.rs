//! Paste auto-formatting tests

mod common;

use common::{active_selection, active_text, run};
use tabpad::config::EditorConfig;
use tabpad::format::{format_as, format_pasted, FormatKind};
use tabpad::messages::{EditMsg, Msg};
use tabpad::model::AppModel;

#[test]
fn test_json_paste_into_empty_editor() {
    let mut model = AppModel::new(EditorConfig::default());
    run(
        &mut model,
        [Msg::Edit(EditMsg::Paste(r#"{"name":"tabpad","tags":["a"]}"#.to_string()))],
    );

    let expected = "{\n  \"name\": \"tabpad\",\n  \"tags\": [\n    \"a\"\n  ]\n}";
    assert_eq!(active_text(&model), expected);
    let end = expected.chars().count();
    assert_eq!(active_selection(&model), (end, end));
    assert_eq!(model.active_buffer().unwrap().name, "Untitled");
}

#[test]
fn test_indent_width_from_config() {
    let config = EditorConfig {
        indent_width: 4,
        ..EditorConfig::default()
    };
    let mut model = AppModel::new(config);
    let paste = Msg::Edit(EditMsg::Paste("<a><b>x</b></a>".to_string()));
    run(&mut model, [paste]);
    assert_eq!(active_text(&model), "<a>\n    <b>x</b>\n</a>");
}

#[test]
fn test_css_paste() {
    let formatted = format_pasted("h1{margin:0;padding:0}p{color:#333}", 2).unwrap();
    assert_eq!(formatted.kind, FormatKind::Css);
    assert_eq!(
        formatted.text,
        "h1 {\n  margin: 0;\n  padding: 0;\n}\n\np {\n  color: #333;\n}"
    );
}

#[test]
fn test_plain_text_and_broken_markup_pass_through() {
    assert_eq!(format_pasted("let x = 1;", 2), None);
    assert_eq!(format_pasted("<unterminated", 2), None);
    assert_eq!(format_pasted("{\"a\": }", 2), None);
}

#[test]
fn test_explicit_format_reports_errors() {
    let err = format_as(FormatKind::Xml, "<a><b", 2).unwrap_err();
    assert_eq!(err.kind, FormatKind::Xml);
    assert!(err.to_string().contains("unterminated tag"));

    let err = format_as(FormatKind::Css, "a{color:red", 2).unwrap_err();
    assert_eq!(err.kind, FormatKind::Css);
}
