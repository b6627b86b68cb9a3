//! Tab lifecycle tests

mod common;

use common::{model_with_buffers, run};
use tabpad::messages::{Msg, TabMsg};
use tabpad::model::Tabs;
use tabpad::util::BufferLoadError;
use tempfile::TempDir;

#[test]
fn test_open_file_and_save() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notes.txt");
    std::fs::write(&path, "line one\nline two\n").unwrap();

    let mut tabs = Tabs::new();
    let id = tabs.open_file(path.clone()).unwrap();
    let buffer = tabs.get_mut(id).unwrap();
    assert_eq!(buffer.name, "notes.txt");
    assert_eq!(buffer.offset_to_position(14), (1, 5));

    buffer.set_text("changed");
    assert_eq!(buffer.display_name(), "notes.txt*");
    buffer.save().unwrap();
    assert!(!buffer.is_modified);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "changed");
}

#[test]
fn test_open_rejects_directories_and_binaries() {
    let temp = TempDir::new().unwrap();
    let mut tabs = Tabs::new();
    assert_eq!(
        tabs.open_file(temp.path().to_path_buf()),
        Err(BufferLoadError::IsDirectory)
    );

    let binary = temp.path().join("blob.bin");
    std::fs::write(&binary, [0u8, 1, 2, 0, 3]).unwrap();
    assert_eq!(tabs.open_file(binary), Err(BufferLoadError::BinaryFile));
    assert!(tabs.is_empty());
}

#[test]
fn test_close_all_leaves_nothing_active() {
    let mut model = model_with_buffers(&[("a", ""), ("b", ""), ("c", "")]);
    let ids: Vec<_> = model.tabs.iter().map(|b| b.id).collect();
    for id in ids {
        run(&mut model, [Msg::Tab(TabMsg::Close(id))]);
    }
    assert!(model.tabs.is_empty());
    assert!(model.active_buffer().is_none());

    run(&mut model, [Msg::Tab(TabMsg::New)]);
    assert_eq!(model.active_buffer().unwrap().name, "Untitled");
}

#[test]
fn test_rename_through_update() {
    let mut model = model_with_buffers(&[("draft", "")]);
    let id = model.tabs.active_id().unwrap();
    run(
        &mut model,
        [Msg::Tab(TabMsg::Rename {
            id,
            name: "final.txt".to_string(),
        })],
    );
    assert_eq!(model.tabs.get(id).unwrap().name, "final.txt");
}
