//! Tab lifecycle message handlers

use crate::commands::Cmd;
use crate::messages::TabMsg;
use crate::model::AppModel;

use super::changed;

/// Handle tab messages (new, rename, close, activate)
pub fn update_tabs(model: &mut AppModel, msg: TabMsg) -> Option<Cmd> {
    match msg {
        TabMsg::New => {
            let id = model.tabs.open_untitled();
            model.find.highlights.clear();
            tracing::debug!("Opened new buffer {}", id);
            changed()
        }

        TabMsg::Rename { id, name } => {
            if model.tabs.rename(id, &name) {
                // Cached result rows carry buffer names
                model.find.results = None;
                changed()
            } else {
                model.ui.toast("Name cannot be empty");
                Some(Cmd::Redraw)
            }
        }

        TabMsg::Close(id) => {
            let closed = model.tabs.close(id)?;
            tracing::debug!(
                "Closed buffer {} ({}), {} remaining",
                closed.id,
                closed.name,
                model.tabs.len()
            );
            if closed.is_modified && closed.path.is_some() {
                model
                    .ui
                    .toast(format!("Closed {} with unsaved changes", closed.name));
            }
            model.find.clear_results();
            changed()
        }

        TabMsg::Activate(id) => {
            if model.tabs.active_id() == Some(id) || !model.tabs.activate(id) {
                return None;
            }
            model.find.highlights.clear();
            changed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BufferId;

    #[test]
    fn test_new_tab_is_active_and_saves_session() {
        let mut model = AppModel::default();
        let cmd = update_tabs(&mut model, TabMsg::New).unwrap();
        assert!(cmd.saves_session());
        assert_eq!(model.active_buffer().unwrap().name, "Untitled");
    }

    #[test]
    fn test_rename_empty_shows_toast() {
        let mut model = AppModel::default();
        let id = model.tabs.open_untitled();
        let cmd = update_tabs(
            &mut model,
            TabMsg::Rename {
                id,
                name: " ".to_string(),
            },
        )
        .unwrap();
        assert!(!cmd.saves_session());
        assert_eq!(model.ui.visible_text(), "Name cannot be empty");
        assert_eq!(model.tabs.get(id).unwrap().name, "Untitled");
    }

    #[test]
    fn test_close_unknown_is_noop() {
        let mut model = AppModel::default();
        model.tabs.open_untitled();
        assert_eq!(update_tabs(&mut model, TabMsg::Close(BufferId(99))), None);
        assert_eq!(model.tabs.len(), 1);
    }

    #[test]
    fn test_close_drops_cross_buffer_results() {
        let mut model = AppModel::default();
        let id = model.tabs.open_with_text("a", "x");
        model.find.results = Some(Default::default());
        update_tabs(&mut model, TabMsg::Close(id));
        assert!(model.find.results.is_none());
        assert!(model.tabs.is_empty());
    }

    #[test]
    fn test_activate_current_is_noop() {
        let mut model = AppModel::default();
        let a = model.tabs.open_untitled();
        let b = model.tabs.open_untitled();
        assert_eq!(update_tabs(&mut model, TabMsg::Activate(b)), None);
        assert!(update_tabs(&mut model, TabMsg::Activate(a)).is_some());
        assert_eq!(model.tabs.active_id(), Some(a));
    }
}
