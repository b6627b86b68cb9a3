//! Editing message handlers for the active buffer

use crate::commands::Cmd;
use crate::format::format_pasted;
use crate::messages::EditMsg;
use crate::model::AppModel;

use super::changed;

/// Handle edit messages (selection, paste)
pub fn update_edit(model: &mut AppModel, msg: EditMsg) -> Option<Cmd> {
    match msg {
        EditMsg::SetSelection(selection) => {
            let buffer = model.tabs.active_mut()?;
            buffer.set_selection(selection);
            Some(Cmd::Redraw)
        }

        EditMsg::Paste(text) => {
            let formatted = if model.config.format_on_paste {
                format_pasted(&text, model.config.indent_width)
            } else {
                None
            };

            let id = model.ensure_buffer();
            let buffer = model.tabs.get_mut(id)?;
            match &formatted {
                Some(formatted) => {
                    buffer.replace_selection(&formatted.text);
                    tracing::debug!("Pasted formatted {} into {}", formatted.kind.name(), id);
                }
                None => {
                    buffer.replace_selection(&text);
                }
            }

            if let Some(formatted) = formatted {
                model
                    .ui
                    .toast(format!("Formatted pasted {}", formatted.kind.name()));
            }
            model.find.clear_results();
            changed()
        }
    }
}
