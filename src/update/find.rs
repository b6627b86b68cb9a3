//! Find/replace message handlers

use crate::commands::Cmd;
use crate::messages::FindMsg;
use crate::model::{AppModel, BufferId, TextBuffer};
use crate::search::{
    count_in_buffer, find_all, find_next, find_previous, replace_all, replace_one, search_all,
    Match, MatchOptions, Pattern, SearchHit,
};
use crate::util::pluralize;
use tracing::debug;

use super::changed;

/// Handle find/replace messages
pub fn update_find(model: &mut AppModel, msg: FindMsg) -> Option<Cmd> {
    match msg {
        FindMsg::SetQuery(query) => {
            model.find.query = query;
            model.find.clear_results();
            Some(Cmd::Redraw)
        }

        FindMsg::SetReplacement(replacement) => {
            model.find.replacement = replacement;
            Some(Cmd::Redraw)
        }

        FindMsg::ToggleCaseSensitive => {
            model.find.case_sensitive = !model.find.case_sensitive;
            model.find.clear_results();
            Some(Cmd::Redraw)
        }

        FindMsg::ToggleWholeWord => {
            model.find.whole_word = !model.find.whole_word;
            model.find.clear_results();
            Some(Cmd::Redraw)
        }

        FindMsg::FindNext => navigate(model, Direction::Forward),

        FindMsg::FindPrevious => navigate(model, Direction::Backward),

        FindMsg::ReplaceOne => {
            let pattern = valid_pattern(model)?;
            let options = model.find.options();
            let replacement = model.find.replacement.clone();
            let buffer = model.tabs.active_mut()?;
            let id = buffer.id;

            let outcome = replace_one(buffer, &pattern, &replacement, options);
            debug!(
                "replace_one '{}' in {}: replaced={}",
                pattern, id, outcome.replaced
            );
            model.find.last_hit = outcome.next;

            let status = match (outcome.replaced, outcome.next) {
                (0, Some(hit)) => found_status(&pattern, hit),
                (0, None) => no_matches_status(&pattern),
                (n, _) => format!("Replaced {}", pluralize(n, "occurrence")),
            };
            model.ui.set_status(status);

            let mut cmds = vec![Cmd::Redraw];
            if outcome.replaced > 0 {
                model.find.highlights.clear();
                model.find.results = None;
                cmds.push(Cmd::SaveSession);
            }
            if let Some(hit) = outcome.next {
                cmds.push(reveal(id, hit));
            }
            Some(Cmd::batch(cmds))
        }

        FindMsg::ReplaceAll => {
            let pattern = valid_pattern(model)?;
            let options = model.find.options();
            let replacement = model.find.replacement.clone();
            let buffer = model.tabs.active_mut()?;
            let id = buffer.id;

            let outcome = replace_all(buffer, &pattern, &replacement, options);
            tracing::info!(
                "replace_all '{}' in {}: replaced={}",
                pattern,
                id,
                outcome.replaced
            );

            if outcome.replaced == 0 {
                model.ui.set_status(no_matches_status(&pattern));
                return Some(Cmd::Redraw);
            }
            model.find.clear_results();
            model
                .ui
                .set_status(format!("Replaced {}", pluralize(outcome.replaced, "occurrence")));
            changed()
        }

        FindMsg::CountMatches => {
            let pattern = valid_pattern(model)?;
            let options = model.find.options();
            let count = model
                .tabs
                .active()
                .map(|buffer| count_in_buffer(&buffer.text(), &pattern, options))
                .unwrap_or(0);
            debug!("count '{}': {}", pattern, count);

            let status = if count == 0 {
                no_matches_status(&pattern)
            } else {
                format!("{} of '{}'", pluralize(count, "occurrence"), pattern)
            };
            model.ui.set_status(status);
            Some(Cmd::Redraw)
        }

        FindMsg::HighlightAll => {
            let pattern = valid_pattern(model)?;
            let options = model.find.options();
            let limit = model.config.max_highlights;
            let highlights = model
                .tabs
                .active()
                .map(|buffer| find_all(&buffer.text(), &pattern, options, limit))
                .unwrap_or_default();

            let status = if highlights.is_empty() {
                no_matches_status(&pattern)
            } else if highlights.len() == limit {
                format!("Highlighted first {}", pluralize(limit, "occurrence"))
            } else {
                format!("Highlighted {}", pluralize(highlights.len(), "occurrence"))
            };
            model.find.highlights = highlights;
            model.ui.set_status(status);
            Some(Cmd::Redraw)
        }

        FindMsg::SearchAllBuffers => {
            let pattern = valid_pattern(model)?;
            let options = model.find.options();
            let result = search_all(&model.tabs, &pattern, options);
            debug!(
                "search_all '{}': {} lines in {} buffers",
                pattern,
                result.total_matches,
                result.buffers.len()
            );

            let status = if result.is_empty() {
                no_matches_status(&pattern)
            } else {
                result.summary()
            };
            model.ui.set_status(status);
            model.find.selected_result = 0;
            model.find.results = Some(result.clone());
            Some(Cmd::batch(vec![Cmd::Redraw, Cmd::ShowResults(result)]))
        }

        FindMsg::OpenResult(index) => {
            let (id, found) = {
                let results = model.find.results.as_ref()?;
                let (id, line) = results.entry(index)?;
                (id, Match::new(line.match_offset(), line.highlight.length))
            };
            let buffer = model.tabs.get_mut(id)?;
            buffer.select(found);
            model.tabs.activate(id);
            model.find.selected_result = index;
            model.find.highlights.clear();
            Some(Cmd::batch(vec![
                Cmd::Redraw,
                Cmd::Reveal {
                    buffer: id,
                    index: found.index,
                    length: found.length,
                },
            ]))
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

/// Find next/previous relative to the active selection, with wrap-around
fn navigate(model: &mut AppModel, direction: Direction) -> Option<Cmd> {
    let pattern = valid_pattern(model)?;
    let options = model.find.options();

    let Some(buffer) = model.tabs.active() else {
        model.ui.set_status(no_matches_status(&pattern));
        return Some(Cmd::Redraw);
    };
    let id = buffer.id;
    let hit = search_from_selection(buffer, &pattern, direction, options);
    debug!("{:?} search '{}' in {}: {:?}", direction, pattern, id, hit);

    model.find.last_hit = hit;
    match hit {
        Some(hit) => {
            if let Some(buffer) = model.tabs.get_mut(id) {
                buffer.select(hit.found);
            }
            model.ui.set_status(found_status(&pattern, hit));
            Some(Cmd::batch(vec![Cmd::Redraw, reveal(id, hit)]))
        }
        None => {
            model.ui.set_status(no_matches_status(&pattern));
            Some(Cmd::Redraw)
        }
    }
}

fn search_from_selection(
    buffer: &TextBuffer,
    pattern: &Pattern,
    direction: Direction,
    options: MatchOptions,
) -> Option<SearchHit> {
    let content = buffer.text();
    match direction {
        Direction::Forward => find_next(&content, pattern, buffer.selection.end(), options),
        Direction::Backward => find_previous(&content, pattern, buffer.selection.start(), options),
    }
}

/// The current query, or `None` after reporting "Enter search text"
fn valid_pattern(model: &mut AppModel) -> Option<Pattern> {
    match model.pattern() {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            model.ui.set_status(e.user_message());
            None
        }
    }
}

fn found_status(pattern: &Pattern, hit: SearchHit) -> String {
    if hit.wrapped {
        format!("Found '{}' (wrapped)", pattern)
    } else {
        format!("Found '{}'", pattern)
    }
}

fn no_matches_status(pattern: &Pattern) -> String {
    format!("No matches for '{}'", pattern)
}

fn reveal(buffer: BufferId, hit: SearchHit) -> Cmd {
    Cmd::Reveal {
        buffer,
        index: hit.found.index,
        length: hit.found.length,
    }
}
