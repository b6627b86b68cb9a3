use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use tabpad::cli::{CliArgs, CliCommand, StartupConfig, StartupSource};
use tabpad::commands::Cmd;
use tabpad::config::EditorConfig;
use tabpad::format::{detect, format_as, FormatKind};
use tabpad::messages::{EditMsg, FindMsg, Msg, TabMsg};
use tabpad::model::{AppModel, BufferId, Selection};
use tabpad::search::CrossBufferResult;
use tabpad::session::SessionSnapshot;
use tabpad::update::update;
use tabpad::util::filename_for_display;

/// Drives the model with messages and performs the resulting commands
struct App {
    model: AppModel,
    /// Save the session on `Cmd::SaveSession` (restored session, mutating command)
    persist_session: bool,
    /// Print cross-buffer results as marked-up lines
    html: bool,
}

impl App {
    fn new(startup: &StartupConfig) -> Result<Self> {
        let config = EditorConfig::load();
        let options = startup.match_options(config.default_match_options());
        let mut model = AppModel::new(config);

        let persist_session = startup.persists_session(&model.config);
        match &startup.source {
            StartupSource::Files(paths) => {
                for path in paths {
                    if let Err(e) = model.tabs.open_file(path.clone()) {
                        return Err(anyhow!(e.user_message(&filename_for_display(path))));
                    }
                }
            }
            StartupSource::Empty => {}
            StartupSource::Session => {
                if model.config.restore_session {
                    if let Some(session) = SessionSnapshot::load() {
                        session.apply(&mut model);
                    }
                }
            }
        }

        model.find.case_sensitive = options.case_sensitive;
        model.find.whole_word = options.whole_word;

        Ok(Self {
            model,
            persist_session,
            html: false,
        })
    }

    fn dispatch(&mut self, msg: impl Into<Msg>) {
        if let Some(cmd) = update(&mut self.model, msg.into()) {
            self.process_cmd(cmd);
        }
    }

    fn process_cmd(&self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::SaveSession => {
                if self.persist_session {
                    if let Err(e) = SessionSnapshot::capture(&self.model).save() {
                        tracing::warn!("Failed to save session: {}", e);
                    }
                }
            }
            Cmd::Reveal {
                buffer,
                index,
                length,
            } => {
                if let Some(buf) = self.model.tabs.get(buffer) {
                    let (line, column) = buf.offset_to_position(index);
                    println!(
                        "{}:{}:{} ({} chars)",
                        buf.name,
                        line + 1,
                        column + 1,
                        length
                    );
                }
            }
            Cmd::ShowResults(result) => self.print_results(&result),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    fn print_results(&self, result: &CrossBufferResult) {
        for buffer in &result.buffers {
            println!("{}", buffer.buffer_name);
            for line in &buffer.lines {
                let text = if self.html {
                    &line.rendered
                } else {
                    &line.line_text
                };
                println!("  {:>5}: {}", line.line_number, text);
            }
        }
    }

    fn status(&self) -> &str {
        self.model.ui.visible_text()
    }

    fn buffer_ids(&self) -> Vec<BufferId> {
        self.model.tabs.iter().map(|b| b.id).collect()
    }

    fn run(&mut self, command: CliCommand) -> Result<()> {
        match command {
            CliCommand::Find {
                pattern,
                backward,
                from,
                ..
            } => {
                self.dispatch(FindMsg::SetQuery(pattern));
                if let Some(first) = self.buffer_ids().first().copied() {
                    self.dispatch(TabMsg::Activate(first));
                    let len = self.model.tabs.get(first).map_or(0, |b| b.len_chars());
                    let offset = from.unwrap_or(if backward { len } else { 0 });
                    self.dispatch(EditMsg::SetSelection(Selection::cursor(offset)));
                }
                let msg = if backward {
                    FindMsg::FindPrevious
                } else {
                    FindMsg::FindNext
                };
                self.dispatch(msg);
                println!("{}", self.status());
            }

            CliCommand::Count { pattern, .. } => {
                self.dispatch(FindMsg::SetQuery(pattern));
                for id in self.buffer_ids() {
                    self.dispatch(TabMsg::Activate(id));
                    self.dispatch(FindMsg::CountMatches);
                    println!("{}: {}", self.buffer_name(id), self.status());
                }
            }

            CliCommand::Replace {
                pattern,
                replacement,
                write,
                ..
            } => {
                self.dispatch(FindMsg::SetQuery(pattern));
                self.dispatch(FindMsg::SetReplacement(replacement));
                for id in self.buffer_ids() {
                    self.dispatch(TabMsg::Activate(id));
                    self.dispatch(FindMsg::ReplaceAll);
                    println!("{}: {}", self.buffer_name(id), self.status());
                }
                if write {
                    self.write_modified()?;
                }
            }

            CliCommand::Search { pattern, html, .. } => {
                self.html = html;
                self.dispatch(FindMsg::SetQuery(pattern));
                self.dispatch(FindMsg::SearchAllBuffers);
                println!("{}", self.status());
            }

            CliCommand::Format { .. } => {}
        }
        Ok(())
    }

    fn buffer_name(&self, id: BufferId) -> String {
        self.model
            .tabs
            .get(id)
            .map(|b| b.name.clone())
            .unwrap_or_default()
    }

    /// Save every modified buffer that has a backing file
    fn write_modified(&mut self) -> Result<()> {
        for buffer in self.model.tabs.iter_mut() {
            if !buffer.is_modified || buffer.path.is_none() {
                continue;
            }
            buffer
                .save()
                .with_context(|| format!("Failed to write {}", buffer.name))?;
            tracing::info!("Wrote {}", buffer.name);
        }
        Ok(())
    }
}

/// Format a file to stdout, picking the language from its extension
fn format_file(path: &Path, indent_width: usize) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let kind = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(FormatKind::from_extension)
        .or_else(|| detect(&text))
        .ok_or_else(|| anyhow!("Cannot tell what kind of file {} is", path.display()))?;

    let formatted = format_as(kind, &text, indent_width)?;
    println!("{}", formatted);
    Ok(())
}

fn main() -> Result<()> {
    tabpad::tracing::init();

    let startup = CliArgs::parse().into_config();
    tracing::debug!("Startup: {:?}", startup.source);

    if let CliCommand::Format { file } = &startup.command {
        let config = EditorConfig::load();
        return format_file(file, config.indent_width);
    }

    let mut app = App::new(&startup)?;
    app.run(startup.command)
}
