//! Line-oriented presentation layer.
//!
//! Each input line is parsed into a [`Command`], applied to the
//! [`TaskListManager`], and answered with a fresh render of the ordered view.
//! Row positions printed in one render are the ones the next command uses.

use thiserror::Error;

use crate::config::AppConfig;
use crate::error::TaskError;
use crate::manager::TaskListManager;
use crate::models::{CreateTaskInput, Priority};
use crate::render::render_table;

pub const HELP: &str = "\
Commands:
  add <priority> <deadline> <description>   priority: 1-3 or low/medium/high, deadline: YYYY-MM-DD
  done <index>                              toggle completion (alias: toggle)
  delete <index>                            remove a task (alias: rm)
  list                                      show the table (alias: ls)
  json                                      show the rows as JSON
  help
  quit                                      (alias: exit)
";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Not a row number: {0}")]
    BadIndex(String),

    #[error("Not a priority: {0} (use 1-3 or low/medium/high)")]
    BadPriority(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(CreateTaskInput),
    Toggle(usize),
    Delete(usize),
    List,
    Json,
    Help,
    Quit,
}

/// Parse one input line. Blank lines parse as `List`.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "" | "list" | "ls" => Ok(Command::List),
        "add" => parse_add(rest),
        "done" | "toggle" => parse_index(rest, "done <index>").map(Command::Toggle),
        "delete" | "rm" => parse_index(rest, "delete <index>").map(Command::Delete),
        "json" => Ok(Command::Json),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn parse_add(rest: &str) -> Result<Command, CommandError> {
    const USAGE: &str = "add <priority> <deadline> <description>";

    let (priority, rest) = next_token(rest);
    let (deadline, description) = next_token(rest);
    if priority.is_empty() || deadline.is_empty() {
        return Err(CommandError::Usage(USAGE));
    }

    // Named tiers map to their level; other numbers go through unchanged so
    // the manager can reject them.
    let priority = match Priority::from_str(priority) {
        Some(tier) => tier.level(),
        None => priority
            .parse::<u8>()
            .map_err(|_| CommandError::BadPriority(priority.to_string()))?,
    };

    Ok(Command::Add(CreateTaskInput {
        description: description.trim().to_string(),
        priority,
        deadline: deadline.to_string(),
    }))
}

/// Split off the first whitespace-delimited token. Runs of spaces or tabs
/// count as one separator.
fn next_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest),
        None => (s, ""),
    }
}

fn parse_index(rest: &str, usage: &'static str) -> Result<usize, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    rest.parse()
        .map_err(|_| CommandError::BadIndex(rest.to_string()))
}

/// What the caller should do after a line was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Quit,
}

/// One interactive session: a manager plus the add form feeding it.
pub struct Session {
    manager: TaskListManager,
    config: AppConfig,
    form: CreateTaskInput,
}

impl Session {
    pub fn new(config: AppConfig) -> Self {
        Self {
            manager: TaskListManager::new(),
            config,
            form: CreateTaskInput::default(),
        }
    }

    pub fn manager(&self) -> &TaskListManager {
        &self.manager
    }

    /// Pending add input. Always empty between commands.
    pub fn form(&self) -> &CreateTaskInput {
        &self.form
    }

    /// Handle one input line.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match parse_command(line) {
            Ok(Command::Quit) => Outcome::Quit,
            Ok(command) => Outcome::Output(self.execute(command)),
            Err(e) => Outcome::Output(format!("error: {}\n", e)),
        }
    }

    pub fn execute(&mut self, command: Command) -> String {
        match command {
            Command::Add(input) => {
                self.form = input;
                let result = self.manager.add_input(&self.form);
                self.form = CreateTaskInput::default();
                match result {
                    Ok(()) => self.render(),
                    Err(TaskError::Validation(e)) => {
                        format!("warning: task not added: {}\n{}", e, self.render())
                    }
                    Err(e) => report_error(&e),
                }
            }
            Command::Toggle(index) => self.mutate(|m| m.toggle_done(index)),
            Command::Delete(index) => self.mutate(|m| m.delete(index).map(|_| ())),
            Command::List => self.render(),
            Command::Json => match serde_json::to_string_pretty(&self.rows()) {
                Ok(json) => format!("{}\n", json),
                Err(e) => format!("error: {}\n", e),
            },
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        }
    }

    fn mutate(
        &mut self,
        op: impl FnOnce(&mut TaskListManager) -> Result<(), TaskError>,
    ) -> String {
        match op(&mut self.manager) {
            Ok(()) => self.render(),
            Err(e) => report_error(&e),
        }
    }

    fn rows(&self) -> Vec<crate::render::TaskRow> {
        self.manager.rows(&self.config.date_format)
    }

    /// Redraw from the current ordered view.
    pub fn render(&self) -> String {
        render_table(&self.rows())
    }
}

fn report_error(e: &TaskError) -> String {
    tracing::error!("{}", e);
    format!("error: {}\n", e)
}
