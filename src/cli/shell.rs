use std::io::{self, BufRead};
use std::path::PathBuf;

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use tracing::{info, warn};

use crate::assistant::{Assistant, CommandAssistant, UnavailableAssistant};
use crate::config::{Config, ConfigManager};
use crate::domain::{sample, CenterDirectory};
use crate::errors::HemolinkError;
use crate::utils::persistence::load_directory_from_file;

use super::commands::show_dashboard;
use super::context::{CliError, CliMode, CommandError, LoopControl, ShellContext};
use super::output;

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os("HEMOLINK_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let config_manager = ConfigManager::from_env().map_err(HemolinkError::from)?;
    let config = config_manager.load().map_err(HemolinkError::from)?;
    let directory = load_directory(&config)?;
    let assistant = build_assistant(&config);

    let mut context = ShellContext::new(mode, &directory, config_manager, config, assistant);

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

/// `HEMOLINK_DIRECTORY` wins over the configured file; the built-in centers
/// are used when neither is set.
fn load_directory(config: &Config) -> Result<CenterDirectory, HemolinkError> {
    let path = std::env::var_os("HEMOLINK_DIRECTORY")
        .map(PathBuf::from)
        .or_else(|| config.directory_path.clone());
    match path {
        Some(path) => load_directory_from_file(&path),
        None => Ok(sample::centers()),
    }
}

fn build_assistant(config: &Config) -> Box<dyn Assistant> {
    let command = std::env::var("HEMOLINK_ASSISTANT_CMD")
        .ok()
        .or_else(|| config.assistant_command.clone());
    let Some(command) = command else {
        return Box::new(UnavailableAssistant);
    };
    match CommandAssistant::parse(&command) {
        Ok(assistant) => {
            info!(command = %command, "assistant backend configured");
            Box::new(assistant)
        }
        Err(err) => {
            warn!(%err, "assistant command ignored");
            Box::new(UnavailableAssistant)
        }
    }
}

fn run_interactive(context: &mut ShellContext<'_>) -> Result<(), CliError> {
    let mut editor: Editor<CommandHelper, DefaultHistory> = Editor::new()?;
    editor.set_helper(Some(CommandHelper::new(context.command_names())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    show_dashboard(context);
    output::hint("Type `help` to list commands or `book` to schedule a donation.");

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(input) => {
                let input = input.trim();
                if input.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(input);
                feed(context, input)?;
            }
            Err(ReadlineError::Interrupted) if context.confirm_exit()? => break,
            Err(ReadlineError::Interrupted) => {}
            Err(ReadlineError::Eof) => {
                output::info("Goodbye.");
                break;
            }
            Err(other) => return Err(CliError::Readline(other)),
        }
    }
    Ok(())
}

/// Reads commands from stdin, one per line, until input runs out or `exit`.
fn run_script(context: &mut ShellContext<'_>) -> Result<(), CliError> {
    let mut lines = io::stdin().lock().lines();
    while context.running {
        match lines.next() {
            Some(input) => feed(context, &input?)?,
            None => break,
        }
    }
    Ok(())
}

fn feed(context: &mut ShellContext<'_>, input: &str) -> Result<(), CliError> {
    if let Err(err) = handle_line(context, input) {
        context.report_error(err)?;
    }
    Ok(())
}

pub(crate) fn handle_line(
    context: &mut ShellContext<'_>,
    line: &str,
) -> Result<LoopControl, CommandError> {
    let words = match tokenize(line) {
        Ok(words) => words,
        Err(err) => {
            output::warning(format!("Could not read that line: {err}."));
            return Ok(LoopControl::Continue);
        }
    };
    let Some((typed, rest)) = words.split_first() else {
        return Ok(LoopControl::Continue);
    };

    let mut command = typed.to_lowercase();
    if command == "quit" {
        command = "exit".into();
    }
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();

    let control = context.dispatch(&command, typed, &args)?;
    if control == LoopControl::Exit {
        context.running = false;
    }
    Ok(control)
}

/// Splits a line into words, honouring shell-style quoting.
pub(crate) fn tokenize(line: &str) -> Result<Vec<String>, shell_words::ParseError> {
    shell_words::split(line)
}

/// Tab and `?` completion over registered command words.
struct CommandHelper {
    words: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut words: Vec<String> = names.iter().map(|n| n.to_ascii_lowercase()).collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let head = &line[..pos];
        let typed = head.trim_start();
        // arguments are free text
        if typed.chars().any(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let typed = typed.to_ascii_lowercase();
        let matches = self
            .words
            .iter()
            .filter(|word| word.starts_with(typed.as_str()))
            .map(|word| Pair {
                display: word.to_string(),
                replacement: word.to_string(),
            })
            .collect();
        Ok((head.len() - head.trim_start().len(), matches))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {}

impl Validator for CommandHelper {}
