//! Shell state, dispatch, and error reporting.

use std::{cell::RefCell, io, path::Path, rc::Rc};

use chrono::Utc;
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;
use tracing::debug;

use crate::{
    assistant::{Assistant, ChatSession},
    booking::{start_wizard_for, BookingWizard, WizardError},
    config::{Config, ConfigError, ConfigManager},
    core::services::AppointmentBook,
    domain::{sample, BloodNeed, CenterDirectory, DonorProfile, InventoryItem},
    errors::HemolinkError,
};

use super::commands;
use super::io as cli_io;
use super::output;
use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("No booking in progress")]
    NoActiveBooking,
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Startup(#[from] HemolinkError),
}

/// Everything a command handler can touch.
///
/// The center directory is borrowed for the whole session so an open
/// [`BookingWizard`] can hold on to it.
pub struct ShellContext<'d> {
    pub(crate) mode: CliMode,
    pub(crate) running: bool,
    registry: CommandRegistry,
    pub(crate) directory: &'d CenterDirectory,
    pub(crate) donor: DonorProfile,
    pub(crate) needs: Vec<BloodNeed>,
    pub(crate) inventory: Vec<InventoryItem>,
    pub(crate) appointments: Rc<RefCell<AppointmentBook>>,
    pub(crate) booking: Option<BookingWizard<'d>>,
    pub(crate) config: Config,
    config_manager: ConfigManager,
    pub(crate) chat: ChatSession<Box<dyn Assistant>>,
}

impl<'d> ShellContext<'d> {
    pub fn new(
        mode: CliMode,
        directory: &'d CenterDirectory,
        config_manager: ConfigManager,
        config: Config,
        assistant: Box<dyn Assistant>,
    ) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let mut donor = sample::donor();
        if let Some(name) = config.donor_name.as_deref().filter(|n| !n.trim().is_empty()) {
            donor.name = name.trim().to_string();
        }

        let context = Self {
            mode,
            running: true,
            registry,
            directory,
            donor,
            needs: sample::needs(),
            inventory: sample::inventory(),
            appointments: Rc::new(RefCell::new(AppointmentBook::new(
                sample::past_appointments(),
            ))),
            booking: None,
            config,
            config_manager,
            chat: ChatSession::new(assistant),
        };
        context.apply_output_preferences();
        context
    }

    /// Colour only reaches an interactive terminal; script output stays plain.
    pub(crate) fn apply_output_preferences(&self) {
        output::set_preferences(output::OutputPreferences {
            color_enabled: self.config.ui_color_enabled && self.mode == CliMode::Interactive,
        });
    }

    pub(crate) fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    /// Opens a booking session whose completion lands in the appointment book.
    pub(crate) fn open_booking(&mut self) {
        let appointments = Rc::clone(&self.appointments);
        let wizard = start_wizard_for(
            self.directory,
            &self.donor,
            move |booking| {
                appointments.borrow_mut().record(&booking, Utc::now());
            },
            || debug!("booking session dismissed"),
        );
        self.booking = Some(wizard);
    }

    pub(crate) fn booking_mut(&mut self) -> Result<&mut BookingWizard<'d>, CommandError> {
        self.booking.as_mut().ok_or(CommandError::NoActiveBooking)
    }

    /// Drops the wizard once it has closed itself.
    pub(crate) fn release_closed_booking(&mut self) -> bool {
        if self.booking.as_ref().is_some_and(BookingWizard::is_closed) {
            self.booking = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn config_path(&self) -> &Path {
        self.config_manager.config_path()
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub(crate) fn prompt(&self) -> String {
        match &self.booking {
            Some(wizard) => format!("hemolink[book {}/5]> ", wizard.step().index()),
            None => "hemolink> ".to_string(),
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, input), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action("Exit HemoLink?")?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::NoActiveBooking => {
                output::error("No booking in progress.");
                output::hint("Type `book` to schedule a donation.");
                Ok(())
            }
            CommandError::Wizard(WizardError::NotAvailable { action, step }) => {
                output::warning(format!(
                    "`{}` is not available on Step {}/5: {}.",
                    action,
                    step.index(),
                    step.title()
                ));
                Ok(())
            }
            CommandError::Io(err) if self.mode == CliMode::Script => Err(CliError::Io(err)),
            other => {
                output::error(other.to_string());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::UnavailableAssistant;
    use crate::booking::WizardStep;
    use crate::cli::shell::handle_line;
    use crate::domain::AppointmentStatus;
    use tempfile::TempDir;

    fn context<'d>(directory: &'d CenterDirectory, temp: &TempDir) -> ShellContext<'d> {
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        ShellContext::new(
            CliMode::Script,
            directory,
            manager,
            Config::default(),
            Box::new(UnavailableAssistant),
        )
    }

    fn run(ctx: &mut ShellContext<'_>, lines: &[&str]) {
        for line in lines {
            if let Err(err) = handle_line(ctx, line) {
                ctx.report_error(err).unwrap();
            }
        }
    }

    #[test]
    fn finished_booking_is_recorded() {
        let directory = sample::centers();
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&directory, &temp);

        run(
            &mut ctx,
            &[
                "book",
                "location Downtown",
                "next",
                "center 2",
                "date 2024-05-01",
                "time 13:00",
                "next",
                "email jane@x.com",
                "phone 555-1234",
                "next",
            ],
        );
        assert_eq!(
            ctx.booking.as_ref().map(BookingWizard::step),
            Some(WizardStep::Confirmation)
        );
        assert_eq!(ctx.appointments.borrow().upcoming().len(), 0);

        run(&mut ctx, &["done"]);
        assert!(ctx.booking.is_none());
        let book = ctx.appointments.borrow();
        let upcoming = book.upcoming();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].center_name, "St. Mary's Hospital");
        assert_eq!(upcoming[0].time, "13:00");
        assert_eq!(upcoming[0].status, AppointmentStatus::Upcoming);
    }

    #[test]
    fn back_from_first_step_closes_booking() {
        let directory = sample::centers();
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&directory, &temp);

        run(&mut ctx, &["book", "back"]);
        assert!(ctx.booking.is_none());
        assert_eq!(ctx.appointments.borrow().len(), 2);
    }

    #[test]
    fn cancel_is_refused_past_first_step() {
        let directory = sample::centers();
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&directory, &temp);

        run(&mut ctx, &["book", "location Downtown", "next"]);
        let err = handle_line(&mut ctx, "cancel").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Wizard(WizardError::NotAvailable { action: "cancel", .. })
        ));
        assert!(ctx.booking.is_some());
    }

    #[test]
    fn booking_commands_need_an_open_session() {
        let directory = sample::centers();
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&directory, &temp);

        let err = handle_line(&mut ctx, "next").unwrap_err();
        assert!(matches!(err, CommandError::NoActiveBooking));
    }

    #[test]
    fn exit_stops_the_loop() {
        let directory = sample::centers();
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&directory, &temp);

        assert_eq!(handle_line(&mut ctx, "exit").unwrap(), LoopControl::Exit);
        assert!(!ctx.running);
    }

    #[test]
    fn config_set_persists() {
        let directory = sample::centers();
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&directory, &temp);

        handle_line(&mut ctx, "config set donor_name \"Sam Lee\"").unwrap();
        let saved = ConfigManager::with_base_dir(temp.path().to_path_buf())
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(saved.donor_name.as_deref(), Some("Sam Lee"));
        assert_eq!(ctx.donor.name, "Sam Lee");
    }

    #[test]
    fn colour_stays_off_in_script_mode() {
        let directory = sample::centers();
        let temp = TempDir::new().unwrap();
        let mut ctx = context(&directory, &temp);

        handle_line(&mut ctx, "config set ui_color_enabled false").unwrap();
        handle_line(&mut ctx, "config set ui_color_enabled true").unwrap();
        assert!(ctx.config.ui_color_enabled);
        assert!(!output::preferences().color_enabled);
    }
}
