//! Dispatch, error reporting, and the error types shared by CLI commands.

use std::io;

use thiserror::Error;
use tracing::debug;

use crate::errors::{BudgetError, ValidationError};

use super::io as cli_io;
use super::shell::parse_command_line;
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{context}: {source}")]
    Validation {
        context: String,
        #[source]
        source: ValidationError,
    },
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl CommandError {
    pub fn validation(context: impl Into<String>, source: ValidationError) -> Self {
        CommandError::Validation {
            context: context.into(),
            source,
        }
    }
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::validation("Rejected", err)
    }
}

/// Top-level error returned by [`crate::cli::run_cli`].
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl ShellContext {
    /// Tokenizes and runs one line of input.
    pub fn execute_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                cli_io::print_warning(&err);
                return Ok(LoopControl::Continue);
            }
        };
        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };

        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        debug!(command, args = args.len(), "dispatching command");
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.registry.suggest(input) {
            cli_io::print_info(format!("Suggestion: `{}`?", best));
        }
    }

    /// Surfaces a failed command to the user; the session keeps running.
    pub fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            err @ CommandError::Validation { .. } => {
                cli_io::print_error(&err);
                cli_io::print_hint("Nothing was changed.");
            }
            other => cli_io::print_error(other),
        }
    }

    pub fn confirm_exit(&self) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(self.prompt_theme(), "Exit? Entries are not saved between sessions.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn context() -> ShellContext {
        ShellContext::with_config(CliMode::Script, Config::default(), None)
    }

    #[test]
    fn blank_and_unknown_lines_continue() {
        let mut context = context();
        assert_eq!(context.execute_line("   ").unwrap(), LoopControl::Continue);
        assert_eq!(
            context.execute_line("summry").unwrap(),
            LoopControl::Continue
        );
        assert!(context.running);
    }

    #[test]
    fn exit_stops_the_loop() {
        let mut context = context();
        assert_eq!(context.execute_line("exit").unwrap(), LoopControl::Exit);
        assert!(!context.running);
    }

    #[test]
    fn unbalanced_quotes_are_reported_without_failing() {
        let mut context = context();
        assert_eq!(
            context.execute_line("income \"Side gig 200").unwrap(),
            LoopControl::Continue
        );
        assert!(context.state.incomes().is_empty());
    }

    #[test]
    fn validation_errors_carry_context() {
        let err = CommandError::validation("Income not added", ValidationError::EmptyLabel);
        assert_eq!(err.to_string(), "Income not added: label must not be empty");
    }
}
