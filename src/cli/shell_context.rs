//! Shared runtime state for CLI interactions and command execution.

use dialoguer::theme::Theme;

use crate::{
    config::{Config, ConfigManager},
    core::BudgetState,
    currency::{format_currency, FormatOptions},
};

use super::{commands, io as cli_io, registry::CommandRegistry};
use crate::cli::core::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything a command handler may read or mutate during one session.
///
/// The budget state is owned here and only changed by command handlers; it is
/// dropped with the context when the session ends.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub state: BudgetState,
    pub theme: Box<dyn Theme>,
    pub config: Config,
    pub config_manager: Option<ConfigManager>,
    pub running: bool,
}

impl ShellContext {
    /// Builds a context from the on-disk configuration.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let manager = ConfigManager::new()?;
        let config = manager.load()?;
        Ok(Self::with_config(mode, config, Some(manager)))
    }

    /// Builds a context from an explicit configuration; `manager` is used to
    /// persist `config set` changes when present.
    pub fn with_config(mode: CliMode, config: Config, manager: Option<ConfigManager>) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        cli_io::apply_config(&config);

        Self {
            mode,
            registry,
            state: BudgetState::with_multiplier(config.default_multiplier),
            theme: cli_io::dialog_theme(config.theme),
            config,
            config_manager: manager,
            running: true,
        }
    }

    pub fn prompt_theme(&self) -> &dyn Theme {
        self.theme.as_ref()
    }

    pub fn is_interactive(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub fn format_options(&self) -> FormatOptions {
        self.config.format_options()
    }

    pub fn format_amount(&self, amount: f64) -> String {
        format_currency(amount, &self.format_options())
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        let totals = self.state.totals();
        format!("budget [{}]> ", self.format_amount(totals.net_income))
    }
}
