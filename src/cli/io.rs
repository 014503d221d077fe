use std::fmt;

use dialoguer::{
    theme::{ColorfulTheme, SimpleTheme, Theme},
    Confirm, Input, Select,
};

use crate::cli::core::CommandError;
use crate::cli::output::{self, OutputPreferences};
use crate::cli::ui::style;
use crate::config::{Config, PromptTheme};

pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Writes pre-rendered text (tables, charts, JSON) verbatim.
pub fn print_block(text: &str) {
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}

/// Pushes presentation preferences from `config` into the output helpers.
pub fn apply_config(config: &Config) {
    output::set_preferences(OutputPreferences {
        plain_mode: config.plain_output,
    });
    style::refresh_style();
}

/// Dialoguer theme used for prompts under `theme`.
pub fn dialog_theme(theme: PromptTheme) -> Box<dyn Theme> {
    match theme {
        PromptTheme::Colorful => Box::new(ColorfulTheme::default()),
        PromptTheme::Simple => Box::new(SimpleTheme),
    }
}

pub fn confirm_action(theme: &dyn Theme, prompt: &str) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(CommandError::from)
}

pub fn prompt_text(theme: &dyn Theme, prompt: &str) -> Result<String, CommandError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()
        .map_err(CommandError::from)
}

/// Lets the user pick one of `items`, returning its index.
pub fn select_index(
    theme: &dyn Theme,
    prompt: &str,
    items: &[String],
    default: usize,
) -> Result<usize, CommandError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}
