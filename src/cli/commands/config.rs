use tracing::info;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::config::Config;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change display preferences",
        "config [show | set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            show_config(context);
            Ok(())
        }
        ["set", key, value @ ..] if !value.is_empty() => {
            set_config_value(context, key, &value.join(" "))
        }
        _ => Err(CommandError::InvalidArguments(format!(
            "usage: config [show | set <key> <value>] (keys: {})",
            Config::KEYS.join(", ")
        ))),
    }
}

fn show_config(context: &ShellContext) {
    let config = &context.config;
    output_section("Configuration");
    cli_io::print_info(format!("  currency_symbol: {}", config.currency_symbol));
    cli_io::print_info(format!("  default_multiplier: {}", config.default_multiplier));
    cli_io::print_info(format!("  negative_style: {:?}", config.negative_style));
    cli_io::print_info(format!("  group_thousands: {}", config.group_thousands));
    cli_io::print_info(format!("  plain_output: {}", config.plain_output));
    cli_io::print_info(format!(
        "  theme: {}",
        config.theme.as_str()
    ));
    if let Some(manager) = &context.config_manager {
        cli_io::print_info(format!("  file: {}", manager.path().display()));
    }
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated.set_value(key, value)?;
    if let Some(manager) = &context.config_manager {
        manager.save(&updated)?;
    }
    context.config = updated;
    cli_io::apply_config(&context.config);
    context.theme = cli_io::dialog_theme(context.config.theme);
    info!(key, "configuration updated");
    cli_io::print_success("Configuration updated.");
    if key.eq_ignore_ascii_case("default_multiplier") {
        cli_io::print_hint("Takes effect in new sessions; use `multiplier` to change this one.");
    }
    Ok(())
}
