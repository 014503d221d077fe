use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::registry::CommandEntry;
use crate::core::BudgetCommand;
use crate::domain::Multiplier;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "multiplier",
        "Show or choose the expected-income multiplier",
        "multiplier [1|1.25|1.5|1.75|2]",
        cmd_multiplier,
    )]
}

fn cmd_multiplier(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let value = match args.first() {
        Some(raw) => Some(parse_multiplier(raw)?),
        None if context.is_interactive() => Some(choose_interactively(context)?),
        None => None,
    };

    let Some(value) = value else {
        print_menu(context);
        return Ok(());
    };

    context
        .state
        .apply_in_place(&BudgetCommand::SelectMultiplier(value))
        .map_err(|err| CommandError::validation("Multiplier unchanged", err))?;
    cli_io::print_success(format!(
        "Expected income now uses {} ({}).",
        context.state.multiplier(),
        context.format_amount(context.state.expected_income())
    ));
    Ok(())
}

/// Accepts `1.5` as well as `1.5x`.
fn parse_multiplier(raw: &str) -> Result<f64, CommandError> {
    raw.trim()
        .trim_end_matches(|ch: char| ch.eq_ignore_ascii_case(&'x'))
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("`{}` is not a number", raw)))
}

fn print_menu(context: &ShellContext) {
    let current = context.state.multiplier();
    cli_io::print_info(format!("Current multiplier: {}", current));
    for option in Multiplier::presets() {
        let marker = if option == current { ">" } else { " " };
        cli_io::print_info(format!(
            "{} {:<6} {}",
            marker,
            option.to_string(),
            context.format_amount(context.state.projected_income(option))
        ));
    }
}

fn choose_interactively(context: &ShellContext) -> Result<f64, CommandError> {
    let current = context.state.multiplier();
    let items: Vec<String> = Multiplier::presets()
        .map(|option| {
            format!(
                "{:<6} {}",
                option.to_string(),
                context.format_amount(context.state.projected_income(option))
            )
        })
        .collect();
    let default = Multiplier::presets()
        .position(|option| option == current)
        .unwrap_or(0);
    let index = cli_io::select_index(
        context.prompt_theme(),
        "Expected income multiplier",
        &items,
        default,
    )?;
    Ok(Multiplier::PRESETS[index.min(Multiplier::PRESETS.len() - 1)])
}
