use tracing::info;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::forms::collect_entry;
use crate::cli::io as cli_io;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::{
    style::style,
    table::{Table, TableColumn, TableRenderer},
};
use crate::core::BudgetCommand;
use crate::domain::{Amounted, EntryKind, Labelled};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "income",
            "Add an income source",
            "income <label> <amount>",
            cmd_income,
        ),
        CommandEntry::new(
            "expense",
            "Add an expense category",
            "expense <label> <amount>",
            cmd_expense,
        ),
        CommandEntry::new(
            "list",
            "List entered income and expenses",
            "list [income|expense]",
            cmd_list,
        ),
    ]
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    submit(context, EntryKind::Income, args)
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    submit(context, EntryKind::Expense, args)
}

fn submit(context: &mut ShellContext, kind: EntryKind, args: &[&str]) -> CommandResult {
    let form = collect_entry(context, kind, args)?;
    let command = BudgetCommand::submit(kind, form.label, form.amount);
    context
        .state
        .apply_in_place(&command)
        .map_err(|err| CommandError::validation(format!("{} not added", kind), err))?;

    let entry = context
        .state
        .entries(kind)
        .last()
        .ok_or_else(|| CommandError::Message(format!("{} was not recorded", kind)))?;
    info!(%kind, label = entry.label(), "entry submitted");
    cli_io::print_success(format!(
        "Added {} `{}` ({}).",
        kind.to_string().to_lowercase(),
        entry.label(),
        context.format_amount(entry.amount())
    ));
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let kinds: Vec<EntryKind> = match args.first() {
        Some(raw) => vec![raw.parse().map_err(CommandError::InvalidArguments)?],
        None => EntryKind::ALL.to_vec(),
    };
    for kind in kinds {
        cli_io::print_block(&render_entries(context, kind));
    }
    Ok(())
}

/// Table of one collection, or a short notice when it is still empty.
pub fn render_entries(context: &ShellContext, kind: EntryKind) -> String {
    let entries = context.state.entries(kind);
    let title = match kind {
        EntryKind::Income => "Income",
        EntryKind::Expense => "Expenses",
    };
    if entries.is_empty() {
        return format!(
            "No {} entries yet. Use `{} <label> <amount>`.",
            kind.to_string().to_lowercase(),
            kind.to_string().to_lowercase()
        );
    }

    let mut table = Table::new(
        Some(title),
        vec![
            TableColumn::new("#", 2).right(),
            TableColumn::new(format!("{} Type", kind), 12),
            TableColumn::new("Amount", 10).right(),
        ],
    );
    for (idx, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            entry.label().to_string(),
            context.format_amount(entry.amount()),
        ]);
    }
    table.add_row(vec![
        String::new(),
        "Total".to_string(),
        context.format_amount(context.state.total(kind)),
    ]);
    TableRenderer::render(&table, &style())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::core::CliMode;
    use crate::config::Config;

    fn context() -> ShellContext {
        ShellContext::with_config(CliMode::Script, Config::default(), None)
    }

    #[test]
    fn income_command_appends_entry() {
        let mut context = context();
        cmd_income(&mut context, &["Side", "gig", "250"]).unwrap();
        assert_eq!(
            context.state.breakdown(EntryKind::Income),
            vec![("Side gig".to_string(), 250.0)]
        );
    }

    #[test]
    fn rejected_expense_leaves_state_unchanged() {
        let mut context = context();
        cmd_expense(&mut context, &["Rent", "1000"]).unwrap();
        let err = cmd_expense(&mut context, &["Food", "0"]).unwrap_err();
        assert!(err.to_string().starts_with("Expense not added"));
        assert_eq!(context.state.expenses().len(), 1);
    }

    #[test]
    fn list_rejects_unknown_kind() {
        let mut context = context();
        assert!(matches!(
            cmd_list(&mut context, &["savings"]),
            Err(CommandError::InvalidArguments(_))
        ));
    }

    #[test]
    fn empty_collection_renders_notice() {
        let context = context();
        assert!(render_entries(&context, EntryKind::Expense).starts_with("No expense entries yet"));
    }
}
