use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::{
    chart::BarChart,
    style::{style, terminal_width, UiStyle},
};
use crate::core::services::SummaryService;
use crate::domain::EntryKind;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Show total income, expenses and net income",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "chart",
            "Draw the budget, expense or income chart",
            "chart [budget|expenses|income]",
            cmd_chart,
        ),
        CommandEntry::new(
            "trend",
            "Toy paired income/expense trend (not a forecast)",
            "trend",
            cmd_trend,
        ),
        CommandEntry::new(
            "report",
            "Print every figure and dataset",
            "report [--json]",
            cmd_report,
        ),
    ]
}

/// The four headline figures, one per line.
pub fn summary_lines(context: &ShellContext) -> Vec<String> {
    let totals = SummaryService::current_totals(&context.state);
    vec![
        format!("Total Income: {}", context.format_amount(totals.total_income)),
        format!(
            "Total Expenses: {}",
            context.format_amount(totals.total_expenses)
        ),
        format!("Net Income: {}", context.format_amount(totals.net_income)),
        format!(
            "Expected Income ({}): {}",
            context.state.multiplier(),
            context.format_amount(context.state.expected_income())
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section("Budget");
    for line in summary_lines(context) {
        cli_io::print_info(line);
    }
    if context.state.totals().is_deficit() {
        cli_io::print_warning("Expenses exceed income.");
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Budget,
    Breakdown(EntryKind),
}

impl ChartKind {
    pub fn parse(raw: Option<&str>) -> Result<Self, CommandError> {
        match raw.map(str::to_lowercase).as_deref() {
            None | Some("budget") => Ok(ChartKind::Budget),
            Some(other) => other
                .parse()
                .map(ChartKind::Breakdown)
                .map_err(|_| {
                    CommandError::InvalidArguments(format!(
                        "unknown chart `{}` (expected budget, expenses or income)",
                        other
                    ))
                }),
        }
    }
}

/// Renders a chart as text at the given terminal width.
pub fn render_chart(
    context: &ShellContext,
    kind: ChartKind,
    columns: usize,
    ui: &UiStyle,
) -> String {
    let options = context.format_options();
    match kind {
        ChartKind::Budget => {
            let points = SummaryService::budget_chart(&context.state);
            BarChart::new("Budget", &points)
                .fit_to(columns)
                .render(&options, ui)
        }
        ChartKind::Breakdown(entry_kind) => {
            let points = SummaryService::grouped_breakdown(&context.state, entry_kind);
            let title = match entry_kind {
                EntryKind::Income => "Income",
                EntryKind::Expense => "Expenses",
            };
            BarChart::new(title, &points)
                .fit_to(columns)
                .with_shares()
                .render(&options, ui)
        }
    }
}

fn cmd_chart(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let kind = ChartKind::parse(args.first().copied())?;
    cli_io::print_block(&render_chart(context, kind, terminal_width(), &style()));
    Ok(())
}

fn cmd_trend(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section("Paired trend (toy heuristic)");
    match context.state.paired_trend() {
        Some(trend) => {
            cli_io::print_info(format!(
                "Fitted over {} income/expense pairs: income = {:.4} + {:.4} x expense",
                trend.observations, trend.intercept, trend.slope
            ));
            cli_io::print_info(format!(
                "Sum of fitted income: {}",
                context.format_amount(trend.fitted_total)
            ));
            cli_io::print_hint(
                "The fit is evaluated on the same entries it was built from; do not read it as a forecast.",
            );
        }
        None => cli_io::print_warning(
            "Not available: needs at least two income and two expense entries, equal in number, with differing expense amounts.",
        ),
    }
    Ok(())
}

fn cmd_report(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first() {
        Some(&"--json") => {
            let report = SummaryService::report(&context.state);
            cli_io::print_block(&serde_json::to_string_pretty(&report)?);
        }
        Some(other) => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown option `{}` (expected --json)",
                other
            )))
        }
        None => {
            cmd_summary(context, &[])?;
            let ui = style();
            let columns = terminal_width();
            for kind in [
                ChartKind::Budget,
                ChartKind::Breakdown(EntryKind::Expense),
                ChartKind::Breakdown(EntryKind::Income),
            ] {
                cli_io::print_block(&render_chart(context, kind, columns, &ui));
            }
        }
    }
    Ok(())
}
