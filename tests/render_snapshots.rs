use budget_calc::cli::ui::chart::BarChart;
use budget_calc::cli::ui::style::UiStyle;
use budget_calc::cli::ui::table::{Table, TableColumn, TableRenderer};
use budget_calc::core::services::SummaryService;
use budget_calc::currency::FormatOptions;
use budget_calc::{BudgetState, EntryKind};
use insta::assert_snapshot;

#[test]
fn budget_chart_for_salary_and_rent() {
    let mut state = BudgetState::new();
    state.add_income("Salary", 3000.0).unwrap();
    state.add_expense("Rent", 1000.0).unwrap();

    let points = SummaryService::budget_chart(&state);
    let rendered = BarChart::new("Budget", &points)
        .fit_to(60)
        .render(&FormatOptions::default(), &UiStyle::plain());

    assert_snapshot!(rendered.trim_end(), @r"
    > Budget
    Income           ########################### $3000.00
    Expenses         #########                   $1000.00
    Expected Income  ##############              $1500.00
    Net Income       ##################          $2000.00
    ");
}

#[test]
fn budget_chart_with_deficit() {
    let mut state = BudgetState::new();
    state.add_income("Part-time", 800.0).unwrap();
    state.add_expense("Rent", 1000.0).unwrap();
    state.add_expense("Food", 300.0).unwrap();

    let points = SummaryService::budget_chart(&state);
    let rendered = BarChart::new("Budget", &points)
        .fit_to(60)
        .render(&FormatOptions::default(), &UiStyle::plain());

    assert_snapshot!(rendered.trim_end(), @r"
    > Budget
    Income           ###########                 $800.00
    Expenses         ##################          $1300.00
    Expected Income  ########################### $1950.00
    Net Income       -------                     -$500.00
    ");
}

#[test]
fn grouped_expense_chart_shows_shares() {
    let mut state = BudgetState::new();
    state.add_expense("Rent", 900.0).unwrap();
    state.add_expense("Food", 40.0).unwrap();
    state.add_expense("Food", 60.0).unwrap();

    let points = SummaryService::grouped_breakdown(&state, EntryKind::Expense);
    let rendered = BarChart::new("Expenses", &points)
        .fit_to(40)
        .with_shares()
        .render(&FormatOptions::default(), &UiStyle::plain());

    assert_snapshot!(rendered.trim_end(), @r"
    > Expenses
    Rent  ################## $900.00 (90.0%)
    Food  ##                 $100.00 (10.0%)
    ");
}

#[test]
fn entry_table_layout() {
    let mut table = Table::new(
        Some("Expenses"),
        vec![
            TableColumn::new("#", 2).right(),
            TableColumn::new("Expense Type", 12),
            TableColumn::new("Amount", 10).right(),
        ],
    );
    table.add_row(vec!["1", "Rent", "$1000.00"]);
    table.add_row(vec!["2", "Food", "$40.50"]);
    table.add_row(vec!["", "Total", "$1040.50"]);

    let rendered = TableRenderer::render(&table, &UiStyle::plain());
    assert_snapshot!(rendered.trim_end(), @r"
    > Expenses
    --------------------------
     # Expense Type     Amount
    --------------------------
     1 Rent           $1000.00
     2 Food             $40.50
       Total          $1040.50
    ");
}
