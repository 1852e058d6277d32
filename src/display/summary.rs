//! Summary formatting for terminal output
//!
//! Renders a state snapshot the way the home and overview screens show it:
//! budget figures first, then the expense list, then spending by category.

use tabled::{settings::Style, Table, Tabled};

use crate::config::Settings;
use crate::models::Category;
use crate::reports::BudgetSummary;
use crate::store::AppState;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Date")]
    date: String,
}

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Colour")]
    color: String,
}

/// Budget, total, remaining and status lines
pub fn format_totals(summary: &BudgetSummary, settings: &Settings) -> String {
    let status = if summary.alert.is_over() {
        "OVER BUDGET"
    } else {
        "within budget"
    };

    format!(
        "Budget:        {}\nTotal Expense: {}\nRemains:       {}\nStatus:        {}\n",
        settings.format_money(summary.budget),
        settings.format_money(summary.total),
        settings.format_money(summary.remaining),
        status
    )
}

/// Table of recorded expenses in display order
pub fn format_expense_table(state: &AppState, settings: &Settings) -> String {
    if state.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let rows = state.expenses.iter().enumerate().map(|(i, e)| ExpenseRow {
        position: i + 1,
        id: e.id.to_string(),
        category: e.category.to_string(),
        cost: settings.format_money(e.cost),
        date: e
            .date
            .map(|d| settings.format_date(d))
            .unwrap_or_else(|| "-".to_string()),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Table of spending per category
pub fn format_breakdown_table(summary: &BudgetSummary, settings: &Settings) -> String {
    if summary.slices.is_empty() {
        return "No spending to break down.".to_string();
    }

    let rows = summary.slices.iter().map(|slice| BreakdownRow {
        category: slice.category.to_string(),
        spent: settings.format_money(slice.total),
        share: format!("{:.1}%", slice.percentage),
        color: slice.color.hex(),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// The full summary printed by the `summary` command
pub fn format_summary(state: &AppState, settings: &Settings) -> String {
    let summary = BudgetSummary::from_state(state);

    let mut output = String::new();
    output.push_str(&format_totals(&summary, settings));
    output.push('\n');
    output.push_str("Expenses\n");
    output.push_str(&format_expense_table(state, settings));
    output.push_str("\n\nSpending Overview\n");
    output.push_str(&format_breakdown_table(&summary, settings));
    output.push('\n');
    output
}

/// One category per line
pub fn format_category_list() -> String {
    let mut output = String::new();
    for category in Category::ALL {
        output.push_str(category.label());
        output.push('\n');
    }
    output
}
