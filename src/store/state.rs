//! The aggregate state owned by the store

use serde::Serialize;

use crate::config::settings::{Settings, DEFAULT_BUDGET_UNITS};
use crate::models::{Category, Expense, ExpenseId, Money};

/// Budget plus the ordered list of recorded expenses
///
/// Expense ids are unique; insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppState {
    pub budget: Money,
    pub expenses: Vec<Expense>,
}

impl AppState {
    /// The state a fresh session starts from: a budget of 2000 and three
    /// sample expenses
    pub fn initial() -> Self {
        Self {
            budget: Money::from_units_cents(DEFAULT_BUDGET_UNITS, 0),
            expenses: sample_expenses(),
        }
    }

    /// An empty state with the given budget
    pub fn with_budget(budget: Money) -> Self {
        Self {
            budget,
            expenses: Vec::new(),
        }
    }

    /// Build the starting state from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        let expenses = if settings.seed_sample_expenses {
            sample_expenses()
        } else {
            Vec::new()
        };
        Self {
            budget: settings.starting_budget(),
            expenses,
        }
    }

    /// Look up an expense by id
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Whether an expense with this id is recorded
    pub fn contains(&self, id: ExpenseId) -> bool {
        self.expense(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

/// The three undated sample expenses, each with a fresh id
pub fn sample_expenses() -> Vec<Expense> {
    vec![
        Expense::undated(Category::Food, Money::from_units_cents(20, 0)),
        Expense::undated(Category::Leisure, Money::from_units_cents(300, 0)),
        Expense::undated(Category::Transport, Money::from_units_cents(5, 30)),
    ]
}
