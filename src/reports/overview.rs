//! Budget overview
//!
//! Totals, remaining balance, and the over/under classification. Everything
//! here is recomputed from the snapshot on every call.

use std::fmt;

use crate::models::Money;
use crate::store::AppState;

use super::breakdown::{breakdown_slices, CategorySlice};

/// Whether spending has exceeded the budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    /// Total spending is at or below the budget
    Under,
    /// Total spending is strictly above the budget
    Over,
}

impl AlertLevel {
    pub fn is_over(self) -> bool {
        self == Self::Over
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Under => write!(f, "under"),
            Self::Over => write!(f, "over"),
        }
    }
}

/// Sum of all expense costs; zero when there are none
pub fn total_expenses(state: &AppState) -> Money {
    state.expenses.iter().map(|e| e.cost).sum()
}

/// Budget minus total spending; negative when overspent
pub fn remaining(state: &AppState) -> Money {
    state.budget - total_expenses(state)
}

pub fn alert_level(state: &AppState) -> AlertLevel {
    if total_expenses(state) > state.budget {
        AlertLevel::Over
    } else {
        AlertLevel::Under
    }
}

/// Everything the home and overview screens display, computed in one place
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub budget: Money,
    pub total: Money,
    pub remaining: Money,
    pub alert: AlertLevel,
    pub expense_count: usize,
    pub slices: Vec<CategorySlice>,
}

impl BudgetSummary {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            budget: state.budget,
            total: total_expenses(state),
            remaining: remaining(state),
            alert: alert_level(state),
            expense_count: state.expenses.len(),
            slices: breakdown_slices(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense};

    fn state_with(budget_cents: i64, costs: &[i64]) -> AppState {
        AppState {
            budget: Money::from_cents(budget_cents),
            expenses: costs
                .iter()
                .map(|&c| Expense::undated(Category::Food, Money::from_cents(c)))
                .collect(),
        }
    }

    #[test]
    fn test_huge_costs_saturate_instead_of_overflowing() {
        use crate::forms::AddExpenseForm;
        use crate::store::Store;

        let mut store = Store::new(AppState::with_budget(Money::from_cents(200_000)));
        for _ in 0..2 {
            let mut form = AddExpenseForm::new();
            form.cost = "50000000000000000".into();
            form.submit(&mut store).unwrap();
        }

        let state = store.state();
        assert_eq!(total_expenses(state), Money::from_cents(i64::MAX));
        assert_eq!(alert_level(state), AlertLevel::Over);
        assert!(remaining(state).is_negative());

        let summary = BudgetSummary::from_state(state);
        assert_eq!(summary.slices.len(), 1);
        assert_eq!(summary.slices[0].total, Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_initial_state_scenario() {
        let state = AppState::initial();
        assert_eq!(total_expenses(&state), Money::from_cents(32_530));
        assert_eq!(remaining(&state), Money::from_cents(167_470));
        assert_eq!(alert_level(&state), AlertLevel::Under);
    }

    #[test]
    fn test_empty_total_is_zero() {
        let state = state_with(1000, &[]);
        assert_eq!(total_expenses(&state), Money::zero());
        assert_eq!(remaining(&state), Money::from_cents(1000));
    }

    #[test]
    fn test_total_is_additive() {
        let left = state_with(0, &[100, 250, 3]);
        let right = state_with(0, &[999, 1]);
        let mut joined = left.clone();
        joined.expenses.extend(right.expenses.iter().cloned());

        assert_eq!(
            total_expenses(&joined),
            total_expenses(&left) + total_expenses(&right)
        );
    }

    #[test]
    fn test_remaining_identity_and_negative() {
        for (budget, costs) in [(0, vec![]), (500, vec![200, 300]), (500, vec![600, 1])] {
            let state = state_with(budget, &costs);
            assert_eq!(remaining(&state), state.budget - total_expenses(&state));
        }
        assert_eq!(remaining(&state_with(500, &[600])), Money::from_cents(-100));
    }

    #[test]
    fn test_alert_uses_strict_inequality() {
        assert_eq!(alert_level(&state_with(500, &[200, 300])), AlertLevel::Under);
        assert_eq!(alert_level(&state_with(500, &[200, 301])), AlertLevel::Over);
        assert_eq!(alert_level(&state_with(500, &[])), AlertLevel::Under);
        assert_eq!(alert_level(&state_with(0, &[])), AlertLevel::Under);
    }

    #[test]
    fn test_summary_matches_functions() {
        let state = AppState::initial();
        let summary = BudgetSummary::from_state(&state);

        assert_eq!(summary.budget, state.budget);
        assert_eq!(summary.total, total_expenses(&state));
        assert_eq!(summary.remaining, remaining(&state));
        assert_eq!(summary.alert, AlertLevel::Under);
        assert_eq!(summary.expense_count, 3);
        assert_eq!(summary.slices.len(), 3);
        assert_eq!(AlertLevel::Over.to_string(), "over");
    }
}
