//! Reducer for the budget state
//!
//! The reducer is the only place where state transitions happen. It is a
//! pure function of `(state, action)`: no I/O, no clock, no id generation.

use super::action::Action;
use super::state::AppState;

/// Reducer transforms state based on actions.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State;

    /// The action type this reducer handles.
    type Action;

    /// Process an action and return the new state.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}

pub struct BudgetReducer;

impl Reducer for BudgetReducer {
    type State = AppState;
    type Action = Action;

    fn reduce(state: AppState, action: Action) -> AppState {
        match action {
            Action::AddExpense(expense) => {
                // A repeated id would break lookup and deletion by id.
                if state.contains(expense.id) {
                    return state;
                }
                let mut expenses = state.expenses;
                expenses.push(expense);
                AppState { expenses, ..state }
            }
            Action::DeleteExpense(id) => {
                let mut expenses = state.expenses;
                expenses.retain(|e| e.id != id);
                AppState { expenses, ..state }
            }
            Action::SetBudget(budget) => AppState { budget, ..state },
            Action::Unrecognized(_) => state,
        }
    }
}

/// Reduce a borrowed snapshot, leaving it untouched
pub fn reduce(state: &AppState, action: Action) -> AppState {
    BudgetReducer::reduce(state.clone(), action)
}
