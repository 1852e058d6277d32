//! Entry forms
//!
//! Forms sit between user input and the store. They own the raw text the
//! user typed, validate it, and dispatch an action only once it is valid.
//! The dispatcher is always passed in by the caller.

pub mod add_expense;
pub mod edit_budget;

pub use add_expense::{AddExpenseForm, ExpenseDraft, FormErrors};
pub use edit_budget::{parse_budget, EditBudgetForm};
