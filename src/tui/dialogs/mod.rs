//! Dialog windows drawn over the current view

pub mod add_expense;
pub mod edit_budget;
pub mod help;
