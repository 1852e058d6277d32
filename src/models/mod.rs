//! Core data models for the budget planner
//!
//! Expenses, their categories and ids, and the fixed-point money type used
//! for every amount.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{Category, UnknownCategory};
pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
