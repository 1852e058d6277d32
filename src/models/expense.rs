//! Expense model
//!
//! An expense is immutable once recorded: it enters the state through an
//! add action and leaves it through a delete action matched by id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned at construction
    pub id: ExpenseId,

    /// Spending category
    pub category: Category,

    /// Amount spent
    pub cost: Money,

    /// When the expense happened. Sample expenses carry no date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Expense {
    /// Create a dated expense with a fresh id
    pub fn new(category: Category, cost: Money, date: NaiveDate) -> Self {
        Self {
            id: ExpenseId::new(),
            category,
            cost,
            date: Some(date),
        }
    }

    /// Create an undated expense with a fresh id
    pub fn undated(category: Category, cost: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            category,
            cost,
            date: None,
        }
    }

    /// Replace the generated id (for callers that already own one)
    pub fn with_id(mut self, id: ExpenseId) -> Self {
        self.id = id;
        self
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => write!(f, "{} {} ({})", self.category, self.cost, date),
            None => write!(f, "{} {}", self.category, self.cost),
        }
    }
}
