//! Derived values
//!
//! Pure functions over a state snapshot. Nothing is cached and nothing flows
//! back into the store.

pub mod breakdown;
pub mod overview;

pub use breakdown::{
    breakdown_slices, category_breakdown, category_color, CategorySlice, Rgb,
};
pub use overview::{alert_level, remaining, total_expenses, AlertLevel, BudgetSummary};
