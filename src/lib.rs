//! Budget Planner - a single-budget expense tracker for the terminal
//!
//! This library holds one spending budget and a list of expenses, and
//! derives the figures a user cares about: total spent, what remains, and
//! where the money went by category.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses)
//! - `store`: State snapshot, actions and the reducer
//! - `reports`: Derived values (totals, remaining, category breakdown)
//! - `forms`: Validated entry forms that dispatch into the store
//! - `display`: Plain-text tables for the command line
//! - `logging`: Tracing subscriber setup
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use budget_planner::reports::remaining;
//! use budget_planner::store::{AppState, Dispatch, Store, Action};
//! use budget_planner::models::Money;
//!
//! let mut store = Store::new(AppState::initial());
//! store.dispatch(Action::SetBudget(Money::from_cents(100_000)));
//! assert_eq!(remaining(store.state()), Money::from_cents(67_470));
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod forms;
pub mod logging;
pub mod models;
pub mod reports;
pub mod store;
pub mod tui;

pub use error::{PlannerError, PlannerResult};
