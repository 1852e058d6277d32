//! State store for the budget planner
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ AppState ──→ View
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **AppState**: immutable snapshot of budget and expenses
//! - **Action**: a requested transition (add, delete, set budget)
//! - **Reducer**: pure function producing the next snapshot
//!
//! The [`Store`] is passed explicitly to whoever needs it; there is no global
//! instance. Mutation requires `&mut Store`, so all actions are applied one
//! at a time.

pub mod action;
pub mod reducer;
pub mod replay;
pub mod state;

use std::sync::Arc;

pub use action::{Action, ActionRecord};
pub use reducer::{reduce, BudgetReducer, Reducer};
pub use replay::replay;
pub use state::AppState;

/// Anything that accepts actions
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

/// Owner of the current state snapshot
#[derive(Debug, Clone)]
pub struct Store {
    state: Arc<AppState>,
    applied: u64,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
            applied: 0,
        }
    }

    /// Borrow the current snapshot
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// A shared handle to the current snapshot
    ///
    /// The handle keeps seeing the same state after later dispatches.
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Number of recognized actions applied so far
    pub fn applied(&self) -> u64 {
        self.applied
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::initial())
    }
}

impl Dispatch for Store {
    fn dispatch(&mut self, action: Action) {
        if !action.is_recognized() {
            tracing::debug!(kind = action.kind(), "ignoring unrecognized action");
            return;
        }

        let kind = action.kind().to_string();
        let next = BudgetReducer::reduce(AppState::clone(&self.state), action);
        self.state = Arc::new(next);
        self.applied += 1;

        tracing::debug!(
            action = %kind,
            expenses = self.state.expenses.len(),
            budget = %self.state.budget,
            "applied action"
        );
    }
}

/// Records every dispatched action without applying it
impl Dispatch for Vec<Action> {
    fn dispatch(&mut self, action: Action) {
        self.push(action);
    }
}
