//! Display formatting for terminal output
//!
//! Plain-text renderings of the state for the non-interactive commands.

pub mod summary;

pub use summary::{
    format_breakdown_table, format_category_list, format_expense_table, format_summary,
    format_totals,
};
