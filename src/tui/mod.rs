//! Terminal User Interface module
//!
//! A ratatui front end over the store: a home screen with the expense list,
//! a spending overview, and dialogs to add an expense or change the budget.

pub mod app;
pub mod dialogs;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
