//! Reusable widgets for the TUI

pub mod input;

pub use input::{error_line, FormField};
