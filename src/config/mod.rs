//! Configuration module for the budget planner
//!
//! This module provides:
//! - Platform-aware path resolution
//! - Read-only user settings with defaults

pub mod paths;
pub mod settings;

pub use paths::PlannerPaths;
pub use settings::Settings;
