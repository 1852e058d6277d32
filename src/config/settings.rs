//! User settings for the budget planner
//!
//! Settings are read once at startup. They shape the initial state and the
//! presentation of amounts; they are never written back implicitly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use super::paths::PlannerPaths;
use crate::error::PlannerError;
use crate::models::Money;

/// Budget used when no settings file overrides it
pub const DEFAULT_BUDGET_UNITS: i64 = 2000;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Starting budget in whole currency units
    #[serde(default = "default_starting_budget")]
    pub starting_budget: i64,

    /// Whether the three sample expenses are recorded at startup
    #[serde(default = "default_true")]
    pub seed_sample_expenses: bool,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Default tracing filter when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_starting_budget() -> i64 {
    DEFAULT_BUDGET_UNITS
}

fn default_true() -> bool {
    true
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            starting_budget: default_starting_budget(),
            seed_sample_expenses: default_true(),
            date_format: default_date_format(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// The configured starting budget as money
    ///
    /// Negative or overflowing values fall back to the default budget.
    pub fn starting_budget(&self) -> Money {
        if self.starting_budget < 0 {
            return Money::from_units_cents(DEFAULT_BUDGET_UNITS, 0);
        }
        Money::checked_from_units(self.starting_budget)
            .unwrap_or_else(|| Money::from_units_cents(DEFAULT_BUDGET_UNITS, 0))
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Format a date with the configured format, falling back to ISO 8601
    /// when the format string is invalid
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            return date.to_string();
        }
        out
    }

    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &PlannerPaths) -> Result<Self, PlannerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PlannerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| PlannerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PlannerPaths) -> Result<(), PlannerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PlannerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PlannerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.starting_budget(), Money::from_cents(200_000));
        assert!(settings.seed_sample_expenses);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".into(),
            starting_budget: 1500,
            seed_sample_expenses: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.format_money(Money::from_cents(530)), "€5.30");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{ "starting_budget": 750 }"#).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.starting_budget(), Money::from_cents(75_000));
        assert_eq!(loaded.currency_symbol, "$");
        assert!(loaded.seed_sample_expenses);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, PlannerError::Config(_)));
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let mut settings = Settings::default();
        assert_eq!(settings.format_date(date), "2025-03-14");

        settings.date_format = "%d/%m/%Y".into();
        assert_eq!(settings.format_date(date), "14/03/2025");

        settings.date_format = "%Q".into();
        assert_eq!(settings.format_date(date), "2025-03-14");
    }

    #[test]
    fn test_invalid_starting_budget_falls_back() {
        let settings = Settings {
            starting_budget: -5,
            ..Settings::default()
        };
        assert_eq!(settings.starting_budget(), Money::from_cents(200_000));
    }
}
