//! Tracing setup
//!
//! When `BUDGET_PLANNER_LOG` names a file, events go there (the only option
//! while the TUI owns the terminal). Otherwise command-line commands log to
//! stderr and the TUI does not log at all.

use std::fs::OpenOptions;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log file path
pub const LOG_ENV_VAR: &str = "BUDGET_PLANNER_LOG";

/// Where log output may go when no log file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Stderr,
    Silent,
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this twice is
/// harmless; the second call is ignored.
pub fn init_tracing(default_filter: &str, fallback: Fallback) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if let Ok(path) = std::env::var(LOG_ENV_VAR) {
        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Warning: failed to open log file {}: {}", path, e);
                return;
            }
        };

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_level(true);

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .try_init();
        return;
    }

    if fallback == Fallback::Stderr {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}
