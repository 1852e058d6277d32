use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use budget_planner::config::{PlannerPaths, Settings};
use budget_planner::display::{format_category_list, format_summary};
use budget_planner::logging::{init_tracing, Fallback};
use budget_planner::store::{replay, AppState, Store};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Track spending against a single budget",
    long_about = "Budget Planner keeps one spending budget and a list of expenses, \
                  and shows how much remains and where the money went."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Print the budget summary, optionally after replaying recorded actions
    Summary {
        /// File with one JSON action record per line
        #[arg(short, long)]
        actions: Option<PathBuf>,

        /// Start from an empty expense list instead of the sample expenses
        #[arg(long)]
        empty: bool,
    },

    /// List the expense categories
    Categories,

    /// Show current configuration and paths
    Config,

    /// Write a default settings file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PlannerPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;

    let fallback = if matches!(cli.command, None | Some(Commands::Tui)) {
        Fallback::Silent
    } else {
        Fallback::Stderr
    };
    init_tracing(&settings.log_filter, fallback);

    match cli.command {
        None | Some(Commands::Tui) => {
            let store = Store::new(AppState::from_settings(&settings));
            budget_planner::tui::run_tui(store, &settings)?;
        }
        Some(Commands::Summary { actions, empty }) => {
            let state = if empty {
                AppState::with_budget(settings.starting_budget())
            } else {
                AppState::from_settings(&settings)
            };
            let mut store = Store::new(state);

            if let Some(path) = actions {
                let file = File::open(&path)
                    .with_context(|| format!("Failed to open action file {}", path.display()))?;
                let count = replay(BufReader::new(file), &mut store)
                    .with_context(|| format!("Failed to replay {}", path.display()))?;
                tracing::info!(count, applied = store.applied(), "replayed actions");
            }

            print!("{}", format_summary(store.state(), &settings));
        }
        Some(Commands::Categories) => {
            print!("{}", format_category_list());
        }
        Some(Commands::Config) => {
            println!("Budget Planner Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!(
                "Initialized:      {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!(
                "  Starting budget:   {}",
                settings.format_money(settings.starting_budget())
            );
            println!("  Sample expenses:   {}", settings.seed_sample_expenses);
            println!("  Date format:       {}", settings.date_format);
            println!("  Log filter:        {}", settings.log_filter);
        }
        Some(Commands::Init) => {
            println!("Initializing Budget Planner at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!(
                "Starting budget is {}. Edit {} to change it.",
                settings.format_money(settings.starting_budget()),
                paths.settings_file().display()
            );
        }
    }

    Ok(())
}
