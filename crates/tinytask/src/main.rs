//! CLI entry point for tinytask.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tinytask_app::{AppearanceService, FileSettingsStore};
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt::format::FmtSpan};

mod commands;
mod config;
mod tui;

/// A single-screen task list for the terminal.
#[derive(Parser, Debug)]
#[command(
    name = "tinytask",
    version,
    about = "tinytask: a colourful single-screen todo list"
)]
struct Cli {
    /// Settings file holding the dark-mode preference.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Configuration file with palette and keybindings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Launch the interactive terminal UI (default).
    Tui,

    /// Show or change the light/dark appearance.
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Manage the configuration file.
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
enum ThemeAction {
    /// Print the current appearance.
    #[default]
    Show,
    /// Switch to the light appearance.
    Light,
    /// Switch to the dark appearance.
    Dark,
    /// Flip between light and dark.
    Toggle,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a configuration file populated with the defaults.
    Init {
        /// Destination path (defaults to the user config directory).
        #[arg(long)]
        output: Option<PathBuf>,
        /// Overwrite without asking.
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let Cli {
        settings,
        config,
        cmd,
    } = Cli::parse();

    install_tracing();
    execute_command(
        settings.as_deref(),
        config.as_deref(),
        cmd.unwrap_or(Command::Tui),
    )
}

fn execute_command(
    settings_path: Option<&Path>,
    config_path: Option<&Path>,
    command: Command,
) -> Result<()> {
    match command {
        Command::Tui => {
            let config = config::load_config(config_path)?.unwrap_or_default();
            let appearance = AppearanceService::new(open_settings(settings_path)?)?;
            tui::run(appearance, config)
        }
        Command::Theme { action } => {
            let mut appearance = AppearanceService::new(open_settings(settings_path)?)?;
            commands::run_theme(
                &mut appearance,
                action.unwrap_or_default(),
                &mut io::stdout().lock(),
            )
        }
        Command::Config {
            action: ConfigCommand::Init { output, force },
        } => config::init_config(output.as_deref(), force),
    }
}

fn open_settings(path: Option<&Path>) -> Result<FileSettingsStore> {
    let store = match path {
        Some(path) => FileSettingsStore::open(path)?,
        None => FileSettingsStore::open_default()?,
    };
    Ok(store)
}

fn install_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(directives.as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(io::stderr)
        .compact()
        .try_init();
}

/// Filter from `RUST_LOG`-style directives, INFO when none are given.
fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}
