//! Felt Board - terminal felt input panel for roulette-style betting trackers.
//!
//! Renders the 37 pockets of a European table plus an undo control, and
//! translates clicks into normalized input tokens for a bet engine.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use feltboard::config::{Config, ThemeMode};
use feltboard::constants::{APP_BINARY_NAME, APP_NAME};
use feltboard::tui;

/// Felt Board - terminal felt input panel
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to an explicit config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the chrome theme: auto, dark, or light
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,
}

fn parse_theme(mode: &str) -> Result<ThemeMode> {
    match mode.to_ascii_lowercase().as_str() {
        "auto" => Ok(ThemeMode::Auto),
        "dark" => Ok(ThemeMode::Dark),
        "light" => Ok(ThemeMode::Light),
        other => anyhow::bail!(
            "Unknown theme '{other}'. Expected auto, dark, or light \
             (e.g. {APP_BINARY_NAME} --theme dark)"
        ),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    println!("Terminal felt input panel");
    println!();

    // Explicit config must load; the default location may simply not exist yet
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => {
            if Config::exists() {
                Config::load().context("Failed to load config")?
            } else {
                Config::default()
            }
        }
    };

    if let Some(mode) = &cli.theme {
        config.ui.theme_mode = parse_theme(mode)?;
    }

    // Build the panel before touching the terminal so config errors print cleanly
    let mut app = tui::App::new(config)?;

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut app, &mut terminal);
    tui::restore_terminal(terminal)?;
    result
}
