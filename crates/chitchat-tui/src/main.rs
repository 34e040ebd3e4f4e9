mod input;
mod render;
mod runtime;
mod tracing_setup;
mod ui;

use anyhow::Result;
use chitchat_core::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use chitchat_core::CoreConfig;
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;

use crate::runtime::run_app;
use ui::App;

/// Terminal messaging client with date-grouped conversations
#[derive(Parser, Debug)]
#[command(name = "chitchat", version, about)]
struct Args {
    /// Config file (defaults to <config dir>/chitchat/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (or set CHITCHAT_LOG_FILE)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Outer corner radius of a card run
    #[arg(long)]
    default_radius: Option<f32>,

    /// Corner radius between stacked cards
    #[arg(long)]
    inner_radius: Option<f32>,

    /// Corner radius of a hovered card
    #[arg(long)]
    hover_radius: Option<f32>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// File config with command-line overrides on top
fn load_config(args: &Args) -> Result<CoreConfig> {
    let mut config = match args.config.clone().or_else(default_config_path) {
        Some(path) => CoreConfig::load(&path)?,
        None => CoreConfig::default(),
    };

    let geometry = &mut config.geometry;
    if let Some(radius) = args.default_radius {
        geometry.default_radius = radius;
    }
    if let Some(radius) = args.inner_radius {
        geometry.inner_radius = radius;
    }
    if let Some(radius) = args.hover_radius {
        geometry.hover_radius = radius;
    }
    config.geometry = config.geometry.sanitized();
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    tracing_setup::init_tracing(tracing_setup::resolve_log_path(args.log_file.clone()))?;

    let config = load_config(&args)?;
    tracing::info!(?config, "starting chitchat");

    ui::terminal::install_panic_hook();

    let mut app = App::new(config, Local::now().naive_local());
    let mut terminal = ui::init_terminal()?;
    let result = run_app(&mut terminal, &mut app).await;
    ui::restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "chitchat exited with an error");
        eprintln!("Error: {}", e);
    }

    Ok(())
}
