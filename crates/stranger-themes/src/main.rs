//! Stranger Themes - theme propagation demo
//!
//! Builds the three surfaces, replays scripted user actions and logs the
//! theme every surface ends up with.

use std::path::PathBuf;

use clap::Parser;
use stranger_themes::script::ScriptStep;
use stranger_themes::targets;
use stranger_themes::{AppConfig, TabContainer};
use stranger_themes_core::ThemeChannel;
use tracing_subscriber::EnvFilter;

/// Stranger Themes - light/dark theme propagation demo
#[derive(Parser, Debug)]
#[command(name = "stranger-themes")]
#[command(about = "Replay theme selections across the demo surfaces", long_about = None)]
struct Args {
    /// Path to a TOML config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Comma separated actions: plain:light, plain:dark, list:ROW, grid:ITEM
    #[arg(long, value_name = "ACTIONS", value_delimiter = ',')]
    script: Vec<ScriptStep>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let event_loop = config.event_loop();
    let channel = ThemeChannel::new(event_loop.handle(), config.failure_policy());
    let container = TabContainer::new(&channel, config.initial_theme)?;
    event_loop.run_until_idle()?;

    for step in args.script {
        container.run_step(step)?;
        let delivered = event_loop.run_until_idle()?;
        tracing::info!(target: targets::SURFACE, %step, delivered, "step complete");
    }

    for (kind, theme) in container.themes() {
        tracing::info!(target: targets::SURFACE, surface = %kind, %theme, "final theme");
    }
    Ok(())
}
