mod app;
mod console;
mod script;
mod theme;

use anyhow::Result;
use std::{
    fs::{self, OpenOptions},
    io,
};

use jackroulette_core::{
    config::{self, AppConfig},
    RandomSource,
};
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::{app::RouletteApp, console::Console};

fn main() -> Result<()> {
    init_logging()?;

    let config_path = config::default_config_path();
    let config = AppConfig::load_from(config_path.clone())?;
    info!(
        path = ?config_path,
        found = config_path.as_deref().map(config::config_file_exists).unwrap_or(false),
        seed = ?config.seed,
        "configuration loaded"
    );

    let source = match config.seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock(), config.pacing.clone());
    let mut app = RouletteApp::new(console, config, source);
    app.run()
}

// Log to `logs/jackroulette.log` when `RUST_LOG` is set; the terminal itself
// belongs to the game.
fn init_logging() -> Result<()> {
    let Ok(env_filter) = EnvFilter::try_from_default_env() else {
        return Ok(());
    };

    let log_dir = std::env::current_dir()?.join("logs");
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("jackroulette.log");

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .compact()
        .with_writer(move || {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .expect("failed to open log file")
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(())
}
