//! Headless engine binary for Lifegrid.
//!
//! Loads configuration, builds the configured board, and runs the paced
//! generation loop until a termination condition is met or Ctrl-C is
//! pressed.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `lifegrid-config.yaml` (or `LIFEGRID_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build the board and attach the logging render callback
//! 4. Install the Ctrl-C stop signal
//! 5. Run the generation loop
//! 6. Log the result

mod error;
mod render_log;

use std::path::PathBuf;

use lifegrid_core::config::LifegridConfig;
use lifegrid_core::factory::build_board;
use lifegrid_core::runner;
use lifegrid_types::RunId;
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::render_log::TracingRender;

/// Environment variable naming the configuration file.
const CONFIG_PATH_ENV: &str = "LIFEGRID_CONFIG";

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "lifegrid-config.yaml";

/// Generations between `info`-level summaries from the render callback.
const SUMMARY_EVERY: u64 = 50;

/// Application entry point for the engine.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the board cannot be
/// built, or a render callback fails during the run.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration (the log level comes from it).
    let (config, config_path) = load_config()?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    let run_id = RunId::new();
    info!(%run_id, "lifegrid-engine starting");
    match &config_path {
        Some(path) => info!(path = %path.display(), "Configuration loaded"),
        None => warn!("No configuration file found, using defaults"),
    }
    info!(
        kind = %config.board.kind,
        width = config.board.width,
        height = config.board.height,
        max_generations = config.runner.max_generations,
        tick_interval_ms = config.runner.tick_interval_ms,
        "Effective configuration"
    );

    // 3. Build the board.
    let mut board = build_board(&config.board).map_err(EngineError::from)?;
    board.set_render_callback(Some(Box::new(TracingRender::new(run_id, SUMMARY_EVERY))));

    // 4. Ctrl-C raises the stop signal; the runner sees it before its next tick.
    let (stop_tx, stop_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl-C received, stopping");
            let _ = stop_tx.send(true);
        }
    });

    // 5. Run.
    let result = runner::run_generations(board.as_mut(), &config.runner, &stop_rx)
        .await
        .map_err(EngineError::from)?;

    // 6. Report.
    runner::log_run_end(&result);
    info!(%run_id, "lifegrid-engine finished");
    Ok(())
}

/// Load configuration from `LIFEGRID_CONFIG` or the default path.
///
/// A missing file is not an error: the defaults are used and the returned
/// path is `None`.
fn load_config() -> Result<(LifegridConfig, Option<PathBuf>), EngineError> {
    let path = std::env::var(CONFIG_PATH_ENV)
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    if path.exists() {
        let config = LifegridConfig::from_file(&path)?;
        Ok((config, Some(path)))
    } else {
        let config = LifegridConfig::parse("")?;
        Ok((config, None))
    }
}
