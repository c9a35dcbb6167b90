//! Generation loop driving a board at a configured pace.
//!
//! Boards only know how to advance one generation. [`run_generations`]
//! repeats that on a timer and decides when to stop:
//!
//! - **Bounded run**: stop after `max_generations` ticks
//! - **Extinction**: stop when no cell is alive
//! - **Stagnation**: stop when the board repeats a recent generation
//! - **Stop signal**: stop when the watch channel flips to `true`
//!
//! Render callbacks attached to the board fire from inside the loop, once
//! per tick.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info};

use lifegrid_board::{Board, BoardError};

use crate::config::RunnerConfig;
use crate::stagnation::StagnationDetector;

/// Errors that can occur during a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A tick failed (its render callback returned an error).
    #[error("board error: {source}")]
    Board {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },
}

/// Reason a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum GenerationEndReason {
    /// Reached the configured `max_generations` limit.
    MaxGenerationsReached,
    /// No cell is alive.
    Extinction,
    /// The board repeated a generation seen `period` ticks earlier.
    Stagnation {
        /// Distance in generations to the matching earlier state.
        period: u64,
    },
    /// The stop signal was raised.
    Stopped,
}

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Why the run ended.
    pub end_reason: GenerationEndReason,
    /// Ticks executed during this run.
    pub ticks: u64,
    /// Board generation when the run ended.
    pub final_generation: u64,
    /// Live cells when the run ended.
    pub final_live_count: usize,
}

/// Tick `board` until a termination condition is met.
///
/// Conditions are checked before every tick, so a board that starts empty
/// (with `stop_on_extinction`) or a stop signal that is already raised ends
/// the run without ticking. Stagnation is checked after each tick.
///
/// # Errors
///
/// Returns [`RunnerError::Board`] if a tick fails; the board keeps the
/// generation it had reached.
pub async fn run_generations(
    board: &mut dyn Board,
    config: &RunnerConfig,
    stop: &watch::Receiver<bool>,
) -> Result<RunResult, RunnerError> {
    let mut detector = StagnationDetector::new(config.stagnation_window);
    detector.observe(board.generation(), board.fingerprint());
    let mut ticks: u64 = 0;

    info!(
        kind = %board.kind(),
        max_generations = config.max_generations,
        tick_interval_ms = config.tick_interval_ms,
        stagnation_window = config.stagnation_window,
        "Run starting"
    );

    let end_reason = loop {
        // --- Check stop signal ---
        if *stop.borrow() {
            info!("Stop signal received");
            break GenerationEndReason::Stopped;
        }

        // --- Check extinction ---
        if config.stop_on_extinction && board.live_count() == 0 {
            info!(generation = board.generation(), "No live cells -- extinction");
            break GenerationEndReason::Extinction;
        }

        // --- Check generation limit ---
        if config.max_generations > 0 && ticks >= config.max_generations {
            info!(
                generation = board.generation(),
                max_generations = config.max_generations,
                "Generation limit reached"
            );
            break GenerationEndReason::MaxGenerationsReached;
        }

        // --- Execute tick ---
        board.tick()?;
        ticks = ticks.saturating_add(1);
        debug!(
            generation = board.generation(),
            live = board.live_count(),
            "Tick complete"
        );

        // --- Check stagnation ---
        if let Some(period) = detector.observe(board.generation(), board.fingerprint()) {
            info!(generation = board.generation(), period, "Board stagnated");
            break GenerationEndReason::Stagnation { period };
        }

        // --- Sleep for tick interval ---
        if config.tick_interval_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(config.tick_interval_ms)).await;
        }
    };

    Ok(RunResult {
        end_reason,
        ticks,
        final_generation: board.generation(),
        final_live_count: board.live_count(),
    })
}

/// Log the end of a run.
pub fn log_run_end(result: &RunResult) {
    info!(
        reason = ?result.end_reason,
        ticks = result.ticks,
        final_generation = result.final_generation,
        final_live_count = result.final_live_count,
        "Run ended"
    );
}
