//! Render callback that reports each generation through `tracing`.
//!
//! The engine is headless; this observer stands in for a drawing layer.
//! Every notification is logged at `debug`, and every
//! `summary_every`-th generation also at `info`.

use lifegrid_board::{BoardState, RenderCallback, RenderError};
use lifegrid_types::RunId;
use tracing::{debug, info};

/// Observer that logs board notifications.
#[derive(Debug, Clone)]
pub struct TracingRender {
    run_id: RunId,
    summary_every: u64,
    notifications: u64,
}

impl TracingRender {
    /// Create an observer for `run_id` that summarizes every
    /// `summary_every` generations (0 disables summaries).
    pub const fn new(run_id: RunId, summary_every: u64) -> Self {
        Self {
            run_id,
            summary_every,
            notifications: 0,
        }
    }

    fn is_summary_generation(&self, generation: u64) -> bool {
        generation > 0
            && generation
                .checked_rem(self.summary_every)
                .is_some_and(|rem| rem == 0)
    }
}

impl RenderCallback for TracingRender {
    fn on_render(&mut self, state: &BoardState<'_>) -> Result<(), RenderError> {
        self.notifications = self.notifications.saturating_add(1);
        let generation = state.generation();
        let changed = state.changed_coords().len();

        debug!(
            run_id = %self.run_id,
            kind = %state.kind(),
            generation,
            live = state.live_count(),
            changed,
            "Board rendered"
        );

        if self.is_summary_generation(generation) {
            info!(
                run_id = %self.run_id,
                generation,
                live = state.live_count(),
                notifications = self.notifications,
                "Generation summary"
            );
        }
        Ok(())
    }
}
