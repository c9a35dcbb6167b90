//! Board construction from configuration.

use lifegrid_board::{Board, BoardError, DenseBoard, SparseBoard};
use lifegrid_types::BoardKind;
use tracing::info;

use crate::config::BoardConfig;

/// Build the board strategy selected by `config.kind`.
///
/// # Errors
///
/// Returns [`BoardError::InvalidDimensions`] or [`BoardError::InvalidDensity`]
/// if a dense board cannot be built from the configuration.
pub fn build_board(config: &BoardConfig) -> Result<Box<dyn Board>, BoardError> {
    let board: Box<dyn Board> = match config.kind {
        BoardKind::Sparse => Box::new(SparseBoard::new()),
        BoardKind::Dense => Box::new(DenseBoard::new(
            config.width,
            config.height,
            config.dense_seed(),
        )?),
    };
    info!(
        kind = %board.kind(),
        live = board.live_count(),
        "Board constructed"
    );
    Ok(board)
}
