//! The contract shared by both board strategies.

use lifegrid_types::{BoardKind, BoardSnapshot};

use crate::error::BoardError;
use crate::render::RenderCallback;
use crate::state::BoardState;

/// A Game of Life board that advances one generation per [`tick`].
///
/// Implemented by [`SparseBoard`] (unbounded plane) and [`DenseBoard`]
/// (fixed grid with hard edges). Both notify their render callback once per
/// tick and once per effective cell write, synchronously, and return the
/// callback's error unmodified.
///
/// [`tick`]: Board::tick
/// [`SparseBoard`]: crate::SparseBoard
/// [`DenseBoard`]: crate::DenseBoard
pub trait Board: Send {
    /// Storage strategy of this board.
    fn kind(&self) -> BoardKind;

    /// Number of ticks applied since construction.
    fn generation(&self) -> u64;

    /// Whether `(x, y)` is alive. Cells a board cannot represent are dead.
    fn is_alive(&self, x: i32, y: i32) -> bool;

    /// Number of live cells.
    fn live_count(&self) -> usize;

    /// Set or clear the cell at `(x, y)` and notify the render callback.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Render`] if the render callback fails.
    fn set_cell_by_cardinal(&mut self, x: i32, y: i32, alive: bool) -> Result<(), BoardError>;

    /// Advance one generation and notify the render callback.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Render`] if the render callback fails. The new
    /// generation is already in place when that happens.
    fn tick(&mut self) -> Result<(), BoardError>;

    /// Borrow a read-only view of the current generation.
    fn board_state(&self) -> BoardState<'_>;

    /// Install or remove the render callback.
    fn set_render_callback(&mut self, callback: Option<Box<dyn RenderCallback>>);

    /// Copy the current generation into an owned snapshot.
    fn snapshot(&self) -> BoardSnapshot {
        self.board_state().to_snapshot()
    }

    /// Hash of the current live-cell content.
    fn fingerprint(&self) -> u64 {
        self.board_state().fingerprint()
    }
}
