//! Owned, serializable board snapshots for external renderers.
//!
//! Boards hand observers a borrowed view during a render notification. A
//! renderer that needs to keep the data past that call (to diff frames,
//! ship it across a channel, or serialize it for a browser canvas) converts
//! the view into a [`BoardSnapshot`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::coord::{Coord, row_major_index};

/// Storage strategy of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum BoardKind {
    /// Unbounded plane storing only live cells.
    Sparse,
    /// Fixed `width x height` grid with hard edges.
    Dense,
}

impl core::fmt::Display for BoardKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Sparse => write!(f, "sparse"),
            Self::Dense => write!(f, "dense"),
        }
    }
}

/// Cell payload of a snapshot, shaped by the board's storage strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum SnapshotCells {
    /// Live cells of a sparse board, sorted row-major by `(y, x)`.
    Sparse {
        /// Coordinates of every live cell.
        live: Vec<Coord>,
    },
    /// Every cell of a dense board in row-major order.
    Dense {
        /// Grid width in cells.
        width: u32,
        /// Grid height in cells.
        height: u32,
        /// `width * height` cell states indexed by `y * width + x`.
        cells: Vec<bool>,
    },
}

/// A frozen copy of a board at one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BoardSnapshot {
    /// Generation the snapshot was taken at (0 = seed).
    pub generation: u64,
    /// Number of live cells.
    pub live_count: usize,
    /// Cell payload.
    pub cells: SnapshotCells,
}

impl BoardSnapshot {
    /// Storage strategy of the board this snapshot came from.
    pub const fn kind(&self) -> BoardKind {
        match self.cells {
            SnapshotCells::Sparse { .. } => BoardKind::Sparse,
            SnapshotCells::Dense { .. } => BoardKind::Dense,
        }
    }

    /// Whether the cell at `(x, y)` was alive. Cells outside a dense grid
    /// are reported dead.
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        match &self.cells {
            SnapshotCells::Sparse { live } => live
                .binary_search_by_key(&(y, x), |c| (c.y, c.x))
                .is_ok(),
            SnapshotCells::Dense {
                width,
                height,
                cells,
            } => row_major_index(*width, *height, x, y)
                .and_then(|i| cells.get(i).copied())
                .unwrap_or(false),
        }
    }

    /// Coordinates of every live cell in row-major order.
    pub fn live_coords(&self) -> Vec<Coord> {
        match &self.cells {
            SnapshotCells::Sparse { live } => live.clone(),
            SnapshotCells::Dense {
                width,
                height,
                cells,
            } => cells
                .iter()
                .enumerate()
                .filter(|(_, alive)| **alive)
                .filter_map(|(i, _)| crate::coord::row_major_coord(*width, *height, i))
                .collect(),
        }
    }
}
