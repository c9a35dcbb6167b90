//! Read-only views of a board handed to render callbacks.
//!
//! A [`BoardState`] borrows the board's cell store, so it cannot outlive the
//! notification that produced it and cannot be used to mutate the board.
//! [`BoardState::to_snapshot`] copies it into an owned [`BoardSnapshot`].

use std::collections::BTreeSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use lifegrid_types::{
    BoardKind, BoardSnapshot, Coord, CoordKey, SnapshotCells, row_major_coord, row_major_index,
};

/// View of a board at one point in time.
#[derive(Debug, Clone, Copy)]
pub enum BoardState<'a> {
    /// View of a [`SparseBoard`](crate::SparseBoard).
    Sparse(SparseView<'a>),
    /// View of a [`DenseBoard`](crate::DenseBoard).
    Dense(DenseView<'a>),
}

impl BoardState<'_> {
    /// Storage strategy of the viewed board.
    pub const fn kind(&self) -> BoardKind {
        match self {
            Self::Sparse(_) => BoardKind::Sparse,
            Self::Dense(_) => BoardKind::Dense,
        }
    }

    /// Generation number (0 = seed).
    pub const fn generation(&self) -> u64 {
        match self {
            Self::Sparse(view) => view.generation,
            Self::Dense(view) => view.generation,
        }
    }

    /// Whether `(x, y)` is alive. Outside a dense grid this is `false`.
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        match self {
            Self::Sparse(view) => view.get_cell(x, y),
            Self::Dense(view) => view.get_cell(x, y).unwrap_or(false),
        }
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        match self {
            Self::Sparse(view) => view.live_count(),
            Self::Dense(view) => view.live_count(),
        }
    }

    /// Cells whose state changed in the mutation that produced this view.
    pub fn changed_coords(&self) -> Vec<Coord> {
        match self {
            Self::Sparse(view) => view.changed_cells().map(CoordKey::to_cardinal).collect(),
            Self::Dense(view) => view
                .changed_indices()
                .iter()
                .filter_map(|i| view.index_to_cardinal(*i))
                .collect(),
        }
    }

    /// Hash of the live-cell content, independent of the generation number.
    ///
    /// Equal boards of the same kind (and, for dense boards, the same size)
    /// hash equal.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        match self {
            Self::Sparse(view) => {
                for key in view.live_cells() {
                    key.hash(&mut hasher);
                }
            }
            Self::Dense(view) => {
                view.width.hash(&mut hasher);
                view.height.hash(&mut hasher);
                view.cells.hash(&mut hasher);
            }
        }
        hasher.finish()
    }

    /// Copy the view into an owned snapshot.
    pub fn to_snapshot(&self) -> BoardSnapshot {
        match self {
            Self::Sparse(view) => view.to_snapshot(),
            Self::Dense(view) => view.to_snapshot(),
        }
    }
}

/// View of a sparse board: the live-cell set plus decoding helpers.
#[derive(Debug, Clone, Copy)]
pub struct SparseView<'a> {
    pub(crate) live: &'a BTreeSet<CoordKey>,
    pub(crate) changed: &'a BTreeSet<CoordKey>,
    pub(crate) generation: u64,
}

impl<'a> SparseView<'a> {
    /// The key-to-alive mapping. Only live cells are stored, so every
    /// yielded entry is `true`.
    pub fn cells(&self) -> impl Iterator<Item = (CoordKey, bool)> + 'a {
        self.live.iter().map(|key| (*key, true))
    }

    /// Keys of every live cell in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = CoordKey> + 'a {
        self.live.iter().copied()
    }

    /// Whether `(x, y)` is alive.
    pub fn get_cell(&self, x: i32, y: i32) -> bool {
        self.live.contains(&CoordKey::from_cardinal(x, y))
    }

    /// Decode a key into its coordinate.
    pub const fn index_to_cardinal(&self, key: CoordKey) -> Coord {
        key.to_cardinal()
    }

    /// Keys whose state changed in the mutation that produced this view.
    pub fn changed_cells(&self) -> impl Iterator<Item = CoordKey> + 'a {
        self.changed.iter().copied()
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Generation number.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    fn to_snapshot(self) -> BoardSnapshot {
        BoardSnapshot {
            generation: self.generation,
            live_count: self.live.len(),
            cells: SnapshotCells::Sparse {
                live: self.live_cells().map(CoordKey::to_cardinal).collect(),
            },
        }
    }
}

/// View of a dense board: dimensions and the full row-major cell slice.
#[derive(Debug, Clone, Copy)]
pub struct DenseView<'a> {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) cells: &'a [bool],
    pub(crate) changed: &'a [usize],
    pub(crate) generation: u64,
}

impl<'a> DenseView<'a> {
    /// Grid width in cells.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Every cell in row-major order.
    pub const fn cells(&self) -> &'a [bool] {
        self.cells
    }

    /// State of `(x, y)`, or `None` outside the grid.
    pub fn get_cell(&self, x: i32, y: i32) -> Option<bool> {
        row_major_index(self.width, self.height, x, y).and_then(|i| self.cells.get(i).copied())
    }

    /// Decode a row-major index, or `None` outside the grid.
    pub fn index_to_cardinal(&self, index: usize) -> Option<Coord> {
        row_major_coord(self.width, self.height, index)
    }

    /// Indices whose state changed in the mutation that produced this view,
    /// ascending.
    pub const fn changed_indices(&self) -> &'a [usize] {
        self.changed
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    /// Generation number.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    fn to_snapshot(self) -> BoardSnapshot {
        BoardSnapshot {
            generation: self.generation,
            live_count: self.live_count(),
            cells: SnapshotCells::Dense {
                width: self.width,
                height: self.height,
                cells: self.cells.to_vec(),
            },
        }
    }
}
