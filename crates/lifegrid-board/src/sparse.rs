//! Unbounded board storing only live cells.
//!
//! Live cells are kept in a `BTreeSet<CoordKey>`; absence means dead. A tick
//! only evaluates candidate cells (the Moore neighborhoods of live cells),
//! since a dead cell with no live neighbor can never be born.

use std::collections::BTreeSet;

use lifegrid_types::{BoardKind, Coord, CoordKey};
use tracing::debug;

use crate::board::Board;
use crate::error::BoardError;
use crate::render::RenderCallback;
use crate::rule::{self, MOORE_OFFSETS};
use crate::state::{BoardState, SparseView};

/// The T-tetromino every default sparse board starts from.
pub const SPARSE_SEED: [Coord; 4] = [
    Coord::new(4, 3),
    Coord::new(3, 4),
    Coord::new(4, 4),
    Coord::new(5, 4),
];

/// Game of Life on the unbounded `i32` plane.
pub struct SparseBoard {
    live: BTreeSet<CoordKey>,
    changed: BTreeSet<CoordKey>,
    generation: u64,
    on_render: Option<Box<dyn RenderCallback>>,
}

impl SparseBoard {
    /// Create a board seeded with [`SPARSE_SEED`] and no render callback.
    pub fn new() -> Self {
        Self::from_cells(SPARSE_SEED)
    }

    /// Create a board with no live cells.
    pub const fn empty() -> Self {
        Self {
            live: BTreeSet::new(),
            changed: BTreeSet::new(),
            generation: 0,
            on_render: None,
        }
    }

    /// Create a board whose live cells are exactly `cells`.
    ///
    /// Seeding does not notify any observer.
    pub fn from_cells(cells: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            live: cells.into_iter().map(Coord::key).collect(),
            ..Self::empty()
        }
    }

    /// Attach a render callback, replacing any existing one.
    #[must_use]
    pub fn with_render_callback(mut self, callback: impl RenderCallback + 'static) -> Self {
        self.on_render = Some(Box::new(callback));
        self
    }

    /// Whether `(x, y)` is alive. Coordinates never written are dead.
    pub fn get_cell(&self, x: i32, y: i32) -> bool {
        self.live.contains(&CoordKey::from_cardinal(x, y))
    }

    /// Keys of the 8 Moore neighbors of `key`.
    ///
    /// Pure arithmetic on the decoded coordinate; it wraps only at the
    /// `i32` extremes.
    pub fn get_neighbors(&self, key: CoordKey) -> [CoordKey; 8] {
        neighbor_keys(key)
    }

    /// Set or clear `(x, y)` and notify the render callback.
    ///
    /// Every coordinate is writable. The callback fires even when the cell
    /// already had the requested state.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Render`] if the render callback fails.
    pub fn set_cell_by_cardinal(&mut self, x: i32, y: i32, alive: bool) -> Result<(), BoardError> {
        let key = CoordKey::from_cardinal(x, y);
        let flipped = if alive {
            self.live.insert(key)
        } else {
            self.live.remove(&key)
        };
        if flipped {
            self.changed.insert(key);
        }
        self.render()
    }

    /// Advance one generation and notify the render callback.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Render`] if the render callback fails.
    pub fn tick(&mut self) -> Result<(), BoardError> {
        let candidates: BTreeSet<CoordKey> =
            self.live.iter().flat_map(|key| neighbor_keys(*key)).collect();

        let next: BTreeSet<CoordKey> = candidates
            .into_iter()
            .filter(|key| {
                let alive = self.live.contains(key);
                let count = neighbor_keys(*key)
                    .iter()
                    .filter(|n| self.live.contains(n))
                    .count();
                rule::next_state(alive, count)
            })
            .collect();

        self.changed = self.live.symmetric_difference(&next).copied().collect();
        self.live = next;
        self.generation = self.generation.saturating_add(1);

        debug!(
            generation = self.generation,
            live = self.live.len(),
            changed = self.changed.len(),
            "Sparse generation advanced"
        );

        self.render()
    }

    /// Borrow a read-only view of the current generation.
    pub fn get_board_state(&self) -> BoardState<'_> {
        BoardState::Sparse(self.view())
    }

    fn view(&self) -> SparseView<'_> {
        SparseView {
            live: &self.live,
            changed: &self.changed,
            generation: self.generation,
        }
    }

    fn render(&mut self) -> Result<(), BoardError> {
        let result = match self.on_render.as_mut() {
            Some(callback) => callback.on_render(&BoardState::Sparse(SparseView {
                live: &self.live,
                changed: &self.changed,
                generation: self.generation,
            })),
            None => Ok(()),
        };
        self.changed.clear();
        result.map_err(BoardError::from)
    }
}

impl Default for SparseBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for SparseBoard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SparseBoard")
            .field("live", &self.live.len())
            .field("generation", &self.generation)
            .field("has_render_callback", &self.on_render.is_some())
            .finish_non_exhaustive()
    }
}

impl Board for SparseBoard {
    fn kind(&self) -> BoardKind {
        BoardKind::Sparse
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn is_alive(&self, x: i32, y: i32) -> bool {
        self.get_cell(x, y)
    }

    fn live_count(&self) -> usize {
        self.live.len()
    }

    fn set_cell_by_cardinal(&mut self, x: i32, y: i32, alive: bool) -> Result<(), BoardError> {
        Self::set_cell_by_cardinal(self, x, y, alive)
    }

    fn tick(&mut self) -> Result<(), BoardError> {
        Self::tick(self)
    }

    fn board_state(&self) -> BoardState<'_> {
        self.get_board_state()
    }

    fn set_render_callback(&mut self, callback: Option<Box<dyn RenderCallback>>) {
        self.on_render = callback;
    }
}

fn neighbor_keys(key: CoordKey) -> [CoordKey; 8] {
    let origin = key.to_cardinal();
    MOORE_OFFSETS.map(|(dx, dy)| origin.offset(dx, dy).key())
}
