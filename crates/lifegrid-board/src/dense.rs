//! Fixed-size board storing every cell.
//!
//! Cells live in a `Vec<bool>` of length `width * height`, indexed row-major
//! by `y * width + x`. The grid edge is a hard boundary: neighbors that fall
//! outside it are dead, and the grid never wraps into a torus.

use lifegrid_types::{BoardKind, Coord, row_major_coord, row_major_index};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::board::Board;
use crate::error::BoardError;
use crate::render::RenderCallback;
use crate::rule::{self, MOORE_OFFSETS};
use crate::state::{BoardState, DenseView};

/// Largest accepted grid side, so every cell coordinate fits in `i32`.
pub const MAX_DIMENSION: u32 = i32::MAX.unsigned_abs();

/// Largest accepted `width * height` (2^28 cells, 256 MiB per generation).
pub const MAX_CELLS: usize = 1 << 28;

/// Initial population of a dense board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DenseSeed {
    /// Every cell dead.
    Empty,
    /// Every cell alive.
    AllAlive,
    /// Each cell independently alive with probability `density`.
    ///
    /// The same `rng_seed` always produces the same grid.
    Random {
        /// Probability in `[0, 1]` that a cell starts alive.
        density: f64,
        /// Seed for the pseudo-random generator.
        rng_seed: u64,
    },
}

/// Game of Life on a fixed `width x height` grid with hard edges.
pub struct DenseBoard {
    width: u32,
    height: u32,
    cells: Vec<bool>,
    changed: Vec<usize>,
    generation: u64,
    on_render: Option<Box<dyn RenderCallback>>,
}

impl DenseBoard {
    /// Create a `width x height` board populated by `seed`.
    ///
    /// Seeding does not notify any observer.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] if either side is zero or
    /// exceeds [`MAX_DIMENSION`], or the grid has more than [`MAX_CELLS`]
    /// cells, and
    /// [`BoardError::InvalidDensity`] for a random seed density outside
    /// `[0, 1]`.
    pub fn new(width: u32, height: u32, seed: DenseSeed) -> Result<Self, BoardError> {
        let invalid = || BoardError::InvalidDimensions {
            width,
            height,
            max: MAX_DIMENSION,
            max_cells: MAX_CELLS,
        };
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(invalid());
        }
        let len = usize::try_from(width)
            .ok()
            .zip(usize::try_from(height).ok())
            .and_then(|(w, h)| w.checked_mul(h))
            .filter(|len| *len <= MAX_CELLS)
            .ok_or_else(invalid)?;

        let cells = match seed {
            DenseSeed::Empty => vec![false; len],
            DenseSeed::AllAlive => vec![true; len],
            DenseSeed::Random { density, rng_seed } => {
                if !(0.0..=1.0).contains(&density) {
                    return Err(BoardError::InvalidDensity { density });
                }
                let mut rng = SmallRng::seed_from_u64(rng_seed);
                (0..len).map(|_| rng.random_bool(density)).collect()
            }
        };

        Ok(Self {
            width,
            height,
            cells,
            changed: Vec::new(),
            generation: 0,
            on_render: None,
        })
    }

    /// Attach a render callback, replacing any existing one.
    #[must_use]
    pub fn with_render_callback(mut self, callback: impl RenderCallback + 'static) -> Self {
        self.on_render = Some(Box::new(callback));
        self
    }

    /// Grid width in cells.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Row-major index of `(x, y)`, or `None` outside the grid.
    pub fn cardinal_to_index(&self, x: i32, y: i32) -> Option<usize> {
        row_major_index(self.width, self.height, x, y)
    }

    /// Coordinate of a row-major index, or `None` outside the grid.
    pub fn index_to_cardinal(&self, index: usize) -> Option<Coord> {
        row_major_coord(self.width, self.height, index)
    }

    /// State of `(x, y)`, or `None` outside the grid. Treat `None` as dead.
    pub fn get_cell(&self, x: i32, y: i32) -> Option<bool> {
        self.cardinal_to_index(x, y)
            .and_then(|i| self.cells.get(i).copied())
    }

    /// States of the 8 Moore neighbors of the cell at `index`, in
    /// [`MOORE_OFFSETS`] order.
    ///
    /// Neighbors outside the grid are dead. An out-of-range `index` yields
    /// eight dead neighbors.
    pub fn get_neighbors(&self, index: usize) -> [bool; 8] {
        let Some(origin) = self.index_to_cardinal(index) else {
            return [false; 8];
        };
        MOORE_OFFSETS.map(|(dx, dy)| {
            let n = origin.offset(dx, dy);
            self.get_cell(n.x, n.y).unwrap_or(false)
        })
    }

    /// Write the cell at `index` and notify the render callback.
    ///
    /// An index outside the grid is ignored: nothing changes and no
    /// notification is sent.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Render`] if the render callback fails.
    pub fn set_cell(&mut self, index: usize, alive: bool) -> Result<(), BoardError> {
        let Some(cell) = self.cells.get_mut(index) else {
            trace!(index, len = self.cells.len(), "Ignoring out-of-range cell write");
            return Ok(());
        };
        if *cell != alive {
            *cell = alive;
            self.changed.push(index);
        }
        self.render()
    }

    /// Write the cell at `(x, y)` and notify the render callback.
    ///
    /// A coordinate outside the grid is ignored like in [`set_cell`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Render`] if the render callback fails.
    ///
    /// [`set_cell`]: DenseBoard::set_cell
    pub fn set_cell_by_cardinal(&mut self, x: i32, y: i32, alive: bool) -> Result<(), BoardError> {
        match self.cardinal_to_index(x, y) {
            Some(index) => self.set_cell(index, alive),
            None => {
                trace!(x, y, "Ignoring out-of-bounds cell write");
                Ok(())
            }
        }
    }

    /// Like [`set_cell_by_cardinal`], but reports writes outside the grid.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `(x, y)` is outside the grid,
    /// or [`BoardError::Render`] if the render callback fails.
    ///
    /// [`set_cell_by_cardinal`]: DenseBoard::set_cell_by_cardinal
    pub fn try_set_cell_by_cardinal(
        &mut self,
        x: i32,
        y: i32,
        alive: bool,
    ) -> Result<(), BoardError> {
        let index = self
            .cardinal_to_index(x, y)
            .ok_or(BoardError::OutOfBounds {
                coord: Coord::new(x, y),
                width: self.width,
                height: self.height,
            })?;
        self.set_cell(index, alive)
    }

    /// Advance one generation over every cell and notify the render callback.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Render`] if the render callback fails.
    pub fn tick(&mut self) -> Result<(), BoardError> {
        let next: Vec<bool> = self
            .cells
            .iter()
            .enumerate()
            .map(|(index, alive)| {
                let count = self.get_neighbors(index).iter().filter(|n| **n).count();
                rule::next_state(*alive, count)
            })
            .collect();

        self.changed = self
            .cells
            .iter()
            .zip(&next)
            .enumerate()
            .filter(|(_, (before, after))| before != after)
            .map(|(index, _)| index)
            .collect();
        self.cells = next;
        self.generation = self.generation.saturating_add(1);

        debug!(
            generation = self.generation,
            width = self.width,
            height = self.height,
            changed = self.changed.len(),
            "Dense generation advanced"
        );

        self.render()
    }

    /// Borrow a read-only view of the current generation.
    pub fn get_board_state(&self) -> BoardState<'_> {
        BoardState::Dense(DenseView {
            width: self.width,
            height: self.height,
            cells: &self.cells,
            changed: &self.changed,
            generation: self.generation,
        })
    }

    fn render(&mut self) -> Result<(), BoardError> {
        let result = match self.on_render.as_mut() {
            Some(callback) => callback.on_render(&BoardState::Dense(DenseView {
                width: self.width,
                height: self.height,
                cells: &self.cells,
                changed: &self.changed,
                generation: self.generation,
            })),
            None => Ok(()),
        };
        self.changed.clear();
        result.map_err(BoardError::from)
    }
}

impl core::fmt::Debug for DenseBoard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DenseBoard")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("generation", &self.generation)
            .field("has_render_callback", &self.on_render.is_some())
            .finish_non_exhaustive()
    }
}

impl Board for DenseBoard {
    fn kind(&self) -> BoardKind {
        BoardKind::Dense
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn is_alive(&self, x: i32, y: i32) -> bool {
        self.get_cell(x, y).unwrap_or(false)
    }

    fn live_count(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
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
