//! Conway's Game of Life boards for the Lifegrid workspace.
//!
//! Two storage strategies implement the one [`Board`] contract:
//!
//! - [`SparseBoard`] -- unbounded `i32` plane storing only live cells under
//!   packed [`CoordKey`]s. Seeded with the T-tetromino.
//! - [`DenseBoard`] -- fixed `width x height` grid storing every cell, with
//!   hard (non-wrapping) edges. Seeded empty, all-alive, or randomly.
//!
//! Every generation is computed from a read-only view of the previous one
//! and swapped in wholesale. After each tick and each effective cell write
//! the board calls its optional [`RenderCallback`] with a borrowed
//! [`BoardState`].
//!
//! # Modules
//!
//! - [`board`] -- The [`Board`] trait.
//! - [`dense`] -- [`DenseBoard`] and [`DenseSeed`].
//! - [`error`] -- [`BoardError`] and [`RenderError`].
//! - [`render`] -- [`RenderCallback`], [`render_fn`], [`NoOpRender`].
//! - [`rule`] -- Birth/survival rule and the Moore neighborhood.
//! - [`sparse`] -- [`SparseBoard`] and its seed pattern.
//! - [`state`] -- [`BoardState`] views.
//!
//! [`CoordKey`]: lifegrid_types::CoordKey

pub mod board;
pub mod dense;
pub mod error;
pub mod render;
pub mod rule;
pub mod sparse;
pub mod state;

// Re-export primary types at crate root.
pub use board::Board;
pub use dense::{DenseBoard, DenseSeed, MAX_CELLS, MAX_DIMENSION};
pub use error::{BoardError, RenderError};
pub use render::{NoOpRender, RenderCallback, render_fn};
pub use sparse::{SPARSE_SEED, SparseBoard};
pub use state::{BoardState, DenseView, SparseView};
