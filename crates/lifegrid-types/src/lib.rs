//! Shared type definitions for the Lifegrid cellular automaton.
//!
//! These are the value types that cross crate boundaries: coordinates,
//! packed coordinate keys, run identifiers, and the owned snapshots handed
//! to external renderers. Snapshot and coordinate types flow to
//! `TypeScript` via `ts-rs` for browser-side renderers.
//!
//! # Modules
//!
//! - [`coord`] -- [`Coord`], the packed [`CoordKey`], and row-major index
//!   helpers shared by both board strategies.
//! - [`ids`] -- Type-safe UUID wrappers.
//! - [`snapshot`] -- [`BoardKind`] and the serializable [`BoardSnapshot`].

pub mod coord;
pub mod ids;
pub mod snapshot;

// Re-export all public types at crate root for convenience.
pub use coord::{Coord, CoordKey, row_major_coord, row_major_index};
pub use ids::RunId;
pub use snapshot::{BoardKind, BoardSnapshot, SnapshotCells};
