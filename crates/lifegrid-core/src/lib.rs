//! Configuration, board construction, and the generation runner for
//! Lifegrid.
//!
//! The board crate advances one generation per call and knows nothing
//! about pacing. This crate owns everything around it: reading the YAML
//! configuration, choosing the board strategy, and ticking on a timer
//! until a stop condition is met.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `lifegrid-config.yaml` into
//!   strongly-typed structs.
//! - [`factory`] -- [`build_board`] selects and constructs the board.
//! - [`runner`] -- [`run_generations`], the paced generation loop.
//! - [`stagnation`] -- Still-life and oscillator detection.
//!
//! [`build_board`]: factory::build_board
//! [`run_generations`]: runner::run_generations

pub mod config;
pub mod factory;
pub mod runner;
pub mod stagnation;
