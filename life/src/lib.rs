//! Conway's Game of Life on a bounded, non-wrapping grid.
//!
//! [`Grid`] holds one generation; [`engine::next`] computes the following one
//! without touching its input. [`Session`] is the mutable state a front end
//! owns (current grid, run flag, generation counter) and [`runner`] drives a
//! session on a timer.

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod runner;
pub mod session;

pub use config::LifeConfig;
pub use engine::next;
pub use error::GridError;
pub use grid::Grid;
pub use session::{Session, StepOutcome};
