//! Conway's Game of Life simulation core.
//!
//! A fixed-size [`Grid`] with no wraparound, the B3/S23 [`advance`] step that
//! computes every cell from the same snapshot, and the
//! [`SimulationController`] that owns the grid and the running flag. Drawing,
//! input and timers live outside this crate; a driver calls
//! [`SimulationController::tick`] while the controller is running.

pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod history;
pub mod neighbors;
pub mod patterns;
pub mod rules;

pub use config::LifeConfig;
pub use controller::{Mode, SimulationController};
pub use error::{Error, Result};
pub use grid::{Cell, Grid};
pub use history::CycleDetector;
pub use neighbors::count_live_neighbors;
pub use patterns::{PATTERNS, Pattern, random_fill};
pub use rules::{advance, next_state};
