// controller.rs - Play/pause/reset state machine around the current grid

use crate::error::Result;
use crate::grid::Grid;
use crate::history::CycleDetector;
use crate::patterns::{Pattern, random_fill};
use crate::rules::advance;

/// Whether the grid is open for edits or advancing on each tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Editing,
    Running,
}

/// Owns the current generation and the running flag.
///
/// The controller never schedules anything itself: a driver calls [`tick`]
/// on a fixed period while [`is_running`] is true and stops as soon as
/// [`pause`] or [`reset`] return. Actions that don't apply in the current
/// mode are ignored and report `false`.
///
/// [`tick`]: SimulationController::tick
/// [`is_running`]: SimulationController::is_running
/// [`pause`]: SimulationController::pause
/// [`reset`]: SimulationController::reset
#[derive(Debug, Clone)]
pub struct SimulationController {
    grid: Grid,
    mode: Mode,
    generation: u64,
    history: CycleDetector,
    cycle_period: Option<usize>,
}

impl SimulationController {
    /// Start in editing mode with an all-dead grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(rows, cols)?,
            mode: Mode::Editing,
            generation: 0,
            history: CycleDetector::default(),
            cycle_period: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.mode == Mode::Running
    }

    /// Generations advanced since the last reset or load.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_count(&self) -> usize {
        self.grid.live_count()
    }

    /// Period of the cycle the simulation has settled into, if one was seen
    /// among the recent generations.
    pub fn cycle_period(&self) -> Option<usize> {
        self.cycle_period
    }

    fn forget_history(&mut self) {
        self.history.clear();
        self.cycle_period = None;
    }

    /// Flip one cell. Ignored while running and for coordinates outside the
    /// grid.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> bool {
        if self.is_running() {
            log::debug!("toggle ({row}, {col}) ignored while running");
            return false;
        }
        match self.grid.toggle(row, col) {
            Ok(cell) => {
                log::trace!("cell ({row}, {col}) -> {cell:?}");
                self.forget_history();
                true
            }
            Err(e) => {
                log::debug!("toggle ignored: {e}");
                false
            }
        }
    }

    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.mode = Mode::Running;
        log::debug!("simulation started at generation {}", self.generation);
        true
    }

    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.mode = Mode::Editing;
        log::debug!("simulation paused at generation {}", self.generation);
        true
    }

    /// Start when editing, pause when running. Returns the new running flag.
    pub fn toggle_running(&mut self) -> bool {
        if self.is_running() {
            self.pause();
        } else {
            self.start();
        }
        self.is_running()
    }

    /// Advance one generation. Does nothing unless running.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        if self.history.is_empty() {
            self.history.observe(&self.grid);
        }
        let next = advance(&self.grid);
        self.cycle_period = self.history.observe(&next);
        self.grid = next;
        self.generation += 1;
        log::trace!(
            "generation {}: {} live",
            self.generation,
            self.grid.live_count()
        );
        true
    }

    /// Stop, clear every cell and go back to editing. Valid in any mode.
    pub fn reset(&mut self) {
        self.mode = Mode::Editing;
        self.grid.clear();
        self.generation = 0;
        self.forget_history();
        log::info!("simulation reset");
    }

    /// Replace the grid with `pattern` centered on it. Editing only.
    pub fn load_pattern(&mut self, pattern: &Pattern) -> bool {
        if self.is_running() {
            return false;
        }
        let origin = pattern.centered_origin(&self.grid);
        self.grid = pattern.place(&self.grid, origin);
        self.generation = 0;
        self.forget_history();
        log::info!("loaded pattern {} at {:?}", pattern.name, origin);
        true
    }

    /// Replace the grid with a seeded random soup. Editing only.
    pub fn randomize(&mut self, density: f64, seed: u64) -> bool {
        if self.is_running() {
            return false;
        }
        let (rows, cols) = self.grid.dimensions();
        let Ok(grid) = random_fill(rows, cols, density, seed) else {
            return false;
        };
        self.grid = grid;
        self.generation = 0;
        self.forget_history();
        log::info!(
            "random soup (seed {seed}, density {density:.2}): {} live",
            self.grid.live_count()
        );
        true
    }
}
