// grid.rs - Grid types for Conway's Game of Life

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

// Reference playing area (50x50)
pub const DEFAULT_ROWS: usize = 50;
pub const DEFAULT_COLS: usize = 50;

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// The opposite state.
    pub const fn toggled(self) -> Cell {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Fixed-size matrix of cells, stored row-major.
///
/// Dimensions never change after construction. Reads outside the grid see a
/// dead cell; writes outside the grid are rejected with [`Error::OutOfBounds`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = rows
            .checked_mul(cols)
            .filter(|&len| len > 0)
            .ok_or(Error::InvalidDimensions { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; len],
        })
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        if self.contains(row, col) {
            Ok(self.index(row, col))
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Cell at (row, col); anything outside the grid reads as dead.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if self.contains(row, col) {
            self.cells[self.index(row, col)]
        } else {
            Cell::Dead
        }
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip one cell and return its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<Cell> {
        let idx = self.checked_index(row, col)?;
        let cell = self.cells[idx].toggled();
        self.cells[idx] = cell;
        Ok(cell)
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.live_count() == 0
    }

    /// Every cell with its position, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// New grid of the same dimensions with every cell computed by `f` from
    /// this grid's cell at the same position.
    pub(crate) fn map_cells(&self, mut f: impl FnMut(usize, usize, Cell) -> Cell) -> Grid {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.iter().map(|(row, col, cell)| f(row, col, cell)).collect(),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the picture produced by `Display`: one line per row, `#` (or `O`,
/// `*`) alive and `.` dead. Blank lines are skipped.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.chars().count());
        let mut grid = Grid::new(rows, cols)?;

        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(Error::InvalidDimensions {
                    rows,
                    cols: line.chars().count(),
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '#' | 'O' | '*' => Cell::Alive,
                    '.' => Cell::Dead,
                    found => {
                        return Err(Error::Parse {
                            line: row + 1,
                            column: col + 1,
                            found,
                        });
                    }
                };
                grid.set(row, col, cell)?;
            }
        }

        Ok(grid)
    }
}
