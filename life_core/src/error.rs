// error.rs - Errors surfaced by direct API misuse and config loading

use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A cell was addressed outside the grid. Bad dimensions at construction
    /// are reported through [`Error::InvalidDimensions`] instead.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Grids need at least one row and one column, and rows * cols cells
    /// must be addressable.
    #[error("invalid grid dimensions {rows}x{cols}: rows and cols must be positive and their product must fit in usize")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Unexpected character in a text picture of a grid.
    #[error("unexpected {found:?} at line {line}, column {column}")]
    Parse {
        line: usize,
        column: usize,
        found: char,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
