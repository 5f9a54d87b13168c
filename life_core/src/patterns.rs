// patterns.rs - Built-in starting patterns and random soups

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::grid::{Cell, Grid};

/// A named set of live cells, as (row, col) offsets from the pattern's
/// top-left corner.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 2), (1, 1), (1, 2), (2, 0), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

impl Pattern {
    /// Look up a built-in pattern by name, ignoring case.
    pub fn by_name(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Bounding box as (rows, cols).
    pub fn size(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(rows, cols), &(r, c)| (rows.max(r + 1), cols.max(c + 1)))
    }

    /// Top-left origin that centers the pattern on `grid`. Patterns larger
    /// than the grid are anchored at the top-left corner.
    pub fn centered_origin(&self, grid: &Grid) -> (usize, usize) {
        let (rows, cols) = self.size();
        (
            grid.rows().saturating_sub(rows) / 2,
            grid.cols().saturating_sub(cols) / 2,
        )
    }

    /// A cleared copy of `grid` with this pattern stamped at `origin`.
    /// Cells that land outside the grid are dropped.
    pub fn place(&self, grid: &Grid, origin: (usize, usize)) -> Grid {
        let mut placed = grid.clone();
        placed.clear();
        for &(r, c) in self.cells {
            let (row, col) = (origin.0 + r, origin.1 + c);
            if placed.contains(row, col) {
                let _ = placed.set(row, col, Cell::Alive);
            }
        }
        placed
    }
}

/// A rows x cols soup where each cell is alive with probability `density`.
/// The same seed always produces the same soup. Densities outside 0.0 - 1.0
/// are clamped; NaN gives an empty grid.
pub fn random_fill(rows: usize, cols: usize, density: f64, seed: u64) -> Result<Grid> {
    let mut grid = Grid::new(rows, cols)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    for row in 0..rows {
        for col in 0..cols {
            grid.set(row, col, Cell::from(rng.gen_bool(density)))?;
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_names_unique() {
        for (i, a) in PATTERNS.iter().enumerate() {
            for b in &PATTERNS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_patterns_have_no_duplicate_cells() {
        for pattern in PATTERNS {
            let mut cells = pattern.cells.to_vec();
            cells.sort_unstable();
            cells.dedup();
            assert_eq!(cells.len(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn test_sizes() {
        assert_eq!(Pattern::by_name("glider").unwrap().size(), (3, 3));
        assert_eq!(Pattern::by_name("Blinker").unwrap().size(), (1, 3));
        assert_eq!(Pattern::by_name("pulsar").unwrap().size(), (13, 13));
        assert_eq!(Pattern::by_name("gosper glider gun").unwrap().size(), (9, 36));
        assert!(Pattern::by_name("spaceship").is_none());
    }

    #[test]
    fn test_place_centered() {
        let grid = Grid::new(5, 5).unwrap();
        let blinker = Pattern::by_name("Blinker").unwrap();
        let origin = blinker.centered_origin(&grid);
        assert_eq!(origin, (2, 1));

        let placed = blinker.place(&grid, origin);
        assert_eq!(placed.to_string(), ".....\n.....\n.###.\n.....\n.....\n");
    }

    #[test]
    fn test_place_clears_and_clips() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(0, 0, Cell::Alive).unwrap();

        let glider = Pattern::by_name("Glider").unwrap();
        let placed = glider.place(&grid, (2, 1));
        assert_eq!(placed.get(0, 0), Cell::Dead);
        // Only the first two rows of the glider fit.
        assert_eq!(placed.live_count(), 2);
        assert_eq!(placed.get(2, 2), Cell::Alive);
        assert_eq!(placed.get(3, 3), Cell::Alive);
        assert_eq!(placed.dimensions(), (4, 4));
    }

    #[test]
    fn test_oversized_pattern_anchors_top_left() {
        let grid = Grid::new(5, 5).unwrap();
        let gun = Pattern::by_name("Gosper Glider Gun").unwrap();
        assert_eq!(gun.centered_origin(&grid), (0, 0));
    }

    #[test]
    fn test_random_fill_is_seeded() {
        let a = random_fill(20, 30, 0.33, 7).unwrap();
        let b = random_fill(20, 30, 0.33, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.dimensions(), (20, 30));
        assert!(a.live_count() > 0 && a.live_count() < 600);
    }

    #[test]
    fn test_random_fill_density_extremes() {
        assert!(random_fill(5, 5, 0.0, 1).unwrap().is_empty());
        assert_eq!(random_fill(5, 5, 1.0, 1).unwrap().live_count(), 25);
        assert_eq!(random_fill(5, 5, 3.0, 1).unwrap().live_count(), 25);
        assert!(random_fill(0, 5, 0.5, 1).is_err());
    }

    #[test]
    fn test_random_fill_non_finite_density() {
        assert!(random_fill(3, 3, f64::NAN, 1).unwrap().is_empty());
        assert_eq!(random_fill(3, 3, f64::INFINITY, 1).unwrap().live_count(), 9);
        assert!(random_fill(3, 3, f64::NEG_INFINITY, 1).unwrap().is_empty());
    }
}
