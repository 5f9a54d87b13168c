// rules.rs - B3/S23 generation advance

use crate::grid::{Cell, Grid};
use crate::neighbors::count_live_neighbors;

/// Next state of one cell given its current state and live neighbor count.
pub const fn next_state(cell: Cell, live_neighbors: u8) -> Cell {
    match (cell, live_neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3) => Cell::Alive,                     // Birth
        _ => Cell::Dead,                                    // Death or stays dead
    }
}

/// Compute the next generation.
///
/// Every neighbor count is taken from `grid`, which is never written to; the
/// result goes into a freshly allocated grid of the same dimensions.
pub fn advance(grid: &Grid) -> Grid {
    grid.map_cells(|row, col, cell| next_state(cell, count_live_neighbors(grid, row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(picture: &str) -> Grid {
        picture.parse().unwrap()
    }

    #[test]
    fn test_next_state_table() {
        for n in 0..=8u8 {
            let survives = n == 2 || n == 3;
            assert_eq!(next_state(Cell::Alive, n).is_alive(), survives, "alive with {n}");
            assert_eq!(next_state(Cell::Dead, n).is_alive(), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn test_birth_with_three() {
        let next = advance(&grid("#.#\n...\n.#."));
        assert_eq!(next.get(1, 1), Cell::Alive);
    }

    #[test]
    fn test_no_birth_with_two_or_four() {
        let next = advance(&grid("#.#\n...\n..."));
        assert_eq!(next.get(1, 1), Cell::Dead);

        let next = advance(&grid("#.#\n...\n#.#"));
        assert_eq!(next.get(1, 1), Cell::Dead);
    }

    #[test]
    fn test_survival_with_two_and_three() {
        let next = advance(&grid("#..\n.#.\n..#"));
        assert_eq!(next.get(1, 1), Cell::Alive);

        let next = advance(&grid("#.#\n.#.\n..#"));
        assert_eq!(next.get(1, 1), Cell::Alive);
    }

    #[test]
    fn test_death_by_isolation_and_crowding() {
        assert!(advance(&grid("...\n.#.\n...")).is_empty());
        assert_eq!(advance(&grid("#..\n.#.\n...")).get(1, 1), Cell::Dead);

        let next = advance(&grid("#.#\n.#.\n#.#"));
        assert_eq!(next.get(1, 1), Cell::Dead);
    }

    #[test]
    fn test_blinker_oscillates() {
        let row = grid(".....\n.....\n.###.\n.....\n.....");
        let col = grid(".....\n..#..\n..#..\n..#..\n.....");

        let mut current = row.clone();
        for step in 1..=10 {
            current = advance(&current);
            let expected = if step % 2 == 1 { &col } else { &row };
            assert_eq!(&current, expected, "generation {step}");
        }
    }

    #[test]
    fn test_block_is_still() {
        let block = grid("....\n.##.\n.##.\n....");
        assert_eq!(advance(&block), block);
    }

    #[test]
    fn test_source_untouched() {
        let source = grid(".....\n.....\n.###.\n.....\n.....");
        let before = source.clone();
        let _ = advance(&source);
        assert_eq!(source, before);
    }

    #[test]
    fn test_dimensions_preserved() {
        let source = Grid::new(7, 13).unwrap();
        assert_eq!(advance(&source).dimensions(), (7, 13));
    }
}
