// history.rs - Detects when the simulation revisits a recent generation

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

/// Generations remembered by default.
pub const DEFAULT_WINDOW: usize = 10;

/// Ring of fingerprints of the most recent generations.
#[derive(Debug, Clone)]
pub struct CycleDetector {
    window: usize,
    fingerprints: VecDeque<u64>,
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl CycleDetector {
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            window,
            fingerprints: VecDeque::with_capacity(window),
        }
    }

    fn fingerprint(grid: &Grid) -> u64 {
        let mut hasher = DefaultHasher::new();
        grid.hash(&mut hasher);
        hasher.finish()
    }

    /// Record `grid`. Returns the period if it matches one of the remembered
    /// generations: 1 for a still life, 2 for a blinker, and so on.
    pub fn observe(&mut self, grid: &Grid) -> Option<usize> {
        let fingerprint = Self::fingerprint(grid);
        let period = self
            .fingerprints
            .iter()
            .rev()
            .position(|&seen| seen == fingerprint)
            .map(|distance| distance + 1);

        if self.fingerprints.len() == self.window {
            self.fingerprints.pop_front();
        }
        self.fingerprints.push_back(fingerprint);
        period
    }

    pub fn clear(&mut self) {
        self.fingerprints.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.fingerprints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::advance;

    #[test]
    fn test_still_life_has_period_one() {
        let block: Grid = "....\n.##.\n.##.\n....".parse().unwrap();
        let mut detector = CycleDetector::default();
        assert_eq!(detector.observe(&block), None);
        assert_eq!(detector.observe(&advance(&block)), Some(1));
    }

    #[test]
    fn test_blinker_has_period_two() {
        let mut grid: Grid = ".....\n.....\n.###.\n.....\n.....".parse().unwrap();
        let mut detector = CycleDetector::default();
        assert_eq!(detector.observe(&grid), None);
        grid = advance(&grid);
        assert_eq!(detector.observe(&grid), None);
        grid = advance(&grid);
        assert_eq!(detector.observe(&grid), Some(2));
    }

    #[test]
    fn test_window_forgets_old_generations() {
        let first: Grid = "#.\n..".parse().unwrap();
        let mut detector = CycleDetector::new(2);
        detector.observe(&first);
        detector.observe(&"##\n..".parse().unwrap());
        detector.observe(&"###\n...".parse().unwrap());
        assert_eq!(detector.observe(&first), None);
    }

    #[test]
    fn test_clear() {
        let grid = Grid::new(2, 2).unwrap();
        let mut detector = CycleDetector::default();
        detector.observe(&grid);
        detector.clear();
        assert!(detector.is_empty());
        assert_eq!(detector.observe(&grid), None);
    }
}
