// layout.rs - Mapping between grid cells and screen positions

use egui::{Pos2, Rect, Vec2, pos2, vec2};

/// Where the grid sits on screen: cells are `cell_size` squares separated by
/// a `spacing` gutter, starting at `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub origin: Pos2,
    pub cell_size: f32,
    pub spacing: f32,
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    fn pitch(&self) -> f32 {
        self.cell_size + self.spacing
    }

    /// Total painted size.
    pub fn size(&self) -> Vec2 {
        vec2(
            self.pitch() * self.cols as f32 - self.spacing,
            self.pitch() * self.rows as f32 - self.spacing,
        )
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(self.origin, self.size())
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let min = pos2(
            self.origin.x + col as f32 * self.pitch(),
            self.origin.y + row as f32 * self.pitch(),
        );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Cell under `pos`. Gutter and positions off the grid hit nothing.
    pub fn cell_at(&self, pos: Pos2) -> Option<(usize, usize)> {
        let local = pos - self.origin;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let pitch = self.pitch();
        let (col, row) = ((local.x / pitch).floor(), (local.y / pitch).floor());
        if local.x - col * pitch >= self.cell_size || local.y - row * pitch >= self.cell_size {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < self.rows && col < self.cols).then_some((row, col))
    }
}
