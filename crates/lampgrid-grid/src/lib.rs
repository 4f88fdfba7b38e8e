//! Cell grid, building-area queries and integer point occupancy.
#![forbid(unsafe_code)]

mod mask;

pub use mask::PointMask;

use lampgrid_geom::{Point, Rect, Size};

/// One square of the floor plan. Only `selected` ever changes after the grid
/// is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub selected: bool,
    pub origin: Point,
    pub size: f64,
}

impl Cell {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, Size::new(self.size, self.size))
    }
}

/// Rectangular session grid with a uniform cell size. Cell `(x, y)` sits at
/// `(x * cell_size, y * cell_size)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    pub cols: usize,
    pub rows: usize,
    pub cell_size: f64,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(cols: usize, rows: usize, cell_size: f64) -> Self {
        let mut cells = Vec::with_capacity(cols * rows);
        for y in 0..rows {
            for x in 0..cols {
                cells.push(Cell {
                    selected: false,
                    origin: Point::new(x as f64 * cell_size, y as f64 * cell_size),
                    size: cell_size,
                });
            }
        }
        Self {
            cols,
            rows,
            cell_size,
            cells,
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells.get(self.idx(x, y))
    }

    /// Returns `false` when `(x, y)` is outside the grid.
    pub fn set_selected(&mut self, x: usize, y: usize, selected: bool) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let i = self.idx(x, y);
        self.cells[i].selected = selected;
        true
    }

    /// Flips one cell; `None` outside the grid, otherwise the new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Option<bool> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let i = self.idx(x, y);
        let cell = &mut self.cells[i];
        cell.selected = !cell.selected;
        Some(cell.selected)
    }

    pub fn clear_selection(&mut self) {
        for c in &mut self.cells {
            c.selected = false;
        }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The building area: every selected cell, row by row.
    pub fn building_area(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().filter(|c| c.selected)
    }

    #[inline]
    pub fn has_building_area(&self) -> bool {
        self.cells.iter().any(|c| c.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.building_area().count()
    }

    /// Whole grid in length-units.
    pub fn extent(&self) -> Rect {
        Rect::new(
            Point::ZERO,
            Point::new(
                self.cols as f64 * self.cell_size,
                self.rows as f64 * self.cell_size,
            ),
        )
    }

    /// Cell coordinates under a length-unit position.
    pub fn cell_at(&self, p: Point) -> Option<(usize, usize)> {
        if self.cell_size <= 0.0 || p.x < 0.0 || p.y < 0.0 {
            return None;
        }
        let x = (p.x / self.cell_size).floor() as usize;
        let y = (p.y / self.cell_size).floor() as usize;
        self.in_bounds(x, y).then_some((x, y))
    }

    /// Occupancy of every selected cell.
    pub fn building_mask(&self) -> PointMask {
        let mut mask = PointMask::for_grid(self);
        for c in self.building_area() {
            mask.insert_cell(c);
        }
        mask
    }
}
