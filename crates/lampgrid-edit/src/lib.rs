//! Building-area selection editing with per-cell debounce.
#![forbid(unsafe_code)]

use std::time::Duration;

use hashbrown::HashMap;
use lampgrid_geom::Point;
use lampgrid_grid::Grid;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorStats {
    pub toggles: usize,
    pub debounced: usize,
    pub outside: usize,
}

/// Owns the session grid and applies pointer input to it. The placement
/// pipeline only ever sees [`SelectionEditor::snapshot`]s.
pub struct SelectionEditor {
    grid: Grid,
    debounce: Duration,
    // cell -> time of its last accepted toggle
    last_toggled: HashMap<(usize, usize), Duration>,
    pointer_down: bool,
    stats: EditorStats,
}

impl SelectionEditor {
    pub fn new(grid: Grid, debounce: Duration) -> Self {
        Self {
            grid,
            debounce,
            last_toggled: HashMap::new(),
            pointer_down: false,
            stats: EditorStats::default(),
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Copy of the current grid for a placement run.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    pub fn stats(&self) -> EditorStats {
        self.stats
    }

    /// Toggles the cell under `pos` unless it is outside the grid or was
    /// toggled within the debounce window. Returns whether a redraw is due.
    pub fn toggle_at(&mut self, pos: Point, now: Duration) -> bool {
        let Some(cell) = self.grid.cell_at(pos) else {
            self.stats.outside += 1;
            return false;
        };
        if let Some(&last) = self.last_toggled.get(&cell) {
            if now.saturating_sub(last) <= self.debounce {
                self.stats.debounced += 1;
                return false;
            }
        }
        let selected = self.grid.toggle(cell.0, cell.1).unwrap_or(false);
        self.last_toggled.insert(cell, now);
        self.stats.toggles += 1;
        log::debug!("cell ({}, {}) selected={}", cell.0, cell.1, selected);
        true
    }

    pub fn pointer_down(&mut self, pos: Point, now: Duration) -> bool {
        self.pointer_down = true;
        self.toggle_at(pos, now)
    }

    /// Drag painting: toggles only while the pointer is held.
    pub fn pointer_move(&mut self, pos: Point, now: Duration) -> bool {
        if !self.pointer_down {
            return false;
        }
        self.toggle_at(pos, now)
    }

    /// Release or leaving the surface.
    pub fn pointer_up(&mut self) {
        self.pointer_down = false;
    }

    /// Clears the selection and selects a `width x height` block centered in
    /// the grid, clipped at its edges.
    pub fn seed_initial_area(&mut self, width: usize, height: usize) {
        self.grid.clear_selection();
        let x0 = (self.grid.cols as i64 - width as i64).div_euclid(2);
        let y0 = (self.grid.rows as i64 - height as i64).div_euclid(2);
        for y in y0..y0 + height as i64 {
            for x in x0..x0 + width as i64 {
                if x >= 0 && y >= 0 {
                    self.grid.set_selected(x as usize, y as usize, true);
                }
            }
        }
        log::info!(
            "initial area {}x{} at ({}, {}): {} cells",
            width,
            height,
            x0,
            y0,
            self.grid.selected_count()
        );
    }

    /// Applies explicit cell toggles, ignoring coordinates outside the grid.
    pub fn toggle_cells(&mut self, cells: &[(usize, usize)]) {
        for &(x, y) in cells {
            if self.grid.toggle(x, y).is_none() {
                log::warn!("cell ({}, {}) is outside the {}x{} grid", x, y, self.grid.cols, self.grid.rows);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn toggle_respects_debounce() {
        let mut ed = SelectionEditor::new(Grid::new(10, 10, 20.0), DEFAULT_DEBOUNCE);
        let p = Point::new(45.0, 25.0);
        assert!(ed.toggle_at(p, ms(1_000)));
        assert!(ed.grid().get(2, 1).unwrap().selected);
        assert!(!ed.toggle_at(p, ms(1_200)));
        assert!(!ed.toggle_at(p, ms(1_500)));
        assert!(ed.grid().get(2, 1).unwrap().selected);
        assert!(ed.toggle_at(p, ms(1_501)));
        assert!(!ed.grid().get(2, 1).unwrap().selected);
        assert_eq!(ed.stats(), EditorStats { toggles: 2, debounced: 2, outside: 0 });
    }

    #[test]
    fn debounce_is_per_cell() {
        let mut ed = SelectionEditor::new(Grid::new(10, 10, 20.0), DEFAULT_DEBOUNCE);
        assert!(ed.toggle_at(Point::new(5.0, 5.0), ms(0)));
        assert!(ed.toggle_at(Point::new(25.0, 5.0), ms(10)));
        assert_eq!(ed.grid().selected_count(), 2);
    }

    #[test]
    fn outside_positions_are_ignored() {
        let mut ed = SelectionEditor::new(Grid::new(10, 10, 20.0), DEFAULT_DEBOUNCE);
        assert!(!ed.toggle_at(Point::new(200.0, 5.0), ms(0)));
        assert!(!ed.toggle_at(Point::new(-3.0, 5.0), ms(0)));
        assert_eq!(ed.stats().outside, 2);
        assert!(!ed.grid().has_building_area());
    }

    #[test]
    fn drag_paints_only_while_held() {
        let mut ed = SelectionEditor::new(Grid::new(10, 10, 20.0), DEFAULT_DEBOUNCE);
        assert!(!ed.pointer_move(Point::new(5.0, 5.0), ms(0)));
        assert!(ed.pointer_down(Point::new(5.0, 5.0), ms(0)));
        assert!(ed.pointer_move(Point::new(25.0, 5.0), ms(16)));
        // Still over the same cell: debounced
        assert!(!ed.pointer_move(Point::new(27.0, 6.0), ms(32)));
        ed.pointer_up();
        assert!(!ed.pointer_move(Point::new(45.0, 5.0), ms(48)));
        assert_eq!(ed.grid().selected_count(), 2);
    }

    #[test]
    fn initial_area_is_centered() {
        let mut ed = SelectionEditor::new(Grid::new(50, 50, 20.0), DEFAULT_DEBOUNCE);
        ed.toggle_cells(&[(0, 0)]);
        ed.seed_initial_area(10, 10);
        let g = ed.snapshot();
        assert_eq!(g.selected_count(), 100);
        assert!(!g.get(0, 0).unwrap().selected);
        assert!(g.get(20, 20).unwrap().selected);
        assert!(g.get(29, 29).unwrap().selected);
        assert!(!g.get(30, 29).unwrap().selected);
        assert!(!g.get(19, 20).unwrap().selected);
    }

    #[test]
    fn oversized_initial_area_is_clipped() {
        let mut ed = SelectionEditor::new(Grid::new(4, 3, 20.0), DEFAULT_DEBOUNCE);
        ed.seed_initial_area(7, 5);
        assert_eq!(ed.grid().selected_count(), 12);
    }

    #[test]
    fn snapshot_is_detached() {
        let mut ed = SelectionEditor::new(Grid::new(4, 4, 20.0), DEFAULT_DEBOUNCE);
        let before = ed.snapshot();
        ed.toggle_at(Point::new(1.0, 1.0), ms(0));
        assert!(!before.has_building_area());
        assert!(ed.grid().has_building_area());
    }
}
