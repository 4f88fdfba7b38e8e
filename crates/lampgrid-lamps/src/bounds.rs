use lampgrid_geom::{Point, Rect};
use lampgrid_grid::Grid;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AreaError {
    #[error("no cell is selected")]
    Empty,
}

/// Bounding box of the building area. The bottom-right corner is pushed out
/// by one cell so the farthest selected cell is covered entirely.
pub fn resolve_bounds(grid: &Grid) -> Result<Rect, AreaError> {
    let mut area = grid.building_area();
    let first = area.next().ok_or(AreaError::Empty)?;
    let (mut lt, mut rb) = (first.origin, first.origin);
    for c in area {
        lt = lt.min(c.origin);
        rb = rb.max(c.origin);
    }
    Ok(Rect::new(lt, rb + Point::new(grid.cell_size, grid.cell_size)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_has_no_area() {
        let g = Grid::new(4, 4, 20.0);
        assert_eq!(resolve_bounds(&g), Err(AreaError::Empty));
    }

    #[test]
    fn single_cell_spans_its_square() {
        let mut g = Grid::new(4, 4, 20.0);
        g.set_selected(2, 1, true);
        let r = resolve_bounds(&g).unwrap();
        assert_eq!(r, Rect::new(Point::new(40.0, 20.0), Point::new(60.0, 40.0)));
    }

    #[test]
    fn scattered_cells_use_per_axis_extremes() {
        let mut g = Grid::new(10, 10, 20.0);
        g.set_selected(1, 7, true);
        g.set_selected(6, 2, true);
        g.set_selected(3, 9, true);
        let r = resolve_bounds(&g).unwrap();
        assert_eq!(r, Rect::new(Point::new(20.0, 40.0), Point::new(140.0, 200.0)));
    }
}
