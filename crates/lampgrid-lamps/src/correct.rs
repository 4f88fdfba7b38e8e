use lampgrid_geom::Point;
use lampgrid_grid::{Cell, Grid, PointMask};

use crate::coverage::lattice_steps;
use crate::spec::{Extents, Orientation};
use crate::{Lamp, filter_map_lamps};

/// Whether the cell counts as lit by `lamp`: its top-left corner lies in the
/// light rectangle, edges inclusive. Cells that only overlap the rectangle
/// with their far side are not counted.
#[inline]
pub fn lights_cell(lamp: &Lamp, ext: &Extents, cell: &Cell) -> bool {
    lamp.light_rect(ext).contains(cell.origin)
}

/// Occupancy of the building cells this lamp lights.
pub fn lit_cells_mask(grid: &Grid, lamp: &Lamp, ext: &Extents) -> PointMask {
    let mut mask = PointMask::for_grid(grid);
    for c in grid.building_area().filter(|c| lights_cell(lamp, ext, c)) {
        mask.insert_cell(c);
    }
    mask
}

/// Coordinates along the frame's long edge that fall outside `mask`, in scan
/// order. Vertical frames are walked down their left edge (y values),
/// horizontal frames right along their top edge (x values).
pub fn frame_edge_gaps(lamp: &Lamp, ext: &Extents, orientation: Orientation, mask: &PointMask) -> Vec<i64> {
    let (fx, fy) = lamp.frame_origin.lattice();
    let mut gaps = match orientation {
        Orientation::Vertical => (0..=lattice_steps(ext.frame.h))
            .map(|k| fy + k)
            .filter(|&y| !mask.contains(fx, y))
            .collect::<Vec<_>>(),
        Orientation::Horizontal => (0..=lattice_steps(ext.frame.w))
            .map(|k| fx + k)
            .filter(|&x| !mask.contains(x, fy))
            .collect::<Vec<_>>(),
    };
    gaps.dedup();
    gaps
}

/// Signed slide along the scan axis, or `None` if the frame edge is fully
/// inside. A gap at the leading edge pushes forward, anything else pulls back.
pub fn correction_offset(lamp: &Lamp, orientation: Orientation, gaps: &[i64]) -> Option<f64> {
    let first = *gaps.first()?;
    let (fx, fy) = lamp.frame_origin.lattice();
    let edge = match orientation {
        Orientation::Vertical => fy,
        Orientation::Horizontal => fx,
    };
    let offset = gaps.len() as f64;
    Some(if first <= edge { offset } else { -offset })
}

/// Step 4 for a single lamp. The coverage value is dropped either way.
pub fn correct_lamp(grid: &Grid, lamp: &Lamp, ext: &Extents, orientation: Orientation) -> Lamp {
    let cleared = lamp.with_coverage(None);
    if lamp.coverage == Some(1.0) {
        return cleared;
    }
    let mask = lit_cells_mask(grid, lamp, ext);
    let gaps = frame_edge_gaps(lamp, ext, orientation, &mask);
    let Some(offset) = correction_offset(lamp, orientation, &gaps) else {
        return cleared;
    };
    let by = match orientation {
        Orientation::Vertical => Point::new(0.0, offset),
        Orientation::Horizontal => Point::new(offset, 0.0),
    };
    log::trace!(target: "pipeline", "step4: lamp at {:?} slides by {}", lamp.light_origin, offset);
    Lamp {
        moved: true,
        ..cleared.translated(by)
    }
}

/// Step 4: slide partially covering lamps back toward the building area.
pub fn correct_lamps(grid: &Grid, lamps: &[Lamp], ext: &Extents, orientation: Orientation) -> Vec<Lamp> {
    let out = filter_map_lamps(lamps, |lamp| Some(correct_lamp(grid, lamp, ext, orientation)));
    log::debug!(
        target: "pipeline",
        "step4: moved {}/{} lamps",
        out.iter().filter(|l| l.moved).count(),
        out.len()
    );
    out
}
