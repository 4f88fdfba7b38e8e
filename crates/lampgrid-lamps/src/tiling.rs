use lampgrid_geom::{Point, Rect};

use crate::Lamp;
use crate::spec::Extents;

/// Lamp counts along x and y needed to cover `bounds` with whole footprints.
pub fn tile_counts(bounds: &Rect, ext: &Extents) -> (usize, usize) {
    let in_row = (bounds.width() / ext.light.w).ceil().max(0.0) as usize;
    let in_column = (bounds.height() / ext.light.h).ceil().max(0.0) as usize;
    (in_row, in_column)
}

/// Step 1: a regular grid of light footprints starting at the top-left of
/// `bounds`, x index outer, y index inner. The last row and column
/// may overshoot the box; alignment and correction deal with that.
pub fn tile_lamps(bounds: &Rect, ext: &Extents) -> Vec<Lamp> {
    if !ext.is_positive() {
        log::warn!(target: "pipeline", "degenerate lamp extents {:?}; nothing tiled", ext);
        return Vec::new();
    }
    let (in_row, in_column) = tile_counts(bounds, ext);
    let mut lamps = Vec::with_capacity(in_row * in_column);
    for i in 0..in_row {
        for j in 0..in_column {
            let light = bounds.min + Point::new(i as f64 * ext.light.w, j as f64 * ext.light.h);
            lamps.push(Lamp::centered(light, ext));
        }
    }
    log::debug!(target: "pipeline", "step1: {}x{} lamps over {:?}", in_row, in_column, bounds);
    lamps
}

/// Box spanned by the light rectangles: min/max of light origins, the max
/// corner extended by one footprint.
pub fn tiling_bounds(lamps: &[Lamp], ext: &Extents) -> Option<Rect> {
    let first = lamps.first()?;
    let (mut lo, mut hi) = (first.light_origin, first.light_origin);
    for l in &lamps[1..] {
        lo = lo.min(l.light_origin);
        hi = hi.max(l.light_origin);
    }
    Some(Rect::new(lo, hi + ext.light.as_point()))
}
