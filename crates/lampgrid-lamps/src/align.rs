use lampgrid_geom::{Point, Rect};

use crate::Lamp;
use crate::spec::Extents;
use crate::tiling::tiling_bounds;

/// Translation that puts the tiling's center on the building box center.
pub fn centering_delta(building: &Rect, lamps: &[Lamp], ext: &Extents) -> Point {
    match tiling_bounds(lamps, ext) {
        Some(tiling) => building.center() - tiling.center(),
        None => Point::ZERO,
    }
}

/// Step 2: spread the step-1 overshoot evenly over both edges.
pub fn align_lamps(building: &Rect, lamps: &[Lamp], ext: &Extents) -> Vec<Lamp> {
    let delta = centering_delta(building, lamps, ext);
    log::debug!(target: "pipeline", "step2: shifting {} lamps by ({:.3}, {:.3})", lamps.len(), delta.x, delta.y);
    lamps.iter().map(|l| l.translated(delta)).collect()
}
