use lampgrid_geom::Size;
use lampgrid_grid::PointMask;

use crate::{Lamp, LampSpec, filter_map_lamps};

// Slack for lengths like 0.7 * 20 that land a hair off an integer.
pub(crate) const LATTICE_EPS: f64 = 1e-9;

/// Number of unit steps that fit in `len`; the lattice span is `0..=steps`.
#[inline]
pub fn lattice_steps(len: f64) -> i64 {
    (len + LATTICE_EPS).floor().max(0.0) as i64
}

#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Integer points of a light rectangle relative to its own top-left corner.
/// Built once per spec and shared by every lamp.
#[derive(Clone, Debug)]
pub struct Footprint {
    points: Vec<(i64, i64)>,
}

impl Footprint {
    pub fn new(light: Size) -> Self {
        let (w, h) = (lattice_steps(light.w), lattice_steps(light.h));
        let mut points = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
        for x in 0..=w {
            for y in 0..=h {
                points.push((x, y));
            }
        }
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points landing on the mask once shifted to `at`.
    pub fn covered(&self, mask: &PointMask, at: (i64, i64)) -> usize {
        self.points
            .iter()
            .filter(|(x, y)| mask.contains(at.0 + x, at.1 + y))
            .count()
    }

    /// Covered share, rounded to two decimals. The light origin is snapped to
    /// the nearest lattice point first.
    pub fn coverage(&self, mask: &PointMask, lamp: &Lamp) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        let hit = self.covered(mask, lamp.light_origin.lattice());
        round2(hit as f64 / self.points.len() as f64)
    }
}

/// Step 3: attach coverage to every lamp and drop the ones under
/// `LampSpec::coverage_threshold`.
pub fn evaluate_lamps(
    lamps: &[Lamp],
    building: &PointMask,
    footprint: &Footprint,
    spec: &LampSpec,
) -> Vec<Lamp> {
    let kept = filter_map_lamps(lamps, |lamp| {
        let coverage = footprint.coverage(building, lamp);
        if spec.accepts(coverage) {
            Some(lamp.with_coverage(Some(coverage)))
        } else {
            log::trace!(target: "pipeline", "step3: dropped lamp at {:?} ({:.2})", lamp.light_origin, coverage);
            None
        }
    });
    log::debug!(
        target: "pipeline",
        "step3: kept {}/{} lamps at threshold {}%",
        kept.len(),
        lamps.len(),
        spec.coverage_threshold
    );
    kept
}
