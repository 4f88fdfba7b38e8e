use lampgrid_geom::Rect;
use lampgrid_grid::{Grid, PointMask};

use crate::align::align_lamps;
use crate::bounds::resolve_bounds;
use crate::correct::correct_lamps;
use crate::coverage::{Footprint, evaluate_lamps};
use crate::spec::{Extents, LampSpec};
use crate::tiling::tile_lamps;
use crate::{Lamp, Stage};

/// Inputs every stage reads. Built once per run.
pub struct PlacementCtx<'a> {
    pub grid: &'a Grid,
    pub spec: &'a LampSpec,
    pub ext: Extents,
    /// Building bounding box.
    pub bounds: Rect,
    building: PointMask,
}

impl<'a> PlacementCtx<'a> {
    /// `None` when nothing is selected. One cell edge is one meter, so the
    /// grid's cell size is the meter-to-length-unit scale.
    pub fn new(grid: &'a Grid, spec: &'a LampSpec) -> Option<Self> {
        let bounds = match resolve_bounds(grid) {
            Ok(b) => b,
            Err(e) => {
                log::debug!(target: "pipeline", "{e}; no lamps");
                return None;
            }
        };
        Some(Self {
            grid,
            spec,
            ext: spec.extents(grid.cell_size),
            bounds,
            building: grid.building_mask(),
        })
    }

    #[inline]
    pub fn building(&self) -> &PointMask {
        &self.building
    }
}

/// The four placement stages. Override a stage to try a different heuristic
/// while keeping the rest of the pipeline.
pub trait PlacementStrategy {
    fn tile(&self, ctx: &PlacementCtx<'_>) -> Vec<Lamp> {
        tile_lamps(&ctx.bounds, &ctx.ext)
    }

    fn align(&self, ctx: &PlacementCtx<'_>, lamps: Vec<Lamp>) -> Vec<Lamp> {
        align_lamps(&ctx.bounds, &lamps, &ctx.ext)
    }

    fn evaluate(&self, ctx: &PlacementCtx<'_>, lamps: Vec<Lamp>) -> Vec<Lamp> {
        let footprint = Footprint::new(ctx.ext.light);
        evaluate_lamps(&lamps, ctx.building(), &footprint, ctx.spec)
    }

    fn correct(&self, ctx: &PlacementCtx<'_>, lamps: Vec<Lamp>) -> Vec<Lamp> {
        correct_lamps(ctx.grid, &lamps, &ctx.ext, ctx.spec.orientation)
    }

    /// Runs stages in order up to and including `last`.
    fn run(&self, grid: &Grid, spec: &LampSpec, last: Stage) -> Vec<Lamp> {
        let Some(ctx) = PlacementCtx::new(grid, spec) else {
            return Vec::new();
        };
        let mut lamps = self.tile(&ctx);
        if last >= Stage::Align {
            lamps = self.align(&ctx, lamps);
        }
        if last >= Stage::Evaluate {
            lamps = self.evaluate(&ctx, lamps);
        }
        if last >= Stage::Correct {
            lamps = self.correct(&ctx, lamps);
        }
        lamps
    }
}

/// Tile, center, filter by coverage, slide frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardPlacement;

impl PlacementStrategy for StandardPlacement {}
