//! Lamp tiling, coverage filtering and frame correction over a cell grid.
#![forbid(unsafe_code)]

pub mod align;
pub mod bounds;
pub mod correct;
pub mod coverage;
mod lamp;
mod spec;
mod strategy;
pub mod tiling;

pub use bounds::{AreaError, resolve_bounds};
pub use coverage::Footprint;
pub use lamp::Lamp;
pub use spec::{Extents, LampSpec, Orientation, SpecError};
pub use strategy::{PlacementCtx, PlacementStrategy, StandardPlacement};

use lampgrid_grid::Grid;

/// Pipeline cut-off points, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Tile,
    Align,
    Evaluate,
    Correct,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Tile, Stage::Align, Stage::Evaluate, Stage::Correct];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Tile => "tile",
            Stage::Align => "align",
            Stage::Evaluate => "evaluate",
            Stage::Correct => "correct",
        }
    }
}

/// Step 1 only.
pub fn tile(grid: &Grid, spec: &LampSpec) -> Vec<Lamp> {
    StandardPlacement.run(grid, spec, Stage::Tile)
}

/// Steps 1 and 2.
pub fn align(grid: &Grid, spec: &LampSpec) -> Vec<Lamp> {
    StandardPlacement.run(grid, spec, Stage::Align)
}

/// Steps 1 to 3; surviving lamps carry their coverage.
pub fn evaluate_and_filter(grid: &Grid, spec: &LampSpec) -> Vec<Lamp> {
    StandardPlacement.run(grid, spec, Stage::Evaluate)
}

/// The full pipeline.
pub fn correct(grid: &Grid, spec: &LampSpec) -> Vec<Lamp> {
    StandardPlacement.run(grid, spec, Stage::Correct)
}

/// Per-lamp map/filter that keeps input order. Runs on the rayon pool with
/// the `parallel` feature.
#[cfg(feature = "parallel")]
pub(crate) fn filter_map_lamps<F>(lamps: &[Lamp], f: F) -> Vec<Lamp>
where
    F: Fn(&Lamp) -> Option<Lamp> + Sync + Send,
{
    use rayon::prelude::*;
    lamps.par_iter().filter_map(f).collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn filter_map_lamps<F>(lamps: &[Lamp], f: F) -> Vec<Lamp>
where
    F: Fn(&Lamp) -> Option<Lamp>,
{
    lamps.iter().filter_map(f).collect()
}

#[cfg(test)]
mod tests;
