use lampgrid_grid::Grid;
use lampgrid_lamps::{Lamp, LampSpec, Stage};
use serde::{Deserialize, Serialize};

/// Serialized form of one lamp. Coordinates are `[x, y]` in length-units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LampRecord {
    pub light_origin: [f64; 2],
    pub frame_origin: [f64; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<f64>,
    #[serde(default)]
    pub moved: bool,
}

impl From<&Lamp> for LampRecord {
    fn from(l: &Lamp) -> Self {
        Self {
            light_origin: [l.light_origin.x, l.light_origin.y],
            frame_origin: [l.frame_origin.x, l.frame_origin.y],
            coverage: l.coverage,
            moved: l.moved,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSummary {
    pub cols: usize,
    pub rows: usize,
    pub cell_size: f64,
    pub selected: usize,
}

/// A placement run as written by the CLI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementReport {
    pub stage: String,
    pub grid: GridSummary,
    pub spec: LampSpec,
    pub lamps: Vec<LampRecord>,
}

impl PlacementReport {
    pub fn new(stage: Stage, grid: &Grid, spec: &LampSpec, lamps: &[Lamp]) -> Self {
        Self {
            stage: stage.as_str().to_string(),
            grid: GridSummary {
                cols: grid.cols,
                rows: grid.rows,
                cell_size: grid.cell_size,
                selected: grid.selected_count(),
            },
            spec: spec.clone(),
            lamps: lamps.iter().map(LampRecord::from).collect(),
        }
    }
}

pub fn lamps_to_json(lamps: &[Lamp]) -> Result<String, serde_json::Error> {
    let records: Vec<LampRecord> = lamps.iter().map(LampRecord::from).collect();
    serde_json::to_string_pretty(&records)
}

pub fn report_to_json(report: &PlacementReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
