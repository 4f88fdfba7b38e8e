use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use lampgrid_io::{PlacementReport, SceneConfig, report_to_json};
use lampgrid_lamps::{Orientation, PlacementStrategy, Stage, StandardPlacement};
use lampgrid_render::{SvgSurface, Viewport, draw_grid, draw_lamps};
use log::info;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StageArg {
    Tile,
    Align,
    Evaluate,
    Correct,
}

impl From<StageArg> for Stage {
    fn from(s: StageArg) -> Self {
        match s {
            StageArg::Tile => Stage::Tile,
            StageArg::Align => Stage::Align,
            StageArg::Evaluate => Stage::Evaluate,
            StageArg::Correct => Stage::Correct,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrientationArg {
    Horizontal,
    Vertical,
}

impl From<OrientationArg> for Orientation {
    fn from(o: OrientationArg) -> Self {
        match o {
            OrientationArg::Horizontal => Orientation::Horizontal,
            OrientationArg::Vertical => Orientation::Vertical,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Places lamps over a building area", long_about = None)]
struct Args {
    /// Scene config (TOML); built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Last pipeline stage to run
    #[arg(short, long, value_enum, default_value_t = StageArg::Correct)]
    stage: StageArg,

    /// Write the placement report as JSON; "-" for stdout
    #[arg(long)]
    json: Option<PathBuf>,

    /// Render grid and lamps to an SVG file
    #[arg(long)]
    svg: Option<PathBuf>,

    /// SVG pixels per length-unit
    #[arg(long, default_value_t = 1.0)]
    pixels_per_unit: f64,

    /// Override the configured lamp orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Override the configured coverage threshold (percent)
    #[arg(long)]
    threshold: Option<f64>,
}

fn write_output(path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
    if path.as_os_str() == "-" {
        let mut out = std::io::stdout().lock();
        out.write_all(contents.as_bytes())?;
        out.write_all(b"\n")?;
    } else {
        fs::write(path, contents)?;
        info!("wrote {}", path.display());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    log::debug!("{args:?}");

    if !(args.pixels_per_unit.is_finite() && args.pixels_per_unit > 0.0) {
        return Err(format!("pixels-per-unit must be positive, got {}", args.pixels_per_unit).into());
    }

    let mut cfg = match &args.config {
        Some(path) => SceneConfig::from_path(path)?,
        None => SceneConfig::default(),
    };
    if let Some(o) = args.orientation {
        cfg.lamp.orientation = o.into();
    }
    if let Some(t) = args.threshold {
        cfg.lamp.coverage_threshold = t;
    }
    cfg.validate()?;

    let grid = cfg.build_editor().snapshot();
    let stage = Stage::from(args.stage);
    let lamps = StandardPlacement.run(&grid, &cfg.lamp, stage);
    info!(
        "{} lamps after {} ({} moved)",
        lamps.len(),
        stage.as_str(),
        lamps.iter().filter(|l| l.moved).count()
    );

    let report = PlacementReport::new(stage, &grid, &cfg.lamp, &lamps);
    let json = report_to_json(&report)?;
    match (&args.json, &args.svg) {
        (Some(path), _) => write_output(path, &json)?,
        // Nothing requested: the report goes to stdout.
        (None, None) => write_output(Path::new("-"), &json)?,
        (None, Some(_)) => {}
    }

    if let Some(path) = &args.svg {
        let view = Viewport {
            pixels_per_unit: args.pixels_per_unit,
        };
        let (w, h) = view.grid_size(&grid);
        let mut surface = SvgSurface::new(w, h);
        draw_grid(&mut surface, &grid, &view);
        draw_lamps(&mut surface, &lamps, &cfg.lamp.extents(grid.cell_size), &view);
        write_output(path, &surface.finish())?;
    }
    Ok(())
}
