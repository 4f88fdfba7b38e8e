use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lampgrid_edit::SelectionEditor;
use lampgrid_grid::Grid;
use lampgrid_lamps::{LampSpec, SpecError};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing scene config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid lamp spec: {0}")]
    Spec(#[from] SpecError),
    #[error("invalid grid: {0}")]
    Grid(String),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridSection {
    pub width: usize,
    pub height: usize,
    /// Length-units per cell; also the meter-to-length-unit scale.
    pub cell_size: f64,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            cell_size: 20.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AreaSection {
    pub initial_width: usize,
    pub initial_height: usize,
    /// Cells toggled after the initial area is seeded.
    pub cells: Vec<[usize; 2]>,
}

impl Default for AreaSection {
    fn default() -> Self {
        Self {
            initial_width: 10,
            initial_height: 10,
            cells: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorSection {
    pub debounce_ms: u64,
}

impl Default for EditorSection {
    fn default() -> Self {
        Self {
            debounce_ms: lampgrid_edit::DEFAULT_DEBOUNCE.as_millis() as u64,
        }
    }
}

/// Everything needed to rebuild an editing session. Every section and field
/// is optional in the TOML source.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub grid: GridSection,
    pub area: AreaSection,
    pub lamp: LampSpec,
    pub editor: EditorSection,
}

impl SceneConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let cfg: SceneConfig = toml::from_str(toml_str)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_toml_str(&s)?;
        log::info!("loaded scene config from {}", path.display());
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.grid;
        if g.width == 0 || g.height == 0 {
            return Err(ConfigError::Grid(format!(
                "dimensions must be non-zero, got {}x{}",
                g.width, g.height
            )));
        }
        if !(g.cell_size.is_finite() && g.cell_size > 0.0) {
            return Err(ConfigError::Grid(format!(
                "cell_size must be positive, got {}",
                g.cell_size
            )));
        }
        if g.cell_size.fract() != 0.0 {
            // Coverage works on the integer lattice; cell edges fall between points.
            log::warn!("cell_size {} is not a whole number of length-units", g.cell_size);
        }
        self.lamp.validate()?;
        Ok(())
    }

    #[inline]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.editor.debounce_ms)
    }

    /// Fresh editing session: initial area seeded, listed cells toggled.
    pub fn build_editor(&self) -> SelectionEditor {
        let grid = Grid::new(self.grid.width, self.grid.height, self.grid.cell_size);
        let mut editor = SelectionEditor::new(grid, self.debounce());
        editor.seed_initial_area(self.area.initial_width, self.area.initial_height);
        let cells: Vec<(usize, usize)> = self.area.cells.iter().map(|&[x, y]| (x, y)).collect();
        editor.toggle_cells(&cells);
        editor
    }

    #[inline]
    pub fn build_grid(&self) -> Grid {
        self.build_editor().snapshot()
    }
}
