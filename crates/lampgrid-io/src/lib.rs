//! Scene configuration loading and lamp export.
#![forbid(unsafe_code)]

mod config;
mod export;

pub use config::{AreaSection, ConfigError, EditorSection, GridSection, SceneConfig};
pub use export::{GridSummary, LampRecord, PlacementReport, lamps_to_json, report_to_json};
