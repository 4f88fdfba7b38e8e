use lampgrid_geom::Size;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which way the fixture's long axis runs on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

/// Fixture description, dimensions in meters. Missing fields deserialize to
/// the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LampSpec {
    pub frame_width: f64,
    pub frame_height: f64,
    pub light_width: f64,
    pub light_height: f64,
    pub orientation: Orientation,
    /// Minimum share of the light footprint over building area, 0..=100.
    pub coverage_threshold: f64,
}

impl Default for LampSpec {
    fn default() -> Self {
        Self {
            frame_width: 0.1,
            frame_height: 1.0,
            light_width: 1.0,
            light_height: 1.5,
            orientation: Orientation::Vertical,
            coverage_threshold: 60.0,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpecError {
    #[error("{field} must be a positive length, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("coverage threshold must be within 0..=100, got {0}")]
    Threshold(f64),
}

/// On-screen light and frame sizes in length-units, after the orientation swap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extents {
    pub light: Size,
    pub frame: Size,
}

impl Extents {
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.light.w > 0.0 && self.light.h > 0.0 && self.frame.w > 0.0 && self.frame.h > 0.0
    }
}

impl LampSpec {
    pub fn validate(&self) -> Result<(), SpecError> {
        for (field, value) in [
            ("frame_width", self.frame_width),
            ("frame_height", self.frame_height),
            ("light_width", self.light_width),
            ("light_height", self.light_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SpecError::NonPositive { field, value });
            }
        }
        if !(0.0..=100.0).contains(&self.coverage_threshold) {
            return Err(SpecError::Threshold(self.coverage_threshold));
        }
        Ok(())
    }

    /// Maps width/height onto the screen axes and scales meters to
    /// length-units. Horizontal fixtures swap both pairs.
    pub fn extents(&self, scale: f64) -> Extents {
        let (light, frame) = match self.orientation {
            Orientation::Vertical => (
                Size::new(self.light_width, self.light_height),
                Size::new(self.frame_width, self.frame_height),
            ),
            Orientation::Horizontal => (
                Size::new(self.light_height, self.light_width),
                Size::new(self.frame_height, self.frame_width),
            ),
        };
        Extents {
            light: Size::new(light.w * scale, light.h * scale),
            frame: Size::new(frame.w * scale, frame.h * scale),
        }
    }

    /// Whether a lamp with this coverage fraction is kept.
    #[inline]
    pub fn accepts(&self, coverage: f64) -> bool {
        coverage * 100.0 >= self.coverage_threshold
    }
}
